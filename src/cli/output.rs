/// Output formatting: raw body relay, dry-run reports, errors. TTY detection.
use std::io::{self, IsTerminal, Write};

use comfy_table::{Table, presets::UTF8_BORDERS_ONLY};
use serde::Serialize;

use super::args::OutputFormat;
use crate::types::{DryRunOutput, ErrorOutput};

/// Resolve the effective output format, handling `--json` flag and TTY auto-detection.
#[must_use]
pub fn resolve_format(fmt: OutputFormat, json_flag: bool) -> OutputFormat {
    if json_flag {
        return OutputFormat::Json;
    }
    if fmt == OutputFormat::Auto {
        if io::stdout().is_terminal() {
            OutputFormat::Text
        } else {
            OutputFormat::Json
        }
    } else {
        fmt
    }
}

/// Output context passed to all formatters.
pub struct OutputCtx {
    pub format: OutputFormat,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(fmt: OutputFormat, json_flag: bool) -> Self {
        Self {
            format: resolve_format(fmt, json_flag),
        }
    }
}

// --- Fetched body ---

/// Relay the service's answer to `out` byte for byte.
///
/// # Errors
///
/// Returns the underlying I/O error if writing fails.
pub fn write_body(out: &mut impl Write, body: &[u8]) -> io::Result<()> {
    out.write_all(body)?;
    out.flush()
}

// --- Dry run ---

/// Write a dry-run report to `out`.
///
/// # Errors
///
/// Returns the underlying I/O error if writing fails.
pub fn write_dry_run(out: &mut impl Write, report: &DryRunOutput, ctx: &OutputCtx) -> io::Result<()> {
    match ctx.format {
        OutputFormat::Json => write_json(out, report),
        OutputFormat::Table => writeln!(out, "{}", dry_run_table(report)),
        OutputFormat::Text | OutputFormat::Auto => writeln!(out, "{}", report.url),
    }
}

fn dry_run_table(report: &DryRunOutput) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(["SEGMENT", "TEXT"]);
    for seg in &report.segments {
        table.add_row([seg.name.as_str(), seg.text.as_str()]);
    }
    table.add_row(["url", report.url.as_str()]);
    table
}

// --- Error output ---

/// Write a structured error to stderr.
pub fn write_error(err: &ErrorOutput, format: OutputFormat, json_flag: bool) {
    let fmt = resolve_format(format, json_flag);
    let stderr = io::stderr();
    let mut out = stderr.lock();
    match fmt {
        OutputFormat::Json => {
            let _ = write_json(&mut out, err);
        }
        _ => {
            let _ = writeln!(out, "Error: {}", err.error.message);
            if let (Some(field), Some(legal)) = (&err.error.field, &err.error.legal) {
                let _ = writeln!(out, "  Valid values for --{field}: {}", legal.join(", "));
            }
        }
    }
}

// --- Debug timer ---

/// A RAII timer that logs elapsed milliseconds on drop.
///
/// Silent unless debug logging is enabled.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
}

impl DebugTimer {
    /// Start a named timer.
    #[must_use]
    pub fn start(label: &'static str) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        let ms = self.start.elapsed().as_secs_f64() * 1000.0;
        log::debug!("{}: {ms:.2}ms", self.label);
    }
}

// --- Generic JSON helper ---

fn write_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> io::Result<()> {
    let s = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
    writeln!(out, "{s}")
}
