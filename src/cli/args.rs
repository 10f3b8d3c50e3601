/// CLI argument definitions via clap derive.
use clap::{Parser, ValueEnum};

use crate::query::RawQuery;

/// Default service address.
pub const DEFAULT_BASE_URL: &str = "https://cheat.sh";

/// chtq — build a cheat.sh query and print the answer.
///
/// Enumerated values (`--cmd`, `--options`, `--search_opts`) are checked by
/// chtq itself so that each kind of invalid input gets its own exit code.
#[derive(Debug, Parser)]
#[command(
    name = "chtq",
    about = "Build a cheat.sh query and print the answer",
    version,
    arg_required_else_help = true,
    after_help = "Exit codes: 0 ok, 2 usage, 3 missing topic, 4 conflicting \
                  refinements, 5 invalid value, 6 transport failure"
)]
pub struct Cli {
    /// The topic to look up (e.g. "python", "git"). Whitespace separates words.
    pub topic: String,

    /// Search string within the topic.
    #[arg(short = 's', long, value_name = "TEXT")]
    pub subtopic: Option<String>,

    /// Keywords to search for, in order.
    #[arg(short = 'k', long = "kwd", value_name = "WORD", num_args = 0..)]
    pub kwd: Option<Vec<String>>,

    /// Special command: help, list, post, bash-completion, styles,
    /// styles-demo, random.
    #[arg(short = 'c', long, value_name = "COMMAND")]
    pub cmd: Option<String>,

    /// Display options: q (quiet), T (text only), Q (code only).
    #[arg(short = 'o', long, value_name = "OPT", num_args = 0..)]
    pub options: Option<Vec<String>>,

    /// Color style name (see `--cmd styles`).
    #[arg(long, value_name = "STYLE")]
    pub style: Option<String>,

    /// Search options: b (word boundaries), i (case-insensitive), r (recursive).
    #[arg(long = "search_opts", value_name = "OPT", num_args = 1..)]
    pub search_opts: Option<Vec<String>>,

    /// Service base address.
    #[arg(long, env = "CHTQ_BASE_URL", value_name = "URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Request timeout in seconds.
    #[arg(
        long,
        env = "CHTQ_TIMEOUT",
        value_name = "SECS",
        default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Print the request URL instead of fetching it.
    #[arg(long)]
    pub dry_run: bool,

    /// Format for dry-run reports and errors. Auto-detects: text when TTY,
    /// json when piped. The fetched cheat sheet is always printed raw.
    #[arg(long, value_name = "FORMAT", default_value = "auto")]
    pub output: OutputFormat,

    /// Shorthand for --output json.
    #[arg(long, conflicts_with = "output")]
    pub json: bool,

    /// Log request details and timings to stderr.
    #[arg(long)]
    pub debug: bool,
}

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Auto-detect: text when stdout is a TTY, json when piped.
    #[default]
    Auto,
    /// Plain text: the URL for dry runs, `Error: ...` for errors.
    Text,
    /// Segment table for dry runs.
    Table,
    /// Pretty-printed JSON.
    Json,
}

impl Cli {
    /// The query fields, unvalidated.
    #[must_use]
    pub fn raw_query(&self) -> RawQuery {
        RawQuery {
            topic: Some(self.topic.clone()),
            subtopic: self.subtopic.clone(),
            keywords: self.kwd.clone(),
            command: self.cmd.clone(),
            display_options: self.options.clone(),
            style: self.style.clone(),
            search_options: self.search_opts.clone(),
        }
    }
}
