/// The one command: validate, build, fetch, relay.
use std::io::{self, Write};
use std::time::Duration;

use crate::cli::output::{DebugTimer, write_body, write_dry_run};
use crate::cli::{Cli, OutputCtx};
use crate::error::AppError;
use crate::fetch::{Fetch, HttpFetcher, request_url};
use crate::query::{QueryError, QueryModel, RawQuery, build, segments, validate};
use crate::types::{DryRunOutput, SegmentOutput};

/// A validated query together with the URL it maps to.
#[derive(Debug, Clone)]
pub struct Prepared {
    pub model: QueryModel,
    /// Path+query suffix.
    pub query: String,
    /// `base_url` + `query`.
    pub url: String,
}

/// Validate `raw` and build the request URL against `base_url`.
///
/// # Errors
///
/// Returns `QueryError` if the raw query is invalid.
pub fn prepare(raw: RawQuery, base_url: &str) -> Result<Prepared, QueryError> {
    let _t = DebugTimer::start("validate+build");
    let model = validate(raw)?;
    let query = build(&model);
    let url = request_url(base_url, &query);
    log::debug!("query {query:?} -> {url}");
    Ok(Prepared { model, query, url })
}

/// Fetch `prepared.url` and relay the body to `out` unmodified.
///
/// # Errors
///
/// Returns `AppError::Transport` (carrying the URL) if the fetch fails, or
/// `AppError::Output` if writing fails.
pub fn fetch_into(prepared: &Prepared, fetcher: &impl Fetch, out: &mut impl Write) -> Result<(), AppError> {
    let body = {
        let _t = DebugTimer::start("fetch");
        fetcher
            .fetch(&prepared.url)
            .map_err(|source| AppError::Transport {
                url: prepared.url.clone(),
                source,
            })?
    };
    write_body(out, &body)?;
    Ok(())
}

/// Describe `prepared` without fetching it.
#[must_use]
pub fn dry_run_report(prepared: &Prepared) -> DryRunOutput {
    DryRunOutput {
        url: prepared.url.clone(),
        query: prepared.query.clone(),
        segments: segments(&prepared.model).iter().map(SegmentOutput::from).collect(),
    }
}

/// Run `chtq`.
///
/// # Errors
///
/// Returns `AppError` on invalid input, transport failure, or output failure.
pub fn run(cli: &Cli, ctx: &OutputCtx) -> Result<(), AppError> {
    let prepared = prepare(cli.raw_query(), &cli.base_url)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.dry_run {
        write_dry_run(&mut out, &dry_run_report(&prepared), ctx)?;
        return Ok(());
    }

    let fetcher = HttpFetcher::new(Duration::from_secs(cli.timeout)).map_err(|source| {
        AppError::Transport {
            url: prepared.url.clone(),
            source,
        }
    })?;
    fetch_into(&prepared, &fetcher, &mut out)
}
