/// Top-level errors for one `chtq` invocation.
use thiserror::Error;

use crate::fetch::FetchError;
use crate::query::QueryError;

/// Everything that can end an invocation unsuccessfully.
#[derive(Debug, Error)]
pub enum AppError {
    /// The arguments did not form a valid query. No request was made.
    #[error(transparent)]
    Query(#[from] QueryError),

    /// The request for `url` failed.
    #[error("Fetching {url} failed: {source}")]
    Transport {
        /// The full URL that was attempted.
        url: String,
        #[source]
        source: FetchError,
    },

    /// Writing to stdout failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Exit code mapping for `AppError` variants.
impl AppError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Query(q) => q.exit_code(),
            Self::Transport { .. } => 6,
            Self::Output(_) => 1,
        }
    }
}
