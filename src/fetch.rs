/// Outbound retrieval of a cheat sheet.
use std::time::Duration;

use thiserror::Error;

/// Sent so the service answers with terminal text instead of an HTML page.
const USER_AGENT: &str = concat!("curl/8.5.0 chtq/", env!("CARGO_PKG_VERSION"));

/// Transport-level failures. Classification belongs to this layer; nothing
/// here is retried.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, TLS, timeout or redirect failure.
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("server returned HTTP {status}")]
    Status {
        /// The HTTP status code.
        status: u16,
    },

    /// The response body could not be read.
    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),
}

/// Something that can retrieve a URL's body.
pub trait Fetch {
    /// Retrieve `url` and return the raw body bytes.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` when the request cannot complete or the status is
    /// not a success.
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// Blocking HTTP GET over `reqwest`.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    /// Build a client with the given overall request timeout.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Request` if the TLS backend cannot be initialized.
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(FetchError::Request)?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        log::debug!("GET {url}");
        let response = self.client.get(url).send().map_err(FetchError::Request)?;

        let status = response.status();
        log::debug!("HTTP {status} from {url}");
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().map_err(FetchError::Body)?;
        log::debug!("received {} bytes", body.len());
        Ok(body.to_vec())
    }
}

/// Join the base address and the query suffix, dropping a trailing `/` from
/// the base so the suffix's leading `/` is not doubled.
#[must_use]
pub fn request_url(base: &str, query: &str) -> String {
    format!("{}{query}", base.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_url_plain_base() {
        assert_eq!(request_url("https://cheat.sh", "/git/:list"), "https://cheat.sh/git/:list");
    }

    #[test]
    fn test_request_url_trailing_slash() {
        assert_eq!(request_url("https://cheat.sh//", "/rust"), "https://cheat.sh/rust");
    }

    #[test]
    fn test_status_error_message() {
        let err = FetchError::Status { status: 404 };
        assert_eq!(err.to_string(), "server returned HTTP 404");
    }
}
