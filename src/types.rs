/// Serializable output types for dry-run reports and errors.
///
/// These are what gets written to stdout/stderr in JSON mode. They are
/// decoupled from the internal `QueryModel` / `AppError` types.
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::fetch::FetchError;
use crate::query::{QueryError, Segment};

/// One rendered query segment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentOutput {
    /// Segment name (e.g., "keywords").
    pub name: String,
    /// Rendered text, empty when absent.
    pub text: String,
}

impl From<&Segment> for SegmentOutput {
    fn from(seg: &Segment) -> Self {
        Self {
            name: seg.name.to_owned(),
            text: seg.text.clone(),
        }
    }
}

/// Result of `--dry-run`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DryRunOutput {
    /// Full request URL that would be fetched.
    pub url: String,
    /// Path+query suffix alone.
    pub query: String,
    /// All seven segments in wire order.
    pub segments: Vec<SegmentOutput>,
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (snake_case).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Offending field, for invalid values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Rejected values, for invalid values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected: Option<Vec<String>>,
    /// Legal values, for invalid values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal: Option<Vec<String>>,
    /// Conflicting fields, for mutual exclusivity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
    /// HTTP status, for non-success responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl ErrorOutput {
    /// Construct from an `AppError`.
    #[must_use]
    pub fn from_app_error(err: &AppError) -> Self {
        let mut detail = ErrorDetail {
            code: String::new(),
            message: err.to_string(),
            field: None,
            rejected: None,
            legal: None,
            fields: None,
            status: None,
        };

        let code = match err {
            AppError::Query(QueryError::MissingTopic) => "missing_topic".to_owned(),
            AppError::Query(QueryError::MutualExclusivity { fields, .. }) => {
                detail.fields = Some(to_owned_all(fields));
                "mutual_exclusivity".to_owned()
            }
            AppError::Query(QueryError::InvalidEnumValue {
                field,
                rejected,
                legal,
            }) => {
                detail.field = Some((*field).to_owned());
                detail.rejected = Some(rejected.clone());
                detail.legal = Some(to_owned_all(legal));
                "invalid_value".to_owned()
            }
            AppError::Transport { source, .. } => {
                if let FetchError::Status { status } = source {
                    detail.status = Some(*status);
                }
                "transport_error".to_owned()
            }
            AppError::Output(_) => "output_error".to_owned(),
        };
        detail.code = code;

        Self {
            ok: false,
            error: detail,
        }
    }
}

fn to_owned_all(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| (*s).to_owned()).collect()
}
