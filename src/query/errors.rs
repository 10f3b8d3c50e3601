/// Errors from query validation.
use thiserror::Error;

/// Reasons a raw query cannot become a [`QueryModel`](super::QueryModel).
///
/// All of these are detected before any network activity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Topic absent, or nothing left after whitespace normalization.
    #[error("A topic is required")]
    MissingTopic,

    /// More than one of subtopic, keywords and command was supplied.
    #[error("Only one of subtopic, keywords or cmd may be given, got {count}: {}", fields.join(", "))]
    MutualExclusivity {
        /// CLI names of the supplied fields, in fixed order.
        fields: Vec<&'static str>,
        /// How many were supplied.
        count: usize,
    },

    /// A value outside the field's closed set.
    #[error(
        "Invalid value(s) for '{field}': {}. Expected one of: {}",
        rejected.join(", "),
        legal.join(", ")
    )]
    InvalidEnumValue {
        /// CLI name of the field.
        field: &'static str,
        /// Every rejected value, in caller order.
        rejected: Vec<String>,
        /// The full legal set.
        legal: Vec<&'static str>,
    },
}

/// Exit code mapping for `QueryError` variants.
impl QueryError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingTopic => 3,
            Self::MutualExclusivity { .. } => 4,
            Self::InvalidEnumValue { .. } => 5,
        }
    }
}
