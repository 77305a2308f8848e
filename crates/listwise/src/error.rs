use thiserror::Error as ThisError;

///
/// Error
///
/// Shared error type for the resolution and configuration boundaries.
///
/// `FieldNotFound` is recovered inside the shaping pipeline (see
/// `SortPolicy`); it only surfaces from direct resolution calls.
///

#[remain::sorted]
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum Error {
    /// A field path segment did not resolve on the record it was sought on.
    #[error("no field `{segment}` on record `{record}`")]
    FieldNotFound {
        record: &'static str,
        segment: String,
    },

    /// Malformed list options at the configuration boundary.
    #[error("invalid list options: {message}")]
    InvalidOptions { message: String },
}

impl Error {
    pub(crate) fn field_not_found(record: &'static str, segment: impl Into<String>) -> Self {
        Self::FieldNotFound {
            record,
            segment: segment.into(),
        }
    }

    pub(crate) fn invalid_options(message: impl Into<String>) -> Self {
        Self::InvalidOptions {
            message: message.into(),
        }
    }
}
