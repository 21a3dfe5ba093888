//! Error types for JSON encoding and decoding.

use thiserror::Error;

/// Result alias used by the JSON helpers.
pub type Result<T> = std::result::Result<T, JsonError>;

/// Failures from [`encode`](crate::encode) and the decode helpers.
#[derive(Debug, Error)]
pub enum JsonError {
    /// The value could not be serialized (e.g. a map with non-string keys).
    #[error("Encode error: {0}")]
    Encode(#[source] serde_json::Error),

    /// The input is not valid JSON.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// The input is valid JSON but does not describe the requested type.
    #[error("JSON does not describe a {type_name}: {source}")]
    Shape {
        /// Name of the type decoding was asked for.
        type_name: &'static str,
        /// The underlying deserialization failure.
        #[source]
        source: serde_json::Error,
    },
}
