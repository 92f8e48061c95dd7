//! Engine error types
//!
//! Parse errors are the strict side of the engine's two error regimes:
//! the persisted expression is untrusted and the parser is the last line
//! of defense, so every structural anomaly is a typed, propagated error.
//! Evaluation has no error type at all; it only returns booleans.

use thiserror::Error;

/// Expression parse error
#[derive(Error, Debug)]
pub enum ParseError {
    /// JSON decode error
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// Operator name not present in the registry
    #[error("unknown operator: {name}")]
    UnknownOperator { name: String },

    /// Structurally invalid expression node
    #[error("malformed expression node: {reason}")]
    MalformedNode { reason: String },

    /// Composite operator used with a key other than the reserved `content`
    #[error("{operator} condition does not support key {key}")]
    InvalidKeyForComposite { operator: String, key: String },

    /// Expression tree nesting exceeds the parser limit
    #[error("expression nesting exceeds {limit} levels")]
    DepthExceeded { limit: usize },

    /// Child parse error, wrapped with the parent composite's operator name
    #[error("{operator} condition parse error: {source}")]
    Composite {
        operator: String,
        #[source]
        source: Box<ParseError>,
    },
}

/// Result type for parser operations
pub type Result<T> = std::result::Result<T, ParseError>;
