//! Unified error type exposed by **`strictschema-core`**.
//!
//! The engine itself only ever produces [`SchemaError::UnsupportedType`] and
//! [`SchemaError::CircularRef`]; the remaining variants belong to the thin
//! entry-point layer in [`crate::generate`]. Every intermediate step returns
//! its error unchanged to the caller — the first failure anywhere in the
//! traversal aborts the whole conversion and no partial schema is returned.

use thiserror::Error;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, SchemaError>;

#[derive(Debug, Error)]
pub enum SchemaError {
    /// The type graph contains a kind the strict dialect cannot express.
    /// Maps and dictionaries land here: strict-mode object schemas must
    /// enumerate their properties, which an open-ended map cannot do.
    #[error("unsupported type for JSON schema")]
    UnsupportedType,

    /// Either a record is being expanded while an ancestor expansion of the
    /// same record is still open, or the configured maximum nesting depth
    /// was exhausted before the type graph bottomed out into primitives.
    /// The two causes are deliberately not distinguished; callers that set
    /// a very small depth rely on this variant to detect it.
    #[error("circular reference detected")]
    CircularRef,

    /// The root shape handed to [`crate::generate::generate_schema`] does
    /// not resolve to a record after indirection stripping.
    #[error("schema root must describe a record type")]
    InvalidRoot,

    /// Marshaling the finished schema into a JSON string failed. Only
    /// reachable through the `*_json` convenience functions.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
