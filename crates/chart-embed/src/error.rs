// File: crates/chart-embed/src/error.rs
// Summary: Error type covering encoder misuse and serialization failures.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// A variant encoder received a value outside its accepted kind set.
    #[error("unsupported value type: expected {expected}, found {found}")]
    UnsupportedType {
        expected: &'static str,
        found: &'static str,
    },

    /// The padding encoder was handed no value at all.
    #[error("padding value is required but was not provided")]
    MissingPadding,

    /// Structured padding with no members set has no representable output.
    #[error("padding has neither a uniform value nor any object members")]
    EmptyPadding,

    /// A string value contained one of the private-use code points
    /// (U+E000/U+E001) the serializer reserves to carry raw code through
    /// the JSON pass.
    #[error("string value contains a reserved code point (U+E000 or U+E001)")]
    ReservedCodePoint,

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
