//! Label-parse error types.
//!
//! The component crates expose fixed vocabularies (Bloom taxonomy levels,
//! question types) as enums with `FromStr`. Parsing an unrecognized label
//! is the only failure the library reports as an error; "not found" and
//! "out of range" conditions are signalled with `Option`/`bool` returns.

use thiserror::Error;

/// Errors from parsing fixed-vocabulary labels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelError {
    /// The string is not one of the six Bloom taxonomy levels.
    #[error("unknown bloom level: {0}")]
    UnknownBloomLevel(String),

    /// The string is not a recognized question type.
    #[error("unknown question type: {0}")]
    UnknownQuestionType(String),
}
