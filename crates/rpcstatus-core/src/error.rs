//! Error types for the canonical code table

use thiserror::Error;

use crate::Code;

/// Code table errors
///
/// `DuplicateValue` and `NonContiguous` are table-authoring defects: the
/// process-wide registry refuses to start when it sees one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Code value duplication between {first} & {second} (value {value})")]
    DuplicateValue { value: i32, first: Code, second: Code },

    #[error("Code table is not contiguous: expected value {expected}, got {actual}")]
    NonContiguous { expected: i32, actual: i32 },

    #[error("Unknown code value: {0}")]
    UnknownValue(i32),

    #[error("Unknown code name: {0}")]
    UnknownName(String),
}

/// Result type for code table operations
pub type RegistryResult<T> = Result<T, RegistryError>;
