//! Error types for the mechanics engine.

/// Errors that can occur during mechanics operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MechError {
    /// A dice expression could not be parsed.
    #[error("invalid dice notation: \"{0}\"")]
    InvalidDice(String),

    /// A weighted roll was requested on an empty list.
    #[error("cannot roll on an empty table")]
    EmptyTable,
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
