//! Error types for encounter and treasure generation.

use thiserror::Error;

/// Result type for generation operations.
pub type GenResult<T> = Result<T, GenError>;

/// Errors that can occur while generating an encounter or hoard.
#[derive(Debug, Error)]
pub enum GenError {
    /// A table, creature, or treasure dataset could not be fetched.
    #[error(transparent)]
    Data(#[from] hw_core::HwError),

    /// A dice expression in the data was malformed.
    #[error(transparent)]
    Mechanics(#[from] hw_mechanics::MechError),

    /// No entry of a table covers the rolled value.
    #[error("no entry in table \"{table}\" matches roll {roll}")]
    NoMatchingEntry {
        /// The table rolled on.
        table: String,
        /// The value that matched nothing.
        roll: i32,
    },

    /// A table entry lists no targets to pick from.
    #[error("entry {min}-{max} of table \"{table}\" has an empty reference list")]
    EmptyReference {
        /// The table holding the entry.
        table: String,
        /// Entry lower bound.
        min: i32,
        /// Entry upper bound.
        max: i32,
    },

    /// A treasure code string was empty.
    #[error("invalid treasure code: {0}")]
    InvalidTreasureCode(String),

    /// Table resolution went deeper than the configured limit.
    #[error("table resolution exceeded depth {depth}: {}", .chain.join(" -> "))]
    CycleDetected {
        /// The configured depth limit.
        depth: usize,
        /// Tables visited, outermost first.
        chain: Vec<String>,
    },
}
