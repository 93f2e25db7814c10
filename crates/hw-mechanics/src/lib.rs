//! Randomness primitives for Hoardwright.
//!
//! Provides the [`RandomProvider`] capability, dice notation parsing and
//! rolling, and weighted selection. Every roll goes through a provider, so
//! results are reproducible from a seed or a fixed sequence.

pub mod dice;
pub mod error;
pub mod random;
pub mod weighted;

pub use dice::{DiceRoll, Die, RollResult};
pub use error::{MechError, MechResult};
pub use random::{FixedRandom, RandomProvider, SeededRandom, SequenceRandom};
pub use weighted::{Weighted, pick, roll_weighted};
