//! Encounter and treasure generation.
//!
//! Resolves weighted encounter tables down to creatures or text, rolls group
//! size and lair status, and turns hoard codes such as `"C4 + R4 + M1"` into
//! coins, gems, art objects and magic items. All randomness comes from a
//! caller-supplied [`hw_mechanics::RandomProvider`].

pub mod config;
pub mod encounter;
pub mod error;
pub mod generator;
pub mod result;
pub mod treasure;

#[cfg(test)]
mod fixtures;

pub use config::GeneratorConfig;
pub use encounter::{CreatureEncounter, Encounter, Surprise};
pub use error::{GenError, GenResult};
pub use generator::{EncounterGenerator, LAIR_CHANCE};
pub use result::EncounterResult;
pub use treasure::{RolledTreasure, TreasureGenerator, TreasureSpec, parse_treasure_code};
