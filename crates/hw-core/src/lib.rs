//! Core types for Hoardwright: encounter tables, creatures, treasure
//! reference data, and the repositories that serve them.
//!
//! This crate holds data only. Rolling and resolution live in
//! `hw-mechanics` and `hw-encounter`.

/// The situation an encounter is generated for.
pub mod context;
/// Creature stat blocks.
pub mod creature;
/// Error types used throughout the crate.
pub mod error;
/// Repository traits and the in-memory implementation.
pub mod repository;
/// Encounter tables and their entries.
pub mod table;
/// Treasure reference tables.
pub mod treasure;

/// Re-export context types.
pub use context::{GenerationContext, Terrain, TimeOfDay, region_title};
/// Re-export the creature type.
pub use creature::Creature;
/// Re-export error types.
pub use error::{HwError, HwResult};
/// Re-export repository types.
pub use repository::{
    CreatureRepository, InMemoryRepository, TableRepository, TreasureTableRepository,
};
/// Re-export table types.
pub use table::{EntryType, RegionTable, TableEntry, TableRef};
/// Re-export treasure reference types.
pub use treasure::TreasureTables;
