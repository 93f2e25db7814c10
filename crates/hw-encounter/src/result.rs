//! The leaf a table resolution ends in.

use hw_core::Creature;
use serde::Serialize;

use crate::treasure::RolledTreasure;

/// Outcome of resolving a table down to a leaf.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum EncounterResult {
    /// A group of creatures.
    Creature {
        /// The creature's stat block.
        creature: Creature,
        /// How many appear, after the lair multiplier.
        count: u32,
        /// Display name.
        name: String,
        /// Whether the group was met in its lair.
        is_lair: bool,
        /// The hoard, rolled only for lairs.
        #[serde(skip_serializing_if = "Option::is_none")]
        treasure: Option<RolledTreasure>,
        /// Free-text items carried regardless of lair status.
        #[serde(skip_serializing_if = "Option::is_none")]
        possessions: Option<String>,
    },
    /// A non-creature result such as a landmark or event.
    Text {
        /// Short name.
        name: String,
        /// Description; the name when the table gave none.
        description: String,
    },
}

impl EncounterResult {
    /// The result's display name.
    pub fn name(&self) -> &str {
        match self {
            Self::Creature { name, .. } | Self::Text { name, .. } => name,
        }
    }

    /// Returns true for a creature met in its lair.
    pub fn is_lair(&self) -> bool {
        matches!(self, Self::Creature { is_lair: true, .. })
    }
}
