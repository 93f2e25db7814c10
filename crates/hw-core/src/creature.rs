//! Creature stat blocks.

use serde::{Deserialize, Serialize};

/// A creature stat block as stored in the creature repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creature {
    /// Display name and lookup key.
    pub name: String,
    /// Creature level.
    pub level: u32,
    /// Armour class.
    pub armour_class: u32,
    /// Hit dice notation, e.g. `"3d8"`.
    pub hit_dice: String,
    /// Attack routine as printed.
    pub attacks: String,
    /// Movement rate as printed.
    pub movement: String,
    /// Morale score.
    pub morale: u32,
    /// Experience awarded.
    pub xp: u32,
    /// Number appearing: dice notation or a plain integer.
    pub number_appearing: String,
    /// Alignment.
    pub alignment: String,
    /// Hoard code, e.g. `"C4 + R4 + M1"`, `"None"`, or free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub treasure: Option<String>,
}
