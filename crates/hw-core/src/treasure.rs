//! Treasure reference tables.
//!
//! This is read-only data loaded once per process. Every collection may be
//! sparse; consumers treat a missing row as "contributes nothing".

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The complete treasure reference dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TreasureTables {
    /// Coin rows for tier C, indexed by level - 1.
    pub coins_by_level: Vec<CoinsRow>,
    /// Gem and art object rows for tier R, indexed by level - 1.
    pub riches_by_level: Vec<RichesRow>,
    /// Magic item rows for tier M, indexed by level - 1.
    pub magic_items_by_level: Vec<MagicItemsRow>,
    /// d100 table mapping to a gem value category.
    pub gem_values: Vec<GemValueRow>,
    /// Gem names per value category.
    pub gem_types: BTreeMap<String, Vec<String>>,
    /// d100 table of jewellery types.
    pub jewellery: Vec<RangeRow>,
    /// d100 table of miscellaneous art object types.
    pub misc_art_objects: Vec<RangeRow>,
    /// d20 table of art object materials.
    pub art_materials: Vec<RangeRow>,
    /// d20 table of art object embellishments.
    pub art_embellishments: Vec<RangeRow>,
    /// d100 table of magic item categories.
    pub magic_item_types: Vec<RangeRow>,
    /// Named magic items per catalogue key (e.g. `"potions"`).
    pub magic_items: BTreeMap<String, Vec<NamedItem>>,
}

/// A percentage chance paired with a quantity string such as `"1d6 × 1,000"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chance {
    /// Percentile chance; a d100 roll at or below it succeeds.
    pub chance: u32,
    /// Quantity to roll on success.
    pub quantity: String,
}

/// Coin chances for one level of tier C.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoinsRow {
    /// Copper pieces.
    pub copper: Option<Chance>,
    /// Silver pieces.
    pub silver: Option<Chance>,
    /// Gold pieces.
    pub gold: Option<Chance>,
    /// Pellucidium pieces.
    pub pellucidium: Option<Chance>,
}

/// Gem and art object chances for one level of tier R.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RichesRow {
    /// Gems.
    pub gems: Option<Chance>,
    /// Art objects.
    pub art_objects: Option<Chance>,
}

/// Magic item chance and instructions for one level of tier M.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MagicItemsRow {
    /// Percentile chance of any magic items.
    pub chance: u32,
    /// Free-text instructions, e.g. `"1 item (roll type) + 1d4 potions"`.
    pub items: String,
}

/// A row of the gem value table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GemValueRow {
    /// Lowest d100 roll.
    pub min: u32,
    /// Highest d100 roll.
    pub max: u32,
    /// Value category, e.g. `"Semi-precious"`.
    pub category: String,
    /// Value in gold pieces.
    pub value: u32,
}

/// A generic inclusive roll range naming a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeRow {
    /// Lowest roll.
    pub min: u32,
    /// Highest roll.
    pub max: u32,
    /// The result selected by the range.
    pub name: String,
}

/// A catalogue entry for a named magic item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedItem {
    /// Item name.
    pub name: String,
    /// Value in gold pieces.
    #[serde(default)]
    pub value: u32,
}

/// Rows addressed by an inclusive roll range.
pub trait RollRange {
    /// Lowest roll selecting this row.
    fn min(&self) -> u32;
    /// Highest roll selecting this row.
    fn max(&self) -> u32;
}

impl RollRange for RangeRow {
    fn min(&self) -> u32 {
        self.min
    }
    fn max(&self) -> u32 {
        self.max
    }
}

impl RollRange for GemValueRow {
    fn min(&self) -> u32 {
        self.min
    }
    fn max(&self) -> u32 {
        self.max
    }
}

/// First row whose inclusive range contains `roll`.
pub fn find_row<R: RollRange>(rows: &[R], roll: u32) -> Option<&R> {
    rows.iter().find(|r| r.min() <= roll && roll <= r.max())
}

/// Row for a 1-based tier level, if present.
pub fn level_row<R>(rows: &[R], level: u8) -> Option<&R> {
    rows.get(usize::from(level).checked_sub(1)?)
}
