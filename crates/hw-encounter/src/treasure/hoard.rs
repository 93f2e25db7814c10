//! Hoard rolling from treasure codes.
//!
//! Each code adds to one shared set of coins, gems, art objects and magic
//! items. Missing reference rows contribute nothing: sparse data degrades
//! the hoard rather than failing it.

use std::collections::HashMap;

use hw_core::TreasureTableRepository;
use hw_core::treasure::{Chance, TreasureTables, find_row, level_row};
use hw_mechanics::{DiceRoll, Die, RandomProvider, Weighted, pick, roll_weighted};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize};

use super::catalogue::{self, catalogue_for};
use super::code::{TreasureSpec, TreasureTier};
use super::quantity::{MagicInstruction, Quantity, parse_magic_instructions};
use crate::error::GenResult;

/// Art objects with no type row are named this.
const DEFAULT_ART_TYPE: &str = "Art object";

/// Rolls at or below this on the d100 selector pick the jewellery table.
const JEWELLERY_MAX_ROLL: u32 = 50;

/// Art object value: this many d6, times [`ART_VALUE_MULTIPLIER`] gp.
const ART_VALUE_DICE: u32 = 3;
const ART_VALUE_MULTIPLIER: u32 = 100;

/// Coin counts by denomination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coins {
    /// Copper pieces (1/100 gp).
    pub copper: u64,
    /// Silver pieces (1/10 gp).
    pub silver: u64,
    /// Gold pieces.
    pub gold: u64,
    /// Pellucidium pieces (5 gp).
    pub pellucidium: u64,
}

impl Coins {
    /// Value of all coins in gold pieces.
    pub fn value_gp(&self) -> f64 {
        self.copper as f64 / 100.0
            + self.silver as f64 / 10.0
            + self.gold as f64
            + self.pellucidium as f64 * 5.0
    }

    /// Returns true if there are no coins at all.
    pub fn is_empty(&self) -> bool {
        self.copper == 0 && self.silver == 0 && self.gold == 0 && self.pellucidium == 0
    }
}

/// A single gem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolledGem {
    /// Value category, e.g. `"Precious"`.
    pub category: String,
    /// Gem name, e.g. `"Sapphire"`.
    pub name: String,
    /// Value in gold pieces.
    pub value: u32,
}

/// A single piece of jewellery or art.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolledArtObject {
    /// Object type, e.g. `"Brooch"`.
    pub kind: String,
    /// Material, if the material table had a row for the roll.
    pub material: Option<String>,
    /// Embellishment, if the embellishment table had a row for the roll.
    pub embellishment: Option<String>,
    /// Value in gold pieces.
    pub value: u32,
}

impl std::fmt::Display for RolledArtObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.material {
            Some(material) => write!(f, "{} {}", material, self.kind)?,
            None => write!(f, "{}", self.kind)?,
        }
        if let Some(embellishment) = &self.embellishment {
            write!(f, " ({embellishment})")?;
        }
        Ok(())
    }
}

/// A single magic item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolledMagicItem {
    /// Item category, e.g. `"Potion"`.
    pub category: String,
    /// Item name; the category itself when no catalogue entry exists.
    pub name: String,
    /// Value in gold pieces.
    pub value: u32,
}

/// A generated hoard.
///
/// Serializes with a computed `totalValue` alongside the stored fields.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RolledTreasure {
    /// Coins by denomination.
    pub coins: Coins,
    /// Individual gems.
    pub gems: Vec<RolledGem>,
    /// Individual art objects.
    pub art_objects: Vec<RolledArtObject>,
    /// Individual magic items.
    pub magic_items: Vec<RolledMagicItem>,
}

impl RolledTreasure {
    /// Total value in gold pieces: coins plus every item's face value.
    pub fn total_value(&self) -> f64 {
        let items: u64 = self
            .gems
            .iter()
            .map(|g| u64::from(g.value))
            .chain(self.art_objects.iter().map(|a| u64::from(a.value)))
            .chain(self.magic_items.iter().map(|m| u64::from(m.value)))
            .sum();
        self.coins.value_gp() + items as f64
    }

    /// Returns true if nothing at all was rolled.
    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
            && self.gems.is_empty()
            && self.art_objects.is_empty()
            && self.magic_items.is_empty()
    }
}

impl Serialize for RolledTreasure {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("RolledTreasure", 5)?;
        state.serialize_field("coins", &self.coins)?;
        state.serialize_field("gems", &self.gems)?;
        state.serialize_field("artObjects", &self.art_objects)?;
        state.serialize_field("magicItems", &self.magic_items)?;
        state.serialize_field("totalValue", &self.total_value())?;
        state.end()
    }
}

/// Rolls hoards against a fixed set of treasure tables.
#[derive(Debug, Clone)]
pub struct TreasureGenerator {
    tables: TreasureTables,
    gem_names: HashMap<String, Vec<String>>,
}

impl TreasureGenerator {
    /// Create a generator over the given reference tables.
    pub fn new(tables: TreasureTables) -> Self {
        let gem_names = tables
            .gem_types
            .iter()
            .map(|(category, names)| (category.to_lowercase(), names.clone()))
            .collect();
        Self { tables, gem_names }
    }

    /// Load the tables once from a repository.
    pub fn from_repository(repo: &dyn TreasureTableRepository) -> GenResult<Self> {
        Ok(Self::new(repo.get_treasure_tables()?))
    }

    /// The reference tables in use.
    pub fn tables(&self) -> &TreasureTables {
        &self.tables
    }

    /// Roll every code in `spec` into one hoard. Extras are not rolled.
    pub fn roll_hoard(&self, spec: &TreasureSpec, rng: &mut dyn RandomProvider) -> RolledTreasure {
        let mut hoard = RolledTreasure::default();
        for code in &spec.codes {
            match code.tier {
                TreasureTier::Coins => self.roll_coins(code.level, &mut hoard.coins, rng),
                TreasureTier::Riches => self.roll_riches(code.level, &mut hoard, rng),
                TreasureTier::MagicItems => {
                    self.roll_magic_items(code.level, &mut hoard.magic_items, rng)
                }
            }
        }
        tracing::debug!(
            codes = spec.codes.len(),
            gems = hoard.gems.len(),
            art = hoard.art_objects.len(),
            magic = hoard.magic_items.len(),
            "rolled hoard"
        );
        hoard
    }

    fn roll_coins(&self, level: u8, coins: &mut Coins, rng: &mut dyn RandomProvider) {
        let Some(row) = level_row(&self.tables.coins_by_level, level) else {
            tracing::debug!(level, "no coin row for level");
            return;
        };
        let mut add = |total: &mut u64, chance: Option<&Chance>| {
            *total = total.saturating_add(roll_chance(chance, rng).unwrap_or(0));
        };
        add(&mut coins.copper, row.copper.as_ref());
        add(&mut coins.silver, row.silver.as_ref());
        add(&mut coins.gold, row.gold.as_ref());
        add(&mut coins.pellucidium, row.pellucidium.as_ref());
    }

    fn roll_riches(&self, level: u8, hoard: &mut RolledTreasure, rng: &mut dyn RandomProvider) {
        let Some(row) = level_row(&self.tables.riches_by_level, level) else {
            tracing::debug!(level, "no riches row for level");
            return;
        };
        if let Some(count) = roll_chance(row.gems.as_ref(), rng) {
            for _ in 0..count {
                if let Some(gem) = self.roll_gem(rng) {
                    hoard.gems.push(gem);
                }
            }
        }
        if let Some(count) = roll_chance(row.art_objects.as_ref(), rng) {
            for _ in 0..count {
                hoard.art_objects.push(self.roll_art_object(rng));
            }
        }
    }

    fn roll_gem(&self, rng: &mut dyn RandomProvider) -> Option<RolledGem> {
        let roll = percentile(rng);
        let Some(row) = find_row(&self.tables.gem_values, roll) else {
            tracing::debug!(roll, "no gem value row for roll");
            return None;
        };
        let names = self
            .gem_names
            .get(&row.category.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or_default();
        let name = pick(names, rng).unwrap_or(&row.category).clone();
        Some(RolledGem {
            category: row.category.clone(),
            name,
            value: row.value,
        })
    }

    fn roll_art_object(&self, rng: &mut dyn RandomProvider) -> RolledArtObject {
        let use_jewellery =
            percentile(rng) <= JEWELLERY_MAX_ROLL && !self.tables.jewellery.is_empty();
        let types = if use_jewellery {
            &self.tables.jewellery
        } else {
            &self.tables.misc_art_objects
        };
        let kind = find_row(types, percentile(rng))
            .map(|r| r.name.clone())
            .unwrap_or_else(|| DEFAULT_ART_TYPE.to_string());
        let material = find_row(&self.tables.art_materials, Die::D20.roll(rng)).map(|r| r.name.clone());
        let embellishment =
            find_row(&self.tables.art_embellishments, Die::D20.roll(rng)).map(|r| r.name.clone());
        let value = DiceRoll::new(ART_VALUE_DICE, Die::D6).roll(rng) as u32 * ART_VALUE_MULTIPLIER;
        RolledArtObject {
            kind,
            material,
            embellishment,
            value,
        }
    }

    fn roll_magic_items(
        &self,
        level: u8,
        items: &mut Vec<RolledMagicItem>,
        rng: &mut dyn RandomProvider,
    ) {
        let Some(row) = level_row(&self.tables.magic_items_by_level, level) else {
            tracing::debug!(level, "no magic item row for level");
            return;
        };
        if percentile(rng) > row.chance {
            return;
        }
        for instruction in parse_magic_instructions(&row.items) {
            match instruction {
                MagicInstruction::RollType(amount) => {
                    for _ in 0..amount.roll(rng) {
                        let roll = percentile(rng);
                        match find_row(&self.tables.magic_item_types, roll) {
                            Some(row) => items.push(self.item_from_category(&row.name, rng)),
                            None => tracing::debug!(roll, "no magic item type row for roll"),
                        }
                    }
                }
                MagicInstruction::Potions(amount) => {
                    for _ in 0..amount.roll(rng) {
                        items.push(self.item_from_catalogue("Potion", catalogue::POTIONS, rng));
                    }
                }
                MagicInstruction::ScrollsOrBooks(amount) => {
                    for _ in 0..amount.roll(rng) {
                        items.push(self.item_from_catalogue(
                            "Scroll / Book",
                            catalogue::SCROLLS_BOOKS,
                            rng,
                        ));
                    }
                }
                MagicInstruction::ArmourOrWeapon(amount) => {
                    let choices = [
                        Weighted::new(1.0, ("Magic Armour", catalogue::ARMOUR)),
                        Weighted::new(1.0, ("Magic Weapon", catalogue::WEAPONS)),
                    ];
                    for _ in 0..amount.roll(rng) {
                        if let Ok(&(category, key)) = roll_weighted(&choices, rng) {
                            items.push(self.item_from_catalogue(category, key, rng));
                        }
                    }
                }
            }
        }
    }

    fn item_from_category(&self, category: &str, rng: &mut dyn RandomProvider) -> RolledMagicItem {
        match catalogue_for(category) {
            Some(key) => self.item_from_catalogue(category, key, rng),
            None => {
                tracing::debug!(category, "magic item category has no catalogue");
                placeholder(category)
            }
        }
    }

    fn item_from_catalogue(
        &self,
        category: &str,
        key: &str,
        rng: &mut dyn RandomProvider,
    ) -> RolledMagicItem {
        let entries = self
            .tables
            .magic_items
            .get(key)
            .map(Vec::as_slice)
            .unwrap_or_default();
        match pick(entries, rng) {
            Some(item) => RolledMagicItem {
                category: category.to_string(),
                name: item.name.clone(),
                value: item.value,
            },
            None => placeholder(category),
        }
    }
}

fn placeholder(category: &str) -> RolledMagicItem {
    RolledMagicItem {
        category: category.to_string(),
        name: category.to_string(),
        value: 0,
    }
}

fn percentile(rng: &mut dyn RandomProvider) -> u32 {
    Die::D100.roll(rng)
}

/// Roll d100 against `chance`; on success roll its quantity.
///
/// The percentile is drawn even when the quantity turns out unparseable, so
/// the draw sequence does not depend on data quality.
fn roll_chance(chance: Option<&Chance>, rng: &mut dyn RandomProvider) -> Option<u64> {
    let chance = chance?;
    if percentile(rng) > chance.chance {
        return None;
    }
    match Quantity::parse(&chance.quantity) {
        Some(quantity) => Some(quantity.roll(rng)),
        None => {
            tracing::warn!(quantity = %chance.quantity, "unparseable treasure quantity");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::treasure::code::{TreasureCode, parse_treasure_code};
    use hw_core::treasure::{
        CoinsRow, GemValueRow, MagicItemsRow, NamedItem, RangeRow, RichesRow,
    };
    use hw_mechanics::{FixedRandom, SeededRandom, SequenceRandom};

    fn chance(chance: u32, quantity: &str) -> Option<Chance> {
        Some(Chance {
            chance,
            quantity: quantity.to_string(),
        })
    }

    fn range(min: u32, max: u32, name: &str) -> RangeRow {
        RangeRow {
            min,
            max,
            name: name.to_string(),
        }
    }

    fn spec(code: &str) -> TreasureSpec {
        parse_treasure_code(code).unwrap().unwrap()
    }

    fn tables() -> TreasureTables {
        TreasureTables {
            coins_by_level: vec![CoinsRow {
                copper: chance(50, "1d6 × 100"),
                silver: chance(50, "1d4 × 10"),
                gold: chance(50, "1d4"),
                pellucidium: chance(5, "1d2"),
            }],
            riches_by_level: vec![RichesRow {
                gems: chance(50, "1d4 gems"),
                art_objects: chance(50, "1 object"),
            }],
            magic_items_by_level: vec![MagicItemsRow {
                chance: 50,
                items: "1 item (roll type) + 1 potion".to_string(),
            }],
            gem_values: vec![GemValueRow {
                min: 1,
                max: 100,
                category: "Semi-precious".to_string(),
                value: 50,
            }],
            gem_types: [(
                "Semi-Precious".to_string(),
                vec!["Jasper".to_string(), "Onyx".to_string()],
            )]
            .into_iter()
            .collect(),
            jewellery: vec![range(1, 100, "Brooch")],
            misc_art_objects: vec![range(1, 100, "Chalice")],
            art_materials: vec![range(1, 20, "Silver")],
            art_embellishments: vec![range(1, 20, "Engraved")],
            magic_item_types: vec![range(1, 50, "Potion"), range(51, 100, "Sentient Sword")],
            magic_items: [(
                catalogue::POTIONS.to_string(),
                vec![NamedItem {
                    name: "Potion of Healing".to_string(),
                    value: 150,
                }],
            )]
            .into_iter()
            .collect(),
        }
    }

    #[test]
    fn empty_spec_rolls_nothing() {
        let generator = TreasureGenerator::new(tables());
        let hoard = generator.roll_hoard(&TreasureSpec::default(), &mut FixedRandom(0.1));
        assert!(hoard.is_empty());
        assert_eq!(hoard.coins, Coins::default());
        assert_eq!(hoard.total_value(), 0.0);
    }

    #[test]
    fn coin_conversions_are_exact() {
        let only = |coins: Coins| RolledTreasure {
            coins,
            ..Default::default()
        };
        assert_eq!(
            only(Coins {
                copper: 100,
                ..Default::default()
            })
            .total_value(),
            1.0
        );
        assert_eq!(
            only(Coins {
                silver: 10,
                ..Default::default()
            })
            .total_value(),
            1.0
        );
        assert_eq!(
            only(Coins {
                gold: 1,
                ..Default::default()
            })
            .total_value(),
            1.0
        );
        assert_eq!(
            only(Coins {
                pellucidium: 1,
                ..Default::default()
            })
            .total_value(),
            5.0
        );
    }

    #[test]
    fn coins_roll_each_denomination() {
        let generator = TreasureGenerator::new(tables());
        // Every d100 is 11 and every d6/d4/d2 lands on its lowest face.
        let mut rng = FixedRandom(0.1);
        let hoard = generator.roll_hoard(&spec("C1"), &mut rng);
        assert_eq!(hoard.coins.copper, 100);
        assert_eq!(hoard.coins.silver, 10);
        assert_eq!(hoard.coins.gold, 1);
        // 11 > 5: no pellucidium.
        assert_eq!(hoard.coins.pellucidium, 0);
        assert_eq!(hoard.total_value(), 3.0);
    }

    #[test]
    fn coins_accumulate_across_codes() {
        let generator = TreasureGenerator::new(tables());
        let hoard = generator.roll_hoard(&spec("C1 + C1"), &mut FixedRandom(0.1));
        assert_eq!(hoard.coins.copper, 200);
        assert_eq!(hoard.coins.gold, 2);
    }

    #[test]
    fn huge_coin_totals_saturate() {
        let mut t = tables();
        t.coins_by_level = vec![CoinsRow {
            gold: chance(100, "4294967295 × 4294967295"),
            ..Default::default()
        }];
        let generator = TreasureGenerator::new(t);
        let hoard = generator.roll_hoard(&spec("C1 + C1"), &mut FixedRandom(0.1));
        assert_eq!(hoard.coins.gold, u64::MAX);
    }

    #[test]
    fn json_carries_total_value() {
        let generator = TreasureGenerator::new(tables());
        let hoard = generator.roll_hoard(&spec("C1"), &mut FixedRandom(0.1));
        let json = serde_json::to_value(&hoard).unwrap();
        assert_eq!(json["coins"]["gold"], 1);
        assert_eq!(json["totalValue"], hoard.total_value());
        assert_eq!(json["totalValue"], 3.0);

        let back: RolledTreasure = serde_json::from_value(json).unwrap();
        assert_eq!(back, hoard);
    }

    #[test]
    fn failed_percentile_rolls_nothing() {
        let generator = TreasureGenerator::new(tables());
        // d100 of 91 beats every 50% chance.
        let hoard = generator.roll_hoard(&spec("C1 + R1 + M1"), &mut FixedRandom(0.9));
        assert!(hoard.is_empty());
    }

    #[test]
    fn missing_level_rows_degrade_silently() {
        let generator = TreasureGenerator::new(tables());
        let hoard = generator.roll_hoard(&spec("C12 + R7 + M3"), &mut FixedRandom(0.1));
        assert!(hoard.is_empty());

        let generator = TreasureGenerator::new(TreasureTables::default());
        let hoard = generator.roll_hoard(&spec("C1 + R1 + M1"), &mut FixedRandom(0.1));
        assert!(hoard.is_empty());
    }

    #[test]
    fn gem_names_match_case_insensitively() {
        let generator = TreasureGenerator::new(tables());
        let mut rng = SeededRandom::new(3);
        let mut found = false;
        for _ in 0..20 {
            let hoard = generator.roll_hoard(&spec("R1"), &mut rng);
            for gem in &hoard.gems {
                found = true;
                assert_eq!(gem.category, "Semi-precious");
                assert!(gem.name == "Jasper" || gem.name == "Onyx", "{}", gem.name);
                assert_eq!(gem.value, 50);
            }
        }
        assert!(found, "expected at least one gem in 20 hoards");
    }

    #[test]
    fn gem_without_catalogue_is_named_after_category() {
        let mut t = tables();
        t.gem_types.clear();
        let generator = TreasureGenerator::new(t);
        let hoard = generator.roll_hoard(&spec("R1"), &mut FixedRandom(0.1));
        assert_eq!(hoard.gems.len(), 1);
        assert_eq!(hoard.gems[0].name, "Semi-precious");
    }

    #[test]
    fn art_object_draw_order() {
        let generator = TreasureGenerator::new(tables());
        let rng_values = vec![
            0.1,  // gem chance d100 = 11, passes
            0.0,  // gem count 1d4 = 1
            0.0,  // gem value d100 = 1
            0.0,  // gem name pick = Jasper
            0.1,  // art chance d100 = 11, passes
            0.7,  // jewellery selector d100 = 71, misc table
            0.3,  // type d100 = 31
            0.0,  // material d20 = 1
            0.0,  // embellishment d20 = 1
            0.0,  // 3d6 value
            0.0, 0.0,
        ];
        let mut rng = SequenceRandom::new(rng_values);
        let hoard = generator.roll_hoard(&spec("R1"), &mut rng);
        assert_eq!(hoard.gems.len(), 1);
        assert_eq!(hoard.gems[0].name, "Jasper");
        assert_eq!(hoard.art_objects.len(), 1);
        let art = &hoard.art_objects[0];
        assert_eq!(art.kind, "Chalice");
        assert_eq!(art.material.as_deref(), Some("Silver"));
        assert_eq!(art.embellishment.as_deref(), Some("Engraved"));
        assert_eq!(art.value, 300);
        assert_eq!(art.to_string(), "Silver Chalice (Engraved)");
        assert_eq!(hoard.total_value(), 350.0);
        assert_eq!(rng.draws(), 12);
    }

    #[test]
    fn art_falls_back_to_misc_when_no_jewellery() {
        let mut t = tables();
        t.jewellery.clear();
        let generator = TreasureGenerator::new(t);
        let hoard = generator.roll_hoard(&spec("R1"), &mut FixedRandom(0.1));
        assert_eq!(hoard.art_objects[0].kind, "Chalice");
    }

    #[test]
    fn magic_items_from_type_roll_and_fixed_category() {
        let generator = TreasureGenerator::new(tables());
        let hoard = generator.roll_hoard(&spec("M1"), &mut FixedRandom(0.1));
        // Type roll of 11 is "Potion"; the fixed potion instruction adds another.
        assert_eq!(hoard.magic_items.len(), 2);
        assert!(hoard.magic_items.iter().all(|i| i.name == "Potion of Healing"));
        assert_eq!(hoard.total_value(), 300.0);
    }

    #[test]
    fn unmapped_category_is_zero_value_placeholder() {
        let mut t = tables();
        t.magic_items_by_level[0].items = "1 item (roll type)".to_string();
        let generator = TreasureGenerator::new(t);
        // First draw passes the chance, second lands on 51-100.
        let mut rng = SequenceRandom::new(vec![0.1, 0.6]);
        let hoard = generator.roll_hoard(&spec("M1"), &mut rng);
        assert_eq!(
            hoard.magic_items,
            vec![RolledMagicItem {
                category: "Sentient Sword".to_string(),
                name: "Sentient Sword".to_string(),
                value: 0,
            }]
        );
    }

    #[test]
    fn empty_catalogue_gives_placeholder() {
        let mut t = tables();
        t.magic_items_by_level[0].items = "1 armour or weapon (equal chance of either)".to_string();
        let generator = TreasureGenerator::new(t);
        // 0.1 passes the chance, 0.1 picks armour.
        let hoard = generator.roll_hoard(&spec("M1"), &mut FixedRandom(0.1));
        assert_eq!(hoard.magic_items.len(), 1);
        assert_eq!(hoard.magic_items[0].category, "Magic Armour");
        assert_eq!(hoard.magic_items[0].name, "Magic Armour");
        assert_eq!(hoard.magic_items[0].value, 0);

        let hoard = generator.roll_hoard(&spec("M1"), &mut SequenceRandom::new(vec![0.1, 0.9]));
        assert_eq!(hoard.magic_items[0].category, "Magic Weapon");
    }

    #[test]
    fn unparseable_quantity_contributes_nothing() {
        let mut t = tables();
        t.coins_by_level[0].gold = chance(100, "a small pile");
        let generator = TreasureGenerator::new(t);
        let hoard = generator.roll_hoard(&spec("C1"), &mut FixedRandom(0.1));
        assert_eq!(hoard.coins.gold, 0);
        assert_eq!(hoard.coins.copper, 100);
    }

    #[test]
    fn from_repository_loads_tables() {
        let repo = hw_core::InMemoryRepository::new().with_treasure_tables(tables());
        let generator = TreasureGenerator::from_repository(&repo).unwrap();
        assert_eq!(generator.tables().coins_by_level.len(), 1);

        let empty = hw_core::InMemoryRepository::new();
        assert!(TreasureGenerator::from_repository(&empty).is_err());
    }

    #[test]
    fn level_twelve_code_indexes_last_row() {
        let mut t = tables();
        t.coins_by_level = vec![CoinsRow::default(); 11];
        t.coins_by_level.push(CoinsRow {
            gold: chance(100, "5"),
            ..Default::default()
        });
        let generator = TreasureGenerator::new(t);
        let code = TreasureCode::new(TreasureTier::Coins, 12).unwrap();
        let hoard = generator.roll_hoard(
            &TreasureSpec {
                codes: vec![code],
                extras: Vec::new(),
            },
            &mut FixedRandom(0.5),
        );
        assert_eq!(hoard.coins.gold, 5);
    }
}
