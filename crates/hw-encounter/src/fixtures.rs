//! Shared test data: a small forest region with one creature and its hoard.

use hw_core::treasure::{Chance, CoinsRow};
use hw_core::{
    Creature, EntryType, InMemoryRepository, RegionTable, TableEntry, TableRef, TreasureTables,
};

pub(crate) fn entry(min: i32, max: i32, entry_type: EntryType, reference: &str) -> TableEntry {
    TableEntry {
        min,
        max,
        entry_type,
        reference: TableRef::One(reference.to_string()),
        count: None,
        description: None,
    }
}

pub(crate) fn table(name: &str, die: &str, entries: Vec<TableEntry>) -> RegionTable {
    RegionTable {
        name: name.to_string(),
        die: die.to_string(),
        entries,
    }
}

pub(crate) fn creature(name: &str, number_appearing: &str, treasure: Option<&str>) -> Creature {
    Creature {
        name: name.to_string(),
        level: 1,
        armour_class: 13,
        hit_dice: "1d8".to_string(),
        attacks: "Weapon (+0, 1d6)".to_string(),
        movement: "60".to_string(),
        morale: 7,
        xp: 10,
        number_appearing: number_appearing.to_string(),
        alignment: "Chaotic".to_string(),
        treasure: treasure.map(str::to_string),
    }
}

pub(crate) fn treasure_tables() -> TreasureTables {
    TreasureTables {
        coins_by_level: vec![CoinsRow {
            gold: Some(Chance {
                chance: 100,
                quantity: "1d4 × 10".to_string(),
            }),
            ..Default::default()
        }],
        ..Default::default()
    }
}

/// Daytime road travel in `generic-forest` always meets goblins.
pub(crate) fn forest() -> InMemoryRepository {
    InMemoryRepository::new()
        .with_table(table(
            "Encounter Type - Daytime - Road",
            "1d6",
            vec![entry(1, 6, EntryType::Regional, "Regional - Generic Forest")],
        ))
        .with_table(table(
            "Encounter Type - Nighttime - Fire",
            "1d6",
            vec![entry(1, 6, EntryType::Other("Landmark".into()), "Ruined Watchtower")],
        ))
        .with_table(table(
            "Regional - Generic Forest",
            "1d6",
            vec![entry(1, 6, EntryType::Creature, "Goblin")],
        ))
        .with_table(table(
            "Activity",
            "1d6",
            vec![entry(1, 6, EntryType::Other("Text".into()), "Sleeping")],
        ))
        .with_table(table(
            "Reaction",
            "1d6",
            vec![entry(1, 6, EntryType::Other("Text".into()), "Friendly")],
        ))
        .with_creature(creature("Goblin", "2d4", Some("C1 + 2d6 pelts")))
        .with_treasure_tables(treasure_tables())
}
