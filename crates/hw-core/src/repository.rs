//! Repository traits for reference data, and an in-memory implementation.
//!
//! The generators only see the traits. [`InMemoryRepository`] backs the CLI
//! and the tests; it can be filled programmatically or from a directory of
//! JSON files.

use std::collections::BTreeMap;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::creature::Creature;
use crate::error::{HwError, HwResult};
use crate::table::RegionTable;
use crate::treasure::TreasureTables;

/// File holding a JSON array of [`RegionTable`]s.
pub const TABLES_FILE: &str = "tables.json";
/// File holding a JSON array of [`Creature`]s.
pub const CREATURES_FILE: &str = "creatures.json";
/// File holding a single [`TreasureTables`] object.
pub const TREASURE_FILE: &str = "treasure_tables.json";

/// Lookup of encounter tables by name.
pub trait TableRepository {
    /// Fetch a table by exact name.
    fn get_table(&self, name: &str) -> HwResult<RegionTable>;

    /// All known tables.
    fn list_tables(&self) -> HwResult<Vec<RegionTable>>;
}

/// Lookup of creatures by name.
pub trait CreatureRepository {
    /// Fetch a creature by exact name.
    fn get_by_name(&self, name: &str) -> HwResult<Creature>;
}

/// Access to the treasure reference dataset.
pub trait TreasureTableRepository {
    /// Fetch the treasure tables.
    fn get_treasure_tables(&self) -> HwResult<TreasureTables>;
}

/// Reference data held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    tables: BTreeMap<String, RegionTable>,
    creatures: BTreeMap<String, Creature>,
    treasure: Option<TreasureTables>,
}

impl InMemoryRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a table.
    pub fn with_table(mut self, table: RegionTable) -> Self {
        self.insert_table(table);
        self
    }

    /// Add or replace a creature.
    pub fn with_creature(mut self, creature: Creature) -> Self {
        self.insert_creature(creature);
        self
    }

    /// Set the treasure tables.
    pub fn with_treasure_tables(mut self, tables: TreasureTables) -> Self {
        self.treasure = Some(tables);
        self
    }

    /// Add or replace a table.
    pub fn insert_table(&mut self, table: RegionTable) {
        self.tables.insert(table.name.clone(), table);
    }

    /// Add or replace a creature.
    pub fn insert_creature(&mut self, creature: Creature) {
        self.creatures.insert(creature.name.clone(), creature);
    }

    /// Number of tables held.
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Number of creatures held.
    pub fn creature_count(&self) -> usize {
        self.creatures.len()
    }

    /// Returns true if treasure tables are loaded.
    pub fn has_treasure_tables(&self) -> bool {
        self.treasure.is_some()
    }

    /// Load every data file present in `dir`.
    ///
    /// Missing files are skipped; a present but unreadable or malformed file
    /// is an error.
    pub fn load_dir(dir: &Path) -> HwResult<Self> {
        let mut repo = Self::new();

        if let Some(tables) = read_json::<Vec<RegionTable>>(&dir.join(TABLES_FILE))? {
            for table in tables {
                repo.insert_table(table);
            }
        }
        if let Some(creatures) = read_json::<Vec<Creature>>(&dir.join(CREATURES_FILE))? {
            for creature in creatures {
                repo.insert_creature(creature);
            }
        }
        repo.treasure = read_json::<TreasureTables>(&dir.join(TREASURE_FILE))?;

        tracing::debug!(
            dir = %dir.display(),
            tables = repo.tables.len(),
            creatures = repo.creatures.len(),
            treasure = repo.treasure.is_some(),
            "loaded reference data"
        );
        Ok(repo)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> HwResult<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }
    let display = path.display().to_string();
    let text = std::fs::read_to_string(path).map_err(|source| HwError::Io {
        path: display.clone(),
        source,
    })?;
    serde_json::from_str(&text)
        .map(Some)
        .map_err(|source| HwError::Json {
            path: display,
            source,
        })
}

impl TableRepository for InMemoryRepository {
    fn get_table(&self, name: &str) -> HwResult<RegionTable> {
        self.tables
            .get(name)
            .cloned()
            .ok_or_else(|| HwError::TableNotFound(name.to_string()))
    }

    fn list_tables(&self) -> HwResult<Vec<RegionTable>> {
        Ok(self.tables.values().cloned().collect())
    }
}

impl CreatureRepository for InMemoryRepository {
    fn get_by_name(&self, name: &str) -> HwResult<Creature> {
        self.creatures
            .get(name)
            .cloned()
            .ok_or_else(|| HwError::CreatureNotFound(name.to_string()))
    }
}

impl TreasureTableRepository for InMemoryRepository {
    fn get_treasure_tables(&self) -> HwResult<TreasureTables> {
        self.treasure
            .clone()
            .ok_or_else(|| HwError::TreasureTablesUnavailable("no treasure data loaded".into()))
    }
}
