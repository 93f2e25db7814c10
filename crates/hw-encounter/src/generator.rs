//! Recursive table resolution.
//!
//! A table is rolled, the matching entry is followed into sub-tables until
//! a creature or text leaf is reached, and creature leaves get a count, a
//! lair check and (for lairs) a hoard.

use hw_core::{
    CreatureRepository, EntryType, GenerationContext, RegionTable, TableEntry, TableRef,
    TableRepository,
};
use hw_mechanics::{DiceRoll, Die, RandomProvider, pick};

use crate::config::GeneratorConfig;
use crate::error::{GenError, GenResult};
use crate::result::EncounterResult;
use crate::treasure::{Amount, RolledTreasure, TreasureGenerator, parse_treasure_code};

/// Probability that a creature group is met in its lair.
pub const LAIR_CHANCE: f64 = 0.30;

/// Lair groups are this many times larger, rolled on a die of this size.
const LAIR_MULTIPLIER: Die = Die::Custom(5);

/// Resolves encounter tables against a set of repositories.
pub struct EncounterGenerator<'a> {
    tables: &'a dyn TableRepository,
    creatures: &'a dyn CreatureRepository,
    treasure: Option<&'a TreasureGenerator>,
    config: GeneratorConfig,
}

impl<'a> EncounterGenerator<'a> {
    /// Create a generator without treasure rolling.
    pub fn new(tables: &'a dyn TableRepository, creatures: &'a dyn CreatureRepository) -> Self {
        Self {
            tables,
            creatures,
            treasure: None,
            config: GeneratorConfig::default(),
        }
    }

    /// Attach a treasure generator; lair hoards are rolled only when set.
    pub fn with_treasure(mut self, treasure: &'a TreasureGenerator) -> Self {
        self.treasure = Some(treasure);
        self
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Resolve `table_name` down to a leaf.
    ///
    /// With a context, a missing table is retried as
    /// `"<table_name> - <Region Title>"` and `Regional` entries follow the
    /// context's region.
    pub fn generate(
        &self,
        table_name: &str,
        context: Option<&GenerationContext>,
        rng: &mut dyn RandomProvider,
    ) -> GenResult<EncounterResult> {
        let mut chain = Vec::new();
        self.resolve(table_name, context, rng, &mut chain)
    }

    fn resolve(
        &self,
        table_name: &str,
        context: Option<&GenerationContext>,
        rng: &mut dyn RandomProvider,
        chain: &mut Vec<String>,
    ) -> GenResult<EncounterResult> {
        if chain.len() >= self.config.max_depth {
            chain.push(table_name.to_string());
            return Err(GenError::CycleDetected {
                depth: self.config.max_depth,
                chain: std::mem::take(chain),
            });
        }

        let table = self.load_table(table_name, context)?;
        chain.push(table.name.clone());

        let roll = DiceRoll::parse(&table.die)?.roll(rng);
        let entry = table
            .entry_for(roll)
            .ok_or_else(|| GenError::NoMatchingEntry {
                table: table.name.clone(),
                roll,
            })?;
        tracing::debug!(table = %table.name, roll, entry = %entry.reference, "table entry");

        match &entry.entry_type {
            EntryType::Creature => {
                let name = pick_reference(&table, entry, rng)?.to_string();
                self.resolve_creature(&name, entry, rng)
            }
            EntryType::Regional => {
                let next = match context {
                    Some(ctx) => format!("Regional - {}", ctx.region_title()),
                    None => pick_reference(&table, entry, rng)?.to_string(),
                };
                self.resolve(&next, context, rng, chain)
            }
            kind if kind.is_subtable() => {
                let next = pick_reference(&table, entry, rng)?.to_string();
                self.resolve(&next, context, rng, chain)
            }
            _ => {
                let name = pick_reference(&table, entry, rng)?.to_string();
                let description = entry.description.clone().unwrap_or_else(|| name.clone());
                Ok(EncounterResult::Text { name, description })
            }
        }
    }

    fn load_table(
        &self,
        name: &str,
        context: Option<&GenerationContext>,
    ) -> GenResult<RegionTable> {
        match self.tables.get_table(name) {
            Ok(table) => Ok(table),
            Err(err) => {
                let Some(ctx) = context else {
                    return Err(err.into());
                };
                let regional = format!("{name} - {}", ctx.region_title());
                tracing::debug!(table = name, fallback = %regional, "trying regional table");
                self.tables.get_table(&regional).map_err(|_| GenError::from(err))
            }
        }
    }

    fn resolve_creature(
        &self,
        name: &str,
        entry: &TableEntry,
        rng: &mut dyn RandomProvider,
    ) -> GenResult<EncounterResult> {
        let creature = self.creatures.get_by_name(name)?;

        let expression = entry.count.as_deref().unwrap_or(&creature.number_appearing);
        let mut count = roll_count(expression, rng);

        let is_lair = rng.next() < LAIR_CHANCE;
        if is_lair {
            count = count.saturating_mul(LAIR_MULTIPLIER.roll(rng));
        }

        let (treasure, possessions) = match (self.treasure, creature.treasure.as_deref()) {
            (Some(generator), Some(code)) if !code.trim().is_empty() => {
                self.roll_treasure(generator, code, is_lair, rng)?
            }
            _ => (None, None),
        };

        tracing::debug!(creature = %creature.name, count, is_lair, "creature resolved");
        Ok(EncounterResult::Creature {
            name: creature.name.clone(),
            creature,
            count,
            is_lair,
            treasure,
            possessions,
        })
    }

    fn roll_treasure(
        &self,
        generator: &TreasureGenerator,
        code: &str,
        is_lair: bool,
        rng: &mut dyn RandomProvider,
    ) -> GenResult<(Option<RolledTreasure>, Option<String>)> {
        let Some(spec) = parse_treasure_code(code)? else {
            return Ok((None, None));
        };
        let hoard = if is_lair && !spec.codes.is_empty() {
            Some(generator.roll_hoard(&spec, rng))
        } else {
            None
        };
        let possessions = if spec.extras.is_empty() {
            None
        } else {
            Some(spec.extras.join("; "))
        };
        Ok((hoard, possessions))
    }
}

/// Single references are taken as-is; lists are picked from uniformly.
fn pick_reference<'e>(
    table: &RegionTable,
    entry: &'e TableEntry,
    rng: &mut dyn RandomProvider,
) -> GenResult<&'e str> {
    match &entry.reference {
        TableRef::One(name) => Ok(name),
        TableRef::Many(names) => {
            pick(names, rng)
                .map(String::as_str)
                .ok_or_else(|| GenError::EmptyReference {
                    table: table.name.clone(),
                    min: entry.min,
                    max: entry.max,
                })
        }
    }
}

/// Roll a count expression; anything unparseable counts as one.
fn roll_count(expression: &str, rng: &mut dyn RandomProvider) -> u32 {
    match Amount::parse(expression) {
        Some(amount) => amount.roll(rng).max(1),
        None => {
            tracing::warn!(expression, "invalid count expression, using 1");
            1
        }
    }
}
