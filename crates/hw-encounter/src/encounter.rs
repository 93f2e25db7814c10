//! Full encounter assembly for a travel context.

use hw_core::{Creature, GenerationContext};
use hw_mechanics::{DiceRoll, Die, RandomProvider};
use serde::Serialize;

use crate::error::GenResult;
use crate::generator::EncounterGenerator;
use crate::result::EncounterResult;
use crate::treasure::RolledTreasure;

const ACTIVITY_TABLE: &str = "Activity";
const REACTION_TABLE: &str = "Reaction";

/// Feet per point of the 2d6 encounter distance roll.
const FEET_PER_POINT: u32 = 30;

/// A side is surprised on this or lower on a d6.
const SURPRISE_MAX: u32 = 2;

/// Who, if anyone, is caught unawares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Surprise {
    /// Both sides are surprised.
    BothSides,
    /// Only the players are surprised.
    Players,
    /// Only the monsters are surprised.
    Monsters,
    /// Nobody is surprised.
    Neither,
}

impl Surprise {
    /// Roll a d6 for the players, then one for the monsters.
    pub fn roll(rng: &mut dyn RandomProvider) -> Self {
        let players = Die::D6.roll(rng) <= SURPRISE_MAX;
        let monsters = Die::D6.roll(rng) <= SURPRISE_MAX;
        match (players, monsters) {
            (true, true) => Self::BothSides,
            (true, false) => Self::Players,
            (false, true) => Self::Monsters,
            (false, false) => Self::Neither,
        }
    }
}

impl std::fmt::Display for Surprise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BothSides => write!(f, "Both sides surprised"),
            Self::Players => write!(f, "Players surprised"),
            Self::Monsters => write!(f, "Monsters surprised"),
            Self::Neither => write!(f, "No surprise"),
        }
    }
}

/// A creature encounter with everything needed to run it at the table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatureEncounter {
    /// One-line summary, e.g. `"3 x Goblin"`.
    pub summary: String,
    /// The creature's stat block.
    pub creature: Creature,
    /// How many appear.
    pub count: u32,
    /// Whether the group was met in its lair.
    pub is_lair: bool,
    /// The lair hoard, if any.
    pub treasure: Option<RolledTreasure>,
    /// Free-text items the group carries.
    pub possessions: Option<String>,
    /// What the group is doing, if an activity table exists.
    pub activity: Option<String>,
    /// How the group reacts, if a reaction table exists.
    pub reaction: Option<String>,
    /// Distance at which the groups meet.
    pub distance_feet: u32,
    /// Surprise outcome.
    pub surprise: Surprise,
}

/// A generated encounter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Encounter {
    /// Creatures are met.
    Creature(CreatureEncounter),
    /// A place or object is found.
    Structure {
        /// Short name.
        name: String,
        /// What is going on there.
        activity: String,
    },
}

impl Encounter {
    /// One-line summary.
    pub fn summary(&self) -> &str {
        match self {
            Self::Creature(c) => &c.summary,
            Self::Structure { name, .. } => name,
        }
    }
}

impl EncounterGenerator<'_> {
    /// Generate a complete encounter for the given travel context.
    ///
    /// Starts from the context's encounter-type table. Creature encounters
    /// additionally roll activity, reaction, distance and surprise, in that
    /// order.
    pub fn generate_encounter(
        &self,
        context: &GenerationContext,
        rng: &mut dyn RandomProvider,
    ) -> GenResult<Encounter> {
        let start = context.encounter_table();
        tracing::debug!(table = %start, region = %context.region_id, "generating encounter");

        match self.generate(&start, Some(context), rng)? {
            EncounterResult::Creature {
                creature,
                count,
                name,
                is_lair,
                treasure,
                possessions,
            } => {
                let activity = self.text_roll(ACTIVITY_TABLE, context, rng);
                let reaction = self.text_roll(REACTION_TABLE, context, rng);
                let distance_feet =
                    DiceRoll::new(2, Die::D6).roll(rng).max(0) as u32 * FEET_PER_POINT;
                let surprise = Surprise::roll(rng);
                Ok(Encounter::Creature(CreatureEncounter {
                    summary: format!("{count} x {name}"),
                    creature,
                    count,
                    is_lair,
                    treasure,
                    possessions,
                    activity,
                    reaction,
                    distance_feet,
                    surprise,
                }))
            }
            EncounterResult::Text { name, description } => Ok(Encounter::Structure {
                name,
                activity: description,
            }),
        }
    }

    fn text_roll(
        &self,
        table: &str,
        context: &GenerationContext,
        rng: &mut dyn RandomProvider,
    ) -> Option<String> {
        match self.generate(table, Some(context), rng) {
            Ok(EncounterResult::Text { description, .. }) => Some(description),
            Ok(other) => {
                tracing::debug!(table, result = other.name(), "non-text result ignored");
                None
            }
            Err(err) => {
                tracing::debug!(table, %err, "optional table unavailable");
                None
            }
        }
    }
}
