//! The situation an encounter is generated for.

use serde::{Deserialize, Serialize};

/// Whether the party is travelling by day or resting at night.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeOfDay {
    /// Daytime travel.
    #[default]
    Day,
    /// Nighttime rest.
    Night,
}

/// Whether the party follows a road or travels through the wilds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Terrain {
    /// On a road or track.
    #[default]
    Road,
    /// Off-road, in the wilds.
    OffRoad,
}

/// Inputs that steer table selection during generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationContext {
    /// Hyphenated region id, e.g. `"generic-forest"`.
    pub region_id: String,
    /// Day or night.
    pub time_of_day: TimeOfDay,
    /// Road or off-road.
    pub terrain: Terrain,
    /// Whether the party has a camp fire lit.
    pub camping: bool,
}

impl GenerationContext {
    /// A daytime, on-road context for the given region.
    pub fn new(region_id: impl Into<String>) -> Self {
        Self {
            region_id: region_id.into(),
            time_of_day: TimeOfDay::Day,
            terrain: Terrain::Road,
            camping: false,
        }
    }

    /// Set the time of day.
    pub fn with_time_of_day(mut self, time_of_day: TimeOfDay) -> Self {
        self.time_of_day = time_of_day;
        self
    }

    /// Set the terrain.
    pub fn with_terrain(mut self, terrain: Terrain) -> Self {
        self.terrain = terrain;
        self
    }

    /// Set whether the party is camping.
    pub fn with_camping(mut self, camping: bool) -> Self {
        self.camping = camping;
        self
    }

    /// The region id rendered as a table-name suffix.
    pub fn region_title(&self) -> String {
        region_title(&self.region_id)
    }

    /// Name of the table that starts a full encounter roll for this context.
    pub fn encounter_table(&self) -> String {
        match self.time_of_day {
            TimeOfDay::Day => {
                let terrain = match self.terrain {
                    Terrain::Road => "Road",
                    Terrain::OffRoad => "Wild",
                };
                format!("Encounter Type - Daytime - {terrain}")
            }
            TimeOfDay::Night => {
                let fire = if self.camping { "Fire" } else { "No Fire" };
                format!("Encounter Type - Nighttime - {fire}")
            }
        }
    }
}

/// Turn a hyphenated id into space-separated title case.
///
/// `"generic-forest"` becomes `"Generic Forest"`.
pub fn region_title(region_id: &str) -> String {
    region_id
        .split('-')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
