//! Encounter tables: a die expression and the entries it selects between.

use serde::{Deserialize, Serialize};

/// A probability table rolled with a single dice expression.
///
/// Entries are expected to partition the die's achievable range with no gaps
/// or overlaps. That invariant is enforced when the data is authored, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionTable {
    /// Unique table name, e.g. `"Encounter Type - Daytime - Road"`.
    pub name: String,
    /// Dice notation rolled to select an entry, e.g. `"1d8"` or `"2d6"`.
    pub die: String,
    /// Ordered entries covering the die range.
    pub entries: Vec<TableEntry>,
}

impl RegionTable {
    /// Find the entry whose inclusive `[min, max]` range contains `roll`.
    pub fn entry_for(&self, roll: i32) -> Option<&TableEntry> {
        self.entries.iter().find(|e| e.contains(roll))
    }
}

/// One row of a [`RegionTable`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableEntry {
    /// Lowest roll selecting this entry.
    pub min: i32,
    /// Highest roll selecting this entry.
    pub max: i32,
    /// How the entry is resolved.
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    /// What the entry points at: a creature, a table, or plain text.
    #[serde(rename = "ref")]
    pub reference: TableRef,
    /// Count expression overriding the creature's own number appearing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<String>,
    /// Free-text description used by text results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TableEntry {
    /// Returns true if `roll` falls within this entry's inclusive range.
    pub fn contains(&self, roll: i32) -> bool {
        (self.min..=self.max).contains(&roll)
    }
}

/// Reference target of a table entry: a single name or a list to pick from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TableRef {
    /// Exactly one target.
    One(String),
    /// Several targets; one is picked uniformly at random.
    Many(Vec<String>),
}

impl std::fmt::Display for TableRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::One(name) => write!(f, "{name}"),
            Self::Many(names) => write!(f, "[{}]", names.join(", ")),
        }
    }
}

/// The kind of a table entry, controlling how the generator follows it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntryType {
    /// A creature leaf, looked up in the creature repository.
    Creature,
    /// A pointer to the region-specific table for the current context.
    Regional,
    /// A pointer to an animal sub-table.
    Animal,
    /// A pointer to a monster sub-table.
    Monster,
    /// A pointer to a mortal sub-table.
    Mortal,
    /// A pointer to a sentient-creature sub-table.
    Sentient,
    /// Any other type; resolved as a text leaf.
    Other(String),
}

impl EntryType {
    /// Returns true for the types that recurse into a sub-table named by the ref.
    pub fn is_subtable(&self) -> bool {
        matches!(
            self,
            Self::Animal | Self::Monster | Self::Mortal | Self::Sentient
        )
    }
}

impl From<String> for EntryType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Creature" => Self::Creature,
            "Regional" => Self::Regional,
            "Animal" => Self::Animal,
            "Monster" => Self::Monster,
            "Mortal" => Self::Mortal,
            "Sentient" => Self::Sentient,
            _ => Self::Other(s),
        }
    }
}

impl From<EntryType> for String {
    fn from(t: EntryType) -> Self {
        t.to_string()
    }
}

impl std::fmt::Display for EntryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Creature => write!(f, "Creature"),
            Self::Regional => write!(f, "Regional"),
            Self::Animal => write!(f, "Animal"),
            Self::Monster => write!(f, "Monster"),
            Self::Mortal => write!(f, "Mortal"),
            Self::Sentient => write!(f, "Sentient"),
            Self::Other(s) => write!(f, "{s}"),
        }
    }
}
