//! Dice types, notation parsing, and rolling.
//!
//! Notation follows `[count]d<sides>[(+|-)modifier]`, e.g. `"1d6"`,
//! `"2d4+1"`, `"d8"`, `"3d6-2"`. An absent count means one die.

pub mod roll;

pub use roll::RollResult;

use std::str::FromStr;
use std::sync::LazyLock;

use regex_lite::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};
use crate::random::RandomProvider;

static DICE_NOTATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d*)[dD](\d+)(?:\s*([+-])\s*(\d+))?$").expect("valid dice regex")
});

/// A polyhedral die type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    /// Four-sided die.
    D4,
    /// Six-sided die.
    D6,
    /// Eight-sided die.
    D8,
    /// Ten-sided die.
    D10,
    /// Twelve-sided die.
    D12,
    /// Twenty-sided die.
    D20,
    /// Percentile die (1-100).
    D100,
    /// A die with any other number of sides (at least one).
    Custom(u32),
}

impl Die {
    /// Build a die from its side count; `None` for zero sides.
    pub fn from_sides(sides: u32) -> Option<Self> {
        match sides {
            0 => None,
            4 => Some(Self::D4),
            6 => Some(Self::D6),
            8 => Some(Self::D8),
            10 => Some(Self::D10),
            12 => Some(Self::D12),
            20 => Some(Self::D20),
            100 => Some(Self::D100),
            n => Some(Self::Custom(n)),
        }
    }

    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D20 => 20,
            Self::D100 => 100,
            Self::Custom(n) => n,
        }
    }

    /// Roll this die once: `floor(next × sides) + 1`.
    pub fn roll(self, rng: &mut dyn RandomProvider) -> u32 {
        let sides = self.sides();
        let face = (rng.next() * f64::from(sides)).floor() as u32 + 1;
        face.min(sides)
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

/// A parsed dice expression: `count` dice of one type plus a modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceRoll {
    /// Number of dice (at least one).
    pub count: u32,
    /// The die rolled.
    pub die: Die,
    /// Flat modifier added to the sum.
    pub modifier: i32,
}

impl DiceRoll {
    /// A roll of `count` dice with no modifier.
    pub fn new(count: u32, die: Die) -> Self {
        Self {
            count,
            die,
            modifier: 0,
        }
    }

    /// Set the modifier.
    pub fn with_modifier(mut self, modifier: i32) -> Self {
        self.modifier = modifier;
        self
    }

    /// Parse dice notation such as `"2d6+1"` or `"d8"`.
    pub fn parse(text: &str) -> MechResult<Self> {
        let invalid = || MechError::InvalidDice(text.to_string());
        let caps = DICE_NOTATION.captures(text.trim()).ok_or_else(invalid)?;

        let count = match caps.get(1).map(|m| m.as_str()) {
            None | Some("") => 1,
            Some(digits) => digits.parse::<u32>().map_err(|_| invalid())?,
        };
        let sides = caps[2].parse::<u32>().map_err(|_| invalid())?;
        let die = Die::from_sides(sides).ok_or_else(invalid)?;
        if count == 0 {
            return Err(invalid());
        }

        let modifier = match (caps.get(3), caps.get(4)) {
            (Some(sign), Some(digits)) => {
                let value = digits.as_str().parse::<i32>().map_err(|_| invalid())?;
                if sign.as_str() == "-" { -value } else { value }
            }
            _ => 0,
        };

        Ok(Self {
            count,
            die,
            modifier,
        })
    }

    /// Lowest achievable total.
    pub fn min(&self) -> i32 {
        (self.count as i32).saturating_add(self.modifier)
    }

    /// Highest achievable total.
    pub fn max(&self) -> i32 {
        (self.count.saturating_mul(self.die.sides()) as i32).saturating_add(self.modifier)
    }

    /// Roll and return the total.
    pub fn roll(&self, rng: &mut dyn RandomProvider) -> i32 {
        self.roll_detailed(rng).total()
    }

    /// Roll and keep every die face.
    pub fn roll_detailed(&self, rng: &mut dyn RandomProvider) -> RollResult {
        let faces = (0..self.count).map(|_| self.die.roll(rng)).collect();
        RollResult {
            die: self.die,
            faces,
            modifier: self.modifier,
        }
    }
}

impl FromStr for DiceRoll {
    type Err = MechError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.count, self.die)?;
        match self.modifier {
            0 => Ok(()),
            m if m > 0 => write!(f, "+{m}"),
            m => write!(f, "{m}"),
        }
    }
}
