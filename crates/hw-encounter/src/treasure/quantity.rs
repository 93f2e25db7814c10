//! Quantity strings and magic item instructions from the treasure tables.

use std::sync::LazyLock;

use hw_mechanics::{DiceRoll, RandomProvider};
use regex_lite::Regex;

static QUANTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d*[dD]\d+(?:[+-]\d+)?|\d+)(?:\s*[×xX*]\s*(\d[\d,]*))?").expect("valid regex")
});

static ROLL_TYPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(\d*d\d+|\d+)\s+items?\s*\(roll type\)$").expect("valid regex")
});

static POTIONS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(\d*d\d+|\d+)\s+potions?$").expect("valid regex"));

static SCROLLS_OR_BOOKS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(\d*d\d+|\d+)\s+scrolls?\s*/\s*books?$").expect("valid regex")
});

static ARMOUR_OR_WEAPON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(\d+)\s+armou?r or weapons?(?:\s*\(equal chance of either\))?$")
        .expect("valid regex")
});

/// A count that is either fixed or rolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Amount {
    /// A fixed number.
    Fixed(u32),
    /// A dice expression.
    Dice(DiceRoll),
}

impl Amount {
    /// Parse `"3"` or `"2d6"`.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.contains(['d', 'D']) {
            DiceRoll::parse(text).ok().map(Self::Dice)
        } else {
            text.parse::<u32>().ok().map(Self::Fixed)
        }
    }

    /// Evaluate the amount; negative dice totals count as zero.
    pub fn roll(&self, rng: &mut dyn RandomProvider) -> u32 {
        match self {
            Self::Fixed(n) => *n,
            Self::Dice(dice) => dice.roll(rng).max(0) as u32,
        }
    }
}

/// A treasure quantity such as `"1d6 × 1,000cp"` or `"2d4 gems"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantity {
    /// The rolled or fixed base amount.
    pub amount: Amount,
    /// Multiplier applied to the base amount.
    pub multiplier: u32,
}

impl Quantity {
    /// Parse a quantity string; trailing unit text is ignored.
    ///
    /// Accepts `"NdS"`, `"NdS × M[,MMM][unit]"`, `"NdS unit"` and plain
    /// integers. Returns `None` for anything else.
    pub fn parse(text: &str) -> Option<Self> {
        let caps = QUANTITY.captures(text.trim())?;
        let amount = Amount::parse(&caps[1])?;
        let multiplier = match caps.get(2) {
            Some(m) => m.as_str().replace(',', "").parse::<u32>().ok()?,
            None => 1,
        };
        Some(Self { amount, multiplier })
    }

    /// Roll the amount and apply the multiplier.
    pub fn roll(&self, rng: &mut dyn RandomProvider) -> u64 {
        u64::from(self.amount.roll(rng)).saturating_mul(u64::from(self.multiplier))
    }
}

/// One structured instruction from a magic item row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MagicInstruction {
    /// Items whose category is rolled on the magic item type table.
    RollType(Amount),
    /// Potions.
    Potions(Amount),
    /// Scrolls or books.
    ScrollsOrBooks(Amount),
    /// Items that are armour or a weapon with equal chance.
    ArmourOrWeapon(Amount),
}

/// Parse a magic item instruction string such as
/// `"1 item (roll type) + 1d4 potions"`.
///
/// Phrases that match no known pattern are skipped with a warning.
pub fn parse_magic_instructions(text: &str) -> Vec<MagicInstruction> {
    text.split(" + ")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .filter_map(|phrase| {
            let parsed = parse_phrase(phrase);
            if parsed.is_none() {
                tracing::warn!(phrase, "unrecognised magic item instruction");
            }
            parsed
        })
        .collect()
}

fn parse_phrase(phrase: &str) -> Option<MagicInstruction> {
    let patterns: [(&Regex, fn(Amount) -> MagicInstruction); 4] = [
        (&*ROLL_TYPE, MagicInstruction::RollType),
        (&*POTIONS, MagicInstruction::Potions),
        (&*SCROLLS_OR_BOOKS, MagicInstruction::ScrollsOrBooks),
        (&*ARMOUR_OR_WEAPON, MagicInstruction::ArmourOrWeapon),
    ];
    patterns.iter().find_map(|(regex, build)| {
        let caps = regex.captures(phrase)?;
        Amount::parse(&caps[1]).map(build)
    })
}
