//! Hoard code parsing.
//!
//! A hoard code names treasure tiers and levels, e.g. `"C4 + R4 + M1"`,
//! optionally multiplied (`"(R1 × 3)"`), annotated (`"M3 (remains of
//! victims)"`), or mixed with free-text possessions (`"4d20 pots or jugs"`).

use std::sync::LazyLock;

use regex_lite::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{GenError, GenResult};

static CODE_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\(?[CRM] ?\d{1,2}(?:[^0-9]|$)").expect("valid regex"));

static PLAIN_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([CRM]) ?(\d{1,2})$").expect("valid regex"));

static MULTIPLIED_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\(([CRM]) ?(\d{1,2})\s*[×xX*]\s*(\d+)\)$").expect("valid regex")
});

static NOTED_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([CRM]) ?(\d{1,2})\s*((?:\([^()]*\)\s*)+)$").expect("valid regex")
});

static NOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^()]*)\)").expect("valid regex"));

/// Highest level of any treasure tier.
pub const MAX_LEVEL: u8 = 12;

/// Largest `k` accepted in `(Tn × k)`; larger multipliers are kept as text.
pub const MAX_MULTIPLIER: usize = 100;

/// A treasure tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TreasureTier {
    /// Coins (C).
    Coins,
    /// Gems and art objects (R).
    Riches,
    /// Magic items (M).
    MagicItems,
}

impl TreasureTier {
    fn from_letter(letter: &str) -> Option<Self> {
        match letter {
            "C" => Some(Self::Coins),
            "R" => Some(Self::Riches),
            "M" => Some(Self::MagicItems),
            _ => None,
        }
    }
}

impl std::fmt::Display for TreasureTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Coins => write!(f, "C"),
            Self::Riches => write!(f, "R"),
            Self::MagicItems => write!(f, "M"),
        }
    }
}

/// One tier at one level, e.g. `C4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TreasureCode {
    /// The tier.
    pub tier: TreasureTier,
    /// The level, 1 to 12.
    pub level: u8,
}

impl TreasureCode {
    /// Create a code; `None` if the level is outside 1 to 12.
    pub fn new(tier: TreasureTier, level: u8) -> Option<Self> {
        (1..=MAX_LEVEL)
            .contains(&level)
            .then_some(Self { tier, level })
    }

    fn from_parts(letter: &str, digits: &str) -> Option<Self> {
        let tier = TreasureTier::from_letter(letter)?;
        let level = digits.parse::<u8>().ok()?;
        Self::new(tier, level)
    }
}

impl std::fmt::Display for TreasureCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.tier, self.level)
    }
}

/// Parsed hoard code: tier codes plus free-text extras, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreasureSpec {
    /// Tier codes; duplicates are kept.
    pub codes: Vec<TreasureCode>,
    /// Free-text possessions and notes.
    pub extras: Vec<String>,
}

impl TreasureSpec {
    fn push_segment(&mut self, segment: &str) {
        if let Some(caps) = MULTIPLIED_CODE.captures(segment) {
            let times = caps[3]
                .parse::<usize>()
                .ok()
                .filter(|&k| k <= MAX_MULTIPLIER);
            if let (Some(code), Some(times)) = (TreasureCode::from_parts(&caps[1], &caps[2]), times)
            {
                self.codes.extend(std::iter::repeat_n(code, times));
                return;
            }
        } else if let Some(caps) = PLAIN_CODE.captures(segment) {
            if let Some(code) = TreasureCode::from_parts(&caps[1], &caps[2]) {
                self.codes.push(code);
                return;
            }
        } else if let Some(caps) = NOTED_CODE.captures(segment) {
            if let Some(code) = TreasureCode::from_parts(&caps[1], &caps[2]) {
                self.codes.push(code);
                self.extras.extend(
                    NOTE.captures_iter(&caps[3])
                        .map(|note| note[1].trim().to_string())
                        .filter(|note| !note.is_empty()),
                );
                return;
            }
        }
        self.extras.push(segment.to_string());
    }
}

impl std::fmt::Display for TreasureSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .codes
            .iter()
            .map(ToString::to_string)
            .chain(self.extras.iter().cloned())
            .collect();
        write!(f, "{}", parts.join(" + "))
    }
}

/// Parse a hoard code.
///
/// Returns `Ok(None)` for the literal `"None"`. Input with no recognisable
/// tier code becomes a single extra. Fails only on blank input.
pub fn parse_treasure_code(input: &str) -> GenResult<Option<TreasureSpec>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(GenError::InvalidTreasureCode(
            "treasure code is empty".to_string(),
        ));
    }
    if trimmed == "None" {
        return Ok(None);
    }

    let segments: Vec<&str> = trimmed
        .split(" + ")
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if !segments.iter().any(|s| CODE_START.is_match(s)) {
        return Ok(Some(TreasureSpec {
            codes: Vec::new(),
            extras: vec![trimmed.to_string()],
        }));
    }

    let mut spec = TreasureSpec::default();
    for segment in segments {
        spec.push_segment(segment);
    }
    Ok(Some(spec))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(tier: TreasureTier, level: u8) -> TreasureCode {
        TreasureCode::new(tier, level).unwrap()
    }

    fn parse(input: &str) -> TreasureSpec {
        parse_treasure_code(input).unwrap().unwrap()
    }

    #[test]
    fn none_means_no_treasure() {
        assert_eq!(parse_treasure_code("None").unwrap(), None);
        assert_eq!(parse_treasure_code("  None ").unwrap(), None);
    }

    #[test]
    fn blank_input_fails() {
        assert!(matches!(
            parse_treasure_code(""),
            Err(GenError::InvalidTreasureCode(_))
        ));
        assert!(matches!(
            parse_treasure_code("   "),
            Err(GenError::InvalidTreasureCode(_))
        ));
    }

    #[test]
    fn plain_codes_in_order() {
        let spec = parse("C4 + R4 + M1");
        assert_eq!(
            spec.codes,
            vec![
                code(TreasureTier::Coins, 4),
                code(TreasureTier::Riches, 4),
                code(TreasureTier::MagicItems, 1),
            ]
        );
        assert!(spec.extras.is_empty());
    }

    #[test]
    fn space_before_level_is_accepted() {
        let spec = parse("C 4 + M 12");
        assert_eq!(
            spec.codes,
            vec![
                code(TreasureTier::Coins, 4),
                code(TreasureTier::MagicItems, 12)
            ]
        );
    }

    #[test]
    fn multiplied_code_expands() {
        let spec = parse("(R1 × 3)");
        assert_eq!(spec.codes, vec![code(TreasureTier::Riches, 1); 3]);
        assert!(spec.extras.is_empty());

        let spec = parse("C2 + (M1 x 2)");
        assert_eq!(spec.codes.len(), 3);
        assert_eq!(spec.codes[2], code(TreasureTier::MagicItems, 1));
    }

    #[test]
    fn descriptive_text_falls_back_to_extras() {
        assert_eq!(
            parse("Ivory"),
            TreasureSpec {
                codes: Vec::new(),
                extras: vec!["Ivory".to_string()],
            }
        );
        assert_eq!(parse(" Magical honey ").extras, vec!["Magical honey"]);
    }

    #[test]
    fn fallback_keeps_whole_input_when_no_codes() {
        let spec = parse("4d20 pots + Ivory");
        assert!(spec.codes.is_empty());
        assert_eq!(spec.extras, vec!["4d20 pots + Ivory"]);
    }

    #[test]
    fn parenthetical_note_becomes_extra() {
        let spec = parse("M3 (remains of victims)");
        assert_eq!(spec.codes, vec![code(TreasureTier::MagicItems, 3)]);
        assert_eq!(spec.extras, vec!["remains of victims"]);
    }

    #[test]
    fn each_note_becomes_its_own_extra() {
        let spec = parse("M3 (a) (b)");
        assert_eq!(spec.codes, vec![code(TreasureTier::MagicItems, 3)]);
        assert_eq!(spec.extras, vec!["a", "b"]);
    }

    #[test]
    fn oversized_multiplier_is_kept_as_text() {
        let spec = parse("C1 + (R1 × 9000000000000000000)");
        assert_eq!(spec.codes, vec![code(TreasureTier::Coins, 1)]);
        assert_eq!(spec.extras, vec!["(R1 × 9000000000000000000)"]);

        let spec = parse("(R1 × 101)");
        assert!(spec.codes.is_empty());
        assert_eq!(spec.extras, vec!["(R1 × 101)"]);

        let spec = parse("(M2 × 100)");
        assert_eq!(spec.codes.len(), MAX_MULTIPLIER);
    }

    #[test]
    fn free_text_segments_are_kept_verbatim() {
        let spec = parse("C4 + R4 + M1 + 4d20 pots or jugs");
        assert_eq!(spec.codes.len(), 3);
        assert_eq!(spec.extras, vec!["4d20 pots or jugs"]);
    }

    #[test]
    fn duplicates_are_kept() {
        let spec = parse("M3 + M6");
        assert_eq!(
            spec.codes,
            vec![
                code(TreasureTier::MagicItems, 3),
                code(TreasureTier::MagicItems, 6)
            ]
        );
    }

    #[test]
    fn out_of_range_level_is_an_extra() {
        let spec = parse("C4 + C13");
        assert_eq!(spec.codes, vec![code(TreasureTier::Coins, 4)]);
        assert_eq!(spec.extras, vec!["C13"]);
    }

    #[test]
    fn code_constructor_bounds() {
        assert!(TreasureCode::new(TreasureTier::Coins, 0).is_none());
        assert!(TreasureCode::new(TreasureTier::Coins, 1).is_some());
        assert!(TreasureCode::new(TreasureTier::Coins, 12).is_some());
        assert!(TreasureCode::new(TreasureTier::Coins, 13).is_none());
    }

    #[test]
    fn display_renders_codes_then_extras() {
        let spec = parse("C4 + 2d6 pelts + (R1 × 2)");
        insta::assert_snapshot!(spec.to_string(), @"C4 + R1 + R1 + 2d6 pelts");
    }
}
