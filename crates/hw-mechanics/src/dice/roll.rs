//! Dice roll results.

use serde::{Deserialize, Serialize};

use super::Die;

/// The faces and modifier of one evaluated [`DiceRoll`](super::DiceRoll).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollResult {
    /// The type of die that was rolled.
    pub die: Die,
    /// Individual face values, each in `1..=die.sides()`.
    pub faces: Vec<u32>,
    /// Flat modifier applied to the sum.
    pub modifier: i32,
}

impl RollResult {
    /// Sum of all faces plus the modifier.
    pub fn total(&self) -> i32 {
        self.faces
            .iter()
            .fold(self.modifier, |acc, f| acc.saturating_add(*f as i32))
    }
}

impl std::fmt::Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.faces.iter().map(|v| v.to_string()).collect();
        write!(f, "[{}]", values.join(", "))?;
        match self.modifier {
            0 => {}
            m if m > 0 => write!(f, " + {m}")?,
            m => write!(f, " - {}", m.unsigned_abs())?,
        }
        write!(f, " = {}", self.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_result(faces: &[u32], modifier: i32) -> RollResult {
        RollResult {
            die: Die::D6,
            faces: faces.to_vec(),
            modifier,
        }
    }

    #[test]
    fn total_includes_modifier() {
        assert_eq!(make_result(&[3, 5], 0).total(), 8);
        assert_eq!(make_result(&[3, 5], 2).total(), 10);
        assert_eq!(make_result(&[1], -3).total(), -2);
    }

    #[test]
    fn empty_result() {
        let r = make_result(&[], 0);
        assert_eq!(r.total(), 0);
        assert_eq!(r.to_string(), "[] = 0");
    }

    #[test]
    fn display() {
        assert_eq!(make_result(&[3, 5], 0).to_string(), "[3, 5] = 8");
        assert_eq!(make_result(&[3, 5], 1).to_string(), "[3, 5] + 1 = 9");
        assert_eq!(make_result(&[4], -2).to_string(), "[4] - 2 = 2");
    }
}
