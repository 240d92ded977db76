//! Difficulty tiers and their attempt budgets

use std::fmt;
use std::str::FromStr;

/// Difficulty tier chosen on the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    /// 10 attempts
    Easy,
    /// 7 attempts
    Hard,
    /// 4 attempts
    Expert,
}

impl Difficulty {
    /// All tiers in menu order
    pub const ALL: [Self; 3] = [Self::Easy, Self::Hard, Self::Expert];

    /// Attempt budget for this tier
    pub const fn max_attempts(self) -> u32 {
        match self {
            Self::Easy => 10,
            Self::Hard => 7,
            Self::Expert => 4,
        }
    }

    /// Menu label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Hard => "Hard",
            Self::Expert => "Expert",
        }
    }

    /// Tier at a menu position
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown difficulty: {s}"))
    }
}
