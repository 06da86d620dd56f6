//! Named Cayley-Dickson levels.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The first five algebras of the Cayley-Dickson sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algebra {
    /// ℝ, level 0.
    Real,
    /// ℂ, level 1.
    Complex,
    /// ℍ, level 2.
    Quaternion,
    /// 𝕆, level 3.
    Octonion,
    /// 𝕊, level 4.
    Sedenion,
}

impl Algebra {
    /// Every named algebra, by increasing level.
    pub const ALL: [Algebra; 5] = [
        Algebra::Real,
        Algebra::Complex,
        Algebra::Quaternion,
        Algebra::Octonion,
        Algebra::Sedenion,
    ];

    /// The doubling level.
    pub fn level(self) -> u32 {
        match self {
            Algebra::Real => 0,
            Algebra::Complex => 1,
            Algebra::Quaternion => 2,
            Algebra::Octonion => 3,
            Algebra::Sedenion => 4,
        }
    }

    /// Number of basis units, `2^level`.
    pub fn dimension(self) -> usize {
        1 << self.level()
    }

    /// The named algebra at `level`, if it has a name.
    pub fn from_level(level: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.level() == level)
    }

    /// Lower-case name.
    pub fn name(self) -> &'static str {
        match self {
            Algebra::Real => "real",
            Algebra::Complex => "complex",
            Algebra::Quaternion => "quaternion",
            Algebra::Octonion => "octonion",
            Algebra::Sedenion => "sedenion",
        }
    }

    /// Blackboard-bold symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Algebra::Real => "ℝ",
            Algebra::Complex => "ℂ",
            Algebra::Quaternion => "ℍ",
            Algebra::Octonion => "𝕆",
            Algebra::Sedenion => "𝕊",
        }
    }

    /// Parses either a raw level (`"5"`) or an algebra name.
    pub fn parse_level(input: &str) -> Result<u32> {
        match input.trim().parse::<u32>() {
            Ok(level) => Ok(level),
            Err(_) => input.parse::<Algebra>().map(Algebra::level),
        }
    }
}

impl fmt::Display for Algebra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algebra {
    type Err = Error;

    /// Case-insensitive; accepts plurals and the symbols.
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase();
        let singular = normalized.strip_suffix('s').unwrap_or(&normalized);
        Self::ALL
            .into_iter()
            .find(|a| a.name() == singular || a.name() == normalized || a.symbol() == normalized)
            .ok_or_else(|| Error::unknown_algebra(s.trim()))
    }
}
