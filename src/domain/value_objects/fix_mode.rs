//! Auto-fix philosophies

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which side of a stat block the auto-fixer trusts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixMode {
    /// Design mode: trust the labeled rating, scale the chassis down to it
    #[default]
    #[serde(alias = "enforce_cr")]
    EnforceRating,
    /// Audit mode: trust the stats, relabel the rating to match them
    FixMath,
}

impl FixMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EnforceRating => "enforce_rating",
            Self::FixMath => "fix_math",
        }
    }
}

impl fmt::Display for FixMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown fix mode '{0}' (expected 'enforce_rating' or 'fix_math')")]
pub struct FixModeParseError(String);

impl FromStr for FixMode {
    type Err = FixModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "enforce_rating" | "enforce_cr" | "design" => Ok(Self::EnforceRating),
            "fix_math" | "audit" => Ok(Self::FixMath),
            _ => Err(FixModeParseError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fix_mode_parsing() {
        assert_eq!("enforce_cr".parse::<FixMode>().unwrap(), FixMode::EnforceRating);
        assert_eq!("Fix-Math".parse::<FixMode>().unwrap(), FixMode::FixMath);
        assert!("rewrite".parse::<FixMode>().is_err());
    }
}
