//! Economic tiers and treasure types used by wealth validation

use std::fmt;

use serde::{Deserialize, Serialize};

/// Wealth track a creature is measured against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EconomicTier {
    /// PC-class levels dominate the chassis
    #[serde(rename = "Heroic NPC", alias = "heroic_npc")]
    HeroicNpc,
    /// NPC-class levels (warrior, expert, ...)
    #[serde(rename = "Basic NPC", alias = "basic_npc")]
    BasicNpc,
    /// Racial Hit Dice, treasure by rating
    #[serde(rename = "Monster", alias = "monster")]
    Monster,
}

impl EconomicTier {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::HeroicNpc => "Heroic NPC",
            Self::BasicNpc => "Basic NPC",
            Self::Monster => "Monster",
        }
    }
}

impl fmt::Display for EconomicTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Treasure line of a monster stat block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TreasureType {
    #[serde(alias = "none")]
    None,
    #[serde(alias = "incidental")]
    Incidental,
    #[default]
    #[serde(alias = "standard")]
    Standard,
    #[serde(alias = "double")]
    Double,
    #[serde(alias = "triple")]
    Triple,
    #[serde(rename = "NPC Gear", alias = "npc_gear")]
    NpcGear,
}

impl TreasureType {
    /// Multiplier applied to the treasure-by-rating value.
    /// NPC gear is valued like standard treasure.
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Incidental => 0.5,
            Self::Standard | Self::NpcGear => 1.0,
            Self::Double => 2.0,
            Self::Triple => 3.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_treasure_multipliers() {
        assert_eq!(TreasureType::None.multiplier(), 0.0);
        assert_eq!(TreasureType::Incidental.multiplier(), 0.5);
        assert_eq!(TreasureType::Standard.multiplier(), 1.0);
        assert_eq!(TreasureType::Double.multiplier(), 2.0);
        assert_eq!(TreasureType::Triple.multiplier(), 3.0);
    }

    #[test]
    fn test_tier_serde_names() {
        let tier: EconomicTier = serde_json::from_str("\"Basic NPC\"").unwrap();
        assert_eq!(tier, EconomicTier::BasicNpc);
        assert_eq!(serde_json::to_string(&EconomicTier::HeroicNpc).unwrap(), "\"Heroic NPC\"");
    }
}
