//! Creature types, ability scores, saves and attack-bonus progressions

use std::fmt;

use serde::{Deserialize, Serialize};

/// Creature type (category). Unrecognised names are kept verbatim in `Other`
/// and fall back to default progression rules downstream.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CreatureType {
    Aberration,
    Animal,
    Construct,
    Dragon,
    Fey,
    Humanoid,
    MagicalBeast,
    MonstrousHumanoid,
    Ooze,
    Outsider,
    Plant,
    Undead,
    Vermin,
    Other(String),
}

impl CreatureType {
    pub fn display_name(&self) -> &str {
        match self {
            Self::Aberration => "Aberration",
            Self::Animal => "Animal",
            Self::Construct => "Construct",
            Self::Dragon => "Dragon",
            Self::Fey => "Fey",
            Self::Humanoid => "Humanoid",
            Self::MagicalBeast => "Magical Beast",
            Self::MonstrousHumanoid => "Monstrous Humanoid",
            Self::Ooze => "Ooze",
            Self::Outsider => "Outsider",
            Self::Plant => "Plant",
            Self::Undead => "Undead",
            Self::Vermin => "Vermin",
            Self::Other(name) => name,
        }
    }
}

impl Default for CreatureType {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<String> for CreatureType {
    fn from(value: String) -> Self {
        let key: String = value
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "aberration" => Self::Aberration,
            "animal" => Self::Animal,
            "construct" => Self::Construct,
            "dragon" => Self::Dragon,
            "fey" => Self::Fey,
            "humanoid" => Self::Humanoid,
            "magicalbeast" => Self::MagicalBeast,
            "monstroushumanoid" => Self::MonstrousHumanoid,
            "ooze" => Self::Ooze,
            "outsider" => Self::Outsider,
            "plant" => Self::Plant,
            "undead" => Self::Undead,
            "vermin" => Self::Vermin,
            _ => Self::Other(value.trim().to_string()),
        }
    }
}

impl From<&str> for CreatureType {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<CreatureType> for String {
    fn from(value: CreatureType) -> Self {
        value.display_name().to_string()
    }
}

impl fmt::Display for CreatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Base attack bonus growth rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BabProgression {
    /// 1 per Hit Die
    Fast,
    /// 3/4 per Hit Die, rounded down
    Medium,
    /// 1/2 per Hit Die, rounded down
    Slow,
}

impl BabProgression {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fast => "fast",
            Self::Medium => "medium",
            Self::Slow => "slow",
        }
    }

    pub fn attack_bonus(&self, levels: u32) -> i32 {
        let levels = i64::from(levels);
        let bonus = match self {
            Self::Fast => levels,
            Self::Medium => levels * 3 / 4,
            Self::Slow => levels / 2,
        };
        i32::try_from(bonus).unwrap_or(i32::MAX)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Save {
    Fort,
    Ref,
    Will,
}

impl Save {
    pub const ALL: [Save; 3] = [Self::Fort, Self::Ref, Self::Will];

    /// Ability whose modifier adds to this save
    pub fn key_ability(&self) -> Ability {
        match self {
            Self::Fort => Ability::Con,
            Self::Ref => Ability::Dex,
            Self::Will => Ability::Wis,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Fort => "Fort",
            Self::Ref => "Ref",
            Self::Will => "Will",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ability {
    Str,
    Dex,
    Con,
    Int,
    Wis,
    Cha,
}

impl Ability {
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Self::Str => "STR",
            Self::Dex => "DEX",
            Self::Con => "CON",
            Self::Int => "INT",
            Self::Wis => "WIS",
            Self::Cha => "CHA",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creature_type_parsing() {
        assert_eq!(CreatureType::from("Magical Beast"), CreatureType::MagicalBeast);
        assert_eq!(CreatureType::from("monstrous_humanoid"), CreatureType::MonstrousHumanoid);
        assert_eq!(
            CreatureType::from("Chaos-Beast"),
            CreatureType::Other("Chaos-Beast".to_string())
        );
        assert_eq!(String::from(CreatureType::MagicalBeast), "Magical Beast");
    }

    #[test]
    fn test_bab_progressions_round_down() {
        assert_eq!(BabProgression::Fast.attack_bonus(7), 7);
        assert_eq!(BabProgression::Medium.attack_bonus(2), 1);
        assert_eq!(BabProgression::Medium.attack_bonus(7), 5);
        assert_eq!(BabProgression::Slow.attack_bonus(7), 3);
        assert_eq!(BabProgression::Fast.attack_bonus(u32::MAX), i32::MAX);
        assert_eq!(BabProgression::Medium.attack_bonus(u32::MAX), i32::MAX);
    }
}
