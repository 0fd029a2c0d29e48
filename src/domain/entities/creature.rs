//! Creature record - the structured stat block every validator and fixer consumes
//!
//! Many defense/offense numbers come in pairs: the canonical field (`hp`, `ac`,
//! `bab`, ...) and a `*_claimed` shadow holding what the author wrote. Readers
//! resolve the claimed value as `claimed ?? canonical` through
//! [`CreatureView`](super::CreatureView); writers (scaler, fixer) set both.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{
    Ability, ChallengeRating, CreatureSize, CreatureType, EconomicTier, EncounterExceptionKind,
    LevelRange, TreasureType,
};

/// A structured PF1e stat block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatureRecord {
    // Header
    pub name: String,
    pub cr: Option<ChallengeRating>,
    pub xp: Option<u32>,
    pub alignment: Option<String>,
    pub size: CreatureSize,
    #[serde(rename = "type")]
    pub creature_type: CreatureType,
    pub subtypes: Vec<String>,

    // Chassis
    pub racial_hd: Option<u32>,
    pub class_levels: Vec<ClassLevel>,
    /// Hit dice expression as written, e.g. "4d10+8"
    pub hd: Option<String>,

    // Defense
    pub hp: Option<i32>,
    pub hp_claimed: Option<i32>,
    pub ac: Option<i32>,
    pub ac_claimed: Option<i32>,
    pub touch: Option<i32>,
    pub touch_claimed: Option<i32>,
    pub flat_footed: Option<i32>,
    pub flat_footed_claimed: Option<i32>,
    pub fort: Option<i32>,
    pub fort_claimed: Option<i32>,
    #[serde(rename = "ref")]
    pub reflex: Option<i32>,
    #[serde(rename = "ref_claimed")]
    pub reflex_claimed: Option<i32>,
    pub will: Option<i32>,
    pub will_claimed: Option<i32>,

    // Offense
    pub bab: Option<i32>,
    pub bab_claimed: Option<i32>,
    pub cmb: Option<i32>,
    pub cmb_claimed: Option<i32>,
    pub cmd: Option<i32>,
    pub cmd_claimed: Option<i32>,

    // Statistics
    #[serde(flatten)]
    pub abilities: AbilityScores,
    pub feats: Vec<String>,

    // Economy
    pub economic_tier: Option<EconomicTier>,
    pub treasure_type: Option<TreasureType>,
    /// Total market value of all gear, in gp
    pub gear_value: Option<f64>,
    pub claimed_effective_level: Option<u32>,

    // Encounter context
    pub party_level: Option<u32>,
    pub adventure_level_range: Option<LevelRange>,
    pub encounter_exception: bool,
    pub encounter_exception_type: Option<EncounterExceptionKind>,
    pub encounter_exception_reason: Option<String>,

    // Free text preserved from the source stat block
    pub melee_line: Option<String>,
    pub ranged_line: Option<String>,
    pub special_attacks_line: Option<String>,
    pub spells_block: Option<String>,
    pub skills_line: Option<String>,
    pub equipment_line: Option<String>,
    pub special_abilities_block: Option<String>,
    pub speed_line: Option<String>,
}

impl CreatureRecord {
    pub fn new(
        name: impl Into<String>,
        cr: impl Into<ChallengeRating>,
        creature_type: impl Into<CreatureType>,
    ) -> Self {
        Self {
            name: name.into(),
            cr: Some(cr.into()),
            creature_type: creature_type.into(),
            ..Default::default()
        }
    }

    pub fn with_size(mut self, size: CreatureSize) -> Self {
        self.size = size;
        self
    }

    pub fn with_xp(mut self, xp: u32) -> Self {
        self.xp = Some(xp);
        self
    }

    pub fn with_racial_hd(mut self, racial_hd: u32) -> Self {
        self.racial_hd = Some(racial_hd);
        self
    }

    pub fn with_class(mut self, class_name: impl Into<String>, level: u32) -> Self {
        self.class_levels.push(ClassLevel::new(class_name, level));
        self
    }

    pub fn with_ability(mut self, ability: Ability, score: i32) -> Self {
        self.abilities.set(ability, score);
        self
    }

    pub fn with_hp(mut self, hp: i32) -> Self {
        self.hp = Some(hp);
        self
    }

    pub fn with_ac(mut self, ac: i32) -> Self {
        self.ac = Some(ac);
        self
    }

    pub fn with_bab(mut self, bab: i32) -> Self {
        self.bab = Some(bab);
        self
    }

    pub fn with_cmd(mut self, cmd: i32) -> Self {
        self.cmd = Some(cmd);
        self
    }

    pub fn with_feat(mut self, feat: impl Into<String>) -> Self {
        self.feats.push(feat.into());
        self
    }
}

/// Levels in a single class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassLevel {
    pub class_name: String,
    #[serde(default)]
    pub level: u32,
}

impl ClassLevel {
    pub fn new(class_name: impl Into<String>, level: u32) -> Self {
        Self {
            class_name: class_name.into(),
            level,
        }
    }
}

/// The six ability scores; a missing score reads as 10
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AbilityScores {
    #[serde(rename = "str")]
    pub strength: Option<i32>,
    #[serde(rename = "dex")]
    pub dexterity: Option<i32>,
    #[serde(rename = "con")]
    pub constitution: Option<i32>,
    #[serde(rename = "int")]
    pub intelligence: Option<i32>,
    #[serde(rename = "wis")]
    pub wisdom: Option<i32>,
    #[serde(rename = "cha")]
    pub charisma: Option<i32>,
}

impl AbilityScores {
    pub const DEFAULT_SCORE: i32 = 10;

    pub fn get(&self, ability: Ability) -> Option<i32> {
        match ability {
            Ability::Str => self.strength,
            Ability::Dex => self.dexterity,
            Ability::Con => self.constitution,
            Ability::Int => self.intelligence,
            Ability::Wis => self.wisdom,
            Ability::Cha => self.charisma,
        }
    }

    pub fn score(&self, ability: Ability) -> i32 {
        self.get(ability).unwrap_or(Self::DEFAULT_SCORE)
    }

    pub fn set(&mut self, ability: Ability, score: i32) {
        let slot = match ability {
            Ability::Str => &mut self.strength,
            Ability::Dex => &mut self.dexterity,
            Ability::Con => &mut self.constitution,
            Ability::Int => &mut self.intelligence,
            Ability::Wis => &mut self.wisdom,
            Ability::Cha => &mut self.charisma,
        };
        *slot = Some(score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_record_deserializes_with_defaults() {
        let record: CreatureRecord = serde_json::from_str(
            r#"{"name": "Goblin", "cr": 0.333, "type": "Humanoid", "str": 11, "ref": 2}"#,
        )
        .unwrap();

        assert_eq!(record.cr, Some(ChallengeRating::new("1/3")));
        assert_eq!(record.creature_type, CreatureType::Humanoid);
        assert_eq!(record.size, CreatureSize::Medium);
        assert_eq!(record.abilities.score(Ability::Str), 11);
        assert_eq!(record.abilities.score(Ability::Dex), 10);
        assert_eq!(record.reflex, Some(2));
        assert!(record.feats.is_empty());
        assert!(!record.encounter_exception);
    }

    #[test]
    fn test_builder() {
        let record = CreatureRecord::new("Orc Captain", "3", "Humanoid")
            .with_class("Fighter", 4)
            .with_ability(Ability::Str, 17)
            .with_feat("Power Attack");

        assert_eq!(record.class_levels, vec![ClassLevel::new("Fighter", 4)]);
        assert_eq!(record.abilities.strength, Some(17));
        assert_eq!(record.feats, vec!["Power Attack".to_string()]);
    }
}
