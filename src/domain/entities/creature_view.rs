//! Normalized read-only view over a [`CreatureRecord`]
//!
//! Every validator, the scaler and the auto-fixer read through this view so
//! that default substitution happens in exactly one place: missing ability
//! scores read as 10, missing Hit Dice as 0, unknown creature types fall back
//! to medium progression with a d8, and each claimed value resolves as
//! `claimed ?? canonical`.

use crate::domain::entities::{ClassLevel, CreatureRecord};
use crate::domain::rules::{
    creature_type_rule, CreatureTypeRule, SizeConstants, DEFAULT_BAB_PROGRESSION, DEFAULT_HIT_DIE,
};
use crate::domain::services::derivation;
use crate::domain::value_objects::{Ability, BabProgression, Save};

#[derive(Debug, Clone, Copy)]
pub struct CreatureView<'a> {
    pub record: &'a CreatureRecord,
    pub type_rule: Option<&'static CreatureTypeRule>,
    pub racial_hd: u32,
    pub total_hd: u32,
    /// Faces of the chassis hit die
    pub hit_die: u32,
    pub size: SizeConstants,
}

impl<'a> CreatureView<'a> {
    pub fn new(record: &'a CreatureRecord) -> Self {
        let type_rule = creature_type_rule(&record.creature_type);
        let racial_hd = record.racial_hd.unwrap_or(0);
        let total_hd = derivation::total_hit_dice(racial_hd, &record.class_levels);
        let hit_die = record
            .hd
            .as_deref()
            .and_then(derivation::parse_hit_die)
            .or(type_rule.map(|rule| rule.hit_die))
            .unwrap_or(DEFAULT_HIT_DIE);

        Self {
            record,
            type_rule,
            racial_hd,
            total_hd,
            hit_die,
            size: record.size.constants(),
        }
    }

    pub fn class_levels(&self) -> &'a [ClassLevel] {
        &self.record.class_levels
    }

    pub fn score(&self, ability: Ability) -> i32 {
        self.record.abilities.score(ability)
    }

    pub fn modifier(&self, ability: Ability) -> i32 {
        derivation::modifier(self.score(ability))
    }

    pub fn bab_progression(&self) -> BabProgression {
        self.type_rule
            .map(|rule| rule.bab_progression)
            .unwrap_or(DEFAULT_BAB_PROGRESSION)
    }

    pub fn has_good_save(&self, save: Save) -> bool {
        self.type_rule
            .is_some_and(|rule| rule.good_saves.contains(&save))
    }

    pub fn claimed_bab(&self) -> Option<i32> {
        self.record.bab_claimed.or(self.record.bab)
    }

    pub fn claimed_cmb(&self) -> Option<i32> {
        self.record.cmb_claimed.or(self.record.cmb)
    }

    pub fn claimed_cmd(&self) -> Option<i32> {
        self.record.cmd_claimed.or(self.record.cmd)
    }

    pub fn claimed_hp(&self) -> Option<i32> {
        self.record.hp_claimed.or(self.record.hp)
    }

    pub fn claimed_ac(&self) -> Option<i32> {
        self.record.ac_claimed.or(self.record.ac)
    }

    pub fn claimed_save(&self, save: Save) -> Option<i32> {
        let record = self.record;
        match save {
            Save::Fort => record.fort_claimed.or(record.fort),
            Save::Ref => record.reflex_claimed.or(record.reflex),
            Save::Will => record.will_claimed.or(record.will),
        }
    }

    /// Attack bonus the chassis allows (racial progression plus class progressions)
    pub fn expected_bab(&self) -> i32 {
        derivation::expected_attack_bonus(
            self.racial_hd,
            self.bab_progression(),
            self.class_levels(),
            self.claimed_bab(),
        )
    }

    /// CMD for a given attack bonus with this creature's Str, Dex and size
    pub fn cmd_for(&self, bab: i32) -> i32 {
        derivation::expected_combat_maneuver_defense(
            bab,
            self.modifier(Ability::Str),
            self.modifier(Ability::Dex),
            self.size.cmb_cmd_mod,
        )
    }

    /// CMB for a given attack bonus: BAB + Str + size
    pub fn cmb_for(&self, bab: i32) -> i32 {
        bab + self.modifier(Ability::Str) + self.size.cmb_cmd_mod
    }

    /// AC with no armor, natural armor or deflection: 10 + Dex + size
    pub fn bare_ac(&self) -> i32 {
        10 + self.modifier(Ability::Dex) + self.size.ac_attack_mod
    }

    /// Party level the creature is expected to face, explicit or from the adventure band
    pub fn expected_party_level(&self) -> Option<u32> {
        self.record
            .party_level
            .or(self.record.adventure_level_range.map(|range| range.midpoint()))
    }
}

impl CreatureRecord {
    pub fn view(&self) -> CreatureView<'_> {
        CreatureView::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::CreatureSize;

    #[test]
    fn test_defaults_for_sparse_record() {
        let record = CreatureRecord::default();
        let view = record.view();

        assert_eq!(view.total_hd, 0);
        assert_eq!(view.hit_die, DEFAULT_HIT_DIE);
        assert_eq!(view.bab_progression(), BabProgression::Medium);
        assert_eq!(view.modifier(Ability::Con), 0);
        assert!(!view.has_good_save(Save::Fort));
        assert_eq!(view.bare_ac(), 10);
    }

    #[test]
    fn test_claimed_values_win_over_canonical() {
        let mut record = CreatureRecord::new("Ogre", "3", "Humanoid").with_hp(30);
        record.hp_claimed = Some(42);
        assert_eq!(record.view().claimed_hp(), Some(42));

        record.hp_claimed = None;
        assert_eq!(record.view().claimed_hp(), Some(30));
    }

    #[test]
    fn test_hit_die_from_expression() {
        let mut record = CreatureRecord::new("Toad", "1", "Animal").with_size(CreatureSize::Large);
        assert_eq!(record.view().hit_die, 8);

        record.hd = Some("2d4 + 4".to_string());
        assert_eq!(record.view().hit_die, 4);
        assert_eq!(record.view().size.ac_attack_mod, -1);
    }
}
