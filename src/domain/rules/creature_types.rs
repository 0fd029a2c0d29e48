//! Per-type progression rules (Bestiary appendix)

use serde::Serialize;

use crate::domain::value_objects::{BabProgression, CreatureType, Save};

/// Hit die used when a creature type has no entry in the table
pub const DEFAULT_HIT_DIE: u32 = 8;

/// Progression used when a creature type has no entry in the table
pub const DEFAULT_BAB_PROGRESSION: BabProgression = BabProgression::Medium;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CreatureTypeRule {
    pub name: &'static str,
    pub bab_progression: BabProgression,
    pub good_saves: &'static [Save],
    pub skill_ranks_per_hd: u32,
    pub hit_die: u32,
    pub no_skills_or_feats: bool,
}

const fn rule(
    name: &'static str,
    bab_progression: BabProgression,
    good_saves: &'static [Save],
    skill_ranks_per_hd: u32,
    hit_die: u32,
    no_skills_or_feats: bool,
) -> CreatureTypeRule {
    CreatureTypeRule {
        name,
        bab_progression,
        good_saves,
        skill_ranks_per_hd,
        hit_die,
        no_skills_or_feats,
    }
}

use BabProgression::{Fast, Medium, Slow};
use Save::{Fort, Ref, Will};

pub const CREATURE_TYPE_RULES: [CreatureTypeRule; 13] = [
    rule("Aberration", Medium, &[Will], 4, 8, false),
    rule("Animal", Medium, &[Fort, Ref], 2, 8, false),
    rule("Construct", Fast, &[], 2, 10, true),
    rule("Dragon", Fast, &[Fort, Ref, Will], 6, 12, false),
    rule("Fey", Slow, &[Ref, Will], 6, 6, false),
    rule("Humanoid", Medium, &[Ref], 2, 8, false),
    rule("Magical Beast", Fast, &[Fort, Ref], 2, 10, false),
    rule("Monstrous Humanoid", Fast, &[Ref, Will], 4, 10, false),
    rule("Ooze", Medium, &[], 2, 8, true),
    rule("Outsider", Fast, &[Ref, Will], 6, 10, false),
    rule("Plant", Medium, &[Fort], 2, 8, false),
    rule("Undead", Medium, &[Will], 4, 8, false),
    rule("Vermin", Medium, &[Fort], 2, 8, true),
];

/// Rules for a creature type, `None` for types outside the table
pub fn creature_type_rule(creature_type: &CreatureType) -> Option<&'static CreatureTypeRule> {
    let name = creature_type.display_name();
    CREATURE_TYPE_RULES
        .iter()
        .find(|rule| rule.name.eq_ignore_ascii_case(name))
}
