//! Class progression table

use serde::Serialize;

use crate::domain::value_objects::{BabProgression, Save};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClassStatistics {
    pub name: &'static str,
    pub hit_die: u32,
    pub bab_progression: BabProgression,
    pub good_saves: &'static [Save],
    pub skill_ranks_per_level: u32,
    pub cr_mod: i32,
    /// NPC classes (warrior, expert, commoner, adept, aristocrat)
    pub basic_npc: bool,
}

const fn class(
    name: &'static str,
    hit_die: u32,
    bab_progression: BabProgression,
    good_saves: &'static [Save],
    skill_ranks_per_level: u32,
    cr_mod: i32,
) -> ClassStatistics {
    ClassStatistics {
        name,
        hit_die,
        bab_progression,
        good_saves,
        skill_ranks_per_level,
        cr_mod,
        basic_npc: cr_mod == -2,
    }
}

use BabProgression::{Fast, Medium, Slow};
use Save::{Fort, Ref, Will};

pub const CLASS_STATISTICS: [ClassStatistics; 16] = [
    class("Barbarian", 12, Fast, &[Fort], 4, -1),
    class("Bard", 8, Medium, &[Ref, Will], 6, -1),
    class("Cleric", 8, Medium, &[Fort, Will], 2, -1),
    class("Druid", 8, Medium, &[Fort, Will], 4, -1),
    class("Fighter", 10, Fast, &[Fort], 2, -1),
    class("Monk", 8, Medium, &[Fort, Ref, Will], 4, -1),
    class("Paladin", 10, Fast, &[Fort, Will], 2, -1),
    class("Ranger", 10, Fast, &[Fort, Ref], 6, -1),
    class("Rogue", 8, Medium, &[Ref], 8, -1),
    class("Sorcerer", 6, Slow, &[Will], 2, -1),
    class("Wizard", 6, Slow, &[Will], 2, -1),
    class("Warrior", 10, Fast, &[Fort], 2, -2),
    class("Expert", 8, Medium, &[Ref, Will], 6, -2),
    class("Commoner", 6, Slow, &[], 2, -2),
    class("Adept", 6, Slow, &[Will], 2, -2),
    class("Aristocrat", 8, Medium, &[Will], 4, -2),
];

/// Case-insensitive class lookup
pub fn class_statistics(name: &str) -> Option<&'static ClassStatistics> {
    let name = name.trim();
    CLASS_STATISTICS
        .iter()
        .find(|class| class.name.eq_ignore_ascii_case(name))
}

/// Whether a class belongs to the low-power NPC roster
pub fn is_basic_npc_class(name: &str) -> bool {
    class_statistics(name).is_some_and(|class| class.basic_npc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_npc_roster() {
        let roster: Vec<_> = CLASS_STATISTICS
            .iter()
            .filter(|class| class.basic_npc)
            .map(|class| class.name)
            .collect();
        assert_eq!(roster, ["Warrior", "Expert", "Commoner", "Adept", "Aristocrat"]);
        assert!(is_basic_npc_class("warrior"));
        assert!(!is_basic_npc_class("Fighter"));
        assert!(!is_basic_npc_class("Gunslinger"));
    }
}
