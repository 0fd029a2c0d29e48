//! Monster statistics by challenge rating (Bestiary benchmarks)

use serde::Serialize;

use crate::domain::value_objects::ChallengeRating;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonsterStatistics {
    pub cr: &'static str,
    pub hp: u32,
    pub ac: i32,
    pub high_attack_bonus: i32,
    pub low_attack_bonus: i32,
    pub average_damage_per_round: u32,
    pub primary_ability_dc: u32,
    pub secondary_ability_dc: u32,
    pub good_save: i32,
    pub poor_save: i32,
}

#[allow(clippy::too_many_arguments)]
const fn row(
    cr: &'static str,
    hp: u32,
    ac: i32,
    high_attack_bonus: i32,
    low_attack_bonus: i32,
    average_damage_per_round: u32,
    primary_ability_dc: u32,
    secondary_ability_dc: u32,
    good_save: i32,
    poor_save: i32,
) -> MonsterStatistics {
    MonsterStatistics {
        cr,
        hp,
        ac,
        high_attack_bonus,
        low_attack_bonus,
        average_damage_per_round,
        primary_ability_dc,
        secondary_ability_dc,
        good_save,
        poor_save,
    }
}

/// Declared lowest rating first; relabeling searches rely on this order
pub const MONSTER_STATISTICS: [MonsterStatistics; 30] = [
    row("1/8", 5, 10, -1, -2, 2, 9, 6, 1, -2),
    row("1/6", 7, 10, 0, -1, 3, 10, 7, 2, -1),
    row("1/4", 8, 10, 0, -1, 3, 10, 7, 2, -1),
    row("1/3", 9, 10, 0, -1, 3, 10, 7, 2, -1),
    row("1/2", 10, 11, 1, 0, 4, 11, 8, 3, 0),
    row("1", 15, 12, 2, 1, 7, 12, 9, 4, 1),
    row("2", 20, 14, 4, 3, 10, 13, 9, 5, 1),
    row("3", 30, 15, 6, 4, 13, 14, 10, 6, 2),
    row("4", 40, 17, 8, 6, 16, 15, 10, 7, 3),
    row("5", 55, 18, 10, 7, 20, 15, 11, 8, 4),
    row("6", 70, 19, 12, 8, 25, 16, 11, 9, 5),
    row("7", 85, 20, 13, 10, 30, 17, 12, 10, 6),
    row("8", 100, 21, 15, 11, 35, 18, 12, 11, 7),
    row("9", 115, 23, 17, 12, 40, 18, 13, 12, 8),
    row("10", 130, 24, 18, 13, 45, 19, 13, 13, 9),
    row("11", 145, 25, 19, 14, 50, 20, 14, 14, 10),
    row("12", 160, 27, 21, 15, 55, 21, 15, 15, 11),
    row("13", 180, 28, 22, 16, 60, 21, 15, 16, 12),
    row("14", 200, 29, 23, 17, 65, 22, 16, 17, 12),
    row("15", 220, 30, 24, 18, 70, 23, 16, 18, 13),
    row("16", 240, 31, 26, 19, 80, 24, 17, 19, 14),
    row("17", 270, 32, 27, 20, 90, 24, 18, 20, 15),
    row("18", 300, 33, 28, 21, 100, 25, 18, 20, 16),
    row("19", 330, 34, 29, 22, 110, 26, 19, 21, 16),
    row("20", 370, 36, 30, 23, 120, 27, 20, 22, 17),
    row("21", 410, 37, 31, 24, 130, 27, 20, 23, 18),
    row("22", 450, 38, 32, 25, 140, 28, 21, 24, 18),
    row("23", 500, 39, 34, 26, 150, 29, 22, 25, 19),
    row("24", 550, 41, 35, 27, 160, 29, 22, 26, 20),
    row("25", 600, 42, 36, 28, 170, 30, 23, 27, 20),
];

pub fn benchmarks_for(rating: &ChallengeRating) -> Option<&'static MonsterStatistics> {
    MONSTER_STATISTICS
        .iter()
        .find(|row| row.cr == rating.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_benchmark_lookup_normalizes() {
        let half = benchmarks_for(&ChallengeRating::new("0.5")).unwrap();
        assert_eq!(half.hp, 10);
        assert_eq!(benchmarks_for(&ChallengeRating::new("1")).unwrap().hp, 15);
        assert!(benchmarks_for(&ChallengeRating::new("26")).is_none());
    }

    #[test]
    fn test_benchmark_hp_is_ascending() {
        assert!(MONSTER_STATISTICS.windows(2).all(|pair| pair[0].hp < pair[1].hp));
    }
}
