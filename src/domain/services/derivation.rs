//! Derivation utilities - the rules formulas shared by validators, scaler and fixer

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::entities::ClassLevel;
use crate::domain::rules::{benchmarks_for, class_statistics, EXPERIENCE_BY_RATING};
use crate::domain::value_objects::{BabProgression, ChallengeRating};

/// Average of a d8, used to turn a benchmark HP budget into a Hit Dice estimate
pub const AVERAGE_D8: f64 = 4.5;

/// Largest die a hit-dice expression may name
pub const MAX_HIT_DIE_FACES: u32 = 100;

static HIT_DIE_EXPRESSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+)\s*d\s*(\d+)").expect("hit die pattern is valid"));

/// floor((score - 10) / 2)
pub fn modifier(score: i32) -> i32 {
    (score - 10).div_euclid(2)
}

pub fn total_hit_dice(racial_hd: u32, class_levels: &[ClassLevel]) -> u32 {
    class_levels
        .iter()
        .fold(racial_hd, |total, class| total.saturating_add(class.level))
}

/// Racial contribution (type progression) plus each known class's contribution.
///
/// With no racial Hit Dice and no class levels there is nothing to derive
/// from, so the claimed bonus is returned unchanged. Unknown classes count
/// toward Hit Dice elsewhere but add no attack bonus.
pub fn expected_attack_bonus(
    racial_hd: u32,
    racial_progression: BabProgression,
    class_levels: &[ClassLevel],
    claimed: Option<i32>,
) -> i32 {
    if racial_hd == 0 && class_levels.iter().all(|class| class.level == 0) {
        return claimed.unwrap_or(0);
    }

    let racial = racial_progression.attack_bonus(racial_hd);
    class_levels
        .iter()
        .filter_map(|class| {
            class_statistics(&class.class_name)
                .map(|stats| stats.bab_progression.attack_bonus(class.level))
        })
        .fold(racial, i32::saturating_add)
}

/// 10 + BAB + Str + Dex + size
pub fn expected_combat_maneuver_defense(
    attack_bonus: i32,
    str_mod: i32,
    dex_mod: i32,
    size_modifier: i32,
) -> i32 {
    10 + attack_bonus + str_mod + dex_mod + size_modifier
}

/// floor(HD * average die) + HD * Con, with average die = faces / 2 + 0.5
pub fn expected_hit_points(hit_dice: u32, hit_die_faces: u32, con_mod: i32) -> i32 {
    let hit_dice = i64::from(hit_dice);
    let dice = hit_dice * (i64::from(hit_die_faces) + 1) / 2;
    clamp_i32(dice + hit_dice * i64::from(con_mod))
}

/// Average hit points gained per Hit Die, never below 1
pub fn hit_points_per_die(hit_die_faces: u32, con_mod: i32) -> f64 {
    (f64::from(hit_die_faces) / 2.0 + 0.5 + f64::from(con_mod)).max(1.0)
}

/// Hit Dice needed to land on `target_hp`, never below 1
pub fn hit_dice_for_target(target_hp: u32, hp_per_die: f64) -> u32 {
    ((f64::from(target_hp) / hp_per_die).round() as u32).max(1)
}

/// floor((HD + 1) / 2); no feats without Hit Dice
pub fn legal_feat_count(hit_dice: u32) -> u32 {
    if hit_dice == 0 {
        0
    } else {
        hit_dice / 2 + hit_dice % 2
    }
}

/// Good saves: floor(2 + HD / 2); poor saves: floor(HD / 3)
pub fn base_save(hit_dice: u32, good: bool) -> i32 {
    let hit_dice = hit_dice as i32;
    if good {
        2 + hit_dice / 2
    } else {
        hit_dice / 3
    }
}

/// Hit Dice implied by a rating's benchmark HP, assuming d8s
pub fn estimated_hit_dice(rating: &ChallengeRating) -> Option<u32> {
    let row = benchmarks_for(rating)?;
    Some(((f64::from(row.hp) / AVERAGE_D8).round() as u32).max(1))
}

/// Numeric value of a rating, fractions as decimals
pub fn challenge_rating_value(rating: &ChallengeRating) -> Option<f64> {
    rating.numeric_value()
}

/// Rating whose tabulated award is closest to `experience`.
///
/// Linear scan in table order with a strict comparison, so on an exact tie
/// between two ratings the one declared first (the lower rating) wins. The
/// tie-break is arbitrary but callers depend on it staying stable.
pub fn nearest_challenge_rating(experience: u32) -> ChallengeRating {
    let mut closest = "1";
    let mut min_diff = u32::MAX;

    for (cr, xp) in EXPERIENCE_BY_RATING {
        let diff = xp.abs_diff(experience);
        if diff < min_diff {
            min_diff = diff;
            closest = cr;
        }
    }
    ChallengeRating::new(closest)
}

/// Die size from an expression like "4d10+8"
pub fn parse_hit_die(expression: &str) -> Option<u32> {
    HIT_DIE_EXPRESSION
        .captures(expression)
        .and_then(|captures| captures.get(2))
        .and_then(|faces| faces.as_str().parse().ok())
        .filter(|faces| (1..=MAX_HIT_DIE_FACES).contains(faces))
}

/// "{HD}d{faces}+{HD * Con}" as printed in a stat block
pub fn hit_dice_expression(hit_dice: u32, hit_die_faces: u32, con_mod: i32) -> String {
    let bonus = i64::from(hit_dice) * i64::from(con_mod);
    if bonus >= 0 {
        format!("{hit_dice}d{hit_die_faces}+{bonus}")
    } else {
        format!("{hit_dice}d{hit_die_faces}{bonus}")
    }
}

fn clamp_i32(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_floors() {
        assert_eq!(modifier(10), 0);
        assert_eq!(modifier(11), 0);
        assert_eq!(modifier(9), -1);
        assert_eq!(modifier(1), -5);
        assert_eq!(modifier(18), 4);
        assert_eq!(modifier(45), 17);
    }

    #[test]
    fn test_fast_progression_equals_hit_dice() {
        for hd in 1..=30 {
            assert_eq!(expected_attack_bonus(hd, BabProgression::Fast, &[], None), hd as i32);
        }
    }

    #[test]
    fn test_attack_bonus_sums_racial_and_classes() {
        let classes = vec![ClassLevel::new("Fighter", 3), ClassLevel::new("Wizard", 3)];
        // floor(2 * 0.75) + 3 + floor(3 * 0.5)
        assert_eq!(expected_attack_bonus(2, BabProgression::Medium, &classes, None), 5);

        let unknown = vec![ClassLevel::new("Gunslinger", 4)];
        assert_eq!(expected_attack_bonus(0, BabProgression::Fast, &unknown, Some(9)), 0);
    }

    #[test]
    fn test_attack_bonus_escape_hatch() {
        assert_eq!(expected_attack_bonus(0, BabProgression::Fast, &[], Some(7)), 7);
        assert_eq!(expected_attack_bonus(0, BabProgression::Fast, &[], None), 0);
    }

    #[test]
    fn test_feat_ceiling() {
        assert_eq!(legal_feat_count(0), 0);
        for hd in 1..=40 {
            assert_eq!(legal_feat_count(hd), (hd + 1) / 2);
        }
        assert_eq!(legal_feat_count(1), 1);
        assert_eq!(legal_feat_count(4), 2);
    }

    #[test]
    fn test_hit_points() {
        // 2d8, Con +2: floor(2 * 4.5) + 4
        assert_eq!(expected_hit_points(2, 8, 2), 13);
        // 3d10, Con -1: floor(16.5) - 3
        assert_eq!(expected_hit_points(3, 10, -1), 13);
        assert_eq!(hit_points_per_die(4, -5), 1.0);
        assert_eq!(hit_dice_for_target(15, 4.5), 3);
    }

    #[test]
    fn test_saves_and_cmd() {
        assert_eq!(base_save(2, true), 3);
        assert_eq!(base_save(2, false), 0);
        assert_eq!(base_save(7, false), 2);
        assert_eq!(expected_combat_maneuver_defense(1, 2, 1, 0), 14);
    }

    #[test]
    fn test_estimated_hit_dice() {
        assert_eq!(estimated_hit_dice(&ChallengeRating::new("1")), Some(3));
        assert_eq!(estimated_hit_dice(&ChallengeRating::new("1/8")), Some(1));
        assert_eq!(estimated_hit_dice(&ChallengeRating::new("99")), None);
    }

    #[test]
    fn test_nearest_rating() {
        assert_eq!(nearest_challenge_rating(400).as_str(), "1");
        assert_eq!(nearest_challenge_rating(1_500).as_str(), "5");
        assert_eq!(nearest_challenge_rating(0).as_str(), "1/8");
        assert_eq!(nearest_challenge_rating(5_000_000).as_str(), "25");
        // 300 sits exactly between 1/2 (200) and 1 (400): first declared wins
        assert_eq!(nearest_challenge_rating(300).as_str(), "1/2");
    }

    #[test]
    fn test_hit_die_expressions() {
        assert_eq!(parse_hit_die("4d10+8"), Some(10));
        assert_eq!(parse_hit_die("2 D 4 + 4"), Some(4));
        assert_eq!(parse_hit_die("see text"), None);
        assert_eq!(hit_dice_expression(3, 8, 2), "3d8+6");
        assert_eq!(hit_dice_expression(3, 8, -1), "3d8-3");
    }

    #[test]
    fn test_oversized_dice_do_not_overflow() {
        assert_eq!(parse_hit_die("2d4294967295"), None);
        assert_eq!(parse_hit_die("2d0"), None);
        assert_eq!(parse_hit_die("1d100"), Some(100));
        assert_eq!(expected_hit_points(u32::MAX, 12, 30), i32::MAX);
        assert_eq!(expected_hit_points(u32::MAX, 4, -30), i32::MIN);
        assert_eq!(legal_feat_count(u32::MAX), u32::MAX / 2 + 1);
        assert_eq!(
            total_hit_dice(u32::MAX, &[ClassLevel::new("Fighter", 3)]),
            u32::MAX
        );
    }
}
