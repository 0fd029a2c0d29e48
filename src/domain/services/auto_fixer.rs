//! Auto-fixer - rewrite a stat block so its numbers agree with the rules
//!
//! Two philosophies decide what happens to the chassis:
//!
//! - [`FixMode::EnforceRating`] trusts the labeled rating. A monster whose HP
//!   runs far above the rating's benchmark has its racial Hit Dice slashed to
//!   fit (only when it has no class levels).
//! - [`FixMode::FixMath`] trusts the statistics. The rating is relabeled to the
//!   first tabulated rating whose HP band contains the claimed HP.
//!
//! Whatever the mode, the derived numbers (BAB, CMD, CMB, saves, XP) are then
//! recomputed from the settled chassis and AC is raised to the bare minimum
//! if it falls below it. AC is never lowered.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{ChangeLog, ChangeLogEntry, CreatureRecord};
use crate::domain::rules::{benchmarks_for, experience_for, MONSTER_STATISTICS};
use crate::domain::services::derivation::{
    base_save, expected_hit_points, hit_dice_expression, hit_dice_for_target, hit_points_per_die,
    modifier,
};
use crate::domain::services::scaler::set_save;
use crate::domain::value_objects::{Ability, ChallengeRating, FixMode, Save};

/// Claimed HP above this share of the benchmark triggers a chassis fix
const HP_CEILING_RATIO: f64 = 1.5;
/// HP band a relabeled rating must contain
const RELABEL_LOW_RATIO: f64 = 0.85;
const RELABEL_HIGH_RATIO: f64 = 1.25;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixOutcome {
    pub creature: CreatureRecord,
    pub changes: Vec<ChangeLogEntry>,
}

pub fn auto_fix(original: &CreatureRecord, mode: FixMode) -> FixOutcome {
    let mut creature = original.clone();
    let mut log = ChangeLog::default();

    match mode {
        FixMode::EnforceRating => enforce_rating(&mut creature, &mut log),
        FixMode::FixMath => relabel_rating(&mut creature, &mut log),
    }

    fix_attack_bonus(&mut creature, &mut log);
    fix_saves(&mut creature, &mut log);
    fix_experience(&mut creature, &mut log);
    fix_armor_class(&mut creature, &mut log);

    FixOutcome {
        creature,
        changes: log.into_entries(),
    }
}

fn enforce_rating(creature: &mut CreatureRecord, log: &mut ChangeLog) {
    let Some(rating) = creature.cr.clone() else {
        return;
    };
    let Some(benchmark) = benchmarks_for(&rating) else {
        return;
    };

    let view = creature.view();
    let Some(hp) = view.claimed_hp() else {
        return;
    };
    let oversized = f64::from(hp) > f64::from(benchmark.hp) * HP_CEILING_RATIO;
    if !oversized || !view.class_levels().is_empty() {
        return;
    }

    let hit_die = view.hit_die;
    let con_mod = view.modifier(Ability::Con);
    let target_hd = hit_dice_for_target(benchmark.hp, hit_points_per_die(hit_die, con_mod));
    if target_hd >= view.racial_hd {
        return;
    }

    let new_hp = expected_hit_points(target_hd, hit_die, con_mod);
    log.record(
        "Hit Dice",
        view.racial_hd,
        target_hd,
        format!(
            "HP {hp} exceeds 150% of the CR {rating} benchmark ({}); racial HD cut to fit CR {rating}",
            benchmark.hp
        ),
    );
    log.record(
        "Hit Points",
        hp,
        new_hp,
        format!("Recomputed for {target_hd}d{hit_die} {con_mod:+} Con"),
    );

    let expression = hit_dice_expression(target_hd, hit_die, con_mod);
    log.record(
        "HD Expression",
        creature.hd.clone(),
        expression.clone(),
        "Rewritten for the new Hit Dice",
    );

    creature.racial_hd = Some(target_hd);
    creature.hd = Some(expression);
    creature.hp = Some(new_hp);
    creature.hp_claimed = Some(new_hp);
}

fn relabel_rating(creature: &mut CreatureRecord, log: &mut ChangeLog) {
    let Some(rating) = creature.cr.clone() else {
        return;
    };
    let Some(benchmark) = benchmarks_for(&rating) else {
        return;
    };
    let Some(hp) = creature.view().claimed_hp() else {
        return;
    };
    let hp = f64::from(hp);
    if hp <= f64::from(benchmark.hp) * HP_CEILING_RATIO {
        return;
    }

    let matching = MONSTER_STATISTICS.iter().find(|row| {
        let target = f64::from(row.hp);
        hp >= target * RELABEL_LOW_RATIO && hp <= target * RELABEL_HIGH_RATIO
    });

    match matching {
        Some(row) if row.cr != rating.as_str() => {
            log.record(
                "Challenge Rating",
                rating.as_str(),
                row.cr,
                format!("HP {hp} sits in the CR {} benchmark band; rating relabeled", row.cr),
            );
            creature.cr = Some(ChallengeRating::new(row.cr));
        }
        Some(_) => {}
        None => {
            tracing::debug!(hp, rating = %rating, "no rating band contains the claimed hit points");
        }
    }
}

fn fix_attack_bonus(creature: &mut CreatureRecord, log: &mut ChangeLog) {
    let view = creature.view();
    let bab = view.expected_bab();
    let cmd = view.cmd_for(bab);
    let cmb = view.cmb_for(bab);
    let chassis = format!(
        "{} HD {} ({} progression){}",
        view.racial_hd,
        creature.creature_type,
        view.bab_progression().as_str(),
        class_summary(creature)
    );

    log.record(
        "Base Attack Bonus",
        view.claimed_bab(),
        bab,
        format!("Derived from chassis: {chassis}"),
    );
    log.record("CMD", view.claimed_cmd(), cmd, "10 + BAB + Str + Dex + size");
    log.record("CMB", view.claimed_cmb(), cmb, "BAB + Str + size");

    creature.bab = Some(bab);
    creature.bab_claimed = Some(bab);
    creature.cmd = Some(cmd);
    creature.cmd_claimed = Some(cmd);
    creature.cmb = Some(cmb);
    creature.cmb_claimed = Some(cmb);
}

fn class_summary(creature: &CreatureRecord) -> String {
    creature
        .class_levels
        .iter()
        .map(|class| format!(" + {} {}", class.class_name, class.level))
        .collect()
}

fn fix_saves(creature: &mut CreatureRecord, log: &mut ChangeLog) {
    let view = creature.view();
    let hit_dice = view.total_hd.max(1);
    let saves = Save::ALL.map(|save| {
        let ability = save.key_ability();
        let good = view.has_good_save(save);
        let value = base_save(hit_dice, good) + modifier(view.score(ability));
        log.record(
            format!("{} Save", save.display_name()),
            view.claimed_save(save),
            value,
            format!(
                "{} base save for {hit_dice} HD + {} modifier",
                if good { "Good" } else { "Poor" },
                ability.abbreviation()
            ),
        );
        (save, value)
    });

    for (save, value) in saves {
        set_save(creature, save, value);
    }
}

fn fix_experience(creature: &mut CreatureRecord, log: &mut ChangeLog) {
    let Some(rating) = &creature.cr else {
        return;
    };
    if let Some(xp) = experience_for(rating) {
        log.record(
            "XP",
            creature.xp,
            xp,
            format!("Canonical experience award for CR {rating}"),
        );
        creature.xp = Some(xp);
    }
}

fn fix_armor_class(creature: &mut CreatureRecord, log: &mut ChangeLog) {
    let view = creature.view();
    let Some(ac) = view.claimed_ac() else {
        return;
    };
    let floor = view.bare_ac();
    if ac >= floor {
        // excess is unmodeled armor, natural armor or deflection
        return;
    }

    log.record(
        "Armor Class",
        ac,
        floor,
        "Raised to 10 + Dex + size; AC cannot be lower than an unarmored creature's",
    );
    creature.ac = Some(floor);
    creature.ac_claimed = Some(floor);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::CreatureSize;

    fn bloated_beast() -> CreatureRecord {
        CreatureRecord::new("Bloated Beast", "1", "Animal")
            .with_xp(400)
            .with_racial_hd(6)
            .with_hp(45)
            .with_ac(14)
            .with_bab(4)
    }

    fn entry<'a>(outcome: &'a FixOutcome, field: &str) -> Option<&'a ChangeLogEntry> {
        outcome.changes.iter().find(|entry| entry.field == field)
    }

    #[test]
    fn test_enforce_rating_slashes_racial_hd() {
        let original = bloated_beast();
        let outcome = auto_fix(&original, FixMode::EnforceRating);

        let hit_dice = entry(&outcome, "Hit Dice").expect("hit dice change");
        assert!(hit_dice.reason.contains("CR 1"));
        assert_eq!(outcome.creature.racial_hd, Some(3));
        assert_eq!(outcome.creature.hp, Some(13));
        assert_eq!(outcome.creature.hd.as_deref(), Some("3d8+0"));
        assert_eq!(outcome.creature.bab, Some(2));
        assert_eq!(original, bloated_beast());
    }

    #[test]
    fn test_enforce_rating_leaves_classed_creatures() {
        let record = bloated_beast().with_class("Fighter", 1);
        let outcome = auto_fix(&record, FixMode::EnforceRating);
        assert!(entry(&outcome, "Hit Dice").is_none());
        assert_eq!(outcome.creature.racial_hd, Some(6));
    }

    #[test]
    fn test_fix_math_relabels_rating() {
        let outcome = auto_fix(&bloated_beast(), FixMode::FixMath);

        // 45 HP: CR 3 band is 25.5..=37.5, CR 4 is 34..=50
        let rating = entry(&outcome, "Challenge Rating").expect("relabel");
        assert_eq!(rating.new_value, serde_json::json!("4"));
        assert_eq!(outcome.creature.cr, Some(ChallengeRating::new("4")));
        assert_eq!(outcome.creature.xp, Some(1_200));
        assert_eq!(outcome.creature.racial_hd, Some(6));
    }

    #[test]
    fn test_derived_saves_and_cmb() {
        let raw = CreatureRecord::new("Animal Test", "1", "Animal")
            .with_xp(400)
            .with_racial_hd(2)
            .with_hp(13)
            .with_ability(Ability::Str, 14)
            .with_ability(Ability::Dex, 12)
            .with_ability(Ability::Con, 14)
            .with_ac(12)
            .with_bab(0);

        let fixed = auto_fix(&raw, FixMode::EnforceRating).creature;
        assert_eq!(fixed.fort, Some(5));
        assert_eq!(fixed.reflex, Some(4));
        assert_eq!(fixed.will, Some(0));
        assert_eq!(fixed.bab, Some(1));
        assert_eq!(fixed.cmb, Some(3));
        assert_eq!(fixed.cmd, Some(14));
    }

    #[test]
    fn test_unknown_class_counts_toward_hit_dice_only() {
        let record = CreatureRecord::new("Gunner", "2", "Humanoid").with_class("Gunslinger", 3);
        let fixed = auto_fix(&record, FixMode::EnforceRating).creature;
        assert_eq!(fixed.bab, Some(0));
        // poor Fort for 3 HD
        assert_eq!(fixed.fort, Some(1));
    }

    #[test]
    fn test_armor_class_only_raised() {
        let mut record = CreatureRecord::new("Sprite", "1", "Fey")
            .with_size(CreatureSize::Tiny)
            .with_racial_hd(1)
            .with_ability(Ability::Dex, 18)
            .with_ac(11);
        let fixed = auto_fix(&record, FixMode::EnforceRating).creature;
        assert_eq!(fixed.ac, Some(16));

        record.ac = Some(25);
        let fixed = auto_fix(&record, FixMode::EnforceRating).creature;
        assert_eq!(fixed.ac, Some(25));

        record.ac = None;
        assert_eq!(auto_fix(&record, FixMode::EnforceRating).creature.ac, None);
    }

    #[test]
    fn test_decimal_rating_normalized_before_xp_lookup() {
        let record: CreatureRecord =
            serde_json::from_str(r#"{"name": "Kobold", "cr": "0.25", "type": "Humanoid", "racial_hd": 1}"#)
                .unwrap();
        let fixed = auto_fix(&record, FixMode::EnforceRating).creature;
        assert_eq!(fixed.xp, Some(100));
    }

    #[test]
    fn test_idempotent_in_both_modes() {
        for mode in [FixMode::EnforceRating, FixMode::FixMath] {
            let once = auto_fix(&bloated_beast(), mode);
            let twice = auto_fix(&once.creature, mode);
            assert!(twice.changes.is_empty(), "{mode} kept changing: {:?}", twice.changes);
            assert_eq!(twice.creature, once.creature);
        }
    }

    #[test]
    fn test_deterministic() {
        let a = auto_fix(&bloated_beast(), FixMode::EnforceRating);
        let b = auto_fix(&bloated_beast(), FixMode::EnforceRating);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}
