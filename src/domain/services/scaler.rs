//! Creature scaler - rebuild a creature around a target experience award
//!
//! Tiered adjustment first (weak creatures shrink and lose Str/Con, elite
//! ones gain Str/Con but keep their size), then the Hit Dice are solved for
//! the target rating's benchmark HP and every dependent statistic is
//! recomputed from the new chassis.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::entities::{ChangeLog, ChangeLogEntry, CreatureRecord};
use crate::domain::rules::{benchmarks_for, DEFAULT_EXPERIENCE};
use crate::domain::services::derivation::{
    base_save, expected_hit_points, hit_dice_expression, hit_dice_for_target, hit_points_per_die,
    nearest_challenge_rating, total_hit_dice,
};
use crate::domain::value_objects::{Ability, ChallengeRating, CreatureSize, Save};

const WEAK_RATIO: f64 = 0.75;
const ELITE_RATIO: f64 = 1.25;
const PHYSICAL_ADJUSTMENT: i32 = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleOutcome {
    pub creature: CreatureRecord,
    pub changes: Vec<ChangeLogEntry>,
    pub rating: ChallengeRating,
    pub experience: u32,
}

/// Scale a copy of `original` to the rating nearest `target_xp`. The input is
/// never modified.
pub fn scale_creature(original: &CreatureRecord, target_xp: u32) -> ScaleOutcome {
    let mut creature = original.clone();
    let mut log = ChangeLog::default();

    let original_xp = original.xp.filter(|xp| *xp > 0).unwrap_or(DEFAULT_EXPERIENCE);
    let ratio = f64::from(target_xp) / f64::from(original_xp);

    let target_rating = nearest_challenge_rating(target_xp);
    let Some(target) = benchmarks_for(&target_rating) else {
        log.record(
            "Challenge Rating",
            rating_value(original.cr.as_ref()),
            Value::Null,
            format!("Could not find stats for CR {target_rating}"),
        );
        return ScaleOutcome {
            creature,
            changes: log.into_entries(),
            rating: original.cr.clone().unwrap_or(target_rating),
            experience: original_xp,
        };
    };

    if ratio <= WEAK_RATIO {
        if creature.size > CreatureSize::Small {
            let smaller = creature.size.step(-1);
            log.record(
                "Size",
                creature.size.display_name(),
                smaller.display_name(),
                format!("Weak tier (XP ratio {ratio:.2}): one size category smaller"),
            );
            creature.size = smaller;
        }
        adjust_physical(&mut creature, &mut log, -PHYSICAL_ADJUSTMENT, "Weak tier");
    }

    if ratio >= ELITE_RATIO {
        // elite creatures get tougher, not bigger
        adjust_physical(&mut creature, &mut log, PHYSICAL_ADJUSTMENT, "Elite tier");
    }

    let (hit_die, con_mod) = {
        let view = creature.view();
        (view.hit_die, view.modifier(Ability::Con))
    };
    let new_hd = hit_dice_for_target(target.hp, hit_points_per_die(hit_die, con_mod));
    let old_total_hd = creature.view().total_hd;

    let old_classes = class_summary(&creature);
    fit_chassis(&mut creature, new_hd);
    log.record(
        "Class Levels",
        old_classes,
        class_summary(&creature),
        format!("Trimmed to fit {new_hd} total HD"),
    );

    let view = creature.view();
    let total_hd = view.total_hd;
    log.record(
        "Hit Dice",
        old_total_hd,
        total_hd,
        format!(
            "Solved for CR {target_rating} benchmark of {} HP at d{hit_die} {con_mod:+} Con",
            target.hp
        ),
    );

    let hp = expected_hit_points(total_hd, hit_die, con_mod);
    let bab = view.expected_bab();
    let cmd = view.cmd_for(bab);
    let saves = Save::ALL.map(|save| (save, base_save(total_hd, view.has_good_save(save))));
    let hd_expression = hit_dice_expression(total_hd, hit_die, con_mod);

    // bonus AC (armor, natural, deflection) survives the size and Dex change
    let ac = original.view().claimed_ac().map(|old_total| {
        let bonus = old_total - original.view().bare_ac();
        view.bare_ac() + bonus
    });

    log.record(
        "HD Expression",
        creature.hd.clone(),
        hd_expression.clone(),
        "Rewritten for the new Hit Dice",
    );
    log.record(
        "Hit Points",
        view.claimed_hp(),
        hp,
        format!("Average of {total_hd}d{hit_die} {con_mod:+} Con per die"),
    );
    log.record(
        "Base Attack Bonus",
        view.claimed_bab(),
        bab,
        format!("{} progression over {total_hd} HD", view.bab_progression().as_str()),
    );
    for (save, value) in saves {
        let quality = if view.has_good_save(save) { "good" } else { "poor" };
        log.record(
            format!("{} Save", save.display_name()),
            view.claimed_save(save),
            value,
            format!("Base {quality} save for {total_hd} HD"),
        );
    }
    log.record("CMD", view.claimed_cmd(), cmd, "10 + BAB + Str + Dex + size");
    if let Some(ac) = ac {
        log.record(
            "Armor Class",
            view.claimed_ac(),
            ac,
            format!("Base AC for {} with existing bonuses kept", creature.size),
        );
    }

    creature.hd = Some(hd_expression);
    creature.hp = Some(hp);
    creature.hp_claimed = Some(hp);
    creature.bab = Some(bab);
    creature.bab_claimed = Some(bab);
    for (save, value) in saves {
        set_save(&mut creature, save, value);
    }
    creature.cmd = Some(cmd);
    creature.cmd_claimed = Some(cmd);
    if let Some(ac) = ac {
        creature.ac = Some(ac);
        creature.ac_claimed = Some(ac);
    }

    log.record(
        "Challenge Rating",
        rating_value(original.cr.as_ref()),
        target_rating.as_str(),
        format!("Nearest rating to {target_xp} XP"),
    );
    log.record("XP", original.xp, target_xp, "Target experience award");
    creature.cr = Some(target_rating.clone());
    creature.xp = Some(target_xp);

    ScaleOutcome {
        creature,
        changes: log.into_entries(),
        rating: target_rating,
        experience: target_xp,
    }
}

/// Spread `hit_dice` over the chassis so racial HD plus class levels add up
/// to exactly that many. Racial HD absorb the change while the class levels
/// fit underneath the target; otherwise the class levels are trimmed from the
/// last one, and a creature with racial HD keeps one of them when there is room.
fn fit_chassis(creature: &mut CreatureRecord, hit_dice: u32) {
    let class_total = total_hit_dice(0, &creature.class_levels);
    let had_racial = creature.racial_hd.is_some_and(|hd| hd > 0);

    if creature.class_levels.is_empty() || (had_racial && class_total < hit_dice) {
        creature.racial_hd = Some(hit_dice - class_total);
        return;
    }

    let racial = u32::from(had_racial && hit_dice > 1);
    let mut remaining = hit_dice - racial;
    for class in &mut creature.class_levels {
        class.level = class.level.min(remaining);
        remaining -= class.level;
    }
    creature.class_levels.retain(|class| class.level > 0);

    match creature.class_levels.first_mut() {
        Some(first) => {
            first.level += remaining;
            if creature.racial_hd.is_some() {
                creature.racial_hd = Some(racial);
            }
        }
        None => creature.racial_hd = Some(racial + remaining),
    }
}

fn class_summary(creature: &CreatureRecord) -> String {
    creature
        .class_levels
        .iter()
        .map(|class| format!("{} {}", class.class_name, class.level))
        .collect::<Vec<_>>()
        .join(", ")
}

fn adjust_physical(creature: &mut CreatureRecord, log: &mut ChangeLog, delta: i32, tier: &str) {
    for (ability, field) in [(Ability::Str, "Strength"), (Ability::Con, "Constitution")] {
        let old = creature.abilities.score(ability);
        let new = (old + delta).max(1);
        log.record(field, old, new, format!("{tier}: {field} {delta:+}"));
        creature.abilities.set(ability, new);
    }
}

pub(crate) fn set_save(creature: &mut CreatureRecord, save: Save, value: i32) {
    let (canonical, claimed) = match save {
        Save::Fort => (&mut creature.fort, &mut creature.fort_claimed),
        Save::Ref => (&mut creature.reflex, &mut creature.reflex_claimed),
        Save::Will => (&mut creature.will, &mut creature.will_claimed),
    };
    *canonical = Some(value);
    *claimed = Some(value);
}

fn rating_value(rating: Option<&ChallengeRating>) -> Value {
    rating.map_or(Value::Null, |rating| Value::from(rating.as_str()))
}
