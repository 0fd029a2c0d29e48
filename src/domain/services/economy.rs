//! Economy validator - gear value against the creature's wealth tier

use crate::domain::entities::{CreatureRecord, ValidationMessage, ValidationResult};
use crate::domain::rules::{is_basic_npc_class, treasure_for, wealth_by_level};
use crate::domain::value_objects::EconomicTier;

const CATEGORY: &str = "economy";

/// Percent deviation still counted as on target
const TOLERANCE_PERCENT: f64 = 15.0;

pub fn validate_economy(record: &CreatureRecord) -> ValidationResult {
    let Some(actual) = record.gear_value else {
        return ValidationResult::from_messages(vec![ValidationMessage::info(
            CATEGORY,
            "No gear value provided; skipping economy validation.",
        )]);
    };

    let tier = economic_tier(record);
    let Some(expected) = expected_wealth(record, tier) else {
        return ValidationResult::from_messages(vec![ValidationMessage::warning(
            CATEGORY,
            format!("Unable to determine expected wealth for {tier} tier."),
        )]);
    };

    let message = if expected == 0.0 {
        // treasure "None": anything at all is too much
        if actual == 0.0 {
            ValidationMessage::info(
                CATEGORY,
                format!("Wealth is on target for {tier} (no treasure expected, none carried)."),
            )
        } else {
            ValidationMessage::warning(
                CATEGORY,
                format!("Over-geared: {tier} has {actual} gp, but no treasure is expected."),
            )
        }
    } else {
        let deviation = (actual - expected) / expected * 100.0;
        if deviation.abs() <= TOLERANCE_PERCENT {
            ValidationMessage::info(
                CATEGORY,
                format!(
                    "Wealth is on target for {tier} ({actual} gp vs expected {expected} gp)."
                ),
            )
        } else if deviation > TOLERANCE_PERCENT {
            ValidationMessage::warning(
                CATEGORY,
                format!(
                    "Over-geared: {tier} has {actual} gp, expected ~{expected} gp (+{deviation:.1}%)."
                ),
            )
        } else {
            ValidationMessage::warning(
                CATEGORY,
                format!(
                    "Under-geared: {tier} has {actual} gp, expected ~{expected} gp ({deviation:.1}%)."
                ),
            )
        }
    };

    ValidationResult::from_messages(vec![message.with_expected(expected).with_actual(actual)])
}

/// Explicit tier if set, otherwise classified from the chassis: PC-class
/// levels at least matching racial HD make a heroic NPC, any NPC-class levels
/// a basic NPC, anything else a monster.
fn economic_tier(record: &CreatureRecord) -> EconomicTier {
    if let Some(tier) = record.economic_tier {
        return tier;
    }

    let racial_hd = record.racial_hd.unwrap_or(0);
    let (npc_levels, pc_levels) = record
        .class_levels
        .iter()
        .fold((0u32, 0u32), |(npc, pc), class| {
            if is_basic_npc_class(&class.class_name) {
                (npc + class.level, pc)
            } else {
                (npc, pc + class.level)
            }
        });

    if pc_levels >= racial_hd && pc_levels > 0 {
        EconomicTier::HeroicNpc
    } else if npc_levels > 0 {
        EconomicTier::BasicNpc
    } else {
        EconomicTier::Monster
    }
}

/// Racial HD plus class levels, unless the stat block states its own
fn effective_level(record: &CreatureRecord) -> u32 {
    record
        .claimed_effective_level
        .unwrap_or_else(|| record.view().total_hd)
}

/// Gear value the tier expects, `None` when the tables have no answer
fn expected_wealth(record: &CreatureRecord, tier: EconomicTier) -> Option<f64> {
    match tier {
        EconomicTier::HeroicNpc | EconomicTier::BasicNpc => {
            wealth_by_level(tier, effective_level(record)).map(f64::from)
        }
        EconomicTier::Monster => {
            let treasure = treasure_for(record.cr.as_ref()?)?;
            let multiplier = record.treasure_type.unwrap_or_default().multiplier();
            Some(f64::from(treasure.medium) * multiplier)
        }
    }
}
