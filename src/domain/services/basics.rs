//! Basics validator - hard chassis legality
//!
//! Attack bonus, CMD and experience are pure arithmetic from the chassis and
//! the rule tables, so any mismatch here is critical. The feat shortfall and
//! the hit-die sanity check are only warnings.

use crate::domain::entities::{CreatureRecord, ValidationMessage, ValidationResult};
use crate::domain::rules::experience_for;
use crate::domain::services::derivation::{estimated_hit_dice, legal_feat_count};

const CATEGORY: &str = "basics";
const STRUCTURE: &str = "structure";

/// Smallest Hit Dice count the structural check applies to
const STRUCTURAL_MIN_HD: u32 = 3;

pub fn validate_basics(record: &CreatureRecord) -> ValidationResult {
    let view = record.view();
    let mut messages = Vec::new();

    let expected_bab = view.expected_bab();
    let claimed_bab = view.claimed_bab();

    if let Some(claimed) = claimed_bab {
        if claimed != expected_bab {
            messages.push(
                ValidationMessage::critical(
                    CATEGORY,
                    format!(
                        "Base Attack Bonus {claimed:+} is illegal: {} HD ({} racial, {} with {} progression) allows {expected_bab:+}.",
                        view.total_hd,
                        view.racial_hd,
                        record.creature_type.display_name(),
                        view.bab_progression().as_str(),
                    ),
                )
                .with_expected(expected_bab)
                .with_actual(claimed),
            );
        }
    }

    if let Some(claimed_cmd) = view.claimed_cmd() {
        let legal = view.cmd_for(expected_bab);
        let source_math = view.cmd_for(claimed_bab.unwrap_or(expected_bab));

        if claimed_cmd != legal {
            let message = if claimed_cmd == source_math {
                ValidationMessage::warning(
                    CATEGORY,
                    format!(
                        "CMD {claimed_cmd} is internally consistent but built on the illegal BAB; \
                         fixing the Base Attack Bonus to {expected_bab:+} makes it {legal}."
                    ),
                )
            } else {
                ValidationMessage::critical(
                    CATEGORY,
                    format!(
                        "CMD {claimed_cmd} does not match 10 + BAB + Str + Dex + size; expected {legal}."
                    ),
                )
            };
            messages.push(message.with_expected(legal).with_actual(claimed_cmd));
        }
    }

    let feat_ceiling = legal_feat_count(view.total_hd);
    let feat_count = record.feats.len() as u32;
    if feat_count < feat_ceiling {
        messages.push(
            ValidationMessage::warning(
                CATEGORY,
                format!(
                    "{feat_count} feats listed but {} HD grants {feat_ceiling}; unused feat budget.",
                    view.total_hd
                ),
            )
            .with_expected(feat_ceiling)
            .with_actual(feat_count),
        );
    }

    if let Some(rating) = &record.cr {
        if let (Some(claimed_xp), Some(canonical)) = (record.xp, experience_for(rating)) {
            if claimed_xp != canonical {
                messages.push(
                    ValidationMessage::critical(
                        CATEGORY,
                        format!(
                            "XP {claimed_xp} does not match canonical value {canonical} for CR {rating}."
                        ),
                    )
                    .with_expected(canonical)
                    .with_actual(claimed_xp),
                );
            }
        }

        if let Some(proxy) = estimated_hit_dice(rating) {
            let threshold = proxy * 2;
            if view.total_hd > threshold && view.total_hd >= STRUCTURAL_MIN_HD {
                messages.push(
                    ValidationMessage::critical(
                        STRUCTURE,
                        format!(
                            "Chassis too large for declared rating: {} HD on a CR {rating} creature \
                             (benchmark implies about {proxy} HD, limit {threshold}).",
                            view.total_hd
                        ),
                    )
                    .with_expected(threshold)
                    .with_actual(view.total_hd),
                );
            }
        }
    }

    if view.hit_die < 6 {
        messages.push(
            ValidationMessage::warning(
                CATEGORY,
                format!(
                    "Hit die d{} is unusually small for a chassis; creatures use d6 or larger.",
                    view.hit_die
                ),
            )
            .with_expected("d6 or larger")
            .with_actual(format!("d{}", view.hit_die)),
        );
    }

    ValidationResult::from_messages(messages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Severity, ValidationStatus};
    use crate::domain::rules::EXPERIENCE_BY_RATING;
    use crate::domain::value_objects::Ability;
    use serde_json::json;

    fn criticals(result: &ValidationResult) -> Vec<&ValidationMessage> {
        result
            .messages
            .iter()
            .filter(|m| m.severity == Severity::Critical)
            .collect()
    }

    #[test]
    fn test_illegal_bab_is_critical() {
        let record = CreatureRecord::new("Hobgoblin Sergeant", "1", "Humanoid")
            .with_racial_hd(2)
            .with_bab(3)
            .with_feat("Toughness");

        let result = validate_basics(&record);
        let critical = criticals(&result);

        assert_eq!(critical.len(), 1);
        assert_eq!(critical[0].expected, Some(json!(1)));
        assert_eq!(critical[0].actual, Some(json!(3)));
        assert!(!result.valid);
        assert_eq!(result.status, ValidationStatus::Fail);
    }

    #[test]
    fn test_chassis_too_large() {
        let record = CreatureRecord::new("Overbuilt Wolf", "1", "Animal")
            .with_racial_hd(7)
            .with_bab(5);

        let result = validate_basics(&record);
        let structural: Vec<_> = criticals(&result)
            .into_iter()
            .filter(|m| m.category == STRUCTURE)
            .collect();

        assert_eq!(structural.len(), 1);
        assert!(structural[0].message.contains("Chassis too large"));
        assert_eq!(structural[0].expected, Some(json!(6)));
    }

    #[test]
    fn test_small_chassis_skips_structural_check() {
        // CR 1/8 allows 2 HD; 3 HD would trip, 2 HD must not
        let record = CreatureRecord::new("Rat", "1/8", "Animal").with_racial_hd(2).with_bab(1);
        let result = validate_basics(&record);
        assert!(result.messages.iter().all(|m| m.category != STRUCTURE));
    }

    #[test]
    fn test_wrong_xp_is_critical() {
        let record = CreatureRecord::new("Kobold Chief", "1/2", "Humanoid")
            .with_racial_hd(1)
            .with_bab(0)
            .with_xp(135);

        let result = validate_basics(&record);
        let xp = criticals(&result)
            .into_iter()
            .find(|m| m.message.contains("canonical value"))
            .expect("xp message");

        assert_eq!(xp.expected, Some(json!(200)));
        assert_eq!(xp.actual, Some(json!(135)));
    }

    #[test]
    fn test_exact_xp_never_flagged() {
        for (cr, xp) in EXPERIENCE_BY_RATING {
            let record = CreatureRecord::new("Benchmark", cr, "Outsider").with_xp(xp);
            let result = validate_basics(&record);
            assert!(
                result.messages.iter().all(|m| !m.message.contains("canonical value")),
                "CR {cr} flagged its own XP"
            );
        }
    }

    #[test]
    fn test_cmd_three_way_compare() {
        // Humanoid 2 HD: legal BAB +1, claimed +3, Str 14 (+2), Dex 12 (+1)
        let base = CreatureRecord::new("Bandit", "1", "Humanoid")
            .with_racial_hd(2)
            .with_bab(3)
            .with_ability(Ability::Str, 14)
            .with_ability(Ability::Dex, 12);

        let legal = validate_basics(&base.clone().with_cmd(14));
        assert!(legal.messages.iter().all(|m| !m.message.starts_with("CMD")));

        let source_math = validate_basics(&base.clone().with_cmd(16));
        let cmd = source_math
            .messages
            .iter()
            .find(|m| m.message.starts_with("CMD"))
            .unwrap();
        assert_eq!(cmd.severity, Severity::Warning);

        let wrong = validate_basics(&base.with_cmd(20));
        let cmd = wrong.messages.iter().find(|m| m.message.starts_with("CMD")).unwrap();
        assert_eq!(cmd.severity, Severity::Critical);
        assert_eq!(cmd.expected, Some(json!(14)));
    }

    #[test]
    fn test_feat_shortfall_warns_and_small_hit_die() {
        let mut record = CreatureRecord::new("Toad", "1", "Animal").with_racial_hd(4).with_bab(3);
        record.hd = Some("4d4".to_string());

        let result = validate_basics(&record);
        let warnings: Vec<_> = result
            .messages
            .iter()
            .filter(|m| m.severity == Severity::Warning)
            .collect();

        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].message.contains("unused feat budget"));
        assert!(warnings[1].message.contains("d4"));
        assert!(result.valid);
    }
}
