//! Synergy validator - feat legality, prerequisites and wasted picks

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::entities::{CreatureRecord, CreatureView, ValidationMessage, ValidationResult};
use crate::domain::services::derivation::legal_feat_count;
use crate::domain::value_objects::Ability;

const CATEGORY: &str = "synergy";

/// Natural attacks Multiattack needs to be worth taking
const MULTIATTACK_MINIMUM: usize = 3;

static NATURAL_ATTACK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(bite|claw|slam|gore|tail|wing|tentacle|hoof|talon)s?\b")
        .expect("natural attack pattern is valid")
});

/// Prerequisite or usefulness check for a feat with a known rule.
///
/// Outer `None` means the feat has no rule; inner `None` means it passed.
fn check_feat(feat: &str, view: &CreatureView<'_>) -> Option<(&'static str, Option<String>)> {
    let checked = match feat.to_ascii_lowercase().as_str() {
        "weapon finesse" => ("Weapon Finesse", weapon_finesse(view)),
        "power attack" => ("Power Attack", minimum_score(view, "Power Attack", Ability::Str, 13)),
        "combat expertise" => (
            "Combat Expertise",
            minimum_score(view, "Combat Expertise", Ability::Int, 13),
        ),
        "deadly aim" => ("Deadly Aim", minimum_score(view, "Deadly Aim", Ability::Dex, 13)),
        "dodge" => ("Dodge", minimum_score(view, "Dodge", Ability::Dex, 13)),
        "two-weapon fighting" => (
            "Two-Weapon Fighting",
            minimum_score(view, "Two-Weapon Fighting", Ability::Dex, 15),
        ),
        "improved two-weapon fighting" => (
            "Improved Two-Weapon Fighting",
            minimum_score(view, "Improved Two-Weapon Fighting", Ability::Dex, 17)
                .or_else(|| minimum_bab(view, "Improved Two-Weapon Fighting", 6)),
        ),
        "cleave" => {
            let strength = view.score(Ability::Str);
            let problem = (strength < 13).then(|| {
                format!(
                    "Cleave requires STR 13+ (for Power Attack prerequisite), but creature has STR {strength}. Illegal feat chain."
                )
            });
            ("Cleave", problem)
        }
        "great cleave" => ("Great Cleave", minimum_bab(view, "Great Cleave", 4)),
        "improved initiative" => ("Improved Initiative", None),
        "toughness" => ("Toughness", None),
        "alertness" => ("Alertness", None),
        "iron will" => ("Iron Will", None),
        "great fortitude" => ("Great Fortitude", None),
        "lightning reflexes" => ("Lightning Reflexes", None),
        _ => return None,
    };
    Some(checked)
}

fn weapon_finesse(view: &CreatureView<'_>) -> Option<String> {
    let dex = view.modifier(Ability::Dex);
    let strength = view.modifier(Ability::Str);
    (dex <= strength).then(|| {
        format!(
            "Weapon Finesse is wasted: DEX {} ({dex:+}) is not higher than STR {} ({strength:+}). This is an indecisive build.",
            view.score(Ability::Dex),
            view.score(Ability::Str)
        )
    })
}

fn minimum_score(view: &CreatureView<'_>, feat: &str, ability: Ability, minimum: i32) -> Option<String> {
    let score = view.score(ability);
    (score < minimum).then(|| {
        let name = ability.abbreviation();
        format!("{feat} requires {name} {minimum}+, but creature has {name} {score}. Illegal feat selection.")
    })
}

fn minimum_bab(view: &CreatureView<'_>, feat: &str, minimum: i32) -> Option<String> {
    let bab = view.claimed_bab().unwrap_or(0);
    (bab < minimum).then(|| {
        format!("{feat} requires BAB {minimum:+}, but creature has BAB {bab:+}. Illegal feat selection.")
    })
}

pub fn validate_synergy(record: &CreatureRecord) -> ValidationResult {
    let view = record.view();
    let mut messages = Vec::new();

    let feat_count = record.feats.len() as u32;
    let ceiling = legal_feat_count(view.total_hd);

    if feat_count > ceiling {
        messages.push(
            ValidationMessage::critical(
                CATEGORY,
                format!(
                    "Illegal feat count: {feat_count} feats claimed, but {} HD allows only {ceiling} feats (1 + floor((HD-1)/2)).",
                    view.total_hd
                ),
            )
            .with_expected(ceiling)
            .with_actual(feat_count),
        );
    } else if feat_count < ceiling && feat_count > 0 {
        messages.push(
            ValidationMessage::note(
                CATEGORY,
                format!(
                    "Creature has {feat_count} feats but could have up to {ceiling} for {} HD. Consider adding more feats.",
                    view.total_hd
                ),
            )
            .with_expected(ceiling)
            .with_actual(feat_count),
        );
    }

    for feat in &record.feats {
        let feat = feat.trim();
        if let Some((name, Some(problem))) = check_feat(feat, &view) {
            messages.push(
                ValidationMessage::warning(CATEGORY, problem)
                    .with_expected(format!("Valid prerequisites for {name}"))
                    .with_actual(feat),
            );
        }
    }

    let dex = view.modifier(Ability::Dex);
    let strength = view.modifier(Ability::Str);
    if dex > strength + 2 {
        let has_finesse = record
            .feats
            .iter()
            .any(|feat| feat.to_lowercase().contains("weapon finesse"));
        let has_agile_weapon = record
            .equipment_line
            .as_deref()
            .is_some_and(|line| line.to_lowercase().contains("agile"));

        if !has_finesse && !has_agile_weapon {
            messages.push(
                ValidationMessage::note(
                    CATEGORY,
                    format!(
                        "DEX {} ({dex:+}) is significantly higher than STR {} ({strength:+}), but creature lacks \
                         Weapon Finesse or Agile weapons. Consider adding Weapon Finesse for optimal melee attacks.",
                        view.score(Ability::Dex),
                        view.score(Ability::Str)
                    ),
                )
                .with_expected("Weapon Finesse or Agile weapon")
                .with_actual("Neither present"),
            );
        }
    }

    if record
        .feats
        .iter()
        .any(|feat| feat.trim().eq_ignore_ascii_case("multiattack"))
    {
        let natural_attacks = natural_attack_count(record.melee_line.as_deref().unwrap_or(""));
        if natural_attacks < MULTIATTACK_MINIMUM {
            messages.push(
                ValidationMessage::warning(
                    CATEGORY,
                    format!(
                        "Multiattack is only beneficial with 3+ natural attacks, but only {natural_attacks} detected. \
                         Feat likely wasted; consider replacing it."
                    ),
                )
                .with_expected("3+ natural attacks")
                .with_actual(natural_attacks),
            );
        }
    }

    ValidationResult::from_messages(messages)
}

/// Comma-separated melee entries naming a natural attack
fn natural_attack_count(melee_line: &str) -> usize {
    melee_line
        .split(',')
        .filter(|attack| NATURAL_ATTACK.is_match(attack))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Severity;

    fn find<'a>(result: &'a ValidationResult, prefix: &str) -> Option<&'a ValidationMessage> {
        result.messages.iter().find(|m| m.message.starts_with(prefix))
    }

    #[test]
    fn test_too_many_feats_is_critical() {
        let record = CreatureRecord::new("Feat Hoarder", "1", "Humanoid")
            .with_racial_hd(2)
            .with_feat("Toughness")
            .with_feat("Alertness");

        let result = validate_synergy(&record);
        let count = find(&result, "Illegal feat count").unwrap();
        assert_eq!(count.severity, Severity::Critical);
        assert_eq!(count.expected, Some(serde_json::json!(1)));
        assert!(!result.valid);
    }

    #[test]
    fn test_unused_budget_is_a_note() {
        let record = CreatureRecord::new("Brute", "3", "Humanoid")
            .with_racial_hd(5)
            .with_feat("Toughness");

        let result = validate_synergy(&record);
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].severity, Severity::Note);

        let featless = CreatureRecord::new("Brute", "3", "Humanoid").with_racial_hd(5);
        assert!(validate_synergy(&featless).messages.is_empty());
    }

    #[test]
    fn test_prerequisites_are_warnings() {
        let record = CreatureRecord::new("Weakling", "2", "Humanoid")
            .with_racial_hd(4)
            .with_ability(Ability::Str, 8)
            .with_bab(3)
            .with_feat("power attack")
            .with_feat("Great Cleave");

        let result = validate_synergy(&record);
        let power = find(&result, "Power Attack requires STR 13+").unwrap();
        assert_eq!(power.severity, Severity::Warning);
        assert!(power.message.contains("Illegal feat selection"));
        assert!(find(&result, "Great Cleave requires BAB +4").is_some());
    }

    #[test]
    fn test_wasted_finesse_and_missing_finesse() {
        let strong = CreatureRecord::new("Bruiser", "1", "Humanoid")
            .with_racial_hd(1)
            .with_ability(Ability::Str, 16)
            .with_ability(Ability::Dex, 12)
            .with_feat("Weapon Finesse");
        let result = validate_synergy(&strong);
        assert!(find(&result, "Weapon Finesse is wasted").is_some());

        let mut nimble = CreatureRecord::new("Fencer", "1", "Humanoid")
            .with_racial_hd(1)
            .with_ability(Ability::Str, 8)
            .with_ability(Ability::Dex, 18);
        let result = validate_synergy(&nimble);
        let hint = find(&result, "DEX 18").unwrap();
        assert_eq!(hint.severity, Severity::Note);

        nimble.equipment_line = Some("agile rapier".to_string());
        assert!(find(&validate_synergy(&nimble), "DEX 18").is_none());
    }

    #[test]
    fn test_multiattack_needs_three_natural_attacks() {
        let mut record = CreatureRecord::new("Owlbear", "4", "Magical Beast")
            .with_racial_hd(5)
            .with_feat("Multiattack");

        record.melee_line = Some("2 claws +7 (1d6+4), bite +7 (1d6+4)".to_string());
        let result = validate_synergy(&record);
        let warning = find(&result, "Multiattack is only beneficial").unwrap();
        assert_eq!(warning.actual, Some(serde_json::json!(2)));

        record.melee_line = Some("bite +7 (1d6), claw +7 (1d4), claw +7 (1d4), gore +5 (1d8)".to_string());
        assert!(find(&validate_synergy(&record), "Multiattack").is_none());
    }
}
