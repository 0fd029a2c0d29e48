//! System-bleed detector - terminology leaking in from another edition

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::entities::{CreatureRecord, Severity, ValidationMessage, ValidationResult};

const CATEGORY: &str = "system-bleed";

static BARE_ACTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\baction\b").expect("action pattern is valid"));

static REFLEX_DC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"reflex\s*dc\s*\d+").expect("reflex dc pattern is valid"));

/// A phrase test and the message it raises
struct BleedRule {
    severity: Severity,
    matches: fn(&str) -> bool,
    message: &'static str,
    expected: &'static str,
    actual: &'static str,
}

static RULES: &[BleedRule] = &[
    BleedRule {
        severity: Severity::Critical,
        matches: |text| text.contains("bonus action"),
        message: "Found \"Bonus Action\" terminology. Pathfinder 1e uses \"Swift Action\" instead.",
        expected: "Swift Action",
        actual: "Bonus Action",
    },
    BleedRule {
        severity: Severity::Critical,
        matches: |text| text.contains("reaction"),
        message: "Found \"Reaction\" terminology. Pathfinder 1e uses \"Immediate Action\" or Attack of Opportunity semantics.",
        expected: "Immediate Action / AoO",
        actual: "Reaction",
    },
    BleedRule {
        severity: Severity::Warning,
        matches: |text| {
            BARE_ACTION.is_match(text) && text.contains(" action") && !text.contains("standard action")
        },
        message: "Found ambiguous \"Action\" wording; prefer \"Standard Action\" in PF1e stat blocks.",
        expected: "Standard Action",
        actual: "Action",
    },
    BleedRule {
        severity: Severity::Warning,
        matches: |text| text.contains("deception"),
        message: "Found 5e skill \"Deception\"; PF1e uses \"Bluff\".",
        expected: "Bluff",
        actual: "Deception",
    },
    BleedRule {
        severity: Severity::Warning,
        matches: |text| text.contains("persuasion"),
        message: "Found 5e skill \"Persuasion\"; PF1e uses \"Diplomacy\" or \"Intimidate\" depending on context.",
        expected: "Diplomacy/Intimidate",
        actual: "Persuasion",
    },
    BleedRule {
        severity: Severity::Warning,
        matches: |text| text.contains("insight"),
        message: "Found 5e skill \"Insight\"; PF1e uses \"Sense Motive\".",
        expected: "Sense Motive",
        actual: "Insight",
    },
    BleedRule {
        severity: Severity::Warning,
        matches: |text| text.contains("athletics"),
        message: "Found 5e skill \"Athletics\"; PF1e splits it across \"Climb\" and \"Swim\".",
        expected: "Climb/Swim",
        actual: "Athletics",
    },
    BleedRule {
        severity: Severity::Warning,
        matches: |text| text.contains("acrobatics"),
        message: "Found \"Acrobatics\"; make sure its usage follows PF1e (jump and tumble checks).",
        expected: "Jump/Tumble",
        actual: "Acrobatics",
    },
    BleedRule {
        severity: Severity::Critical,
        matches: |text| text.contains("wisdom save") || text.contains("wisdom saving throw"),
        message: "Found \"Wisdom Save\" wording. PF1e uses \"Will\" saves.",
        expected: "Will Save",
        actual: "Wisdom Save",
    },
    BleedRule {
        severity: Severity::Critical,
        matches: |text| text.contains("dexterity save") || text.contains("dexterity saving throw"),
        message: "Found \"Dexterity Save\" wording. PF1e uses \"Reflex\" saves.",
        expected: "Reflex Save",
        actual: "Dexterity Save",
    },
    BleedRule {
        severity: Severity::Critical,
        matches: |text| {
            text.contains("constitution save") || text.contains("constitution saving throw")
        },
        message: "Found \"Constitution Save\" wording. PF1e uses \"Fortitude\" saves.",
        expected: "Fortitude Save",
        actual: "Constitution Save",
    },
    BleedRule {
        severity: Severity::Critical,
        matches: |text| text.contains("advantage") || text.contains("disadvantage"),
        message: "Found \"Advantage/Disadvantage\" mechanics, which are 5e specific; translate to static bonuses or penalties.",
        expected: "Bonus/Penalty",
        actual: "Advantage/Disadvantage",
    },
    BleedRule {
        severity: Severity::Critical,
        matches: |text| text.contains("short rest"),
        message: "Found \"Short Rest\"; PF1e does not use short/long rest nomenclature.",
        expected: "N/A",
        actual: "Short Rest",
    },
    BleedRule {
        severity: Severity::Critical,
        matches: |text| text.contains("reflex dc") || REFLEX_DC.is_match(text),
        message: "Found a \"Reflex DC\" style mechanic (e.g. \"Grapple Reflex DC 13\"). Grapples use CMB/CMD in PF1e.",
        expected: "Use CMB/CMD or special ability text",
        actual: "Reflex DC Grapple",
    },
];

/// Lowercased free text of the stat block, one source per line
fn haystack(record: &CreatureRecord) -> String {
    let feats = (!record.feats.is_empty()).then(|| record.feats.join(", "));
    [
        record.melee_line.clone(),
        record.ranged_line.clone(),
        record.special_attacks_line.clone(),
        record.special_abilities_block.clone(),
        record.spells_block.clone(),
        record.skills_line.clone(),
        feats,
        record.speed_line.clone(),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join("\n")
    .to_lowercase()
}

pub fn detect_system_bleed(record: &CreatureRecord) -> Vec<ValidationMessage> {
    let text = haystack(record);
    if text.is_empty() {
        return Vec::new();
    }

    RULES
        .iter()
        .filter(|rule| (rule.matches)(&text))
        .map(|rule| {
            ValidationMessage::new(rule.severity, CATEGORY, rule.message)
                .with_expected(rule.expected)
                .with_actual(rule.actual)
        })
        .collect()
}

pub fn validate_system_bleed(record: &CreatureRecord) -> ValidationResult {
    ValidationResult::from_messages(detect_system_bleed(record))
}
