//! Benchmarks validator - soft comparison against the rating's expected statistics
//!
//! Advisory only: every deviation is a warning, never critical. Basics is the
//! hard gate.

use crate::domain::entities::{CreatureRecord, ValidationMessage, ValidationResult};
use crate::domain::rules::benchmarks_for;
use crate::domain::services::derivation::{challenge_rating_value, expected_hit_points};
use crate::domain::value_objects::{Ability, Save};

const CATEGORY: &str = "benchmarks";
const ENCOUNTER: &str = "encounter-exception";

const OVERPOWERED_DELTA: f64 = 5.0;
const TRIVIAL_DELTA: f64 = -4.0;
/// Allowed deviation of claimed HP per Hit Die from the die average
const HP_PER_HD_TOLERANCE: f64 = 2.0;
const HP_HIGH_RATIO: f64 = 1.5;
const HP_LOW_RATIO: f64 = 0.7;
const AC_TOLERANCE: i32 = 4;
const SAVE_TOLERANCE: i32 = 2;

pub fn validate_benchmarks(record: &CreatureRecord) -> ValidationResult {
    if record.encounter_exception {
        let kind = record
            .encounter_exception_type
            .map(|kind| kind.as_str())
            .unwrap_or("unspecified");
        let reason = record
            .encounter_exception_reason
            .as_deref()
            .map(|reason| format!(" Reason: {reason}"))
            .unwrap_or_default();
        return ValidationResult::from_messages(vec![ValidationMessage::note(
            ENCOUNTER,
            format!("Encounter exception ({kind}): benchmark validation skipped.{reason}"),
        )]);
    }

    let view = record.view();
    let mut messages = Vec::new();
    let rating_value = record.cr.as_ref().and_then(challenge_rating_value);

    if let (Some(party_level), Some(rating_value)) = (view.expected_party_level(), rating_value) {
        let delta = rating_value - f64::from(party_level);
        if delta >= OVERPOWERED_DELTA {
            messages.push(
                ValidationMessage::warning(
                    ENCOUNTER,
                    format!(
                        "CR {rating_value} is {delta} above party level {party_level}; \
                         mark as an 'overpowered' encounter exception if intentional."
                    ),
                )
                .with_expected("overpowered")
                .with_actual(delta),
            );
        } else if delta <= TRIVIAL_DELTA {
            messages.push(
                ValidationMessage::warning(
                    ENCOUNTER,
                    format!(
                        "CR {rating_value} is {} below party level {party_level}; \
                         mark as a 'trivial' encounter exception if intentional.",
                        -delta
                    ),
                )
                .with_expected("trivial")
                .with_actual(delta),
            );
        }
    }

    if let Some((rating, row)) = record
        .cr
        .as_ref()
        .and_then(|rating| benchmarks_for(rating).map(|row| (rating, row)))
    {
        let mut hp_high = false;
        let mut ac_low = false;

        if let Some(hp) = view.claimed_hp() {
            if view.total_hd > 0 {
                let con = view.modifier(Ability::Con);
                let expected = expected_hit_points(view.total_hd, view.hit_die, con);
                let per_hd = f64::from(hp - expected) / f64::from(view.total_hd);
                if per_hd.abs() > HP_PER_HD_TOLERANCE {
                    messages.push(
                        ValidationMessage::warning(
                            CATEGORY,
                            format!(
                                "HP {hp} is off by {per_hd:.1} per HD from {} d{} with Con {con:+} (expected {expected}).",
                                view.total_hd, view.hit_die
                            ),
                        )
                        .with_expected(expected)
                        .with_actual(hp),
                    );
                }
            }

            let benchmark = f64::from(row.hp);
            hp_high = f64::from(hp) > benchmark * HP_HIGH_RATIO;
            if f64::from(hp) < benchmark * HP_LOW_RATIO {
                tracing::debug!(hp, benchmark = row.hp, "hit points below benchmark band");
            }
        }

        if let Some(ac) = view.claimed_ac() {
            let diff = ac - row.ac;
            if diff < -AC_TOLERANCE {
                ac_low = true;
                messages.push(
                    ValidationMessage::warning(
                        CATEGORY,
                        format!(
                            "AC {ac} is too low for CR {rating}. Standard is ~{}; creature will be hit constantly.",
                            row.ac
                        ),
                    )
                    .with_expected(row.ac)
                    .with_actual(ac),
                );
            } else if diff > AC_TOLERANCE {
                messages.push(
                    ValidationMessage::warning(
                        CATEGORY,
                        format!(
                            "AC {ac} is too high for CR {rating}. Standard is ~{}; players may struggle to hit.",
                            row.ac
                        ),
                    )
                    .with_expected(row.ac)
                    .with_actual(ac),
                );
            }
        }

        if hp_high && ac_low {
            messages.push(
                ValidationMessage::warning(
                    CATEGORY,
                    format!(
                        "Damage sponge with low defense: HP above 150% of the CR {rating} benchmark \
                         while AC trails it. This drift usually comes from another system's math."
                    ),
                )
                .with_expected(format!("HP ~{}, AC ~{}", row.hp, row.ac))
                .with_actual("high HP, low AC"),
            );
        }

        for save in Save::ALL {
            if let Some(value) = view.claimed_save(save) {
                if value < row.poor_save - SAVE_TOLERANCE {
                    messages.push(
                        ValidationMessage::warning(
                            CATEGORY,
                            format!(
                                "{} save {value:+} is very low for CR {rating}. Poor save benchmark is {:+}.",
                                save.display_name(),
                                row.poor_save
                            ),
                        )
                        .with_expected(row.poor_save)
                        .with_actual(value),
                    );
                }
            }
        }
    }

    let expected_bab = view.expected_bab();
    if let Some(claimed) = view.claimed_bab() {
        if claimed != expected_bab {
            messages.push(
                ValidationMessage::warning(
                    CATEGORY,
                    format!("Base Attack Bonus {claimed:+} differs from chassis value {expected_bab:+}."),
                )
                .with_expected(expected_bab)
                .with_actual(claimed),
            );
        }
    }

    if let Some(claimed) = view.claimed_cmb() {
        let expected = view.cmb_for(expected_bab);
        if claimed != expected {
            messages.push(
                ValidationMessage::warning(
                    CATEGORY,
                    format!("CMB {claimed:+} differs from BAB + Str + size = {expected:+}."),
                )
                .with_expected(expected)
                .with_actual(claimed),
            );
        }
    }

    if let (Some(floor), Some(rating), Some(rating_value)) =
        (record.size.minimum_rating(), record.cr.as_ref(), rating_value)
    {
        if rating_value < floor {
            messages.push(
                ValidationMessage::warning(
                    CATEGORY,
                    format!(
                        "{} creatures are rarely below CR {floor}; CR {rating} may undersell its reach and damage.",
                        record.size
                    ),
                )
                .with_expected(floor)
                .with_actual(rating_value),
            );
        }
    }

    ValidationResult::from_messages(messages)
}
