//! Stat Block Service - Application service for stat block validation and repair
//!
//! This service runs the validator suite over a creature, exposes the scaler
//! and the auto-fixer, and chains them into the audit pipeline used by the
//! playground: optional rescale, auto-fix, then a full validation report.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::domain::entities::{
    sorted_messages, ChangeLogEntry, CreatureRecord, Severity, ValidationMessage,
    ValidationResult,
};
use crate::domain::rules::experience_for;
use crate::domain::services::{
    auto_fix, scale_creature, validate_basics, validate_benchmarks, validate_economy,
    validate_synergy, validate_system_bleed, FixOutcome, ScaleOutcome,
};
use crate::domain::value_objects::{ChallengeRating, FixMode};

/// Field name used for scaler entries folded into an audit change log
const SCALER_FIELD: &str = "Creature Scaler";

/// Results of every validator plus the combined verdict
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub basics: ValidationResult,
    pub benchmarks: ValidationResult,
    pub economy: ValidationResult,
    pub synergy: ValidationResult,
    pub system_bleed: ValidationResult,
    /// All messages above, in validator order
    pub overall: ValidationResult,
}

impl ValidationReport {
    fn new(
        basics: ValidationResult,
        benchmarks: ValidationResult,
        economy: ValidationResult,
        synergy: ValidationResult,
        system_bleed: ValidationResult,
    ) -> Self {
        let messages = [&basics, &benchmarks, &economy, &synergy, &system_bleed]
            .into_iter()
            .flat_map(|result| result.messages.iter().cloned())
            .collect();

        Self {
            overall: ValidationResult::from_messages(messages),
            basics,
            benchmarks,
            economy,
            synergy,
            system_bleed,
        }
    }
}

/// Output of the audit pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditOutcome {
    pub creature: CreatureRecord,
    pub changes: Vec<ChangeLogEntry>,
    pub report: ValidationReport,
}

/// Stat block service trait defining the application use cases
pub trait StatBlockService: Send + Sync {
    /// Run every validator over a creature
    fn validate(&self, creature: &CreatureRecord) -> ValidationReport;

    /// Auto-fix a copy of the creature under the given philosophy
    fn fix(&self, creature: &CreatureRecord, mode: FixMode) -> FixOutcome;

    /// Rescale a copy of the creature to the rating nearest `target_xp`
    fn scale(&self, creature: &CreatureRecord, target_xp: u32) -> ScaleOutcome;

    /// Optional rescale, auto-fix and validation in one pass
    fn audit(
        &self,
        creature: &CreatureRecord,
        mode: FixMode,
        target_rating: Option<&ChallengeRating>,
    ) -> AuditOutcome;

    /// Messages ordered critical-first without touching the input
    fn sorted_messages(&self, messages: &[ValidationMessage]) -> Vec<ValidationMessage>;
}

/// Default implementation of StatBlockService over the domain services
#[derive(Debug, Clone, Default)]
pub struct StatBlockServiceImpl;

impl StatBlockServiceImpl {
    pub fn new() -> Self {
        Self
    }
}

impl StatBlockService for StatBlockServiceImpl {
    #[instrument(skip(self, creature), fields(name = %creature.name))]
    fn validate(&self, creature: &CreatureRecord) -> ValidationReport {
        let report = ValidationReport::new(
            validate_basics(creature),
            validate_benchmarks(creature),
            validate_economy(creature),
            validate_synergy(creature),
            validate_system_bleed(creature),
        );

        debug!(
            status = ?report.overall.status,
            critical = report.overall.count(Severity::Critical),
            warnings = report.overall.count(Severity::Warning),
            "Validated stat block"
        );
        report
    }

    #[instrument(skip(self, creature), fields(name = %creature.name))]
    fn fix(&self, creature: &CreatureRecord, mode: FixMode) -> FixOutcome {
        let outcome = auto_fix(creature, mode);
        info!(mode = %mode, changes = outcome.changes.len(), "Auto-fixed stat block");
        outcome
    }

    #[instrument(skip(self, creature), fields(name = %creature.name))]
    fn scale(&self, creature: &CreatureRecord, target_xp: u32) -> ScaleOutcome {
        let outcome = scale_creature(creature, target_xp);
        info!(
            rating = %outcome.rating,
            changes = outcome.changes.len(),
            "Scaled stat block"
        );
        outcome
    }

    #[instrument(skip(self, creature), fields(name = %creature.name))]
    fn audit(
        &self,
        creature: &CreatureRecord,
        mode: FixMode,
        target_rating: Option<&ChallengeRating>,
    ) -> AuditOutcome {
        let mut working = creature.clone();
        let mut changes = Vec::new();

        if let Some(target) = target_rating.filter(|target| creature.cr.as_ref() != Some(*target)) {
            match experience_for(target) {
                Some(target_xp) => {
                    debug!(target = %target, target_xp, "Rescaling before auto-fix");
                    let scaled = scale_creature(&working, target_xp);
                    changes.extend(scaled.changes.into_iter().map(|entry| ChangeLogEntry {
                        reason: format!("{}: {}", entry.field, entry.reason),
                        field: SCALER_FIELD.to_string(),
                        ..entry
                    }));
                    working = scaled.creature;
                }
                None => debug!(target = %target, "Target rating has no experience award; not rescaling"),
            }
        }

        let fixed = auto_fix(&working, mode);
        changes.extend(fixed.changes);

        // fix-math keeps the author's numbers under review; enforce-rating reviews the repaired block
        let report = match mode {
            FixMode::EnforceRating => self.validate(&fixed.creature),
            FixMode::FixMath => self.validate(creature),
        };

        info!(
            mode = %mode,
            changes = changes.len(),
            status = ?report.overall.status,
            "Audited stat block"
        );

        AuditOutcome {
            creature: fixed.creature,
            changes,
            report,
        }
    }

    fn sorted_messages(&self, messages: &[ValidationMessage]) -> Vec<ValidationMessage> {
        sorted_messages(messages)
    }
}
