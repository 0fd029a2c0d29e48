//! Request bodies for the stat block endpoints

use serde::{Deserialize, Serialize};

use crate::domain::entities::CreatureRecord;
use crate::domain::value_objects::ChallengeRating;

/// Request to auto-fix a creature
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixRequest {
    pub creature: CreatureRecord,
    /// `enforce_rating` or `fix_math`; the configured default when absent
    #[serde(default)]
    pub mode: Option<String>,
}

/// Request to rescale a creature to a new experience award
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaleRequest {
    pub creature: CreatureRecord,
    pub target_xp: u32,
}

/// Request to run the audit pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditRequest {
    pub creature: CreatureRecord,
    #[serde(default)]
    pub mode: Option<String>,
    /// Rescale to this rating first when it differs from the creature's own
    #[serde(default)]
    pub target_rating: Option<ChallengeRating>,
}
