//! Encounter context attached to a stat block

use serde::{Deserialize, Serialize};

/// Why a creature is exempt from benchmark validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EncounterExceptionKind {
    /// Rating far above the party (the dragon in the town square)
    Overpowered,
    /// Rating far below the party (city guards in a high-level adventure)
    Trivial,
    /// Not meant to be fought at all
    Scenery,
    /// Cannot be killed for story reasons
    PlotArmor,
}

impl EncounterExceptionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Overpowered => "overpowered",
            Self::Trivial => "trivial",
            Self::Scenery => "scenery",
            Self::PlotArmor => "plot-armor",
        }
    }
}

/// Level band of an adventure, e.g. 5-8
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelRange {
    pub min: u32,
    pub max: u32,
}

impl LevelRange {
    /// Representative party level for the band (midpoint, rounded down)
    pub fn midpoint(&self) -> u32 {
        (self.min + self.max) / 2
    }
}
