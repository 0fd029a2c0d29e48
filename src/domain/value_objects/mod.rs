//! Value objects - Immutable objects defined by their attributes

mod challenge_rating;
mod creature_size;
mod creature_type;
mod economy;
mod encounter;
mod fix_mode;

pub use challenge_rating::ChallengeRating;
pub use creature_size::CreatureSize;
pub use creature_type::{Ability, BabProgression, CreatureType, Save};
pub use economy::{EconomicTier, TreasureType};
pub use encounter::{EncounterExceptionKind, LevelRange};
pub use fix_mode::{FixMode, FixModeParseError};
