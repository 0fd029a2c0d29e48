//! Domain services - the validators, the scaler and the auto-fixer
//!
//! Everything here is a pure function over a `CreatureRecord` and the static
//! rule tables.

mod auto_fixer;
mod basics;
mod benchmarks;
pub mod derivation;
mod economy;
mod scaler;
mod synergy;
mod system_bleed;

pub use auto_fixer::{auto_fix, FixOutcome};
pub use basics::validate_basics;
pub use benchmarks::validate_benchmarks;
pub use economy::validate_economy;
pub use scaler::{scale_creature, ScaleOutcome};
pub use synergy::validate_synergy;
pub use system_bleed::validate_system_bleed;
