//! Domain layer - Core rules logic with no I/O
//!
//! This layer contains:
//! - Value Objects: ChallengeRating, CreatureSize, CreatureType, FixMode
//! - Rules: the static PF1e tables (benchmarks, experience, treasure, progressions)
//! - Entities: CreatureRecord, CreatureView, validation messages, change log
//! - Domain Services: derivation, validators, scaler and auto-fixer

pub mod entities;
pub mod rules;
pub mod services;
pub mod value_objects;
