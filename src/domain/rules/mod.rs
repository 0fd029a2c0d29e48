//! Rule tables - static lookup data for the PF1e creature-building rules
//!
//! Everything here is read-only data; behavior lives in `domain::services`.

mod benchmarks;
mod classes;
mod creature_types;
mod experience;
mod sizes;
mod treasure;

pub use benchmarks::{benchmarks_for, MonsterStatistics, MONSTER_STATISTICS};
pub use classes::{class_statistics, is_basic_npc_class};
pub use creature_types::{
    creature_type_rule, CreatureTypeRule, CREATURE_TYPE_RULES, DEFAULT_BAB_PROGRESSION,
    DEFAULT_HIT_DIE,
};
pub use experience::{experience_for, DEFAULT_EXPERIENCE, EXPERIENCE_BY_RATING};
pub use sizes::SizeConstants;
pub use treasure::{treasure_for, wealth_by_level, TreasureByRating};
