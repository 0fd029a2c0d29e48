//! Data Transfer Objects - For API boundaries
//!
//! Request bodies and read-only views over the rule tables, kept out of the
//! domain so the HTTP layer owns its wire shapes.

pub mod rules;
pub mod stat_block;

pub use rules::*;
pub use stat_block::*;
