//! Application services - Use case implementations
//!
//! Services here are thin orchestration over the pure domain services; they
//! add logging and combine validators into reports.

pub mod stat_block_service;

#[allow(unused_imports)]
pub use stat_block_service::{
    AuditOutcome, StatBlockService, StatBlockServiceImpl, ValidationReport,
};
