//! Application layer - Use cases over the stat block rules
//!
//! - Services: the validator suite, fix, scale and the audit pipeline
//! - DTOs: request/response shapes for the HTTP surface

pub mod dto;
pub mod services;
