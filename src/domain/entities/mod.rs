//! Domain entities

mod change_log;
mod creature;
mod creature_view;
mod validation;

pub use change_log::{ChangeLog, ChangeLogEntry};
pub use creature::{ClassLevel, CreatureRecord};
pub use creature_view::CreatureView;
pub use validation::{
    sorted_messages, Severity, ValidationMessage, ValidationResult, ValidationStatus,
};
