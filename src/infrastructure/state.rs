//! Shared application state

use std::sync::Arc;

use crate::application::services::{StatBlockService, StatBlockServiceImpl};
use crate::infrastructure::config::AppConfig;

/// Shared application state
pub struct AppState {
    pub config: AppConfig,
    // Application services
    pub stat_block_service: Arc<dyn StatBlockService>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            stat_block_service: Arc::new(StatBlockServiceImpl::new()),
        }
    }
}
