use config::Config;
use std::sync::Arc;

pub mod config;
pub mod logging;

// Service-level state containing only infrastructure concerns.
// Fixture generators never see it: every connection is isolated.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(app_config: Config) -> Self {
        Self {
            config: Arc::new(app_config),
        }
    }

    pub fn static_dir(&self) -> &str {
        self.config.static_dir()
    }
}
