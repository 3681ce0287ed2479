use std::sync::Arc;

use crate::api::client::HttpGet;
use crate::config::Settings;
use crate::shell::Shell;

/// Shared state of the web shell. Each request builds its own products view from it.
#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub http: Arc<dyn HttpGet>,
    pub shell: Shell,
}

impl AppState {
    pub fn new(settings: Settings, http: Arc<dyn HttpGet>) -> Self {
        Self {
            settings,
            http,
            shell: Shell::default(),
        }
    }
}
