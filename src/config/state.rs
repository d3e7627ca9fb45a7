// Application state module
// Immutable per-run state shared across request handler tasks

use super::types::Config;
use crate::project::ProjectRoot;

/// Application state
pub struct AppState {
    pub project: ProjectRoot,
    pub access_log: bool,
}

impl AppState {
    pub fn new(config: &Config, project: ProjectRoot) -> Self {
        Self {
            project,
            access_log: config.logging.access_log,
        }
    }
}
