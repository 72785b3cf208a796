pub mod handlers;

use crate::dashboards::registry::DashboardRegistry;
use crate::shared::clock::Clock;
use crate::shared::config::Config;

pub const APP_TITLE: &str = "Pathforge Empower";

/// Process-wide, read-only state handed to every handler.
pub struct AppState {
    pub registry: DashboardRegistry,
    pub config: Config,
    pub clock: Clock,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            registry: DashboardRegistry::new(),
            config,
            clock: Clock::System,
        }
    }
}
