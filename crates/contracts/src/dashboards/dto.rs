use serde::{Deserialize, Serialize};

use crate::shared::persona::{Persona, DEFAULT_PERSONA};
use crate::shared::widgets::DashboardView;

pub const PERSONA_PARAM: &str = "persona";
pub const NAV_PARAM: &str = "nav";
pub const SEED_PARAM: &str = "seed";

/// Literal text shown for a navigation label without a dashboard.
pub fn placeholder_message(nav: &str) -> String {
    format!("Dashboard for {} is not implemented yet.", nav)
}

/// One persona with its ordered navigation labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonaEntry {
    pub persona: Persona,
    pub label: String,
    pub navigation: Vec<String>,
}

/// Response of `GET /api/personas`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonaCatalog {
    pub app_title: String,
    pub default_persona: Persona,
    pub personas: Vec<PersonaEntry>,
}

impl PersonaCatalog {
    pub fn build(app_title: &str) -> Self {
        Self {
            app_title: app_title.to_string(),
            default_persona: DEFAULT_PERSONA,
            personas: Persona::ALL
                .into_iter()
                .map(|p| PersonaEntry {
                    persona: p,
                    label: p.label().to_string(),
                    navigation: p.navigation().iter().map(|n| n.to_string()).collect(),
                })
                .collect(),
        }
    }

    pub fn entry(&self, persona: Persona) -> Option<&PersonaEntry> {
        self.personas.iter().find(|e| e.persona == persona)
    }
}

/// Response of `GET /api/dashboard`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderOutcome {
    Dashboard(DashboardView),
    Placeholder { message: String },
}

impl RenderOutcome {
    pub fn placeholder(nav: &str) -> Self {
        RenderOutcome::Placeholder {
            message: placeholder_message(nav),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, RenderOutcome::Placeholder { .. })
    }
}
