use contracts::dashboards::dto::{PersonaCatalog, NAV_PARAM, PERSONA_PARAM};
use leptos::prelude::Effect;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::BTreeMap;
use web_sys::window;

use crate::dashboards::api;

/// Persona, navigation label and control values of the page on screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Selection {
    pub persona: String,
    pub nav: String,
    pub params: BTreeMap<String, String>,
}

impl Selection {
    /// Read a `?persona=..&nav=..&key=value` query string. Unparseable input is empty.
    pub fn from_query(query: &str) -> Self {
        let mut params: BTreeMap<String, String> =
            serde_qs::from_str(query.trim_start_matches('?')).unwrap_or_default();
        Self {
            persona: params.remove(PERSONA_PARAM).unwrap_or_default(),
            nav: params.remove(NAV_PARAM).unwrap_or_default(),
            params,
        }
    }

    pub fn to_query(&self) -> String {
        let mut all = self.params.clone();
        if !self.persona.is_empty() {
            all.insert(PERSONA_PARAM.to_string(), self.persona.clone());
        }
        if !self.nav.is_empty() {
            all.insert(NAV_PARAM.to_string(), self.nav.clone());
        }
        serde_qs::to_string(&all).unwrap_or_default()
    }

    /// Replace a persona or navigation label the catalog does not offer with
    /// its default. Control values are dropped whenever either changes.
    pub fn normalized(mut self, catalog: &PersonaCatalog) -> Self {
        let entry = catalog
            .personas
            .iter()
            .find(|e| e.label == self.persona)
            .or_else(|| catalog.entry(catalog.default_persona));
        let Some(entry) = entry else {
            return self;
        };
        if entry.label != self.persona {
            self.persona = entry.label.clone();
            self.params.clear();
        }
        if !entry.navigation.contains(&self.nav) {
            self.nav = entry.navigation.first().cloned().unwrap_or_default();
            self.params.clear();
        }
        self
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub catalog: RwSignal<Option<PersonaCatalog>>,
    pub catalog_error: RwSignal<Option<String>>,
    pub selection: RwSignal<Selection>,
    /// Bumped by buttons so the same selection renders again
    pub refresh: RwSignal<u64>,
    pending_action: StoredValue<Option<String>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self {
            catalog: RwSignal::new(None),
            catalog_error: RwSignal::new(None),
            selection: RwSignal::new(Selection::from_query(&search)),
            refresh: RwSignal::new(0),
            pending_action: StoredValue::new(None),
        }
    }

    pub fn load_catalog(&self) {
        let this = *self;
        spawn_local(async move {
            match api::get_personas().await {
                Ok(catalog) => {
                    let normalized = this.selection.get_untracked().normalized(&catalog);
                    this.selection.set(normalized);
                    this.catalog.set(Some(catalog));
                }
                Err(e) => {
                    log::error!("Failed to load personas: {}", e);
                    this.catalog_error.set(Some(e));
                }
            }
        });
    }

    /// Mirror the selection into the address bar.
    pub fn init_url_sync(&self) {
        let this = *self;
        Effect::new(move |_| {
            let new_url = format!("?{}", this.selection.with(Selection::to_query));

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn choose_persona(&self, label: String) {
        leptos::logging::log!("persona: {}", label);
        let Some(catalog) = self.catalog.get_untracked() else {
            return;
        };
        let next = Selection {
            persona: label,
            ..Selection::default()
        }
        .normalized(&catalog);
        self.selection.set(next);
    }

    pub fn choose_nav(&self, nav: String) {
        leptos::logging::log!("nav: {}", nav);
        self.selection.update(|s| {
            if s.nav != nav {
                s.nav = nav;
                s.params.clear();
            }
        });
    }

    pub fn set_param(&self, key: &str, value: String) {
        self.selection.update(|s| {
            s.params.insert(key.to_string(), value);
        });
    }

    /// Render once more with `action=<key>`.
    pub fn press(&self, key: &str) {
        leptos::logging::log!("action: {}", key);
        self.pending_action.set_value(Some(key.to_string()));
        self.refresh.update(|n| *n += 1);
    }

    /// The pressed button, cleared so only one render sees it.
    pub fn take_action(&self) -> Option<String> {
        let action = self.pending_action.get_value();
        self.pending_action.set_value(None);
        action
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
