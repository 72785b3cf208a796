//! Persona picker and navigation for the selected persona.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::ui::{RadioGroup, Select};
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let app_title = move || {
        ctx.catalog
            .with(|c| c.as_ref().map(|c| c.app_title.clone()))
            .unwrap_or_default()
    };

    let persona_options = Signal::derive(move || {
        ctx.catalog.with(|c| {
            c.as_ref()
                .map(|c| {
                    c.personas
                        .iter()
                        .map(|e| (e.label.clone(), e.label.clone()))
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default()
        })
    });

    let nav_options = Signal::derive(move || {
        let persona = ctx.selection.with(|s| s.persona.clone());
        ctx.catalog.with(|c| {
            c.as_ref()
                .and_then(|c| c.personas.iter().find(|e| e.label == persona))
                .map(|e| {
                    e.navigation
                        .iter()
                        .map(|n| (n.clone(), n.clone()))
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default()
        })
    });

    let persona = Signal::derive(move || ctx.selection.with(|s| s.persona.clone()));
    let nav = Signal::derive(move || ctx.selection.with(|s| s.nav.clone()));

    view! {
        <div class="sidebar">
            <h1 class="sidebar__title">{app_title}</h1>
            {move || ctx.catalog_error.get().map(|e| view! {
                <div class="alert alert--error">{format!("⛔ {}", e)}</div>
            })}
            <Select
                label="Select Persona"
                value=persona
                options=persona_options
                on_change=Callback::new(move |label: String| ctx.choose_persona(label))
            />
            <RadioGroup
                label="Navigation"
                name="nav"
                value=nav
                options=nav_options
                on_change=Callback::new(move |label: String| ctx.choose_nav(label))
            />
        </div>
    }
}
