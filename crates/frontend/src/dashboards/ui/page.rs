use contracts::dashboards::dto::RenderOutcome;
use contracts::shared::alerts::AlertLevel;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dashboards::api;
use crate::dashboards::ui::controls::ControlBar;
use crate::dashboards::ui::widgets::{render_alert, render_tabs, render_widgets};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::page_header::PageHeader;

fn render_outcome(outcome: RenderOutcome, active_tab: RwSignal<usize>) -> AnyView {
    match outcome {
        RenderOutcome::Placeholder { message } => render_alert(AlertLevel::Info, message),
        RenderOutcome::Dashboard(view) => {
            let tabs = (!view.tabs.is_empty()).then(|| render_tabs(view.tabs, active_tab));
            view! {
                <PageHeader title=view.title>
                    <ControlBar controls=view.controls />
                </PageHeader>
                {render_widgets(view.header)}
                {tabs}
                {render_widgets(view.footer)}
            }
            .into_any()
        }
    }
}

/// The dashboard of the current selection, fetched again on every change.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let (outcome, set_outcome) = signal(None::<RenderOutcome>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let active_tab = RwSignal::new(0usize);
    // Later requests win over slower earlier ones
    let latest_request = StoredValue::new(0u64);
    let shown_page = StoredValue::new((String::new(), String::new()));

    Effect::new(move |_| {
        if ctx.catalog.with(Option::is_none) {
            return;
        }
        let selection = ctx.selection.get();
        ctx.refresh.track();
        let action = ctx.take_action();

        let page = (selection.persona.clone(), selection.nav.clone());
        if shown_page.get_value() != page {
            shown_page.set_value(page);
            active_tab.set(0);
        }

        let request = latest_request.get_value() + 1;
        latest_request.set_value(request);
        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            let result = api::get_dashboard(&selection, action.as_deref()).await;
            if latest_request.get_value() != request {
                return;
            }
            match result {
                Ok(response) => set_outcome.set(Some(response)),
                Err(e) => {
                    log::error!("Failed to load dashboard {}: {}", selection.nav, e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="dashboard">
            {move || loading.get().then(|| view! {
                <div class="dashboard__loading">"Loading..."</div>
            })}
            {move || error.get().map(|err| render_alert(AlertLevel::Error, err))}
            {move || outcome.get().map(|o| render_outcome(o, active_tab))}
        </div>
    }
}
