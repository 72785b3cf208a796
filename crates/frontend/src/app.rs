use crate::dashboards::ui::DashboardPage;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::sidebar::Sidebar;
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new();
    provide_context(ctx);
    ctx.load_catalog();
    ctx.init_url_sync();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <DashboardPage /> }.into_any()
        />
    }
}
