pub mod global_context;
pub mod sidebar;

use leptos::prelude::*;

/// Application shell.
///
/// ```text
/// +-----------+------------------------------+
/// |  Sidebar  |           Content            |
/// |  (Left)   |          (Center)            |
/// +-----------+------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <div class="app-body">
                <aside class="app-sidebar">
                    {left()}
                </aside>
                <main class="app-main">
                    {center()}
                </main>
            </div>
        </div>
    }
}
