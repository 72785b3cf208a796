use leptos::prelude::*;

/// Dashboard title with its controls underneath
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <h2 class="page-header__title">{title}</h2>
            <div class="page-header__actions">
                {children()}
            </div>
        </div>
    }
}
