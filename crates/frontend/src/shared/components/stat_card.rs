use leptos::prelude::*;

/// Metric tile: icon, label and a preformatted value
#[component]
pub fn StatCard(
    label: String,
    value: String,
    /// Emoji shown left of the label
    icon: String,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__icon">{icon}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{value}</div>
            </div>
        </div>
    }
}
