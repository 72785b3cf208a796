use chrono::NaiveDate;
use leptos::prelude::*;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Native date picker bound to a `NaiveDate`.
/// Values the browser hands back that do not parse are ignored.
#[component]
pub fn DateInput(
    value: NaiveDate,
    #[prop(optional)]
    min: Option<NaiveDate>,
    #[prop(optional)]
    max: Option<NaiveDate>,
    on_change: impl Fn(NaiveDate) + 'static,
) -> impl IntoView {
    let fmt = |d: NaiveDate| d.format(DATE_FORMAT).to_string();

    view! {
        <input
            type="date"
            class="form__input form__input--date"
            prop:value=fmt(value)
            min=min.map(fmt)
            max=max.map(fmt)
            on:change=move |ev| {
                if let Ok(date) = NaiveDate::parse_from_str(&event_target_value(&ev), DATE_FORMAT) {
                    on_change(date);
                }
            }
        />
    }
}
