use leptos::prelude::*;

#[component]
pub fn Radio(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: String,
    /// Current selected value
    #[prop(into)]
    checked_value: Signal<String>,
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Name attribute (for grouping)
    #[prop(into)]
    name: String,
) -> impl IntoView {
    let radio_id = format!("radio-{}-{}", name, value);
    let value_for_check = value.clone();
    let value_for_change = value.clone();
    let is_checked = move || checked_value.get() == value_for_check;

    view! {
        <div class="form__radio-wrapper">
            <input
                id=radio_id.clone()
                type="radio"
                class="form__radio"
                name=name
                value=value
                prop:checked=is_checked
                on:change=move |_| {
                    if let Some(handler) = on_change {
                        handler.run(value_for_change.clone());
                    }
                }
            />
            <label class="form__radio-label" for=radio_id>
                {label}
            </label>
        </div>
    }
}

/// Vertical radio list, one entry per option
#[component]
pub fn RadioGroup(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    #[prop(into)]
    name: String,
    /// Options: Vec of (value, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label">{l}</label>
            })}
            <div class="form__radio-group">
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, lbl)| {
                        view! {
                            <Radio
                                label=lbl
                                value=val
                                checked_value=value
                                on_change=Callback::new(move |new_val: String| {
                                    if let Some(handler) = on_change {
                                        handler.run(new_val);
                                    }
                                })
                                name=name.clone()
                            />
                        }
                    }
                />
            </div>
        </div>
    }
}
