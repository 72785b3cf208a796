//! Inputs a dashboard asked for. Each change writes the control's query
//! parameter into the global selection, which triggers a new render.

use chrono::NaiveDate;
use contracts::shared::widgets::{date_range_keys, Control};
use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::date_input::DateInput;
use crate::shared::components::ui::{Button, RadioGroup, Select};

pub fn date_param(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn options(values: Vec<String>) -> Vec<(String, String)> {
    values.into_iter().map(|v| (v.clone(), v)).collect()
}

fn render_control(ctx: AppGlobalContext, control: Control) -> AnyView {
    match control {
        Control::Select {
            key,
            label,
            options: values,
            value,
        } => view! {
            <Select
                label=label
                value=Signal::derive(move || value.clone())
                options=Signal::derive(move || options(values.clone()))
                on_change=Callback::new(move |v: String| ctx.set_param(&key, v))
            />
        }
        .into_any(),
        Control::Radio {
            key,
            label,
            options: values,
            value,
        } => view! {
            <RadioGroup
                label=label
                name=key.clone()
                value=Signal::derive(move || value.clone())
                options=Signal::derive(move || options(values.clone()))
                on_change=Callback::new(move |v: String| ctx.set_param(&key, v))
            />
        }
        .into_any(),
        Control::Date { key, label, value } => view! {
            <div class="form__group">
                <label class="form__label">{label}</label>
                <DateInput value=value on_change=move |d| ctx.set_param(&key, date_param(d)) />
            </div>
        }
        .into_any(),
        Control::DateRange {
            key,
            label,
            start,
            end,
            min,
            max,
        } => {
            let (start_key, end_key) = date_range_keys(&key);
            view! {
                <div class="form__group">
                    <label class="form__label">{label}</label>
                    <div class="form__date-range">
                        <DateInput
                            value=start
                            min=min
                            max=max
                            on_change=move |d| ctx.set_param(&start_key, date_param(d))
                        />
                        <span class="form__date-range-sep">"–"</span>
                        <DateInput
                            value=end
                            min=min
                            max=max
                            on_change=move |d| ctx.set_param(&end_key, date_param(d))
                        />
                    </div>
                </div>
            }
            .into_any()
        }
        Control::Button { key, label } => view! {
            <div class="form__group form__group--button">
                <Button on_click=Callback::new(move |_| ctx.press(&key))>{label}</Button>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn ControlBar(controls: Vec<Control>) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="control-bar">
            {controls
                .into_iter()
                .map(|control| render_control(ctx, control))
                .collect_view()}
        </div>
    }
}
