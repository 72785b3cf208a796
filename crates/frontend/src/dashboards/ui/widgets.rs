//! Maps every `Widget` kind to markup. Rows and tab strips recurse.

use contracts::shared::alerts::AlertLevel;
use contracts::shared::widgets::{Series, TabSection, Widget};
use leptos::prelude::*;

use crate::shared::charts::{BarChart, LineChart, PieChart};
use crate::shared::components::data_table::{tone_class, DataTable};
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::tab_strip::TabStrip;

fn alert_class(level: AlertLevel) -> &'static str {
    match level {
        AlertLevel::Success => "alert alert--success",
        AlertLevel::Info => "alert alert--info",
        AlertLevel::Warning => "alert alert--warning",
        AlertLevel::Error => "alert alert--error",
    }
}

pub fn render_alert(level: AlertLevel, text: String) -> AnyView {
    view! { <div class=alert_class(level)>{format!("{} {}", level.icon(), text)}</div> }.into_any()
}

pub fn render_widgets(widgets: Vec<Widget>) -> AnyView {
    widgets
        .into_iter()
        .map(render_widget)
        .collect_view()
        .into_any()
}

/// Tab strip whose selection lives in `active`, so it survives re-renders.
pub fn render_tabs(tabs: Vec<TabSection>, active: RwSignal<usize>) -> AnyView {
    let labels: Vec<String> = tabs.iter().map(|t| t.label.clone()).collect();
    view! {
        <TabStrip
            labels=labels
            active=active
            panel=move |idx| {
                tabs.get(idx)
                    .or_else(|| tabs.first())
                    .map(|t| render_widgets(t.widgets.clone()))
                    .unwrap_or_else(|| view! { <></> }.into_any())
            }
        />
    }
    .into_any()
}

pub fn render_widget(widget: Widget) -> AnyView {
    match widget {
        Widget::Heading { text } => view! { <h3 class="widget__heading">{text}</h3> }.into_any(),
        Widget::Text { text } => view! { <p class="widget__text">{text}</p> }.into_any(),
        Widget::Metric { label, value, icon } => {
            view! { <StatCard label=label value=value icon=icon /> }.into_any()
        }
        Widget::BarChart {
            title,
            categories,
            values,
            x_label,
            y_label,
        } => view! {
            <BarChart
                title=title
                categories=categories
                series=vec![Series::new(y_label.clone(), values)]
                x_label=x_label
                y_label=y_label
            />
        }
        .into_any(),
        Widget::MultiBarChart {
            title,
            categories,
            series,
            x_label,
            y_label,
        } => view! {
            <BarChart title=title categories=categories series=series x_label=x_label y_label=y_label />
        }
        .into_any(),
        Widget::LineChart {
            title,
            x_labels,
            series,
            x_label,
            y_label,
        } => view! {
            <LineChart title=title x_labels=x_labels series=series x_label=x_label y_label=y_label />
        }
        .into_any(),
        Widget::PieChart { title, slices } => {
            view! { <PieChart title=title slices=slices /> }.into_any()
        }
        Widget::BulletList { heading, items } => view! {
            <div class="bullet-list">
                <h4 class="bullet-list__heading">{heading}</h4>
                <ul>
                    {items.into_iter().map(|i| view! { <li>{i}</li> }).collect_view()}
                </ul>
            </div>
        }
        .into_any(),
        Widget::Table { columns, rows } => {
            view! { <DataTable columns=columns rows=rows /> }.into_any()
        }
        Widget::Alert { level, text } => render_alert(level, text),
        Widget::Progress {
            label,
            percent,
            tone,
        } => view! {
            <div class="progress">
                <div class="progress__label">
                    <span>{label}</span>
                    <span>{format!("{:.0}%", percent)}</span>
                </div>
                <div class="progress__track">
                    <div
                        class=format!("progress__fill {}", tone_class(tone))
                        style=format!("width: {:.1}%", percent)
                    ></div>
                </div>
            </div>
        }
        .into_any(),
        Widget::Detail { title, items } => view! {
            <div class="detail-card">
                <h4 class="detail-card__title">{title}</h4>
                <dl class="detail-card__items">
                    {items
                        .into_iter()
                        .map(|item| view! {
                            <dt>{item.label}</dt>
                            <dd>{item.value}</dd>
                        })
                        .collect_view()}
                </dl>
            </div>
        }
        .into_any(),
        Widget::Row { columns } => {
            let style = format!(
                "grid-template-columns: repeat({}, minmax(0, 1fr))",
                columns.len().max(1)
            );
            view! {
                <div class="widget-row" style=style>
                    {columns
                        .into_iter()
                        .map(|column| view! {
                            <div class="widget-row__column">{render_widgets(column)}</div>
                        })
                        .collect_view()}
                </div>
            }
            .into_any()
        }
        Widget::Tabs { tabs } => render_tabs(tabs, RwSignal::new(0)),
        Widget::Divider => view! { <hr class="widget__divider" /> }.into_any(),
    }
}
