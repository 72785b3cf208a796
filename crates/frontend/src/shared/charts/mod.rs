//! SVG charts drawn directly by Leptos, no JS charting library.

pub mod geometry;

use contracts::shared::widgets::{Series, Slice};
use geometry::{
    bar_rects, category_center, color, format_tick, label_stride, line_points, pie_segments,
    point_x, points_attr, wedge_path, Frame, Scale,
};
use leptos::prelude::*;

const MAX_X_LABELS: usize = 12;
const Y_TICKS: usize = 5;
const PIE_SIZE: f64 = 240.0;

fn px(value: f64) -> String {
    format!("{:.1}", value)
}

fn chart_title(title: Option<String>) -> impl IntoView {
    title.map(|t| view! { <div class="chart__title">{t}</div> })
}

fn legend(names: Vec<String>) -> impl IntoView {
    (names.len() > 1).then(|| {
        view! {
            <div class="chart__legend">
                {names
                    .into_iter()
                    .enumerate()
                    .map(|(i, name)| {
                        view! {
                            <span class="chart__legend-item">
                                <span class="chart__swatch" style=format!("background-color: {}", color(i))></span>
                                {name}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        }
    })
}

/// Grid lines, y tick labels and axis titles.
fn value_axis(frame: Frame, scale: Scale, x_label: String, y_label: String) -> impl IntoView {
    let x_start = px(frame.left);
    let x_end = px(frame.left + frame.plot_width());
    let ticks = scale
        .ticks(Y_TICKS)
        .into_iter()
        .map(|tick| {
            let y = frame.y(tick, &scale);
            view! {
                <g>
                    <line class="chart__grid" x1=x_start.clone() y1=px(y) x2=x_end.clone() y2=px(y) />
                    <text class="chart__tick" x=px(frame.left - 6.0) y=px(y + 4.0) text-anchor="end">
                        {format_tick(tick)}
                    </text>
                </g>
            }
        })
        .collect_view();

    let baseline = px(frame.plot_bottom());
    let y_mid = frame.top + frame.plot_height() / 2.0;
    view! {
        <g>
            {ticks}
            <line class="chart__axis" x1=x_start.clone() y1=baseline.clone() x2=x_end.clone() y2=baseline />
            <text
                class="chart__axis-label"
                x=px(frame.left + frame.plot_width() / 2.0)
                y=px(frame.height - 6.0)
                text-anchor="middle"
            >
                {x_label}
            </text>
            <text
                class="chart__axis-label"
                x="14"
                y=px(y_mid)
                text-anchor="middle"
                transform=format!("rotate(-90 14 {:.1})", y_mid)
            >
                {y_label}
            </text>
        </g>
    }
}

/// Labels under the x axis, thinned out for long axes.
fn category_labels(
    frame: Frame,
    labels: Vec<String>,
    position: impl Fn(usize, usize) -> f64,
) -> impl IntoView {
    let count = labels.len();
    let stride = label_stride(count, MAX_X_LABELS);
    labels
        .into_iter()
        .enumerate()
        .filter(|(i, _)| i % stride == 0)
        .map(|(i, label)| {
            view! {
                <text
                    class="chart__tick"
                    x=px(position(i, count))
                    y=px(frame.plot_bottom() + 16.0)
                    text-anchor="middle"
                >
                    {label}
                </text>
            }
        })
        .collect_view()
}

/// Grouped vertical bars. A single series draws a plain bar chart.
#[component]
pub fn BarChart(
    title: Option<String>,
    categories: Vec<String>,
    series: Vec<Series>,
    x_label: String,
    y_label: String,
) -> impl IntoView {
    let frame = Frame::default();
    let scale = Scale::covering(series.iter().flat_map(|s| s.values.iter()));
    let values: Vec<&[f64]> = series.iter().map(|s| s.values.as_slice()).collect();
    let bars = bar_rects(&frame, categories.len(), &values, &scale)
        .into_iter()
        .map(|bar| {
            view! {
                <rect
                    class="chart__bar"
                    x=px(bar.x)
                    y=px(bar.y)
                    width=px(bar.width)
                    height=px(bar.height)
                    fill=color(bar.series)
                />
            }
        })
        .collect_view();
    let names = series.iter().map(|s| s.name.clone()).collect();

    view! {
        <div class="chart">
            {chart_title(title)}
            <svg class="chart__svg" viewBox=frame.view_box() preserveAspectRatio="xMidYMid meet">
                {value_axis(frame, scale, x_label, y_label)}
                {bars}
                {category_labels(frame, categories, move |i, n| category_center(&frame, i, n))}
            </svg>
            {legend(names)}
        </div>
    }
}

#[component]
pub fn LineChart(
    title: Option<String>,
    x_labels: Vec<String>,
    series: Vec<Series>,
    x_label: String,
    y_label: String,
) -> impl IntoView {
    let frame = Frame::default();
    let scale = Scale::covering(series.iter().flat_map(|s| s.values.iter()));
    let lines = series
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let points = points_attr(&line_points(&frame, &s.values, &scale));
            view! { <polyline class="chart__line" points=points fill="none" stroke=color(i) /> }
        })
        .collect_view();
    let names = series.iter().map(|s| s.name.clone()).collect();

    view! {
        <div class="chart">
            {chart_title(title)}
            <svg class="chart__svg" viewBox=frame.view_box() preserveAspectRatio="xMidYMid meet">
                {value_axis(frame, scale, x_label, y_label)}
                {lines}
                {category_labels(frame, x_labels, move |i, n| point_x(&frame, i, n))}
            </svg>
            {legend(names)}
        </div>
    }
}

/// Wedges with a legend carrying each share in percent.
#[component]
pub fn PieChart(title: String, slices: Vec<Slice>) -> impl IntoView {
    let center = PIE_SIZE / 2.0;
    let radius = center - 8.0;
    let values: Vec<f64> = slices.iter().map(|s| s.value).collect();

    let wedges = pie_segments(&values)
        .into_iter()
        .map(|segment| {
            view! {
                <path
                    class="chart__wedge"
                    d=wedge_path(center, center, radius, &segment)
                    fill=color(segment.index)
                />
            }
        })
        .collect_view();

    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    let keys = slices
        .into_iter()
        .enumerate()
        .map(|(i, slice)| {
            let share = if total > 0.0 {
                slice.value.max(0.0) / total * 100.0
            } else {
                0.0
            };
            view! {
                <span class="chart__legend-item">
                    <span class="chart__swatch" style=format!("background-color: {}", color(i))></span>
                    {format!("{} ({:.1}%)", slice.label, share)}
                </span>
            }
        })
        .collect_view();

    view! {
        <div class="chart chart--pie">
            <div class="chart__title">{title}</div>
            <svg class="chart__svg chart__svg--pie" viewBox=format!("0 0 {} {}", PIE_SIZE, PIE_SIZE)>
                {wedges}
            </svg>
            <div class="chart__legend">{keys}</div>
        </div>
    }
}
