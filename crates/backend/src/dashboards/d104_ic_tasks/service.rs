use contracts::shared::filter::{filter_by_category, CategoryFilter, Sentinel};
use contracts::shared::widgets::{Cell, DashboardView, Slice, TabSection, Tone, Widget};

use super::repository::{self, STATUSES};
use crate::dashboards::context::RenderContext;

const STATUS_SENTINEL: Sentinel = Sentinel::ALL;

fn status_tone(status: &str) -> Tone {
    match status {
        "Completed" => Tone::Good,
        "In Progress" => Tone::Neutral,
        _ => Tone::Warn,
    }
}

pub fn render(ctx: &mut RenderContext<'_>) -> DashboardView {
    let options = STATUS_SENTINEL.with_options(&STATUSES);
    let status = ctx.select("status", "Filter by status", &options, 0);
    let filter = CategoryFilter::parse(&status, STATUS_SENTINEL);

    let mut view = ctx.view("Tasks Dashboard");
    let tasks = repository::tasks(ctx.rng());
    let visible = filter_by_category(&tasks, &filter);

    let mut list = vec![Widget::table(
        &["Task", "Status", "Due Date"],
        visible
            .iter()
            .map(|t| {
                vec![
                    Cell::from(t.name),
                    Cell::toned(t.status, status_tone(t.status)),
                    Cell::from(t.due.format("%Y-%m-%d").to_string()),
                ]
            })
            .collect(),
    )];
    if visible.is_empty() {
        list.push(Widget::info(format!("No tasks with status {}.", status)));
    }

    view.tabs = vec![
        TabSection::new("Task List", list),
        TabSection::new(
            "Status Overview",
            vec![Widget::pie_chart(
                "Task Status Distribution",
                repository::status_counts(&tasks)
                    .into_iter()
                    .map(|(status, count)| Slice::new(status, count as f64))
                    .collect(),
            )],
        ),
    ];
    view
}
