use contracts::shared::format::format_percent;
use contracts::shared::widgets::{DashboardView, TabSection, Widget};

use super::repository;
use crate::dashboards::context::RenderContext;

pub fn render(ctx: &mut RenderContext<'_>) -> DashboardView {
    let mut view = ctx.view("Productivity Dashboard");
    let snapshot = repository::productivity(ctx.rng());
    let rates = snapshot.rates();

    let icons = ["✅", "💬", "🧭", "📚", "🛠️"];
    let mut metrics: Vec<Widget> = rates
        .iter()
        .zip(icons)
        .map(|((label, value), icon)| Widget::metric(*label, format_percent(*value, 0), icon))
        .collect();
    metrics.insert(
        2,
        Widget::metric(
            "Knowledge Contribution",
            snapshot.knowledge_contribution,
            "💡",
        ),
    );

    let (left, right) = metrics.split_at(3);
    view.header = vec![Widget::row(vec![left.to_vec(), right.to_vec()])];

    let labels: Vec<&str> = rates.iter().map(|(label, _)| *label).collect();
    view.tabs = vec![TabSection::new(
        "Productivity Metrics",
        vec![Widget::bar_chart(
            &labels,
            rates.iter().map(|(_, value)| *value).collect(),
            "Metric",
            "Score",
        )
        .titled("Productivity Metrics")],
    )];
    view
}
