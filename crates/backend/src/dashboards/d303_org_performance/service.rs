use contracts::shared::widgets::{Cell, DashboardView, Slice, TabSection, Tone, Widget};

use super::repository::{self, KPIS};
use crate::dashboards::context::RenderContext;

pub fn render(ctx: &mut RenderContext<'_>) -> DashboardView {
    let labels: Vec<&str> = KPIS.iter().map(|k| k.label).collect();
    let selected = ctx.select("kpi", "Select KPI", &labels, 0);
    let mut view = ctx.view("Performance Dashboard");

    let Some(kpi) = repository::kpi(&selected) else {
        return view;
    };
    let values = repository::team_values(ctx.rng(), kpi);
    let ratings = repository::rating_distribution(ctx.rng());

    let teams: Vec<&str> = values.iter().map(|v| v.team).collect();
    let numbers: Vec<f64> = values.iter().map(|v| v.value).collect();
    let average = contracts::shared::aggregate::mean(&numbers);
    let above = values.iter().filter(|v| v.value >= kpi.target).count();

    view.header = vec![Widget::columns(vec![
        Widget::metric(
            format!("Average {}", kpi.label),
            format!("{:.1}{}", average, kpi.unit),
            "🎯",
        ),
        Widget::metric(
            "Teams On Target",
            format!("{} of {}", above, values.len()),
            "✅",
        ),
        Widget::metric("Target", format!("{:.1}{}", kpi.target, kpi.unit), "📌"),
    ])];

    let rows = values
        .iter()
        .map(|v| {
            let gap = v.value - kpi.target;
            let tone = if gap >= 0.0 { Tone::Good } else { Tone::Warn };
            vec![
                Cell::from(v.team),
                Cell::toned(format!("{:.1}{}", v.value, kpi.unit), tone),
                Cell::toned(format!("{:+.1}", gap), tone),
            ]
        })
        .collect();

    let breakdown = TabSection::new(
        "KPI Breakdown",
        vec![
            Widget::bar_chart(&teams, numbers, "Team", kpi.label)
                .titled(format!("{} by Team", kpi.label)),
            Widget::table(&["Team", kpi.label, "vs Target"], rows),
        ],
    );

    let mut distribution = vec![Widget::pie_chart(
        "Performance Rating Distribution",
        ratings
            .iter()
            .map(|(rating, count)| Slice::new(*rating, *count as f64))
            .collect(),
    )];
    let below: Vec<&str> = values
        .iter()
        .filter(|v| v.value < kpi.target)
        .map(|v| v.team)
        .collect();
    if below.is_empty() {
        distribution.push(Widget::success(format!(
            "All teams meet the {} target.",
            kpi.label
        )));
    } else {
        distribution.push(Widget::bullet_list(
            format!("Teams Below {} Target", kpi.label),
            &below,
        ));
    }

    view.tabs = vec![breakdown, TabSection::new("Ratings", distribution)];
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::context::testing::render as render_with;

    #[test]
    fn test_chart_follows_selected_kpi() {
        let view = render_with(render, &[("kpi", "Quality Score")], 5);
        assert!(view.tabs[0].widgets.iter().any(|w| matches!(
            w,
            Widget::BarChart { y_label, values, .. }
                if y_label == "Quality Score" && values.iter().all(|v| (3.0..=5.0).contains(v))
        )));
    }

    #[test]
    fn test_table_has_one_row_per_team() {
        let view = render_with(render, &[], 5);
        let rows = view.tabs[0]
            .widgets
            .iter()
            .find_map(|w| match w {
                Widget::Table { rows, .. } => Some(rows.len()),
                _ => None,
            })
            .unwrap();
        assert_eq!(rows, repository::TEAMS.len());
    }
}
