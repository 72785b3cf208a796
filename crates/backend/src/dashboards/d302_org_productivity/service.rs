use contracts::shared::widgets::{Cell, DashboardView, Series, TabSection, Tone, Widget};

use super::repository::{self, DEPARTMENT_PRODUCTIVITY};
use crate::dashboards::context::RenderContext;
use crate::dashboards::d304_org_projects_portfolio::repository::{projects, ProjectStatus};

fn score_tone(score: f64) -> Tone {
    if score >= 85.0 {
        Tone::Good
    } else if score >= 80.0 {
        Tone::Neutral
    } else {
        Tone::Warn
    }
}

pub fn render(ctx: &mut RenderContext<'_>) -> DashboardView {
    let departments: Vec<&str> = DEPARTMENT_PRODUCTIVITY.iter().map(|(d, _)| *d).collect();
    let department = ctx.select("department", "Select Department", &departments, 0);
    let bounds = repository::trend_bounds();
    let (start, end) = ctx.date_range("range", "Select Date Range", bounds, bounds);

    let mut view = ctx.view("Productivity & Projects Dashboard");
    let trends = repository::department_trends(ctx.rng());

    let projects = projects();
    let total = projects.len();
    let on_track = projects
        .iter()
        .filter(|p| p.status == ProjectStatus::OnTrack)
        .count();
    let on_track_pct = if total == 0 {
        0.0
    } else {
        on_track as f64 / total as f64 * 100.0
    };
    let completions: Vec<f64> = projects.iter().map(|p| p.completion).collect();
    let average_completion = contracts::shared::aggregate::mean(&completions);

    view.header = vec![Widget::row(vec![
        vec![Widget::metric("Total Projects", total, "📁")],
        vec![Widget::metric(
            "On-Track Projects",
            format!("{} ({:.0}%)", on_track, on_track_pct),
            "✅",
        )],
        vec![Widget::metric(
            "Average Completion",
            format!("{:.1}%", average_completion),
            "📊",
        )],
    ])];

    let overview = TabSection::new(
        "Overview",
        vec![
            Widget::heading("Departmental Productivity"),
            Widget::bar_chart(
                &departments,
                DEPARTMENT_PRODUCTIVITY.iter().map(|(_, s)| *s).collect(),
                "Department",
                "Productivity Score",
            ),
            Widget::table(
                &departments,
                vec![DEPARTMENT_PRODUCTIVITY
                    .iter()
                    .map(|(_, s)| Cell::toned(format!("{:.0}", s), score_tone(*s)))
                    .collect()],
            ),
        ],
    );

    let mut trend_widgets = vec![Widget::heading("Productivity Trends")];
    let selected: Vec<_> = trends
        .iter()
        .find(|(name, _)| *name == department)
        .map(|(_, scores)| {
            scores
                .iter()
                .filter(|s| s.date >= start && s.date <= end)
                .cloned()
                .collect()
        })
        .unwrap_or_default();
    match repository::trend_stats(&selected) {
        Some(stats) => {
            let dates: Vec<String> = selected
                .iter()
                .map(|s| s.date.format("%Y-%m-%d").to_string())
                .collect();
            trend_widgets.push(
                Widget::line_chart(
                    &dates,
                    vec![Series::new(
                        department.as_str(),
                        selected.iter().map(|s| s.score).collect(),
                    )],
                    "Date",
                    "Productivity Score",
                )
                .titled(format!("{} Productivity Trend", department)),
            );
            trend_widgets.push(Widget::row(vec![
                vec![Widget::metric("Average Productivity", format!("{:.2}", stats.average), "📈")],
                vec![Widget::metric("Max Productivity", format!("{:.2}", stats.max), "⬆️")],
                vec![Widget::metric("Min Productivity", format!("{:.2}", stats.min), "⬇️")],
            ]));
        }
        None => trend_widgets.push(Widget::info("No data for the selected date range.")),
    }

    view.tabs = vec![overview, TabSection::new("Productivity Trends", trend_widgets)];
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::context::testing::render as render_with;

    fn trend_len(view: &DashboardView) -> Option<usize> {
        view.all_widgets().iter().find_map(|w| match w {
            Widget::LineChart { x_labels, .. } => Some(x_labels.len()),
            _ => None,
        })
    }

    #[test]
    fn test_project_summary_metrics() {
        let view = render_with(render, &[], 1);
        let values: Vec<String> = view
            .all_widgets()
            .iter()
            .filter_map(|w| match w {
                Widget::Metric { value, .. } => Some(value.clone()),
                _ => None,
            })
            .take(3)
            .collect();
        assert_eq!(values, vec!["5", "3 (60%)", "59.0%"]);
    }

    #[test]
    fn test_date_range_limits_trend() {
        assert_eq!(trend_len(&render_with(render, &[], 1)), Some(365));
        let view = render_with(
            render,
            &[("range_start", "2023-03-01"), ("range_end", "2023-03-10")],
            1,
        );
        assert_eq!(trend_len(&view), Some(10));
    }

    #[test]
    fn test_department_selection_titles_trend() {
        let view = render_with(render, &[("department", "Sales")], 1);
        assert!(view.all_widgets().iter().any(|w| matches!(
            w,
            Widget::LineChart { title: Some(t), .. } if t == "Sales Productivity Trend"
        )));
    }
}
