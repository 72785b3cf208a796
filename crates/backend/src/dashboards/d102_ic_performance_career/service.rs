use contracts::shared::widgets::{DashboardView, TabSection, Tone, Widget};

use super::repository;
use crate::dashboards::context::RenderContext;

pub fn render(ctx: &mut RenderContext<'_>) -> DashboardView {
    let mut view = ctx.view("Performance & Career Dashboard");
    let career = repository::career(ctx.rng());

    view.header = vec![Widget::columns(vec![
        Widget::metric(
            "Goals Achieved",
            format!("{}/{}", career.goals_achieved, career.total_goals),
            "🎯",
        ),
        Widget::metric("Feedback Received", career.feedback_received, "💬"),
        Widget::metric(
            "Performance Score",
            format!("{:.1}", career.performance_score),
            "⭐",
        ),
    ])];

    let progress = career.goal_progress();
    let tone = if progress >= 75.0 {
        Tone::Good
    } else if progress >= 50.0 {
        Tone::Neutral
    } else {
        Tone::Warn
    };
    view.tabs = vec![
        TabSection::new(
            "Goals",
            vec![
                Widget::heading("Goal Progress"),
                Widget::progress(format!("{:.0}% of goals achieved", progress), progress, tone),
            ],
        ),
        TabSection::new(
            "Career",
            vec![Widget::detail(
                "Career Overview",
                &[
                    ("Career Level", career.career_level.to_string()),
                    ("Years in Current Role", career.years_in_role.to_string()),
                ],
            )],
        ),
    ];
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::context::testing::render as render_with;

    #[test]
    fn test_goal_progress_matches_metric() {
        let view = render_with(render, &[], 12);
        let goals = view
            .all_widgets()
            .iter()
            .find_map(|w| match w {
                Widget::Metric { label, value, .. } if label == "Goals Achieved" => {
                    Some(value.clone())
                }
                _ => None,
            })
            .unwrap();
        let (done, total) = goals.split_once('/').unwrap();
        let expected = done.parse::<f64>().unwrap() / total.parse::<f64>().unwrap() * 100.0;
        assert!(view.all_widgets().iter().any(|w| matches!(
            w,
            Widget::Progress { percent, .. } if (*percent - expected).abs() < 1e-9
        )));
    }
}
