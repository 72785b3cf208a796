use contracts::shared::widgets::{DashboardView, Series, Slice, TabSection, Widget};

use super::repository::{self, COMPLIANCE, ENGAGEMENT_TRENDS, QUARTERS, TEAM_ENGAGEMENT};
use crate::dashboards::context::RenderContext;

pub fn render(ctx: &mut RenderContext<'_>) -> DashboardView {
    let mut view = ctx.view("Engagement and Compliance Dashboard");

    let teams: Vec<&str> = TEAM_ENGAGEMENT.iter().map(|(team, _, _)| *team).collect();
    let mut engagement = vec![Widget::heading("Team Engagement Scores")];
    engagement.extend(TEAM_ENGAGEMENT.iter().map(|(team, score, _)| {
        Widget::row(vec![
            vec![Widget::text(*team)],
            vec![Widget::metric("Current Score", format!("{:.0}%", score), "📊")],
        ])
    }));
    engagement.push(Widget::heading("Team Engagement Scores Chart"));
    engagement.push(
        Widget::multi_bar_chart(
            &teams,
            vec![
                Series::new("Current Score", TEAM_ENGAGEMENT.iter().map(|t| t.1).collect()),
                Series::new("Previous Score", TEAM_ENGAGEMENT.iter().map(|t| t.2).collect()),
            ],
            "Team",
            "Score",
        )
        .titled("Team Engagement Scores Comparison"),
    );
    engagement.push(Widget::heading("Engagement Trends Over Time"));
    engagement.push(Widget::line_chart(
        &QUARTERS,
        ENGAGEMENT_TRENDS
            .iter()
            .map(|(name, values)| Series::new(*name, values.to_vec()))
            .collect(),
        "Quarter",
        "Engagement Score",
    ));

    let rates: Vec<String> = COMPLIANCE
        .iter()
        .map(|r| {
            format!(
                "{}: {:.0}% compliant (Change: {:+.1}%)",
                r.category,
                r.current,
                r.change()
            )
        })
        .collect();
    let mut compliance = vec![
        Widget::heading("Compliance Overview"),
        Widget::pie_chart(
            "Compliance Rates by Category",
            COMPLIANCE
                .iter()
                .map(|r| Slice::new(r.category, r.current))
                .collect(),
        ),
        Widget::text("This chart shows the current compliance rates for different categories:"),
        Widget::bullet_list("Compliance Rates", &rates),
        Widget::bullet_list("Chart Interpretation", &repository::INTERPRETATION),
    ];
    if !repository::below_target(&COMPLIANCE).is_empty() {
        compliance.push(Widget::warning(
            "Note: Categories with compliance rates below 95% may need immediate attention.",
        ));
    }
    compliance.push(Widget::heading("Actionable Insights"));
    compliance.push(Widget::bullet_list("Key Insights", &repository::INSIGHTS));

    view.tabs = vec![
        TabSection::new("Employee Engagement", engagement),
        TabSection::new("Compliance Overview", compliance),
    ];
    view
}
