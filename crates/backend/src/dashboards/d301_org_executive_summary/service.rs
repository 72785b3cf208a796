use contracts::shared::widgets::{Cell, DashboardView, Series, TabSection, Widget};

use super::repository::{self, TEAM_KPIS, TIME_PERIODS};
use crate::dashboards::context::RenderContext;

pub fn render(ctx: &mut RenderContext<'_>) -> DashboardView {
    let period_labels: Vec<&str> = TIME_PERIODS.iter().map(|(label, _, _)| *label).collect();
    let period = ctx.select("time_period", "Select time period", &period_labels, 0);
    let kpi = ctx.select("kpi", "Select KPI", &TEAM_KPIS, 0);

    let (span, step) = TIME_PERIODS
        .iter()
        .find(|(label, _, _)| *label == period)
        .map(|(_, span, step)| (*span, *step))
        .unwrap_or((30, 1));
    let now = ctx.now();
    let mut view = ctx.view("Executive Summary Dashboard");
    let rng = ctx.rng();

    let points = repository::trend(rng, now, span, step);
    let kpis = repository::kpis(rng, &points);

    view.header = vec![
        Widget::heading("Key Performance Indicators"),
        Widget::row(vec![
            vec![
                Widget::metric("Overall Productivity Score", &kpis.productivity_score, "📈"),
                Widget::metric("Turnover Rate", &kpis.turnover_rate, "🔄"),
            ],
            vec![
                Widget::metric("Performance Index", kpis.performance_index, "🎯"),
                Widget::metric("Engagement Score", kpis.engagement_score, "😊"),
            ],
            vec![
                Widget::metric("Staffing Levels", &kpis.staffing_levels, "👥"),
                Widget::metric("Payroll Overview", &kpis.payroll_overview, "💰"),
            ],
        ]),
    ];

    let dates: Vec<String> = points
        .iter()
        .map(|p| p.date.format("%Y-%m-%d").to_string())
        .collect();
    let trends = TabSection::new(
        "Trends",
        vec![
            Widget::heading("Trend Analysis"),
            Widget::row(vec![
                vec![
                    Widget::heading("Turnover Rate Trend"),
                    Widget::line_chart(
                        &dates,
                        vec![Series::new(
                            "Turnover",
                            points.iter().map(|p| p.turnover).collect(),
                        )],
                        "Date",
                        "Turnover Rate (%)",
                    ),
                    Widget::bullet_list(
                        "Turnover Rate Interpretation",
                        &[
                            "The Turnover Rate graph shows the percentage of employees leaving the company over time.",
                            "A lower turnover rate is generally better, indicating higher employee retention.",
                        ],
                    ),
                ],
                vec![
                    Widget::heading("Engagement Score Trend"),
                    Widget::line_chart(
                        &dates,
                        vec![Series::new(
                            "Engagement",
                            points.iter().map(|p| p.engagement).collect(),
                        )],
                        "Date",
                        "Engagement Score",
                    ),
                    Widget::bullet_list(
                        "Engagement Score Interpretation",
                        &[
                            "The Engagement Score graph represents employee satisfaction and involvement on a scale of 1-10.",
                            "A higher engagement score indicates more satisfied and productive employees.",
                        ],
                    ),
                ],
            ]),
        ],
    );

    let scores = repository::team_breakdown(&kpi);
    let teams: Vec<&str> = scores.iter().map(|s| s.team).collect();
    let breakdown = TabSection::new(
        "Team Breakdown",
        vec![
            Widget::heading("Team Breakdown"),
            Widget::bar_chart(&teams, scores.iter().map(|s| s.value).collect(), "Team", &kpi),
            Widget::table(
                &["team", "score"],
                scores
                    .iter()
                    .map(|s| vec![Cell::from(s.team), Cell::from(s.display)])
                    .collect(),
            ),
        ],
    );

    let mut risk = vec![
        Widget::heading("Risk Assessment"),
        Widget::heading("High Risk Areas"),
    ];
    risk.extend(repository::HIGH_RISK_AREAS.iter().map(|a| Widget::warning(*a)));
    risk.push(Widget::heading("Risk Mitigation Strategies"));
    risk.extend(
        repository::MITIGATION_STRATEGIES
            .iter()
            .map(|(area, steps)| {
                Widget::bullet_list(format!("Mitigation Strategies for {}", area), steps)
            }),
    );

    view.tabs = vec![
        trends,
        breakdown,
        TabSection::new("Risk Assessment", risk),
    ];

    view.footer = vec![
        Widget::heading("Insights and Recommendations"),
        Widget::bullet_list("Key Insights", &repository::INSIGHTS),
        Widget::bullet_list("Next Steps", &repository::NEXT_STEPS),
    ];
    view
}
