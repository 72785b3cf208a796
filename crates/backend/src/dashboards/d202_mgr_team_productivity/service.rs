use chrono::{Duration, NaiveDateTime};
use contracts::shared::aggregate::{AggregatedRow, GroupAggregator, Measure};
use contracts::shared::alerts::{evaluate, AlertLevel, AlertReport, Threshold};
use contracts::shared::filter::{filter_by_category, CategoryFilter, Dated, Sentinel};
use contracts::shared::format::format_percent;
use contracts::shared::widgets::{Cell, DashboardView, Widget};

use super::repository::{self, *};
use crate::dashboards::context::RenderContext;

const NUM_TEAMS: usize = 5;
const HISTORY_DAYS: i64 = 365;
const TEAM_SENTINEL: Sentinel = Sentinel::ALL_TEAMS;
const DURATIONS: [(&str, i64); 4] = [
    ("Month", 30),
    ("Quarter", 90),
    ("Half Year", 180),
    ("Year", 365),
];
const ALL_GOOD: &str = "All teams are performing well. No immediate attention required.";

fn thresholds() -> [Threshold; 3] {
    [
        Threshold {
            field: TASK_COMPLETION,
            metric_label: "Task Completion",
            limit: 0.7,
            level: AlertLevel::Warning,
            format_value: |v| format_percent(v, 2),
            message: |team, _| {
                format!(
                    "{}'s task completion rate is below 70%. Consider scheduling a review to address any blockers.",
                    team
                )
            },
        },
        Threshold {
            field: COMMUNICATION_EFFICIENCY,
            metric_label: "Communication Efficiency",
            limit: 0.75,
            level: AlertLevel::Warning,
            format_value: |v| format_percent(v, 2),
            message: |team, v| {
                format!(
                    "{}'s communication efficiency rate is below 75% ({}). Consider implementing team communication improvement strategies.",
                    team,
                    format_percent(v, 2)
                )
            },
        },
        Threshold {
            field: KNOWLEDGE_CONTRIBUTIONS,
            metric_label: "Knowledge Contributions",
            limit: 10.0,
            level: AlertLevel::Info,
            format_value: |v| format!("{:.0}", v),
            message: |team, v| {
                format!(
                    "{} has made fewer than 10 knowledge contributions ({:.0}). Encourage more knowledge sharing within the team.",
                    team, v
                )
            },
        },
    ]
}

fn aggregator() -> GroupAggregator {
    GroupAggregator::new(vec![
        Measure::mean(TASK_COMPLETION),
        Measure::mean(COMMUNICATION_EFFICIENCY),
        Measure::sum(KNOWLEDGE_CONTRIBUTIONS),
        Measure::mean(MEETING_EFFECTIVENESS),
        Measure::mean(MEETING_DURATION),
        Measure::mean(TIME_IN_MEETINGS),
        Measure::mean(ACTION_ITEMS),
        Measure::mean(RESOLUTIONS),
    ])
}

/// Rows of the last `days` days before the latest record, restricted to `team`.
pub fn select_rows(
    rows: &[TeamDailyMetrics],
    team: &CategoryFilter,
    days: i64,
) -> Vec<TeamDailyMetrics> {
    let Some(end) = rows.iter().map(|r| r.date()).max() else {
        return Vec::new();
    };
    let start: NaiveDateTime = end - Duration::days(days);
    filter_by_category(rows, team)
        .into_iter()
        .filter(|r| r.date >= start && r.date <= end)
        .collect()
}

/// Per-team aggregates plus the attention report.
pub fn summarize(
    rows: &[TeamDailyMetrics],
    team: &CategoryFilter,
    days: i64,
) -> (Vec<AggregatedRow>, AlertReport) {
    let selected = select_rows(rows, team, days);
    let aggregated = aggregator().aggregate(&selected);
    let report = evaluate(&aggregated, &thresholds(), ALL_GOOD);
    (aggregated, report)
}

pub fn render(ctx: &mut RenderContext<'_>) -> DashboardView {
    let now = ctx.now();
    let data = repository::generate_team_metrics(ctx.rng(), NUM_TEAMS, HISTORY_DAYS, now);

    let duration_labels: Vec<&str> = DURATIONS.iter().map(|(label, _)| *label).collect();
    let duration = ctx.select("duration", "Select Duration", &duration_labels, 0);
    let team_options = TEAM_SENTINEL.with_options(&repository::team_names(NUM_TEAMS));
    let team = ctx.select("team", "Select Team", &team_options, 0);

    let days = DURATIONS
        .iter()
        .find(|(label, _)| *label == duration)
        .map(|(_, days)| *days)
        .unwrap_or(HISTORY_DAYS);
    let (aggregated, report) = summarize(&data, &CategoryFilter::parse(&team, TEAM_SENTINEL), days);

    let mut view = ctx.view("Team Productivity Dashboard");
    let teams: Vec<&str> = aggregated.iter().map(|r| r.category.as_str()).collect();
    let column = |field: &str| -> Vec<f64> { aggregated.iter().map(|r| r.value(field)).collect() };

    view.header = vec![
        Widget::heading("Team Performance Metrics"),
        Widget::bar_chart(&teams, column(TASK_COMPLETION), "Team", "Completion Rate"),
        Widget::bar_chart(
            &teams,
            column(COMMUNICATION_EFFICIENCY),
            "Team",
            "Efficiency Rate",
        ),
        Widget::bar_chart(
            &teams,
            column(KNOWLEDGE_CONTRIBUTIONS),
            "Team",
            "Number of Contributions",
        ),
        Widget::heading("Meeting Productivity Analysis Table"),
        meeting_table(&aggregated),
        Widget::heading("Other Productivity Metrics Table"),
        other_metrics_table(&aggregated),
    ];

    view.footer.push(Widget::heading("Attention Required"));
    for alert in &report.alerts {
        view.footer.push(Widget::metric(
            &alert.metric_label,
            &alert.metric_value,
            alert.level.icon(),
        ));
        view.footer.push(Widget::alert(alert.level, &alert.message));
    }
    if let Some(message) = &report.all_good {
        view.footer
            .push(Widget::metric("Team Performance", "All Good", "🎉"));
        view.footer.push(Widget::success(message));
    }

    view
}

fn meeting_table(rows: &[AggregatedRow]) -> Widget {
    Widget::table(
        &[
            "Team",
            MEETING_EFFECTIVENESS,
            MEETING_DURATION,
            TIME_IN_MEETINGS,
            ACTION_ITEMS,
            RESOLUTIONS,
        ],
        rows.iter()
            .map(|r| {
                vec![
                    Cell::from(r.category.as_str()),
                    format_percent(r.value(MEETING_EFFECTIVENESS), 2).into(),
                    format!("{:.0} min", r.value(MEETING_DURATION)).into(),
                    format_percent(r.value(TIME_IN_MEETINGS), 2).into(),
                    format!("{:.1}", r.value(ACTION_ITEMS)).into(),
                    format!("{:.1}", r.value(RESOLUTIONS)).into(),
                ]
            })
            .collect(),
    )
}

fn other_metrics_table(rows: &[AggregatedRow]) -> Widget {
    Widget::table(
        &[
            "Team",
            TASK_COMPLETION,
            COMMUNICATION_EFFICIENCY,
            KNOWLEDGE_CONTRIBUTIONS,
        ],
        rows.iter()
            .map(|r| {
                vec![
                    Cell::from(r.category.as_str()),
                    format_percent(r.value(TASK_COMPLETION), 2).into(),
                    format_percent(r.value(COMMUNICATION_EFFICIENCY), 2).into(),
                    format!("{:.0}", r.value(KNOWLEDGE_CONTRIBUTIONS)).into(),
                ]
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::context::testing::{render as render_with, test_now};
    use std::collections::BTreeMap;

    fn day(team: &str, days_ago: i64, completion: f64, contributions: i64) -> TeamDailyMetrics {
        TeamDailyMetrics {
            team: team.to_string(),
            date: test_now() - Duration::days(days_ago),
            task_completion_rate: completion,
            communication_efficiency_rate: 0.9,
            knowledge_contributions: contributions,
            meeting_effectiveness: 0.8,
            average_meeting_duration: 45.0,
            time_in_meetings: 0.2,
            action_items_per_meeting: 2.0,
            resolutions_per_meeting: 1.0,
        }
    }

    #[test]
    fn test_duration_is_anchored_at_latest_record() {
        let rows = vec![day("Team A", 0, 0.9, 20), day("Team B", 100, 0.9, 20)];
        let selected = select_rows(&rows, &CategoryFilter::All, 30);
        assert_eq!(selected, vec![rows[0].clone()]);

        // the anchor is the newest row, not the wall clock
        let old = vec![day("Team A", 400, 0.9, 20), day("Team B", 420, 0.9, 20)];
        assert_eq!(select_rows(&old, &CategoryFilter::All, 30).len(), 2);
    }

    #[test]
    fn test_team_mean_and_knowledge_sum() {
        let rows = vec![
            day("Team A", 0, 0.6, 4),
            day("Team A", 1, 0.7, 5),
            day("Team B", 0, 0.9, 30),
        ];
        let (aggregated, report) = summarize(&rows, &CategoryFilter::All, 30);
        assert_eq!(aggregated.len(), 2);
        assert!((aggregated[0].value(TASK_COMPLETION) - 0.65).abs() < 1e-9);
        assert_eq!(aggregated[0].value(KNOWLEDGE_CONTRIBUTIONS), 9.0);

        // Team A: completion warning + knowledge info
        assert_eq!(report.alerts.len(), 2);
        assert!(report.alerts.iter().all(|a| a.category == "Team A"));
        assert_eq!(report.alerts[1].level, AlertLevel::Info);
        assert_eq!(report.alerts[1].metric_value, "9");
    }

    #[test]
    fn test_single_completion_breach() {
        let mut values = BTreeMap::new();
        values.insert(TASK_COMPLETION.to_string(), 0.65);
        values.insert(COMMUNICATION_EFFICIENCY.to_string(), 0.9);
        values.insert(KNOWLEDGE_CONTRIBUTIONS.to_string(), 40.0);
        let rows = vec![AggregatedRow {
            category: "X".to_string(),
            count: 30,
            values,
        }];

        let report = evaluate(&rows, &thresholds(), ALL_GOOD);
        assert_eq!(report.alerts.len(), 1);
        assert_eq!(report.alerts[0].level, AlertLevel::Warning);
        assert!(report.alerts[0].message.contains("X"));
        assert!(report.alerts[0].message.contains("below 70%"));
        assert!(report.all_good.is_none());
    }

    #[test]
    fn test_healthy_teams_get_all_good() {
        let rows = vec![day("Team A", 0, 0.95, 12), day("Team B", 3, 0.8, 15)];
        let (_, report) = summarize(&rows, &CategoryFilter::All, 30);
        assert!(report.alerts.is_empty());
        assert_eq!(report.all_good.as_deref(), Some(ALL_GOOD));
    }

    #[test]
    fn test_render_single_team() {
        let view = render_with(render, &[("team", "Team 3"), ("duration", "Quarter")], 11);
        let charts: Vec<_> = view
            .header
            .iter()
            .filter_map(|w| match w {
                Widget::BarChart { categories, .. } => Some(categories.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(charts.len(), 3);
        assert!(charts.iter().all(|c| c == &vec!["Team 3".to_string()]));
        assert_eq!(view.footer[0], Widget::heading("Attention Required"));
    }

    #[test]
    fn test_render_all_teams_by_default() {
        let view = render_with(render, &[], 11);
        match &view.header[1] {
            Widget::BarChart { categories, .. } => assert_eq!(categories.len(), 5),
            other => panic!("unexpected widget {:?}", other),
        }
        assert_eq!(view.controls.len(), 2);
    }
}
