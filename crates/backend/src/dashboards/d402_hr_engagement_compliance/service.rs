use contracts::shared::widgets::{DashboardView, Slice, TabSection, Tone, Widget};

use super::repository::{self, DEPARTMENT_COMPLIANCE, ENGAGEMENT_SURVEY, INCIDENTS, SURVEY_MAX};
use crate::dashboards::context::RenderContext;
use crate::dashboards::d401_hr_overview::repository::{DEFAULT_PERIOD, TIME_PERIODS};

fn score_tone(score: f64) -> Tone {
    if score > 4.0 {
        Tone::Good
    } else if score > 3.0 {
        Tone::Neutral
    } else if score > 2.0 {
        Tone::Warn
    } else {
        Tone::Bad
    }
}

pub fn render(ctx: &mut RenderContext<'_>) -> DashboardView {
    let labels: Vec<&str> = TIME_PERIODS.iter().map(|(label, _)| *label).collect();
    // Displayed only; the figures below are period-independent.
    ctx.select("time_period", "Select time period", &labels, DEFAULT_PERIOD);
    let mut view = ctx.view("Compliance & Engagement Dashboard");

    let departments: Vec<&str> = DEPARTMENT_COMPLIANCE.iter().map(|d| d.0).collect();
    let compliance = vec![
        Widget::heading("Compliance Training Completion"),
        Widget::row(vec![
            vec![Widget::metric(
                "Overall Completion",
                format!("{:.0}%", repository::OVERALL_TRAINING_COMPLETION),
                "📊",
            )],
            vec![Widget::pie_chart(
                "Department-wise Completion",
                DEPARTMENT_COMPLIANCE
                    .iter()
                    .map(|(name, completion, _)| Slice::new(*name, *completion))
                    .collect(),
            )],
        ]),
        Widget::heading("Policy Acknowledgments"),
        Widget::row(vec![
            vec![Widget::metric(
                "Overall Acknowledgment",
                format!("{:.0}%", repository::OVERALL_ACKNOWLEDGMENT),
                "✅",
            )],
            vec![Widget::bar_chart(
                &departments,
                DEPARTMENT_COMPLIANCE.iter().map(|d| d.2).collect(),
                "Department",
                "Acknowledgment Rate (%)",
            )
            .titled("Department-wise Acknowledgments")],
        ]),
    ];

    let subjects: Vec<&str> = ENGAGEMENT_SURVEY.iter().map(|s| s.subject).collect();
    let bands: Vec<String> = repository::SCORE_BANDS
        .iter()
        .map(|(range, _, reading)| format!("{}: {}", range, reading))
        .collect();
    let mut engagement = vec![
        Widget::heading("Engagement Survey Results"),
        Widget::bar_chart(
            &subjects,
            ENGAGEMENT_SURVEY.iter().map(|s| s.score).collect(),
            "Survey Area",
            "Score (out of 5)",
        ),
        Widget::bullet_list("Score Interpretation", &bands),
        Widget::heading("Detailed Engagement Scores"),
    ];
    for item in ENGAGEMENT_SURVEY.iter() {
        let percent = item.score / SURVEY_MAX * 100.0;
        engagement.push(Widget::progress(
            format!(
                "{}: {} out of 5 ({:.1}%)",
                item.subject, item.score, percent
            ),
            percent,
            score_tone(item.score),
        ));
        engagement.push(Widget::text(format!(
            "{}. {}",
            item.description,
            repository::interpret(item.score)
        )));
    }

    let mut incidents = vec![Widget::heading("Compliance Incidents")];
    incidents.extend(INCIDENTS.iter().map(|incident| {
        Widget::detail(
            format!("Incident {}", incident.id),
            &[
                ("Issue", incident.issue),
                ("Severity", incident.severity),
                ("Status", incident.status),
            ],
        )
    }));
    incidents.push(Widget::warning(format!(
        "There are {} active compliance incidents. Please review and take necessary actions.",
        INCIDENTS.len()
    )));

    view.tabs = vec![
        TabSection::new("Compliance", compliance),
        TabSection::new("Engagement", engagement),
        TabSection::new("Incidents", incidents),
    ];
    view
}
