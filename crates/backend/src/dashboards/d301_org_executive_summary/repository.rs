use chrono::{Duration, NaiveDateTime};
use contracts::shared::format::round_to;

use crate::shared::random::RandomSource;

/// Selectable periods: (label, span in days, sampling step in days).
pub const TIME_PERIODS: [(&str, i64, i64); 4] = [
    ("Last Month", 30, 1),
    ("Last 3 Months", 90, 7),
    ("Last 6 Months", 180, 14),
    ("Last Year", 365, 30),
];

#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub date: NaiveDateTime,
    pub turnover: f64,
    pub engagement: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Kpis {
    pub productivity_score: String,
    pub performance_index: f64,
    pub turnover_rate: String,
    pub engagement_score: f64,
    pub staffing_levels: String,
    pub payroll_overview: String,
}

/// Points from `now - span` to `now` every `step` days.
pub fn trend(
    rng: &mut dyn RandomSource,
    now: NaiveDateTime,
    span_days: i64,
    step_days: i64,
) -> Vec<TrendPoint> {
    let start = now - Duration::days(span_days);
    let step = step_days.max(1);
    (0..=span_days / step)
        .map(|i| TrendPoint {
            date: start + Duration::days(i * step),
            turnover: round_to(rng.uniform(1.0, 3.0), 1),
            engagement: round_to(rng.uniform(7.0, 8.5), 1),
        })
        .collect()
}

/// Headline KPIs; turnover and engagement repeat the latest trend point.
pub fn kpis(rng: &mut dyn RandomSource, trend: &[TrendPoint]) -> Kpis {
    let (turnover, engagement) = trend
        .last()
        .map(|p| (p.turnover, p.engagement))
        .unwrap_or_default();
    Kpis {
        productivity_score: format!("{:.0}%", rng.uniform(80.0, 95.0)),
        performance_index: round_to(rng.uniform(7.0, 8.5), 1),
        turnover_rate: format!("{:.1}%", turnover),
        engagement_score: engagement,
        staffing_levels: format!("{:.0}%", rng.uniform(90.0, 100.0)),
        payroll_overview: format!("${:.1}M", rng.uniform(1.0, 1.5)),
    }
}

/// Per-team values of one KPI, as displayed.
pub struct TeamScore {
    pub team: &'static str,
    pub display: &'static str,
    pub value: f64,
}

pub const TEAM_KPIS: [&str; 4] = [
    "Overall Productivity Score",
    "Performance Index",
    "Turnover Rate",
    "Engagement Score",
];

pub fn team_breakdown(kpi: &str) -> Vec<TeamScore> {
    let rows: [(&str, &str, f64); 4] = match kpi {
        "Overall Productivity Score" => [
            ("Engineering", "87", 87.0),
            ("Marketing", "82", 82.0),
            ("Sales", "90", 90.0),
            ("Customer Support", "85", 85.0),
        ],
        "Performance Index" => [
            ("Engineering", "7.9", 7.9),
            ("Marketing", "7.6", 7.6),
            ("Sales", "8.2", 8.2),
            ("Customer Support", "7.7", 7.7),
        ],
        "Turnover Rate" => [
            ("Engineering", "2.1%", 2.1),
            ("Marketing", "2.5%", 2.5),
            ("Sales", "2.8%", 2.8),
            ("Customer Support", "2.3%", 2.3),
        ],
        "Engagement Score" => [
            ("Engineering", "7.8", 7.8),
            ("Marketing", "7.5", 7.5),
            ("Sales", "8.1", 8.1),
            ("Customer Support", "7.9", 7.9),
        ],
        _ => return Vec::new(),
    };
    rows.into_iter()
        .map(|(team, display, value)| TeamScore {
            team,
            display,
            value,
        })
        .collect()
}

pub const HIGH_RISK_AREAS: [&str; 3] = [
    "Cybersecurity: Potential vulnerabilities in remote work infrastructure",
    "Talent Retention: Increased turnover in key departments",
    "Compliance: Upcoming regulatory changes in data privacy",
];

pub const MITIGATION_STRATEGIES: [(&str, [&str; 3]); 3] = [
    (
        "Cybersecurity",
        [
            "Implement multi-factor authentication for all remote access",
            "Conduct regular security audits and penetration testing",
            "Provide ongoing cybersecurity training for all employees",
        ],
    ),
    (
        "Talent Retention",
        [
            "Review and improve compensation packages for key roles",
            "Implement a structured career development program",
            "Conduct regular employee satisfaction surveys and act on feedback",
        ],
    ),
    (
        "Compliance",
        [
            "Form a task force to study upcoming regulatory changes",
            "Update data handling processes and policies",
            "Provide training on new compliance requirements to relevant staff",
        ],
    ),
];

pub const INSIGHTS: [&str; 3] = [
    "Turnover Rate: The current rate is slightly above target. Consider investigating reasons for employee departures and implementing retention strategies.",
    "Engagement Score: While close to the target, there's room for improvement. Consider conducting employee surveys to identify areas for enhancing workplace satisfaction.",
    "Team Performance: Sales team shows the highest overall productivity score. Consider sharing best practices across teams to improve overall company performance.",
];

pub const NEXT_STEPS: [&str; 3] = [
    "Conduct a detailed analysis of factors contributing to turnover in underperforming teams.",
    "Implement targeted engagement initiatives based on team-specific engagement scores.",
    "Review and optimize resource allocation based on productivity scores and staffing levels.",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::context::testing::test_now;
    use crate::shared::random::SeededSource;

    #[test]
    fn test_point_counts_per_period() {
        let mut rng = SeededSource::from_seed(1);
        let counts: Vec<usize> = TIME_PERIODS
            .iter()
            .map(|(_, span, step)| trend(&mut rng, test_now(), *span, *step).len())
            .collect();
        assert_eq!(counts, vec![31, 13, 13, 13]);
    }

    #[test]
    fn test_kpis_follow_latest_point() {
        let mut rng = SeededSource::from_seed(1);
        let points = trend(&mut rng, test_now(), 30, 1);
        let last = points.last().unwrap();
        let kpis = kpis(&mut rng, &points);
        assert_eq!(kpis.engagement_score, last.engagement);
        assert_eq!(kpis.turnover_rate, format!("{:.1}%", last.turnover));
        assert!(kpis.payroll_overview.starts_with('$'));
    }

    #[test]
    fn test_unknown_kpi_has_no_rows() {
        assert_eq!(team_breakdown("Turnover Rate").len(), 4);
        assert!(team_breakdown("Revenue").is_empty());
    }
}
