//! Fixed-threshold checks over aggregated rows.

use serde::{Deserialize, Serialize};

use super::aggregate::AggregatedRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl AlertLevel {
    pub fn icon(self) -> &'static str {
        match self {
            AlertLevel::Success => "🎉",
            AlertLevel::Info => "ℹ️",
            AlertLevel::Warning => "⚠️",
            AlertLevel::Error => "⛔",
        }
    }
}

/// A hard-coded lower bound on one aggregated field. A row breaches it when `value < limit`.
pub struct Threshold {
    pub field: &'static str,
    /// Metric tile label suffix, shown as "{category} {metric_label}"
    pub metric_label: &'static str,
    pub limit: f64,
    pub level: AlertLevel,
    pub format_value: fn(f64) -> String,
    pub message: fn(&str, f64) -> String,
}

/// One breach: the metric tile and the message shown under it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub category: String,
    pub level: AlertLevel,
    pub metric_label: String,
    pub metric_value: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertReport {
    pub alerts: Vec<Alert>,
    pub attention_required: bool,
    /// Confirmation shown when nothing breached
    pub all_good: Option<String>,
}

/// Check every row against every threshold, in row order then threshold order.
pub fn evaluate(rows: &[AggregatedRow], thresholds: &[Threshold], all_good: &str) -> AlertReport {
    let mut alerts = Vec::new();
    for row in rows {
        for threshold in thresholds {
            let value = row.value(threshold.field);
            if value < threshold.limit {
                alerts.push(Alert {
                    category: row.category.clone(),
                    level: threshold.level,
                    metric_label: format!("{} {}", row.category, threshold.metric_label),
                    metric_value: (threshold.format_value)(value),
                    message: (threshold.message)(&row.category, value),
                });
            }
        }
    }

    let attention_required = !alerts.is_empty();
    AlertReport {
        alerts,
        attention_required,
        all_good: if attention_required {
            None
        } else {
            Some(all_good.to_string())
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::format::format_percent;
    use std::collections::BTreeMap;

    fn row(category: &str, completion: f64, contributions: f64) -> AggregatedRow {
        let mut values = BTreeMap::new();
        values.insert("completion".to_string(), completion);
        values.insert("contributions".to_string(), contributions);
        AggregatedRow {
            category: category.to_string(),
            count: 1,
            values,
        }
    }

    fn thresholds() -> Vec<Threshold> {
        vec![
            Threshold {
                field: "completion",
                metric_label: "Task Completion",
                limit: 0.7,
                level: AlertLevel::Warning,
                format_value: |v| format_percent(v, 2),
                message: |team, _| format!("{}'s task completion rate is below 70%.", team),
            },
            Threshold {
                field: "contributions",
                metric_label: "Knowledge Contributions",
                limit: 10.0,
                level: AlertLevel::Info,
                format_value: |v| format!("{:.0}", v),
                message: |team, v| format!("{} has made fewer than 10 contributions ({}).", team, v),
            },
        ]
    }

    #[test]
    fn test_single_breach_produces_one_warning() {
        let rows = vec![row("X", 0.65, 50.0)];
        let report = evaluate(&rows, &thresholds(), "All good");

        assert_eq!(report.alerts.len(), 1);
        let alert = &report.alerts[0];
        assert_eq!(alert.level, AlertLevel::Warning);
        assert!(alert.message.contains("X"));
        assert!(alert.message.contains("below 70%"));
        assert_eq!(alert.metric_label, "X Task Completion");
        assert_eq!(alert.metric_value, "65.00%");
        assert!(report.attention_required);
        assert_eq!(report.all_good, None);
    }

    #[test]
    fn test_no_breach_shows_confirmation() {
        let rows = vec![row("A", 0.9, 12.0), row("B", 0.7, 10.0)];
        let report = evaluate(&rows, &thresholds(), "All good");
        assert!(report.alerts.is_empty());
        assert!(!report.attention_required);
        assert_eq!(report.all_good.as_deref(), Some("All good"));
    }

    #[test]
    fn test_breaches_ordered_by_row_then_threshold() {
        let rows = vec![row("A", 0.5, 3.0), row("B", 0.95, 4.0)];
        let report = evaluate(&rows, &thresholds(), "All good");
        let levels: Vec<_> = report.alerts.iter().map(|a| (a.category.as_str(), a.level)).collect();
        assert_eq!(
            levels,
            vec![
                ("A", AlertLevel::Warning),
                ("A", AlertLevel::Info),
                ("B", AlertLevel::Info)
            ]
        );
    }
}
