use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Relative date range used by the recruitment, training and demographics filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeWindow {
    #[default]
    #[serde(rename = "Last 30 days")]
    Last30Days,
    #[serde(rename = "Last 90 days")]
    Last90Days,
    #[serde(rename = "Last 6 months")]
    Last6Months,
    #[serde(rename = "Last year")]
    LastYear,
    #[serde(rename = "All time")]
    AllTime,
}

impl TimeWindow {
    pub const ALL: [TimeWindow; 5] = [
        TimeWindow::Last30Days,
        TimeWindow::Last90Days,
        TimeWindow::Last6Months,
        TimeWindow::LastYear,
        TimeWindow::AllTime,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TimeWindow::Last30Days => "Last 30 days",
            TimeWindow::Last90Days => "Last 90 days",
            TimeWindow::Last6Months => "Last 6 months",
            TimeWindow::LastYear => "Last year",
            TimeWindow::AllTime => "All time",
        }
    }

    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|w| w.label()).collect()
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|w| w.label() == label)
    }

    /// Window length in days, `None` for "All time".
    pub fn days(self) -> Option<i64> {
        match self {
            TimeWindow::Last30Days => Some(30),
            TimeWindow::Last90Days => Some(90),
            TimeWindow::Last6Months => Some(180),
            TimeWindow::LastYear => Some(365),
            TimeWindow::AllTime => None,
        }
    }

    /// Lower bound of the window ending at `now`.
    pub fn start(self, now: NaiveDateTime) -> Option<NaiveDateTime> {
        self.days().map(|d| now - Duration::days(d))
    }

    /// True when `date` lies in `[now - window, now]`. "All time" accepts every date.
    pub fn contains(self, date: NaiveDateTime, now: NaiveDateTime) -> bool {
        match self.start(now) {
            Some(start) => date >= start && date <= now,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_boundaries() {
        let now = at(2024, 9, 30);
        assert!(TimeWindow::Last30Days.contains(at(2024, 8, 31), now));
        assert!(!TimeWindow::Last30Days.contains(at(2024, 8, 30), now));
        assert!(TimeWindow::Last90Days.contains(at(2024, 7, 2), now));
        assert!(TimeWindow::Last6Months.contains(at(2024, 4, 3), now));
        assert!(!TimeWindow::Last6Months.contains(at(2024, 4, 2), now));
        assert!(TimeWindow::LastYear.contains(at(2023, 10, 1), now));
    }

    #[test]
    fn test_future_dates_are_outside_bounded_windows() {
        let now = at(2024, 9, 30);
        assert!(!TimeWindow::Last30Days.contains(at(2024, 10, 2), now));
        assert!(TimeWindow::AllTime.contains(at(2030, 1, 1), now));
        assert!(TimeWindow::AllTime.contains(at(1990, 1, 1), now));
    }

    #[test]
    fn test_labels() {
        assert_eq!(TimeWindow::from_label("Last 6 months"), Some(TimeWindow::Last6Months));
        assert_eq!(TimeWindow::from_label("last 6 months"), None);
        assert_eq!(TimeWindow::labels().len(), 5);
        assert_eq!(TimeWindow::default(), TimeWindow::Last30Days);
    }
}
