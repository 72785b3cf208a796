//! Category + time-window filtering over generated record collections.
//!
//! Filtering never touches the input slice: every function returns a new
//! `Vec` with clones of the matching records.

use chrono::NaiveDateTime;

use super::time_window::TimeWindow;

/// Record carrying a categorical dimension (department, team, status...).
pub trait Categorized {
    fn category(&self) -> &str;
}

/// Record carrying the timestamp used by time-window filtering.
pub trait Dated {
    fn date(&self) -> NaiveDateTime;
}

/// Selector value meaning "do not filter by category".
///
/// Each dashboard owns its own sentinel; there is no shared "All" contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentinel(pub &'static str);

impl Sentinel {
    pub const ALL: Sentinel = Sentinel("All");
    pub const ALL_DEPARTMENTS: Sentinel = Sentinel("All Departments");
    pub const ALL_TEAMS: Sentinel = Sentinel("All Teams");
    pub const ALL_EMPLOYEES: Sentinel = Sentinel("All Employees");

    pub fn label(self) -> &'static str {
        self.0
    }

    /// Selector options: the sentinel first, then the categories in the given order.
    pub fn with_options<S: AsRef<str>>(self, categories: &[S]) -> Vec<String> {
        std::iter::once(self.0.to_string())
            .chain(categories.iter().map(|c| c.as_ref().to_string()))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn parse(value: &str, sentinel: Sentinel) -> Self {
        if value == sentinel.0 {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(value) => value == category,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }
}

/// The pair of user selections applied to one dashboard render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection {
    pub category: CategoryFilter,
    pub window: TimeWindow,
}

impl FilterSelection {
    pub fn new(category: CategoryFilter, window: TimeWindow) -> Self {
        Self { category, window }
    }

    /// Build a selection from raw selector values. Unknown window labels fall back to the default window.
    pub fn parse(category: &str, window: &str, sentinel: Sentinel) -> Self {
        Self {
            category: CategoryFilter::parse(category, sentinel),
            window: TimeWindow::from_label(window).unwrap_or_default(),
        }
    }

    pub fn matches<R: Categorized + Dated>(&self, record: &R, now: NaiveDateTime) -> bool {
        self.category.matches(record.category()) && self.window.contains(record.date(), now)
    }
}

pub fn filter_by_category<R: Categorized + Clone>(records: &[R], filter: &CategoryFilter) -> Vec<R> {
    records
        .iter()
        .filter(|r| filter.matches(r.category()))
        .cloned()
        .collect()
}

pub fn filter_by_window<R: Dated + Clone>(
    records: &[R],
    window: TimeWindow,
    now: NaiveDateTime,
) -> Vec<R> {
    records
        .iter()
        .filter(|r| window.contains(r.date(), now))
        .cloned()
        .collect()
}

/// Apply both the category and the time-window selection.
pub fn apply_selection<R: Categorized + Dated + Clone>(
    records: &[R],
    selection: &FilterSelection,
    now: NaiveDateTime,
) -> Vec<R> {
    records
        .iter()
        .filter(|r| selection.matches(*r, now))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        team: String,
        date: NaiveDateTime,
    }

    impl Categorized for Row {
        fn category(&self) -> &str {
            &self.team
        }
    }

    impl Dated for Row {
        fn date(&self) -> NaiveDateTime {
            self.date
        }
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 9, 20)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    fn row(team: &str, days_ago: i64) -> Row {
        Row {
            team: team.to_string(),
            date: now() - Duration::days(days_ago),
        }
    }

    fn sample() -> Vec<Row> {
        vec![
            row("A", 10),
            row("B", 100),
            row("A", 200),
            row("C", 5),
            row("B", 400),
        ]
    }

    #[test]
    fn test_sentinel_with_last_30_days_keeps_only_recent_rows() {
        let rows = vec![row("A", 10), row("B", 100)];
        let selection = FilterSelection::parse("All Teams", "Last 30 days", Sentinel::ALL_TEAMS);
        let result = apply_selection(&rows, &selection, now());
        assert_eq!(result, vec![row("A", 10)]);
    }

    #[test]
    fn test_sentinel_count_equals_window_count() {
        let rows = sample();
        for window in TimeWindow::ALL {
            let selection = FilterSelection::new(CategoryFilter::All, window);
            let by_selection = apply_selection(&rows, &selection, now());
            let by_window = filter_by_window(&rows, window, now());
            assert_eq!(by_selection.len(), by_window.len(), "window {:?}", window);
        }
    }

    #[test]
    fn test_specific_category_only_returns_that_category() {
        let rows = sample();
        let selection = FilterSelection::parse("B", "All time", Sentinel::ALL_DEPARTMENTS);
        let result = apply_selection(&rows, &selection, now());
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|r| r.team == "B"));
    }

    #[test]
    fn test_all_time_excludes_nothing_by_date() {
        let rows = sample();
        let result = filter_by_window(&rows, TimeWindow::AllTime, now());
        assert_eq!(result, rows);
    }

    #[test]
    fn test_source_is_not_mutated() {
        let rows = sample();
        let before = rows.clone();
        let _ = filter_by_category(&rows, &CategoryFilter::Only("A".to_string()));
        let _ = apply_selection(
            &rows,
            &FilterSelection::new(CategoryFilter::All, TimeWindow::Last30Days),
            now(),
        );
        assert_eq!(rows, before);
    }

    #[test]
    fn test_sentinels_are_per_dashboard() {
        // "All" is a real category value for a dashboard whose sentinel is "All Teams"
        assert_eq!(
            CategoryFilter::parse("All", Sentinel::ALL_TEAMS),
            CategoryFilter::Only("All".to_string())
        );
        assert!(CategoryFilter::parse("All", Sentinel::ALL).is_all());
        assert_eq!(
            Sentinel::ALL_DEPARTMENTS.with_options(&["HR", "IT"]),
            vec!["All Departments", "HR", "IT"]
        );
    }

    #[test]
    fn test_unknown_window_label_uses_default() {
        let selection = FilterSelection::parse("All", "Last decade", Sentinel::ALL);
        assert_eq!(selection.window, TimeWindow::Last30Days);
    }
}
