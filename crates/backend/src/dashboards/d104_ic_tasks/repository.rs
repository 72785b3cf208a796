use chrono::{Duration, NaiveDate};
use contracts::shared::filter::Categorized;

use crate::shared::random::{choices, RandomSource};

pub const TASK_NAMES: [&str; 5] = ["Project A", "Report B", "Meeting C", "Training D", "Review E"];

pub const STATUSES: [&str; 3] = ["Not Started", "In Progress", "Completed"];

#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub name: &'static str,
    pub status: &'static str,
    pub due: NaiveDate,
}

impl Categorized for Task {
    fn category(&self) -> &str {
        self.status
    }
}

pub fn first_due_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 9, 20).unwrap_or(NaiveDate::MIN)
}

/// Five tasks, random statuses, due on consecutive days.
pub fn tasks(rng: &mut dyn RandomSource) -> Vec<Task> {
    let statuses = choices(rng, &STATUSES, TASK_NAMES.len());
    let start = first_due_date();
    TASK_NAMES
        .iter()
        .zip(statuses)
        .enumerate()
        .map(|(offset, (name, status))| Task {
            name: *name,
            status,
            due: start + Duration::days(offset as i64),
        })
        .collect()
}

/// Task count per status in `STATUSES` order, zero counts omitted.
pub fn status_counts(tasks: &[Task]) -> Vec<(&'static str, usize)> {
    STATUSES
        .iter()
        .map(|status| (*status, tasks.iter().filter(|t| t.status == *status).count()))
        .filter(|(_, count)| *count > 0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::random::testing::FixedSource;

    #[test]
    fn test_tasks_due_consecutively() {
        let mut rng = FixedSource::new(&[0.0, 0.5, 0.9]);
        let tasks = tasks(&mut rng);
        assert_eq!(tasks.len(), 5);
        assert_eq!(tasks[0].due, first_due_date());
        assert_eq!(tasks[4].due, first_due_date() + Duration::days(4));
        assert_eq!(tasks[0].status, "Not Started");
        assert_eq!(tasks[1].status, "In Progress");
        assert_eq!(tasks[2].status, "Completed");
    }

    #[test]
    fn test_status_counts_skip_empty() {
        let mut rng = FixedSource::new(&[0.0]);
        let tasks = tasks(&mut rng);
        assert_eq!(status_counts(&tasks), vec![("Not Started", 5)]);
    }
}
