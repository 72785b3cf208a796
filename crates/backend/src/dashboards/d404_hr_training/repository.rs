use contracts::shared::aggregate::Measured;
use contracts::shared::filter::Categorized;
use contracts::shared::time_window::TimeWindow;

use crate::shared::random::RandomSource;

pub const DEPARTMENTS: [&str; 5] = ["Sales", "Marketing", "Engineering", "HR", "Finance"];

pub const COMPLETION_RATE: &str = "completionRate";

pub const AVERAGE_LEARNING_HOURS: &str = "24.5 hours";

/// Completion rate of one department over one reporting period.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingCompletion {
    pub department: &'static str,
    pub period: TimeWindow,
    pub completion_rate: f64,
}

impl Categorized for TrainingCompletion {
    fn category(&self) -> &str {
        self.department
    }
}

impl Measured for TrainingCompletion {
    fn measure(&self, field: &str) -> Option<f64> {
        (field == COMPLETION_RATE).then_some(self.completion_rate)
    }
}

/// One row per (department, period), rates in `[60, 99]`.
pub fn training_completion(rng: &mut dyn RandomSource) -> Vec<TrainingCompletion> {
    let mut rows = Vec::with_capacity(DEPARTMENTS.len() * TimeWindow::ALL.len());
    for department in DEPARTMENTS {
        for period in TimeWindow::ALL {
            rows.push(TrainingCompletion {
                department,
                period,
                completion_rate: rng.int_inclusive(60, 99) as f64,
            });
        }
    }
    rows
}

/// Skill and the share of employees who have it.
pub const SKILLS_INVENTORY: [(&str, f64); 5] = [
    ("Project Management", 75.0),
    ("Data Analysis", 60.0),
    ("Leadership", 55.0),
    ("Communication", 80.0),
    ("Technical Writing", 45.0),
];
