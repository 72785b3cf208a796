use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use contracts::shared::filter::{Categorized, Dated};

pub const DEPARTMENTS: [&str; 5] = ["Engineering", "Sales", "Marketing", "HR", "Finance"];

pub const AVERAGE_COST_PER_HIRE: f64 = 4500.0;

/// One labelled figure owned by a department and dated for window filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct RecruitmentRecord {
    pub label: &'static str,
    pub value: f64,
    pub department: &'static str,
    pub date: NaiveDate,
}

impl Categorized for RecruitmentRecord {
    fn category(&self) -> &str {
        self.department
    }
}

impl Dated for RecruitmentRecord {
    fn date(&self) -> NaiveDateTime {
        self.date.and_time(NaiveTime::MIN)
    }
}

fn records(rows: &[(&'static str, f64, &'static str, (i32, u32, u32))]) -> Vec<RecruitmentRecord> {
    rows.iter()
        .filter_map(|(label, value, department, (y, m, d))| {
            Some(RecruitmentRecord {
                label: *label,
                value: *value,
                department: *department,
                date: NaiveDate::from_ymd_opt(*y, *m, *d)?,
            })
        })
        .collect()
}

/// Open headcount, labelled by department.
pub fn open_positions() -> Vec<RecruitmentRecord> {
    records(&[
        ("Engineering", 5.0, "Engineering", (2024, 9, 1)),
        ("Sales", 3.0, "Sales", (2024, 9, 5)),
        ("Marketing", 2.0, "Marketing", (2024, 8, 15)),
        ("HR", 1.0, "HR", (2024, 7, 20)),
        ("Finance", 2.0, "Finance", (2024, 8, 30)),
    ])
}

/// Days to fill, labelled by position.
pub fn time_to_fill() -> Vec<RecruitmentRecord> {
    records(&[
        ("Software Engineer", 45.0, "Engineering", (2024, 9, 10)),
        ("Sales Manager", 30.0, "Sales", (2024, 8, 25)),
        ("Marketing Specialist", 25.0, "Marketing", (2024, 9, 5)),
        ("HR Coordinator", 20.0, "HR", (2024, 7, 30)),
        ("Financial Analyst", 35.0, "Finance", (2024, 8, 15)),
    ])
}

/// Candidates per pipeline stage.
pub fn candidate_pipeline() -> Vec<RecruitmentRecord> {
    records(&[
        ("Applied", 200.0, "Engineering", (2024, 9, 15)),
        ("Screening", 100.0, "Sales", (2024, 9, 12)),
        ("Interview", 50.0, "Marketing", (2024, 9, 10)),
        ("Offer", 10.0, "HR", (2024, 9, 8)),
        ("Hired", 5.0, "Finance", (2024, 9, 5)),
    ])
}

/// Share of hires per sourcing channel.
pub fn source_effectiveness() -> Vec<RecruitmentRecord> {
    records(&[
        ("Job Boards", 40.0, "Engineering", (2024, 9, 1)),
        ("Referrals", 30.0, "Sales", (2024, 8, 20)),
        ("Company Website", 20.0, "Marketing", (2024, 9, 10)),
        ("LinkedIn", 10.0, "HR", (2024, 7, 15)),
    ])
}

#[derive(Debug, Clone, PartialEq)]
pub struct Interview {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub candidate: &'static str,
    pub position: &'static str,
    pub department: &'static str,
}

impl Interview {
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }
}

impl Categorized for Interview {
    fn category(&self) -> &str {
        self.department
    }
}

impl Dated for Interview {
    fn date(&self) -> NaiveDateTime {
        self.date.and_time(NaiveTime::MIN)
    }
}

/// Interviews over the next few days, relative to `today`. Not sorted.
pub fn upcoming_interviews(today: NaiveDate) -> Vec<Interview> {
    [
        (1, "03:30 PM", "Chris Lee", "Software Engineer", "Engineering"),
        (0, "11:30 AM", "Jane Smith", "Marketing Specialist", "Marketing"),
        (0, "09:00 AM", "John Doe", "Software Engineer", "Engineering"),
        (3, "01:30 PM", "David Wilson", "Financial Analyst", "Finance"),
        (0, "02:00 PM", "Mike Johnson", "Sales Manager", "Sales"),
        (1, "10:00 AM", "Sarah Brown", "HR Coordinator", "HR"),
        (2, "11:00 AM", "Emily Chen", "Data Analyst", "Engineering"),
    ]
    .into_iter()
    .filter_map(|(offset, time, candidate, position, department)| {
        Some(Interview {
            date: today + Duration::days(offset),
            time: NaiveTime::parse_from_str(time, "%I:%M %p").ok()?,
            candidate,
            position,
            department,
        })
    })
    .collect()
}

pub const LONG_OPEN_ALERT: &str = "2 positions have been open for more than 60 days. Consider revisiting the job requirements or expanding your search channels.";

pub const ACTION_ITEMS: [&str; 4] = [
    "Review job descriptions for long-open positions",
    "Expand search to new job boards or platforms",
    "Consider internal candidates or employee referrals",
    "Evaluate compensation package competitiveness",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_complete() {
        assert_eq!(open_positions().len(), 5);
        assert_eq!(time_to_fill().len(), 5);
        assert_eq!(candidate_pipeline().len(), 5);
        assert_eq!(source_effectiveness().len(), 4);
    }

    #[test]
    fn test_interview_times_parse() {
        let today = NaiveDate::from_ymd_opt(2024, 9, 20).unwrap();
        let interviews = upcoming_interviews(today);
        assert_eq!(interviews.len(), 7);
        let john = interviews.iter().find(|i| i.candidate == "John Doe").unwrap();
        assert_eq!(john.time, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        let chris = interviews.iter().find(|i| i.candidate == "Chris Lee").unwrap();
        assert_eq!(chris.time, NaiveTime::from_hms_opt(15, 30, 0).unwrap());
        assert_eq!(chris.date, today + Duration::days(1));
    }
}
