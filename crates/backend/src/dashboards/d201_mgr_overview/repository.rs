use chrono::NaiveDate;

pub struct Allocation {
    pub project: &'static str,
    pub percent: f64,
}

pub struct CompensationLine {
    pub name: &'static str,
    pub current: f64,
    pub budgeted: f64,
}

pub struct LearningOpportunity {
    pub name: &'static str,
    pub date: NaiveDate,
}

pub struct Recognition {
    pub employee: &'static str,
    pub award: &'static str,
}

pub struct CheckIn {
    pub icon: &'static str,
    pub title: &'static str,
    pub time: &'static str,
}

pub fn resource_allocation() -> Vec<Allocation> {
    vec![
        Allocation {
            project: "Project X",
            percent: 80.0,
        },
        Allocation {
            project: "Project Y",
            percent: 20.0,
        },
    ]
}

pub fn compensation() -> Vec<CompensationLine> {
    vec![
        CompensationLine {
            name: "Salaries",
            current: 850_000.0,
            budgeted: 900_000.0,
        },
        CompensationLine {
            name: "Bonuses",
            current: 50_000.0,
            budgeted: 100_000.0,
        },
    ]
}

pub fn learning_opportunities() -> Vec<LearningOpportunity> {
    [
        ("AI Conference", (2024, 10, 15)),
        ("Leadership Workshop", (2024, 11, 1)),
        ("Advanced React Course", (2024, 11, 15)),
    ]
    .into_iter()
    .filter_map(|(name, (y, m, d))| {
        NaiveDate::from_ymd_opt(y, m, d).map(|date| LearningOpportunity { name, date })
    })
    .collect()
}

pub fn recognitions() -> Vec<Recognition> {
    vec![
        Recognition {
            employee: "Alice Johnson",
            award: "Employee of the Month",
        },
        Recognition {
            employee: "Bob Smith",
            award: "Innovation Award",
        },
    ]
}

/// Check-ins are the same for every day.
pub fn check_ins(_day: NaiveDate) -> Vec<CheckIn> {
    vec![
        CheckIn {
            icon: "👥",
            title: "Team Meeting",
            time: "10:00 AM",
        },
        CheckIn {
            icon: "👤",
            title: "1-on-1 with Alice",
            time: "2:00 PM",
        },
    ]
}
