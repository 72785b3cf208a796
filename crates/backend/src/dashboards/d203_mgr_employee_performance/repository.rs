use chrono::{Duration, NaiveDate};
use contracts::shared::format::round_to;

use crate::shared::random::{sample, RandomSource};

pub const EMPLOYEES: [(&str, &str); 5] = [
    ("John Doe", "Senior Developer"),
    ("Jane Smith", "Project Manager"),
    ("Bob Johnson", "UX Designer"),
    ("Alice Brown", "Data Analyst"),
    ("Charlie Davis", "Quality Assurance Specialist"),
];

pub const RACI_ROLES: [&str; 5] = ["Responsible", "Accountable", "Consulted", "Informed", "None"];

const COURSES: [&str; 5] = [
    "Python Advanced",
    "Machine Learning Basics",
    "Agile Methodologies",
    "Cloud Computing",
    "Data Visualization",
];

const CERTIFICATIONS: [&str; 4] = [
    "AWS Certified Developer",
    "Scrum Master",
    "Google Analytics",
    "Cybersecurity Fundamentals",
];

const CONTRIBUTIONS: [&str; 5] = [
    "Updated user manual",
    "Created new onboarding guide",
    "Commented on API documentation",
    "Edited team best practices",
    "Contributed to project wiki",
];

pub fn position_of(employee: &str) -> &'static str {
    EMPLOYEES
        .iter()
        .find(|(name, _)| *name == employee)
        .map(|(_, position)| *position)
        .unwrap_or("Employee")
}

pub fn productivity_score(rng: &mut dyn RandomSource) -> f64 {
    round_to(rng.uniform(1.0, 10.0), 1)
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskBreakdown {
    pub total: i64,
    pub completed: i64,
    pub in_progress: i64,
    pub on_track: i64,
    pub overdue: i64,
}

pub fn task_breakdown(rng: &mut dyn RandomSource) -> TaskBreakdown {
    let total = rng.int_inclusive(50, 100);
    let completed = rng.int_inclusive(20, total - 10);
    let in_progress = total - completed;
    let on_track = rng.int_inclusive(0, in_progress);
    TaskBreakdown {
        total,
        completed,
        in_progress,
        on_track,
        overdue: in_progress - on_track,
    }
}

pub fn weekly_task_completion(rng: &mut dyn RandomSource, weeks: usize) -> Vec<f64> {
    (0..weeks).map(|_| rng.int_inclusive(5, 20) as f64).collect()
}

pub struct Communication {
    pub avg_email_response_hours: f64,
    pub meetings_attended: i64,
    pub feedback_implemented: i64,
    pub time_in_meetings_pct: i64,
}

pub fn communication(rng: &mut dyn RandomSource) -> Communication {
    Communication {
        avg_email_response_hours: round_to(rng.uniform(0.5, 4.0), 1),
        meetings_attended: rng.int_inclusive(10, 30),
        feedback_implemented: rng.int_inclusive(5, 15),
        time_in_meetings_pct: rng.int_inclusive(10, 40),
    }
}

pub fn email_response_trend(rng: &mut dyn RandomSource, weeks: usize) -> Vec<f64> {
    (0..weeks)
        .map(|_| round_to(rng.uniform(0.5, 4.0), 1))
        .collect()
}

pub struct Knowledge {
    pub articles_written: i64,
    pub articles_contributed: i64,
    pub training_sessions: i64,
    pub mentoring_hours: i64,
    pub documentation_pages: i64,
}

pub fn knowledge(rng: &mut dyn RandomSource) -> Knowledge {
    Knowledge {
        articles_written: rng.int_inclusive(1, 10),
        articles_contributed: rng.int_inclusive(5, 20),
        training_sessions: rng.int_inclusive(1, 5),
        mentoring_hours: rng.int_inclusive(5, 30),
        documentation_pages: rng.int_inclusive(10, 50),
    }
}

/// Each contribution dated 1-30 days before `today`.
pub fn recent_contributions(
    rng: &mut dyn RandomSource,
    today: NaiveDate,
) -> Vec<(&'static str, NaiveDate)> {
    CONTRIBUTIONS
        .iter()
        .map(|c| (*c, today - Duration::days(rng.int_inclusive(1, 30))))
        .collect()
}

pub struct Meetings {
    pub organized: i64,
    pub attended: i64,
    pub avg_duration_hours: f64,
    pub effectiveness: i64,
    pub weekly_time_pct: i64,
}

pub fn meetings(rng: &mut dyn RandomSource) -> Meetings {
    Meetings {
        organized: rng.int_inclusive(5, 15),
        attended: rng.int_inclusive(20, 40),
        avg_duration_hours: round_to(rng.uniform(0.5, 2.0), 1),
        effectiveness: rng.int_inclusive(1, 10),
        weekly_time_pct: rng.int_inclusive(10, 40),
    }
}

pub fn raci_counts(rng: &mut dyn RandomSource) -> Vec<f64> {
    RACI_ROLES
        .iter()
        .map(|_| rng.int_inclusive(5, 25) as f64)
        .collect()
}

pub struct Learning {
    pub courses_completed: Vec<&'static str>,
    pub certifications: Vec<&'static str>,
    pub learning_hours: i64,
    pub conferences_attended: i64,
    pub skill_improvement: i64,
}

pub fn learning(rng: &mut dyn RandomSource) -> Learning {
    let course_count = rng.int_inclusive(1, COURSES.len() as i64) as usize;
    let courses_completed = sample(rng, &COURSES, course_count);
    let cert_count = rng.int_inclusive(1, CERTIFICATIONS.len() as i64) as usize;
    let certifications = sample(rng, &CERTIFICATIONS, cert_count);
    Learning {
        courses_completed,
        certifications,
        learning_hours: rng.int_inclusive(20, 100),
        conferences_attended: rng.int_inclusive(1, 3),
        skill_improvement: rng.int_inclusive(1, 10),
    }
}

pub struct BugsFixed {
    pub low: i64,
    pub medium: i64,
    pub high: i64,
    pub critical: i64,
}

pub struct CodeStats {
    pub quality_score: f64,
    pub peer_reviews: i64,
    pub refactoring_tasks: i64,
    pub features_developed: i64,
    pub bugs_fixed: BugsFixed,
    pub git_commits: i64,
    pub bug_fix_rate: f64,
}

pub fn code_stats(rng: &mut dyn RandomSource) -> CodeStats {
    CodeStats {
        quality_score: round_to(rng.uniform(1.0, 10.0), 1),
        peer_reviews: rng.int_inclusive(5, 20),
        refactoring_tasks: rng.int_inclusive(2, 10),
        features_developed: rng.int_inclusive(1, 5),
        bugs_fixed: BugsFixed {
            low: rng.int_inclusive(5, 15),
            medium: rng.int_inclusive(3, 10),
            high: rng.int_inclusive(1, 5),
            critical: rng.int_inclusive(0, 3),
        },
        git_commits: rng.int_inclusive(20, 100),
        bug_fix_rate: round_to(rng.uniform(0.5, 5.0), 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::random::SeededSource;

    #[test]
    fn test_task_breakdown_is_consistent() {
        let mut rng = SeededSource::from_seed(5);
        for _ in 0..200 {
            let t = task_breakdown(&mut rng);
            assert!((50..=100).contains(&t.total));
            assert!(t.completed >= 20 && t.completed <= t.total - 10);
            assert_eq!(t.completed + t.in_progress, t.total);
            assert_eq!(t.on_track + t.overdue, t.in_progress);
            assert!(t.overdue >= 0);
        }
    }

    #[test]
    fn test_learning_lists_are_distinct() {
        let mut rng = SeededSource::from_seed(9);
        let l = learning(&mut rng);
        assert!(!l.courses_completed.is_empty() && l.courses_completed.len() <= 5);
        let mut courses = l.courses_completed.clone();
        courses.dedup();
        courses.sort();
        courses.dedup();
        assert_eq!(courses.len(), l.courses_completed.len());
    }

    #[test]
    fn test_positions() {
        assert_eq!(position_of("Alice Brown"), "Data Analyst");
        assert_eq!(position_of("Nobody"), "Employee");
    }
}
