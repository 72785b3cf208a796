use crate::shared::random::{choose, sample, RandomSource};

pub const COURSES: [&str; 5] = [
    "Python Fundamentals",
    "Data Analysis",
    "Machine Learning",
    "Soft Skills",
    "Project Management",
];

pub const SKILLS: [&str; 4] = [
    "Leadership",
    "Communication",
    "Technical Writing",
    "Data Visualization",
];

pub const COMPLIANCE_STATUSES: [&str; 3] = ["Completed", "In Progress", "Not Started"];

#[derive(Debug, Clone, PartialEq)]
pub struct LearningSnapshot {
    pub completed: Vec<&'static str>,
    pub in_progress: Vec<&'static str>,
    pub compliance_status: &'static str,
    pub skills_gap: Vec<&'static str>,
}

/// 1-3 completed courses, 1-2 in progress drawn from the rest, two skill gaps.
pub fn learning(rng: &mut dyn RandomSource) -> LearningSnapshot {
    let count = rng.int_inclusive(1, 3) as usize;
    let completed = sample(rng, &COURSES, count);
    let remaining: Vec<&'static str> = COURSES
        .iter()
        .copied()
        .filter(|c| !completed.contains(c))
        .collect();
    let count = rng.int_inclusive(1, 2) as usize;
    let in_progress = sample(rng, &remaining, count);
    LearningSnapshot {
        completed,
        in_progress,
        compliance_status: choose(rng, &COMPLIANCE_STATUSES),
        skills_gap: sample(rng, &SKILLS, 2),
    }
}
