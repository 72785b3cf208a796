use crate::shared::random::RandomSource;

pub const SKILLS: [&str; 6] = [
    "Python",
    "Data Analysis",
    "Cloud Infrastructure",
    "Project Management",
    "Leadership",
    "Communication",
];

pub const DEPARTMENTS: [&str; 5] = [
    "Engineering",
    "Marketing",
    "Sales",
    "Customer Support",
    "HR",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    High,
    Medium,
    Low,
}

impl Availability {
    /// `>= 75` high, `>= 50` medium, otherwise low.
    pub fn from_percent(percent: f64) -> Self {
        if percent >= 75.0 {
            Availability::High
        } else if percent >= 50.0 {
            Availability::Medium
        } else {
            Availability::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Availability::High => "High",
            Availability::Medium => "Medium",
            Availability::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillSupply {
    pub skill: &'static str,
    pub proficient: i64,
    pub availability: f64,
}

impl SkillSupply {
    pub fn band(&self) -> Availability {
        Availability::from_percent(self.availability)
    }
}

pub fn skills_inventory(rng: &mut dyn RandomSource) -> Vec<SkillSupply> {
    SKILLS
        .iter()
        .map(|skill| SkillSupply {
            skill: *skill,
            proficient: rng.int_inclusive(5, 40),
            availability: rng.int_inclusive(30, 95) as f64,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrainingCompletion {
    pub department: &'static str,
    pub completed: f64,
    pub in_progress: f64,
}

pub fn training_completion(rng: &mut dyn RandomSource) -> Vec<TrainingCompletion> {
    DEPARTMENTS
        .iter()
        .map(|department| {
            let completed = rng.int_inclusive(55, 95) as f64;
            let in_progress = rng.int_inclusive(0, (100.0 - completed) as i64) as f64;
            TrainingCompletion {
                department: *department,
                completed,
                in_progress,
            }
        })
        .collect()
}
