use contracts::shared::format::round_to;

use crate::shared::random::{choose, RandomSource};

pub const CAREER_LEVELS: [&str; 4] = ["Junior", "Intermediate", "Senior", "Lead"];

#[derive(Debug, Clone, PartialEq)]
pub struct CareerSnapshot {
    pub goals_achieved: i64,
    pub total_goals: i64,
    pub feedback_received: i64,
    pub performance_score: f64,
    pub career_level: &'static str,
    pub years_in_role: i64,
}

impl CareerSnapshot {
    /// Share of goals achieved, capped at 100.
    pub fn goal_progress(&self) -> f64 {
        if self.total_goals <= 0 {
            return 0.0;
        }
        (self.goals_achieved as f64 / self.total_goals as f64 * 100.0).min(100.0)
    }
}

pub fn career(rng: &mut dyn RandomSource) -> CareerSnapshot {
    CareerSnapshot {
        goals_achieved: rng.int_inclusive(3, 8),
        total_goals: rng.int_inclusive(8, 12),
        feedback_received: rng.int_inclusive(10, 30),
        performance_score: round_to(rng.uniform(3.0, 5.0), 1),
        career_level: choose(rng, &CAREER_LEVELS),
        years_in_role: rng.int_inclusive(1, 5),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::random::SeededSource;

    #[test]
    fn test_samples_stay_in_range() {
        for seed in 0..20 {
            let mut rng = SeededSource::from_seed(seed);
            let c = career(&mut rng);
            assert!(c.goals_achieved <= c.total_goals);
            assert!((3.0..=5.0).contains(&c.performance_score));
            assert!(CAREER_LEVELS.contains(&c.career_level));
            assert!((1..=5).contains(&c.years_in_role));
            assert!((0.0..=100.0).contains(&c.goal_progress()));
        }
    }
}
