use contracts::shared::format::round_to;

use crate::shared::random::RandomSource;

#[derive(Debug, Clone, PartialEq)]
pub struct ProductivitySnapshot {
    pub task_completion_rate: f64,
    pub communication_efficiency: f64,
    pub knowledge_contribution: i64,
    pub meeting_effectiveness: f64,
    pub learning_and_development: f64,
    pub craftsmanship: f64,
}

impl ProductivitySnapshot {
    /// The ratio-valued metrics, in display order.
    pub fn rates(&self) -> [(&'static str, f64); 5] {
        [
            ("Task Completion Rate", self.task_completion_rate),
            ("Communication Efficiency", self.communication_efficiency),
            ("Meeting Effectiveness", self.meeting_effectiveness),
            ("Learning and Development", self.learning_and_development),
            ("Craftsmanship", self.craftsmanship),
        ]
    }
}

pub fn productivity(rng: &mut dyn RandomSource) -> ProductivitySnapshot {
    ProductivitySnapshot {
        task_completion_rate: round_to(rng.uniform(0.7, 1.0), 2),
        communication_efficiency: round_to(rng.uniform(0.6, 0.9), 2),
        knowledge_contribution: rng.int_inclusive(5, 20),
        meeting_effectiveness: round_to(rng.uniform(0.5, 0.8), 2),
        learning_and_development: round_to(rng.uniform(0.6, 0.9), 2),
        craftsmanship: round_to(rng.uniform(0.7, 0.95), 2),
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
            let s = productivity(&mut rng);
            assert!((0.7..=1.0).contains(&s.task_completion_rate));
            assert!((0.6..=0.9).contains(&s.communication_efficiency));
            assert!((5..=20).contains(&s.knowledge_contribution));
            assert!((0.5..=0.8).contains(&s.meeting_effectiveness));
            assert!((0.6..=0.9).contains(&s.learning_and_development));
            assert!((0.7..=0.95).contains(&s.craftsmanship));
        }
    }
}
