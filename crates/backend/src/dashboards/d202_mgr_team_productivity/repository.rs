use chrono::{Duration, NaiveDateTime};
use contracts::shared::aggregate::Measured;
use contracts::shared::filter::{Categorized, Dated};

use crate::shared::random::RandomSource;

pub const TASK_COMPLETION: &str = "Task Completion Rate";
pub const COMMUNICATION_EFFICIENCY: &str = "Communication Efficiency Rate";
pub const KNOWLEDGE_CONTRIBUTIONS: &str = "Knowledge Contributions";
pub const MEETING_EFFECTIVENESS: &str = "Meeting Effectiveness";
pub const MEETING_DURATION: &str = "Average Meeting Duration";
pub const TIME_IN_MEETINGS: &str = "Percentage Time in Meetings";
pub const ACTION_ITEMS: &str = "Action Items per Meeting";
pub const RESOLUTIONS: &str = "Resolutions per Meeting";

/// One team, one day.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamDailyMetrics {
    pub team: String,
    pub date: NaiveDateTime,
    pub task_completion_rate: f64,
    pub communication_efficiency_rate: f64,
    pub knowledge_contributions: i64,
    pub meeting_effectiveness: f64,
    pub average_meeting_duration: f64,
    pub time_in_meetings: f64,
    pub action_items_per_meeting: f64,
    pub resolutions_per_meeting: f64,
}

impl Categorized for TeamDailyMetrics {
    fn category(&self) -> &str {
        &self.team
    }
}

impl Dated for TeamDailyMetrics {
    fn date(&self) -> NaiveDateTime {
        self.date
    }
}

impl Measured for TeamDailyMetrics {
    fn measure(&self, field: &str) -> Option<f64> {
        let value = match field {
            TASK_COMPLETION => self.task_completion_rate,
            COMMUNICATION_EFFICIENCY => self.communication_efficiency_rate,
            KNOWLEDGE_CONTRIBUTIONS => self.knowledge_contributions as f64,
            MEETING_EFFECTIVENESS => self.meeting_effectiveness,
            MEETING_DURATION => self.average_meeting_duration,
            TIME_IN_MEETINGS => self.time_in_meetings,
            ACTION_ITEMS => self.action_items_per_meeting,
            RESOLUTIONS => self.resolutions_per_meeting,
            _ => return None,
        };
        Some(value)
    }
}

pub fn team_names(num_teams: usize) -> Vec<String> {
    (1..=num_teams).map(|i| format!("Team {}", i)).collect()
}

/// `num_teams` x `days` daily rows ending at `end`, team-major order.
pub fn generate_team_metrics(
    rng: &mut dyn RandomSource,
    num_teams: usize,
    days: i64,
    end: NaiveDateTime,
) -> Vec<TeamDailyMetrics> {
    let mut rows = Vec::with_capacity(num_teams * days.max(0) as usize);
    for team in team_names(num_teams) {
        for offset in (0..days).rev() {
            rows.push(TeamDailyMetrics {
                team: team.clone(),
                date: end - Duration::days(offset),
                task_completion_rate: rng.uniform(0.6, 1.0),
                communication_efficiency_rate: rng.uniform(0.7, 1.0),
                knowledge_contributions: rng.int_inclusive(0, 9),
                meeting_effectiveness: rng.uniform(0.5, 1.0),
                average_meeting_duration: rng.uniform(30.0, 120.0),
                time_in_meetings: rng.uniform(0.1, 0.4),
                action_items_per_meeting: rng.uniform(1.0, 5.0),
                resolutions_per_meeting: rng.uniform(0.5, 3.0),
            });
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::context::testing::test_now;
    use crate::shared::random::SeededSource;

    #[test]
    fn test_shape_and_ranges() {
        let mut rng = SeededSource::from_seed(3);
        let rows = generate_team_metrics(&mut rng, 5, 365, test_now());
        assert_eq!(rows.len(), 5 * 365);
        assert_eq!(rows[0].team, "Team 1");
        assert_eq!(rows[364].date, test_now());
        assert_eq!(rows[0].date, test_now() - Duration::days(364));

        for row in &rows {
            assert!((0.6..1.0).contains(&row.task_completion_rate));
            assert!((0.7..1.0).contains(&row.communication_efficiency_rate));
            assert!((0..=9).contains(&row.knowledge_contributions));
            assert!((30.0..120.0).contains(&row.average_meeting_duration));
            assert!((0.1..0.4).contains(&row.time_in_meetings));
        }
    }
}
