use crate::shared::random::RandomSource;

pub const TEAMS: [&str; 5] = [
    "Engineering",
    "Marketing",
    "Sales",
    "Customer Support",
    "HR",
];

/// KPI label, sampling range, target and display unit.
pub struct Kpi {
    pub label: &'static str,
    pub low: f64,
    pub high: f64,
    pub target: f64,
    pub unit: &'static str,
}

pub static KPIS: [Kpi; 4] = [
    Kpi { label: "Productivity Score", low: 70.0, high: 95.0, target: 80.0, unit: "%" },
    Kpi { label: "Goal Attainment", low: 60.0, high: 100.0, target: 75.0, unit: "%" },
    Kpi { label: "Quality Score", low: 3.0, high: 5.0, target: 4.0, unit: "" },
    Kpi { label: "Engagement Score", low: 6.0, high: 9.5, target: 7.5, unit: "" },
];

pub const RATINGS: [&str; 3] = ["Exceeds Expectations", "Meets Expectations", "Below Expectations"];

#[derive(Debug, Clone, PartialEq)]
pub struct TeamKpi {
    pub team: &'static str,
    pub value: f64,
}

pub fn kpi(label: &str) -> Option<&'static Kpi> {
    KPIS.iter().find(|k| k.label == label)
}

/// One sample per team, rounded to one decimal.
pub fn team_values(rng: &mut dyn RandomSource, kpi: &Kpi) -> Vec<TeamKpi> {
    TEAMS
        .iter()
        .map(|team| TeamKpi {
            team: *team,
            value: contracts::shared::format::round_to(rng.uniform(kpi.low, kpi.high), 1),
        })
        .collect()
}

/// Headcount per rating bucket.
pub fn rating_distribution(rng: &mut dyn RandomSource) -> Vec<(&'static str, i64)> {
    let ranges = [(15, 30), (50, 80), (5, 15)];
    RATINGS
        .iter()
        .zip(ranges)
        .map(|(rating, (low, high))| (*rating, rng.int_inclusive(low, high)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::random::SeededSource;

    #[test]
    fn test_team_values_within_range() {
        let mut rng = SeededSource::from_seed(11);
        for kpi in KPIS.iter() {
            let values = team_values(&mut rng, kpi);
            assert_eq!(values.len(), TEAMS.len());
            assert!(values
                .iter()
                .all(|v| v.value >= kpi.low && v.value <= kpi.high));
        }
    }

    #[test]
    fn test_kpi_lookup() {
        assert_eq!(kpi("Quality Score").map(|k| k.target), Some(4.0));
        assert!(kpi("Velocity").is_none());
    }
}
