/// Team engagement: (team, current score, previous score).
pub const TEAM_ENGAGEMENT: [(&str, f64, f64); 5] = [
    ("Product Development", 80.0, 75.0),
    ("Customer Support", 75.0, 78.0),
    ("Sales", 85.0, 82.0),
    ("Marketing", 78.0, 76.0),
    ("Human Resources", 82.0, 80.0),
];

pub const QUARTERS: [&str; 4] = ["Q1", "Q2", "Q3", "Q4"];

/// Quarterly engagement per series, aligned with `QUARTERS`.
pub const ENGAGEMENT_TRENDS: [(&str, [f64; 4]); 6] = [
    ("Overall", [76.0, 78.0, 79.0, 80.0]),
    ("Product Development", [74.0, 76.0, 78.0, 80.0]),
    ("Customer Support", [75.0, 77.0, 76.0, 75.0]),
    ("Sales", [80.0, 82.0, 83.0, 85.0]),
    ("Marketing", [75.0, 76.0, 77.0, 78.0]),
    ("Human Resources", [76.0, 79.0, 81.0, 82.0]),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComplianceRate {
    pub category: &'static str,
    pub current: f64,
    pub previous: f64,
}

impl ComplianceRate {
    pub fn change(&self) -> f64 {
        self.current - self.previous
    }
}

pub const COMPLIANCE: [ComplianceRate; 5] = [
    ComplianceRate { category: "Mandatory Training", current: 100.0, previous: 98.0 },
    ComplianceRate { category: "Policy Acknowledgment", current: 95.0, previous: 92.0 },
    ComplianceRate { category: "Data Protection", current: 98.0, previous: 95.0 },
    ComplianceRate { category: "Code of Conduct", current: 97.0, previous: 95.0 },
    ComplianceRate { category: "Ethics Training", current: 93.0, previous: 90.0 },
];

/// Categories under this rate get flagged.
pub const COMPLIANCE_TARGET: f64 = 95.0;

pub const INTERPRETATION: [&str; 3] = [
    "Larger slices indicate better compliance.",
    "The color gradient (red to blue) also indicates the level of compliance.",
    "Categories with smaller slices may require more attention.",
];

pub const INSIGHTS: [&str; 3] = [
    "Ethics Training compliance is below 95%. Consider sending reminders or scheduling additional sessions.",
    "Mandatory Training compliance is at 100%. Excellent work maintaining full compliance in this critical area.",
    "Policy Acknowledgment shows the largest improvement. Consider applying similar strategies to other areas.",
];

pub fn below_target(rates: &[ComplianceRate]) -> Vec<&ComplianceRate> {
    rates.iter().filter(|r| r.current < COMPLIANCE_TARGET).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_target() {
        let flagged = below_target(&COMPLIANCE);
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].category, "Ethics Training");
        assert_eq!(flagged[0].change(), 3.0);
    }
}
