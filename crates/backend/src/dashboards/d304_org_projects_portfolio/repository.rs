#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    OnTrack,
    Delayed,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::OnTrack => "On-track",
            ProjectStatus::Delayed => "Delayed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];

    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: u32,
    pub name: &'static str,
    pub completion: f64,
    pub status: ProjectStatus,
    pub risk: RiskLevel,
}

pub fn projects() -> Vec<Project> {
    use ProjectStatus::*;
    use RiskLevel::*;
    [
        (1, "Website Redesign", 75.0, OnTrack, Low),
        (2, "Mobile App Development", 40.0, Delayed, Medium),
        (3, "CRM Integration", 90.0, OnTrack, Low),
        (4, "Data Migration", 60.0, OnTrack, High),
        (5, "Security Audit", 30.0, Delayed, Medium),
    ]
    .into_iter()
    .map(|(id, name, completion, status, risk)| Project {
        id,
        name,
        completion,
        status,
        risk,
    })
    .collect()
}

/// Project count per risk level, levels without projects omitted.
pub fn risk_distribution(projects: &[Project]) -> Vec<(RiskLevel, usize)> {
    RiskLevel::ALL
        .iter()
        .map(|level| (*level, projects.iter().filter(|p| p.risk == *level).count()))
        .filter(|(_, count)| *count > 0)
        .collect()
}

pub const MITIGATION_STRATEGIES: [&str; 5] = [
    "Conduct regular risk assessment meetings",
    "Implement robust testing procedures",
    "Maintain open communication channels with stakeholders",
    "Develop contingency plans for high-risk areas",
    "Provide additional resources to high-risk projects",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_distribution() {
        let dist = risk_distribution(&projects());
        assert_eq!(
            dist,
            vec![
                (RiskLevel::Low, 2),
                (RiskLevel::Medium, 2),
                (RiskLevel::High, 1)
            ]
        );
        let only_low: Vec<Project> = projects()
            .into_iter()
            .filter(|p| p.risk == RiskLevel::Low)
            .collect();
        assert_eq!(risk_distribution(&only_low), vec![(RiskLevel::Low, 2)]);
    }
}
