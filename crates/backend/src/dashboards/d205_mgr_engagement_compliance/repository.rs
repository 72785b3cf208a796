/// Engagement survey categories: (field key, button label).
pub const CATEGORIES: [(&str, &str); 4] = [
    ("workLifeBalance", "Work-Life Balance"),
    ("jobSatisfaction", "Job Satisfaction"),
    ("teamCollaboration", "Team Collaboration"),
    ("careerGrowth", "Career Growth"),
];

/// Anonymized survey answer; scores follow `CATEGORIES` order.
pub struct EngagementScore {
    pub id: &'static str,
    pub scores: [f64; 4],
}

impl EngagementScore {
    pub fn score(&self, key: &str) -> Option<f64> {
        CATEGORIES
            .iter()
            .position(|(k, _)| *k == key)
            .map(|i| self.scores[i])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplianceStatus {
    Compliant,
    Warning,
    NonCompliant,
}

impl ComplianceStatus {
    pub fn label(self) -> &'static str {
        match self {
            ComplianceStatus::Compliant => "compliant",
            ComplianceStatus::Warning => "warning",
            ComplianceStatus::NonCompliant => "non-compliant",
        }
    }
}

pub const COMPLIANCE_AREAS: [&str; 3] = ["safetyTraining", "dataProtection", "codeOfConduct"];

pub struct EmployeeCompliance {
    pub name: &'static str,
    /// In `COMPLIANCE_AREAS` order
    pub statuses: [ComplianceStatus; 3],
}

pub fn engagement_scores() -> Vec<EngagementScore> {
    vec![
        EngagementScore {
            id: "EMP001",
            scores: [7.0, 8.0, 9.0, 6.0],
        },
        EngagementScore {
            id: "EMP002",
            scores: [6.0, 7.0, 8.0, 7.0],
        },
        EngagementScore {
            id: "EMP003",
            scores: [8.0, 6.0, 7.0, 8.0],
        },
        EngagementScore {
            id: "EMP004",
            scores: [5.0, 7.0, 9.0, 6.0],
        },
        EngagementScore {
            id: "EMP005",
            scores: [7.0, 8.0, 6.0, 7.0],
        },
    ]
}

pub fn employee_compliance() -> Vec<EmployeeCompliance> {
    use ComplianceStatus::*;
    vec![
        EmployeeCompliance {
            name: "Alice",
            statuses: [Compliant, Compliant, Compliant],
        },
        EmployeeCompliance {
            name: "Bob",
            statuses: [NonCompliant, Compliant, Compliant],
        },
        EmployeeCompliance {
            name: "Charlie",
            statuses: [Compliant, Warning, Compliant],
        },
        EmployeeCompliance {
            name: "Diana",
            statuses: [Compliant, Compliant, NonCompliant],
        },
        EmployeeCompliance {
            name: "Ethan",
            statuses: [Warning, Compliant, Compliant],
        },
    ]
}

pub const ENGAGEMENT_ACTION_ITEMS: [&str; 5] = [
    "Review work-life balance concerns with the team, particularly focusing on improving the lowest scores",
    "Schedule a team meeting to discuss ways to improve overall job satisfaction",
    "Implement team-building activities to enhance team collaboration",
    "Develop individual career growth plans for team members",
    "Conduct one-on-one meetings to address specific engagement concerns",
];

pub const COMPLIANCE_ACTION_ITEMS: [&str; 5] = [
    "Ensure Bob completes his safety training by the end of the week",
    "Follow up with Charlie regarding the data protection warning",
    "Review the code of conduct with Diana and provide necessary guidance",
    "Schedule a refresher course on safety procedures for Ethan",
    "Conduct a team-wide compliance awareness session",
];
