pub const OVERALL_TRAINING_COMPLETION: f64 = 85.0;
pub const OVERALL_ACKNOWLEDGMENT: f64 = 92.0;

/// Department, training completion, policy acknowledgment.
pub const DEPARTMENT_COMPLIANCE: [(&str, f64, f64); 5] = [
    ("HR", 95.0, 98.0),
    ("IT", 88.0, 95.0),
    ("Finance", 82.0, 90.0),
    ("Marketing", 78.0, 89.0),
    ("Operations", 80.0, 88.0),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Incident {
    pub id: u32,
    pub issue: &'static str,
    pub severity: &'static str,
    pub status: &'static str,
}

pub const INCIDENTS: [Incident; 3] = [
    Incident { id: 1, issue: "Data breach", severity: "High", status: "Investigating" },
    Incident { id: 2, issue: "Late filing", severity: "Medium", status: "Resolved" },
    Incident { id: 3, issue: "Policy violation", severity: "Low", status: "Pending review" },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurveyScore {
    pub subject: &'static str,
    pub score: f64,
    pub description: &'static str,
}

pub const SURVEY_MAX: f64 = 5.0;

pub const ENGAGEMENT_SURVEY: [SurveyScore; 6] = [
    SurveyScore {
        subject: "Job Satisfaction",
        score: 4.2,
        description: "Overall contentment with job roles and responsibilities",
    },
    SurveyScore {
        subject: "Work-Life Balance",
        score: 3.9,
        description: "Ability to maintain a healthy balance between work and personal life",
    },
    SurveyScore {
        subject: "Career Growth",
        score: 3.6,
        description: "Opportunities for professional development and advancement",
    },
    SurveyScore {
        subject: "Company Culture",
        score: 4.1,
        description: "Alignment with organizational values and work environment",
    },
    SurveyScore {
        subject: "Leadership",
        score: 3.8,
        description: "Confidence in company leadership and management",
    },
    SurveyScore {
        subject: "Compensation",
        score: 3.5,
        description: "Satisfaction with salary and benefits package",
    },
];

/// Score band (inclusive upper bound) and its reading.
pub const SCORE_BANDS: [(&str, f64, &str); 4] = [
    ("1.0 - 2.0", 2.0, "Poor - Immediate attention required"),
    ("2.1 - 3.0", 3.0, "Below Average - Needs improvement"),
    ("3.1 - 4.0", 4.0, "Good - Meeting expectations"),
    ("4.1 - 5.0", 5.0, "Excellent - Exceeding expectations"),
];

pub fn interpret(score: f64) -> &'static str {
    SCORE_BANDS
        .iter()
        .find(|(_, upper, _)| score <= *upper)
        .map(|(_, _, reading)| *reading)
        .unwrap_or(SCORE_BANDS[SCORE_BANDS.len() - 1].2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpret_bands() {
        assert_eq!(interpret(1.5), "Poor - Immediate attention required");
        assert_eq!(interpret(3.0), "Below Average - Needs improvement");
        assert_eq!(interpret(3.6), "Good - Meeting expectations");
        assert_eq!(interpret(4.2), "Excellent - Exceeding expectations");
    }
}
