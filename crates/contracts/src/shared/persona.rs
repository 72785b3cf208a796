use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Navigation labels
// ---------------------------------------------------------------------------

pub const NAV_PRODUCTIVITY: &str = "Productivity";
pub const NAV_PERFORMANCE_CAREER: &str = "Performance & Career";
pub const NAV_LEARNING_SKILLS: &str = "Learning & Skills";
pub const NAV_TASKS: &str = "Tasks";
pub const NAV_OVERVIEW: &str = "Overview";
pub const NAV_ENGAGEMENT_COMPLIANCE: &str = "Engagement & Compliance";
pub const NAV_EXECUTIVE_SUMMARY: &str = "Executive Summary";
pub const NAV_PERFORMANCE: &str = "Performance";
pub const NAV_PROJECTS_PORTFOLIO: &str = "Projects and Portfolio";
pub const NAV_RECRUITMENT: &str = "Recruitment";
pub const NAV_TRAINING: &str = "Training";
pub const NAV_DEMOGRAPHICS: &str = "Demographics";

const IC_NAVIGATION: &[&str] = &[
    NAV_PRODUCTIVITY,
    NAV_PERFORMANCE_CAREER,
    NAV_LEARNING_SKILLS,
    NAV_TASKS,
];

const FIRST_LINE_NAVIGATION: &[&str] = &[
    NAV_OVERVIEW,
    NAV_PRODUCTIVITY,
    NAV_PERFORMANCE_CAREER,
    NAV_LEARNING_SKILLS,
    NAV_ENGAGEMENT_COMPLIANCE,
];

const DIRECTOR_NAVIGATION: &[&str] = &[
    NAV_EXECUTIVE_SUMMARY,
    NAV_PRODUCTIVITY,
    NAV_PERFORMANCE,
    NAV_PROJECTS_PORTFOLIO,
    NAV_LEARNING_SKILLS,
    NAV_ENGAGEMENT_COMPLIANCE,
];

const HR_NAVIGATION: &[&str] = &[
    NAV_OVERVIEW,
    NAV_ENGAGEMENT_COMPLIANCE,
    NAV_RECRUITMENT,
    NAV_TRAINING,
    NAV_DEMOGRAPHICS,
];

// ---------------------------------------------------------------------------
// Persona
// ---------------------------------------------------------------------------

/// A user role. Determines which navigation labels are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Persona {
    #[serde(rename = "Individual Contributor")]
    IndividualContributor,
    #[serde(rename = "First Line Manager")]
    FirstLineManager,
    #[serde(rename = "Second Line Manager/Director")]
    Director,
    #[serde(rename = "HR Business Partner/HR Head")]
    HrPartner,
}

/// Persona preselected when the application opens.
pub const DEFAULT_PERSONA: Persona = Persona::IndividualContributor;

impl Persona {
    /// Selector order.
    pub const ALL: [Persona; 4] = [
        Persona::IndividualContributor,
        Persona::FirstLineManager,
        Persona::Director,
        Persona::HrPartner,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Persona::IndividualContributor => "Individual Contributor",
            Persona::FirstLineManager => "First Line Manager",
            Persona::Director => "Second Line Manager/Director",
            Persona::HrPartner => "HR Business Partner/HR Head",
        }
    }

    /// Exact, case-sensitive lookup by display label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.label() == label)
    }

    /// Ordered navigation labels for this persona.
    pub fn navigation(self) -> &'static [&'static str] {
        match self {
            Persona::IndividualContributor => IC_NAVIGATION,
            Persona::FirstLineManager => FIRST_LINE_NAVIGATION,
            Persona::Director => DIRECTOR_NAVIGATION,
            Persona::HrPartner => HR_NAVIGATION,
        }
    }

    pub fn default_nav(self) -> &'static str {
        // every navigation set is non-empty
        self.navigation()[0]
    }

    pub fn offers(self, nav: &str) -> bool {
        self.navigation().contains(&nav)
    }
}

impl std::fmt::Display for Persona {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        for persona in Persona::ALL {
            assert_eq!(Persona::from_label(persona.label()), Some(persona));
        }
        assert_eq!(Persona::from_label("first line manager"), None);
        assert_eq!(Persona::from_label("Chief Executive"), None);
    }

    #[test]
    fn test_navigation_sets() {
        assert_eq!(Persona::IndividualContributor.navigation().len(), 4);
        assert_eq!(Persona::FirstLineManager.navigation().len(), 5);
        assert_eq!(Persona::Director.navigation().len(), 6);
        assert_eq!(Persona::HrPartner.navigation().len(), 5);

        assert_eq!(Persona::Director.default_nav(), NAV_EXECUTIVE_SUMMARY);
        assert!(Persona::HrPartner.offers(NAV_RECRUITMENT));
        assert!(!Persona::IndividualContributor.offers(NAV_RECRUITMENT));
    }

    #[test]
    fn test_serde_uses_display_label() {
        let json = serde_json::to_string(&Persona::Director).unwrap();
        assert_eq!(json, "\"Second Line Manager/Director\"");
        let back: Persona = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Persona::Director);
    }
}
