use contracts::dashboards::dto::RenderOutcome;
use contracts::shared::persona::*;
use std::collections::HashMap;

use super::context::{DashboardFn, RenderContext};
use super::*;

/// Central dispatch table: maps `(persona, navigation label)` to the module
/// that renders it. Built once at startup and shared read-only.
pub struct DashboardRegistry {
    fns: HashMap<(Persona, &'static str), DashboardFn>,
}

impl DashboardRegistry {
    pub fn new() -> Self {
        let mut fns: HashMap<(Persona, &'static str), DashboardFn> = HashMap::new();

        let ic = Persona::IndividualContributor;
        fns.insert((ic, NAV_PRODUCTIVITY), d101_ic_productivity::service::render);
        fns.insert((ic, NAV_PERFORMANCE_CAREER), d102_ic_performance_career::service::render);
        fns.insert((ic, NAV_LEARNING_SKILLS), d103_ic_learning_skills::service::render);
        fns.insert((ic, NAV_TASKS), d104_ic_tasks::service::render);

        let mgr = Persona::FirstLineManager;
        fns.insert((mgr, NAV_OVERVIEW), d201_mgr_overview::service::render);
        fns.insert((mgr, NAV_PRODUCTIVITY), d202_mgr_team_productivity::service::render);
        fns.insert((mgr, NAV_PERFORMANCE_CAREER), d203_mgr_employee_performance::service::render);
        fns.insert((mgr, NAV_LEARNING_SKILLS), d204_mgr_learning_skills::service::render);
        fns.insert((mgr, NAV_ENGAGEMENT_COMPLIANCE), d205_mgr_engagement_compliance::service::render);

        let org = Persona::Director;
        fns.insert((org, NAV_EXECUTIVE_SUMMARY), d301_org_executive_summary::service::render);
        fns.insert((org, NAV_PRODUCTIVITY), d302_org_productivity::service::render);
        fns.insert((org, NAV_PERFORMANCE), d303_org_performance::service::render);
        fns.insert((org, NAV_PROJECTS_PORTFOLIO), d304_org_projects_portfolio::service::render);
        fns.insert((org, NAV_LEARNING_SKILLS), d305_org_learning_skills::service::render);
        fns.insert((org, NAV_ENGAGEMENT_COMPLIANCE), d306_org_engagement_compliance::service::render);

        let hr = Persona::HrPartner;
        fns.insert((hr, NAV_OVERVIEW), d401_hr_overview::service::render);
        fns.insert((hr, NAV_ENGAGEMENT_COMPLIANCE), d402_hr_engagement_compliance::service::render);
        fns.insert((hr, NAV_RECRUITMENT), d403_hr_recruitment::service::render);
        fns.insert((hr, NAV_TRAINING), d404_hr_training::service::render);
        fns.insert((hr, NAV_DEMOGRAPHICS), d405_hr_demographics::service::render);

        Self { fns }
    }

    /// Handler for a label the persona offers.
    pub fn resolve(&self, persona: Persona, nav: &str) -> Option<DashboardFn> {
        let label = persona.navigation().iter().find(|label| **label == nav)?;
        self.fns.get(&(persona, *label)).copied()
    }

    /// Render the dashboard for a persona label and navigation label.
    ///
    /// Unknown personas and labels without a module yield the placeholder
    /// naming `nav`; this never fails.
    pub fn render(&self, persona: &str, nav: &str, ctx: &mut RenderContext<'_>) -> RenderOutcome {
        let handler = Persona::from_label(persona).and_then(|p| self.resolve(p, nav));

        match handler {
            Some(render) => RenderOutcome::Dashboard(render(ctx)),
            None => {
                tracing::warn!("no dashboard for persona {:?} nav {:?}", persona, nav);
                RenderOutcome::placeholder(nav)
            }
        }
    }
}

impl Default for DashboardRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::context::testing::test_now;
    use crate::shared::clock::Clock;
    use crate::shared::random::SeededSource;

    fn render(registry: &DashboardRegistry, persona: &str, nav: &str) -> RenderOutcome {
        let params = HashMap::new();
        let mut rng = SeededSource::from_seed(17);
        let mut ctx = RenderContext::new(&mut rng, &params, Clock::Fixed(test_now()));
        registry.render(persona, nav, &mut ctx)
    }

    #[test]
    fn test_every_offered_label_has_a_dashboard() {
        let registry = DashboardRegistry::new();
        let mut total = 0;
        for persona in Persona::ALL {
            for nav in persona.navigation() {
                let outcome = render(&registry, persona.label(), nav);
                assert!(
                    !outcome.is_placeholder(),
                    "{} / {} fell back to the placeholder",
                    persona,
                    nav
                );
                total += 1;
            }
        }
        assert_eq!(total, 20);
        assert_eq!(registry.fns.len(), total);
    }

    #[test]
    fn test_unknown_nav_names_the_label() {
        let registry = DashboardRegistry::new();
        let outcome = render(&registry, "Individual Contributor", "Payroll");
        assert_eq!(outcome, RenderOutcome::placeholder("Payroll"));
    }

    #[test]
    fn test_label_of_another_persona_is_a_placeholder() {
        let registry = DashboardRegistry::new();
        let outcome = render(&registry, "Individual Contributor", NAV_RECRUITMENT);
        assert!(outcome.is_placeholder());
    }

    #[test]
    fn test_unknown_persona_is_a_placeholder() {
        let registry = DashboardRegistry::new();
        let outcome = render(&registry, "Chief Executive", NAV_OVERVIEW);
        assert_eq!(outcome, RenderOutcome::placeholder(NAV_OVERVIEW));
    }
}
