use contracts::shared::alerts::AlertLevel;
use contracts::shared::widgets::{DashboardView, TabSection, Widget};

use super::repository;
use crate::dashboards::context::RenderContext;

fn compliance_level(status: &str) -> AlertLevel {
    match status {
        "Completed" => AlertLevel::Success,
        "In Progress" => AlertLevel::Info,
        _ => AlertLevel::Warning,
    }
}

pub fn render(ctx: &mut RenderContext<'_>) -> DashboardView {
    let mut view = ctx.view("Learning & Skills Dashboard");
    let learning = repository::learning(ctx.rng());

    view.header = vec![Widget::columns(vec![
        Widget::metric("Completed Courses", learning.completed.len(), "🎓"),
        Widget::metric("In Progress Courses", learning.in_progress.len(), "📖"),
        Widget::metric("Compliance Status", learning.compliance_status, "🛡️"),
    ])];

    view.tabs = vec![
        TabSection::new(
            "Courses",
            vec![Widget::row(vec![
                vec![Widget::bullet_list("Completed Courses", &learning.completed)],
                vec![Widget::bullet_list("In Progress Courses", &learning.in_progress)],
            ])],
        ),
        TabSection::new(
            "Compliance",
            vec![Widget::alert(
                compliance_level(learning.compliance_status),
                format!("Compliance training: {}", learning.compliance_status),
            )],
        ),
        TabSection::new(
            "Skills Gap",
            vec![Widget::bullet_list("Skills to Develop", &learning.skills_gap)],
        ),
    ];
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::context::testing::render as render_with;

    #[test]
    fn test_compliance_level() {
        assert_eq!(compliance_level("Completed"), AlertLevel::Success);
        assert_eq!(compliance_level("Not Started"), AlertLevel::Warning);
    }

    #[test]
    fn test_counts_match_lists() {
        let view = render_with(render, &[], 6);
        let completed = view
            .all_widgets()
            .iter()
            .find_map(|w| match w {
                Widget::BulletList { heading, items } if heading == "Completed Courses" => {
                    Some(items.len())
                }
                _ => None,
            })
            .unwrap();
        assert!(view.header.iter().any(|w| matches!(
            w,
            Widget::Row { columns } if matches!(
                &columns[0][0],
                Widget::Metric { value, .. } if *value == completed.to_string()
            )
        )));
    }
}
