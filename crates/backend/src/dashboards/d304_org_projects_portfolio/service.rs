use contracts::shared::widgets::{DashboardView, Slice, TabSection, Tone, Widget};

use super::repository::{self, ProjectStatus, RiskLevel};
use crate::dashboards::context::RenderContext;

fn risk_tone(risk: RiskLevel) -> Tone {
    match risk {
        RiskLevel::Low => Tone::Good,
        RiskLevel::Medium => Tone::Warn,
        RiskLevel::High => Tone::Bad,
    }
}

pub fn render(ctx: &mut RenderContext<'_>) -> DashboardView {
    let projects = repository::projects();
    let names: Vec<&str> = projects.iter().map(|p| p.name).collect();
    let selected = ctx.select("project", "Select a project", &names, 0);

    let mut view = ctx.view("Projects and Portfolio Dashboard");

    let mut status = vec![Widget::heading("Project Status")];
    if let Some(project) = projects.iter().find(|p| p.name == selected) {
        let status_icon = match project.status {
            ProjectStatus::OnTrack => "🟢",
            ProjectStatus::Delayed => "🟠",
        };
        status.push(Widget::row(vec![
            vec![Widget::detail(
                project.name,
                &[
                    ("Status", format!("{} {}", status_icon, project.status.label())),
                    ("Risk", project.risk.label().to_string()),
                ],
            )],
            vec![
                Widget::metric("Completion", format!("{:.0}%", project.completion), "🏁"),
                Widget::progress(
                    "Completion",
                    project.completion,
                    risk_tone(project.risk),
                ),
            ],
        ]));
    }
    status.push(Widget::heading("All Projects Overview"));
    status.push(
        Widget::bar_chart(
            &names,
            projects.iter().map(|p| p.completion).collect(),
            "Project",
            "Completion (%)",
        )
        .titled("Project Completion Status"),
    );

    let mut risk = vec![
        Widget::heading("Risk Assessment"),
        Widget::pie_chart(
            "Project Risk Distribution",
            repository::risk_distribution(&projects)
                .into_iter()
                .map(|(level, count)| Slice::new(level.label(), count as f64))
                .collect(),
        ),
    ];
    let high_risk: Vec<&str> = projects
        .iter()
        .filter(|p| p.risk == RiskLevel::High)
        .map(|p| p.name)
        .collect();
    if high_risk.is_empty() {
        risk.push(Widget::info("No high-risk projects at the moment."));
    } else {
        risk.push(Widget::bullet_list("High Risk Projects", &high_risk));
    }
    risk.push(Widget::bullet_list(
        "Risk Mitigation Strategies",
        &repository::MITIGATION_STRATEGIES,
    ));

    view.tabs = vec![
        TabSection::new("Project Status", status),
        TabSection::new("Risk Assessment", risk),
    ];
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::context::testing::render as render_with;
    use contracts::shared::widgets::DetailItem;

    #[test]
    fn test_selected_project_details() {
        let view = render_with(render, &[("project", "Data Migration")], 0);
        let detail = view.tabs[0]
            .widgets
            .iter()
            .find_map(|w| match w {
                Widget::Row { columns } => columns[0].first().cloned(),
                _ => None,
            })
            .unwrap();
        match detail {
            Widget::Detail { title, items } => {
                assert_eq!(title, "Data Migration");
                assert_eq!(
                    items[1],
                    DetailItem {
                        label: "Risk".into(),
                        value: "High".into()
                    }
                );
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_high_risk_list() {
        let view = render_with(render, &[], 0);
        assert!(view.tabs[1]
            .widgets
            .contains(&Widget::bullet_list("High Risk Projects", &["Data Migration"])));
    }
}
