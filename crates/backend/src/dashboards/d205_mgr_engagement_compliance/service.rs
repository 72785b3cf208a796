use contracts::shared::widgets::{Cell, DashboardView, TabSection, Tone, Widget};

use super::repository::{self, ComplianceStatus, CATEGORIES, COMPLIANCE_AREAS};
use crate::dashboards::context::RenderContext;

fn status_tone(status: ComplianceStatus) -> Tone {
    match status {
        ComplianceStatus::Compliant => Tone::Good,
        ComplianceStatus::Warning => Tone::Warn,
        ComplianceStatus::NonCompliant => Tone::Bad,
    }
}

pub fn render(ctx: &mut RenderContext<'_>) -> DashboardView {
    // One detail button per category; the pressed one adds its table
    let pressed: Vec<&str> = CATEGORIES
        .iter()
        .filter(|(key, label)| ctx.button(key, label))
        .map(|(key, _)| *key)
        .collect();

    let mut view = ctx.view("Team Engagement and Compliance Dashboard");
    let scores = repository::engagement_scores();
    let ids: Vec<&str> = scores.iter().map(|s| s.id).collect();

    let mut engagement = vec![Widget::heading("Anonymized Team Engagement Metrics")];
    for (key, _) in CATEGORIES {
        engagement.push(Widget::bar_chart(
            &ids,
            scores.iter().filter_map(|s| s.score(key)).collect(),
            "Employee ID",
            &format!("{} Score", key),
        ));
    }
    for key in pressed {
        engagement.push(Widget::heading(format!("{} Details", key)));
        engagement.push(Widget::table(
            &["id", key],
            scores
                .iter()
                .map(|s| {
                    vec![
                        Cell::from(s.id),
                        format!("{}", s.score(key).unwrap_or_default()).into(),
                    ]
                })
                .collect(),
        ));
    }
    engagement.push(Widget::heading("Engagement Action Items"));
    engagement.push(Widget::bullet_list(
        "Engagement Action Items",
        &repository::ENGAGEMENT_ACTION_ITEMS,
    ));

    let mut columns = vec!["name"];
    columns.extend(COMPLIANCE_AREAS);
    let compliance = vec![
        Widget::heading("Team Compliance Status"),
        Widget::table(
            &columns,
            repository::employee_compliance()
                .iter()
                .map(|e| {
                    std::iter::once(Cell::from(e.name))
                        .chain(
                            e.statuses
                                .iter()
                                .map(|s| Cell::toned(s.label(), status_tone(*s))),
                        )
                        .collect()
                })
                .collect(),
        ),
        Widget::heading("Compliance Action Items"),
        Widget::bullet_list(
            "Compliance Action Items",
            &repository::COMPLIANCE_ACTION_ITEMS,
        ),
    ];

    view.tabs = vec![
        TabSection::new("Engagement Metrics", engagement),
        TabSection::new("Compliance Status", compliance),
    ];
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::context::testing::render as render_with;

    fn tables(view: &DashboardView) -> usize {
        view.all_widgets()
            .iter()
            .filter(|w| matches!(w, Widget::Table { .. }))
            .count()
    }

    #[test]
    fn test_four_engagement_charts_and_status_table() {
        let view = render_with(render, &[], 0);
        let charts = view.tabs[0]
            .widgets
            .iter()
            .filter(|w| matches!(w, Widget::BarChart { .. }))
            .count();
        assert_eq!(charts, 4);
        assert_eq!(tables(&view), 1);
        assert_eq!(view.controls.len(), 4);
    }

    #[test]
    fn test_detail_button_adds_table() {
        let view = render_with(render, &[("action", "careerGrowth")], 0);
        assert_eq!(tables(&view), 2);
        assert!(view.tabs[0]
            .widgets
            .contains(&Widget::heading("careerGrowth Details")));
    }

    #[test]
    fn test_status_colouring() {
        let view = render_with(render, &[], 0);
        let rows = view.tabs[1]
            .widgets
            .iter()
            .find_map(|w| match w {
                Widget::Table { rows, .. } => Some(rows.clone()),
                _ => None,
            })
            .unwrap();
        // Bob, safetyTraining
        assert_eq!(rows[1][1], Cell::toned("non-compliant", Tone::Bad));
        assert_eq!(rows[2][2].tone, Tone::Warn);
    }
}
