//! Team learning overview, one row per direct report. Per-member figures come
//! from the same generators as the employee drill-down.

use contracts::shared::aggregate::mean;
use contracts::shared::widgets::{Cell, DashboardView, Series, Tone, Widget};

use crate::dashboards::context::RenderContext;
use crate::dashboards::d203_mgr_employee_performance::repository::{learning, Learning, EMPLOYEES};

/// Team target for yearly learning hours.
const HOURS_TARGET: i64 = 40;

pub fn render(ctx: &mut RenderContext<'_>) -> DashboardView {
    let mut view = ctx.view("Team Learning & Skills");
    let rng = ctx.rng();

    let members: Vec<(&str, Learning)> = EMPLOYEES
        .iter()
        .map(|(name, _)| (*name, learning(rng)))
        .collect();

    let names: Vec<&str> = members.iter().map(|(name, _)| *name).collect();
    let hours: Vec<f64> = members
        .iter()
        .map(|(_, l)| l.learning_hours as f64)
        .collect();
    let below_target = members
        .iter()
        .filter(|(_, l)| l.learning_hours < HOURS_TARGET)
        .count();

    view.header = vec![Widget::columns(vec![
        Widget::metric("Avg Learning Hours", format!("{:.1}", mean(&hours)), "📚"),
        Widget::metric(
            "Courses Completed",
            members
                .iter()
                .map(|(_, l)| l.courses_completed.len())
                .sum::<usize>(),
            "🎓",
        ),
        Widget::metric(
            "Certifications",
            members
                .iter()
                .map(|(_, l)| l.certifications.len())
                .sum::<usize>(),
            "🏅",
        ),
        Widget::metric("Below Target", below_target, "⚠️"),
    ])];

    view.header.push(Widget::heading("Learning Hours by Team Member"));
    view.header
        .push(Widget::bar_chart(&names, hours, "Team Member", "Learning Hours"));
    view.header.push(
        Widget::multi_bar_chart(
            &names,
            vec![
                Series::new(
                    "Courses",
                    members
                        .iter()
                        .map(|(_, l)| l.courses_completed.len() as f64)
                        .collect(),
                ),
                Series::new(
                    "Certifications",
                    members
                        .iter()
                        .map(|(_, l)| l.certifications.len() as f64)
                        .collect(),
                ),
            ],
            "Team Member",
            "Count",
        )
        .titled("Courses and Certifications"),
    );

    view.footer.push(Widget::heading("Learning Details"));
    view.footer.push(Widget::table(
        &[
            "Team Member",
            "Learning Hours",
            "Conferences",
            "Skill Improvement",
            "Courses Completed",
            "Certifications",
        ],
        members
            .iter()
            .map(|(name, l)| {
                let tone = if l.learning_hours < HOURS_TARGET {
                    Tone::Warn
                } else {
                    Tone::Good
                };
                vec![
                    Cell::from(*name),
                    Cell::toned(l.learning_hours.to_string(), tone),
                    l.conferences_attended.to_string().into(),
                    format!("{}/10", l.skill_improvement).into(),
                    l.courses_completed.join(", ").into(),
                    l.certifications.join(", ").into(),
                ]
            })
            .collect(),
    ));

    if below_target > 0 {
        view.footer.push(Widget::warning(format!(
            "{} team member(s) logged fewer than {} learning hours. Consider blocking time for training.",
            below_target, HOURS_TARGET
        )));
    } else {
        view.footer
            .push(Widget::success("Every team member is on track with learning goals."));
    }

    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::context::testing::render as render_with;

    #[test]
    fn test_one_row_per_team_member() {
        let view = render_with(render, &[], 2);
        let table = view
            .footer
            .iter()
            .find_map(|w| match w {
                Widget::Table { rows, .. } => Some(rows.len()),
                _ => None,
            })
            .unwrap();
        assert_eq!(table, EMPLOYEES.len());
    }

    #[test]
    fn test_target_message_present() {
        let view = render_with(render, &[], 2);
        let last = view.footer.last().unwrap();
        assert!(matches!(last, Widget::Alert { .. }));
    }
}
