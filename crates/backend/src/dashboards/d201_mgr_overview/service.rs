use contracts::shared::widgets::{DashboardView, Series, Slice, TabSection, Widget};

use super::repository;
use crate::dashboards::context::RenderContext;

pub fn render(ctx: &mut RenderContext<'_>) -> DashboardView {
    let today = ctx.today();
    let check_in_day = ctx.date("check_in_date", "Select Date", today);
    let add_learning = ctx.button("add_learning", "Add New Learning Opportunity");
    let give_recognition = ctx.button("give_recognition", "Give Recognition");
    let schedule_check_in = ctx.button("schedule_check_in", "Schedule New Check-in");
    let refresh = ctx.button("refresh", "Refresh Data");
    let export = ctx.button("export", "Export Report");

    let mut view = ctx.view("Management Dashboard");

    view.header = vec![
        Widget::heading("Quick Stats"),
        Widget::columns(vec![
            Widget::metric("Total Projects", "2", "📊"),
            Widget::metric("Team Members", "10", "👥"),
            Widget::metric("Budget Utilization", "95%", "💰"),
        ]),
    ];

    // Resource & Compensation
    let allocation = repository::resource_allocation();
    let compensation = repository::compensation();
    let names: Vec<&str> = compensation.iter().map(|c| c.name).collect();
    let resource_tab = TabSection::new(
        "Resource & Compensation",
        vec![Widget::row(vec![
            vec![
                Widget::heading("Resource Allocation"),
                Widget::pie_chart(
                    "Resource Allocation",
                    allocation
                        .iter()
                        .map(|a| Slice::new(a.project, a.percent))
                        .collect(),
                ),
            ],
            vec![
                Widget::heading("Compensation Review"),
                Widget::multi_bar_chart(
                    &names,
                    vec![
                        Series::new("Current", compensation.iter().map(|c| c.current).collect()),
                        Series::new(
                            "Budgeted",
                            compensation.iter().map(|c| c.budgeted).collect(),
                        ),
                    ],
                    "Category",
                    "Amount",
                )
                .titled("Compensation Comparison"),
            ],
        ])],
    );

    // Employee Development
    let mut development = vec![
        Widget::heading("Employee Development"),
        Widget::text("Upcoming Learning Opportunities"),
    ];
    development.extend(repository::learning_opportunities().iter().map(|o| {
        Widget::info(format!("📚 {} - {}", o.name, o.date.format("%Y-%m-%d")))
    }));
    if add_learning {
        development.push(Widget::text(
            "Form to add new learning opportunity would appear here.",
        ));
    }

    // Feedback & Recognition
    let mut recognition = vec![
        Widget::heading("Feedback and Recognition"),
        Widget::text("Recent Recognitions"),
    ];
    recognition.extend(
        repository::recognitions()
            .iter()
            .map(|r| Widget::success(format!("🏆 {} - {}", r.employee, r.award))),
    );
    if give_recognition {
        recognition.push(Widget::text("Form to give new recognition would appear here."));
    }

    // Upcoming Check-ins
    let mut check_ins = vec![
        Widget::heading("Upcoming Check-ins"),
        Widget::text(format!(
            "Scheduled for {}",
            check_in_day.format("%B %d, %Y")
        )),
    ];
    check_ins.extend(
        repository::check_ins(check_in_day)
            .iter()
            .map(|c| Widget::info(format!("{} {} - {}", c.icon, c.title, c.time))),
    );
    if schedule_check_in {
        check_ins.push(Widget::text("Form to schedule new check-in would appear here."));
    }

    view.tabs = vec![
        resource_tab,
        TabSection::new("Employee Development", development),
        TabSection::new("Feedback & Recognition", recognition),
        TabSection::new("Upcoming Check-ins", check_ins),
    ];

    view.footer.push(Widget::Divider);
    if refresh {
        view.footer.push(Widget::text("Data refreshed!"));
    }
    if export {
        view.footer.push(Widget::text("Report exported!"));
    }

    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::context::testing::render as render_with;

    #[test]
    fn test_tabs_and_quick_stats() {
        let view = render_with(render, &[], 1);
        let labels: Vec<_> = view.tabs.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Resource & Compensation",
                "Employee Development",
                "Feedback & Recognition",
                "Upcoming Check-ins"
            ]
        );
        assert!(view
            .all_widgets()
            .contains(&&Widget::metric("Budget Utilization", "95%", "💰")));
    }

    #[test]
    fn test_check_in_date_defaults_to_today() {
        let view = render_with(render, &[], 1);
        assert!(view
            .all_widgets()
            .contains(&&Widget::text("Scheduled for September 20, 2024")));

        let view = render_with(render, &[("check_in_date", "2024-10-01")], 1);
        assert!(view
            .all_widgets()
            .contains(&&Widget::text("Scheduled for October 01, 2024")));
    }

    #[test]
    fn test_buttons_show_feedback_once() {
        let idle = render_with(render, &[], 1);
        assert_eq!(idle.footer, vec![Widget::Divider]);

        let refreshed = render_with(render, &[("action", "refresh")], 1);
        assert!(refreshed.footer.contains(&Widget::text("Data refreshed!")));
        assert!(!refreshed.footer.contains(&Widget::text("Report exported!")));
    }
}
