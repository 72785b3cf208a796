use chrono::NaiveDateTime;
use contracts::shared::filter::{apply_selection, FilterSelection, Sentinel};
use contracts::shared::format::format_currency;
use contracts::shared::time_window::TimeWindow;
use contracts::shared::widgets::{Cell, DashboardView, Slice, TabSection, Widget};

use super::repository::{self, Interview, RecruitmentRecord, DEPARTMENTS};
use crate::dashboards::context::RenderContext;

const DEPARTMENT_SENTINEL: Sentinel = Sentinel::ALL_DEPARTMENTS;

fn chart(records: &[RecruitmentRecord], x_label: &str, y_label: &str) -> Widget {
    let labels: Vec<&str> = records.iter().map(|r| r.label).collect();
    Widget::bar_chart(
        &labels,
        records.iter().map(|r| r.value).collect(),
        x_label,
        y_label,
    )
}

/// Window- and department-filtered interviews, earliest first.
pub fn scheduled_interviews(
    interviews: &[Interview],
    selection: &FilterSelection,
    now: NaiveDateTime,
) -> Vec<Interview> {
    let mut selected = apply_selection(interviews, selection, now);
    selected.sort_by_key(Interview::starts_at);
    selected
}

pub fn render(ctx: &mut RenderContext<'_>) -> DashboardView {
    let department_options = DEPARTMENT_SENTINEL.with_options(&DEPARTMENTS);
    let department = ctx.select("department", "Filter by:", &department_options, 0);
    let window = ctx.select("time_period", "Time period:", &TimeWindow::labels(), 0);
    let selection = FilterSelection::parse(&department, &window, DEPARTMENT_SENTINEL);
    let now = ctx.now();

    let view_alert = ctx.button("view_alert", "View Alert");
    let mut view = ctx.view("Recruitment Dashboard");

    let open = apply_selection(&repository::open_positions(), &selection, now);
    let fill = apply_selection(&repository::time_to_fill(), &selection, now);
    let overview = TabSection::new(
        "Overview",
        vec![
            Widget::columns(vec![
                chart(&open, "Department", "Open Positions"),
                chart(&fill, "Position", "Days to Fill"),
            ]),
            Widget::metric(
                "Average cost per hire",
                format_currency(repository::AVERAGE_COST_PER_HIRE),
                "💰",
            ),
        ],
    );

    let pipeline = apply_selection(&repository::candidate_pipeline(), &selection, now);
    let sources = apply_selection(&repository::source_effectiveness(), &selection, now);
    let pipeline_tab = TabSection::new(
        "Candidate Pipeline",
        vec![Widget::columns(vec![
            chart(&pipeline, "Stage", "Number of Candidates"),
            Widget::pie_chart(
                "Source Effectiveness",
                sources
                    .iter()
                    .map(|s| Slice::new(s.label, s.value))
                    .collect(),
            ),
        ])],
    );

    let interviews = scheduled_interviews(
        &repository::upcoming_interviews(ctx.today()),
        &selection,
        now,
    );
    let mut interview_tab = vec![
        Widget::heading("Upcoming Interviews"),
        Widget::text(format!("{} interviews scheduled", interviews.len())),
        Widget::table(
            &["date", "time", "candidate", "position", "department"],
            interviews
                .iter()
                .map(|i| {
                    vec![
                        Cell::from(i.date.format("%Y-%m-%d").to_string()),
                        Cell::from(i.time.format("%I:%M %p").to_string()),
                        Cell::from(i.candidate),
                        Cell::from(i.position),
                        Cell::from(i.department),
                    ]
                })
                .collect(),
        ),
    ];
    if view_alert {
        interview_tab.push(Widget::warning(repository::LONG_OPEN_ALERT));
    }
    interview_tab.push(Widget::bullet_list("Action Items", &repository::ACTION_ITEMS));

    view.tabs = vec![
        overview,
        pipeline_tab,
        TabSection::new("Upcoming Interviews", interview_tab),
    ];
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::context::testing::{render as render_with, test_now};

    fn first_chart_categories(view: &DashboardView) -> Vec<String> {
        view.tabs[0]
            .widgets
            .iter()
            .find_map(|w| match w {
                Widget::Row { columns } => match &columns[0][0] {
                    Widget::BarChart { categories, .. } => Some(categories.clone()),
                    _ => None,
                },
                _ => None,
            })
            .unwrap()
    }

    #[test]
    fn test_default_window_is_last_30_days() {
        // 2024-09-20 minus 30 days is 2024-08-21.
        let view = render_with(render, &[], 0);
        assert_eq!(
            first_chart_categories(&view),
            vec!["Engineering", "Sales", "Finance"]
        );
    }

    #[test]
    fn test_department_filter() {
        let view = render_with(
            render,
            &[("department", "Marketing"), ("time_period", "All time")],
            0,
        );
        assert_eq!(first_chart_categories(&view), vec!["Marketing"]);
    }

    #[test]
    fn test_interviews_sorted_by_date_and_time() {
        let selection = FilterSelection::parse("All Departments", "All time", DEPARTMENT_SENTINEL);
        let today = test_now().date();
        let sorted = scheduled_interviews(&repository::upcoming_interviews(today), &selection, test_now());
        let names: Vec<&str> = sorted.iter().map(|i| i.candidate).collect();
        assert_eq!(
            names,
            vec![
                "John Doe",
                "Jane Smith",
                "Mike Johnson",
                "Sarah Brown",
                "Chris Lee",
                "Emily Chen",
                "David Wilson"
            ]
        );
    }

    #[test]
    fn test_future_interviews_fall_outside_relative_windows() {
        let selection = FilterSelection::parse("All Departments", "Last 30 days", DEPARTMENT_SENTINEL);
        let today = test_now().date();
        let sorted = scheduled_interviews(&repository::upcoming_interviews(today), &selection, test_now());
        assert_eq!(sorted.len(), 3);
        assert!(sorted.iter().all(|i| i.date == today));
    }

    #[test]
    fn test_view_alert_button() {
        let quiet = render_with(render, &[], 0);
        assert!(!quiet.tabs[2].widgets.contains(&Widget::warning(repository::LONG_OPEN_ALERT)));
        let pressed = render_with(render, &[("action", "view_alert")], 0);
        assert!(pressed.tabs[2].widgets.contains(&Widget::warning(repository::LONG_OPEN_ALERT)));
    }
}
