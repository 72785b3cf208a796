use contracts::shared::widgets::{DashboardView, Series, Slice, TabSection, Widget};

use super::repository::{self, DEFAULT_PERIOD, PAYROLL, TIME_PERIODS};
use crate::dashboards::context::RenderContext;

pub fn render(ctx: &mut RenderContext<'_>) -> DashboardView {
    let labels: Vec<&str> = TIME_PERIODS.iter().map(|(label, _)| *label).collect();
    let period = ctx.select("time_period", "Select time period", &labels, DEFAULT_PERIOD);
    let months = TIME_PERIODS
        .iter()
        .find(|(label, _)| *label == period)
        .map(|(_, months)| *months)
        .unwrap_or(TIME_PERIODS[DEFAULT_PERIOD].1);

    let mut view = ctx.view("HR Metrics Dashboard");
    let rows = repository::last_months(months);
    let month_labels: Vec<&str> = rows.iter().map(|r| r.month).collect();

    let turnover = TabSection::new(
        "Turnover Rates",
        vec![
            Widget::heading("Turnover Rates"),
            Widget::multi_bar_chart(
                &month_labels,
                vec![
                    Series::new("Voluntary Turnover", rows.iter().map(|r| r.voluntary).collect()),
                    Series::new(
                        "Involuntary Turnover",
                        rows.iter().map(|r| r.involuntary).collect(),
                    ),
                ],
                "Month",
                "Turnover Rate (%)",
            )
            .titled("Turnover Rates Over Time"),
            Widget::bullet_list(
                "This chart shows the voluntary and involuntary turnover rates over time.",
                &repository::TURNOVER_NOTES,
            ),
        ],
    );

    let staffing = TabSection::new(
        "Staffing Levels",
        vec![
            Widget::heading("Staffing Levels"),
            Widget::line_chart(
                &month_labels,
                vec![
                    Series::new("Actual Staffing", rows.iter().map(|r| r.actual).collect()),
                    Series::new("Required Staffing", rows.iter().map(|r| r.required).collect()),
                ],
                "Month",
                "Staffing Level",
            ),
            Widget::bullet_list(
                "This chart compares actual staffing levels to required staffing levels over time.",
                &repository::STAFFING_NOTES,
            ),
        ],
    );

    let mut payroll = vec![
        Widget::heading("Payroll Distribution"),
        Widget::pie_chart(
            "Payroll Distribution",
            PAYROLL
                .iter()
                .map(|(category, value, _)| Slice::new(*category, *value))
                .collect(),
        ),
        Widget::heading("Payroll Distribution Details"),
    ];
    for (category, value, description) in PAYROLL.iter() {
        payroll.push(Widget::metric(*category, format!("{:.0}%", value), "💰"));
        payroll.push(Widget::text(*description));
    }
    payroll.push(Widget::bullet_list(
        "How the total payroll is allocated",
        &repository::PAYROLL_NOTES,
    ));

    let absenteeism = TabSection::new(
        "Absenteeism Rates",
        vec![
            Widget::heading("Absenteeism Rates"),
            Widget::line_chart(
                &month_labels,
                vec![Series::new(
                    "Absenteeism Rate",
                    rows.iter().map(|r| r.absenteeism).collect(),
                )],
                "Month",
                "Absenteeism Rate (%)",
            ),
            Widget::text(repository::ABSENTEEISM_NOTE),
        ],
    );

    view.tabs = vec![
        turnover,
        staffing,
        TabSection::new("Payroll Distribution", payroll),
        absenteeism,
    ];
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::context::testing::render as render_with;

    fn turnover_months(view: &DashboardView) -> Vec<String> {
        match &view.tabs[0].widgets[1] {
            Widget::MultiBarChart { categories, .. } => categories.clone(),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_default_period_is_six_months() {
        let view = render_with(render, &[], 0);
        assert_eq!(turnover_months(&view).len(), 6);
        assert_eq!(turnover_months(&view)[0], "Jan");
    }

    #[test]
    fn test_last_month() {
        let view = render_with(render, &[("time_period", "Last Month")], 0);
        assert_eq!(turnover_months(&view), vec!["Jun"]);
    }

    #[test]
    fn test_payroll_details_per_category() {
        let view = render_with(render, &[], 0);
        let metrics = view.tabs[2]
            .widgets
            .iter()
            .filter(|w| matches!(w, Widget::Metric { .. }))
            .count();
        assert_eq!(metrics, PAYROLL.len());
    }
}
