use contracts::shared::filter::Sentinel;
use contracts::shared::time_window::TimeWindow;
use contracts::shared::widgets::{DashboardView, Series, Slice, TabSection, Widget};

use super::repository::{self, Distribution, DIVERSITY_HIRING, FILTER_GROUPS};
use crate::dashboards::context::RenderContext;

const EMPLOYEE_SENTINEL: Sentinel = Sentinel::ALL_EMPLOYEES;

fn pie(title: &str, distribution: &Distribution) -> Widget {
    Widget::pie_chart(
        title,
        distribution
            .iter()
            .map(|(name, value)| Slice::new(*name, *value))
            .collect(),
    )
}

pub fn render(ctx: &mut RenderContext<'_>) -> DashboardView {
    // Both selectors are shown; the figures are static.
    ctx.select(
        "filter_by",
        "Filter by:",
        &EMPLOYEE_SENTINEL.with_options(&FILTER_GROUPS),
        0,
    );
    ctx.select("time_period", "Time period:", &TimeWindow::labels(), 0);
    let mut view = ctx.view("Employee Demographics & Diversity Dashboard");

    view.header = vec![Widget::metric(
        "Diversity Index",
        format!("{} out of 100", repository::DIVERSITY_INDEX),
        "🌍",
    )];

    let demographics = TabSection::new(
        "Demographics",
        vec![Widget::row(vec![
            vec![
                pie("Gender Distribution", &repository::GENDER),
                pie("Ethnicity/Race Representation", &repository::ETHNICITY),
            ],
            vec![
                pie("Age Demographics", &repository::AGE),
                pie("Tenure Distribution", &repository::TENURE),
            ],
        ])],
    );

    let years: Vec<&str> = DIVERSITY_HIRING.iter().map(|(year, _, _)| *year).collect();
    let diversity = TabSection::new(
        "Diversity Metrics",
        vec![Widget::multi_bar_chart(
            &years,
            vec![
                Series::new("Diverse Hires", DIVERSITY_HIRING.iter().map(|h| h.1).collect()),
                Series::new("Non-Diverse Hires", DIVERSITY_HIRING.iter().map(|h| h.2).collect()),
            ],
            "Year",
            "Hires (%)",
        )
        .titled("Diversity Hiring Metrics")],
    );

    view.tabs = vec![demographics, diversity];
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::context::testing::render as render_with;

    #[test]
    fn test_selectors_do_not_change_figures() {
        let plain = render_with(render, &[], 0);
        let filtered = render_with(
            render,
            &[("filter_by", "By Role"), ("time_period", "All time")],
            0,
        );
        assert_eq!(plain.tabs, filtered.tabs);
        assert_ne!(plain.controls, filtered.controls);
    }

    #[test]
    fn test_four_pies() {
        let view = render_with(render, &[], 0);
        let pies = view
            .all_widgets()
            .iter()
            .filter(|w| matches!(w, Widget::PieChart { .. }))
            .count();
        assert_eq!(pies, 4);
    }
}
