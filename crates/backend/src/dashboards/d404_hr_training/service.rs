use contracts::shared::aggregate::{mean, GroupAggregator, Measure};
use contracts::shared::filter::{filter_by_category, CategoryFilter, Sentinel};
use contracts::shared::time_window::TimeWindow;
use contracts::shared::widgets::{DashboardView, TabSection, Tone, Widget};

use super::repository::{self, TrainingCompletion, COMPLETION_RATE, DEPARTMENTS};
use crate::dashboards::context::RenderContext;
use crate::dashboards::d305_org_learning_skills::repository::Availability;

const DEPARTMENT_SENTINEL: Sentinel = Sentinel::ALL_DEPARTMENTS;

/// Rows for one period and department selection.
pub fn select_rows(
    rows: &[TrainingCompletion],
    department: &CategoryFilter,
    period: TimeWindow,
) -> Vec<TrainingCompletion> {
    let in_period: Vec<TrainingCompletion> =
        rows.iter().filter(|r| r.period == period).cloned().collect();
    filter_by_category(&in_period, department)
}

/// Chart points: per-department mean for the sentinel, the raw rows otherwise.
pub fn completion_by_department(
    rows: &[TrainingCompletion],
    department: &CategoryFilter,
) -> Vec<(String, f64)> {
    if department.is_all() {
        GroupAggregator::new(vec![Measure::mean(COMPLETION_RATE)])
            .aggregate(rows)
            .into_iter()
            .map(|row| {
                let value = row.value(COMPLETION_RATE);
                (row.category, value)
            })
            .collect()
    } else {
        rows.iter()
            .map(|r| (r.department.to_string(), r.completion_rate))
            .collect()
    }
}

fn availability_tone(band: Availability) -> Tone {
    match band {
        Availability::High => Tone::Good,
        Availability::Medium => Tone::Warn,
        Availability::Low => Tone::Bad,
    }
}

pub fn render(ctx: &mut RenderContext<'_>) -> DashboardView {
    let department_options = DEPARTMENT_SENTINEL.with_options(&DEPARTMENTS);
    let department = ctx.select("department", "Filter by:", &department_options, 0);
    let period = ctx.select("time_period", "Time period:", &TimeWindow::labels(), 0);
    let department = CategoryFilter::parse(&department, DEPARTMENT_SENTINEL);
    let period = TimeWindow::from_label(&period).unwrap_or_default();

    let mut view = ctx.view("Training & Development Dashboard");
    let all_rows = repository::training_completion(ctx.rng());
    let rows = select_rows(&all_rows, &department, period);
    let rates: Vec<f64> = rows.iter().map(|r| r.completion_rate).collect();
    let average = mean(&rates);

    let overview = TabSection::new(
        "Overview",
        vec![
            Widget::columns(vec![
                Widget::metric(
                    "Average Learning Hours per Employee",
                    repository::AVERAGE_LEARNING_HOURS,
                    "📚",
                ),
                Widget::metric("Training Effectiveness", format!("{:.1}%", average), "📈"),
            ]),
            Widget::text(format!(
                "Training Effectiveness measures the impact of our training programs on employee performance and knowledge retention. The score of {:.1}% indicates the level of success in achieving learning objectives and applying new skills in the workplace.",
                average
            )),
        ],
    );

    let points = completion_by_department(&rows, &department);
    let labels: Vec<&str> = points.iter().map(|(d, _)| d.as_str()).collect();
    let completion = TabSection::new(
        "Training Completion",
        vec![
            Widget::heading("Training Completion Rates by Department"),
            Widget::bar_chart(
                &labels,
                points.iter().map(|(_, v)| *v).collect(),
                "Department",
                "Completion Rate (%)",
            ),
        ],
    );

    let mut skills = vec![Widget::heading("Skills Inventory")];
    skills.extend(repository::SKILLS_INVENTORY.iter().map(|(skill, availability)| {
        Widget::progress(
            format!("{} ({:.0}%)", skill, availability),
            *availability,
            availability_tone(Availability::from_percent(*availability)),
        )
    }));

    view.tabs = vec![
        overview,
        completion,
        TabSection::new("Skills Inventory", skills),
    ];
    view
}
