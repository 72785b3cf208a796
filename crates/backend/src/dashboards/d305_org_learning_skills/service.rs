use contracts::shared::widgets::{Cell, DashboardView, Series, TabSection, Tone, Widget};

use super::repository::{self, Availability};
use crate::dashboards::context::RenderContext;

fn band_tone(band: Availability) -> Tone {
    match band {
        Availability::High => Tone::Good,
        Availability::Medium => Tone::Warn,
        Availability::Low => Tone::Bad,
    }
}

pub fn render(ctx: &mut RenderContext<'_>) -> DashboardView {
    let mut view = ctx.view("Learning & Skills Dashboard");
    let inventory = repository::skills_inventory(ctx.rng());
    let training = repository::training_completion(ctx.rng());

    let completed: Vec<f64> = training.iter().map(|t| t.completed).collect();
    let scarce: Vec<&str> = inventory
        .iter()
        .filter(|s| s.band() == Availability::Low)
        .map(|s| s.skill)
        .collect();
    view.header = vec![Widget::columns(vec![
        Widget::metric("Skills Tracked", inventory.len(), "🧠"),
        Widget::metric(
            "Average Training Completion",
            format!("{:.1}%", contracts::shared::aggregate::mean(&completed)),
            "🎓",
        ),
        Widget::metric("Low Availability Skills", scarce.len(), "⚠️"),
    ])];

    let skills: Vec<&str> = inventory.iter().map(|s| s.skill).collect();
    let mut inventory_tab = vec![
        Widget::bar_chart(
            &skills,
            inventory.iter().map(|s| s.availability).collect(),
            "Skill",
            "Availability (%)",
        )
        .titled("Skill Availability"),
        Widget::table(
            &["Skill", "Proficient Employees", "Availability", "Level"],
            inventory
                .iter()
                .map(|s| {
                    let band = s.band();
                    vec![
                        Cell::from(s.skill),
                        Cell::from(s.proficient.to_string()),
                        Cell::from(format!("{:.0}%", s.availability)),
                        Cell::toned(band.label(), band_tone(band)),
                    ]
                })
                .collect(),
        ),
    ];
    if scarce.is_empty() {
        inventory_tab.push(Widget::success("Every tracked skill has at least medium availability."));
    } else {
        inventory_tab.push(Widget::warning(format!(
            "Low availability: {}. Consider targeted training or hiring.",
            scarce.join(", ")
        )));
    }

    let departments: Vec<&str> = training.iter().map(|t| t.department).collect();
    let training_tab = vec![
        Widget::multi_bar_chart(
            &departments,
            vec![
                Series::new("Completed", completed),
                Series::new("In Progress", training.iter().map(|t| t.in_progress).collect()),
            ],
            "Department",
            "Employees (%)",
        )
        .titled("Training Completion by Department"),
        Widget::table(
            &["Department", "Completed", "In Progress"],
            training
                .iter()
                .map(|t| {
                    vec![
                        Cell::from(t.department),
                        Cell::from(format!("{:.0}%", t.completed)),
                        Cell::from(format!("{:.0}%", t.in_progress)),
                    ]
                })
                .collect(),
        ),
    ];

    view.tabs = vec![
        TabSection::new("Skills Inventory", inventory_tab),
        TabSection::new("Training Completion", training_tab),
    ];
    view
}
