use contracts::shared::widgets::{DashboardView, Series, Slice, TabSection, Widget};

use super::repository::{self, RACI_ROLES};
use crate::dashboards::context::RenderContext;

const DURATIONS: [&str; 2] = ["Quarterly", "Yearly"];
const TREND_WEEKS: usize = 12;

fn week_labels() -> Vec<String> {
    (1..=TREND_WEEKS).map(|w| format!("Week {}", w)).collect()
}

pub fn render(ctx: &mut RenderContext<'_>) -> DashboardView {
    let employees: Vec<&str> = repository::EMPLOYEES.iter().map(|(name, _)| *name).collect();
    let employee = ctx.select("employee", "Select Employee", &employees, 0);
    // Only labels the page; the generated series are the same length for both
    let duration = ctx.select("duration", "Select Duration", &DURATIONS, 0);
    let today = ctx.today();

    let mut view = ctx.view("Employee Productivity Dashboard");
    let rng = ctx.rng();

    let score = repository::productivity_score(rng);
    let tasks = repository::task_breakdown(rng);

    view.header = vec![
        Widget::text(format!("{} view", duration)),
        Widget::columns(vec![
            Widget::metric("Employee", &employee, "👤"),
            Widget::metric("Position", repository::position_of(&employee), "💼"),
            Widget::metric("Productivity Score", format!("{:.1}/10", score), "🌟"),
            Widget::metric("Total Tasks", tasks.total, "📋"),
            Widget::metric("Completed Tasks", tasks.completed, "✅"),
        ]),
    ];

    let weeks = week_labels();

    let weekly = repository::weekly_task_completion(rng, TREND_WEEKS);
    let tasks_tab = TabSection::new(
        "Tasks",
        vec![
            Widget::heading("Tasks"),
            Widget::columns(vec![
                Widget::metric("Total Tasks", tasks.total, "📋"),
                Widget::metric("Completed", tasks.completed, "✅"),
                Widget::metric("In Progress", tasks.in_progress, "🔄"),
                Widget::metric("On Track", tasks.on_track, "🎯"),
                Widget::metric("Overdue", tasks.overdue, "⏰"),
            ]),
            Widget::row(vec![
                vec![
                    Widget::heading("Weekly Task Completion Rate"),
                    Widget::line_chart(
                        &weeks,
                        vec![Series::new("Tasks Completed", weekly)],
                        "Week",
                        "Tasks Completed",
                    ),
                ],
                vec![
                    Widget::heading("Task Distribution"),
                    Widget::pie_chart(
                        "Task Distribution",
                        vec![
                            Slice::new("Completed", tasks.completed as f64),
                            Slice::new("On Track", tasks.on_track as f64),
                            Slice::new("Overdue", tasks.overdue as f64),
                        ],
                    ),
                ],
            ]),
        ],
    );

    let comm = repository::communication(rng);
    let email_trend = repository::email_response_trend(rng, TREND_WEEKS);
    let communication_tab = TabSection::new(
        "Communication",
        vec![
            Widget::heading("Communication Efficiency"),
            Widget::columns(vec![
                Widget::metric(
                    "Avg Email Response Time",
                    format!("{:.1} hours", comm.avg_email_response_hours),
                    "📧",
                ),
                Widget::metric("Meetings Attended", comm.meetings_attended, "🗓️"),
                Widget::metric("Feedback Implemented", comm.feedback_implemented, "💡"),
                Widget::metric(
                    "Time in Meetings",
                    format!("{}%", comm.time_in_meetings_pct),
                    "⏱️",
                ),
            ]),
            Widget::heading("Email Response Time Trend"),
            Widget::line_chart(
                &weeks,
                vec![Series::new("Response Time", email_trend)],
                "Week",
                "Response Time (hours)",
            ),
        ],
    );

    let knowledge = repository::knowledge(rng);
    let contributions: Vec<String> = repository::recent_contributions(rng, today)
        .iter()
        .map(|(what, when)| format!("{} - {}", what, when.format("%Y-%m-%d")))
        .collect();
    let knowledge_tab = TabSection::new(
        "Knowledge",
        vec![
            Widget::heading("Knowledge"),
            Widget::columns(vec![
                Widget::metric("Articles Written", knowledge.articles_written, "📝"),
                Widget::metric("Articles Contributed", knowledge.articles_contributed, "💬"),
                Widget::metric("Training Sessions", knowledge.training_sessions, "🎓"),
                Widget::metric("Mentoring Hours", knowledge.mentoring_hours, "🤝"),
                Widget::metric(
                    "Doc Contributions",
                    format!("{} pages", knowledge.documentation_pages),
                    "📚",
                ),
            ]),
            Widget::heading("Recent Contributions"),
            Widget::bullet_list("Recent Knowledge Contributions", &contributions),
        ],
    );

    let meetings = repository::meetings(rng);
    let raci = repository::raci_counts(rng);
    let meetings_tab = TabSection::new(
        "Meetings",
        vec![
            Widget::heading("Meetings"),
            Widget::columns(vec![
                Widget::metric("Meetings Organized", meetings.organized, "📅"),
                Widget::metric("Meetings Attended", meetings.attended, "👥"),
                Widget::metric(
                    "Avg Duration",
                    format!("{:.1} hours", meetings.avg_duration_hours),
                    "⏳",
                ),
                Widget::metric("Effectiveness", format!("{}/10", meetings.effectiveness), "📊"),
                Widget::metric("Weekly Time", format!("{}%", meetings.weekly_time_pct), "🕰️"),
            ]),
            Widget::heading("Role in Meetings (RACI)"),
            Widget::bar_chart(&RACI_ROLES, raci, "Role", "Count"),
        ],
    );

    let learning = repository::learning(rng);
    let learning_tab = TabSection::new(
        "Learning",
        vec![
            Widget::heading("Learning"),
            Widget::columns(vec![
                Widget::metric("Learning Hours", learning.learning_hours, "📚"),
                Widget::metric("Conferences", learning.conferences_attended, "🎤"),
                Widget::metric(
                    "Skill Improvement",
                    format!("{}/10", learning.skill_improvement),
                    "📈",
                ),
                Widget::metric("Courses Completed", learning.courses_completed.len(), "🎓"),
                Widget::metric("Certifications", learning.certifications.len(), "🏅"),
            ]),
            Widget::columns(vec![
                Widget::bullet_list("Courses Completed", &learning.courses_completed),
                Widget::bullet_list("Certifications Achieved", &learning.certifications),
            ]),
        ],
    );

    let code = repository::code_stats(rng);
    let bugs = &code.bugs_fixed;
    let code_tab = TabSection::new(
        "Code",
        vec![
            Widget::heading("Code"),
            Widget::columns(vec![
                Widget::metric("Code Quality", format!("{:.1}/10", code.quality_score), "🏆"),
                Widget::metric("Code Reviews", code.peer_reviews, "👁️"),
                Widget::metric("Refactoring Tasks", code.refactoring_tasks, "🔧"),
                Widget::metric("Features Developed", code.features_developed, "🚀"),
                Widget::metric("Git Commits", code.git_commits, "💻"),
            ]),
            Widget::columns(vec![
                Widget::metric(
                    "Bug Fix Rate",
                    format!("{:.1} bugs/week", code.bug_fix_rate),
                    "🐛",
                ),
                Widget::metric("Critical Bugs Fixed", bugs.critical, "🚨"),
                Widget::metric("High Bugs Fixed", bugs.high, "🔴"),
                Widget::metric("Medium Bugs Fixed", bugs.medium, "🟠"),
                Widget::metric("Low Bugs Fixed", bugs.low, "🟡"),
            ]),
            Widget::heading("Bugs Fixed by Criticality"),
            Widget::pie_chart(
                "Bugs Fixed by Criticality",
                vec![
                    Slice::new("low", bugs.low as f64),
                    Slice::new("medium", bugs.medium as f64),
                    Slice::new("high", bugs.high as f64),
                    Slice::new("critical", bugs.critical as f64),
                ],
            ),
        ],
    );

    view.tabs = vec![
        tasks_tab,
        communication_tab,
        knowledge_tab,
        meetings_tab,
        learning_tab,
        code_tab,
    ];
    view
}
