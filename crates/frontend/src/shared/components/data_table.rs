use contracts::shared::widgets::{Cell, Tone};
use leptos::prelude::*;

pub fn tone_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Neutral => "",
        Tone::Good => "tone--good",
        Tone::Warn => "tone--warn",
        Tone::Bad => "tone--bad",
    }
}

#[component]
pub fn DataTable(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> impl IntoView {
    view! {
        <div class="table-wrapper">
            <table class="table">
                <thead>
                    <tr>
                        {columns
                            .into_iter()
                            .map(|c| view! { <th class="table__header-cell">{c}</th> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|row| {
                            view! {
                                <tr class="table__row">
                                    {row
                                        .into_iter()
                                        .map(|cell| {
                                            let class = format!("table__cell {}", tone_class(cell.tone));
                                            view! { <td class=class>{cell.text}</td> }
                                        })
                                        .collect_view()}
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}
