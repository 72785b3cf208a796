use leptos::prelude::*;

/// Tab headers over one visible panel. `panel` renders the content of the
/// index held in `active`.
#[component]
pub fn TabStrip<P>(labels: Vec<String>, active: RwSignal<usize>, panel: P) -> impl IntoView
where
    P: Fn(usize) -> AnyView + Send + Sync + 'static,
{
    view! {
        <div class="tab-strip">
            <div class="tab-strip__headers">
                {labels
                    .into_iter()
                    .enumerate()
                    .map(|(idx, label)| {
                        let class = move || {
                            if active.get() == idx {
                                "tab-strip__header tab-strip__header--active"
                            } else {
                                "tab-strip__header"
                            }
                        };
                        view! {
                            <button type="button" class=class on:click=move |_| active.set(idx)>
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="tab-strip__panel">
                {move || panel(active.get())}
            </div>
        </div>
    }
}
