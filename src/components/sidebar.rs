//! Collapsible navigation sidebar over the `ViewType` items.

use leptos::prelude::*;

use crate::state::ui::{UiState, ViewType};

#[component]
pub fn Sidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_collapse = move |_| {
        let next = !ui.get().sidebar_collapsed;
        ui.update(|u| u.sidebar_collapsed = next);
        crate::util::prefs::write_sidebar_collapsed(next);
    };

    view! {
        <aside class=move || {
            if ui.get().sidebar_collapsed { "sidebar sidebar--collapsed" } else { "sidebar" }
        }>
            <div class="sidebar__brand">
                <Show when=move || !ui.get().sidebar_collapsed>
                    <div>
                        <h1 class="sidebar__title">"FairSight"</h1>
                        <p class="sidebar__subtitle">"AI Compliance Platform"</p>
                    </div>
                </Show>
                <button class="btn sidebar__collapse" on:click=on_collapse title="Collapse sidebar">
                    {move || if ui.get().sidebar_collapsed { "»" } else { "«" }}
                </button>
            </div>
            <nav class="sidebar__nav">
                <ul>
                    {ViewType::all()
                        .into_iter()
                        .map(|item| {
                            view! {
                                <li>
                                    <button
                                        class=move || {
                                            if ui.get().current_view == item {
                                                "sidebar__item sidebar__item--active"
                                            } else {
                                                "sidebar__item"
                                            }
                                        }
                                        on:click=move |_| ui.update(|u| u.current_view = item)
                                    >
                                        <Show when=move || !ui.get().sidebar_collapsed>
                                            {item.label()}
                                        </Show>
                                    </button>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </nav>
        </aside>
    }
}
