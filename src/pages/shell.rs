//! Guarded dashboard shell: sidebar, header, and the switched main pane.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only protected route. It suspends rendering behind the
//! session-restore loading flag and redirects to `/login` once restore
//! finishes without a user.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::header::Header;
use crate::components::sidebar::Sidebar;
use crate::state::auth::AuthState;
use crate::state::ui::{UiState, ViewType};

#[component]
pub fn ShellPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let navigate = use_navigate();
    crate::util::auth::install_unauth_redirect(auth, navigate);

    view! {
        <Show
            when=move || auth.get().is_authenticated()
            fallback=move || {
                view! {
                    <div class="shell shell--pending">
                        <p>
                            {move || {
                                if auth.get().loading { "Loading..." } else { "Redirecting to login..." }
                            }}
                        </p>
                    </div>
                }
            }
        >
            <div class="shell">
                <Sidebar/>
                <div class="shell__main">
                    <Header/>
                    <main class="shell__content">
                        {move || match ui.get().current_view {
                            ViewType::Dashboard => view! { <super::overview::OverviewPage/> }.into_any(),
                            ViewType::Upload => view! { <super::upload::UploadPage/> }.into_any(),
                            ViewType::Results => view! { <super::results::ResultsPage/> }.into_any(),
                            ViewType::Bias => view! { <super::bias::BiasPage/> }.into_any(),
                            ViewType::Explainability => {
                                view! { <super::explainability::ExplainabilityPage/> }.into_any()
                            }
                            ViewType::Risk => view! { <super::risk::RiskPage/> }.into_any(),
                            ViewType::Compliance => view! { <super::compliance::CompliancePage/> }.into_any(),
                            ViewType::Settings => view! { <super::settings::SettingsPage/> }.into_any(),
                        }}
                    </main>
                </div>
            </div>
        </Show>
    }
}
