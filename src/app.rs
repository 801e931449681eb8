//! Root component: context ownership, one-shot session restore, and routing.
//!
//! DESIGN
//! ======
//! The app root owns the `AuthState` and `UiState` signals and provides them
//! via context, so no module holds global session state. The restore effect
//! runs once after mount and ends the loading phase exactly once, whether or
//! not a persisted record was found.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::pages::login::LoginPage;
use crate::pages::register::RegisterPage;
use crate::pages::shell::ShellPage;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::restoring());
    provide_context(auth);

    let ui = RwSignal::new(UiState {
        sidebar_collapsed: crate::util::prefs::read_sidebar_collapsed(),
        ..UiState::default()
    });
    provide_context(ui);

    // One-shot session restore from the persisted cookie record.
    Effect::new(move || {
        if !auth.get_untracked().loading {
            return;
        }
        let user = crate::session::browser::restore();
        auth.set(AuthState {
            user,
            loading: false,
        });
    });

    view! {
        <Title text="FairSight | AI Compliance Platform"/>
        <Router>
            <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                <Route path=path!("/") view=ShellPage/>
                <Route path=path!("/login") view=LoginPage/>
                <Route path=path!("/register") view=RegisterPage/>
            </Routes>
        </Router>
    }
}
