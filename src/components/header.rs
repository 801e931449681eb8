//! Top bar: search box, notifications, and the user menu with sign-out.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::ui::{UiState, ViewType};

/// Dashboard header. Sign-out clears the persisted record and the in-memory
/// session; the shell's route guard then redirects to `/login`.
#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let search = RwSignal::new(String::new());
    let menu_open = RwSignal::new(false);

    let user_name = move || auth.get().user.map(|u| u.name).unwrap_or_default();
    let user_role = move || auth.get().user.map(|u| u.role).unwrap_or_default();
    let user_email = move || auth.get().user.map(|u| u.email).unwrap_or_default();
    let user_org = move || auth.get().user.map(|u| u.organization).unwrap_or_default();

    let on_toggle_sidebar = move |_| {
        let next = !ui.get().sidebar_collapsed;
        ui.update(|u| u.sidebar_collapsed = next);
        crate::util::prefs::write_sidebar_collapsed(next);
    };

    let on_settings = move |_| {
        ui.update(|u| u.current_view = ViewType::Settings);
        menu_open.set(false);
    };

    let on_logout = move |_| {
        crate::session::browser::clear();
        auth.update(|a| a.user = None);
        menu_open.set(false);
    };

    view! {
        <header class="header">
            <button class="btn header__menu-toggle" on:click=on_toggle_sidebar title="Toggle sidebar">
                "☰"
            </button>
            <input
                class="header__search"
                type="text"
                placeholder="Search audits, models, or datasets..."
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />

            <span class="header__spacer"></span>

            <button class="btn header__bell" title="Notifications">
                "🔔"
                <span class="header__bell-dot" aria-hidden="true"></span>
            </button>

            <div class="header__user">
                <button class="btn header__user-toggle" on:click=move |_| menu_open.update(|open| *open = !*open)>
                    <span class="header__user-name">{user_name}</span>
                    <span class="header__user-role">{user_role}</span>
                </button>
                <Show when=move || menu_open.get()>
                    <div class="header__user-menu">
                        <div class="header__user-details">
                            <p class="header__user-name">{user_name}</p>
                            <p class="header__user-email">{user_email}</p>
                            <p class="header__user-org">{user_org}</p>
                        </div>
                        <button class="btn header__menu-item" on:click=on_settings>
                            "Account Settings"
                        </button>
                        <button class="btn header__menu-item header__menu-item--danger" on:click=on_logout>
                            "Sign Out"
                        </button>
                    </div>
                </Show>
            </div>
        </header>
    }
}
