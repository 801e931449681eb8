//! Account settings: identity summary and sign-out.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let on_logout = move |_| {
        crate::session::browser::clear();
        auth.update(|a| a.user = None);
    };

    view! {
        <div class="page">
            <div class="page__intro">
                <h1>"Settings"</h1>
                <p>"Your account details"</p>
            </div>

            <section class="panel">
                <h3>"Account"</h3>
                {move || {
                    auth.get()
                        .user
                        .map(|user| {
                            view! {
                                <dl class="account-details">
                                    <dt>"Name"</dt>
                                    <dd>{user.name}</dd>
                                    <dt>"Email"</dt>
                                    <dd>{user.email}</dd>
                                    <dt>"Role"</dt>
                                    <dd>{user.role}</dd>
                                    <dt>"Organization"</dt>
                                    <dd>{user.organization}</dd>
                                </dl>
                            }
                        })
                }}
                <button class="btn btn--danger" on:click=on_logout>
                    "Sign Out"
                </button>
            </section>
        </div>
    }
}
