//! Registration page with a live password-policy checklist.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::types::RegisterData;
use crate::state::auth::AuthState;
use crate::util::validation::{check_password, validate_registration};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let organization = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_some() {
            navigate("/", NavigateOptions::default());
        }
    });

    let checks = Memo::new(move |_| check_password(&password.get()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let profile = RegisterData {
            name: name.get().trim().to_owned(),
            email: email.get().trim().to_owned(),
            organization: organization.get().trim().to_owned(),
            password: password.get(),
        };
        if let Err(msg) = validate_registration(&profile, &confirm.get()) {
            error.set(msg.to_owned());
            return;
        }
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::register(&profile).await;
            match crate::session::manager::resolve_register(outcome, &profile) {
                Some((token, user)) => {
                    crate::session::browser::establish(&token, &user);
                    auth.update(|a| a.user = Some(user));
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/");
                    }
                }
                None => {
                    error.set("Registration failed. Please try again.".to_owned());
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = profile;
    };

    let check_item = move |met: bool, label: &'static str| {
        view! {
            <li class=move || {
                if met { "auth-checklist__item auth-checklist__item--met" } else { "auth-checklist__item" }
            }>
                {label}
            </li>
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Join FairSight"</h1>
                <p class="auth-card__subtitle">"Start auditing AI models for compliance"</p>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Full Name"
                        <input
                            class="auth-input"
                            type="text"
                            placeholder="Enter your full name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Email Address"
                        <input
                            class="auth-input"
                            type="email"
                            placeholder="Enter your email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Organization"
                        <input
                            class="auth-input"
                            type="text"
                            placeholder="Enter your organization"
                            prop:value=move || organization.get()
                            on:input=move |ev| organization.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-input"
                            type="password"
                            placeholder="Create a password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || !password.get().is_empty()>
                        <ul class="auth-checklist">
                            {move || check_item(checks.get().min_length, "At least 8 characters")}
                            {move || check_item(checks.get().has_upper, "One uppercase letter")}
                            {move || check_item(checks.get().has_lower, "One lowercase letter")}
                            {move || check_item(checks.get().has_digit, "One number")}
                            {move || check_item(checks.get().has_symbol, "One symbol")}
                        </ul>
                    </Show>
                    <label class="auth-form__label">
                        "Confirm Password"
                        <input
                            class="auth-input"
                            type="password"
                            placeholder="Confirm your password"
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                    </label>
                    <button
                        class="btn btn--primary"
                        type="submit"
                        disabled=move || busy.get() || !checks.get().all_met()
                    >
                        {move || if busy.get() { "Creating account..." } else { "Create Account" }}
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-message auth-message--error">{move || error.get()}</p>
                </Show>
                <p class="auth-card__footer">
                    "Already have an account? "
                    <A href="/login">"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
