//! Upload-and-audit view with a simulated upload pipeline.
//!
//! Selected files are classified client-side and appear after a fixed delay;
//! nothing leaves the browser.

use leptos::prelude::*;

use crate::data::upload::{FRAMEWORKS, UploadedFile};

#[component]
pub fn UploadPage() -> impl IntoView {
    let files = RwSignal::new(Vec::<UploadedFile>::new());
    let uploading = RwSignal::new(false);
    let framework = RwSignal::new("tensorflow".to_owned());

    let bias_detection = RwSignal::new(true);
    let explainability = RwSignal::new(true);
    let fairness = RwSignal::new(true);
    let risk_assessment = RwSignal::new(true);

    let on_file_input = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let Some(input) = ev
                .target()
                .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            let Some(list) = input.files() else {
                return;
            };
            let mut picked = Vec::new();
            for index in 0..list.length() {
                if let Some(file) = list.get(index) {
                    picked.push((file.name(), file.size()));
                }
            }
            if picked.is_empty() {
                return;
            }
            uploading.set(true);
            leptos::task::spawn_local(async move {
                // Simulated transfer time.
                gloo_timers::future::sleep(std::time::Duration::from_secs(2)).await;
                files.update(|existing| {
                    for (name, size) in picked {
                        existing.push(UploadedFile {
                            id: uuid::Uuid::new_v4().to_string(),
                            kind: crate::data::upload::classify_file(&name),
                            size: crate::data::upload::format_size(size),
                            name,
                        });
                    }
                });
                uploading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_start_audit = move |_| {
        #[cfg(feature = "hydrate")]
        log::info!(
            "audit requested: framework={}, bias={}, explainability={}, fairness={}, risk={}",
            framework.get(),
            bias_detection.get(),
            explainability.get(),
            fairness.get(),
            risk_assessment.get()
        );
    };

    let config_toggle = move |label: &'static str, flag: RwSignal<bool>| {
        view! {
            <label class="upload-config__toggle">
                <input
                    type="checkbox"
                    prop:checked=move || flag.get()
                    on:change=move |_| flag.update(|v| *v = !*v)
                />
                {label}
            </label>
        }
    };

    view! {
        <div class="page">
            <div class="page__intro">
                <h1>"Upload & Audit"</h1>
                <p>"Upload your ML models and datasets to begin compliance auditing"</p>
            </div>

            <div class="panel-grid">
                <section class="panel">
                    <h3>"File Upload"</h3>
                    <label class="upload-dropzone">
                        <input type="file" multiple on:change=on_file_input/>
                        <Show
                            when=move || !uploading.get()
                            fallback=|| view! { <p>"Uploading..."</p> }
                        >
                            <p>"Drop model or dataset files here, or click to browse"</p>
                        </Show>
                    </label>
                    <ul class="upload-files">
                        {move || {
                            files
                                .get()
                                .into_iter()
                                .map(|file| {
                                    view! {
                                        <li class="upload-files__row">
                                            <span>{file.name}</span>
                                            <span class="upload-files__size">{file.size}</span>
                                            <span class="badge">{file.kind.label()}</span>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </section>

                <section class="panel">
                    <h3>"Audit Configuration"</h3>
                    <label class="upload-config__label">
                        "ML Framework"
                        <select
                            class="filter-bar__select"
                            on:change=move |ev| framework.set(event_target_value(&ev))
                        >
                            {FRAMEWORKS
                                .iter()
                                .map(|name| view! { <option value=*name>{*name}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    <div class="upload-config">
                        {config_toggle("Bias detection", bias_detection)}
                        {config_toggle("Explainability report", explainability)}
                        {config_toggle("Fairness metrics", fairness)}
                        {config_toggle("Risk assessment", risk_assessment)}
                    </div>
                    <button
                        class="btn btn--primary"
                        disabled=move || files.get().is_empty() || uploading.get()
                        on:click=on_start_audit
                    >
                        "Start Audit"
                    </button>
                </section>
            </div>
        </div>
    }
}
