//! Explainability report: global SHAP importances, feature interactions, and
//! per-sample local explanations.

use leptos::prelude::*;

use crate::data::explainability::{
    Direction, mock_interactions, mock_sample_predictions, mock_shap_values,
};

/// Which explanation scope is shown.
#[derive(Clone, Copy, PartialEq, Eq)]
enum ExplanationView {
    Global,
    Local,
}

#[component]
pub fn ExplainabilityPage() -> impl IntoView {
    let selected_view = RwSignal::new(ExplanationView::Global);
    let selected_sample = RwSignal::new(0usize);

    view! {
        <div class="page">
            <div class="page__intro">
                <h1>"Explainability Report"</h1>
                <p>"SHAP-based feature attributions for the audited model"</p>
            </div>

            <div class="metric-tabs">
                <button
                    class=move || tab_class(selected_view.get() == ExplanationView::Global)
                    on:click=move |_| selected_view.set(ExplanationView::Global)
                >
                    "Global"
                </button>
                <button
                    class=move || tab_class(selected_view.get() == ExplanationView::Local)
                    on:click=move |_| selected_view.set(ExplanationView::Local)
                >
                    "Local"
                </button>
            </div>

            <Show
                when=move || selected_view.get() == ExplanationView::Global
                fallback=move || view! { <LocalExplanations selected_sample=selected_sample/> }
            >
                <section class="panel">
                    <h3>"Feature Importance"</h3>
                    <ul class="shap-list">
                        {mock_shap_values()
                            .into_iter()
                            .map(|value| {
                                let negative = value.direction() == Direction::Negative;
                                view! {
                                    <li class="shap-list__row">
                                        <span class="shap-list__feature">{value.feature}</span>
                                        <div class="shap-list__track">
                                            <div
                                                class=if negative {
                                                    "shap-list__fill shap-list__fill--negative"
                                                } else {
                                                    "shap-list__fill"
                                                }
                                                style=format!(
                                                    "width: {:.0}%",
                                                    value.importance.abs() * 100.0,
                                                )
                                            ></div>
                                        </div>
                                        <span class="shap-list__value">
                                            {format!("{:+.2}", value.importance)}
                                        </span>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </section>

                <section class="panel">
                    <h3>"Feature Interactions"</h3>
                    <ul class="interaction-list">
                        {mock_interactions()
                            .into_iter()
                            .map(|interaction| {
                                view! {
                                    <li class="interaction-list__row">
                                        <span>{interaction.features}</span>
                                        <span class="interaction-list__impact">
                                            {format!("{:+.2}", interaction.impact)}
                                        </span>
                                        <span class="interaction-list__desc">
                                            {interaction.description}
                                        </span>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </section>
            </Show>
        </div>
    }
}

fn tab_class(active: bool) -> &'static str {
    if active {
        "btn metric-tabs__tab metric-tabs__tab--active"
    } else {
        "btn metric-tabs__tab"
    }
}

#[component]
fn LocalExplanations(selected_sample: RwSignal<usize>) -> impl IntoView {
    let samples = mock_sample_predictions();
    let tabs = samples.clone();

    view! {
        <section class="panel">
            <h3>"Sample Predictions"</h3>
            <div class="metric-tabs">
                {tabs
                    .into_iter()
                    .enumerate()
                    .map(|(index, sample)| {
                        view! {
                            <button
                                class=move || tab_class(selected_sample.get() == index)
                                on:click=move |_| selected_sample.set(index)
                            >
                                {format!("Sample {}", sample.id)}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            {move || {
                samples
                    .get(selected_sample.get())
                    .cloned()
                    .map(|sample| {
                        view! {
                            <div class="sample-card">
                                <p class="sample-card__headline">
                                    {sample.prediction}
                                    " ("
                                    {format!("{:.0}% confidence", sample.confidence * 100.0)}
                                    ")"
                                </p>
                                <ul class="sample-card__features">
                                    {sample
                                        .top_features
                                        .iter()
                                        .map(|feature| {
                                            view! {
                                                <li>
                                                    <span>{feature.name}</span>
                                                    <span class="sample-card__impact">
                                                        {format!("{:+.2}", feature.impact)}
                                                    </span>
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            </div>
                        }
                    })
            }}
        </section>
    }
}
