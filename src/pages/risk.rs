//! Risk assessment: filterable risk items and regulatory framework summary.

use leptos::prelude::*;

use crate::data::risk::{filter_risks, mock_assessments, mock_regulatory_frameworks};

const CATEGORIES: &[&str] = &[
    "Algorithmic Transparency",
    "Bias and Discrimination",
    "Data Quality",
    "Human Oversight",
    "Accuracy and Robustness",
];

const REGULATIONS: &[&str] = &["EU AI Act", "GDPR"];

fn option_from_value(value: String) -> Option<String> {
    if value == "all" { None } else { Some(value) }
}

#[component]
pub fn RiskPage() -> impl IntoView {
    let category = RwSignal::new(None::<String>);
    let regulation = RwSignal::new(None::<String>);

    let filtered = Memo::new(move |_| {
        filter_risks(
            &mock_assessments(),
            category.get().as_deref(),
            regulation.get().as_deref(),
        )
    });

    view! {
        <div class="page">
            <div class="page__intro">
                <h1>"Risk Assessment"</h1>
                <p>"Regulatory risk posture across the audited model portfolio"</p>
            </div>

            <div class="filter-bar">
                <select
                    class="filter-bar__select"
                    on:change=move |ev| category.set(option_from_value(event_target_value(&ev)))
                >
                    <option value="all">"All categories"</option>
                    {CATEGORIES
                        .iter()
                        .map(|c| view! { <option value=*c>{*c}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <select
                    class="filter-bar__select"
                    on:change=move |ev| regulation.set(option_from_value(event_target_value(&ev)))
                >
                    <option value="all">"All regulations"</option>
                    {REGULATIONS
                        .iter()
                        .map(|r| view! { <option value=*r>{*r}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </div>

            <section class="panel">
                <h3>"Identified Risks"</h3>
                <ul class="risk-list">
                    {move || {
                        filtered
                            .get()
                            .into_iter()
                            .map(|risk| {
                                view! {
                                    <li class="risk-list__row">
                                        <div class="risk-list__head">
                                            <h4>{risk.category}</h4>
                                            <span class=format!("badge {}", risk.risk_level.css_class())>
                                                {risk.risk_level.label()}
                                            </span>
                                            <span class="badge">{risk.status.label()}</span>
                                        </div>
                                        <p>{risk.description}</p>
                                        <p class="risk-list__regulation">{risk.regulation}</p>
                                        <p class="risk-list__mitigation">
                                            "Mitigation: "
                                            {risk.mitigation}
                                        </p>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </section>

            <section class="panel">
                <h3>"Regulatory Frameworks"</h3>
                <div class="framework-grid">
                    {mock_regulatory_frameworks()
                        .into_iter()
                        .map(|framework| {
                            view! {
                                <div class="framework-card">
                                    <div class="framework-card__head">
                                        <h4>{framework.name}</h4>
                                        <span class="badge">{framework.status}</span>
                                    </div>
                                    <p>{framework.description}</p>
                                    <p class="framework-card__score">
                                        {format!("{}% compliant", framework.compliance)}
                                    </p>
                                    <ul class="framework-card__requirements">
                                        {framework
                                            .requirements
                                            .iter()
                                            .map(|req| view! { <li>{*req}</li> })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>
        </div>
    }
}
