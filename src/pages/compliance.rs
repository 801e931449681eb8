//! Compliance details: law violations with recommendations, filterable by
//! framework and severity.

use leptos::prelude::*;

use crate::data::compliance::{Severity, filter_violations, mock_frameworks, mock_violations};

fn severity_from_value(value: &str) -> Option<Severity> {
    match value {
        "low" => Some(Severity::Low),
        "medium" => Some(Severity::Medium),
        "high" => Some(Severity::High),
        "critical" => Some(Severity::Critical),
        _ => None,
    }
}

fn law_from_value(value: String) -> Option<String> {
    if value == "all" { None } else { Some(value) }
}

#[component]
pub fn CompliancePage() -> impl IntoView {
    let law = RwSignal::new(None::<String>);
    let severity = RwSignal::new(None::<Severity>);

    let filtered = Memo::new(move |_| {
        filter_violations(&mock_violations(), law.get().as_deref(), severity.get())
    });

    view! {
        <div class="page">
            <div class="page__intro">
                <h1>"Compliance Details"</h1>
                <p>"Outstanding regulatory findings and remediation guidance"</p>
            </div>

            <div class="framework-strip">
                {mock_frameworks()
                    .into_iter()
                    .map(|framework| {
                        view! {
                            <div class="framework-strip__card">
                                <span>{framework.name}</span>
                                <span class="framework-strip__score">
                                    {format!("{}%", framework.compliance)}
                                </span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="filter-bar">
                <select
                    class="filter-bar__select"
                    on:change=move |ev| law.set(law_from_value(event_target_value(&ev)))
                >
                    <option value="all">"All frameworks"</option>
                    <option value="EU AI Act">"EU AI Act"</option>
                    <option value="GDPR">"GDPR"</option>
                </select>
                <select
                    class="filter-bar__select"
                    on:change=move |ev| severity.set(severity_from_value(&event_target_value(&ev)))
                >
                    <option value="all">"All severities"</option>
                    <option value="critical">"Critical"</option>
                    <option value="high">"High"</option>
                    <option value="medium">"Medium"</option>
                    <option value="low">"Low"</option>
                </select>
            </div>

            <ul class="violation-list">
                {move || {
                    filtered
                        .get()
                        .into_iter()
                        .map(|violation| {
                            view! {
                                <li class="violation-card">
                                    <div class="violation-card__head">
                                        <h4>{violation.article}</h4>
                                        <span class="badge">{violation.law}</span>
                                        <span class="badge">{violation.severity.label()}</span>
                                        <span class="badge">{violation.status.label()}</span>
                                    </div>
                                    <p class="violation-card__model">{violation.model_name}</p>
                                    <p>{violation.description}</p>
                                    <p class="violation-card__details">{violation.details}</p>
                                    <h5>"Recommendations"</h5>
                                    <ul class="violation-card__recommendations">
                                        {violation
                                            .recommendations
                                            .iter()
                                            .map(|rec| view! { <li>{*rec}</li> })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                    <p class="violation-card__deadline">
                                        "Deadline: "
                                        {violation.deadline}
                                    </p>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </div>
    }
}
