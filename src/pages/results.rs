//! Audit-results table with status filter and model-name search.

use leptos::prelude::*;

use crate::data::audits::{AuditResult, AuditStatus, filter_results, mock_results, score_band};

fn status_from_value(value: &str) -> Option<AuditStatus> {
    match value {
        "completed" => Some(AuditStatus::Completed),
        "running" => Some(AuditStatus::Running),
        "failed" => Some(AuditStatus::Failed),
        _ => None,
    }
}

#[component]
pub fn ResultsPage() -> impl IntoView {
    let status = RwSignal::new(None::<AuditStatus>);
    let search = RwSignal::new(String::new());

    let filtered = Memo::new(move |_| filter_results(&mock_results(), status.get(), &search.get()));

    view! {
        <div class="page">
            <div class="page__intro">
                <h1>"Audit Results"</h1>
                <p>"Review completed and running compliance audits"</p>
            </div>

            <div class="filter-bar">
                <input
                    class="filter-bar__search"
                    type="text"
                    placeholder="Search by model name..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <select
                    class="filter-bar__select"
                    on:change=move |ev| status.set(status_from_value(&event_target_value(&ev)))
                >
                    <option value="all">"All statuses"</option>
                    <option value="completed">"Completed"</option>
                    <option value="running">"Running"</option>
                    <option value="failed">"Failed"</option>
                </select>
            </div>

            <Show
                when=move || !filtered.get().is_empty()
                fallback=move || {
                    view! {
                        <p class="empty-state">
                            "No results found. Try adjusting your search or filter criteria."
                        </p>
                    }
                }
            >
                <table class="results-table">
                    <thead>
                        <tr>
                            <th>"Model"</th>
                            <th>"Status"</th>
                            <th>"Risk"</th>
                            <th>"Compliance"</th>
                            <th>"Bias"</th>
                            <th>"Fairness"</th>
                            <th>"Issues"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || filtered.get().into_iter().map(result_row).collect::<Vec<_>>()}
                    </tbody>
                </table>
            </Show>
        </div>
    }
}

fn result_row(result: AuditResult) -> impl IntoView {
    let score_cell = |score: u8| {
        view! {
            <td class=score_band(score).css_class()>
                {if score == 0 { "-".to_owned() } else { format!("{score}%") }}
            </td>
        }
    };

    view! {
        <tr>
            <td>
                <div class="results-table__model">{result.model_name}</div>
                <div class="results-table__dates">
                    {result.created_at}
                    {result.completed_at.map(|done| format!(" -> {done}"))}
                </div>
            </td>
            <td>
                <span class="badge">{result.status.label()}</span>
            </td>
            <td>
                <span class=format!("badge {}", result.risk_level.css_class())>
                    {result.risk_level.label()}
                </span>
            </td>
            {score_cell(result.compliance_score)}
            {score_cell(result.bias_score)}
            {score_cell(result.fairness_score)}
            <td>{result.issues}</td>
        </tr>
    }
}
