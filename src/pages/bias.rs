//! Bias analysis: attribute bias scores, fairness criteria, and per-group
//! performance with a selectable metric.

use leptos::prelude::*;

use crate::data::bias::{
    PerfMetric, mock_bias_metrics, mock_fairness_metrics, mock_group_performance,
};

#[component]
pub fn BiasPage() -> impl IntoView {
    let selected_metric = RwSignal::new(PerfMetric::Accuracy);

    view! {
        <div class="page">
            <div class="page__intro">
                <h1>"Bias Analysis"</h1>
                <p>"Detected bias across protected attributes and fairness criteria"</p>
            </div>

            <section class="panel">
                <h3>"Bias by Protected Attribute"</h3>
                <ul class="bias-list">
                    {mock_bias_metrics()
                        .into_iter()
                        .map(|metric| {
                            view! {
                                <li class="bias-list__row">
                                    <span class="bias-list__attribute">{metric.attribute}</span>
                                    <div class="bias-list__track">
                                        <div
                                            class="bias-list__fill"
                                            style=format!("width: {:.0}%", metric.bias_score * 100.0)
                                        ></div>
                                    </div>
                                    <span class="bias-list__score">
                                        {format!("{:.2}", metric.bias_score)}
                                    </span>
                                    <span class="badge">{metric.status.label()}</span>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </section>

            <section class="panel">
                <h3>"Fairness Metrics"</h3>
                <table class="fairness-table">
                    <thead>
                        <tr>
                            <th>"Metric"</th>
                            <th>"Value"</th>
                            <th>"Threshold"</th>
                            <th>"Result"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {mock_fairness_metrics()
                            .into_iter()
                            .map(|metric| {
                                let passed = metric.passes();
                                view! {
                                    <tr>
                                        <td>{metric.metric}</td>
                                        <td>{format!("{:.2}", metric.value)}</td>
                                        <td>{format!("{:.2}", metric.threshold)}</td>
                                        <td>
                                            <span class=if passed {
                                                "badge badge--low"
                                            } else {
                                                "badge badge--high"
                                            }>
                                                {if passed { "Pass" } else { "Fail" }}
                                            </span>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </tbody>
                </table>
            </section>

            <section class="panel">
                <h3>"Performance by Group"</h3>
                <div class="metric-tabs">
                    {PerfMetric::all()
                        .into_iter()
                        .map(|metric| {
                            view! {
                                <button
                                    class=move || {
                                        if selected_metric.get() == metric {
                                            "btn metric-tabs__tab metric-tabs__tab--active"
                                        } else {
                                            "btn metric-tabs__tab"
                                        }
                                    }
                                    on:click=move |_| selected_metric.set(metric)
                                >
                                    {metric.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <ul class="group-list">
                    {move || {
                        let metric = selected_metric.get();
                        mock_group_performance()
                            .into_iter()
                            .map(|group| {
                                let value = group.metric(metric);
                                view! {
                                    <li class="group-list__row">
                                        <span class="group-list__name">{group.group}</span>
                                        <div class="group-list__track">
                                            <div
                                                class="group-list__fill"
                                                style=format!("width: {:.0}%", value * 100.0)
                                            ></div>
                                        </div>
                                        <span class="group-list__value">{format!("{:.0}%", value * 100.0)}</span>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </section>
        </div>
    }
}
