//! Dashboard overview: stat cards, bias trend, risk distribution, and the
//! recent-audit list.

use leptos::prelude::*;

use crate::components::stat_card::StatCard;
use crate::data::overview::{mock_bias_trend, mock_recent_audits, mock_risk_distribution, mock_stats};

#[component]
pub fn OverviewPage() -> impl IntoView {
    let stats = mock_stats();

    view! {
        <div class="page">
            <div class="page__intro">
                <h1>"Compliance Dashboard"</h1>
                <p>"Monitor your AI models' fairness, bias, and regulatory compliance"</p>
            </div>

            <div class="stat-grid">
                <StatCard
                    label="Total Models Audited"
                    value=stats.models_audited.to_string()
                    note="+12% from last month"
                    note_class="stat-card__note--good"
                />
                <StatCard
                    label="Compliance Score"
                    value=format!("{}%", stats.compliance_score)
                    note="Above threshold"
                    note_class="stat-card__note--good"
                />
                <StatCard
                    label="High Risk Models"
                    value=stats.high_risk_models.to_string()
                    note="Requires attention"
                    note_class="stat-card__note--bad"
                />
                <StatCard
                    label="Active Audits"
                    value=stats.active_audits.to_string()
                    note="Currently running"
                />
            </div>

            <div class="panel-grid">
                <section class="panel">
                    <h3>"Bias Score Trend"</h3>
                    <div class="trend-chart">
                        {mock_bias_trend()
                            .into_iter()
                            .map(|point| {
                                view! {
                                    <div class="trend-chart__column">
                                        <div
                                            class="trend-chart__bar"
                                            style=format!("height: {:.0}%", point.score * 100.0)
                                            title=format!("{:.1}%", point.score * 100.0)
                                        ></div>
                                        <span class="trend-chart__label">{point.month}</span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </section>

                <section class="panel">
                    <h3>"Risk Level Distribution"</h3>
                    <ul class="distribution">
                        {mock_risk_distribution()
                            .into_iter()
                            .map(|slice| {
                                view! {
                                    <li class="distribution__row">
                                        <span class=format!("badge {}", slice.level.css_class())>
                                            {slice.level.label()}
                                            " Risk"
                                        </span>
                                        <div class="distribution__track">
                                            <div
                                                class="distribution__fill"
                                                style=format!("width: {}%", slice.share)
                                            ></div>
                                        </div>
                                        <span class="distribution__share">{format!("{}%", slice.share)}</span>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </section>
            </div>

            <section class="panel">
                <h3>"Recent Audits"</h3>
                <ul class="audit-list">
                    {mock_recent_audits()
                        .into_iter()
                        .map(|audit| {
                            view! {
                                <li class="audit-list__row">
                                    <div>
                                        <h4>{audit.name}</h4>
                                        <p class="audit-list__date">{audit.date}</p>
                                    </div>
                                    <div class="audit-list__badges">
                                        <span class=format!("badge {}", audit.risk_level.css_class())>
                                            {audit.risk_level.label()}
                                            " Risk"
                                        </span>
                                        <span class="badge">{audit.status.label()}</span>
                                    </div>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </section>
        </div>
    }
}
