use shared::text_report::{MetricCard, MetricStyle, RiskFactorCard, TextReport, Tone};
use yew::prelude::*;

pub fn render_text_report(report: &TextReport) -> Html {
    let status = &report.status;

    html! {
        <>
            <div class="result-header">
                <div class={classes!("status-badge", status.status_class)}>{ status.label }</div>
                <div class="risk-score-display" style={format!("color: {}", status.tone.css_var())}>
                    { format!("{}/100", report.risk_score) }
                </div>
                <div class="risk-meter">
                    <div
                        class={classes!("risk-meter-fill", status.risk.css_class())}
                        style={format!("width: {}%", report.meter_width())}
                    ></div>
                </div>
                <p class="meter-caption">
                    {"Credibility Score: "}
                    <strong style={format!("color: {}", Tone::Primary.css_var())}>
                        { format!("{}/100", report.credibility_score) }
                    </strong>
                </p>
            </div>

            <div class="explanation-box">{ &report.explanation }</div>

            { report.scam_indicators.as_deref().map(render_indicators).unwrap_or_default() }
            { report.risk_factors.as_deref().map(render_risk_factors).unwrap_or_default() }

            <div class="recommendations">
                <h3>{"📋 Recommendations"}</h3>
                <ul class="recommendation-list">
                    { for report.recommendations.iter().map(|rec| html! { <li>{ *rec }</li> }) }
                </ul>
            </div>

            { report.metrics.as_deref().map(render_metrics).unwrap_or_default() }
        </>
    }
}

fn render_indicators(indicators: &[String]) -> Html {
    html! {
        <div class="result-section">
            <h3 class="section-title">{"🚨 Detected Scam Indicators"}</h3>
            <div class="indicator-list">
                { for indicators.iter().map(|indicator| html! {
                    <div class="indicator-row">
                        <span>{ format!("• {}", indicator) }</span>
                    </div>
                })}
            </div>
        </div>
    }
}

fn render_risk_factors(factors: &[RiskFactorCard]) -> Html {
    html! {
        <div class="result-section">
            <h3 class="section-title">{"⚡ Risk Factors Analysis"}</h3>
            <div class="indicators-grid">
                { for factors.iter().map(|factor| html! {
                    <div class="indicator-card">
                        <div class="indicator-header">
                            <span class={classes!("severity-badge", factor.severity_class.clone())}>
                                { &factor.severity }
                            </span>
                        </div>
                        <h4>{ &factor.title }</h4>
                        <p>{ &factor.description }</p>
                    </div>
                })}
            </div>
        </div>
    }
}

fn render_metrics(metrics: &[MetricCard]) -> Html {
    html! {
        <div class="result-section">
            <h3 class="section-title">{"📊 Text Analysis Metrics"}</h3>
            <div class="models-grid">
                { for metrics.iter().map(render_metric) }
            </div>
        </div>
    }
}

fn render_metric(metric: &MetricCard) -> Html {
    let value = match metric.style {
        MetricStyle::Tone(tone) => html! {
            <div class="model-pred" style={format!("color: {}", tone.css_var())}>{ &metric.value }</div>
        },
        MetricStyle::Verdict(good) => html! {
            <div class={classes!("model-pred", if good { "pred-genuine" } else { "pred-fraudulent" })}>
                { &metric.value }
            </div>
        },
    };

    html! {
        <div class="model-pill">
            <div class="model-name">{ metric.label }</div>
            { value }
        </div>
    }
}
