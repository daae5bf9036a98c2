use shared::report::{EnsembleReport, ModelPill};
use yew::prelude::*;

pub fn render_ensemble_report(report: &EnsembleReport) -> Html {
    let verdict = &report.verdict;
    let score_color = if verdict.is_real { "var(--cyber-success)" } else { "var(--cyber-danger)" };

    html! {
        <>
            <div class="result-header">
                <div class={classes!("status-badge", verdict.status_class)}>{ verdict.label }</div>
                <div class="risk-score-display" style={format!("color: {}", score_color)}>
                    { report.confidence.to_string() }
                </div>
                <p class="meter-caption">{"Ensemble Confidence"}</p>
                <div class="risk-meter">
                    <div
                        class={classes!("risk-meter-fill", report.risk.css_class())}
                        style={format!("width: {}%", report.confidence.0.clamp(0.0, 100.0))}
                    ></div>
                </div>
            </div>

            <div class="explanation-box">{ report.explanation }</div>

            <div class="result-section">
                <h3 class="section-title">{"🤖 Model Predictions"}</h3>
                <div class="models-grid">
                    { for report.models.iter().map(render_model_pill) }
                </div>
            </div>

            <div class="result-section">
                <h3 class="section-title">{"📊 Vote Breakdown"}</h3>
                <div class="models-grid">
                    <div class="model-pill vote-fraudulent">
                        <div class="model-name">{"Fraudulent Votes"}</div>
                        <div class="model-pred pred-fraudulent">{ report.votes.fraudulent.to_string() }</div>
                    </div>
                    <div class="model-pill vote-genuine">
                        <div class="model-name">{"Genuine Votes"}</div>
                        <div class="model-pred pred-genuine">{ report.votes.genuine.to_string() }</div>
                    </div>
                    <div class="model-pill vote-total">
                        <div class="model-name">{"Total Models"}</div>
                        <div class="model-pred" style="color: var(--cyber-primary)">{ report.votes.total.to_string() }</div>
                    </div>
                </div>
            </div>

            <div class="recommendations">
                <h3>{ report.recommendations_heading }</h3>
                <ul class="recommendation-list">
                    { for report.recommendations.iter().map(|rec| html! { <li>{ *rec }</li> }) }
                </ul>
            </div>
        </>
    }
}

fn render_model_pill(pill: &ModelPill) -> Html {
    html! {
        <div class="model-pill" key={pill.key.clone()}>
            <div class="model-name">{ &pill.name }</div>
            <div class={classes!("model-pred", pill.prediction_class())}>{ &pill.prediction }</div>
            <div class="model-confidence">{ format!("{} Confidence", pill.confidence) }</div>
            <div class="percentage-bar">
                <div class="percentage-fill" style={format!("width: {}%", pill.confidence.0.clamp(0.0, 100.0))}></div>
            </div>
        </div>
    }
}
