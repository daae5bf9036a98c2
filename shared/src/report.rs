use std::borrow::Cow;

use derive_more::Display;
use strum_macros::{EnumIter, EnumString};

use crate::recommendations;
use crate::request::Domain;
use crate::response::PredictionResponse;

pub const HIGH_RISK_THRESHOLD: f64 = 70.0;
pub const MEDIUM_RISK_THRESHOLD: f64 = 40.0;

/// A 0-100 value shown with one decimal place, e.g. `82.5%`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display)]
#[display(fmt = "{:.1}%", _0)]
pub struct Percent(pub f64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskBand {
    High,
    Medium,
    Low,
}

impl RiskBand {
    pub fn from_score(score: f64) -> Self {
        if score >= HIGH_RISK_THRESHOLD {
            RiskBand::High
        } else if score >= MEDIUM_RISK_THRESHOLD {
            RiskBand::Medium
        } else {
            RiskBand::Low
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            RiskBand::High => "risk-high",
            RiskBand::Medium => "risk-medium",
            RiskBand::Low => "risk-low",
        }
    }
}

/// Models the prediction service is known to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, EnumIter)]
pub enum KnownModel {
    #[strum(serialize = "xgboost")]
    XgBoost,
    #[strum(serialize = "catboost")]
    CatBoost,
    #[strum(serialize = "gradient_boost")]
    GradientBoost,
    #[strum(serialize = "random_forest")]
    RandomForest,
    #[strum(serialize = "decision_tree")]
    DecisionTree,
    #[strum(serialize = "svm")]
    Svm,
}

impl KnownModel {
    pub fn display_name(self) -> &'static str {
        match self {
            KnownModel::XgBoost => "XGBoost",
            KnownModel::CatBoost => "CatBoost",
            KnownModel::GradientBoost => "Gradient Boosting",
            KnownModel::RandomForest => "Random Forest",
            KnownModel::DecisionTree => "Decision Tree",
            KnownModel::Svm => "SVM Classifier",
        }
    }
}

/// Display name for a model key; unknown keys are shown as sent.
pub fn model_display_name(key: &str) -> Cow<'_, str> {
    match key.parse::<KnownModel>() {
        Ok(model) => Cow::Borrowed(model.display_name()),
        Err(_) => Cow::Borrowed(key),
    }
}

/// Per-domain wording for the ensemble report.
#[derive(Debug)]
pub struct DomainCopy {
    pub genuine_label: &'static str,
    pub fraudulent_label: &'static str,
    pub genuine_explanation: &'static str,
    pub fraudulent_explanation: &'static str,
    pub recommendations_heading: &'static str,
}

static JOB_COPY: DomainCopy = DomainCopy {
    genuine_label: "✅ GENUINE JOB",
    fraudulent_label: "⚠️ FRAUDULENT JOB",
    genuine_explanation: "✅ Our ensemble analysis indicates this job posting follows patterns of legitimate recruitment. The salary range, company details, and requirements appear professional and realistic.",
    fraudulent_explanation: "⚠️ Warning: Multiple models detected high-risk patterns in this job posting. The features suggest characteristics common in fraudulent recruitment. Verify company authenticity independently before proceeding.",
    recommendations_heading: "📋 Recommendations",
};

static INTERNSHIP_COPY: DomainCopy = DomainCopy {
    genuine_label: "✅ GENUINE INTERNSHIP",
    fraudulent_label: "⚠️ FRAUDULENT INTERNSHIP",
    genuine_explanation: "✅ This internship offer passes our security checks. The registration fee (if any), company verification, and offer structure appear legitimate. However, always verify through the company's official website.",
    fraudulent_explanation: "⚠️ Warning: Multiple fraud indicators detected. This internship offer shows patterns common in scams targeting students. Be cautious of registration fees, personal email domains, or lack of company verification.",
    recommendations_heading: "📋 Safety Recommendations",
};

impl Domain {
    pub fn copy(self) -> &'static DomainCopy {
        match self {
            Domain::Job => &JOB_COPY,
            Domain::Internship => &INTERNSHIP_COPY,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub is_real: bool,
    pub label: &'static str,
    pub status_class: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelPill {
    pub key: String,
    pub name: String,
    pub prediction: String,
    pub is_real: bool,
    pub confidence: Percent,
}

impl ModelPill {
    pub fn prediction_class(&self) -> &'static str {
        if self.is_real { "pred-genuine" } else { "pred-fraudulent" }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteCounters {
    pub fraudulent: u32,
    pub genuine: u32,
    pub total: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnsembleReport {
    pub verdict: Verdict,
    pub confidence: Percent,
    /// Fraud likelihood used only to color the meter.
    pub risk_score: f64,
    pub risk: RiskBand,
    pub explanation: &'static str,
    pub models: Vec<ModelPill>,
    pub votes: VoteCounters,
    pub recommendations_heading: &'static str,
    pub recommendations: &'static [&'static str],
}

/// Fraud likelihood implied by the ensemble verdict and its confidence.
pub fn derived_risk(is_real: bool, confidence: f64) -> f64 {
    if is_real {
        (100.0 - confidence).max(0.0)
    } else {
        confidence
    }
}

impl EnsembleReport {
    pub fn build(domain: Domain, response: &PredictionResponse) -> Self {
        let copy = domain.copy();
        let is_real = response.ensemble_result == "Real";
        let confidence = response.ensemble_confidence;
        let risk_score = derived_risk(is_real, confidence);

        let verdict = Verdict {
            is_real,
            label: if is_real { copy.genuine_label } else { copy.fraudulent_label },
            status_class: if is_real { "status-genuine" } else { "status-fake" },
        };

        let models = response
            .predictions
            .iter()
            .map(|(key, prediction)| ModelPill {
                key: key.clone(),
                name: model_display_name(key).into_owned(),
                prediction: prediction.prediction.clone(),
                is_real: prediction.prediction == "Real",
                confidence: Percent(prediction.confidence),
            })
            .collect();

        let breakdown = response.vote_breakdown;
        if !breakdown.is_consistent() {
            log::warn!(
                "Vote breakdown does not add up: {} real + {} fraudulent != {} total",
                breakdown.real_votes,
                breakdown.fraudulent_votes,
                breakdown.total_models
            );
        }

        Self {
            verdict,
            confidence: Percent(confidence),
            risk_score,
            risk: RiskBand::from_score(risk_score),
            explanation: if is_real { copy.genuine_explanation } else { copy.fraudulent_explanation },
            models,
            votes: VoteCounters {
                fraudulent: breakdown.fraudulent_votes,
                genuine: breakdown.real_votes,
                total: breakdown.total_models,
            },
            recommendations_heading: copy.recommendations_heading,
            recommendations: recommendations::for_verdict(domain, is_real),
        }
    }
}
