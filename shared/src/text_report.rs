use crate::recommendations::{self, Category};
use crate::report::RiskBand;
use crate::response::{RiskFactor, TextAnalysisResponse, TextFeatures};

const CAPS_RATIO_ALERT: f64 = 0.3;

/// Color treatment for a status or metric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Primary,
    Success,
    Warning,
    Danger,
}

impl Tone {
    pub fn css_var(self) -> &'static str {
        match self {
            Tone::Primary => "var(--cyber-primary)",
            Tone::Success => "var(--cyber-success)",
            Tone::Warning => "var(--cyber-warning)",
            Tone::Danger => "var(--cyber-danger)",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextStatus {
    pub category: Category,
    pub label: &'static str,
    pub status_class: &'static str,
    pub risk: RiskBand,
    pub tone: Tone,
}

impl TextStatus {
    pub fn for_category(category: Category) -> Self {
        match category {
            Category::Fake => Self {
                category,
                label: "⚠️ FAKE POSTING",
                status_class: "status-fake",
                risk: RiskBand::High,
                tone: Tone::Danger,
            },
            Category::Suspicious => Self {
                category,
                label: "⚡ SUSPICIOUS",
                status_class: "status-suspicious",
                risk: RiskBand::Medium,
                tone: Tone::Warning,
            },
            Category::Genuine => Self {
                category,
                label: "✅ GENUINE",
                status_class: "status-genuine",
                risk: RiskBand::Low,
                tone: Tone::Success,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RiskFactorCard {
    pub title: String,
    pub description: String,
    pub severity: String,
    pub severity_class: String,
}

impl From<&RiskFactor> for RiskFactorCard {
    fn from(factor: &RiskFactor) -> Self {
        Self {
            title: factor.kind.clone(),
            description: factor.description.clone(),
            severity: factor.severity.clone(),
            severity_class: format!("severity-{}", factor.severity.to_lowercase()),
        }
    }
}

/// How a metric value is emphasised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricStyle {
    Tone(Tone),
    /// Prediction-style class: `true` renders as genuine, `false` as fraudulent.
    Verdict(bool),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricCard {
    pub label: &'static str,
    pub value: String,
    pub style: MetricStyle,
}

impl MetricCard {
    fn new(label: &'static str, value: String, style: MetricStyle) -> Self {
        Self { label, value, style }
    }
}

pub fn metric_cards(features: &TextFeatures) -> Vec<MetricCard> {
    let caps_tone = if features.caps_ratio > CAPS_RATIO_ALERT { Tone::Danger } else { Tone::Success };
    let email = if features.has_email { "Yes ⚠️" } else { "No ✓" };
    let url = if features.has_url { "Yes" } else { "No" };

    vec![
        MetricCard::new("Text Length", features.text_length.to_string(), MetricStyle::Tone(Tone::Primary)),
        MetricCard::new("Word Count", features.word_count.to_string(), MetricStyle::Tone(Tone::Primary)),
        MetricCard::new(
            "Avg Word Length",
            format!("{:.1}", features.avg_word_length),
            MetricStyle::Tone(Tone::Primary),
        ),
        MetricCard::new(
            "Caps Ratio",
            format!("{:.1}%", features.caps_ratio * 100.0),
            MetricStyle::Tone(caps_tone),
        ),
        // An email address in the text counts against it.
        MetricCard::new("Has Email", email.to_string(), MetricStyle::Verdict(!features.has_email)),
        MetricCard::new("Has URL", url.to_string(), MetricStyle::Tone(Tone::Primary)),
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextReport {
    pub status: TextStatus,
    pub risk_score: f64,
    pub credibility_score: f64,
    pub explanation: String,
    /// `None` when the server found no indicators.
    pub scam_indicators: Option<Vec<String>>,
    pub risk_factors: Option<Vec<RiskFactorCard>>,
    pub recommendations: &'static [&'static str],
    pub metrics: Option<Vec<MetricCard>>,
}

impl TextReport {
    pub fn build(response: &TextAnalysisResponse) -> Self {
        let category = Category::from_tag(&response.category);
        if category.as_ref() != response.category {
            log::warn!("Unrecognized category {:?}, treating as Suspicious", response.category);
        }

        let scam_indicators =
            (!response.scam_indicators.is_empty()).then(|| response.scam_indicators.clone());
        let risk_factors = (!response.risk_factors.is_empty())
            .then(|| response.risk_factors.iter().map(RiskFactorCard::from).collect());

        Self {
            status: TextStatus::for_category(category),
            risk_score: response.risk_score,
            credibility_score: response.credibility_score,
            explanation: response.explanation.clone(),
            scam_indicators,
            risk_factors,
            recommendations: recommendations::for_category(category),
            metrics: response.features.as_ref().map(metric_cards),
        }
    }

    /// Meter width in percent, kept within the track.
    pub fn meter_width(&self) -> f64 {
        self.risk_score.clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn suspicious_response() -> TextAnalysisResponse {
        serde_json::from_value(json!({
            "success": true,
            "category": "Suspicious",
            "risk_score": 55,
            "credibility_score": 45,
            "explanation": "Some warning signs.",
            "scam_indicators": [],
            "risk_factors": [
                {"type": "Urgency language", "description": "Pushes for an immediate decision.", "severity": "Medium"}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn suspicious_report_omits_empty_indicators() {
        let report = TextReport::build(&suspicious_response());
        assert!(report.scam_indicators.is_none());

        let factors = report.risk_factors.as_ref().unwrap();
        assert_eq!(factors.len(), 1);
        assert_eq!(factors[0].severity_class, "severity-medium");
        assert_eq!(factors[0].severity, "Medium");
        assert_eq!(factors[0].title, "Urgency language");

        assert_eq!(report.status.risk, RiskBand::Medium);
        assert_eq!(report.status.status_class, "status-suspicious");
        assert_eq!(report.recommendations, recommendations::for_category(Category::Suspicious));
        assert!(report.metrics.is_none());
    }

    #[test]
    fn category_maps_directly_to_styling() {
        let mut response = suspicious_response();

        response.category = "Fake".into();
        response.risk_score = 10.0;
        let fake = TextReport::build(&response);
        assert_eq!(fake.status.risk, RiskBand::High);
        assert_eq!(fake.status.tone, Tone::Danger);

        response.category = "Genuine".into();
        response.risk_score = 95.0;
        let genuine = TextReport::build(&response);
        assert_eq!(genuine.status.risk, RiskBand::Low);
        assert_eq!(genuine.status.label, "✅ GENUINE");
    }

    #[test]
    fn unknown_category_is_suspicious() {
        let mut response = suspicious_response();
        response.category = "Unclear".into();
        let report = TextReport::build(&response);
        assert_eq!(report.status.category, Category::Suspicious);
        assert_eq!(report.recommendations, recommendations::for_category(Category::Suspicious));
    }

    #[test]
    fn indicators_keep_their_order() {
        let mut response = suspicious_response();
        response.scam_indicators = vec!["Requests upfront payment".into(), "Uses personal email".into()];
        let report = TextReport::build(&response);
        assert_eq!(
            report.scam_indicators.unwrap(),
            ["Requests upfront payment", "Uses personal email"]
        );
    }

    #[test]
    fn metrics_format_each_feature() {
        let features = TextFeatures {
            text_length: 412,
            word_count: 70,
            avg_word_length: 4.86,
            caps_ratio: 0.3172,
            has_email: true,
            has_url: true,
        };
        let cards = metric_cards(&features);
        let values: Vec<_> = cards.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, ["412", "70", "4.9", "31.7%", "Yes ⚠️", "Yes"]);
        assert_eq!(cards[3].style, MetricStyle::Tone(Tone::Danger));
        assert_eq!(cards[4].style, MetricStyle::Verdict(false));
        assert_eq!(cards[5].style, MetricStyle::Tone(Tone::Primary));
    }

    #[test]
    fn clean_text_metrics() {
        let features = TextFeatures {
            text_length: 90,
            word_count: 15,
            avg_word_length: 5.0,
            caps_ratio: 0.3,
            has_email: false,
            has_url: false,
        };
        let cards = metric_cards(&features);
        assert_eq!(cards[3].style, MetricStyle::Tone(Tone::Success));
        assert_eq!(cards[4].value, "No ✓");
        assert_eq!(cards[4].style, MetricStyle::Verdict(true));
        assert_eq!(cards[5].value, "No");
    }
}
