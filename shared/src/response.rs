use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelPrediction {
    pub prediction: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteBreakdown {
    pub real_votes: u32,
    pub fraudulent_votes: u32,
    pub total_models: u32,
}

impl VoteBreakdown {
    pub fn is_consistent(&self) -> bool {
        self.real_votes + self.fraudulent_votes == self.total_models
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub ensemble_result: String,
    pub ensemble_confidence: f64,
    /// Model key and prediction, in the order the server sent them.
    #[serde(serialize_with = "predictions_as_map", deserialize_with = "ordered_predictions")]
    pub predictions: Vec<(String, ModelPrediction)>,
    pub vote_breakdown: VoteBreakdown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactor {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub severity: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextFeatures {
    pub text_length: u64,
    pub word_count: u64,
    pub avg_word_length: f64,
    pub caps_ratio: f64,
    #[serde(deserialize_with = "deserialize_flag")]
    pub has_email: bool,
    #[serde(deserialize_with = "deserialize_flag")]
    pub has_url: bool,
}

// The analyzer sends presence flags as 0/1.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Bool(b) => Ok(b),
        Value::Number(n) => match n.as_f64() {
            Some(x) => Ok(x != 0.0),
            None => Err(serde::de::Error::custom(format!("Invalid flag: {}", n))),
        },
        other => Err(serde::de::Error::custom(format!("Expected boolean or number, got {}", other))),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextAnalysisResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub category: String,
    pub risk_score: f64,
    pub credibility_score: f64,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub scam_indicators: Vec<String>,
    #[serde(default)]
    pub risk_factors: Vec<RiskFactor>,
    #[serde(default)]
    pub features: Option<TextFeatures>,
}

/// The fields every endpoint reply carries, read before the full body so a
/// `success: false` reply never has to satisfy the success schema.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplyEnvelope {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

fn predictions_as_map<S: Serializer>(
    entries: &[(String, ModelPrediction)],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(entries.len()))?;
    for (key, value) in entries {
        map.serialize_entry(key, value)?;
    }
    map.end()
}

fn ordered_predictions<'de, D>(deserializer: D) -> Result<Vec<(String, ModelPrediction)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct OrderedVisitor;

    impl<'de> Visitor<'de> for OrderedVisitor {
        type Value = Vec<(String, ModelPrediction)>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of model name to prediction")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((key, value)) = map.next_entry::<String, ModelPrediction>()? {
                entries.push((key, value));
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(OrderedVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predictions_keep_server_order() {
        let body = r#"{
            "success": true,
            "ensemble_result": "Fraudulent",
            "ensemble_confidence": 71.3,
            "predictions": {
                "svm": {"prediction": "Fraudulent", "confidence": 64.0},
                "random_forest": {"prediction": "Real", "confidence": 55.5},
                "xgboost": {"prediction": "Fraudulent", "confidence": 94.4}
            },
            "vote_breakdown": {"fraudulent_votes": 2, "real_votes": 1, "total_models": 3}
        }"#;
        let response: PredictionResponse = serde_json::from_str(body).unwrap();
        let keys: Vec<_> = response.predictions.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["svm", "random_forest", "xgboost"]);
        assert!(response.vote_breakdown.is_consistent());
    }

    #[test]
    fn text_response_defaults_optional_sections() {
        let body = r#"{
            "success": true,
            "category": "Genuine",
            "risk_score": 12,
            "credibility_score": 88.5
        }"#;
        let response: TextAnalysisResponse = serde_json::from_str(body).unwrap();
        assert!(response.scam_indicators.is_empty());
        assert!(response.risk_factors.is_empty());
        assert!(response.features.is_none());
        assert_eq!(response.risk_score, 12.0);
    }

    #[test]
    fn analyzer_features_use_integer_flags() {
        let body = r#"{
            "success": true,
            "category": "Suspicious",
            "risk_score": 48,
            "credibility_score": 52,
            "explanation": "Some warning signs.",
            "features": {
                "text_length": 120, "word_count": 21, "avg_word_length": 4.7, "caps_ratio": 0,
                "exclamation_count": 2, "question_count": 0, "number_count": 3, "special_char_ratio": 0.05,
                "has_email": 1, "has_phone": 0, "has_url": 0
            }
        }"#;
        let response: TextAnalysisResponse = serde_json::from_str(body).unwrap();
        let features = response.features.unwrap();
        assert!(features.has_email);
        assert!(!features.has_url);
        assert_eq!(features.caps_ratio, 0.0);
        assert_eq!(features.text_length, 120);
    }

    #[test]
    fn boolean_flags_still_decode() {
        let body = r#"{"text_length": 60, "word_count": 10, "avg_word_length": 5.0, "caps_ratio": 0.1,
            "has_email": false, "has_url": true}"#;
        let features: TextFeatures = serde_json::from_str(body).unwrap();
        assert!(!features.has_email);
        assert!(features.has_url);

        let bad = r#"{"text_length": 60, "word_count": 10, "avg_word_length": 5.0, "caps_ratio": 0.1,
            "has_email": "maybe", "has_url": true}"#;
        assert!(serde_json::from_str::<TextFeatures>(bad).is_err());
    }

    #[test]
    fn envelope_reads_failure_without_payload() {
        let envelope: ReplyEnvelope =
            serde_json::from_str(r#"{"success": false, "error": "Job scaler not found."}"#).unwrap();
        assert!(!envelope.success);
        assert_eq!(envelope.error.as_deref(), Some("Job scaler not found."));
    }
}
