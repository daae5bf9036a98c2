use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::error::SubmitError;

/// Minimum number of characters (after trimming) the text analyzer accepts.
pub const MIN_TEXT_CHARS: usize = 50;

pub const SHORT_TEXT_MESSAGE: &str =
    "Please provide at least 50 characters of text for accurate analysis.";

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, EnumString, AsRefStr, Display, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Domain {
    #[default]
    Job,
    Internship,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    PredictJob,
    PredictInternship,
    AnalyzeText,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::PredictJob => "/api/predict-job",
            Endpoint::PredictInternship => "/api/predict-internship",
            Endpoint::AnalyzeText => "/api/analyze-text",
        }
    }

    /// Message used when the server reports failure without saying why.
    pub fn fallback_error(self) -> &'static str {
        match self {
            Endpoint::PredictJob | Endpoint::PredictInternship => "Prediction failed",
            Endpoint::AnalyzeText => "Unknown error occurred",
        }
    }

    /// Notice shown instead of the error text when no usable reply arrived.
    pub fn unreachable_notice(self) -> Option<&'static str> {
        match self {
            Endpoint::PredictJob | Endpoint::PredictInternship => None,
            Endpoint::AnalyzeText => Some("Failed to analyze text. Please try again."),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    Float,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldInput {
    Number { placeholder: &'static str },
    YesNo,
}

/// One named form input and the numeric type it is coerced to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub input: FieldInput,
}

const fn number(id: &'static str, label: &'static str, kind: FieldKind, placeholder: &'static str) -> FieldSpec {
    FieldSpec { id, label, kind, input: FieldInput::Number { placeholder } }
}

const fn yes_no(id: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec { id, label, kind: FieldKind::Integer, input: FieldInput::YesNo }
}

const JOB_FIELDS: [FieldSpec; 8] = [
    number("salary_min", "Minimum Salary", FieldKind::Float, "e.g. 40000"),
    number("salary_max", "Maximum Salary", FieldKind::Float, "e.g. 65000"),
    number("company_experience_years", "Company Age (years)", FieldKind::Integer, "e.g. 12"),
    number("job_description_length", "Description Length (characters)", FieldKind::Integer, "e.g. 1800"),
    number("required_experience_years", "Required Experience (years)", FieldKind::Integer, "e.g. 3"),
    number("required_education_level", "Required Education Level (0-4)", FieldKind::Integer, "0 = none, 4 = doctorate"),
    yes_no("telecommute_allowed", "Remote Work Allowed"),
    yes_no("has_company_logo", "Company Logo Present"),
];

const INTERNSHIP_FIELDS: [FieldSpec; 10] = [
    yes_no("company_registered", "Company Registered"),
    yes_no("official_email", "Official Email Domain"),
    yes_no("website_available", "Company Website Available"),
    yes_no("stipend_offered", "Stipend Offered"),
    number("stipend_amount", "Stipend Amount (per month)", FieldKind::Float, "e.g. 10000"),
    number("registration_fee", "Registration Fee", FieldKind::Float, "0 if none"),
    yes_no("interview_process", "Interview Process"),
    number("duration_months", "Duration (months)", FieldKind::Integer, "e.g. 3"),
    number("job_description_quality", "Description Quality (1-5)", FieldKind::Integer, "e.g. 4"),
    yes_no("social_media_presence", "Social Media Presence"),
];

impl Domain {
    pub fn fields(self) -> &'static [FieldSpec] {
        match self {
            Domain::Job => &JOB_FIELDS,
            Domain::Internship => &INTERNSHIP_FIELDS,
        }
    }

    pub fn endpoint(self) -> Endpoint {
        match self {
            Domain::Job => Endpoint::PredictJob,
            Domain::Internship => Endpoint::PredictInternship,
        }
    }

    /// Coerces every field of this domain and assembles the typed request.
    pub fn build_request(self, values: &FormValues) -> Result<PredictionRequest, SubmitError> {
        let mut map = Map::new();
        for field in self.fields() {
            map.insert(field.id.to_string(), field.coerce(values.get(field.id))?);
        }
        let value = Value::Object(map);

        Ok(match self {
            Domain::Job => PredictionRequest::Job(serde_json::from_value(value)?),
            Domain::Internship => PredictionRequest::Internship(serde_json::from_value(value)?),
        })
    }
}

impl FieldSpec {
    /// `None` means the input element was never mounted.
    pub fn coerce(&self, raw: Option<&str>) -> Result<Value, SubmitError> {
        let raw = raw
            .ok_or_else(|| SubmitError::Configuration(format!("#{}", self.id)))?
            .trim();

        match self.kind {
            FieldKind::Integer => raw
                .parse::<i64>()
                .map(Value::from)
                .map_err(|_| SubmitError::Validation(format!("{} must be a whole number.", self.label))),
            FieldKind::Float => raw
                .parse::<f64>()
                .ok()
                .and_then(Number::from_f64)
                .map(Value::Number)
                .ok_or_else(|| SubmitError::Validation(format!("{} must be a number.", self.label))),
        }
    }
}

/// Raw string values read from the form, keyed by input id.
#[derive(Debug, Clone, Default)]
pub struct FormValues {
    values: HashMap<String, String>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, raw: impl Into<String>) {
        self.values.insert(id.into(), raw.into());
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.values.get(id).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = FormValues::new();
        for (id, raw) in iter {
            values.insert(id, raw);
        }
        values
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPredictionRequest {
    pub salary_min: f64,
    pub salary_max: f64,
    pub company_experience_years: i64,
    pub job_description_length: i64,
    pub required_experience_years: i64,
    pub required_education_level: i64,
    pub telecommute_allowed: i64,
    pub has_company_logo: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InternshipPredictionRequest {
    pub company_registered: i64,
    pub official_email: i64,
    pub website_available: i64,
    pub stipend_offered: i64,
    pub stipend_amount: f64,
    pub registration_fee: f64,
    pub interview_process: i64,
    pub duration_months: i64,
    pub job_description_quality: i64,
    pub social_media_presence: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PredictionRequest {
    Job(JobPredictionRequest),
    Internship(InternshipPredictionRequest),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextAnalysisRequest {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: Domain,
}

impl TextAnalysisRequest {
    /// Trims `raw` and rejects it when it is too short to analyze.
    pub fn new(raw: &str, kind: Domain) -> Result<Self, SubmitError> {
        let request = Self { text: raw.trim().to_string(), kind };
        request.validate()?;
        Ok(request)
    }

    pub fn validate(&self) -> Result<(), SubmitError> {
        if self.text.trim().chars().count() < MIN_TEXT_CHARS {
            return Err(SubmitError::Validation(SHORT_TEXT_MESSAGE.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job_values() -> FormValues {
        [
            ("salary_min", "40000"),
            ("salary_max", " 65000.5 "),
            ("company_experience_years", "12"),
            ("job_description_length", "1800"),
            ("required_experience_years", "3"),
            ("required_education_level", "2"),
            ("telecommute_allowed", "1"),
            ("has_company_logo", "0"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn job_request_coerces_every_field() {
        let request = Domain::Job.build_request(&job_values()).unwrap();
        let PredictionRequest::Job(job) = request else {
            panic!("expected a job request");
        };
        assert_eq!(job.salary_max, 65000.5);
        assert_eq!(job.company_experience_years, 12);
        assert_eq!(job.telecommute_allowed, 1);
    }

    #[test]
    fn job_request_serializes_flat() {
        let request = Domain::Job.build_request(&job_values()).unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["salary_min"], 40000.0);
        assert_eq!(json["has_company_logo"], 0);
        assert_eq!(json.as_object().unwrap().len(), 8);
    }

    #[test]
    fn internship_request_covers_ten_fields() {
        let values: FormValues = Domain::Internship
            .fields()
            .iter()
            .map(|field| (field.id, "1"))
            .collect();
        let request = Domain::Internship.build_request(&values).unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json.as_object().unwrap().len(), 10);
        assert_eq!(json["stipend_amount"], 1.0);
    }

    #[test]
    fn missing_input_is_a_configuration_error() {
        let mut values = job_values();
        values.values.remove("has_company_logo");
        let err = Domain::Job.build_request(&values).unwrap_err();
        assert_eq!(err, SubmitError::Configuration("#has_company_logo".into()));
    }

    #[test]
    fn non_numeric_input_names_the_field() {
        let mut values = job_values();
        values.insert("required_experience_years", "3.5");
        let err = Domain::Job.build_request(&values).unwrap_err();
        assert_eq!(
            err,
            SubmitError::Validation("Required Experience (years) must be a whole number.".into())
        );

        values.insert("required_experience_years", "3");
        values.insert("salary_min", "");
        assert!(matches!(
            Domain::Job.build_request(&values),
            Err(SubmitError::Validation(_))
        ));
    }

    #[test]
    fn text_of_49_chars_is_rejected_and_50_accepted() {
        let short = "a".repeat(49);
        let exact = "a".repeat(50);
        assert_eq!(
            TextAnalysisRequest::new(&short, Domain::Job),
            Err(SubmitError::Validation(SHORT_TEXT_MESSAGE.into()))
        );
        assert!(TextAnalysisRequest::new(&exact, Domain::Internship).is_ok());
    }

    #[test]
    fn text_length_is_measured_after_trimming() {
        let padded = format!("   {}   ", "b".repeat(49));
        assert!(TextAnalysisRequest::new(&padded, Domain::Job).is_err());

        let request = TextAnalysisRequest::new(&format!("  {}\n", "c".repeat(60)), Domain::Job).unwrap();
        assert_eq!(request.text.len(), 60);
    }

    #[test]
    fn text_request_uses_type_key() {
        let request = TextAnalysisRequest::new(&"x".repeat(50), Domain::Internship).unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["type"], "internship");
    }

    #[test]
    fn endpoints_match_the_api() {
        assert_eq!(Domain::Job.endpoint().path(), "/api/predict-job");
        assert_eq!(Domain::Internship.endpoint().path(), "/api/predict-internship");
        assert_eq!(Endpoint::AnalyzeText.path(), "/api/analyze-text");
        assert_eq!(Endpoint::PredictJob.unreachable_notice(), None);
        assert_eq!(
            Endpoint::AnalyzeText.unreachable_notice(),
            Some("Failed to analyze text. Please try again.")
        );
    }
}
