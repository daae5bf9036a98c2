//! Types and logic shared by the fraud-detection frontend and its host server.
//!
//! Nothing in here touches browser APIs, so all report assembly, request
//! coercion and widget state can be tested natively.

pub mod error;
pub mod recommendations;
pub mod report;
pub mod request;
pub mod response;
pub mod submit;
pub mod text_report;
pub mod theme;

pub use error::SubmitError;
pub use recommendations::Category;
pub use report::{EnsembleReport, Percent, RiskBand};
pub use request::{
    Domain, Endpoint, FieldInput, FieldKind, FieldSpec, FormValues, InternshipPredictionRequest,
    JobPredictionRequest, PredictionRequest, TextAnalysisRequest,
};
pub use response::{PredictionResponse, TextAnalysisResponse};
pub use submit::{FormSubmitController, HttpReply, PredictionTransport, SubmissionView};
pub use text_report::TextReport;
pub use theme::{Theme, ThemeStore, ThemeSwitcher};
