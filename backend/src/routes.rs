use actix_files::Files;
use actix_web::{HttpResponse, web};
use serde::Serialize;
use shared::{Endpoint, InternshipPredictionRequest, JobPredictionRequest, TextAnalysisRequest};

use crate::relay::{RelayError, RelayService};

#[derive(Serialize)]
struct HealthResponse<'a> {
    status: &'static str,
    model_service: &'a str,
}

/// JSON API only; the static frontend is mounted by [`configure_routes`].
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| RelayError::InvalidRequest(err.to_string()).into()),
    )
    .service(web::resource("/api/health").route(web::get().to(health)))
    .service(web::resource("/api/predict-job").route(web::post().to(predict_job)))
    .service(web::resource("/api/predict-internship").route(web::post().to(predict_internship)))
    .service(web::resource("/api/analyze-text").route(web::post().to(analyze_text)));
}

pub fn configure_routes(cfg: &mut web::ServiceConfig, frontend_dir: String) {
    configure_api(cfg);
    cfg.service(Files::new("/", frontend_dir).index_file("index.html"));
}

async fn health(relay: web::Data<RelayService>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse { status: "healthy", model_service: relay.base_url() })
}

async fn predict_job(
    relay: web::Data<RelayService>,
    body: web::Json<JobPredictionRequest>,
) -> Result<HttpResponse, RelayError> {
    let reply = relay.forward(Endpoint::PredictJob, &body.into_inner()).await?;
    Ok(reply.into_response())
}

async fn predict_internship(
    relay: web::Data<RelayService>,
    body: web::Json<InternshipPredictionRequest>,
) -> Result<HttpResponse, RelayError> {
    let reply = relay.forward(Endpoint::PredictInternship, &body.into_inner()).await?;
    Ok(reply.into_response())
}

async fn analyze_text(
    relay: web::Data<RelayService>,
    body: web::Json<TextAnalysisRequest>,
) -> Result<HttpResponse, RelayError> {
    let request = body.into_inner();
    request.validate().map_err(|e| RelayError::InvalidRequest(e.to_string()))?;

    let reply = relay.forward(Endpoint::AnalyzeText, &request).await?;
    Ok(reply.into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use serde_json::{Value, json};

    // Nothing listens on the discard port, so every forward fails to connect.
    const UNREACHABLE: &str = "http://127.0.0.1:9";

    macro_rules! api {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(RelayService::new(UNREACHABLE)))
                    .configure(configure_api),
            )
            .await
        };
    }

    fn job_body() -> Value {
        json!({
            "salary_min": 40000.0,
            "salary_max": 65000.0,
            "company_experience_years": 12,
            "job_description_length": 1800,
            "required_experience_years": 3,
            "required_education_level": 2,
            "telecommute_allowed": 1,
            "has_company_logo": 1
        })
    }

    #[actix_web::test]
    async fn health_reports_model_service() {
        let app = api!();
        let req = test::TestRequest::get().uri("/api/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"status": "healthy", "model_service": UNREACHABLE}));
    }

    #[actix_web::test]
    async fn short_text_is_rejected_before_relaying() {
        let app = api!();
        let req = test::TestRequest::post()
            .uri("/api/analyze-text")
            .set_json(json!({"text": "Earn money fast, no interview!", "type": "job"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(
            body["error"],
            "Please provide at least 50 characters of text for accurate analysis."
        );
    }

    #[actix_web::test]
    async fn malformed_fields_are_rejected() {
        let app = api!();
        let mut body = job_body();
        body["company_experience_years"] = json!("twelve");
        let req = test::TestRequest::post().uri("/api/predict-job").set_json(body).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri("/api/analyze-text")
            .set_json(json!({"text": "x".repeat(60), "type": "freelance"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
    }

    #[actix_web::test]
    async fn unreachable_model_service_is_bad_gateway() {
        let app = api!();
        let req = test::TestRequest::post().uri("/api/predict-job").set_json(job_body()).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().starts_with("Model service unavailable"));
    }
}
