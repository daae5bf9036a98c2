mod config;
mod relay;
mod routes;

use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use config::ServerConfig;
use relay::RelayService;
use routes::configure_routes;
use std::env;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = ServerConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    if let Ok(current_dir) = env::current_dir() {
        log::info!("Current working directory: {}", current_dir.display());
    } else {
        log::error!("Failed to get the current working directory.");
    }

    log::info!("Serving frontend from {}", config.frontend_dir);
    log::info!("Relaying predictions to {}", config.model_service_url);

    let relay = RelayService::new(config.model_service_url.clone());
    let frontend_dir = config.frontend_dir.clone();
    let bind_address = config.bind_address();

    log::info!("Starting server on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                    .allowed_headers(vec![
                        actix_web::http::header::ACCEPT,
                        actix_web::http::header::CONTENT_TYPE,
                    ])
                    .max_age(3600),
            )
            .app_data(web::Data::new(relay.clone()))
            .configure(|cfg| configure_routes(cfg, frontend_dir.clone()))
    })
    .bind(&bind_address)?
    .run()
    .await
}
