//! # Bloglist API Server
//!
//! HTTP surface over the blog and user services. The binary in `main.rs`
//! only wires configuration and telemetry; routes and extractor settings
//! live here so integration tests can mount the same application.

use actix_web::web;

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod state;
pub mod telemetry;

use middleware::error::AppError;
use state::AppState;

/// Register shared state, extractor error handlers and every route.
pub fn configure(state: AppState) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        let testing_routes = state.testing_routes;

        cfg.app_data(web::Data::new(state))
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                AppError::BadRequest(err.to_string()).into()
            }))
            .app_data(web::PathConfig::default().error_handler(|err, _req| {
                AppError::BadRequest(format!("malformatted id: {}", err)).into()
            }));

        handlers::configure_routes(cfg, testing_routes);
    }
}
