use actix_web::{web, HttpResponse, Responder};

use crate::core::{dashboard_stats, sample_candidates};
use crate::models::HealthResponse;
use crate::routes::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/candidates", web::get().to(get_candidates))
        .route("/dashboard/stats", web::get().to(get_dashboard_stats));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let healthy = match state.store.health_check().await {
        Ok(ok) => ok,
        Err(e) => {
            tracing::warn!("Store health check failed: {}", e);
            false
        }
    };

    let status = if healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// GET /api/candidates
async fn get_candidates() -> impl Responder {
    HttpResponse::Ok().json(sample_candidates())
}

/// GET /api/dashboard/stats
async fn get_dashboard_stats() -> impl Responder {
    HttpResponse::Ok().json(dashboard_stats())
}
