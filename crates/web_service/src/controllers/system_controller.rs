use actix_web::{get, web, HttpResponse};

use crate::dto::HealthResponse;

/// Configure system routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(health);
}

#[get("/health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
    })
}
