use actix_web::{web, Responder};
use crate::server;

/// Public runtime configuration, for browser code.
pub async fn get(data: web::Data<server::State>) -> impl Responder {
    web::Json(data.app.runtime_config.clone())
}
