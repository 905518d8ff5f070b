use actix_web::{web, Responder};
use crate::server;

pub async fn config(data: web::Data<server::State>) -> impl Responder {
    web::Json(data.app.clone())
}
