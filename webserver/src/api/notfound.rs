use actix_web::HttpResponse;
use serde_json::json;

pub async fn get() -> HttpResponse {
    HttpResponse::NotFound().json(json!({ "error": "not found" }))
}
