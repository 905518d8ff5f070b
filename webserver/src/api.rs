use actix_web::error::{self, JsonPayloadError};
use actix_web::{web, HttpRequest, HttpResponse};
use actix_web::dev::HttpServiceFactory;
use serde_json::json;

mod devtools;
pub mod notfound;
mod racer;
mod runtimeconfig;

pub const GET_CONFIG: &str = "get config";
pub const RACERS: &str = "racers";
pub const RACER: &str = "racer";
pub const DEVTOOLS_CONFIG: &str = "devtools config";

pub fn service(api_path: &str, devtools: bool) -> impl HttpServiceFactory {
    let scope = web::scope(api_path)
        .app_data(json_config())
        .service(web::resource("/config").name(GET_CONFIG)
            .get(runtimeconfig::get))
        .service(web::resource("/racer").name(RACERS)
            .get(racer::list)
            .post(racer::post))
        .service(web::resource("/racer/{id}").name(RACER)
            .get(racer::get)
            .put(racer::put)
            .delete(racer::delete));

    if devtools {
        scope.service(web::resource("/devtools/config").name(DEVTOOLS_CONFIG)
            .get(devtools::config))
    } else {
        scope
    }
}

/// Reject bad request bodies with a JSON error.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
            let body = json!({ "error": err.to_string() });
            error::InternalError::from_response(
                err, HttpResponse::BadRequest().json(body)).into()
        })
}

pub fn no_content() -> HttpResponse {
    HttpResponse::NoContent().finish()
}
