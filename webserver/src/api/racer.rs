use actix_web::error::{ErrorInternalServerError, InternalError};
use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;
use formel1_league::db::{util, SortDirection};
use formel1_league::types::{Id, Racer, StoredRacer};
use crate::{api, constant, server};

#[derive(Debug, Deserialize)]
pub struct NewRacer { name: String }

impl From<NewRacer> for Racer {
    fn from(new: NewRacer) -> Racer {
        Racer { name: new.name }
    }
}

fn not_found(id: Id) -> actix_web::Error {
    let message = format!("racer does not exist: {id}");
    let response = HttpResponse::NotFound().json(json!({ "error": &message }));
    InternalError::from_response(message, response).into()
}

pub async fn list(data: web::Data<server::State>)
-> actix_web::Result<impl Responder> {
    let racers = data.db()?
        .find_racers(SortDirection::Asc, Some(constant::RACERS_PAGE_SIZE))
        .map_err(ErrorInternalServerError)?;
    Ok(web::Json(racers))
}

pub async fn post(data: web::Data<server::State>, racer: web::Json<NewRacer>)
-> actix_web::Result<HttpResponse> {
    let racer = Racer::from(racer.into_inner());
    let stored = util::create_racer(&mut **data.db()?, &racer)
        .map_err(ErrorInternalServerError)?;
    log::debug!("created racer {}", stored.id);
    Ok(HttpResponse::Created().json(stored))
}

pub async fn get(data: web::Data<server::State>, id: web::Path<Id>)
-> actix_web::Result<impl Responder> {
    let id = id.into_inner();
    let racer = util::find_racer(&**data.db()?, id)
        .map_err(ErrorInternalServerError)?
        .ok_or_else(|| not_found(id))?;
    Ok(web::Json(racer))
}

pub async fn put(
    data: web::Data<server::State>,
    id: web::Path<Id>,
    racer: web::Json<NewRacer>,
) -> actix_web::Result<impl Responder> {
    let id = id.into_inner();
    let mut db = data.db()?;
    util::find_racer(&**db, id)
        .map_err(ErrorInternalServerError)?
        .ok_or_else(|| not_found(id))?;
    let stored = StoredRacer { id, data: Racer::from(racer.into_inner()) };
    util::update_racer(&mut **db, &stored)
        .map_err(ErrorInternalServerError)?;
    Ok(web::Json(stored))
}

pub async fn delete(data: web::Data<server::State>, id: web::Path<Id>)
-> actix_web::Result<HttpResponse> {
    let id = id.into_inner();
    let mut db = data.db()?;
    util::find_racer(&**db, id)
        .map_err(ErrorInternalServerError)?
        .ok_or_else(|| not_found(id))?;
    util::delete_racer(&mut **db, id)
        .map_err(ErrorInternalServerError)?;
    Ok(api::no_content())
}
