//! Handlers for the authors collection.
use actix_web::{web, HttpResponse};

use crate::db::models::author::{self, Manager as _};
use crate::server::errors::{self, ApiError};

use super::request::ListParams;
use super::state::{App as AppState, Global as _};

/// Module that maps the HTTP web request body to structs.
pub mod request;

/// Handler for creating an author. The store assigns the id.
#[tracing::instrument(skip(data))]
pub async fn create(
    data: web::Data<AppState>,
    payload: web::Json<request::AuthorPayload>,
) -> Result<HttpResponse, ApiError> {
    let author = data
        .db()
        .create(&payload.name, payload.age)
        .await
        .map_err(|err| errors::database(&err))?;
    tracing::info!("Created author {}.", author.id);
    Ok(HttpResponse::Created().json(author))
}

/// Handler for listing authors, optionally paged.
#[tracing::instrument(skip(data))]
pub async fn list(
    data: web::Data<AppState>,
    params: web::Query<ListParams>,
) -> Result<HttpResponse, ApiError> {
    let authors = data
        .db()
        .find_all(params.window())
        .await
        .map_err(|err| errors::database(&err))?;
    Ok(HttpResponse::Ok().json(authors))
}

/// Handler for fetching a single author by id.
#[tracing::instrument(skip(data))]
pub async fn get(data: web::Data<AppState>, id: web::Path<i64>) -> Result<HttpResponse, ApiError> {
    let author = data
        .db()
        .find_by_id(*id)
        .await
        .map_err(|err| errors::database(&err))?;
    Ok(author.map_or_else(
        || errors::not_found("author"),
        |found| HttpResponse::Ok().json(found),
    ))
}

/// Handler for fully overwriting an author. The id itself never changes.
#[tracing::instrument(skip(data))]
pub async fn full_update(
    data: web::Data<AppState>,
    id: web::Path<i64>,
    payload: web::Json<request::AuthorPayload>,
) -> Result<HttpResponse, ApiError> {
    let updated = data
        .db()
        .update(*id, &payload.name, payload.age)
        .await
        .map_err(|err| errors::database(&err))?;
    Ok(updated.map_or_else(
        || errors::not_found("author"),
        |author| HttpResponse::Ok().json(author),
    ))
}

/// Handler for overwriting a subset of an author's fields.
#[tracing::instrument(skip(data))]
pub async fn partial_update(
    data: web::Data<AppState>,
    id: web::Path<i64>,
    payload: web::Json<request::AuthorPatch>,
) -> Result<HttpResponse, ApiError> {
    let updated = data
        .db()
        .partial_update(*id, payload.name.as_deref(), payload.age)
        .await
        .map_err(|err| errors::database(&err))?;
    Ok(updated.map_or_else(
        || errors::not_found("author"),
        |author| HttpResponse::Ok().json(author),
    ))
}

/// Handler for deleting an author.
///
/// Deleting an id that is absent (including one already deleted) is a 404,
/// never a silent success.
#[tracing::instrument(skip(data))]
pub async fn delete(
    data: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let removed = author::Manager::delete(data.db(), *id)
        .await
        .map_err(|err| errors::database(&err))?;
    if removed {
        tracing::info!("Deleted author {}.", *id);
        Ok(HttpResponse::NoContent().finish())
    } else {
        Ok(errors::not_found("author"))
    }
}
