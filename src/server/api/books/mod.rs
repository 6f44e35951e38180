//! Handlers for the books collection.
//!
//! Books use a client-supplied ISBN as their key, so creation happens through
//! PUT on the keyed resource rather than POST on the collection: the same
//! request creates the book when the ISBN is new (201) and overwrites it when
//! it already exists (200).
use actix_web::{web, HttpResponse};

use crate::db::models::book::{self, Manager as _};
use crate::server::errors::{self, ApiError};

use super::request::ListParams;
use super::state::{App as AppState, Global as _};

/// Module that maps the HTTP web request body to structs.
pub mod request;

/// Handler for creating or fully overwriting a book.
#[tracing::instrument(skip(data))]
pub async fn save(
    data: web::Data<AppState>,
    isbn: web::Path<String>,
    payload: web::Json<request::BookPayload>,
) -> Result<HttpResponse, ApiError> {
    let db = data.db();
    let existed = db
        .exists(&isbn)
        .await
        .map_err(|err| errors::database(&err))?;
    let book = db
        .save(&isbn, &payload.title)
        .await
        .map_err(|err| errors::database(&err))?;
    if existed {
        Ok(HttpResponse::Ok().json(book))
    } else {
        tracing::info!("Created book {}.", book.isbn);
        Ok(HttpResponse::Created().json(book))
    }
}

/// Handler for listing books, optionally paged.
#[tracing::instrument(skip(data))]
pub async fn list(
    data: web::Data<AppState>,
    params: web::Query<ListParams>,
) -> Result<HttpResponse, ApiError> {
    let books = data
        .db()
        .find_all(params.window())
        .await
        .map_err(|err| errors::database(&err))?;
    Ok(HttpResponse::Ok().json(books))
}

/// Handler for fetching a single book by isbn.
#[tracing::instrument(skip(data))]
pub async fn get(
    data: web::Data<AppState>,
    isbn: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let book = data
        .db()
        .find_by_isbn(&isbn)
        .await
        .map_err(|err| errors::database(&err))?;
    Ok(book.map_or_else(
        || errors::not_found("book"),
        |found| HttpResponse::Ok().json(found),
    ))
}

/// Handler for overwriting a subset of a book's fields.
#[tracing::instrument(skip(data))]
pub async fn partial_update(
    data: web::Data<AppState>,
    isbn: web::Path<String>,
    payload: web::Json<request::BookPatch>,
) -> Result<HttpResponse, ApiError> {
    let updated = data
        .db()
        .partial_update(&isbn, payload.title.as_deref())
        .await
        .map_err(|err| errors::database(&err))?;
    Ok(updated.map_or_else(
        || errors::not_found("book"),
        |book| HttpResponse::Ok().json(book),
    ))
}

/// Handler for deleting a book.
///
/// Deleting an isbn that is absent (including one already deleted) is a 404,
/// never a silent success.
#[tracing::instrument(skip(data))]
pub async fn delete(
    data: web::Data<AppState>,
    isbn: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let removed = book::Manager::delete(data.db(), &isbn)
        .await
        .map_err(|err| errors::database(&err))?;
    if removed {
        tracing::info!("Deleted book {}.", *isbn);
        Ok(HttpResponse::NoContent().finish())
    } else {
        Ok(errors::not_found("book"))
    }
}
