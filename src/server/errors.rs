//! Error types and payloads for the HTTP API.
//!
//! The taxonomy is deliberately small: malformed payloads are rejected by the
//! JSON extractor with a 400 before any handler runs, a missing record is a
//! 404 built in the handler, and everything the store fails at is a 500.
//! Repositories never retry; every failure reaches this layer as a value.
use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse, ResponseError};
use derive_more::{Display, Error};
use serde_json::json;

/// Errors a handler can surface once the request has been parsed.
#[derive(Debug, Display, Error)]
pub enum ApiError {
    /// The store failed to complete the operation. Details are logged, not
    /// leaked to the client.
    #[display(fmt = "the database failed to complete the operation")]
    Database,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match *self {
            Self::Database => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}

/// Log a store failure and turn it into the opaque 500 variant.
pub fn database(err: &anyhow::Error) -> ApiError {
    tracing::error!("Database operation failed: {err:?}");
    ApiError::Database
}

/// A 404 response naming the missing resource.
pub fn not_found(resource: &str) -> HttpResponse {
    HttpResponse::NotFound().json(json!({ "error": format!("{resource} not found") }))
}

/// JSON extractor configuration.
///
/// Malformed bodies and type-mismatched fields are turned into a 400 with a
/// JSON error body here, so they never reach a handler or the repository.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
        tracing::debug!("Rejected request payload: {err}");
        let body = json!({ "error": err.to_string() });
        InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
    })
}
