//! Serve the catalogue API.
#![allow(clippy::exit, clippy::module_name_repetitions)]
use crate::db;
use crate::server::api::routes;
use crate::server::api::state::{App as AppState, Global};
use crate::server::errors;
use crate::server::tracing::FolioRootSpanBuilder;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::{App, Error, HttpServer};

use std::{io, process};

use actix_http::body::MessageBody;
use actix_service::ServiceFactory;
use tracing_actix_web::TracingLogger;

/// Serve the catalogue API over HTTP.
///
/// The store is taken from the `DATABASE_URL` environment variable, falling
/// back to a local `SQLite` file.
#[actix_web::main]
pub async fn serve(bind: &str, port: u16) -> io::Result<()> {
    tracing::info!("Running Folio server on http://{bind}:{port}.");

    let db = match db::init::connect().await {
        Ok(db) => db,
        Err(err) => {
            tracing::error!(
                "error: could not connect to database. Confirm that DATABASE_URL env var is set correctly."
            );
            tracing::error!("Error: {:?}", err);
            process::exit(1);
        }
    };

    let state = AppState { db };

    HttpServer::new(move || init_app(&state))
        .bind((bind, port))?
        .run()
        .await
}

/// Initialize the application and all routing at start-up time.
///
/// # Arguments
/// * `state` - The application state
pub fn init_app<T: Global + Clone + 'static>(
    state: &T,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Response = ServiceResponse<impl MessageBody>,
        Config = (),
        InitError = (),
        Error = Error,
    >,
> {
    let app = App::new()
        .wrap(TracingLogger::<FolioRootSpanBuilder>::new())
        .app_data(errors::json_config());
    routes::register_app(app, state)
}
