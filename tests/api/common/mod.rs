use actix_http::Request;
use actix_service::Service;
use actix_web::{body::MessageBody, dev::ServiceResponse, test, Error};
use tempfile::TempDir;

use folio::db::{init, DatabaseConnection, Db as _};
use folio::server::api::state::App as AppState;
use folio::server::app::init_app;

/// Spin up an app over a fresh sqlite database in a temp directory.
///
/// The `TempDir` guard must be kept alive for the duration of the test;
/// dropping it deletes the database file.
pub async fn initialize_app() -> (
    impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = Error>,
    TempDir,
) {
    let td = tempfile::tempdir().unwrap();
    let db_path = td.path().join("folio.sqlite3");
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    let db = DatabaseConnection::connect(&db_url).await.unwrap();
    init::bootstrap(&db).await.unwrap();
    let state = AppState { db };
    (test::init_service(init_app(&state)).await, td)
}
