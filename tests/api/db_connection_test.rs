use folio::db::{init, DatabaseConnection, DatabaseKind, Db as _};
use folio::db::models::author::Manager as _;
use std::matches;
use tempfile::tempdir;

#[actix_web::test]
async fn test_connect_with_sqlite_url_expect_sqlite_connection() {
    let dir = tempdir().unwrap();
    let db_url = format!(
        "sqlite://{}?mode=rwc",
        dir.path().join("folio.sqlite3").display()
    );
    let connection = DatabaseConnection::connect(&db_url).await.unwrap();
    assert!(matches!(connection.kind, DatabaseKind::Sqlite));
}

#[actix_web::test]
async fn test_connect_with_unsupported_url_expect_error() {
    let actual = DatabaseConnection::connect("mysql://localhost/folio").await;
    assert!(actual.is_err());
}

#[actix_web::test]
async fn test_bootstrap_expect_tables_usable() {
    let dir = tempdir().unwrap();
    let db_url = format!(
        "sqlite://{}?mode=rwc",
        dir.path().join("folio.sqlite3").display()
    );
    let connection = DatabaseConnection::connect(&db_url).await.unwrap();
    init::bootstrap(&connection).await.unwrap();
    // Bootstrapping twice must be a no-op, not an error.
    init::bootstrap(&connection).await.unwrap();

    let author = connection.create("Lev Tolstoy", 82).await.unwrap();
    let found = connection.find_by_id(author.id).await.unwrap().unwrap();
    assert_eq!(found, author);
}
