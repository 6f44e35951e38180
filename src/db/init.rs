use crate::db::{Db as _, DatabaseConnection, DatabaseKind};
use std::env;

/// Connects to a database and creates the catalogue tables if they are missing.
/// We use `SQLite` by default, but we can override this by setting the `DATABASE_URL` environment variable.
///
/// # Errors
/// Errors if connection to database fails.
/// Connections can fail if the database is not running, or if the database URL is invalid.
pub async fn connect() -> anyhow::Result<DatabaseConnection> {
    let db_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| String::from("sqlite://folio.sqlite3?mode=rwc"));
    let connection = DatabaseConnection::connect(&db_url).await?;
    tracing::info!("Connected to database");
    bootstrap(&connection).await?;
    Ok(connection)
}

/// Creates the `authors` and `books` tables if they do not exist yet.
///
/// There is deliberately no migration system; the schema is two flat tables
/// and is created in place on first connect.
///
/// # Errors
/// Errors if the statements cannot be executed against the store.
pub async fn bootstrap(connection: &DatabaseConnection) -> anyhow::Result<()> {
    let authors_table = match connection.kind {
        DatabaseKind::Sqlite => {
            "
            CREATE TABLE IF NOT EXISTS authors (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                age BIGINT NOT NULL
            )
        "
        }
        DatabaseKind::Postgres => {
            "
            CREATE TABLE IF NOT EXISTS authors (
                id BIGSERIAL PRIMARY KEY,
                name TEXT NOT NULL,
                age BIGINT NOT NULL
            )
        "
        }
    };
    let books_table = "
        CREATE TABLE IF NOT EXISTS books (
            isbn TEXT PRIMARY KEY,
            title TEXT NOT NULL
        )
    ";
    sqlx::query(authors_table).execute(&connection.pool).await?;
    sqlx::query(books_table).execute(&connection.pool).await?;
    Ok(())
}
