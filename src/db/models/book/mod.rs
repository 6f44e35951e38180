use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::db::models::Page;

pub mod manager;

/// Trait for managing books.
#[async_trait]
pub trait Manager {
    /// Create or fully overwrite the book with `isbn`.
    async fn save(&self, isbn: &str, title: &str) -> anyhow::Result<Book>;
    /// Find a book by isbn.
    async fn find_by_isbn(&self, isbn: &str) -> anyhow::Result<Option<Book>>;
    /// Find all books, optionally windowed by `page`.
    async fn find_all(&self, page: Option<Page>) -> anyhow::Result<Vec<Book>>;
    /// Overwrite only the supplied fields of a book. Returns `None` when the
    /// isbn does not exist, in which case nothing was written.
    async fn partial_update(&self, isbn: &str, title: Option<&str>)
        -> anyhow::Result<Option<Book>>;
    /// Delete a book. Returns `false` when the isbn does not exist.
    async fn delete(&self, isbn: &str) -> anyhow::Result<bool>;
    /// Whether a book with `isbn` exists.
    async fn exists(&self, isbn: &str) -> anyhow::Result<bool>;
}

#[derive(sqlx::FromRow, Deserialize, Serialize, Debug, Eq, PartialEq)]
/// Model for a book.
pub struct Book {
    /// Client-supplied natural key. Immutable once created.
    pub isbn: String,
    /// Title of the book.
    pub title: String,
}
