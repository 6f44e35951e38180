use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::{any::AnyRow, FromRow, Row as _};

use crate::db::models::Page;

pub mod manager;

/// Trait for managing authors.
#[async_trait]
pub trait Manager {
    /// Create a new author; the store assigns the id.
    async fn create(&self, name: &str, age: i64) -> anyhow::Result<Author>;
    /// Find an author by id.
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Author>>;
    /// Find all authors, optionally windowed by `page`.
    async fn find_all(&self, page: Option<Page>) -> anyhow::Result<Vec<Author>>;
    /// Overwrite every field of an author. Returns `None` when the id does
    /// not exist, in which case nothing was written.
    async fn update(&self, id: i64, name: &str, age: i64) -> anyhow::Result<Option<Author>>;
    /// Overwrite only the supplied fields of an author. Returns `None` when
    /// the id does not exist, in which case nothing was written.
    async fn partial_update(
        &self,
        id: i64,
        name: Option<&str>,
        age: Option<i64>,
    ) -> anyhow::Result<Option<Author>>;
    /// Delete an author. Returns `false` when the id does not exist; a
    /// second delete of the same id reports `false` again.
    async fn delete(&self, id: i64) -> anyhow::Result<bool>;
}

#[derive(Deserialize, Serialize, Debug, Eq, PartialEq)]
/// Model for an author.
pub struct Author {
    /// Store-assigned identifier. Unique, immutable once assigned.
    pub id: i64,
    /// Full name of the author.
    pub name: String,
    /// Age of the author in years.
    pub age: i64,
}

impl FromRow<'_, AnyRow> for Author {
    fn from_row(row: &AnyRow) -> anyhow::Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            age: row.try_get("age")?,
        })
    }
}
