//! Manager for the book model.
use crate::db::models::Page;
use crate::db::{DatabaseConnection, DatabaseTransaction, Tx as _};
use async_trait::async_trait;

use super::Book;

#[async_trait]
impl super::Manager for DatabaseConnection {
    /// Upsert a book into the database.
    ///
    /// # Errors
    /// Errors if the book cannot be inserted into the database.
    async fn save(&self, isbn: &str, title: &str) -> anyhow::Result<Book> {
        let statement = "
            INSERT INTO books ( isbn, title )
            VALUES ( $1, $2 )
            ON CONFLICT ( isbn ) DO UPDATE SET title = excluded.title
        ";
        let mut connection = self.pool.acquire().await?;
        sqlx::query(statement)
            .bind(isbn)
            .bind(title)
            .execute(&mut *connection)
            .await?;
        Ok(Book {
            isbn: isbn.to_owned(),
            title: title.to_owned(),
        })
    }

    /// Find a book by `isbn`.
    ///
    /// # Errors
    /// Errors if can't establish a connection to the database.
    async fn find_by_isbn(&self, isbn: &str) -> anyhow::Result<Option<Book>> {
        let statement = "
            SELECT *
            FROM books
            WHERE isbn = $1
        ";
        let mut connection = self.pool.acquire().await?;
        let row = sqlx::query_as::<_, Book>(statement)
            .bind(isbn)
            .fetch_optional(&mut *connection)
            .await?;
        Ok(row)
    }

    /// Find all books, optionally limited to a window of rows.
    ///
    /// # Errors
    /// Errors if can't establish a connection to the database.
    async fn find_all(&self, page: Option<Page>) -> anyhow::Result<Vec<Book>> {
        let mut connection = self.pool.acquire().await?;
        let rows = if let Some(window) = page {
            let statement = "
                SELECT *
                FROM books
                ORDER BY isbn
                LIMIT $1 OFFSET $2
            ";
            sqlx::query_as::<_, Book>(statement)
                .bind(window.limit)
                .bind(window.offset)
                .fetch_all(&mut *connection)
                .await?
        } else {
            let statement = "
                SELECT *
                FROM books
                ORDER BY isbn
            ";
            sqlx::query_as::<_, Book>(statement)
                .fetch_all(&mut *connection)
                .await?
        };
        Ok(rows)
    }

    /// Overwrite only the supplied fields of the book with `isbn`.
    ///
    /// The read and the write run in one transaction so a concurrent writer
    /// cannot slip between them.
    ///
    /// # Errors
    /// Errors if the book cannot be updated.
    async fn partial_update(
        &self,
        isbn: &str,
        title: Option<&str>,
    ) -> anyhow::Result<Option<Book>> {
        let mut tx = DatabaseTransaction::begin(self.pool.clone()).await?;
        let statement = "
            SELECT *
            FROM books
            WHERE isbn = $1
        ";
        let Some(existing) = sqlx::query_as::<_, Book>(statement)
            .bind(isbn)
            .fetch_optional(&mut *tx.tx)
            .await?
        else {
            tx.rollback().await?;
            return Ok(None);
        };
        let title = title.map_or(existing.title, ToOwned::to_owned);
        let statement = "
            UPDATE books
            SET title = $1
            WHERE isbn = $2
        ";
        sqlx::query(statement)
            .bind(&title)
            .bind(isbn)
            .execute(&mut *tx.tx)
            .await?;
        tx.commit().await?;
        Ok(Some(Book {
            isbn: isbn.to_owned(),
            title,
        }))
    }

    /// Delete the book with `isbn`.
    ///
    /// # Errors
    /// Errors if the book cannot be deleted.
    async fn delete(&self, isbn: &str) -> anyhow::Result<bool> {
        let statement = "
            DELETE FROM books
            WHERE isbn = $1
        ";
        let mut connection = self.pool.acquire().await?;
        let result = sqlx::query(statement)
            .bind(isbn)
            .execute(&mut *connection)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether a book with `isbn` is present.
    ///
    /// # Errors
    /// Errors if can't establish a connection to the database.
    async fn exists(&self, isbn: &str) -> anyhow::Result<bool> {
        let statement = "
            SELECT isbn
            FROM books
            WHERE isbn = $1
        ";
        let mut connection = self.pool.acquire().await?;
        let row = sqlx::query(statement)
            .bind(isbn)
            .fetch_optional(&mut *connection)
            .await?;
        Ok(row.is_some())
    }
}
