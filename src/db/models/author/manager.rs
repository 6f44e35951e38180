//! Manager for the author model.
use crate::db::models::Page;
use crate::db::{DatabaseConnection, DatabaseTransaction, Tx as _};
use async_trait::async_trait;

use super::Author;

#[async_trait]
impl super::Manager for DatabaseConnection {
    /// Insert a new author and let the store assign its id.
    ///
    /// `RETURNING` works on both backends; the `Any` driver does not surface
    /// last-insert ids for either.
    ///
    /// # Errors
    /// Errors if the author cannot be inserted into the database.
    async fn create(&self, name: &str, age: i64) -> anyhow::Result<Author> {
        let statement = "
            INSERT INTO authors ( name, age )
            VALUES ( $1, $2 )
            RETURNING id, name, age
        ";
        let mut connection = self.pool.acquire().await?;
        let author = sqlx::query_as::<_, Author>(statement)
            .bind(name)
            .bind(age)
            .fetch_one(&mut *connection)
            .await?;
        Ok(author)
    }

    /// Find an author by `id`.
    ///
    /// # Errors
    /// Errors if can't establish a connection to the database.
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Author>> {
        let statement = "
            SELECT *
            FROM authors
            WHERE id = $1
        ";
        let mut connection = self.pool.acquire().await?;
        let row = sqlx::query_as::<_, Author>(statement)
            .bind(id)
            .fetch_optional(&mut *connection)
            .await?;
        Ok(row)
    }

    /// Find all authors, optionally limited to a window of rows.
    ///
    /// # Errors
    /// Errors if can't establish a connection to the database.
    async fn find_all(&self, page: Option<Page>) -> anyhow::Result<Vec<Author>> {
        let mut connection = self.pool.acquire().await?;
        let rows = if let Some(window) = page {
            let statement = "
                SELECT *
                FROM authors
                ORDER BY id
                LIMIT $1 OFFSET $2
            ";
            sqlx::query_as::<_, Author>(statement)
                .bind(window.limit)
                .bind(window.offset)
                .fetch_all(&mut *connection)
                .await?
        } else {
            let statement = "
                SELECT *
                FROM authors
                ORDER BY id
            ";
            sqlx::query_as::<_, Author>(statement)
                .fetch_all(&mut *connection)
                .await?
        };
        Ok(rows)
    }

    /// Overwrite all fields of the author with `id`.
    ///
    /// # Errors
    /// Errors if the author cannot be updated.
    async fn update(&self, id: i64, name: &str, age: i64) -> anyhow::Result<Option<Author>> {
        let statement = "
            UPDATE authors
            SET name = $1, age = $2
            WHERE id = $3
        ";
        let mut connection = self.pool.acquire().await?;
        let result = sqlx::query(statement)
            .bind(name)
            .bind(age)
            .bind(id)
            .execute(&mut *connection)
            .await?;
        if result.rows_affected() == 0 {
            return Ok(None);
        }
        Ok(Some(Author {
            id,
            name: name.to_owned(),
            age,
        }))
    }

    /// Overwrite only the supplied fields of the author with `id`.
    ///
    /// The read and the write run in one transaction so a concurrent writer
    /// cannot slip between them.
    ///
    /// # Errors
    /// Errors if the author cannot be updated.
    async fn partial_update(
        &self,
        id: i64,
        name: Option<&str>,
        age: Option<i64>,
    ) -> anyhow::Result<Option<Author>> {
        let mut tx = DatabaseTransaction::begin(self.pool.clone()).await?;
        let statement = "
            SELECT *
            FROM authors
            WHERE id = $1
        ";
        let Some(existing) = sqlx::query_as::<_, Author>(statement)
            .bind(id)
            .fetch_optional(&mut *tx.tx)
            .await?
        else {
            tx.rollback().await?;
            return Ok(None);
        };
        let name = name.map_or(existing.name, ToOwned::to_owned);
        let age = age.unwrap_or(existing.age);
        let statement = "
            UPDATE authors
            SET name = $1, age = $2
            WHERE id = $3
        ";
        sqlx::query(statement)
            .bind(&name)
            .bind(age)
            .bind(id)
            .execute(&mut *tx.tx)
            .await?;
        tx.commit().await?;
        Ok(Some(Author { id, name, age }))
    }

    /// Delete the author with `id`.
    ///
    /// # Errors
    /// Errors if the author cannot be deleted.
    async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        let statement = "
            DELETE FROM authors
            WHERE id = $1
        ";
        let mut connection = self.pool.acquire().await?;
        let result = sqlx::query(statement)
            .bind(id)
            .execute(&mut *connection)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
