//! This module contains all the sqlx structs for the database tables.

/// sqlx structs for authors table.
pub mod author;
/// sqlx structs for books table.
pub mod book;

/// Window over a listing, derived from `page`/`size` query parameters.
///
/// `offset` is a row offset, not a page number; callers convert before
/// constructing one.
#[derive(Debug, Clone, Copy)]
pub struct Page {
    /// Maximum number of rows to return.
    pub limit: i64,
    /// Number of rows to skip before the first returned row.
    pub offset: i64,
}
