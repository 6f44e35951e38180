//! Request types shared across endpoints.
use serde::Deserialize;

use crate::db::models::Page;

/// Paging query parameters accepted by the list endpoints.
///
/// Both parameters are optional; without `size` the full collection is
/// returned and `page` is ignored.
#[derive(Deserialize, Debug)]
pub struct ListParams {
    /// 0-based page number.
    pub page: Option<i64>,
    /// Number of records per page.
    pub size: Option<i64>,
}

impl ListParams {
    /// The row window these parameters select, if any.
    ///
    /// A nonpositive `size` selects no window at all rather than reaching
    /// the store as a nonsense LIMIT, and the offset saturates instead of
    /// overflowing on an absurd `page`.
    #[must_use]
    pub fn window(&self) -> Option<Page> {
        let size = self.size.filter(|&size| size > 0)?;
        Some(Page {
            limit: size,
            offset: self.page.unwrap_or(0).max(0).saturating_mul(size),
        })
    }
}
