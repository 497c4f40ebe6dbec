use serde::Deserialize;

use crate::error::ApiError;

/// Number of questions per page
pub const QUESTIONS_PER_PAGE: i64 = 10;

/// `?page=N` query string, 1-indexed, defaults to the first page
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageQuery {
    #[serde(default = "first_page")]
    pub page: i64,
}

const fn first_page() -> i64 {
    1
}

impl Default for PageQuery {
    fn default() -> Self {
        Self { page: first_page() }
    }
}

/// Row offset of a page, `None` for pages that cannot hold any question.
///
/// # Examples
/// ```
/// use trivia_api::pagination::page_offset;
///
/// assert_eq!(page_offset(1), Some(0));
/// assert_eq!(page_offset(3), Some(20));
/// assert_eq!(page_offset(0), None);
/// ```
pub fn page_offset(page: i64) -> Option<i64> {
    if page < 1 {
        return None;
    }
    (page - 1).checked_mul(QUESTIONS_PER_PAGE)
}

impl PageQuery {
    /// Offset for this page, or `NotFound` when the page number is out of range.
    pub fn offset(&self) -> Result<i64, ApiError> {
        page_offset(self.page)
            .ok_or_else(|| ApiError::NotFound(format!("page {} is out of range", self.page)))
    }
}
