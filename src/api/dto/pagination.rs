//! Pagination query parameters and paged response envelope.

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnError, DisplayFromStr, serde_as};

use crate::domain::paging::{Page, PageRequest};

/// Pagination query parameters (`?pageNumber=&pageSize=`).
///
/// Unparsable values are treated as absent, so they fall back to the
/// defaults of [`PageRequest`] instead of rejecting the request.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    #[serde_as(as = "DefaultOnError<Option<DisplayFromStr>>")]
    #[serde(default)]
    pub page_number: Option<i64>,

    #[serde_as(as = "DefaultOnError<Option<DisplayFromStr>>")]
    #[serde(default)]
    pub page_size: Option<i64>,
}

impl PaginationParams {
    /// Normalises the raw parameters into a [`PageRequest`].
    pub fn to_page_request(&self) -> PageRequest {
        PageRequest::new(self.page_number, self.page_size)
    }
}

/// Pagination metadata for responses.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page_number: i64,
    pub page_size: i64,
    pub total_items: i64,
    pub total_pages: i64,
}

/// A page of items together with its metadata.
#[derive(Debug, Serialize)]
pub struct PagedResponse<T> {
    pub pagination: PaginationMeta,
    pub items: Vec<T>,
}

impl<E, T: From<E>> From<Page<E>> for PagedResponse<T> {
    fn from(page: Page<E>) -> Self {
        let page = page.map(T::from);
        let pagination = PaginationMeta {
            page_number: page.page_number,
            page_size: page.page_size,
            total_items: page.total_items,
            total_pages: page.total_pages(),
        };

        Self {
            pagination,
            items: page.items,
        }
    }
}
