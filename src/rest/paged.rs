//! Lazy pagination over Ecwid listing endpoints.
//!
//! Ecwid lists resources with offset/limit paging: `GET <path>?limit=L&offset=O`
//! answers `{"total": N, "items": [...]}`. This module provides
//! [`PagedResponse`], which walks such a listing one page at a time and hands
//! out mapped items on demand.
//!
//! # Paging Rules
//!
//! - The first pull fetches the start page (default 1) with the page size
//!   (default 100). Its `total` fixes the page count for the whole walk, even
//!   if the upstream total changes later.
//! - A page is fetched only when the previous one is exhausted and the caller
//!   asks for more. At most one page is held in memory.
//! - A failed fetch is returned once and ends the listing; items already
//!   returned stay valid.
//! - The listing is consumed exactly once. Build a new one to start over.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::collections::HashMap;
//!
//! let mut orders = client.get_all("orders", HashMap::new(), |raw| raw)?;
//! while let Some(order) = orders.next().await {
//!     let order = order?;
//!     println!("{:?}", order.get("orderNumber"));
//! }
//! ```

use std::collections::HashMap;
use std::fmt;

use futures::Stream;
use serde_json::{Map, Value};

use crate::clients::{Client, Transport};
use crate::rest::ResourceError;

/// Page size used when the filters do not carry a `limit`.
pub const DEFAULT_PAGE_SIZE: u64 = 100;

/// First page fetched when the filters do not carry a `page`.
pub const DEFAULT_START_PAGE: u64 = 1;

const PAGE_PARAM: &str = "page";
const LIMIT_PARAM: &str = "limit";
const OFFSET_PARAM: &str = "offset";

/// One page to fetch from a listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number.
    pub page_number: u64,
    /// Items per page.
    pub page_size: u64,
    /// Additional query parameters, passed through unchanged.
    pub filters: HashMap<String, String>,
}

impl PageRequest {
    /// Splits `page` and `limit` out of caller filters.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidPagination`] if either is present but
    /// not a positive integer, or if the start page's offset does not fit in
    /// a `u64`.
    pub fn from_filters(mut filters: HashMap<String, String>) -> Result<Self, ResourceError> {
        let page_number = take_positive(&mut filters, PAGE_PARAM)?.unwrap_or(DEFAULT_START_PAGE);
        let page_size = take_positive(&mut filters, LIMIT_PARAM)?.unwrap_or(DEFAULT_PAGE_SIZE);
        let request = Self {
            page_number,
            page_size,
            filters,
        };
        request.checked_offset()?;
        Ok(request)
    }

    /// Number of items before this page, or `None` if it overflows.
    #[must_use]
    pub const fn offset(&self) -> Option<u64> {
        self.page_number.saturating_sub(1).checked_mul(self.page_size)
    }

    /// Query parameters for this page: the filters plus `limit` and `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidPagination`] if the offset overflows.
    pub fn query(&self) -> Result<HashMap<String, String>, ResourceError> {
        let offset = self.checked_offset()?;
        let mut query = self.filters.clone();
        query.insert(LIMIT_PARAM.to_string(), self.page_size.to_string());
        query.insert(OFFSET_PARAM.to_string(), offset.to_string());
        Ok(query)
    }

    fn checked_offset(&self) -> Result<u64, ResourceError> {
        self.offset().ok_or_else(|| ResourceError::InvalidPagination {
            name: PAGE_PARAM,
            value: self.page_number.to_string(),
        })
    }
}

fn take_positive(
    filters: &mut HashMap<String, String>,
    name: &'static str,
) -> Result<Option<u64>, ResourceError> {
    let Some(value) = filters.remove(name) else {
        return Ok(None);
    };
    match value.trim().parse::<u64>() {
        Ok(n) if n > 0 => Ok(Some(n)),
        _ => Err(ResourceError::InvalidPagination { name, value }),
    }
}

/// One fetched page of a listing.
#[derive(Clone, Debug, PartialEq)]
pub struct PageResult {
    /// Raw items in upstream order.
    pub items: Vec<Map<String, Value>>,
    /// The listing size reported by the server.
    pub total_count: u64,
    /// The page these items belong to.
    pub page_number: u64,
    /// `ceil(total_count / page_size)`.
    pub total_pages: u64,
}

impl PageResult {
    /// Reads a listing body of the form `{"total": N, "items": [...]}`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MalformedResponse`] if `total` is not a
    /// non-negative integer, or `items` is not an array of objects.
    pub fn from_body(path: &str, body: &Value, request: &PageRequest) -> Result<Self, ResourceError> {
        let total_count = body
            .get("total")
            .and_then(Value::as_u64)
            .ok_or_else(|| ResourceError::malformed(path, "listing has no integer 'total'"))?;

        let items = body
            .get("items")
            .and_then(Value::as_array)
            .ok_or_else(|| ResourceError::malformed(path, "listing has no 'items' array"))?
            .iter()
            .map(|item| match item {
                Value::Object(attributes) => Ok(attributes.clone()),
                other => Err(ResourceError::malformed(
                    path,
                    format!("listing item is not an object: {other}"),
                )),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            items,
            total_count,
            page_number: request.page_number,
            total_pages: total_pages(total_count, request.page_size),
        })
    }
}

/// Number of pages needed for `total_count` items.
#[must_use]
pub const fn total_pages(total_count: u64, page_size: u64) -> u64 {
    total_count.div_ceil(page_size)
}

/// A lazy, forward-only listing of mapped items.
///
/// Created by [`Client::get_all`] and the resource endpoints' `all` methods.
/// Pull items with [`next`](Self::next), or turn the listing into a
/// [`Stream`] with [`into_stream`](Self::into_stream).
pub struct PagedResponse<'a, T, F> {
    client: &'a Client<T>,
    path: String,
    request: PageRequest,
    mapper: F,
    total_pages: Option<u64>,
    buffer: std::vec::IntoIter<Map<String, Value>>,
    finished: bool,
    pages_fetched: u64,
}

/// A listing whose items are mapped by a plain function.
pub type Listing<'a, T, R> = PagedResponse<'a, T, fn(Map<String, Value>) -> R>;

impl<'a, T, F, R> PagedResponse<'a, T, F>
where
    T: Transport,
    F: FnMut(Map<String, Value>) -> R,
{
    /// Creates a listing. No request is sent until the first pull.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidPagination`] for a bad `page` or `limit`.
    pub fn new(
        client: &'a Client<T>,
        path: &str,
        filters: HashMap<String, String>,
        mapper: F,
    ) -> Result<Self, ResourceError> {
        Ok(Self {
            client,
            path: path.to_string(),
            request: PageRequest::from_filters(filters)?,
            mapper,
            total_pages: None,
            buffer: Vec::new().into_iter(),
            finished: false,
            pages_fetched: 0,
        })
    }

    /// Returns the next item, fetching the next page if needed.
    ///
    /// Returns `None` once the listing is exhausted or after an error has
    /// been returned.
    pub async fn next(&mut self) -> Option<Result<R, ResourceError>> {
        loop {
            if let Some(raw) = self.buffer.next() {
                return Some(Ok((self.mapper)(raw)));
            }
            if self.finished {
                return None;
            }
            if let Some(total_pages) = self.total_pages {
                if self.request.page_number >= total_pages {
                    self.finished = true;
                    return None;
                }
                self.request.page_number += 1;
            }

            match self.client.fetch_page(&self.path, &self.request).await {
                Ok(page) => {
                    self.pages_fetched += 1;
                    let total_pages = *self.total_pages.get_or_insert(page.total_pages);
                    tracing::debug!(
                        path = %self.path,
                        page = page.page_number,
                        total_pages,
                        items = page.items.len(),
                        "Fetched Ecwid listing page"
                    );
                    self.buffer = page.items.into_iter();
                }
                Err(error) => {
                    self.finished = true;
                    return Some(Err(error));
                }
            }
        }
    }

    /// Drains the listing into a vector, stopping at the first error.
    ///
    /// # Errors
    ///
    /// Returns the first fetch error encountered.
    pub async fn collect_all(mut self) -> Result<Vec<R>, ResourceError> {
        let mut items = Vec::new();
        while let Some(item) = self.next().await {
            items.push(item?);
        }
        Ok(items)
    }

    /// Turns the listing into a [`Stream`].
    pub fn into_stream(self) -> impl Stream<Item = Result<R, ResourceError>> + 'a
    where
        F: 'a,
        R: 'a,
    {
        futures::stream::unfold(self, |mut listing| async move {
            let item = listing.next().await?;
            Some((item, listing))
        })
    }
}

impl<T, F> PagedResponse<'_, T, F> {
    /// Returns the page count, known after the first fetch.
    #[must_use]
    pub const fn total_pages(&self) -> Option<u64> {
        self.total_pages
    }

    /// Returns how many pages have been requested so far.
    #[must_use]
    pub const fn pages_fetched(&self) -> u64 {
        self.pages_fetched
    }

    /// Returns the page size.
    #[must_use]
    pub const fn page_size(&self) -> u64 {
        self.request.page_size
    }

    /// Returns the listing path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl<T, F> fmt::Debug for PagedResponse<'_, T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PagedResponse")
            .field("path", &self.path)
            .field("request", &self.request)
            .field("total_pages", &self.total_pages)
            .field("pages_fetched", &self.pages_fetched)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}
