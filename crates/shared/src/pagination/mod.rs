use crate::errors::{RepositoryError, ServiceError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use utoipa::ToSchema;

/// An ordered, countable, sliceable view over a data set, independent of the
/// backing store. The ordering must be stable across `count` and `slice`;
/// a `slice` past the end returns an empty vec, not an error.
#[async_trait]
pub trait PageSource<T>: Send + Sync {
    async fn count(&self) -> Result<i64, RepositoryError>;
    async fn slice(&self, offset: i64, limit: i64) -> Result<Vec<T>, RepositoryError>;
}

/// One page of results plus total-count metadata. `page` is 1-based;
/// immutable after construction.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct PaginatedList<T> {
    pub items: Vec<T>,
    pub page: i32,
    pub page_size: i32,
    pub total_items: i64,
    pub total_pages: i32,
}

impl<T> PaginatedList<T> {
    /// Converts the page's items while keeping the paging metadata, e.g.
    /// entity to view-model mapping after the slice has been fetched.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PaginatedList<U> {
        PaginatedList {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }

    pub fn has_next_page(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Resolves the total count and the requested slice of `source` into a
/// `PaginatedList`. A page index beyond the last page yields an empty item
/// set with correct totals. Cancellation is cooperative: once `cancel`
/// triggers, no further read is started and no partial result escapes.
pub async fn paginate<T, S>(
    source: &S,
    page: i32,
    page_size: i32,
    cancel: &CancellationToken,
) -> Result<PaginatedList<T>, ServiceError>
where
    S: PageSource<T> + ?Sized,
{
    if page_size <= 0 {
        return Err(ServiceError::InvalidArgument(format!(
            "page_size must be positive, got {page_size}"
        )));
    }
    if page <= 0 {
        return Err(ServiceError::InvalidArgument(format!(
            "page must be positive, got {page}"
        )));
    }
    if cancel.is_cancelled() {
        return Err(ServiceError::Cancelled);
    }

    let total_items = tokio::select! {
        _ = cancel.cancelled() => return Err(ServiceError::Cancelled),
        count = source.count() => count?,
    };

    let offset = (page as i64 - 1) * page_size as i64;
    let items = tokio::select! {
        _ = cancel.cancelled() => return Err(ServiceError::Cancelled),
        slice = source.slice(offset, page_size as i64) => slice?,
    };

    Ok(PaginatedList {
        items,
        page,
        page_size,
        total_items,
        total_pages: (total_items as u64).div_ceil(page_size as u64) as i32,
    })
}
