use serde::Serialize;

/// One page of query results.
///
/// `current_page` is 1-based; `total_pages` is the ceiling of
/// `total / page_size`, so an empty result set has zero pages.
#[derive(Serialize, Clone, Debug)]
pub struct PagedResult<T> {
    pub entries: Vec<T>,
    pub total: u64,
    pub current_page: u64,
    pub total_pages: u64,
}
