use crate::api::format::{products_to_views, ProductView};
use crate::database::Product;

use super::filter_order::FilterOrder;
use super::filter_where::FilterWhere;
use super::types::{ListQuery, PagedResult};

/// Listing pipeline: filter, sort, count, paginate, project.
///
/// Runs eagerly over an owned store snapshot and never touches the store
/// itself. Every normalized [`ListQuery`] produces a result; an empty page is
/// a valid outcome.
pub struct Filter {
    query: ListQuery,
}

impl Filter {
    pub fn new(query: ListQuery) -> Self {
        Self { query }
    }

    pub fn execute(&self, snapshot: Vec<Product>) -> PagedResult<ProductView> {
        let filtered = FilterWhere::apply(snapshot, &self.query);
        let sorted = FilterOrder::apply(filtered, self.query.sort_by, self.query.sort_order);
        let total_count = sorted.len() as u64;

        let page = Self::paginate(&sorted, self.query.page, self.query.page_size);
        PagedResult::new(
            self.query.page,
            self.query.page_size,
            total_count,
            products_to_views(page),
        )
    }

    fn paginate(records: &[Product], page: u64, page_size: u64) -> &[Product] {
        let skip = page.saturating_sub(1).saturating_mul(page_size);
        let start = usize::try_from(skip).unwrap_or(usize::MAX).min(records.len());
        let take = usize::try_from(page_size).unwrap_or(usize::MAX);
        let end = start.saturating_add(take).min(records.len());
        &records[start..end]
    }
}

/// Run the listing pipeline for one request
pub fn list(snapshot: Vec<Product>, query: &ListQuery) -> PagedResult<ProductView> {
    Filter::new(query.clone()).execute(snapshot)
}
