use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Raw listing parameters as they arrive on the query string
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterData {
    pub category: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

/// Product fields a listing can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Price,
    Category,
    CreatedAt,
}

impl SortKey {
    /// Case-insensitive match against the recognized keys
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "name" => Some(SortKey::Name),
            "price" => Some(SortKey::Price),
            "category" => Some(SortKey::Category),
            "createdat" => Some(SortKey::CreatedAt),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Anything other than a case-insensitive "desc" sorts ascending
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(s) if s.eq_ignore_ascii_case("desc") => SortDirection::Desc,
            _ => SortDirection::Asc,
        }
    }
}

/// Normalized listing request.
///
/// Built from [`FilterData`]: a blank category is dropped, non-positive paging
/// values fall back to the defaults and unknown sort keys are discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    pub category: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub page: u64,
    pub page_size: u64,
    pub sort_by: Option<SortKey>,
    pub sort_order: SortDirection,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            category: None,
            min_price: None,
            max_price: None,
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            sort_by: None,
            sort_order: SortDirection::Asc,
        }
    }
}

impl From<FilterData> for ListQuery {
    fn from(data: FilterData) -> Self {
        Self {
            category: data.category.filter(|c| !c.trim().is_empty()),
            min_price: data.min_price,
            max_price: data.max_price,
            page: positive_or(data.page, DEFAULT_PAGE),
            page_size: positive_or(data.page_size, DEFAULT_PAGE_SIZE),
            sort_by: data.sort_by.as_deref().and_then(SortKey::parse),
            sort_order: SortDirection::parse(data.sort_order.as_deref()),
        }
    }
}

fn positive_or(value: Option<i64>, default: u64) -> u64 {
    value
        .and_then(|v| u64::try_from(v).ok())
        .filter(|v| *v > 0)
        .unwrap_or(default)
}

/// One page of a filtered, sorted listing plus the counts needed to page
/// through the rest of it
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult<T> {
    pub page: u64,
    pub page_size: u64,
    pub total_count: u64,
    pub total_pages: u64,
    #[serde(rename = "data")]
    pub items: Vec<T>,
}

impl<T> PagedResult<T> {
    pub fn new(page: u64, page_size: u64, total_count: u64, items: Vec<T>) -> Self {
        Self {
            page,
            page_size,
            total_count,
            total_pages: total_pages(total_count, page_size),
            items,
        }
    }
}

/// Ceiling division; zero items means zero pages
pub fn total_pages(total_count: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total_count.div_ceil(page_size)
}
