use std::cmp::Ordering;

use crate::database::Product;

use super::types::{SortDirection, SortKey};

pub struct FilterOrder;

impl FilterOrder {
    /// Stable sort by `key`. Without a key the input order is returned as is.
    ///
    /// Descending order reverses the comparison rather than the output, so
    /// equal keys keep their incoming relative order in both directions.
    pub fn apply(mut records: Vec<Product>, key: Option<SortKey>, direction: SortDirection) -> Vec<Product> {
        let Some(key) = key else {
            return records;
        };

        records.sort_by(|a, b| {
            let ord = Self::compare(key, a, b);
            match direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        });
        records
    }

    fn compare(key: SortKey, a: &Product, b: &Product) -> Ordering {
        match key {
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Price => a.price.cmp(&b.price),
            SortKey::Category => a.category.cmp(&b.category),
            SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
        }
    }
}
