use crate::database::Product;

use super::types::ListQuery;

/// Conjunctive predicates over category and price bounds
pub struct FilterWhere;

impl FilterWhere {
    pub fn apply(records: Vec<Product>, query: &ListQuery) -> Vec<Product> {
        records
            .into_iter()
            .filter(|product| Self::matches(product, query))
            .collect()
    }

    /// Absent criteria impose no constraint; bounds are inclusive
    pub fn matches(product: &Product, query: &ListQuery) -> bool {
        if let Some(category) = &query.category {
            if product.category != *category {
                return false;
            }
        }
        if let Some(min) = query.min_price {
            if product.price < min {
                return false;
            }
        }
        if let Some(max) = query.max_price {
            if product.price > max {
                return false;
            }
        }
        true
    }
}
