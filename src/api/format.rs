use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::database::Product;

/// Public read shape of a product.
///
/// `in_stock` is derived from `stock_quantity` every time a view is built and
/// is never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    pub id: i64,
    pub name: String,
    pub category: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub stock_quantity: i32,
    pub created_at: DateTime<Utc>,
    pub in_stock: bool,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            category: product.category.clone(),
            price: product.price,
            stock_quantity: product.stock_quantity,
            created_at: product.created_at,
            in_stock: product.in_stock(),
        }
    }
}

/// Convert a stored product into the public wire format
pub fn product_to_view(product: &Product) -> ProductView {
    ProductView::from(product)
}

pub fn products_to_views(products: &[Product]) -> Vec<ProductView> {
    products.iter().map(product_to_view).collect()
}
