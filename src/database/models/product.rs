use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// A product row as held by the store.
///
/// `id` is assigned by the store on insert and `created_at` is stamped once
/// when the product is created; neither changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub price: Decimal,
    pub stock_quantity: i32,
    pub created_at: DateTime<Utc>,
}

/// Fields for a product that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub price: Decimal,
    pub stock_quantity: i32,
    pub created_at: DateTime<Utc>,
}

/// Mutable fields of an existing product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductChanges {
    pub name: String,
    pub category: String,
    pub price: Decimal,
    pub stock_quantity: i32,
}

impl NewProduct {
    pub fn into_product(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            category: self.category,
            price: self.price,
            stock_quantity: self.stock_quantity,
            created_at: self.created_at,
        }
    }
}

impl Product {
    /// Overwrite the mutable fields in place
    pub fn apply(&mut self, changes: ProductChanges) {
        self.name = changes.name;
        self.category = changes.category;
        self.price = changes.price;
        self.stock_quantity = changes.stock_quantity;
    }

    pub fn in_stock(&self) -> bool {
        self.stock_quantity > 0
    }
}
