//! Fixtures shared by unit tests

use chrono::{DateTime, Duration, TimeZone, Utc};
use rust_decimal::Decimal;

use crate::database::Product;

pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

/// Build a stored product; `price_cents` is in hundredths and `age` offsets
/// `created_at` forward from [`epoch`] in seconds.
pub fn product(id: i64, name: &str, category: &str, price_cents: i64, stock: i32, age: i64) -> Product {
    Product {
        id,
        name: name.to_string(),
        category: category.to_string(),
        price: Decimal::new(price_cents, 2),
        stock_quantity: stock,
        created_at: epoch() + Duration::seconds(age),
    }
}

/// The four-item electronics catalogue the server seeds on startup
pub fn electronics() -> Vec<Product> {
    vec![
        product(1, "Wireless Mouse", "Electronics", 1999, 120, 0),
        product(2, "Mechanical Keyboard", "Electronics", 4999, 80, 0),
        product(3, "Bluetooth Headphones", "Electronics", 5999, 45, 0),
        product(4, "LED Monitor 24-inch", "Electronics", 12999, 40, 0),
    ]
}

/// A mixed catalogue with duplicate keys in every sortable field
pub fn mixed() -> Vec<Product> {
    vec![
        product(1, "Kettle", "Kitchen", 2500, 4, 30),
        product(2, "Blender", "Kitchen", 4000, 0, 10),
        product(3, "Desk", "Office", 15000, 2, 20),
        product(4, "Chair", "Office", 4000, 7, 10),
        product(5, "Kettle", "Kitchen", 1800, 1, 40),
        product(6, "Lamp", "Office", 2500, 0, 50),
        product(7, "Toaster", "kitchen", 3200, 9, 60),
    ]
}
