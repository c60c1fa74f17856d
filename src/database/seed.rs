use chrono::Utc;
use rust_decimal::Decimal;
use tracing::info;

use super::models::NewProduct;
use super::store::{ProductStore, StoreError};

/// (name, category, price in cents, stock quantity)
const STARTER_PRODUCTS: &[(&str, &str, i64, i32)] = &[
    ("Wireless Mouse", "Electronics", 1999, 120),
    ("Mechanical Keyboard", "Electronics", 4999, 80),
    ("Bluetooth Headphones", "Electronics", 5999, 45),
    ("LED Monitor 24-inch", "Electronics", 12999, 40),
];

/// Insert the starter catalogue when the store is empty.
///
/// Returns the number of products inserted; zero when the store already
/// holds data.
pub async fn seed_products(store: &dyn ProductStore) -> Result<usize, StoreError> {
    if store.count().await? > 0 {
        info!("Product store already populated, skipping seed");
        return Ok(0);
    }

    let now = Utc::now();
    for (name, category, cents, stock) in STARTER_PRODUCTS {
        store
            .insert(NewProduct {
                name: (*name).to_string(),
                category: (*category).to_string(),
                price: Decimal::new(*cents, 2),
                stock_quantity: *stock,
                created_at: now,
            })
            .await?;
    }

    info!(count = STARTER_PRODUCTS.len(), "Seeded product store");
    Ok(STARTER_PRODUCTS.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::store::InMemoryProductStore;

    #[tokio::test]
    async fn seeds_empty_store_once() {
        let store = InMemoryProductStore::new();

        assert_eq!(seed_products(&store).await.unwrap(), 4);
        assert_eq!(seed_products(&store).await.unwrap(), 0);
        assert_eq!(store.count().await.unwrap(), 4);
    }

    #[tokio::test]
    async fn seeded_prices_are_exact() {
        let store = InMemoryProductStore::new();
        seed_products(&store).await.unwrap();

        let prices: Vec<String> = store
            .scan_all()
            .await
            .unwrap()
            .iter()
            .map(|p| p.price.to_string())
            .collect();
        assert_eq!(prices, vec!["19.99", "49.99", "59.99", "129.99"]);
    }
}
