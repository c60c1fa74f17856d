use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, info};

use crate::api::format::{product_to_view, ProductView};
use crate::database::{NewProduct, ProductChanges, ProductStore, StoreError};
use crate::filter::{self, ListQuery, PagedResult};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Invalid product: {0}")]
    InvalidProduct(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Writable product fields shared by create and update
#[derive(Debug, Clone, PartialEq)]
pub struct ProductInput {
    pub name: String,
    pub category: String,
    pub price: Decimal,
    pub stock_quantity: i32,
}

impl ProductInput {
    /// Invariants every stored product must satisfy
    pub fn check(&self) -> Result<(), ServiceError> {
        if self.name.trim().is_empty() {
            return Err(ServiceError::InvalidProduct("name: must not be blank".to_string()));
        }
        if self.category.trim().is_empty() {
            return Err(ServiceError::InvalidProduct("category: must not be blank".to_string()));
        }
        if self.price <= Decimal::ZERO {
            return Err(ServiceError::InvalidProduct("price: must be greater than 0".to_string()));
        }
        if self.stock_quantity < 0 {
            return Err(ServiceError::InvalidProduct("stockQuantity: must not be negative".to_string()));
        }
        Ok(())
    }
}

/// Product operations exposed to the HTTP handlers
#[derive(Clone)]
pub struct ProductService {
    store: Arc<dyn ProductStore>,
}

impl ProductService {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<PagedResult<ProductView>, ServiceError> {
        let snapshot = self.store.scan_all().await?;
        let result = filter::list(snapshot, query);
        debug!(
            page = result.page,
            page_size = result.page_size,
            total_count = result.total_count,
            returned = result.items.len(),
            "Listed products"
        );
        Ok(result)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<ProductView>, ServiceError> {
        let product = self.store.find_by_id(id).await?;
        debug!(id, found = product.is_some(), "Looked up product");
        Ok(product.as_ref().map(product_to_view))
    }

    pub async fn create(&self, input: ProductInput) -> Result<ProductView, ServiceError> {
        input.check()?;

        let product = self
            .store
            .insert(NewProduct {
                name: input.name,
                category: input.category,
                price: input.price,
                stock_quantity: input.stock_quantity,
                created_at: Utc::now(),
            })
            .await?;

        info!(id = product.id, name = %product.name, "Created product");
        Ok(product_to_view(&product))
    }

    /// Returns `false` without touching the store when `id` does not exist
    pub async fn update(&self, id: i64, input: ProductInput) -> Result<bool, ServiceError> {
        input.check()?;

        let changes = ProductChanges {
            name: input.name,
            category: input.category,
            price: input.price,
            stock_quantity: input.stock_quantity,
        };
        let updated = self.store.update_by_id(id, changes).await?;
        if updated {
            info!(id, "Updated product");
        }
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let deleted = self.store.delete_by_id(id).await?;
        if deleted {
            info!(id, "Deleted product");
        }
        Ok(deleted)
    }

    pub async fn count(&self) -> Result<usize, ServiceError> {
        Ok(self.store.count().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{seed_products, InMemoryProductStore};
    use crate::filter::{SortDirection, SortKey};

    async fn seeded() -> ProductService {
        let store = Arc::new(InMemoryProductStore::new());
        seed_products(store.as_ref()).await.unwrap();
        ProductService::new(store)
    }

    fn input(name: &str, cents: i64) -> ProductInput {
        ProductInput {
            name: name.to_string(),
            category: "Electronics".to_string(),
            price: Decimal::new(cents, 2),
            stock_quantity: 5,
        }
    }

    #[test]
    fn check_reports_wire_field_names() {
        let mut negative = input("Cable", 300);
        negative.stock_quantity = -1;

        match negative.check() {
            Err(ServiceError::InvalidProduct(msg)) => assert_eq!(msg, "stockQuantity: must not be negative"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn list_applies_filter_sort_and_paging() {
        let service = seeded().await;
        let query = ListQuery {
            min_price: Some(Decimal::new(50, 0)),
            sort_by: Some(SortKey::Price),
            sort_order: SortDirection::Desc,
            ..Default::default()
        };

        let result = service.list(&query).await.unwrap();
        let names: Vec<&str> = result.items.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["LED Monitor 24-inch", "Bluetooth Headphones"]);
        assert_eq!(result.total_count, 2);
        assert_eq!(result.total_pages, 1);
    }

    #[tokio::test]
    async fn get_missing_id_is_none() {
        let service = seeded().await;
        assert!(service.get_by_id(404).await.unwrap().is_none());
        assert_eq!(service.get_by_id(1).await.unwrap().unwrap().name, "Wireless Mouse");
    }

    #[tokio::test]
    async fn create_assigns_id_and_timestamp() {
        let service = seeded().await;
        let before = Utc::now();

        let view = service.create(input("USB Hub", 2499)).await.unwrap();

        assert_eq!(view.id, 5);
        assert!(view.created_at >= before);
        assert!(view.in_stock);
        assert_eq!(service.count().await.unwrap(), 5);
    }

    #[tokio::test]
    async fn create_with_zero_price_is_not_persisted() {
        let service = seeded().await;

        let err = service.create(input("Freebie", 0)).await.unwrap_err();

        assert!(matches!(err, ServiceError::InvalidProduct(_)));
        assert_eq!(service.count().await.unwrap(), 4);
    }

    #[tokio::test]
    async fn update_keeps_created_at() {
        let service = seeded().await;
        let before = service.get_by_id(2).await.unwrap().unwrap();

        let mut changes = input("Silent Keyboard", 5499);
        changes.stock_quantity = 0;
        assert!(service.update(2, changes).await.unwrap());

        let after = service.get_by_id(2).await.unwrap().unwrap();
        assert_eq!(after.created_at, before.created_at);
        assert_eq!(after.name, "Silent Keyboard");
        assert!(!after.in_stock);
    }

    #[tokio::test]
    async fn update_and_delete_missing_id_leave_store_unchanged() {
        let service = seeded().await;
        let before = service.list(&ListQuery::default()).await.unwrap();

        assert!(!service.update(99, input("Ghost", 100)).await.unwrap());
        assert!(!service.delete(99).await.unwrap());

        assert_eq!(service.list(&ListQuery::default()).await.unwrap(), before);
    }

    #[tokio::test]
    async fn delete_removes_product() {
        let service = seeded().await;
        assert!(service.delete(3).await.unwrap());
        assert!(service.get_by_id(3).await.unwrap().is_none());
        assert!(!service.delete(3).await.unwrap());
    }
}
