use std::collections::BTreeMap;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::debug;

use super::models::{NewProduct, Product, ProductChanges};

/// Errors surfaced by a product store backend
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Record store for products, keyed by an auto-incrementing id.
///
/// Each call is atomic with respect to the others. `scan_all` returns an owned
/// snapshot in ascending id order, which is the natural order listings fall
/// back to when no sort is requested.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Persist a new product and return it with its assigned id
    async fn insert(&self, record: NewProduct) -> Result<Product, StoreError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, StoreError>;

    /// Returns `false` when no product has this id
    async fn update_by_id(&self, id: i64, changes: ProductChanges) -> Result<bool, StoreError>;

    /// Returns `false` when no product has this id
    async fn delete_by_id(&self, id: i64) -> Result<bool, StoreError>;

    async fn scan_all(&self) -> Result<Vec<Product>, StoreError>;

    async fn count(&self) -> Result<usize, StoreError>;
}

struct ProductTable {
    next_id: i64,
    rows: BTreeMap<i64, Product>,
}

/// In-process product table behind a read/write lock
pub struct InMemoryProductStore {
    table: RwLock<ProductTable>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(ProductTable {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }
}

impl Default for InMemoryProductStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn insert(&self, record: NewProduct) -> Result<Product, StoreError> {
        let mut table = self.table.write().await;
        let id = table.next_id;
        table.next_id += 1;

        let product = record.into_product(id);
        table.rows.insert(id, product.clone());
        debug!(id, "inserted product row");
        Ok(product)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, StoreError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn update_by_id(&self, id: i64, changes: ProductChanges) -> Result<bool, StoreError> {
        let mut table = self.table.write().await;
        match table.rows.get_mut(&id) {
            Some(product) => {
                product.apply(changes);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, StoreError> {
        let mut table = self.table.write().await;
        Ok(table.rows.remove(&id).is_some())
    }

    async fn scan_all(&self) -> Result<Vec<Product>, StoreError> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn count(&self) -> Result<usize, StoreError> {
        let table = self.table.read().await;
        Ok(table.rows.len())
    }
}
