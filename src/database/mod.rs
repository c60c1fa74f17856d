pub mod models;
pub mod seed;
pub mod store;

pub use models::{NewProduct, Product, ProductChanges};
pub use seed::seed_products;
pub use store::{InMemoryProductStore, ProductStore, StoreError};
