pub mod format;
pub mod requests;

pub use format::{product_to_view, products_to_views, ProductView};
pub use requests::{LoginRequest, ProductRequest};
