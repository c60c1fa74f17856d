pub mod collection;
pub mod record;

// Re-export handler functions for use in routing
pub use collection::list as products_list;
pub use collection::create as products_create;
pub use record::get as product_get;
pub use record::put as product_put;
pub use record::delete as product_delete;
