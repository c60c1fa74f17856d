pub mod filter;
pub mod filter_order;
pub mod filter_where;
pub mod types;

pub use filter::{list, Filter};
pub use types::*;
