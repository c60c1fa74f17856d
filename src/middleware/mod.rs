pub mod auth;
pub mod panic;
pub mod response;

pub use auth::{jwt_auth_middleware, AuthUser};
pub use panic::handle_panic;
pub use response::{ApiResponse, ApiResult, PagedApiResult, PagedResponse};
