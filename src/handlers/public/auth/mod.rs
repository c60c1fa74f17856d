// handlers/public/auth/mod.rs - Token acquisition
pub mod login; // POST /api/auth/login - verify credentials and issue a JWT

pub use login::login_post;
