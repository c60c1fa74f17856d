// handlers/public/mod.rs - Endpoints reachable without a bearer token
//
// Token acquisition plus liveness/info routes. Everything here must treat its
// input as untrusted.
pub mod auth;
pub mod health;

pub use health::{health, root};
