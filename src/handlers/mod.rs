// handlers/mod.rs - Two-tier handler layout
//
// Public (no auth)    → /, /health, /api/auth/login
// Protected (JWT)     → /api/products[/:id]
pub mod protected;
pub mod public;
