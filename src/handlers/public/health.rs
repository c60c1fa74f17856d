use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET / - service banner
pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "message": "Product API",
        "data": {
            "name": env!("CARGO_PKG_NAME"),
            "version": version,
            "endpoints": {
                "health": "/health (public)",
                "login": "POST /api/auth/login (public - token acquisition)",
                "products": "/api/products[/:id] (protected)",
            }
        }
    }))
}

/// GET /health - liveness plus a store round-trip
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match state.products.count().await {
        Ok(products) => (
            StatusCode::OK,
            Json(json!({
                "message": "ok",
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "products": products
                }
            })),
        ),
        Err(e) => {
            tracing::error!(error = %e, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "message": "store unavailable",
                    "data": {
                        "status": "degraded",
                        "timestamp": now
                    }
                })),
            )
        }
    }
}
