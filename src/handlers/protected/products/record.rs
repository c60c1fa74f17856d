use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Extension, Path, State,
    },
    Json,
};
use validator::Validate;

use crate::api::{ProductRequest, ProductView};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

/// GET /api/products/:id - single product
pub async fn get(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<ProductView> {
    let Path(id) = id?;

    match state.products.get_by_id(id).await? {
        Some(product) => Ok(ApiResponse::success("Product retrieved successfully.", product)),
        None => Err(ApiError::not_found(format!("Product with id {} was not found.", id))),
    }
}

/// PUT /api/products/:id - overwrite name, category, price and stock
pub async fn put(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> ApiResult<()> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    payload.validate()?;

    if !state.products.update(id, payload.into()).await? {
        return Err(ApiError::not_found(format!(
            "Cannot update. Product with id {} was not found.",
            id
        )));
    }

    tracing::info!(id, user = %user.username, "Product updated via API");
    Ok(ApiResponse::message("Product updated successfully."))
}

/// DELETE /api/products/:id - remove a product
pub async fn delete(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<()> {
    let Path(id) = id?;

    if !state.products.delete(id).await? {
        return Err(ApiError::not_found(format!(
            "Cannot delete. Product with id {} was not found.",
            id
        )));
    }

    tracing::info!(id, user = %user.username, "Product deleted via API");
    Ok(ApiResponse::message("Product deleted successfully."))
}
