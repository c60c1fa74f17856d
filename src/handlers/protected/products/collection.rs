use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Extension, Query, State,
    },
    Json,
};
use validator::Validate;

use crate::api::{ProductRequest, ProductView};
use crate::filter::{FilterData, ListQuery};
use crate::middleware::{ApiResponse, ApiResult, AuthUser, PagedApiResult, PagedResponse};
use crate::state::AppState;

/// GET /api/products - filtered, sorted, paginated listing
///
/// Query: `category`, `minPrice`, `maxPrice`, `page`, `pageSize`, `sortBy`,
/// `sortOrder`. Out-of-range paging and unknown sort keys are normalized,
/// never rejected.
pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<FilterData>, QueryRejection>,
) -> PagedApiResult<ProductView> {
    let Query(data) = query?;
    let query = ListQuery::from(data);

    let result = state.products.list(&query).await?;
    Ok(PagedResponse::new("Products retrieved successfully.", result))
}

/// POST /api/products - create a product
pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> ApiResult<ProductView> {
    let Json(payload) = payload?;
    payload.validate()?;

    let created = state.products.create(payload.into()).await?;
    tracing::info!(id = created.id, user = %user.username, "Product created via API");

    let location = format!("/api/products/{}", created.id);
    Ok(ApiResponse::created("Product created successfully.", created, location))
}
