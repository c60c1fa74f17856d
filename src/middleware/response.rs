use axum::{
    http::{header::LOCATION, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use serde_json::json;

use crate::filter::PagedResult;

/// Success envelope: `{ message, data }`, or just `{ message }` when there is
/// no payload
#[derive(Debug)]
pub struct ApiResponse<T: Serialize> {
    pub message: String,
    pub data: Option<T>,
    pub status_code: Option<StatusCode>,
    pub location: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful API response with default 200 status
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
            status_code: None,
            location: None,
        }
    }

    /// Create a 201 Created response pointing at the new resource
    pub fn created(message: impl Into<String>, data: T, location: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
            status_code: Some(StatusCode::CREATED),
            location: Some(location.into()),
        }
    }
}

impl ApiResponse<()> {
    /// 200 response carrying only a message
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
            status_code: None,
            location: None,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = self.status_code.unwrap_or(StatusCode::OK);

        let envelope = match &self.data {
            None => json!({ "message": self.message }),
            Some(data) => match serde_json::to_value(data) {
                Ok(value) => json!({ "message": self.message, "data": value }),
                Err(e) => {
                    tracing::error!("Failed to serialize response data: {}", e);
                    return (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(json!({
                            "error": true,
                            "message": "Failed to serialize response data"
                        })),
                    )
                        .into_response();
                }
            },
        };

        let mut response = (status, Json(envelope)).into_response();
        if let Some(location) = self.location.and_then(|l| HeaderValue::from_str(&l).ok()) {
            response.headers_mut().insert(LOCATION, location);
        }
        response
    }
}

/// Paginated envelope: `{ message, page, pageSize, totalCount, totalPages, data }`
#[derive(Debug, Serialize)]
pub struct PagedResponse<T: Serialize> {
    pub message: String,
    #[serde(flatten)]
    pub result: PagedResult<T>,
}

impl<T: Serialize> PagedResponse<T> {
    pub fn new(message: impl Into<String>, result: PagedResult<T>) -> Self {
        Self {
            message: message.into(),
            result,
        }
    }
}

impl<T: Serialize> IntoResponse for PagedResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

// Convenience type aliases
pub type ApiResult<T> = Result<ApiResponse<T>, crate::error::ApiError>;
pub type PagedApiResult<T> = Result<PagedResponse<T>, crate::error::ApiError>;
