use std::borrow::Cow;

use rust_decimal::Decimal;
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::services::ProductInput;

/// Body accepted by product create and update.
///
/// Missing fields fall back to empty/zero values so that they are reported
/// as validation failures rather than as malformed JSON.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductRequest {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[validate(custom(function = "not_blank"))]
    pub category: String,
    #[validate(custom(function = "positive_price"))]
    pub price: Decimal,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub stock_quantity: i32,
}

impl From<ProductRequest> for ProductInput {
    fn from(request: ProductRequest) -> Self {
        Self {
            name: request.name,
            category: request.category,
            price: request.price,
            stock_quantity: request.stock_quantity,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub username: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub password: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some(Cow::Borrowed("must not be blank"));
        return Err(error);
    }
    Ok(())
}

fn positive_price(value: &Decimal) -> Result<(), ValidationError> {
    if *value <= Decimal::ZERO {
        let mut error = ValidationError::new("not_positive");
        error.message = Some(Cow::Borrowed("must be greater than 0"));
        return Err(error);
    }
    Ok(())
}
