mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn get_existing_product() -> Result<()> {
    let server = common::spawn_seeded().await?;

    let res = server.authed(server.client.get(server.url("/api/products/1"))).await?.send().await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<Value>().await?;
    assert_eq!(body["message"], "Product retrieved successfully.");
    let data = &body["data"];
    assert_eq!(data["id"], 1);
    assert_eq!(data["name"], "Wireless Mouse");
    assert_eq!(data["category"], "Electronics");
    assert_eq!(data["price"].as_f64(), Some(19.99));
    assert_eq!(data["stockQuantity"], 120);
    assert_eq!(data["inStock"], true);
    assert!(data["createdAt"].is_string());
    Ok(())
}

#[tokio::test]
async fn get_missing_product_is_404() -> Result<()> {
    let server = common::spawn_seeded().await?;

    let res = server.authed(server.client.get(server.url("/api/products/999"))).await?.send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let body = res.json::<Value>().await?;
    assert_eq!(body["message"], "Product with id 999 was not found.");
    Ok(())
}

#[tokio::test]
async fn non_numeric_id_is_bad_request() -> Result<()> {
    let server = common::spawn_seeded().await?;

    let res = server.authed(server.client.get(server.url("/api/products/abc"))).await?.send().await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = res.json::<Value>().await?;
    assert_eq!(body["code"], "BAD_REQUEST");
    Ok(())
}

#[tokio::test]
async fn create_returns_201_with_location() -> Result<()> {
    let server = common::spawn_seeded().await?;
    let token = server.token().await?;

    let res = server
        .client
        .post(server.url("/api/products"))
        .bearer_auth(&token)
        .json(&json!({
            "name": "USB-C Hub",
            "category": "Accessories",
            "price": 34.5,
            "stockQuantity": 0
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(res.headers()["location"], "/api/products/5");

    let body = res.json::<Value>().await?;
    assert_eq!(body["message"], "Product created successfully.");
    assert_eq!(body["data"]["id"], 5);
    assert_eq!(body["data"]["inStock"], false);

    let fetched = server
        .client
        .get(server.url("/api/products/5"))
        .bearer_auth(&token)
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(fetched["data"], body["data"]);
    Ok(())
}

#[tokio::test]
async fn create_with_zero_price_is_rejected_and_not_stored() -> Result<()> {
    let server = common::spawn_seeded().await?;
    let token = server.token().await?;

    let res = server
        .client
        .post(server.url("/api/products"))
        .bearer_auth(&token)
        .json(&json!({ "name": "Freebie", "category": "Promo", "price": 0, "stockQuantity": 1 }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = res.json::<Value>().await?;
    assert_eq!(body["message"], "Validation failed.");
    assert_eq!(body["errors"], json!(["price: must be greater than 0"]));

    let listing = server
        .client
        .get(server.url("/api/products"))
        .bearer_auth(&token)
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(listing["totalCount"], 4);
    Ok(())
}

#[tokio::test]
async fn create_with_missing_fields_lists_every_problem() -> Result<()> {
    let server = common::spawn_seeded().await?;

    let res = server
        .authed(server.client.post(server.url("/api/products")))
        .await?
        .json(&json!({ "stockQuantity": -2 }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = res.json::<Value>().await?;
    assert_eq!(
        body["errors"],
        json!([
            "category: must not be blank",
            "name: must not be blank",
            "price: must be greater than 0",
            "stockQuantity: must not be negative"
        ])
    );
    Ok(())
}

#[tokio::test]
async fn malformed_json_is_rejected() -> Result<()> {
    let server = common::spawn_seeded().await?;

    let res = server
        .authed(server.client.post(server.url("/api/products")))
        .await?
        .header("content-type", "application/json")
        .body("{\"name\": ")
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = res.json::<Value>().await?;
    assert_eq!(body["code"], "INVALID_JSON");
    Ok(())
}

#[tokio::test]
async fn update_overwrites_fields_but_not_created_at() -> Result<()> {
    let server = common::spawn_seeded().await?;
    let token = server.token().await?;

    let before = server
        .client
        .get(server.url("/api/products/2"))
        .bearer_auth(&token)
        .send()
        .await?
        .json::<Value>()
        .await?;

    let res = server
        .client
        .put(server.url("/api/products/2"))
        .bearer_auth(&token)
        .json(&json!({
            "name": "Low-profile Keyboard",
            "category": "Peripherals",
            "price": "54.99",
            "stockQuantity": 0
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body, json!({ "message": "Product updated successfully." }));

    let after = server
        .client
        .get(server.url("/api/products/2"))
        .bearer_auth(&token)
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(after["data"]["id"], 2);
    assert_eq!(after["data"]["name"], "Low-profile Keyboard");
    assert_eq!(after["data"]["category"], "Peripherals");
    assert_eq!(after["data"]["price"].as_f64(), Some(54.99));
    assert_eq!(after["data"]["inStock"], false);
    assert_eq!(after["data"]["createdAt"], before["data"]["createdAt"]);
    Ok(())
}

#[tokio::test]
async fn update_missing_product_is_404() -> Result<()> {
    let server = common::spawn_seeded().await?;

    let res = server
        .authed(server.client.put(server.url("/api/products/77")))
        .await?
        .json(&json!({ "name": "Ghost", "category": "None", "price": 1, "stockQuantity": 1 }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let body = res.json::<Value>().await?;
    assert_eq!(body["message"], "Cannot update. Product with id 77 was not found.");
    Ok(())
}

#[tokio::test]
async fn update_with_invalid_body_is_rejected() -> Result<()> {
    let server = common::spawn_seeded().await?;

    let res = server
        .authed(server.client.put(server.url("/api/products/1")))
        .await?
        .json(&json!({ "name": "Mouse", "category": " ", "price": 10, "stockQuantity": 1 }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = res.json::<Value>().await?;
    assert_eq!(body["errors"], json!(["category: must not be blank"]));
    Ok(())
}

#[tokio::test]
async fn delete_then_lookup_is_404() -> Result<()> {
    let server = common::spawn_seeded().await?;
    let token = server.token().await?;

    let res = server
        .client
        .delete(server.url("/api/products/3"))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["message"], "Product deleted successfully.");

    let res = server
        .client
        .get(server.url("/api/products/3"))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn delete_missing_product_is_404() -> Result<()> {
    let server = common::spawn_seeded().await?;
    let token = server.token().await?;

    let res = server
        .client
        .delete(server.url("/api/products/42"))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body = res.json::<Value>().await?;
    assert_eq!(body["message"], "Cannot delete. Product with id 42 was not found.");

    let listing = server
        .client
        .get(server.url("/api/products"))
        .bearer_auth(&token)
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(listing["totalCount"], 4);
    Ok(())
}
