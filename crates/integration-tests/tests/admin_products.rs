//! Admin product and configuration endpoints against a live server.
//!
//! These tests require:
//! - A migrated `PostgreSQL` database
//! - The admin server running (cargo run -p threadline-admin)
//!
//! Run with: cargo test -p threadline-integration-tests -- --ignored

use std::collections::HashSet;

use reqwest::StatusCode;
use rust_decimal::Decimal;
use serde_json::{Value, json};

use threadline_integration_tests::{TestContext, decimal, error_body, template, unique_marker};

async fn count_named(ctx: &TestContext, name: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM shop.product WHERE name = $1")
        .bind(name)
        .fetch_one(&ctx.pool)
        .await
        .expect("count query failed")
}

#[tokio::test]
#[ignore = "Requires running admin server"]
async fn test_bulk_create_inserts_exactly_n_unique_rows() {
    let ctx = TestContext::new().await;
    let name = unique_marker();

    let resp = ctx
        .client
        .post(ctx.admin("/api/products/bulk"))
        .bearer_auth(&ctx.admin_token)
        .json(&json!({ "template": template(&name, 60), "quantity": 4 }))
        .send()
        .await
        .expect("bulk request failed");
    assert_eq!(resp.status(), StatusCode::CREATED);

    let created: Vec<Value> = resp.json().await.expect("invalid JSON");
    assert_eq!(created.len(), 4);
    let ids: HashSet<&str> = created.iter().filter_map(|p| p["id"].as_str()).collect();
    assert_eq!(ids.len(), 4);
    for product in &created {
        assert_eq!(product["name"], name.as_str());
        assert_eq!(product["image_url"], "");
    }
    assert_eq!(count_named(&ctx, &name).await, 4);
}

#[tokio::test]
#[ignore = "Requires running admin server"]
async fn test_bulk_create_rejections_insert_nothing() {
    let ctx = TestContext::new().await;
    let name = unique_marker();

    let resp = ctx
        .client
        .post(ctx.admin("/api/products/bulk"))
        .bearer_auth(&ctx.admin_token)
        .json(&json!({ "template": template(&name, 60), "quantity": 0 }))
        .send()
        .await
        .expect("bulk request failed");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = ctx
        .client
        .post(ctx.admin("/api/products/bulk"))
        .bearer_auth(&ctx.admin_token)
        .json(&json!({ "template": null, "quantity": 3 }))
        .send()
        .await
        .expect("bulk request failed");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("invalid JSON");
    assert_eq!(body, error_body("a product template is required"));

    assert_eq!(count_named(&ctx, &name).await, 0);
}

#[tokio::test]
#[ignore = "Requires running admin server"]
async fn test_cost_estimate_uses_configuration() {
    let ctx = TestContext::new().await;

    let resp = ctx
        .client
        .put(ctx.admin("/api/configuration"))
        .bearer_auth(&ctx.admin_token)
        .json(&json!({ "price_per_pound": "5", "exchange_rate": "2" }))
        .send()
        .await
        .expect("configuration request failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let mut t = template(&unique_marker(), 100);
    t.weight = Some(Decimal::from(2));
    t.purchase_cost = Some(Decimal::from(10));
    let product = ctx.create_product(&t).await;

    let estimate: Value = ctx
        .client
        .get(ctx.admin(&format!(
            "/api/products/{}/cost",
            product["id"].as_str().unwrap_or_default()
        )))
        .bearer_auth(&ctx.admin_token)
        .send()
        .await
        .expect("cost request failed")
        .json()
        .await
        .expect("invalid JSON");

    assert_eq!(decimal(&estimate["shipping_cost"]), Decimal::from(10));
    assert_eq!(decimal(&estimate["landed_cost"]), Decimal::from(20));
    assert_eq!(decimal(&estimate["landed_cost_local"]), Decimal::from(40));
    assert_eq!(decimal(&estimate["margin"]), Decimal::from(60));
}

#[tokio::test]
#[ignore = "Requires running admin server"]
async fn test_product_update_and_delete() {
    let ctx = TestContext::new().await;
    let product = ctx.create_product(&template(&unique_marker(), 30)).await;
    let url = ctx.admin(&format!(
        "/api/products/{}",
        product["id"].as_str().unwrap_or_default()
    ));

    let updated: Value = ctx
        .client
        .put(&url)
        .bearer_auth(&ctx.admin_token)
        .json(&json!({ "stock": 9 }))
        .send()
        .await
        .expect("update request failed")
        .json()
        .await
        .expect("invalid JSON");
    assert_eq!(updated["stock"], 9);
    assert_eq!(updated["name"], product["name"]);

    let resp = ctx
        .client
        .delete(&url)
        .bearer_auth(&ctx.admin_token)
        .send()
        .await
        .expect("delete request failed");
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = ctx
        .client
        .delete(&url)
        .bearer_auth(&ctx.admin_token)
        .send()
        .await
        .expect("delete request failed");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
