//! Integration tests for the address endpoints.
//!
//! These tests require a running `PostgreSQL` database reachable through
//! `DATABASE_URL`. Run with: `cargo test -p rolodex-integration-tests -- --ignored`

use reqwest::StatusCode;
use serde_json::{Value, json};
use uuid::Uuid;

use rolodex_integration_tests::TestContext;

fn home_address(street1: &str) -> Value {
    json!({
        "nickname": "home",
        "street1": street1,
        "street2": "Flat 2",
        "city": "London",
        "state": "Greater London",
        "zipcode": "SW1Y 4LE",
    })
}

#[tokio::test]
#[ignore = "Requires PostgreSQL at DATABASE_URL"]
async fn test_new_customer_has_no_addresses() {
    let ctx = TestContext::new().await;
    let customer = ctx.create_customer("Empty").await;
    let id = customer["id"].as_str().unwrap();

    let response = ctx
        .client
        .get(ctx.url(&format!("/customer/{id}/addresses")))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let addresses: Value = response.json().await.unwrap();
    assert_eq!(addresses, json!([]));
}

#[tokio::test]
#[ignore = "Requires PostgreSQL at DATABASE_URL"]
async fn test_create_address_uses_path_customer() {
    let ctx = TestContext::new().await;
    let customer = ctx.create_customer("Ada").await;
    let id = customer["id"].as_str().unwrap();

    let mut body = home_address("12 St James's Square");
    body["customer_id"] = json!(Uuid::new_v4().to_string());
    body["id"] = json!("00000000-0000-0000-0000-000000000001");

    let response = ctx
        .client
        .post(ctx.url(&format!("/customer/{id}/addresses")))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let created: Value = response.json().await.unwrap();

    assert_eq!(created["customer_id"], id);
    assert_ne!(created["id"], "00000000-0000-0000-0000-000000000001");
    assert_eq!(created["street1"], "12 St James's Square");
    assert_eq!(created["zipcode"], "SW1Y 4LE");

    let listed: Vec<Value> = ctx
        .client
        .get(ctx.url(&format!("/customer/{id}/addresses")))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed, vec![created]);
}

#[tokio::test]
#[ignore = "Requires PostgreSQL at DATABASE_URL"]
async fn test_address_for_unknown_customer_is_rejected() {
    let ctx = TestContext::new().await;
    let missing = Uuid::new_v4();

    let response = ctx
        .client
        .post(ctx.url(&format!("/customer/{missing}/addresses")))
        .json(&home_address("1 Nowhere Lane"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM addresses WHERE customer_id = $1")
        .bind(missing)
        .fetch_one(&ctx.pool)
        .await
        .unwrap();
    assert_eq!(count.0, 0);
}

#[tokio::test]
#[ignore = "Requires PostgreSQL at DATABASE_URL"]
async fn test_street1_unique_per_customer_only() {
    let ctx = TestContext::new().await;
    let first = ctx.create_customer("First").await;
    let second = ctx.create_customer("Second").await;
    let street = format!("{} Shared Street", Uuid::new_v4().simple());

    let post = |customer: &Value| {
        let id = customer["id"].as_str().unwrap().to_owned();
        ctx.client
            .post(ctx.url(&format!("/customer/{id}/addresses")))
            .json(&home_address(&street))
            .send()
    };

    assert_eq!(post(&first).await.unwrap().status(), StatusCode::OK);
    assert_eq!(post(&second).await.unwrap().status(), StatusCode::OK);
    assert_eq!(post(&first).await.unwrap().status(), StatusCode::CONFLICT);
}
