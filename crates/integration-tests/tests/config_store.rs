//! Integration tests for the config store HTTP contract.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The config store running (cargo run -p ccom-config-store)
//!
//! They exercise the same contract the storefront's config client relies
//! on: full-document round trips, default bootstrap, and the
//! compare-and-swap password change. Tests that change the password restore
//! it afterwards so the suite can re-run against the same instance.

use ccom_core::{AppConfig, PasswordHash};
use ccom_integration_tests::config_store_base_url;
use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

fn client() -> Client {
    Client::new()
}

async fn read_config(client: &Client) -> AppConfig {
    client
        .get(format!("{}/config", config_store_base_url()))
        .send()
        .await
        .expect("Failed to read config")
        .json()
        .await
        .expect("Config response was not a document")
}

async fn read_hash(client: &Client) -> String {
    let payload: Value = client
        .get(format!("{}/auth/hash", config_store_base_url()))
        .send()
        .await
        .expect("Failed to read hash")
        .json()
        .await
        .expect("Hash response was not JSON");
    payload["hash"]
        .as_str()
        .expect("Hash response missing hash field")
        .to_string()
}

#[tokio::test]
#[ignore = "Requires running config-store service"]
async fn config_read_returns_a_document() {
    let config = read_config(&client()).await;
    assert!(!config.store.name.is_empty());
    assert!(config.product.price >= 0);
}

#[tokio::test]
#[ignore = "Requires running config-store service"]
async fn config_write_round_trips_wholesale() {
    let client = client();
    let original = read_config(&client).await;

    let mut replacement = original.clone();
    replacement.product.price = 5_500_000;
    replacement.product.discount_percent = 10;

    let response = client
        .put(format!("{}/config", config_store_base_url()))
        .json(&replacement)
        .send()
        .await
        .expect("Failed to write config");
    assert_eq!(response.status(), StatusCode::OK);

    // The write is echoed back and the next read observes it unmerged
    let echoed: AppConfig = response.json().await.expect("Echo was not a document");
    assert_eq!(echoed, replacement);
    assert_eq!(read_config(&client).await, replacement);

    // Restore
    let response = client
        .put(format!("{}/config", config_store_base_url()))
        .json(&original)
        .send()
        .await
        .expect("Failed to restore config");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "Requires running config-store service"]
async fn malformed_config_write_is_rejected() {
    let client = client();
    let before = read_config(&client).await;

    let response = client
        .put(format!("{}/config", config_store_base_url()))
        .header("content-type", "application/json")
        .body("{ this is not json")
        .send()
        .await
        .expect("Failed to send malformed write");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.expect("Rejection was not JSON");
    assert!(body["message"].is_string());

    // Stored state unchanged
    assert_eq!(read_config(&client).await, before);
}

#[tokio::test]
#[ignore = "Requires running config-store service"]
async fn auth_hash_is_lowercase_hex() {
    let hash = read_hash(&client()).await;
    assert!(PasswordHash::parse(&hash).is_ok());
    assert_eq!(hash, hash.to_lowercase());
}

#[tokio::test]
#[ignore = "Requires running config-store service"]
async fn password_change_with_wrong_current_hash_is_unauthorized() {
    let client = client();
    let before = read_hash(&client).await;

    let response = client
        .put(format!("{}/auth/password", config_store_base_url()))
        .json(&json!({
            "currentHash": PasswordHash::digest("chắc-chắn-sai").as_str(),
            "newHash": PasswordHash::digest("mật-khẩu-mới").as_str(),
        }))
        .send()
        .await
        .expect("Failed to send password change");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // A follow-up hash read shows the hash unchanged
    assert_eq!(read_hash(&client).await, before);
}

#[tokio::test]
#[ignore = "Requires running config-store service"]
async fn password_change_with_malformed_new_hash_is_bad_request() {
    let client = client();
    let before = read_hash(&client).await;

    let response = client
        .put(format!("{}/auth/password", config_store_base_url()))
        .json(&json!({
            "currentHash": before,
            "newHash": "ngắn-quá",
        }))
        .send()
        .await
        .expect("Failed to send password change");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_hash(&client).await, before);
}

#[tokio::test]
#[ignore = "Requires running config-store service"]
async fn password_change_round_trip() {
    let client = client();
    let original = read_hash(&client).await;
    let temporary = PasswordHash::digest("mật-khẩu-tạm");

    let response = client
        .put(format!("{}/auth/password", config_store_base_url()))
        .json(&json!({ "currentHash": original, "newHash": temporary.as_str() }))
        .send()
        .await
        .expect("Failed to change password");
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Response was not JSON");
    assert_eq!(body["ok"], true);

    // The change is visible immediately
    assert_eq!(read_hash(&client).await, temporary.as_str());

    // Swap back using the temporary hash as the current one
    let response = client
        .put(format!("{}/auth/password", config_store_base_url()))
        .json(&json!({ "currentHash": temporary.as_str(), "newHash": original }))
        .send()
        .await
        .expect("Failed to restore password");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "Requires running config-store service"]
async fn preflight_gets_an_empty_success_response() {
    let response = client()
        .request(
            reqwest::Method::OPTIONS,
            format!("{}/config", config_store_base_url()),
        )
        .header("origin", "http://localhost:3000")
        .header("access-control-request-method", "PUT")
        .send()
        .await
        .expect("Failed to send preflight");
    assert!(response.status().is_success());
    assert!(
        response
            .headers()
            .contains_key("access-control-allow-methods")
    );
}
