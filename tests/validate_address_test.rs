// tests/validate_address_test.rs
mod common;

use common::{expect_no_requests, mock_json, start_server};
use serde_json::json;
use shapeshift_io_rs::ShapeShiftError;

const ADDRESS: &str = "1BoatSLRHtKNngkdXEeobR76b53LETtpyT";

#[tokio::test]
async fn test_validate_address_renames_lowercase_field() {
    let (server, client) = start_server().await;
    mock_json(
        &server,
        &format!("/validateAddress/{}/btc", ADDRESS),
        json!({"isvalid": true}),
    )
    .await;

    let result = client.validate_address(ADDRESS, "btc").await.unwrap();
    assert!(result.is_valid);
    assert!(result.error.is_none());
    assert!(!result.extra.contains_key("isvalid"));

    let serialized = serde_json::to_value(&result).unwrap();
    assert_eq!(serialized, json!({"isValid": true}));
}

#[tokio::test]
async fn test_validate_address_error_field_is_not_raised() {
    let (server, client) = start_server().await;
    mock_json(
        &server,
        &format!("/validateAddress/{}/btc", ADDRESS),
        json!({"error": "bad checksum", "isvalid": false}),
    )
    .await;

    let result = client.validate_address(ADDRESS, "btc").await.unwrap();
    assert!(!result.is_valid);
    assert_eq!(result.error.as_deref(), Some("bad checksum"));
    assert!(!result.extra.contains_key("isvalid"));
}

#[tokio::test]
async fn test_validate_address_unknown_pair_text_is_still_data() {
    let (server, client) = start_server().await;
    mock_json(
        &server,
        &format!("/validateAddress/{}/zzz", ADDRESS),
        json!({"error": "Unknown pair"}),
    )
    .await;

    let result = client.validate_address(ADDRESS, "zzz").await.unwrap();
    assert!(!result.is_valid);
    assert_eq!(result.error.as_deref(), Some("Unknown pair"));
}

#[tokio::test]
async fn test_validate_address_camel_case_passes_through() {
    let (server, client) = start_server().await;
    mock_json(
        &server,
        &format!("/validateAddress/{}/btc", ADDRESS),
        json!({"isValid": true, "coin": "btc"}),
    )
    .await;

    let result = client.validate_address(ADDRESS, "btc").await.unwrap();
    assert!(result.is_valid);
    assert_eq!(result.extra.get("coin"), Some(&json!("btc")));
}

#[tokio::test]
async fn test_validate_address_non_string_error_kept_as_json_text() {
    let (server, client) = start_server().await;
    mock_json(
        &server,
        &format!("/validateAddress/{}/btc", ADDRESS),
        json!({"error": {"code": 1}, "isvalid": false}),
    )
    .await;

    let result = client.validate_address(ADDRESS, "btc").await.unwrap();
    assert!(!result.is_valid);
    assert_eq!(result.error.as_deref(), Some(r#"{"code":1}"#));
}

#[tokio::test]
async fn test_validate_address_null_error_is_absent() {
    let (server, client) = start_server().await;
    mock_json(
        &server,
        &format!("/validateAddress/{}/btc", ADDRESS),
        json!({"error": null, "isvalid": true}),
    )
    .await;

    let result = client.validate_address(ADDRESS, "btc").await.unwrap();
    assert!(result.is_valid);
    assert!(result.error.is_none());
}

#[tokio::test]
async fn test_validate_address_encodes_query_characters() {
    let (server, client) = start_server().await;
    mock_json(
        &server,
        "/validateAddress/addr%3Fx%3D1/btc%23tag",
        json!({"isvalid": false}),
    )
    .await;

    let result = client.validate_address("addr?x=1", "btc#tag").await.unwrap();
    assert!(!result.is_valid);
}

#[tokio::test]
async fn test_validate_address_dot_segments_never_hit_network() {
    let (server, client) = start_server().await;
    expect_no_requests(&server).await;

    for (address, coin) in [("..", "btc"), (".", "btc"), (ADDRESS, ".."), (ADDRESS, ".")] {
        let err = client.validate_address(address, coin).await.unwrap_err();
        assert!(matches!(err, ShapeShiftError::InvalidArgument(_)), "got {:?}", err);
    }
}
