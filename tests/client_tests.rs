//! Tests for the HTTP adapter against a mock server
//!
//! Each test pins down the request the adapter sends and checks that the
//! response comes back untouched, whatever its status.

use listing_probe::models::NewItem;
use listing_probe::{ClientError, ItemApi};
use reqwest::StatusCode;
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

#[tokio::test]
async fn test_create_item_sends_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/1/item"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"sellerID": 515515, "name": "item1", "price": 500})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "Сохранили объявление - 0b5e4ab4-bd81-4f4b-9c84-4ed9a1b6a7e1"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = ItemApi::new(&mock_server.uri()).unwrap();
    let response = api
        .create_item(&NewItem::new(515515, "item1", 500))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.json_value().unwrap()["status"],
        "Сохранили объявление - 0b5e4ab4-bd81-4f4b-9c84-4ed9a1b6a7e1"
    );
}

#[tokio::test]
async fn test_create_item_sends_arbitrary_payloads() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/1/item"))
        .and(body_json(json!({"sellerID": "515515", "name": 500})))
        .respond_with(ResponseTemplate::new(400))
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = ItemApi::new(&mock_server.uri()).unwrap();
    let response = api
        .create_item(&json!({"sellerID": "515515", "name": 500}))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_item_info_path() {
    let mock_server = MockServer::start().await;
    let id = "0b5e4ab4-bd81-4f4b-9c84-4ed9a1b6a7e1";

    Mock::given(method("GET"))
        .and(path(format!("/api/1/item/{id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": id}])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = ItemApi::new(&mock_server.uri()).unwrap();
    let response = api.get_item_info(id).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.json_value().unwrap()[0]["id"], id);
}

#[tokio::test]
async fn test_get_item_statistics_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/1/item/statistics/abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "statistics": {"likes": 1, "viewCount": 2, "contacts": 3}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = ItemApi::new(&mock_server.uri()).unwrap();
    let response = api.get_item_statistics("abc").await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_get_seller_items_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/1/515515/item"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = ItemApi::new(&mock_server.uri()).unwrap();
    let response = api.get_seller_items(515515).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.json_value().unwrap(), json!([]));
}

#[tokio::test]
async fn test_empty_id_keeps_trailing_slash() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/1/item/"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = ItemApi::new(&mock_server.uri()).unwrap();
    let response = api.get_item_info("").await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_error_statuses_are_returned() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let api = ItemApi::new(&mock_server.uri()).unwrap();
    let response = api.get_item_info("anything").await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text(), "Internal Server Error");
    assert!(matches!(response.json_value(), Err(ClientError::Json(_))));
}

#[tokio::test]
async fn test_unreachable_service_is_a_request_error() {
    // Nothing listens on the discard port.
    let api = ItemApi::new("http://127.0.0.1:9").unwrap();
    let result = api.get_seller_items(1).await;

    assert!(matches!(result, Err(ClientError::Request(_))));
}
