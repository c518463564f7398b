use reqwest::StatusCode;
use serde_json::{Value, json};

use super::checks::{
    CREATE_STEP, DEFAULT_PRICE, ITEM_NAME, create_and_get_id, creation_status, expect_status,
};
use crate::client::ItemApi;
use crate::errors::ScenarioError;
use crate::models::NewItem;

/// Sends each payload and expects the service to reject it with 400
async fn expect_all_rejected(
    api: &ItemApi,
    payloads: [(&'static str, Value); 3],
) -> Result<(), ScenarioError> {
    for (step, payload) in payloads {
        let response = api.create_item(&payload).await?;
        expect_status(step, &response, StatusCode::BAD_REQUEST)?;
    }
    Ok(())
}

pub(super) async fn create_item(api: &ItemApi, seller_id: i64) -> Result<(), ScenarioError> {
    let response = api
        .create_item(&NewItem::new(seller_id, ITEM_NAME, DEFAULT_PRICE))
        .await?;
    expect_status(CREATE_STEP, &response, StatusCode::OK)?;
    creation_status(CREATE_STEP, &response)?;
    Ok(())
}

pub(super) async fn create_item_without_required_field(
    api: &ItemApi,
    seller_id: i64,
) -> Result<(), ScenarioError> {
    expect_all_rejected(
        api,
        [
            (
                "create item without sellerID",
                json!({ "name": ITEM_NAME, "price": DEFAULT_PRICE }),
            ),
            (
                "create item without name",
                json!({ "sellerID": seller_id, "price": DEFAULT_PRICE }),
            ),
            (
                "create item without price",
                json!({ "sellerID": seller_id, "name": ITEM_NAME }),
            ),
        ],
    )
    .await
}

pub(super) async fn create_item_unexpected_field_type(
    api: &ItemApi,
    seller_id: i64,
) -> Result<(), ScenarioError> {
    expect_all_rejected(
        api,
        [
            (
                "create item with string sellerID",
                json!({ "sellerID": seller_id.to_string(), "name": ITEM_NAME, "price": DEFAULT_PRICE }),
            ),
            (
                "create item with numeric name",
                json!({ "sellerID": seller_id, "name": 500, "price": DEFAULT_PRICE }),
            ),
            (
                "create item with string price",
                json!({ "sellerID": seller_id, "name": ITEM_NAME, "price": DEFAULT_PRICE.to_string() }),
            ),
        ],
    )
    .await
}

pub(super) async fn create_item_negative_seller_id(
    api: &ItemApi,
    seller_id: i64,
) -> Result<(), ScenarioError> {
    let response = api
        .create_item(&NewItem::new(-seller_id, ITEM_NAME, DEFAULT_PRICE))
        .await?;
    expect_status("create item with negative sellerID", &response, StatusCode::BAD_REQUEST)
}

pub(super) async fn create_item_negative_price(
    api: &ItemApi,
    seller_id: i64,
) -> Result<(), ScenarioError> {
    let response = api
        .create_item(&NewItem::new(seller_id, ITEM_NAME, -DEFAULT_PRICE))
        .await?;
    expect_status("create item with negative price", &response, StatusCode::BAD_REQUEST)
}

pub(super) async fn create_two_distinct_items(
    api: &ItemApi,
    seller_id: i64,
) -> Result<(), ScenarioError> {
    let item = NewItem::new(seller_id, ITEM_NAME, DEFAULT_PRICE);
    let first = create_and_get_id(api, &item).await?;
    let second = create_and_get_id(api, &item).await?;

    if first == second {
        return Err(ScenarioError::DuplicateId {
            step: "create the same item twice",
            id: first,
        });
    }
    Ok(())
}
