use reqwest::StatusCode;
use serde_json::{Value, json};

use super::checks::{
    CHECKED_PRICE, DEFAULT_PRICE, ITEM_NAME, check_created_today, check_optional_statistics,
    create_and_get_id, expect_field, expect_status, non_empty_list,
};
use crate::client::ItemApi;
use crate::errors::ScenarioError;
use crate::ids::next_uuid;
use crate::models::NewItem;
use crate::models::keys::{ID_KEY, NAME_KEY, PRICE_KEY, SELLER_ID_KEY};

const READ_STEP: &str = "read item back";

/// Creates an item and returns the first record the service lists for it
async fn create_and_read_back(api: &ItemApi, item: &NewItem) -> Result<(String, Value), ScenarioError> {
    let id = create_and_get_id(api, item).await?;

    let response = api.get_item_info(&id).await?;
    expect_status(READ_STEP, &response, StatusCode::OK)?;
    let mut records = non_empty_list(READ_STEP, response.json_value()?)?;

    Ok((id, records.swap_remove(0)))
}

pub(super) async fn get_item_info(api: &ItemApi, seller_id: i64) -> Result<(), ScenarioError> {
    let id = create_and_get_id(api, &NewItem::new(seller_id, ITEM_NAME, DEFAULT_PRICE)).await?;

    let response = api.get_item_info(&id).await?;
    expect_status(READ_STEP, &response, StatusCode::OK)
}

pub(super) async fn check_id(api: &ItemApi, seller_id: i64) -> Result<(), ScenarioError> {
    let (id, record) =
        create_and_read_back(api, &NewItem::new(seller_id, ITEM_NAME, DEFAULT_PRICE)).await?;
    expect_field(READ_STEP, &record, ID_KEY, json!(id))
}

pub(super) async fn check_name(api: &ItemApi, seller_id: i64) -> Result<(), ScenarioError> {
    let (_, record) =
        create_and_read_back(api, &NewItem::new(seller_id, ITEM_NAME, DEFAULT_PRICE)).await?;
    expect_field(READ_STEP, &record, NAME_KEY, json!(ITEM_NAME))
}

pub(super) async fn check_price(api: &ItemApi, seller_id: i64) -> Result<(), ScenarioError> {
    let (_, record) =
        create_and_read_back(api, &NewItem::new(seller_id, ITEM_NAME, CHECKED_PRICE)).await?;
    expect_field(READ_STEP, &record, PRICE_KEY, json!(CHECKED_PRICE))
}

pub(super) async fn check_seller_id(api: &ItemApi, seller_id: i64) -> Result<(), ScenarioError> {
    let (_, record) =
        create_and_read_back(api, &NewItem::new(seller_id, ITEM_NAME, DEFAULT_PRICE)).await?;
    expect_field(READ_STEP, &record, SELLER_ID_KEY, json!(seller_id))
}

pub(super) async fn check_created_at(api: &ItemApi, seller_id: i64) -> Result<(), ScenarioError> {
    let (_, record) =
        create_and_read_back(api, &NewItem::new(seller_id, ITEM_NAME, DEFAULT_PRICE)).await?;
    check_created_today(READ_STEP, &record)
}

pub(super) async fn check_statistics(api: &ItemApi, seller_id: i64) -> Result<(), ScenarioError> {
    let (_, record) =
        create_and_read_back(api, &NewItem::new(seller_id, ITEM_NAME, DEFAULT_PRICE)).await?;
    check_optional_statistics(READ_STEP, &record)
}

pub(super) async fn empty_id(api: &ItemApi) -> Result<(), ScenarioError> {
    let response = api.get_item_info("").await?;
    expect_status("read item with empty id", &response, StatusCode::NOT_FOUND)
}

pub(super) async fn unknown_id(api: &ItemApi, seller_id: i64) -> Result<(), ScenarioError> {
    let id = create_and_get_id(api, &NewItem::new(seller_id, ITEM_NAME, DEFAULT_PRICE)).await?;

    let response = api.get_item_info(&next_uuid(&id)).await?;
    expect_status("read item with unknown id", &response, StatusCode::NOT_FOUND)
}

pub(super) async fn malformed_id(api: &ItemApi) -> Result<(), ScenarioError> {
    let response = api.get_item_info("some-uuid").await?;
    expect_status("read item with malformed id", &response, StatusCode::BAD_REQUEST)
}
