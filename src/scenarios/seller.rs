use reqwest::StatusCode;
use serde_json::{Value, json};

use super::checks::{
    CHECKED_PRICE, CREATE_STEP, DEFAULT_PRICE, ITEM_NAME, check_created_today,
    check_optional_statistics, create_and_get_id, expect_field, expect_status, non_empty_list,
};
use crate::client::ItemApi;
use crate::errors::ScenarioError;
use crate::models::NewItem;
use crate::models::keys::{ID_KEY, NAME_KEY, PRICE_KEY};

const LIST_STEP: &str = "list seller items";

/// Lists the seller's items and returns the last one, assumed to be the
/// newest
///
/// The remote service is never reset, so earlier runs leave their items
/// under the same seller.
async fn latest_listed(api: &ItemApi, seller_id: i64) -> Result<Value, ScenarioError> {
    let response = api.get_seller_items(seller_id).await?;
    expect_status(LIST_STEP, &response, StatusCode::OK)?;
    let mut records = non_empty_list(LIST_STEP, response.json_value()?)?;

    Ok(records.pop().unwrap_or_default())
}

pub(super) async fn get_seller_items(api: &ItemApi, seller_id: i64) -> Result<(), ScenarioError> {
    let response = api
        .create_item(&NewItem::new(seller_id, ITEM_NAME, DEFAULT_PRICE))
        .await?;
    expect_status(CREATE_STEP, &response, StatusCode::OK)?;

    latest_listed(api, seller_id).await?;
    Ok(())
}

pub(super) async fn check_name(api: &ItemApi, seller_id: i64) -> Result<(), ScenarioError> {
    let response = api
        .create_item(&NewItem::new(seller_id, ITEM_NAME, DEFAULT_PRICE))
        .await?;
    expect_status(CREATE_STEP, &response, StatusCode::OK)?;

    let record = latest_listed(api, seller_id).await?;
    expect_field(LIST_STEP, &record, NAME_KEY, json!(ITEM_NAME))
}

pub(super) async fn check_id(api: &ItemApi, seller_id: i64) -> Result<(), ScenarioError> {
    let id = create_and_get_id(api, &NewItem::new(seller_id, ITEM_NAME, DEFAULT_PRICE)).await?;

    let record = latest_listed(api, seller_id).await?;
    expect_field(LIST_STEP, &record, ID_KEY, json!(id))
}

pub(super) async fn check_price(api: &ItemApi, seller_id: i64) -> Result<(), ScenarioError> {
    create_and_get_id(api, &NewItem::new(seller_id, ITEM_NAME, CHECKED_PRICE)).await?;

    let record = latest_listed(api, seller_id).await?;
    expect_field(LIST_STEP, &record, PRICE_KEY, json!(CHECKED_PRICE))
}

pub(super) async fn check_statistics(api: &ItemApi, seller_id: i64) -> Result<(), ScenarioError> {
    create_and_get_id(api, &NewItem::new(seller_id, ITEM_NAME, DEFAULT_PRICE)).await?;

    let record = latest_listed(api, seller_id).await?;
    check_optional_statistics(LIST_STEP, &record)
}

pub(super) async fn check_created_at(api: &ItemApi, seller_id: i64) -> Result<(), ScenarioError> {
    let response = api
        .create_item(&NewItem::new(seller_id, ITEM_NAME, DEFAULT_PRICE))
        .await?;
    expect_status(CREATE_STEP, &response, StatusCode::OK)?;

    let record = latest_listed(api, seller_id).await?;
    check_created_today(LIST_STEP, &record)
}
