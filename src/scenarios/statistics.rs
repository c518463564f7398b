use reqwest::StatusCode;

use super::checks::{
    DEFAULT_PRICE, ITEM_NAME, check_optional_statistics, create_and_get_id, expect_status,
};
use crate::client::ItemApi;
use crate::errors::ScenarioError;
use crate::ids::next_uuid;
use crate::models::NewItem;

const STATISTICS_STEP: &str = "read statistics";

pub(super) async fn get_item_statistics(api: &ItemApi, seller_id: i64) -> Result<(), ScenarioError> {
    let id = create_and_get_id(api, &NewItem::new(seller_id, ITEM_NAME, DEFAULT_PRICE)).await?;

    let response = api.get_item_statistics(&id).await?;
    expect_status(STATISTICS_STEP, &response, StatusCode::OK)?;
    check_optional_statistics(STATISTICS_STEP, &response.json_value()?)
}

pub(super) async fn empty_id(api: &ItemApi, seller_id: i64) -> Result<(), ScenarioError> {
    // The item is never used; it makes sure the service has data to look at.
    create_and_get_id(api, &NewItem::new(seller_id, ITEM_NAME, DEFAULT_PRICE)).await?;

    let response = api.get_item_statistics("").await?;
    expect_status("read statistics with empty id", &response, StatusCode::NOT_FOUND)
}

/// Looks a perturbed id up through the item endpoint
///
/// The statistics endpoint cannot find items at all (see
/// `Scenario::GetItemStatistics`), so a 404 from it would prove nothing.
pub(super) async fn unknown_id(api: &ItemApi, seller_id: i64) -> Result<(), ScenarioError> {
    let id = create_and_get_id(api, &NewItem::new(seller_id, ITEM_NAME, DEFAULT_PRICE)).await?;

    let response = api.get_item_info(&next_uuid(&id)).await?;
    expect_status("read statistics with unknown id", &response, StatusCode::NOT_FOUND)
}

pub(super) async fn malformed_id(api: &ItemApi) -> Result<(), ScenarioError> {
    let response = api.get_item_info("some_uuid").await?;
    expect_status("read statistics with malformed id", &response, StatusCode::BAD_REQUEST)
}
