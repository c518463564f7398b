//! Assertion helpers shared by the scenarios.

use chrono::Local;
use reqwest::StatusCode;
use serde_json::Value;

use crate::client::{ApiResponse, ItemApi};
use crate::errors::ScenarioError;
use crate::models::{CreateItemResponse, NewItem};
use crate::models::keys::{
    CONTACTS_KEY, CREATED_AT_KEY, LIKES_KEY, STATISTICS_KEY, STATUS_KEY, VIEW_COUNT_KEY,
};
use crate::timestamps::parse_created_at;

/// Name given to every created item
pub(crate) const ITEM_NAME: &str = "item1";

/// Price used when the price itself is not under test
pub(crate) const DEFAULT_PRICE: i64 = 500;

/// Price used by the scenarios that read the price back
pub(crate) const CHECKED_PRICE: i64 = 5123;

pub(crate) const CREATE_STEP: &str = "create item";

/// Fails unless the response carries `expected`
pub(crate) fn expect_status(
    step: &'static str,
    response: &ApiResponse,
    expected: StatusCode,
) -> Result<(), ScenarioError> {
    if response.status() == expected {
        Ok(())
    } else {
        Err(ScenarioError::UnexpectedStatus {
            step,
            expected: expected.as_u16(),
            actual: response.status().as_u16(),
        })
    }
}

/// Reads a creation response, requiring a non-empty string `status`
pub(crate) fn creation_status(
    step: &'static str,
    response: &ApiResponse,
) -> Result<CreateItemResponse, ScenarioError> {
    let body = response.json_value()?;
    match body.get(STATUS_KEY) {
        None | Some(Value::Null) => Err(ScenarioError::MissingField {
            step,
            field: STATUS_KEY,
        }),
        Some(Value::String(message)) if message.is_empty() => Err(ScenarioError::EmptyField {
            step,
            field: STATUS_KEY,
        }),
        Some(Value::String(message)) => Ok(CreateItemResponse {
            status: message.clone(),
        }),
        Some(other) => Err(ScenarioError::WrongType {
            step,
            field: STATUS_KEY,
            expected: "a string",
            actual: other.clone(),
        }),
    }
}

/// Creates an item, expects 200 and returns the id from the status message
pub(crate) async fn create_and_get_id(
    api: &ItemApi,
    item: &NewItem,
) -> Result<String, ScenarioError> {
    let response = api.create_item(item).await?;
    expect_status(CREATE_STEP, &response, StatusCode::OK)?;

    let created = creation_status(CREATE_STEP, &response)?;
    match created.item_id() {
        Some(id) => Ok(id.to_string()),
        None => Err(ScenarioError::MissingUuid {
            step: CREATE_STEP,
            message: created.status,
        }),
    }
}

/// The body as a non-empty list of records
pub(crate) fn non_empty_list(step: &'static str, body: Value) -> Result<Vec<Value>, ScenarioError> {
    match body {
        Value::Array(records) if !records.is_empty() => Ok(records),
        other => Err(ScenarioError::EmptyList { step, body: other }),
    }
}

/// Fails unless `record[field] == expected`
pub(crate) fn expect_field(
    step: &'static str,
    record: &Value,
    field: &'static str,
    expected: Value,
) -> Result<(), ScenarioError> {
    let actual = record
        .get(field)
        .ok_or(ScenarioError::MissingField { step, field })?;

    if *actual == expected {
        Ok(())
    } else {
        Err(ScenarioError::FieldMismatch {
            step,
            field,
            expected,
            actual: actual.clone(),
        })
    }
}

/// A nullable field: absent and `null` both count as not there
fn optional_field<'a>(record: &'a Value, field: &str) -> Option<&'a Value> {
    record.get(field).filter(|value| !value.is_null())
}

/// Checks that a statistics object carries integer counters
pub(crate) fn check_statistics(step: &'static str, statistics: &Value) -> Result<(), ScenarioError> {
    for field in [LIKES_KEY, VIEW_COUNT_KEY, CONTACTS_KEY] {
        let value = statistics
            .get(field)
            .ok_or(ScenarioError::MissingField { step, field })?;
        if !(value.is_i64() || value.is_u64()) {
            return Err(ScenarioError::WrongType {
                step,
                field,
                expected: "an integer",
                actual: value.clone(),
            });
        }
    }
    Ok(())
}

/// Runs [`check_statistics`] on `record[statistics]` when it is present
pub(crate) fn check_optional_statistics(
    step: &'static str,
    record: &Value,
) -> Result<(), ScenarioError> {
    match optional_field(record, STATISTICS_KEY) {
        Some(statistics) => check_statistics(step, statistics),
        None => Ok(()),
    }
}

/// When `record[createdAt]` is present, it must parse and fall on today's
/// local date
pub(crate) fn check_created_today(step: &'static str, record: &Value) -> Result<(), ScenarioError> {
    let Some(created_at) = optional_field(record, CREATED_AT_KEY) else {
        return Ok(());
    };

    let raw = created_at.as_str().ok_or_else(|| ScenarioError::WrongType {
        step,
        field: CREATED_AT_KEY,
        expected: "a string",
        actual: created_at.clone(),
    })?;

    let created = parse_created_at(raw)?;
    let today = Local::now().date_naive();
    if created.date_naive() == today {
        Ok(())
    } else {
        Err(ScenarioError::NotCreatedToday {
            step,
            created_at: raw.to_string(),
            today,
        })
    }
}
