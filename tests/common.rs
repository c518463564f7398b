/// Common test utilities for listing-probe integration tests
///
/// This file holds an in-process fake of the listing service built on
/// wiremock. The fake keeps created items in memory and answers the four
/// endpoints the way the service contract describes, so every scenario can
/// run offline.
use chrono::Local;
use listing_probe::ItemApi;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// Timestamp layout the service uses for `createdAt`
const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f %z %z";

/// Ways the fake can deviate from the contract
#[derive(Debug, Clone, Copy, Default)]
#[allow(dead_code)]
pub struct Quirks {
    /// Store a different name than the one submitted
    pub renamed_items: bool,
    /// Accept creations with a missing required field
    pub accept_missing_fields: bool,
    /// Report every statistics lookup as not found
    pub statistics_not_found: bool,
    /// Answer item lookups for unknown UUID-shaped ids with 200
    pub lenient_item_lookup: bool,
}

type Records = Arc<Mutex<Vec<Value>>>;

/// A running fake listing service
pub struct FakeListingService {
    server: MockServer,
    records: Records,
}

#[allow(dead_code)]
impl FakeListingService {
    /// Starts a fake that follows the contract
    pub async fn start() -> Self {
        Self::start_with(Quirks::default()).await
    }

    /// Starts a fake with the given deviations
    pub async fn start_with(quirks: Quirks) -> Self {
        let server = MockServer::start().await;
        let records: Records = Arc::default();

        Mock::given(method("POST"))
            .and(path("/api/1/item"))
            .respond_with(CreateItem {
                records: records.clone(),
                quirks,
            })
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path_regex(r"^/api/1/item/statistics/[^/]+$"))
            .respond_with(GetStatistics {
                records: records.clone(),
                quirks,
            })
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path_regex(r"^/api/1/item/[^/]+$"))
            .respond_with(GetItem {
                records: records.clone(),
                quirks,
            })
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path_regex(r"^/api/1/[^/]+/item$"))
            .respond_with(GetSellerItems {
                records: records.clone(),
            })
            .mount(&server)
            .await;

        Self { server, records }
    }

    /// Root URL of the fake
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// An adapter pointed at the fake
    pub fn api(&self) -> ItemApi {
        ItemApi::new(&self.uri()).unwrap()
    }

    /// Every item created so far, oldest first
    pub fn records(&self) -> Vec<Value> {
        self.records.lock().unwrap().clone()
    }
}

/// Whether `id` looks like a UUID: 36 characters, hyphens at the usual
/// offsets, letters or digits elsewhere
fn is_uuid_shaped(id: &str) -> bool {
    id.len() == 36
        && id.char_indices().all(|(i, c)| match i {
            8 | 13 | 18 | 23 => c == '-',
            _ => c.is_ascii_alphanumeric(),
        })
}

/// The last path segment of a request
fn last_segment(request: &Request) -> String {
    request
        .url
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .unwrap_or_default()
        .to_string()
}

fn find_record(records: &Records, id: &str) -> Option<Value> {
    records
        .lock()
        .unwrap()
        .iter()
        .find(|record| record["id"] == id)
        .cloned()
}

fn bad_request(message: &str) -> ResponseTemplate {
    ResponseTemplate::new(400).set_body_json(json!({
        "result": { "message": message, "messages": {} },
        "status": "400",
    }))
}

fn not_found() -> ResponseTemplate {
    ResponseTemplate::new(404).set_body_json(json!({
        "result": { "message": "item not found", "messages": null },
        "status": "404",
    }))
}

struct CreateItem {
    records: Records,
    quirks: Quirks,
}

impl CreateItem {
    /// Checks one field of a creation body
    ///
    /// `Ok(None)` means the field is missing.
    fn field<'a>(
        body: &'a Value,
        key: &str,
        valid: impl Fn(&Value) -> bool,
    ) -> Result<Option<&'a Value>, String> {
        match body.get(key) {
            None => Ok(None),
            Some(value) if valid(value) => Ok(Some(value)),
            Some(_) => Err(format!("invalid {key}")),
        }
    }

    fn validate(&self, body: &Value) -> Result<(i64, String, i64), String> {
        let non_negative = |v: &Value| v.as_i64().is_some_and(|n| n >= 0);

        let seller_id = Self::field(body, "sellerID", non_negative)?;
        let name = Self::field(body, "name", Value::is_string)?;
        let price = Self::field(body, "price", non_negative)?;

        match (seller_id, name, price) {
            (Some(seller_id), Some(name), Some(price)) => Ok((
                seller_id.as_i64().unwrap_or_default(),
                name.as_str().unwrap_or_default().to_string(),
                price.as_i64().unwrap_or_default(),
            )),
            (seller_id, name, price) if self.quirks.accept_missing_fields => Ok((
                seller_id.and_then(Value::as_i64).unwrap_or_default(),
                name.and_then(Value::as_str).unwrap_or_default().to_string(),
                price.and_then(Value::as_i64).unwrap_or_default(),
            )),
            _ => Err("missing required field".to_string()),
        }
    }
}

impl Respond for CreateItem {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let Ok(body) = request.body_json::<Value>() else {
            return bad_request("body is not JSON");
        };
        let (seller_id, name, price) = match self.validate(&body) {
            Ok(fields) => fields,
            Err(message) => return bad_request(&message),
        };

        let mut records = self.records.lock().unwrap();
        let id = uuid::Uuid::new_v4().to_string();
        let name = if self.quirks.renamed_items {
            format!("{name} (edited)")
        } else {
            name
        };
        let counter = records.len() as i64;

        records.push(json!({
            "id": id,
            "sellerID": seller_id,
            "name": name,
            "price": price,
            "createdAt": Local::now().format(CREATED_AT_FORMAT).to_string(),
            "statistics": {
                "likes": counter,
                "viewCount": counter * 3,
                "contacts": counter % 2,
            },
        }));

        ResponseTemplate::new(200)
            .set_body_json(json!({ "status": format!("Сохранили объявление - {id}") }))
    }
}

struct GetItem {
    records: Records,
    quirks: Quirks,
}

impl Respond for GetItem {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let id = last_segment(request);
        if !is_uuid_shaped(&id) {
            return bad_request("id is not a UUID");
        }
        match find_record(&self.records, &id) {
            Some(record) => ResponseTemplate::new(200).set_body_json(json!([record])),
            None if self.quirks.lenient_item_lookup => {
                ResponseTemplate::new(200).set_body_json(json!([]))
            }
            None => not_found(),
        }
    }
}

struct GetStatistics {
    records: Records,
    quirks: Quirks,
}

impl Respond for GetStatistics {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let id = last_segment(request);
        if !is_uuid_shaped(&id) {
            return bad_request("id is not a UUID");
        }
        if self.quirks.statistics_not_found {
            return not_found();
        }
        match find_record(&self.records, &id) {
            Some(record) => ResponseTemplate::new(200)
                .set_body_json(json!({ "statistics": record["statistics"] })),
            None => not_found(),
        }
    }
}

struct GetSellerItems {
    records: Records,
}

impl Respond for GetSellerItems {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let Some(seller_id) = request
            .url
            .path_segments()
            .and_then(|mut segments| segments.nth(2))
            .and_then(|segment| segment.parse::<i64>().ok())
        else {
            return bad_request("sellerID is not an integer");
        };

        let items: Vec<Value> = self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|record| record["sellerID"] == seller_id)
            .cloned()
            .collect();
        ResponseTemplate::new(200).set_body_json(items)
    }
}
