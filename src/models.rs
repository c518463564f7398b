use serde::{Deserialize, Serialize};

use crate::ids::extract_uuid;

/// JSON keys used by the listing service
///
/// The casing is part of the remote contract and must not change.
pub mod keys {
    pub const STATUS_KEY: &str = "status";
    pub const ID_KEY: &str = "id";
    pub const NAME_KEY: &str = "name";
    pub const PRICE_KEY: &str = "price";
    pub const SELLER_ID_KEY: &str = "sellerID";
    pub const CREATED_AT_KEY: &str = "createdAt";
    pub const STATISTICS_KEY: &str = "statistics";
    pub const LIKES_KEY: &str = "likes";
    pub const VIEW_COUNT_KEY: &str = "viewCount";
    pub const CONTACTS_KEY: &str = "contacts";
}

/// Payload for `POST /api/1/item`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    #[serde(rename = "sellerID")]
    pub seller_id: i64,
    pub name: String,
    pub price: i64,
}

impl NewItem {
    pub fn new(seller_id: i64, name: impl Into<String>, price: i64) -> Self {
        Self {
            seller_id,
            name: name.into(),
            price,
        }
    }
}

/// Body of a successful creation
///
/// The service does not return the new id as a field; it embeds it in a
/// human-readable status message.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CreateItemResponse {
    pub status: String,
}

impl CreateItemResponse {
    /// The id of the created item, recovered from the status message
    pub fn item_id(&self) -> Option<&str> {
        extract_uuid(&self.status)
    }
}
