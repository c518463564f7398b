use reqwest::{Client, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::errors::ClientError;

/// A response exactly as the service sent it
///
/// The status is not interpreted: 4xx and 5xx answers are ordinary values
/// here, and the body is kept as text so non-JSON error pages survive.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    body: String,
}

impl ApiResponse {
    /// Builds a response from its parts
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Reads the whole body of a reqwest response
    async fn read(response: reqwest::Response) -> Result<Self, ClientError> {
        let status = response.status();
        let body = response.text().await?;
        Ok(Self { status, body })
    }

    /// The HTTP status code
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The raw body
    pub fn text(&self) -> &str {
        &self.body
    }

    /// Deserializes the body into `T`
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Parses the body as untyped JSON
    pub fn json_value(&self) -> Result<Value, ClientError> {
        self.json()
    }
}

/// HTTP adapter for the listing service
///
/// Each method issues exactly one request and hands back the raw response.
/// There are no retries and no timeout beyond reqwest's defaults.
#[derive(Debug, Clone)]
pub struct ItemApi {
    /// Root of the service, e.g. `https://qa-internship.avito.com`
    base_url: Url,
    /// The underlying HTTP client
    client: Client,
}

impl ItemApi {
    /// Creates an adapter for the service rooted at `base_url`
    ///
    /// ### Arguments
    ///
    /// * `base_url` - Absolute http(s) URL; a path prefix is allowed
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let invalid = |reason: String| ClientError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };

        let parsed = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if parsed.cannot_be_a_base() {
            return Err(invalid("URL cannot be a base".to_string()));
        }
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {}", parsed.scheme())));
        }

        Ok(Self {
            base_url: parsed,
            client: Client::new(),
        })
    }

    /// The root URL requests are built from
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends path segments to the base URL
    ///
    /// Segments are percent-encoded. An empty segment yields a trailing
    /// slash, which is how an empty id reaches the service.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: "URL cannot be a base".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Creates an item
    ///
    /// `data` is sent as the JSON body as-is. Pass a
    /// [`NewItem`](crate::models::NewItem) for a well-formed request or any
    /// other serializable value to probe validation.
    #[tracing::instrument(skip(self, data))]
    pub async fn create_item<T: Serialize + ?Sized>(
        &self,
        data: &T,
    ) -> Result<ApiResponse, ClientError> {
        let url = self.endpoint(&["api", "1", "item"])?;
        let response = self.client.post(url.clone()).json(data).send().await?;
        let response = ApiResponse::read(response).await?;
        debug!(%url, status = response.status().as_u16(), "POST");
        Ok(response)
    }

    /// Gets the records matching an item id
    #[tracing::instrument(skip(self))]
    pub async fn get_item_info(&self, id: &str) -> Result<ApiResponse, ClientError> {
        let url = self.endpoint(&["api", "1", "item", id])?;
        self.get(url).await
    }

    /// Gets the statistics of an item
    #[tracing::instrument(skip(self))]
    pub async fn get_item_statistics(&self, id: &str) -> Result<ApiResponse, ClientError> {
        let url = self.endpoint(&["api", "1", "item", "statistics", id])?;
        self.get(url).await
    }

    /// Gets every item owned by a seller
    #[tracing::instrument(skip(self))]
    pub async fn get_seller_items(&self, seller_id: i64) -> Result<ApiResponse, ClientError> {
        let seller_id = seller_id.to_string();
        let url = self.endpoint(&["api", "1", seller_id.as_str(), "item"])?;
        self.get(url).await
    }

    async fn get(&self, url: Url) -> Result<ApiResponse, ClientError> {
        let response = self.client.get(url.clone()).send().await?;
        let response = ApiResponse::read(response).await?;
        debug!(%url, status = response.status().as_u16(), "GET");
        Ok(response)
    }
}
