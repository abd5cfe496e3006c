//! HTTP wrappers for the favorites service: list, create, update, delete.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::MediaItem;
use crate::models::Favorite;

#[derive(Debug)]
pub enum ClientError {
    /// Transport failure (connection refused, timeout, ...)
    Request(String),
    /// The service answered with a non-success status
    Status { status: u16, message: String },
    /// The response body was not what we expected
    Decode(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Request(msg) => write!(f, "Request failed: {}", msg),
            ClientError::Status { status, message } => {
                write!(f, "Service returned {}: {}", status, message)
            }
            ClientError::Decode(msg) => write!(f, "Failed to parse response: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ClientError::Decode(e.to_string())
        } else {
            ClientError::Request(e.to_string())
        }
    }
}

/// The four calls the catalog makes against the service
#[async_trait]
pub trait FavoritesApi: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Favorite>, ClientError>;

    async fn create(&self, item: &MediaItem) -> Result<Favorite, ClientError>;

    async fn update(&self, id: &str, item: &MediaItem) -> Result<Favorite, ClientError>;

    async fn remove(&self, id: &str) -> Result<(), ClientError>;
}

/// Outgoing body: the category label doubles as the service's `type`,
/// the richer fields ride along and are ignored server-side.
#[derive(Serialize)]
struct FavoritePayload<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    #[serde(flatten)]
    item: &'a MediaItem,
}

impl<'a> FavoritePayload<'a> {
    fn new(item: &'a MediaItem) -> Self {
        Self {
            kind: item.category.label(),
            item,
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Clone)]
pub struct FavClient {
    http: reqwest::Client,
    base_url: String,
}

impl FavClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    fn favs_url(&self) -> String {
        format!("{}/api/favs", self.base_url)
    }

    fn fav_url(&self, id: &str) -> String {
        format!("{}/{}", self.favs_url(), id)
    }
}

async fn check(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .map(|b| b.error)
        .unwrap_or(body);

    Err(ClientError::Status {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl FavoritesApi for FavClient {
    async fn get_all(&self) -> Result<Vec<Favorite>, ClientError> {
        let resp = self.http.get(self.favs_url()).send().await?;
        Ok(check(resp).await?.json().await?)
    }

    async fn create(&self, item: &MediaItem) -> Result<Favorite, ClientError> {
        let resp = self
            .http
            .post(self.favs_url())
            .json(&FavoritePayload::new(item))
            .send()
            .await?;
        Ok(check(resp).await?.json().await?)
    }

    async fn update(&self, id: &str, item: &MediaItem) -> Result<Favorite, ClientError> {
        let resp = self
            .http
            .put(self.fav_url(id))
            .json(&FavoritePayload::new(item))
            .send()
            .await?;
        Ok(check(resp).await?.json().await?)
    }

    async fn remove(&self, id: &str) -> Result<(), ClientError> {
        let resp = self.http.delete(self.fav_url(id)).send().await?;
        check(resp).await?;
        Ok(())
    }
}
