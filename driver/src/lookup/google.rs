//! Google Books volume search, used for both subject listings and ISBN cover lookups.

use std::time::Duration;

use kernel::interface::query::VolumeQuery;
use kernel::prelude::entity::{Category, IndustryIdentifier, Isbn, Volume};
use kernel::KernelError;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{ConvertError, DriverError};
use crate::env_or;

static GOOGLE_BOOKS_URL: &str = "GOOGLE_BOOKS_URL";
static GOOGLE_BOOKS_TIMEOUT_SECS: &str = "GOOGLE_BOOKS_TIMEOUT_SECS";

const DEFAULT_URL: &str = "https://www.googleapis.com/books/v1/volumes";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct GoogleBooksConfig {
    base_url: String,
    timeout: Duration,
}

impl GoogleBooksConfig {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        }
    }

    /// Reads `GOOGLE_BOOKS_URL` and `GOOGLE_BOOKS_TIMEOUT_SECS`, falling back to defaults.
    pub fn from_env() -> Result<Self, DriverError> {
        let base_url = env_or(GOOGLE_BOOKS_URL, DEFAULT_URL)?;
        let raw_timeout = env_or(GOOGLE_BOOKS_TIMEOUT_SECS, &DEFAULT_TIMEOUT_SECS.to_string())?;
        let timeout = raw_timeout
            .parse::<u64>()
            .map_err(|_| DriverError::Config {
                key: GOOGLE_BOOKS_TIMEOUT_SECS,
                value: raw_timeout.clone(),
            })?;
        Ok(Self::new(base_url, Duration::from_secs(timeout)))
    }
}

impl Default for GoogleBooksConfig {
    fn default() -> Self {
        Self::new(DEFAULT_URL, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }
}

pub struct GoogleBooksClient {
    client: reqwest::Client,
    base_url: String,
}

impl GoogleBooksClient {
    pub fn new(config: GoogleBooksConfig) -> error_stack::Result<Self, KernelError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(DriverError::from)
            .convert_error()?;
        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        let config = GoogleBooksConfig::from_env().convert_error()?;
        Self::new(config)
    }

    #[tracing::instrument(skip(self))]
    async fn search(&self, query: &str, max_results: Option<u8>) -> Result<Vec<Volume>, DriverError> {
        let mut request = self.client.get(&self.base_url).query(&[("q", query)]);
        if let Some(max_results) = max_results {
            request = request.query(&[("maxResults", max_results)]);
        }

        let resp = request.send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(DriverError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = resp.text().await?;
        let volumes = parse_volumes(&serde_json::from_str(&body)?);
        debug!(count = volumes.len(), "volumes received");
        Ok(volumes)
    }
}

#[async_trait::async_trait]
impl VolumeQuery for GoogleBooksClient {
    async fn search_subject(
        &self,
        category: &Category,
        max_results: u8,
    ) -> error_stack::Result<Vec<Volume>, KernelError> {
        info!(%category, max_results, "searching volumes by subject");
        self.search(&format!("subject:{category}"), Some(max_results))
            .await
            .convert_error()
    }

    async fn search_isbn(&self, isbn: &Isbn) -> error_stack::Result<Vec<Volume>, KernelError> {
        let isbn: &String = isbn.as_ref();
        self.search(&format!("isbn:{isbn}"), None)
            .await
            .convert_error()
    }
}

/// A missing or non-array `items` means no results. Items without an id are dropped.
fn parse_volumes(body: &Value) -> Vec<Volume> {
    body.get("items")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(parse_volume).collect())
        .unwrap_or_default()
}

fn parse_volume(item: &Value) -> Option<Volume> {
    let id = text(item.get("id"))?;
    let info = item.get("volumeInfo");
    let field = |name: &str| info.and_then(|info| info.get(name));
    let image = |name: &str| {
        field("imageLinks")
            .and_then(|links| links.get(name))
            .and_then(|link| text(Some(link)))
    };

    let authors = field("authors")
        .and_then(Value::as_array)
        .map(|authors| authors.iter().filter_map(|a| text(Some(a))).collect())
        .unwrap_or_default();
    let identifiers = field("industryIdentifiers")
        .and_then(Value::as_array)
        .map(|ids| {
            ids.iter()
                .filter_map(|id| {
                    Some(IndustryIdentifier::new(
                        text(id.get("type"))?,
                        text(id.get("identifier"))?,
                    ))
                })
                .collect()
        })
        .unwrap_or_default();

    Some(Volume {
        id: Some(id),
        title: text(field("title")),
        subtitle: text(field("subtitle")),
        authors,
        description: text(field("description")),
        average_rating: field("averageRating").and_then(Value::as_f64),
        thumbnail: image("thumbnail"),
        small_thumbnail: image("smallThumbnail"),
        identifiers,
    })
}

fn text(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
