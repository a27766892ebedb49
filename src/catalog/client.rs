//! Thin client for the external movie catalog (OMDb-style API).
//!
//! The catalog replies HTTP 200 even for logical failures; the body
//! carries a `Response` field of `"True"`/`"False"` and, on `"False"`,
//! an `Error` message meant for the user. Transport problems and
//! undecodable bodies map to separate error variants so callers can
//! render the right message.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::catalog::types::{MediaType, MovieDetail, MovieSummary};
use crate::config::CatalogConfig;

/// Errors surfaced by catalog lookups.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog reported no results or an unknown identifier.
    #[error("{message}")]
    NotFound { message: String },

    /// Transport failure reaching the catalog.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body did not have the expected shape.
    #[error("unexpected response shape: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl CatalogError {
    /// Message suitable for inline display.
    ///
    /// `NotFound` carries the catalog's own wording; everything else
    /// collapses into a generic connectivity message.
    pub fn user_message(&self) -> String {
        match self {
            CatalogError::NotFound { message } => message.clone(),
            CatalogError::Network(_) | CatalogError::Malformed(_) => {
                "Network error. Please check your connection.".to_string()
            }
        }
    }
}

/// A validated search request.
///
/// Construction enforces the local constraints: a blank term means there
/// is nothing to execute (`new` returns `None`, callers skip the call),
/// and a year filter is only forwarded when it is a full 4-digit value;
/// partial input would produce malformed-query errors upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    term: String,
    year: Option<String>,
    media_type: Option<MediaType>,
}

impl SearchQuery {
    pub fn new(term: &str, year: &str, media_type: Option<MediaType>) -> Option<Self> {
        let term = term.trim();
        if term.is_empty() {
            return None;
        }

        let year = year.trim();
        let year = if year.len() == 4 && year.chars().all(|c| c.is_ascii_digit()) {
            Some(year.to_string())
        } else {
            None
        };

        Some(Self {
            term: term.to_string(),
            year,
            media_type,
        })
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn year(&self) -> Option<&str> {
        self.year.as_deref()
    }

    pub fn media_type(&self) -> Option<MediaType> {
        self.media_type
    }
}

/// Stateless HTTP client for the catalog. Cheap to clone.
#[derive(Clone)]
pub struct CatalogClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl CatalogClient {
    pub fn new(config: &CatalogConfig) -> Self {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .timeout(Duration::from_secs(config.timeout_seconds as u64))
            .build()
            .expect("Failed to build catalog client");

        Self {
            http,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Free-text search with optional year and media-type filters.
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<MovieSummary>, CatalogError> {
        let mut params = vec![
            ("apikey", self.api_key.as_str()),
            ("s", query.term()),
        ];
        if let Some(year) = query.year() {
            params.push(("y", year));
        }
        let media_type = query.media_type().map(MediaType::as_str);
        if let Some(media_type) = media_type {
            params.push(("type", media_type));
        }

        let body = self
            .http
            .get(&self.base_url)
            .query(&params)
            .send()
            .await?
            .text()
            .await?;

        parse_search_body(&body)
    }

    /// Full record for a single identifier.
    pub async fn get_by_id(&self, id: &str) -> Result<MovieDetail, CatalogError> {
        let params = [
            ("apikey", self.api_key.as_str()),
            ("i", id),
            ("plot", "full"),
        ];

        let body = self
            .http
            .get(&self.base_url)
            .query(&params)
            .send()
            .await?
            .text()
            .await?;

        parse_detail_body(&body)
    }
}

#[derive(Deserialize)]
struct SearchEnvelope {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Search", default)]
    search: Vec<MovieSummary>,
    #[serde(rename = "Error", default)]
    error: Option<String>,
}

fn parse_search_body(body: &str) -> Result<Vec<MovieSummary>, CatalogError> {
    let envelope: SearchEnvelope = serde_json::from_str(body)?;
    if envelope.response == "True" {
        Ok(envelope.search)
    } else {
        Err(CatalogError::NotFound {
            message: envelope
                .error
                .unwrap_or_else(|| "No movies found.".to_string()),
        })
    }
}

fn parse_detail_body(body: &str) -> Result<MovieDetail, CatalogError> {
    let value: serde_json::Value = serde_json::from_str(body)?;

    let response = value.get("Response").and_then(|v| v.as_str());
    if response != Some("True") {
        let message = value
            .get("Error")
            .and_then(|v| v.as_str())
            .unwrap_or("Movie not found.")
            .to_string();
        return Err(CatalogError::NotFound { message });
    }

    Ok(serde_json::from_value(value)?)
}
