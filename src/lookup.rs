//! OMDb lookup client.
//!
//! External collaborator to the scan: given one `tconst`, fetch the enriched
//! record from the OMDb API. The scan never calls this; the CLI handler
//! invokes it on the scan's output, one identifier at a time. Lookup failures
//! surface to the caller but say nothing about scan correctness.

use anyhow::{Context, Result};
use serde::Deserialize;

pub const OMDB_BASE_URL: &str = "https://www.omdbapi.com";

/// One enriched record from the lookup API. All fields default to empty when
/// absent from the response; unknown response fields are ignored.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LookupItem {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "Rated")]
    pub rated: String,
    #[serde(rename = "Released")]
    pub released: String,
    #[serde(rename = "Runtime")]
    pub runtime: String,
    #[serde(rename = "Genre")]
    pub genre: String,
    #[serde(rename = "Director")]
    pub director: String,
    #[serde(rename = "Writer")]
    pub writer: String,
    #[serde(rename = "Actors")]
    pub actors: String,
    /// The plot text arrives under the `Info` key.
    #[serde(rename = "Info")]
    pub plot: String,
    #[serde(rename = "Language")]
    pub language: String,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Awards")]
    pub awards: String,
    #[serde(rename = "Poster")]
    pub poster: String,
}

pub struct LookupClient {
    base_url: String,
    api_key: String,
    http: reqwest::blocking::Client,
}

impl LookupClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(OMDB_BASE_URL, api_key)
    }

    /// Point the client at another base URL (tests, proxies).
    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            http: reqwest::blocking::Client::new(),
        }
    }

    /// Fetch the enriched record for one identifier (e.g. `tt0000001`).
    pub fn info(&self, id: &str) -> Result<LookupItem> {
        let body = self
            .http
            .get(&self.base_url)
            .query(&[("apikey", self.api_key.as_str()), ("i", id)])
            .send()
            .with_context(|| format!("lookup {id}"))?
            .text()
            .with_context(|| format!("read lookup response for {id}"))?;
        parse_info_response(&body)
    }
}

/// Decode a lookup API response body.
pub fn parse_info_response(body: &str) -> Result<LookupItem> {
    serde_json::from_str(body).context("decode lookup response")
}
