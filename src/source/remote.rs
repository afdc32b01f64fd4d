//! Element list fetched from a periodic-table JSON document over HTTP.
//!
//! The document shape is `{"elements": [{"number", "symbol", "name",
//! "atomic_mass", "category", "xpos", "ypos", ...}]}`; unknown fields are
//! ignored. There is no retry and no cached fallback: a timeout, non-2xx
//! status or parse failure aborts the run.

use std::time::Duration;

use log::{debug, info};
use reqwest::blocking::Client;
use serde::Deserialize;

use super::{prepare_elements, ElementSource};
use crate::element::Element;
use crate::{Error, Result};

pub const DEFAULT_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/Bowserinator/Periodic-Table-JSON/master/PeriodicTableJSON.json";

#[derive(Debug, Deserialize)]
struct SourceDocument {
    elements: Vec<SourceElement>,
}

#[derive(Debug, Deserialize)]
struct SourceElement {
    number: u32,
    symbol: String,
    name: String,
    atomic_mass: f64,
    #[serde(default)]
    category: String,
    xpos: Option<u32>,
    ypos: Option<u32>,
}

impl From<SourceElement> for Element {
    fn from(src: SourceElement) -> Self {
        let element = Element::new(src.number, src.symbol, src.name, src.atomic_mass, src.category);
        match (src.xpos, src.ypos) {
            (Some(x), Some(y)) => element.with_grid(x, y),
            _ => element,
        }
    }
}

/// Parse a source document into sorted, capped element records.
pub fn parse_document(body: &str) -> Result<Vec<Element>> {
    let doc: SourceDocument = serde_json::from_str(body)
        .map_err(|e| Error::SourceFetch(format!("invalid element document: {}", e)))?;
    let elements = doc.elements.into_iter().map(Element::from).collect();
    Ok(prepare_elements(elements))
}

pub struct RemoteSource {
    client: Client,
    url: String,
    timeout: Duration,
}

impl RemoteSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::SourceFetch(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            url: url.into(),
            timeout,
        })
    }
}

impl ElementSource for RemoteSource {
    fn describe(&self) -> String {
        format!("{} (timeout {}s)", self.url, self.timeout.as_secs())
    }

    fn load(&self) -> Result<Vec<Element>> {
        info!("fetching element data from {}", self.url);
        let res = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| Error::SourceFetch(format!("HTTP GET failed: {}", e)))?
            .error_for_status()
            .map_err(|e| Error::SourceFetch(format!("HTTP GET failed: {}", e)))?;

        let body = res
            .text()
            .map_err(|e| Error::SourceFetch(format!("Failed to read response body: {}", e)))?;
        debug!("received {} bytes of element data", body.len());

        parse_document(&body)
    }
}
