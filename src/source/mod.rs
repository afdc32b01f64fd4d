//! Element sources
//!
//! The renderer only ever sees a `Vec<Element>`. Where it comes from is the
//! job of an [`ElementSource`]: the compiled-in table, or (with the `remote`
//! feature) a JSON document fetched over HTTP.

use log::warn;

use crate::element::{Element, MAX_ELEMENTS};
use crate::Result;

pub mod embedded;
#[cfg(feature = "remote")]
pub mod remote;

pub use embedded::EmbeddedSource;
#[cfg(feature = "remote")]
pub use remote::{RemoteSource, DEFAULT_SOURCE_URL};

/// Something that can produce the element list for a run.
pub trait ElementSource {
    /// Short label for logs.
    fn describe(&self) -> String;

    /// Load every element record. Failures are fatal for the run.
    fn load(&self) -> Result<Vec<Element>>;
}

/// A fixed in-memory list. Useful for tests and for rendering a subset.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    elements: Vec<Element>,
}

impl StaticSource {
    pub fn new(elements: Vec<Element>) -> Self {
        Self { elements }
    }
}

impl ElementSource for StaticSource {
    fn describe(&self) -> String {
        format!("static list ({} elements)", self.elements.len())
    }

    fn load(&self) -> Result<Vec<Element>> {
        Ok(self.elements.clone())
    }
}

/// Sort by atomic number, drop out-of-range numbers, malformed symbols and
/// duplicate numbers, cap at 118.
///
/// Dropped records are logged; the first valid record for a number wins.
pub fn prepare_elements(mut elements: Vec<Element>) -> Vec<Element> {
    elements.retain(|e| {
        if !e.has_valid_number() {
            warn!("skipping element `{}` with atomic number {}", e.symbol, e.number);
            return false;
        }
        if !e.has_valid_symbol() {
            warn!("skipping element {} with malformed symbol {:?}", e.number, e.symbol);
            return false;
        }
        true
    });
    elements.sort_by_key(|e| e.number);
    elements.dedup_by(|later, first| {
        let dup = later.number == first.number;
        if dup {
            warn!(
                "skipping duplicate atomic number {} (`{}`, keeping `{}`)",
                later.number, later.symbol, first.symbol
            );
        }
        dup
    });
    elements.truncate(MAX_ELEMENTS);
    elements
}
