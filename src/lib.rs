//! elemcards
//!
//! Renders one PNG "card" per chemical element: a white tile framed in the
//! color of the element's category, with the atomic number top-left, the
//! atomic mass top-right, the symbol centered and the name beneath it.
//!
//! # Pipeline
//!
//! element source -> [`category::normalize`] -> [`color::resolve`] ->
//! [`rendering::layout::layout_tile`] -> [`rendering::paint::paint_tile`] ->
//! [`rendering::raster::rasterize`] -> PNG on disk via [`batch::BatchDriver`].
//!
//! # Example
//!
//! ```no_run
//! use elemcards::{RunConfig, SourceKind};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = RunConfig {
//!     font_path: "DejaVuSans.ttf".into(),
//!     height: 300,
//!     source: SourceKind::Embedded,
//!     ..Default::default()
//! };
//! let summary = elemcards::generate(&config, |tile| println!("Written: {}", tile.path.display()))?;
//! println!("{} tiles", summary.written.len());
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use log::info;

pub mod batch;
pub mod category;
pub mod color;
pub mod element;
pub mod error;
pub mod logging;
pub mod rendering;
pub mod source;

pub use batch::{BatchDriver, BatchSummary, WrittenTile};
pub use color::ColorTable;
pub use element::Element;
pub use error::{Error, Result};
pub use rendering::layout::{CanvasGeometry, LayoutConfig, OverflowPolicy};
pub use rendering::text::{BlockFace, FontMetrics, OutlineFont, TextFace};
pub use source::{ElementSource, EmbeddedSource, StaticSource};

/// Where element records come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceKind {
    /// Compiled-in table of 118 elements
    #[default]
    Embedded,
    /// JSON document fetched from `RunConfig::source_url`
    Remote,
}

/// Configuration for one generation run.
///
/// Defaults mirror the command line defaults: `font.ttf`, `colours.json`,
/// output into `elements/`, 600 px tall tiles, embedded element data.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub font_path: PathBuf,
    pub colors_path: PathBuf,
    pub outdir: PathBuf,
    /// Tile height in pixels; width follows from the aspect ratio
    pub height: u32,
    pub layout: LayoutConfig,
    pub source: SourceKind,
    pub source_url: String,
    /// Timeout for the remote fetch in milliseconds
    pub timeout_ms: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            font_path: PathBuf::from("font.ttf"),
            colors_path: PathBuf::from("colours.json"),
            outdir: PathBuf::from("elements"),
            height: 600,
            layout: LayoutConfig::default(),
            source: SourceKind::Embedded,
            #[cfg(feature = "remote")]
            source_url: source::DEFAULT_SOURCE_URL.to_string(),
            #[cfg(not(feature = "remote"))]
            source_url: String::new(),
            timeout_ms: 20_000,
        }
    }
}

impl RunConfig {
    /// Build the element source this configuration asks for.
    pub fn element_source(&self) -> Result<Box<dyn ElementSource>> {
        match self.source {
            SourceKind::Embedded => Ok(Box::new(EmbeddedSource)),
            #[cfg(feature = "remote")]
            SourceKind::Remote => Ok(Box::new(source::RemoteSource::new(
                self.source_url.clone(),
                std::time::Duration::from_millis(self.timeout_ms),
            )?)),
            #[cfg(not(feature = "remote"))]
            SourceKind::Remote => Err(Error::InvalidConfig(
                "remote element source requires the `remote` feature".into(),
            )),
        }
    }
}

/// Load font, colors and elements per `config`, then render every tile.
///
/// Setup failures (font, color table, geometry, element source, output
/// directory) are returned as errors before anything is written.
pub fn generate<C>(config: &RunConfig, on_written: C) -> Result<BatchSummary>
where
    C: Fn(&WrittenTile),
{
    let source = config.element_source()?;
    generate_from(config, source.as_ref(), on_written)
}

/// Like [`generate`] with an explicit element source.
pub fn generate_from<C>(
    config: &RunConfig,
    source: &dyn ElementSource,
    on_written: C,
) -> Result<BatchSummary>
where
    C: Fn(&WrittenTile),
{
    let geometry = CanvasGeometry::from_height(config.height, &config.layout)?;
    let font = OutlineFont::load(&config.font_path)?;
    let colors = ColorTable::load(&config.colors_path)?;
    if !colors.has_unknown() {
        info!(
            "{} has no `unknown` entry; unmatched categories use gray",
            config.colors_path.display()
        );
    }

    info!("loading elements from {}", source.describe());
    let elements = source::prepare_elements(source.load()?);

    let mut driver = BatchDriver::new(&font, &colors, &config.layout, geometry, &config.outdir);
    driver.on_written(on_written);
    driver.run(&elements)
}
