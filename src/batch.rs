//! Batch driver: one PNG per element, best effort.
//!
//! Elements are processed strictly one after another. Encoding or writing a
//! tile can fail without stopping the run; the failure is logged and
//! recorded in the [`BatchSummary`]. Only the output directory itself is a
//! precondition.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::color::ColorTable;
use crate::element::Element;
use crate::rendering::layout::{CanvasGeometry, LayoutConfig};
use crate::rendering::raster::encode_png;
use crate::rendering::text::TextFace;
use crate::rendering::{render_card, CardStyle};
use crate::{Error, Result};

/// A tile that reached the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenTile {
    pub number: u32,
    pub path: PathBuf,
    pub bytes: usize,
}

/// A tile that did not.
#[derive(Debug)]
pub struct TileFailure {
    pub number: u32,
    pub symbol: String,
    pub error: Error,
}

#[derive(Debug, Default)]
pub struct BatchSummary {
    pub written: Vec<WrittenTile>,
    pub failures: Vec<TileFailure>,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.written.len() + self.failures.len()
    }
}

type OnWrittenHandler<'a> = Box<dyn Fn(&WrittenTile) + 'a>;

/// Create `dir` (and parents) if missing. Idempotent.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }
    builder.create(dir).map_err(|e| Error::io(dir, e))
}

/// Write to `<path>.tmp` and rename into place, so a failed write never
/// leaves a truncated tile under the final name.
fn write_tile(path: &Path, data: &[u8]) -> Result<()> {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    if let Err(e) = fs::write(&tmp, data).and_then(|()| fs::rename(&tmp, path)) {
        if let Err(cleanup) = fs::remove_file(&tmp) {
            debug!("could not remove {}: {}", tmp.display(), cleanup);
        }
        return Err(Error::io(path, e));
    }
    Ok(())
}

pub struct BatchDriver<'a, F: TextFace + ?Sized> {
    face: &'a F,
    colors: &'a ColorTable,
    config: &'a LayoutConfig,
    geometry: CanvasGeometry,
    outdir: PathBuf,
    on_written: Option<OnWrittenHandler<'a>>,
}

impl<'a, F: TextFace + ?Sized> BatchDriver<'a, F> {
    pub fn new(
        face: &'a F,
        colors: &'a ColorTable,
        config: &'a LayoutConfig,
        geometry: CanvasGeometry,
        outdir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            face,
            colors,
            config,
            geometry,
            outdir: outdir.into(),
            on_written: None,
        }
    }

    /// Called after every successfully written tile.
    pub fn on_written<C>(&mut self, cb: C)
    where
        C: Fn(&WrittenTile) + 'a,
    {
        self.on_written = Some(Box::new(cb));
    }

    /// Render, encode and write one element.
    pub fn process(&self, element: &Element) -> Result<WrittenTile> {
        let style = CardStyle::for_element(element, self.colors);
        let image = render_card(element, &style, &self.geometry, self.config, self.face);

        let name = element.file_name();
        let tile = encode_png(&image).map_err(|e| Error::Encode {
            name: name.clone(),
            reason: e.to_string(),
        })?;

        let path = self.outdir.join(&name);
        write_tile(&path, &tile.png_data)?;
        debug!("wrote {} ({} bytes)", path.display(), tile.png_data.len());

        Ok(WrittenTile {
            number: element.number,
            path,
            bytes: tile.png_data.len(),
        })
    }

    /// Process every element. Fails only if the output directory cannot be
    /// created; per-element failures end up in the summary.
    pub fn run(&self, elements: &[Element]) -> Result<BatchSummary> {
        ensure_output_dir(&self.outdir)?;
        info!(
            "rendering {} tiles at {}x{} into {}",
            elements.len(),
            self.geometry.width,
            self.geometry.height,
            self.outdir.display()
        );

        let mut summary = BatchSummary::default();
        for element in elements {
            match self.process(element) {
                Ok(written) => {
                    if let Some(cb) = &self.on_written {
                        cb(&written);
                    }
                    summary.written.push(written);
                }
                Err(error) => {
                    warn!("skipping {} ({}): {}", element.file_name(), element.name, error);
                    summary.failures.push(TileFailure {
                        number: element.number,
                        symbol: element.symbol.clone(),
                        error,
                    });
                }
            }
        }

        info!(
            "{} written, {} failed",
            summary.written.len(),
            summary.failures.len()
        );
        Ok(summary)
    }
}
