//! Text faces: measuring and drawing strings at a given size.
//!
//! Glyph rasterization is delegated to `ab_glyph`. One parsed
//! [`OutlineFont`] serves every size a tile needs; callers pass the size per
//! call instead of holding one face object per size.

use std::path::Path;

use ab_glyph::{point, Font, FontVec, GlyphId, PxScale, ScaleFont};
use image::{Rgba, RgbaImage};

use super::raster::blend;
use crate::{Error, Result};

/// Pixel metrics of a font at a given point size.
pub trait FontMetrics {
    /// Advance width of `text` in whole pixels. Empty text measures 0.
    fn text_width(&self, text: &str, size: f32) -> u32;

    /// Recommended distance between baselines in whole pixels.
    fn line_height(&self, size: f32) -> u32;
}

/// A font that can also draw.
pub trait TextFace: FontMetrics {
    /// Draw `text` with its pen starting at `(x, baseline)`. Pixels outside
    /// the canvas are clipped.
    fn draw_text(
        &self,
        canvas: &mut RgbaImage,
        text: &str,
        size: f32,
        x: i32,
        baseline: i32,
        color: Rgba<u8>,
    );
}

/// A TrueType/OpenType outline font.
pub struct OutlineFont {
    font: FontVec,
}

impl std::fmt::Debug for OutlineFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutlineFont")
            .field("units_per_em", &self.font.units_per_em())
            .finish_non_exhaustive()
    }
}

impl OutlineFont {
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let font = FontVec::try_from_vec(data)
            .map_err(|e| Error::ConfigLoad(format!("invalid font data: {}", e)))?;
        Ok(Self { font })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path)
            .map_err(|e| Error::ConfigLoad(format!("reading font {}: {}", path.display(), e)))?;
        Self::from_bytes(data)
            .map_err(|e| Error::ConfigLoad(format!("{} ({})", e, path.display())))
    }

    /// Sizes are points at 72 DPI, so one point is one pixel.
    fn scale(&self, size: f32) -> PxScale {
        self.font
            .pt_to_px_scale(size)
            .unwrap_or_else(|| PxScale::from(size))
    }

    /// Glyph ids paired with their pen x offset from the start of the run.
    fn positioned(&self, text: &str, scale: PxScale) -> (Vec<(GlyphId, f32)>, f32) {
        let scaled = self.font.as_scaled(scale);
        let mut caret = 0.0f32;
        let mut prev: Option<GlyphId> = None;
        let mut glyphs = Vec::with_capacity(text.len());
        for c in text.chars() {
            let id = scaled.glyph_id(c);
            if let Some(p) = prev {
                caret += scaled.kern(p, id);
            }
            glyphs.push((id, caret));
            caret += scaled.h_advance(id);
            prev = Some(id);
        }
        (glyphs, caret)
    }
}

impl FontMetrics for OutlineFont {
    fn text_width(&self, text: &str, size: f32) -> u32 {
        let (_, advance) = self.positioned(text, self.scale(size));
        advance.round().max(0.0) as u32
    }

    fn line_height(&self, size: f32) -> u32 {
        let scaled = self.font.as_scaled(self.scale(size));
        (scaled.height() + scaled.line_gap()).round().max(0.0) as u32
    }
}

impl TextFace for OutlineFont {
    fn draw_text(
        &self,
        canvas: &mut RgbaImage,
        text: &str,
        size: f32,
        x: i32,
        baseline: i32,
        color: Rgba<u8>,
    ) {
        let scale = self.scale(size);
        let (glyphs, _) = self.positioned(text, scale);
        let (cw, ch) = (canvas.width() as i32, canvas.height() as i32);

        for (id, offset) in glyphs {
            let glyph = id.with_scale_and_position(scale, point(x as f32 + offset, baseline as f32));
            let Some(outlined) = self.font.outline_glyph(glyph) else {
                continue;
            };
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                let px = bounds.min.x as i32 + gx as i32;
                let py = bounds.min.y as i32 + gy as i32;
                if px < 0 || py < 0 || px >= cw || py >= ch {
                    return;
                }
                blend(canvas.get_pixel_mut(px as u32, py as u32), color, coverage);
            });
        }
    }
}

/// Deterministic face that draws every non-space character as a solid
/// block. No font file involved, so tile layout and rendering can be
/// exercised anywhere with exact, predictable metrics.
#[derive(Debug, Clone, Copy)]
pub struct BlockFace {
    /// Advance per character as a fraction of the size
    pub advance: f32,
    /// Block height as a fraction of the size
    pub cap_height: f32,
    /// Line height as a fraction of the size
    pub line_spacing: f32,
}

impl Default for BlockFace {
    fn default() -> Self {
        Self {
            advance: 0.6,
            cap_height: 0.7,
            line_spacing: 1.2,
        }
    }
}

impl BlockFace {
    fn char_advance(&self, size: f32) -> u32 {
        (size * self.advance).round().max(0.0) as u32
    }
}

impl FontMetrics for BlockFace {
    fn text_width(&self, text: &str, size: f32) -> u32 {
        text.chars().count() as u32 * self.char_advance(size)
    }

    fn line_height(&self, size: f32) -> u32 {
        (size * self.line_spacing).round().max(0.0) as u32
    }
}

impl TextFace for BlockFace {
    fn draw_text(
        &self,
        canvas: &mut RgbaImage,
        text: &str,
        size: f32,
        x: i32,
        baseline: i32,
        color: Rgba<u8>,
    ) {
        let adv = self.char_advance(size) as i32;
        let cap = (size * self.cap_height).round() as i32;
        let (cw, ch) = (canvas.width() as i32, canvas.height() as i32);
        for (i, c) in text.chars().enumerate() {
            if c.is_whitespace() {
                continue;
            }
            let left = x + i as i32 * adv + 1;
            let right = x + (i as i32 + 1) * adv - 1;
            for py in (baseline - cap).max(0)..baseline.min(ch) {
                for px in left.max(0)..right.min(cw) {
                    canvas.put_pixel(px as u32, py as u32, color);
                }
            }
        }
    }
}
