//! Tile layout
//!
//! Every measurement is derived from the canvas height through the divisors
//! in [`LayoutConfig`], so changing the height rescales the whole card
//! consistently.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::text::FontMetrics;
use crate::element::Element;
use crate::{Error, Result};

/// Smallest font size shrink-to-fit will go down to.
pub const MIN_FONT_SIZE: f32 = 1.0;

/// What to do with a string wider than the space it is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Reduce the font size until the string fits the inner width
    #[default]
    ShrinkToFit,
    /// Keep the size; the rasterizer clips at the canvas edges
    Clip,
}

/// Proportions of a card. Immutable once a run starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// width / height
    pub aspect_ratio: f64,
    pub border_divisor: u32,
    pub padding_divisor: u32,
    pub number_divisor: f32,
    pub symbol_divisor: f32,
    pub name_divisor: f32,
    pub mass_divisor: f32,
    /// Decimal places printed for the atomic mass
    pub mass_precision: usize,
    pub overflow: OverflowPolicy,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            aspect_ratio: 2456.0 / 1882.0,
            border_divisor: 15,
            padding_divisor: 20,
            number_divisor: 10.0,
            symbol_divisor: 3.0,
            name_divisor: 7.0,
            mass_divisor: 10.0,
            mass_precision: 4,
            overflow: OverflowPolicy::ShrinkToFit,
        }
    }
}

impl LayoutConfig {
    /// Read overrides from a JSON file; absent fields keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::ConfigLoad(format!("reading {}: {}", path.display(), e)))?;
        let config: Self = serde_json::from_str(&text)
            .map_err(|e| Error::ConfigLoad(format!("parsing {}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.aspect_ratio.is_finite() && self.aspect_ratio > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "aspect ratio must be positive, got {}",
                self.aspect_ratio
            )));
        }
        if self.border_divisor == 0 || self.padding_divisor == 0 {
            return Err(Error::InvalidConfig(
                "border and padding divisors must be non-zero".into(),
            ));
        }
        for role in TextRole::ALL {
            let d = self.divisor(role);
            if !(d.is_finite() && d > 0.0) {
                return Err(Error::InvalidConfig(format!(
                    "{:?} font divisor must be positive, got {}",
                    role, d
                )));
            }
        }
        Ok(())
    }

    fn divisor(&self, role: TextRole) -> f32 {
        match role {
            TextRole::Number => self.number_divisor,
            TextRole::Symbol => self.symbol_divisor,
            TextRole::Name => self.name_divisor,
            TextRole::Mass => self.mass_divisor,
        }
    }

    /// Font size for `role` on a canvas of the given height.
    pub fn font_size(&self, role: TextRole, height: u32) -> f32 {
        height as f32 / self.divisor(role)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Canvas size plus the frame measurements derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasGeometry {
    pub width: u32,
    pub height: u32,
    pub border: u32,
    pub padding: u32,
}

impl CanvasGeometry {
    /// Width follows from the height and the configured aspect ratio.
    pub fn from_height(height: u32, config: &LayoutConfig) -> Result<Self> {
        config.validate()?;
        let width = (height as f64 * config.aspect_ratio).round();
        if !(1.0..=u32::MAX as f64).contains(&width) {
            return Err(Error::InvalidConfig(format!(
                "height {} gives an unusable width {}",
                height, width
            )));
        }
        Self::with_size(width as u32, height, config)
    }

    /// Explicit canvas size; border and padding still follow the height.
    pub fn with_size(width: u32, height: u32, config: &LayoutConfig) -> Result<Self> {
        config.validate()?;
        if width == 0 || height == 0 {
            return Err(Error::InvalidConfig(format!(
                "canvas must be at least 1x1, got {}x{}",
                width, height
            )));
        }
        let limit = width.min(height) / 2;
        Ok(Self {
            width,
            height,
            border: (height / config.border_divisor).min(limit),
            padding: (height / config.padding_divisor).min(limit),
        })
    }

    /// Distance from the canvas edge to the text area.
    pub fn inset(&self) -> u32 {
        self.border + self.padding
    }

    pub fn inner_width(&self) -> u32 {
        self.width.saturating_sub(2 * self.inset())
    }

    /// Top, bottom, left and right frame strips.
    pub fn border_rects(&self) -> [Rect; 4] {
        let (w, h, b) = (self.width, self.height, self.border);
        [
            Rect { x: 0, y: 0, width: w, height: b },
            Rect { x: 0, y: h.saturating_sub(b) as i32, width: w, height: b },
            Rect { x: 0, y: 0, width: b, height: h },
            Rect { x: w.saturating_sub(b) as i32, y: 0, width: b, height: h },
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextRole {
    Number,
    Symbol,
    Name,
    Mass,
}

impl TextRole {
    pub const ALL: [TextRole; 4] = [
        TextRole::Number,
        TextRole::Symbol,
        TextRole::Name,
        TextRole::Mass,
    ];
}

/// The four strings printed on a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardText {
    pub number: String,
    pub symbol: String,
    pub name: String,
    pub mass: String,
}

impl CardText {
    pub fn for_element(element: &Element, mass_precision: usize) -> Self {
        Self {
            number: element.number.to_string(),
            symbol: element.symbol.clone(),
            name: element.name.clone(),
            mass: format!("{:.*}", mass_precision, element.mass),
        }
    }

    pub fn get(&self, role: TextRole) -> &str {
        match role {
            TextRole::Number => &self.number,
            TextRole::Symbol => &self.symbol,
            TextRole::Name => &self.name,
            TextRole::Mass => &self.mass,
        }
    }
}

/// Where and how large one string is drawn. `(x, baseline)` is the pen
/// origin handed to the text face.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPlacement {
    pub role: TextRole,
    pub text: String,
    pub size: f32,
    pub x: i32,
    pub baseline: i32,
    /// Measured advance width at `size`
    pub width: u32,
}

/// A fully laid-out card.
#[derive(Debug, Clone, PartialEq)]
pub struct TileLayout {
    pub geometry: CanvasGeometry,
    pub borders: [Rect; 4],
    /// In [`TextRole::ALL`] order
    pub texts: [TextPlacement; 4],
}

impl TileLayout {
    pub fn text(&self, role: TextRole) -> &TextPlacement {
        &self.texts[role as usize]
    }
}

fn fit<M: FontMetrics + ?Sized>(metrics: &M, text: &str, size: f32, max_width: u32) -> (f32, u32) {
    let width = metrics.text_width(text, size);
    if width <= max_width || max_width == 0 {
        return (size, width);
    }

    let mut size = (size * max_width as f32 / width as f32).max(MIN_FONT_SIZE);
    let mut width = metrics.text_width(text, size);
    // Rounding in the metrics can leave the first guess a pixel or two over.
    while width > max_width && size > MIN_FONT_SIZE {
        size = (size - 0.5).max(MIN_FONT_SIZE);
        width = metrics.text_width(text, size);
    }
    (size, width)
}

/// Lay out one card.
///
/// Number sits top-left inside the frame, mass mirrors it top-right, symbol
/// is centered with its baseline on the horizontal midline and the name is
/// centered one name-line plus one padding below it.
pub fn layout_tile<M: FontMetrics + ?Sized>(
    geometry: &CanvasGeometry,
    config: &LayoutConfig,
    text: &CardText,
    metrics: &M,
) -> TileLayout {
    let w = geometry.width as i32;
    let h = geometry.height as i32;
    let inset = geometry.inset() as i32;
    let padding = geometry.padding as i32;

    let place = |role: TextRole| {
        let s = text.get(role);
        let size = config.font_size(role, geometry.height);
        let (size, width) = match config.overflow {
            OverflowPolicy::ShrinkToFit => fit(metrics, s, size, geometry.inner_width()),
            OverflowPolicy::Clip => (size, metrics.text_width(s, size)),
        };
        let line = metrics.line_height(size) as i32;
        let (x, baseline) = match role {
            TextRole::Number => (inset, inset + line),
            TextRole::Mass => (w - inset - width as i32, inset + line),
            TextRole::Symbol => ((w - width as i32) / 2, h / 2),
            TextRole::Name => ((w - width as i32) / 2, h / 2 + line + padding),
        };
        TextPlacement {
            role,
            text: s.to_string(),
            size,
            x,
            baseline,
            width,
        }
    };

    TileLayout {
        geometry: *geometry,
        borders: geometry.border_rects(),
        texts: TextRole::ALL.map(place),
    }
}
