//! Card rendering: layout, paint list, rasterization.

pub mod layout;
pub mod paint;
pub mod raster;
pub mod text;

use image::{Rgba, RgbaImage};
use log::debug;

use crate::category;
use crate::color::{self, ColorTable};
use crate::element::Element;
use layout::{layout_tile, CanvasGeometry, CardText, LayoutConfig};
use text::TextFace;

/// Category and frame color chosen for one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardStyle {
    /// Normalized category
    pub category: String,
    pub color: Rgba<u8>,
}

impl CardStyle {
    /// Normalize the element's category and resolve its color.
    pub fn for_element(element: &Element, table: &ColorTable) -> Self {
        let category = category::normalize(&element.category);
        let resolution = color::resolve(&category, table);
        Self {
            category,
            color: resolution.color,
        }
    }
}

/// Render one element card. Pure: no I/O.
pub fn render_card<F: TextFace + ?Sized>(
    element: &Element,
    style: &CardStyle,
    geometry: &CanvasGeometry,
    config: &LayoutConfig,
    face: &F,
) -> RgbaImage {
    let text = CardText::for_element(element, config.mass_precision);
    let layout = layout_tile(geometry, config, &text, face);
    debug!(
        "{} ({}): symbol at ({}, {}) size {:.1}",
        element.symbol,
        style.category,
        layout.text(layout::TextRole::Symbol).x,
        layout.text(layout::TextRole::Symbol).baseline,
        layout.text(layout::TextRole::Symbol).size,
    );
    let commands = paint::paint_tile(&layout, style.color);
    raster::rasterize(&commands, geometry.width, geometry.height, face)
}

#[cfg(test)]
mod tests {
    use super::*;
    use text::BlockFace;

    fn hydrogen() -> Element {
        Element::new(1, "H", "Hydrogen", 1.008, "diatomic nonmetal")
    }

    #[test]
    fn style_uses_normalized_category() {
        let table: ColorTable = [("nonmetal", "#3498db"), ("unknown", "#e0e0e0")]
            .into_iter()
            .collect();
        let style = CardStyle::for_element(&hydrogen(), &table);
        assert_eq!(style.category, "nonmetal");
        assert_eq!(style.color, Rgba([0x34, 0x98, 0xdb, 0xff]));
    }

    #[test]
    fn card_has_frame_background_and_ink() {
        let cfg = LayoutConfig::default();
        let g = CanvasGeometry::from_height(600, &cfg).unwrap();
        let style = CardStyle {
            category: "nonmetal".into(),
            color: Rgba([0x34, 0x98, 0xdb, 0xff]),
        };
        let img = render_card(&hydrogen(), &style, &g, &cfg, &BlockFace::default());

        assert_eq!(img.dimensions(), (783, 600));
        // frame on all four sides
        assert_eq!(img.get_pixel(0, 0), &style.color);
        assert_eq!(img.get_pixel(782, 599), &style.color);
        assert_eq!(img.get_pixel(39, 300), &style.color);
        assert_eq!(img.get_pixel(750, 300), &style.color);
        // background just inside the frame
        assert_eq!(img.get_pixel(41, 41), &paint::BACKGROUND);
        // symbol block sits just above the midline
        let layout = layout_tile(
            &g,
            &cfg,
            &CardText::for_element(&hydrogen(), cfg.mass_precision),
            &BlockFace::default(),
        );
        let sym = layout.text(layout::TextRole::Symbol);
        let cx = (sym.x + sym.width as i32 / 2) as u32;
        assert_eq!(img.get_pixel(cx, 290), &paint::INK);
    }
}
