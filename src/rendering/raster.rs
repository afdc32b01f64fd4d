//! Rasterizer: executes paint commands and encodes PNG

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageResult, Rgba, RgbaImage};

use super::layout::Rect;
use super::paint::PaintCommand;
use super::text::TextFace;

/// An encoded tile ready to be written out.
#[derive(Debug, Clone)]
pub struct EncodedTile {
    pub width: u32,
    pub height: u32,
    pub png_data: Vec<u8>,
}

/// Source-over blend of `color` at `coverage` (0..=1) onto `dst`. The result
/// stays opaque.
pub(crate) fn blend(dst: &mut Rgba<u8>, color: Rgba<u8>, coverage: f32) {
    let a = coverage.clamp(0.0, 1.0) * (color.0[3] as f32 / 255.0);
    if a <= 0.0 {
        return;
    }
    let inv = 1.0 - a;
    for i in 0..3 {
        dst.0[i] = (color.0[i] as f32 * a + dst.0[i] as f32 * inv).round() as u8;
    }
    dst.0[3] = 255;
}

fn fill_rect(canvas: &mut RgbaImage, rect: Rect, rgba: Rgba<u8>) {
    let x0 = rect.x.max(0) as u32;
    let y0 = rect.y.max(0) as u32;
    let x1 = (rect.x as i64 + rect.width as i64).clamp(0, canvas.width() as i64) as u32;
    let y1 = (rect.y as i64 + rect.height as i64).clamp(0, canvas.height() as i64) as u32;
    for y in y0..y1 {
        for x in x0..x1 {
            canvas.put_pixel(x, y, rgba);
        }
    }
}

/// Run `commands` against a fresh `width x height` buffer.
pub fn rasterize<F: TextFace + ?Sized>(
    commands: &[PaintCommand],
    width: u32,
    height: u32,
    face: &F,
) -> RgbaImage {
    let mut canvas = RgbaImage::new(width, height);
    for cmd in commands {
        match cmd {
            PaintCommand::Fill { rgba } => {
                for px in canvas.pixels_mut() {
                    *px = *rgba;
                }
            }
            PaintCommand::SolidRect { rect, rgba } => fill_rect(&mut canvas, *rect, *rgba),
            PaintCommand::Text {
                x,
                baseline,
                size,
                text,
                rgba,
                ..
            } => face.draw_text(&mut canvas, text, *size, *x, *baseline, *rgba),
        }
    }
    canvas
}

pub fn encode_png(image: &RgbaImage) -> ImageResult<EncodedTile> {
    let mut png_data = Vec::new();
    PngEncoder::new(&mut png_data).write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ExtendedColorType::Rgba8,
    )?;
    Ok(EncodedTile {
        width: image.width(),
        height: image.height(),
        png_data,
    })
}
