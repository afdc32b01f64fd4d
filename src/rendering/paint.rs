//! Paint commands for one card, in drawing order

use image::Rgba;

use super::layout::{Rect, TextRole, TileLayout};

pub const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const INK: Rgba<u8> = Rgba([0, 0, 0, 255]);

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    /// Flood the whole canvas
    Fill { rgba: Rgba<u8> },
    SolidRect { rect: Rect, rgba: Rgba<u8> },
    Text {
        role: TextRole,
        x: i32,
        baseline: i32,
        size: f32,
        text: String,
        rgba: Rgba<u8>,
    },
}

/// White background, the frame in `border`, then the four strings in black.
pub fn paint_tile(layout: &TileLayout, border: Rgba<u8>) -> Vec<PaintCommand> {
    let mut cmds = Vec::with_capacity(1 + layout.borders.len() + layout.texts.len());
    cmds.push(PaintCommand::Fill { rgba: BACKGROUND });
    cmds.extend(
        layout
            .borders
            .iter()
            .map(|&rect| PaintCommand::SolidRect { rect, rgba: border }),
    );
    cmds.extend(layout.texts.iter().map(|t| PaintCommand::Text {
        role: t.role,
        x: t.x,
        baseline: t.baseline,
        size: t.size,
        text: t.text.clone(),
        rgba: INK,
    }));
    cmds
}
