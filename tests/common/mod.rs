//! Shared helpers for integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use elemcards::OutlineFont;

const FONT_CANDIDATES: [&str; 6] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// A sans-serif font on this machine, if any. `ELEMCARDS_TEST_FONT` takes
/// precedence over the well-known locations.
pub fn system_font_path() -> Option<PathBuf> {
    if let Ok(p) = std::env::var("ELEMCARDS_TEST_FONT") {
        return Some(PathBuf::from(p));
    }
    FONT_CANDIDATES
        .iter()
        .map(PathBuf::from)
        .find(|p| p.is_file() && OutlineFont::load(p).is_ok())
}

pub fn write_colors(dir: &Path) -> PathBuf {
    let path = dir.join("colours.json");
    std::fs::write(&path, r##"{"nonmetal": "#3498db", "unknown": "#e0e0e0"}"##)
        .expect("write colours.json");
    path
}
