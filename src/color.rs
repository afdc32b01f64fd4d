//! Category color table and resolution.

use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use image::Rgba;
use log::warn;

use crate::category::{self, UNKNOWN};
use crate::{Error, Result};

/// Neutral gray used when neither the category nor `unknown` yields a
/// usable color.
pub const FALLBACK_GRAY: Rgba<u8> = Rgba([0x80, 0x80, 0x80, 0xff]);

/// Parse `#rgb`, `rgb`, `#rrggbb` or `rrggbb` into an opaque color.
pub fn parse_hex(value: &str) -> Result<Rgba<u8>> {
    let trimmed = value.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(Error::ColorParse(value.to_string()));
    }

    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => return Err(Error::ColorParse(value.to_string())),
    };

    let channel = |i: usize| {
        u8::from_str_radix(&expanded[i..i + 2], 16).map_err(|_| Error::ColorParse(value.to_string()))
    };
    Ok(Rgba([channel(0)?, channel(2)?, channel(4)?, 0xff]))
}

/// Mapping from normalized category name to hex color string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorTable {
    entries: HashMap<String, String>,
}

impl ColorTable {
    /// Read a JSON object of `category -> hex` from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::ConfigLoad(format!("reading {}: {}", path.display(), e)))?;
        Self::from_json(&text)
            .map_err(|e| Error::ConfigLoad(format!("parsing {}: {}", path.display(), e)))
    }

    /// Parse a JSON object. Keys are normalized so `"Noble Gases"` and
    /// `"noble gas"` address the same entry.
    ///
    /// Keys are visited in sorted order, so collisions resolve the same way
    /// on every run (see the `FromIterator` impl for the rule).
    pub fn from_json(text: &str) -> std::result::Result<Self, serde_json::Error> {
        let raw: BTreeMap<String, String> = serde_json::from_str(text)?;
        Ok(raw.into_iter().collect())
    }

    pub fn get(&self, category: &str) -> Option<&str> {
        self.entries.get(category).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has_unknown(&self) -> bool {
        self.entries.contains_key(UNKNOWN)
    }
}

/// Keys are normalized. When several raw keys land on the same category, a
/// key that is already in normalized form wins; otherwise the first one
/// seen wins. Every collision is logged.
impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for ColorTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        // normalized key -> (raw key, color)
        let mut kept: HashMap<String, (String, String)> = HashMap::new();
        for (k, v) in iter {
            let raw = k.as_ref();
            let key = category::normalize(raw);
            match kept.entry(key) {
                Entry::Vacant(slot) => {
                    slot.insert((raw.to_string(), v.into()));
                }
                Entry::Occupied(mut slot) => {
                    let exact = raw == slot.key().as_str();
                    let (prev_raw, _) = slot.get();
                    if exact && prev_raw != slot.key() {
                        warn!(
                            "color keys `{}` and `{}` both mean `{}`; using `{}`",
                            prev_raw,
                            raw,
                            slot.key(),
                            raw
                        );
                        slot.insert((raw.to_string(), v.into()));
                    } else {
                        warn!(
                            "color keys `{}` and `{}` both mean `{}`; using `{}`",
                            prev_raw,
                            raw,
                            slot.key(),
                            prev_raw
                        );
                    }
                }
            }
        }
        let entries = kept
            .into_iter()
            .map(|(key, (_, color))| (key, color))
            .collect();
        ColorTable { entries }
    }
}

/// Which step of the fallback chain produced a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSource {
    /// The category's own entry
    Exact,
    /// The table's `unknown` entry
    Unknown,
    /// The hardcoded gray
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorResolution {
    pub color: Rgba<u8>,
    pub source: ColorSource,
}

/// Resolve a normalized category to a color.
///
/// Lookup order is `table[category]`, then `table["unknown"]`, then
/// [`FALLBACK_GRAY`]. A malformed entry goes straight to the gray fallback
/// with a warning. The result is always opaque.
pub fn resolve(category: &str, table: &ColorTable) -> ColorResolution {
    let (hex, source) = match table.get(category) {
        Some(hex) => (Some(hex), ColorSource::Exact),
        None => (table.get(UNKNOWN), ColorSource::Unknown),
    };

    let Some(hex) = hex else {
        warn!("no color for category `{}` and no `unknown` entry; using gray", category);
        return ColorResolution {
            color: FALLBACK_GRAY,
            source: ColorSource::Fallback,
        };
    };

    match parse_hex(hex) {
        Ok(color) => ColorResolution { color, source },
        Err(e) => {
            warn!("{} for category `{}`; using gray", e, category);
            ColorResolution {
                color: FALLBACK_GRAY,
                source: ColorSource::Fallback,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, &str)]) -> ColorTable {
        entries.iter().copied().collect()
    }

    #[test]
    fn parses_short_and_long_forms() {
        assert_eq!(parse_hex("#3498db").unwrap(), Rgba([0x34, 0x98, 0xdb, 0xff]));
        assert_eq!(parse_hex("3498DB").unwrap(), Rgba([0x34, 0x98, 0xdb, 0xff]));
        assert_eq!(parse_hex("#fa0").unwrap(), Rgba([0xff, 0xaa, 0x00, 0xff]));
        assert_eq!(parse_hex("  #e0e0e0 ").unwrap(), Rgba([0xe0, 0xe0, 0xe0, 0xff]));
    }

    #[test]
    fn rejects_malformed_hex() {
        for bad in ["#12", "zzzzzz", "#12345", "#1234567", "", "#", "#ééé"] {
            assert!(
                matches!(parse_hex(bad), Err(Error::ColorParse(_))),
                "expected parse failure for {bad:?}"
            );
        }
    }

    #[test]
    fn resolves_exact_entry() {
        let t = table(&[("nonmetal", "#3498db")]);
        let r = resolve("nonmetal", &t);
        assert_eq!(r.color, Rgba([0x34, 0x98, 0xdb, 0xff]));
        assert_eq!(r.source, ColorSource::Exact);
    }

    #[test]
    fn missing_category_uses_unknown_entry() {
        let t = table(&[("unknown", "#e0e0e0")]);
        let r = resolve("ghost-category", &t);
        assert_eq!(r.color, Rgba([0xe0, 0xe0, 0xe0, 0xff]));
        assert_eq!(r.source, ColorSource::Unknown);
    }

    #[test]
    fn malformed_or_missing_falls_back_to_gray() {
        for bad in ["#12", "zzzzzz"] {
            let t = table(&[("nonmetal", bad), ("unknown", "#e0e0e0")]);
            let r = resolve("nonmetal", &t);
            assert_eq!(r.color, FALLBACK_GRAY);
            assert_eq!(r.source, ColorSource::Fallback);
        }

        let t = table(&[("unknown", "not a color")]);
        assert_eq!(resolve("metalloid", &t).color, FALLBACK_GRAY);

        let empty = ColorTable::default();
        assert_eq!(resolve("metalloid", &empty).source, ColorSource::Fallback);
    }

    #[test]
    fn output_is_always_opaque() {
        let t = table(&[("a", "#000"), ("b", "nope"), ("unknown", "#ffffff")]);
        for cat in ["a", "b", "c"] {
            assert_eq!(resolve(cat, &t).color.0[3], 0xff);
        }
    }

    #[test]
    fn json_keys_are_normalized() {
        let t = ColorTable::from_json(r##"{"Noble Gases": "#ff00ff", "Unknown": "#eee"}"##).unwrap();
        assert_eq!(t.get("noble gas"), Some("#ff00ff"));
        assert!(t.has_unknown());
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn colliding_keys_resolve_the_same_way_every_time() {
        let json = r##"{"Noble Gases": "#ff0000", "noble gas": "#0000ff", "noble_gases": "#00ff00"}"##;
        for _ in 0..50 {
            let t = ColorTable::from_json(json).unwrap();
            assert_eq!(t.get("noble gas"), Some("#0000ff"));
            assert_eq!(t.len(), 1);
        }

        // No canonical spelling: first key in sorted order wins.
        let json = r##"{"post_transition metal": "#00ff00", "Post Transition Metals": "#ff0000"}"##;
        for _ in 0..50 {
            let t = ColorTable::from_json(json).unwrap();
            assert_eq!(t.get("post-transition metal"), Some("#ff0000"));
        }
    }

    #[test]
    fn canonical_key_wins_regardless_of_position() {
        let t: ColorTable = [("noble gas", "#0000ff"), ("Noble Gases", "#ff0000")]
            .into_iter()
            .collect();
        assert_eq!(t.get("noble gas"), Some("#0000ff"));
        let t: ColorTable = [("Noble Gases", "#ff0000"), ("noble gas", "#0000ff")]
            .into_iter()
            .collect();
        assert_eq!(t.get("noble gas"), Some("#0000ff"));
    }

    #[test]
    fn load_reports_missing_file_as_config_error() {
        let err = ColorTable::load("/definitely/not/here/colours.json").unwrap_err();
        assert!(matches!(err, Error::ConfigLoad(_)));
        assert!(err.is_fatal());
    }
}
