//! Category normalization
//!
//! Source data spells chemical families inconsistently ("Noble Gases",
//! "noble_gas", "Diatomic Nonmetal", "Lanthanoids"). Everything downstream
//! keys on the canonical names below.

/// Canonical family names. `normalize` maps every known synonym onto one of
/// these.
pub const FAMILIES: [&str; 10] = [
    "nonmetal",
    "noble gas",
    "alkali metal",
    "alkaline earth metal",
    "transition metal",
    "post-transition metal",
    "lanthanide",
    "actinide",
    "metalloid",
    "unknown",
];

/// Category used when nothing better is known.
pub const UNKNOWN: &str = "unknown";

fn canonical(cleaned: &str) -> Option<&'static str> {
    let family = match cleaned {
        "nonmetal" | "nonmetals" | "diatomic nonmetal" | "diatomic nonmetals"
        | "polyatomic nonmetal" | "polyatomic nonmetals" | "reactive nonmetal"
        | "reactive nonmetals" | "non metal" | "non metals" => "nonmetal",
        "noble gas" | "noble gases" => "noble gas",
        "alkali metal" | "alkali metals" => "alkali metal",
        "alkaline earth metal" | "alkaline earth metals" => "alkaline earth metal",
        "transition metal" | "transition metals" => "transition metal",
        "post transition metal" | "post transition metals" => "post-transition metal",
        "lanthanide" | "lanthanides" | "lanthanoid" | "lanthanoids" => "lanthanide",
        "actinide" | "actinides" | "actinoid" | "actinoids" => "actinide",
        "metalloid" | "metalloids" => "metalloid",
        "unknown" => UNKNOWN,
        // "unknown, probably transition metal" and friends
        other if other.starts_with("unknown,") => UNKNOWN,
        _ => return None,
    };
    Some(family)
}

fn clean(raw: &str) -> String {
    let lowered = raw.to_lowercase().replace(['-', '_'], " ");
    lowered.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Canonicalize a raw category string.
///
/// Never fails: unrecognized input comes back lowercased with separators
/// and whitespace cleaned up. `normalize(normalize(x)) == normalize(x)`.
pub fn normalize(raw: &str) -> String {
    let cleaned = clean(raw);
    match canonical(&cleaned) {
        Some(family) => family.to_string(),
        None => cleaned,
    }
}

/// Whether `category` is one of the canonical family names.
pub fn is_canonical(category: &str) -> bool {
    FAMILIES.contains(&category)
}
