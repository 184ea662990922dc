//! Recyclable-material vocabulary and keyword matching.
//!
//! Statistics counters are keyed by the stable English labels below; the
//! keyword table maps free-form Russian text onto them. The label set is
//! open: counters for labels outside the vocabulary can still be created
//! (e.g. when the model classifier is extended), but the keyword strategy
//! only ever produces vocabulary labels.

/// Labels a fresh session's statistics are seeded with.
pub const SEED_MATERIALS: [&str; 3] = ["plastic", "glass", "metal"];

/// Closed vocabulary accepted from the model-strategy classifier.
pub const MATERIAL_VOCABULARY: [&str; 6] =
    ["plastic", "glass", "metal", "paper", "batteries", "organic"];

/// Sentinel the model classifier is instructed to answer when nothing matches.
pub const NO_MATERIAL_SENTINEL: &str = "none";

/// Keyword table for the keyword-strategy classifier.
///
/// Matching is case-insensitive substring search, first match wins. Entries
/// are Russian stems so that inflected forms ("пластиковую", "стеклянные")
/// still match.
const KEYWORDS: [(&str, &str); 13] = [
    ("пластик", "plastic"),
    ("бутылк", "plastic"),
    ("стекл", "glass"),
    ("банк", "glass"),
    ("металл", "metal"),
    ("жестян", "metal"),
    ("алюмини", "metal"),
    ("бумаг", "paper"),
    ("картон", "paper"),
    ("газет", "paper"),
    ("батарейк", "batteries"),
    ("аккумулятор", "batteries"),
    ("органи", "organic"),
];

/// Map free-form text to a material label via keyword matching.
///
/// Deterministic, no external calls, no failure mode. Returns `None` when no
/// keyword is present.
pub fn match_material(text: &str) -> Option<&'static str> {
    let lowered = text.to_lowercase();
    KEYWORDS
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map(|(_, label)| *label)
}

/// Seed labels for a fresh statistics map.
pub fn seed_materials() -> impl Iterator<Item = &'static str> {
    SEED_MATERIALS.iter().copied()
}

/// Russian display name for a material label, used when rendering statistics.
pub fn display_name(label: &str) -> &str {
    match label {
        "plastic" => "пластик",
        "glass" => "стекло",
        "metal" => "металл",
        "paper" => "бумага",
        "batteries" => "батарейки",
        "organic" => "органика",
        other => other,
    }
}
