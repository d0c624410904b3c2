//! Display-title derivation from raw filenames

use std::sync::LazyLock;

use regex::Regex;

// Optional lowercase-letters+digits+dash prefix (a track-number tag), the
// name itself, then a case-insensitive audio suffix.
static NORMALIZE_RX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[a-z]*\d+-)?(?P<name>.*)\.(?i:mp3|og[ga])$").expect("hard-coded name pattern")
});

/// Derive a display title from a raw filename.
///
/// Directory components are stripped, a leading track-number tag and the
/// audio suffix are removed when the name matches the expected shape, and
/// underscores become spaces. Never fails: an unrecognized suffix degrades
/// to plain extension stripping.
pub fn normalize_name(raw_name: &str) -> String {
    let name = match raw_name.rfind(['/', '\\']) {
        Some(i) => &raw_name[i + 1..],
        None => raw_name,
    };
    let name = match NORMALIZE_RX.captures(name) {
        Some(caps) => caps.name("name").map_or("", |m| m.as_str()),
        None => match name.rfind('.') {
            Some(i) => &name[..i],
            None => name,
        },
    };
    name.replace('_', " ")
}
