//! Pure string parsers shared by every input surface.
//!
//! CSV cells separate list entries with semicolons; config files and
//! interview answers use commas. Both funnel through the same trimming and
//! drop rules, so a given entry parses identically everywhere.

use log::warn;

use crate::domain::request::Musician;

/// Split a semicolon-separated cell of `role: name` pairs.
///
/// Each candidate is split on its first colon; whitespace is trimmed from
/// both halves. Candidates without a colon are dropped with a warning, and
/// empty candidates (consecutive or trailing separators) are ignored.
pub fn parse_musician_pairs(raw: &str) -> Vec<Musician> {
    split_pairs(raw, ';')
}

/// Comma-separated variant of [`parse_musician_pairs`] for config entries.
pub fn parse_musician_pairs_comma(raw: &str) -> Vec<Musician> {
    split_pairs(raw, ',')
}

/// Split a semicolon-separated cell into trimmed, non-empty role names,
/// preserving order.
pub fn parse_role_list(raw: &str) -> Vec<String> {
    split_list(raw, ';')
}

/// Comma-separated variant of [`parse_role_list`] for config entries and
/// interview answers.
pub fn parse_comma_list(raw: &str) -> Vec<String> {
    split_list(raw, ',')
}

fn split_list(raw: &str, separator: char) -> Vec<String> {
    raw.split(separator)
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_owned)
        .collect()
}

fn split_pairs(raw: &str, separator: char) -> Vec<Musician> {
    let mut musicians = Vec::new();
    for candidate in raw.split(separator).map(str::trim).filter(|c| !c.is_empty()) {
        match candidate.split_once(':') {
            Some((role, name)) => musicians.push(Musician::new(role.trim(), name.trim())),
            None => warn!("dropping musician entry without a colon: '{candidate}'"),
        }
    }
    musicians
}
