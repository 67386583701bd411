//! # Removal Parser
//!
//! Turns a compact removal spec into a set of fields to clear. The spec
//! mixes one-letter codes and comma-separated long names in one string:
//! `"cs"`, `"comment,song"` and `"comment,s"` all clear the same two
//! fields. Unknown codes and names are silently ignored; the parser never
//! fails.

use crate::field::FieldId;
use std::collections::BTreeSet;

pub type RemovalSet = BTreeSet<FieldId>;

/// Parse a removal spec.
///
/// Scans left to right. At each position the longest long alias that ends
/// at a comma or at the end of the string wins; otherwise the single
/// character is tried as a short code and the scan advances by one either
/// way. Longest-first keeps `disks` from being swallowed by `disk`.
pub fn parse(spec: &str) -> RemovalSet {
    let mut fields = RemovalSet::new();
    let mut rest = spec;

    while !rest.is_empty() {
        if let Some((field, len)) = match_long_alias(rest) {
            fields.insert(field);
            rest = &rest[len..];
            continue;
        }

        let mut chars = rest.chars();
        // Unwrap is fine: the loop guard guarantees at least one char.
        let c = chars.next().unwrap();
        if let Some(field) = FieldId::from_short(c) {
            fields.insert(field);
        }
        rest = chars.as_str();
    }

    fields
}

/// Longest long alias starting at the head of `rest` and followed by a
/// comma or the end of the string.
fn match_long_alias(rest: &str) -> Option<(FieldId, usize)> {
    let mut best: Option<(FieldId, usize)> = None;
    for field in FieldId::ALL {
        let alias = field.spec().long;
        if !rest.starts_with(alias) {
            continue;
        }
        let delimited = rest.len() == alias.len() || rest.as_bytes()[alias.len()] == b',';
        if delimited && best.is_none_or(|(_, len)| alias.len() > len) {
            best = Some((field, alias.len()));
        }
    }
    best
}
