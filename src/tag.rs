//! SGML-like tag scanner
//!
//! Recognizes `<name attr=value ...>` begin tags, `</name>` end tags and
//! `<name ... />` self-closing tags. Attribute values are raw text, quoted
//! or bare, and are never type-inferred.

use crate::attribute::{AttributeMap, parse_key_value};
use crate::cursor::{Source, skip_spaces};
use crate::error::{ScanError, ScanResult};
use crate::token::{TAG_TERMINATORS, scan_ident};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Whether a tag opens or closes an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagKind {
    Begin,
    End,
}

impl TagKind {
    /// Returns the lowercase name of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            TagKind::Begin => "begin",
            TagKind::End => "end",
        }
    }
}

/// A scanned tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub kind: TagKind,
    pub attributes: AttributeMap,
    /// True for `<name ... />`
    pub self_closing: bool,
}

/// Parses the next tag at or after `cursor`.
///
/// Text before the `<` is skipped. The cursor is returned just past the
/// closing `>`. Duplicate attributes keep the last value; attributes without
/// `=` are ignored.
pub fn parse_tag(cursor: usize, src: &Source<'_>) -> ScanResult<(usize, Tag)> {
    let mut i = cursor;
    while src.char_at(i).is_some_and(|c| c != '<') {
        i += 1;
    }
    if i >= src.len() {
        return Err(ScanError::unexpected("expected '<'", cursor));
    }
    let start = i;

    let mut kind = TagKind::Begin;
    i = skip_spaces(i + 1, src);
    if src.is_at(i, '/') {
        kind = TagKind::End;
        i += 1;
    }

    let (next, name) = scan_ident(skip_spaces(i, src), src)?;
    i = next;

    let mut attributes = AttributeMap::new();
    let mut self_closing = false;
    loop {
        i = skip_spaces(i, src);
        match src.char_at(i) {
            None => return Err(ScanError::unexpected("unterminated tag", start)),
            Some('>') => {
                i += 1;
                break;
            }
            Some(_) => {}
        }

        let (next, attribute) = parse_key_value(i, src, '=', TAG_TERMINATORS)?;
        if attribute.is_empty() {
            self_closing |= slash_before(i, next, src);
        } else {
            attributes.insert(attribute.key, attribute.value);
        }
        i = next;
    }

    trace!(name = %name, kind = kind.as_str(), attributes = attributes.len(), "parsed tag");
    Ok((
        i,
        Tag {
            name,
            kind,
            attributes,
            self_closing,
        },
    ))
}

/// Returns true if the last non-space code point in `start..end` is `/`
fn slash_before(start: usize, end: usize, src: &Source<'_>) -> bool {
    (start..end)
        .rev()
        .filter_map(|k| src.char_at(k))
        .find(|c| !c.is_whitespace())
        == Some('/')
}
