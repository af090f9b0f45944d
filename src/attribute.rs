//! Key/value scanner shared by tag attributes and `key=value` lines
//!
//! Scanning is best-effort: code points that cannot start a key are
//! skipped, and a key that is not followed by the separator is discarded.
//! Only capacity and truncated-escape failures are reported as errors.

use crate::classify::Alphabet;
use crate::cursor::Source;
use crate::error::ScanResult;
use crate::token::{LINE_TERMINATORS, scan_ident, scan_value};
use indexmap::IndexMap;
use tracing::debug;

/// Attribute map (raw text values, insertion order preserved)
pub type AttributeMap = IndexMap<String, String>;

/// A scanned `key <separator> value` pair
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyValue {
    pub key: String,
    pub value: String,
}

impl KeyValue {
    /// Returns true if no key was captured
    pub fn is_empty(&self) -> bool {
        self.key.is_empty()
    }
}

/// Scans forward for the next `key <separator> value` pair.
///
/// Stops at the first code point in `terminators` (left unconsumed) or once
/// a pair has been captured. Values are never type-inferred. When no pair is
/// found both key and value are empty.
pub fn parse_key_value(
    cursor: usize,
    src: &Source<'_>,
    separator: char,
    terminators: &[char],
) -> ScanResult<(usize, KeyValue)> {
    let mut i = cursor;

    while let Some(c) = src.char_at(i) {
        if terminators.contains(&c) {
            break;
        }
        if !Alphabet::IDENT.is_head(c) {
            i += 1;
            continue;
        }

        let (next, key) = scan_ident(i, src)?;
        i = skip_blanks(next, src, terminators);
        if src.is_at(i, separator) {
            let (next, token) = scan_value(i + 1, src, terminators)?;
            return Ok((
                next,
                KeyValue {
                    key,
                    value: token.text,
                },
            ));
        }
        debug!(key = %key, offset = i, "discarding key without separator");
    }

    Ok((i, KeyValue::default()))
}

/// Skips whitespace that is not itself a terminator
fn skip_blanks(cursor: usize, src: &Source<'_>, terminators: &[char]) -> usize {
    let mut i = cursor;
    while let Some(c) = src.char_at(i) {
        if !c.is_whitespace() || terminators.contains(&c) {
            break;
        }
        i += 1;
    }
    i
}

/// Scans a `key=value` line ending at a newline
pub fn parse_line_key_value(cursor: usize, src: &Source<'_>) -> ScanResult<(usize, KeyValue)> {
    parse_key_value(cursor, src, '=', LINE_TERMINATORS)
}
