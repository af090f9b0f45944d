//! CSS-like stylesheet scanners
//!
//! [`parse_css_block`] reads one `selector { key: value; ... }` rule.
//! [`parse_css_media_query_block`] reads an `@`-query whose block nests
//! rules. [`parse_css_blocks`] walks a whole stylesheet best-effort,
//! collecting both.
//!
//! Selectors, `@`-query identifiers and declaration values are trimmed of
//! surrounding whitespace. Declaration values are copied verbatim otherwise.

use crate::classify::Alphabet;
use crate::cursor::{Source, skip_block_comment, skip_spaces};
use crate::error::{ScanError, ScanResult};
use crate::token::{scan_at_rule_ident, scan_css_ident, scan_css_key, scan_css_value};
use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, trace};

/// Declarations of one rule (duplicate keys keep the last value)
pub type Declarations = IndexMap<String, String>;

/// Rules keyed by selector
pub type CssRules = IndexMap<String, Declarations>;

/// A scanned `selector { ... }` rule
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssBlock {
    pub selector: String,
    pub declarations: Declarations,
}

/// A scanned `@query { rules }` block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaBlock {
    pub query: String,
    pub rules: CssRules,
}

/// Entry of a stylesheet: a plain rule or an `@`-query block of rules.
///
/// Serialized untagged, so an empty `@`-query block and an empty rule both
/// render as `{}`. Only `Serialize` is provided for that reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CssEntry {
    Rule(Declarations),
    Media(CssRules),
}

impl CssEntry {
    /// Returns the declarations if this is a plain rule
    pub fn as_rule(&self) -> Option<&Declarations> {
        if let CssEntry::Rule(declarations) = self {
            Some(declarations)
        } else {
            None
        }
    }

    /// Returns the nested rules if this is an `@`-query block
    pub fn as_media(&self) -> Option<&CssRules> {
        if let CssEntry::Media(rules) = self {
            Some(rules)
        } else {
            None
        }
    }
}

/// Stylesheet entries keyed by selector or `@`-query identifier
pub type CssSheet = IndexMap<String, CssEntry>;

/// Parses one rule block starting at or after `cursor`.
///
/// Code points before the selector are skipped. The selector must be
/// followed by `{`. Inside the block stray `;` and `/* */` comments are
/// skipped; every declaration needs a key, a `:` and a value ending at `;`
/// or `}`.
pub fn parse_css_block(cursor: usize, src: &Source<'_>) -> ScanResult<(usize, CssBlock)> {
    let mut i = cursor;
    while let Some(c) = src.char_at(i) {
        if Alphabet::CSS_SELECTOR.is_head(c) {
            break;
        }
        i += 1;
    }
    if i >= src.len() {
        return Err(ScanError::unexpected("expected a selector", cursor));
    }

    let (next, selector) = scan_css_ident(i, src)?;
    i = skip_spaces(next, src);
    if !src.is_at(i, '{') {
        return Err(ScanError::unexpected(
            format!("expected '{{' after selector \"{}\"", selector),
            i,
        ));
    }

    let (i, declarations) = parse_declarations(i + 1, src)?;
    trace!(selector = %selector, count = declarations.len(), "parsed css block");
    Ok((
        i,
        CssBlock {
            selector,
            declarations,
        },
    ))
}

/// Parses declarations up to and including the closing `}`
fn parse_declarations(cursor: usize, src: &Source<'_>) -> ScanResult<(usize, Declarations)> {
    let mut declarations = Declarations::new();
    let mut i = cursor;

    loop {
        i = skip_spaces(i, src);
        if let Some(next) = skip_block_comment(i, src) {
            i = next;
            continue;
        }
        match src.char_at(i) {
            None => return Err(ScanError::unexpected("unterminated css block", cursor)),
            Some('}') => return Ok((i + 1, declarations)),
            Some(';') => {
                i += 1;
                continue;
            }
            Some(c) if !Alphabet::CSS_KEY.is_head(c) => {
                return Err(ScanError::unexpected(
                    format!("expected a declaration key, found '{}'", c),
                    i,
                ));
            }
            Some(_) => {}
        }

        let (next, key) = scan_css_key(i, src)?;
        i = skip_spaces(next, src);
        if !src.is_at(i, ':') {
            return Err(ScanError::unexpected(
                format!("expected ':' after declaration key \"{}\"", key),
                i,
            ));
        }

        let (next, value) = scan_css_value(i + 1, src)?;
        declarations.insert(key, value);
        i = next;

        match src.char_at(i) {
            Some(';') => i += 1,
            Some('}') => return Ok((i + 1, declarations)),
            _ => return Err(ScanError::unexpected("unterminated css block", cursor)),
        }
    }
}

/// Parses an `@`-query block whose body nests rule blocks.
///
/// The query identifier keeps its `@` and runs up to the opening `{`.
/// Code points between nested rules that cannot start a selector are
/// skipped, and a nested rule with malformed structure is dropped without
/// leaving the block.
pub fn parse_css_media_query_block(
    cursor: usize,
    src: &Source<'_>,
) -> ScanResult<(usize, MediaBlock)> {
    let mut i = cursor;
    while src.char_at(i).is_some_and(|c| c != '@') {
        i += 1;
    }
    if i >= src.len() {
        return Err(ScanError::unexpected("expected '@'", cursor));
    }

    let start = i;
    let (next, query) = scan_at_rule_ident(i, src)?;
    i = next + 1;

    let mut rules = CssRules::new();
    loop {
        i = skip_spaces(i, src);
        if let Some(next) = skip_block_comment(i, src) {
            i = next;
            continue;
        }
        match src.char_at(i) {
            None => return Err(ScanError::unexpected("unterminated @-block", start)),
            Some('}') => {
                trace!(query = %query, count = rules.len(), "parsed @-block");
                return Ok((i + 1, MediaBlock { query, rules }));
            }
            Some(c) if Alphabet::CSS_SELECTOR.is_head(c) => match parse_css_block(i, src) {
                Ok((next, block)) => {
                    rules.insert(block.selector, block.declarations);
                    i = next;
                }
                Err(err) if err.is_recoverable() => {
                    let resume = skip_rule(i, src);
                    debug!(
                        query = %query,
                        offset = i,
                        resume,
                        error = %err,
                        "skipping malformed nested rule"
                    );
                    i = resume;
                }
                Err(err) => return Err(err),
            },
            Some(_) => i += 1,
        }
    }
}

/// Skips a rule starting at `cursor` to just past its brace-balanced `}`.
///
/// A `}` reached before any `{` closes the enclosing block and is left
/// unconsumed.
fn skip_rule(cursor: usize, src: &Source<'_>) -> usize {
    let mut depth = 0usize;
    let mut i = cursor;
    while let Some(c) = src.char_at(i) {
        match c {
            '{' => depth += 1,
            '}' if depth == 0 => return i,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return i + 1;
                }
            }
            _ => {}
        }
        i += 1;
    }
    i
}

/// Collects every rule and `@`-query block from `cursor` to the end.
///
/// Scanning is best-effort: code points that start neither a selector nor
/// an `@`-query are skipped, and a block with malformed structure is
/// dropped with scanning resumed just past the point of failure. Capacity
/// and escape failures still abort the scan.
pub fn parse_css_blocks(cursor: usize, src: &Source<'_>) -> ScanResult<(usize, CssSheet)> {
    let mut sheet = CssSheet::new();
    let mut i = cursor;

    while let Some(c) = src.char_at(i) {
        if let Some(next) = skip_block_comment(i, src) {
            i = next;
            continue;
        }

        let parsed = if Alphabet::CSS_SELECTOR.is_head(c) {
            parse_css_block(i, src).map(|(next, block)| {
                sheet.insert(block.selector, CssEntry::Rule(block.declarations));
                next
            })
        } else if c == '@' {
            parse_css_media_query_block(i, src).map(|(next, media)| {
                sheet.insert(media.query, CssEntry::Media(media.rules));
                next
            })
        } else {
            i += 1;
            continue;
        };

        i = match parsed {
            Ok(next) => next,
            Err(err) if err.is_recoverable() => {
                let resume = err.position().unwrap_or(i).max(i) + 1;
                debug!(offset = i, resume, error = %err, "skipping malformed css");
                resume
            }
            Err(err) => return Err(err),
        };
    }

    Ok((i.min(src.len()), sheet))
}
