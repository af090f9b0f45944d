//! Token buffer and token scanners
//!
//! Every scanner accumulates code points into a bounded [`TokenBuffer`] and
//! returns the new cursor together with the token. A token that would grow
//! past the configured capacity fails with [`ScanError::BufferOverflow`]; it
//! is never truncated.

use crate::classify::Alphabet;
use crate::cursor::{Source, skip_spaces};
use crate::error::{ScanError, ScanResult};
use crate::value::ScalarKind;
use smallvec::SmallVec;

/// Terminators for key/value lines
pub const LINE_TERMINATORS: &[char] = &['\n'];
/// Terminators for tag attribute values
pub const TAG_TERMINATORS: &[char] = &['>'];
/// Terminators for list elements
pub const LIST_TERMINATORS: &[char] = &[',', ']'];
/// Terminators for map values
pub const MAP_TERMINATORS: &[char] = &[',', '}'];

/// Fixed-capacity scratch storage for one token
#[derive(Debug, Clone)]
pub struct TokenBuffer {
    chars: SmallVec<[char; 32]>,
    capacity: usize,
}

impl TokenBuffer {
    /// Creates an empty buffer that holds at most `capacity` code points
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            chars: SmallVec::new(),
            capacity,
        }
    }

    /// Creates an empty buffer sized by the source configuration
    pub fn for_source(src: &Source<'_>) -> Self {
        Self::with_capacity(src.config().token_capacity)
    }

    /// Appends a code point read at `position`
    #[inline(always)]
    pub fn push(&mut self, c: char, position: usize) -> ScanResult<()> {
        if self.chars.len() >= self.capacity {
            return Err(ScanError::BufferOverflow {
                capacity: self.capacity,
                position,
            });
        }
        self.chars.push(c);
        Ok(())
    }

    /// Drops trailing whitespace
    pub fn trim_end(&mut self) {
        while self.chars.last().is_some_and(|c| c.is_whitespace()) {
            self.chars.pop();
        }
    }

    /// Returns the last accumulated code point
    pub fn last(&self) -> Option<char> {
        self.chars.last().copied()
    }

    /// Returns the number of accumulated code points
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns true if nothing has been accumulated
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Returns the maximum number of code points
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Consumes the buffer into a string
    pub fn into_string(self) -> String {
        self.chars.into_iter().collect()
    }
}

/// Scanned value token with its lexical type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueToken {
    pub text: String,
    pub kind: ScalarKind,
}

/// Appends a maximal run of `alphabet` body code points to `buf`.
///
/// Stops at a newline, at any code point in `stops`, or at the first code
/// point outside the alphabet.
fn scan_alphabet_run(
    cursor: usize,
    src: &Source<'_>,
    alphabet: Alphabet,
    stops: &[char],
    buf: &mut TokenBuffer,
) -> ScanResult<usize> {
    let mut i = cursor;
    while let Some(c) = src.char_at(i) {
        if c == '\n' || stops.contains(&c) || !alphabet.is_body(c) {
            break;
        }
        buf.push(c, i)?;
        i += 1;
    }
    Ok(i)
}

/// Scans an identifier (letters, digits, `_`, `-`)
pub fn scan_ident(cursor: usize, src: &Source<'_>) -> ScanResult<(usize, String)> {
    let mut buf = TokenBuffer::for_source(src);
    let i = scan_alphabet_run(cursor, src, Alphabet::IDENT, &[], &mut buf)?;
    Ok((i, buf.into_string()))
}

/// Scans a CSS selector, trimming trailing whitespace.
///
/// A selector group whose line ends in `,` continues on the next line; the
/// line break is folded into a single space (`h1,\nh2` reads `h1, h2`).
pub fn scan_css_ident(cursor: usize, src: &Source<'_>) -> ScanResult<(usize, String)> {
    let mut buf = TokenBuffer::for_source(src);
    let mut i = scan_alphabet_run(cursor, src, Alphabet::CSS_SELECTOR, &[], &mut buf)?;
    loop {
        buf.trim_end();
        if buf.last() != Some(',') || !src.char_at(i).is_some_and(char::is_whitespace) {
            break;
        }
        i = skip_spaces(i, src);
        buf.push(' ', i)?;
        i = scan_alphabet_run(i, src, Alphabet::CSS_SELECTOR, &[], &mut buf)?;
    }
    Ok((i, buf.into_string()))
}

/// Scans a CSS declaration key, stopping at `:`
pub fn scan_css_key(cursor: usize, src: &Source<'_>) -> ScanResult<(usize, String)> {
    let mut buf = TokenBuffer::for_source(src);
    let i = scan_alphabet_run(cursor, src, Alphabet::CSS_KEY, &[':'], &mut buf)?;
    Ok((i, buf.into_string()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueState {
    Start,
    Bare,
    Quoted { quote: char },
}

/// Scans a quoted or bare value, inferring its lexical type.
///
/// Leading whitespace is skipped. A `"` or `'` opens a quoted value that
/// runs to the matching quote; `\` copies the next code point verbatim.
/// A bare value ends at whitespace or at any code point in `terminators`,
/// which is left unconsumed. A terminator before any content yields an
/// empty String token.
pub fn scan_value(
    cursor: usize,
    src: &Source<'_>,
    terminators: &[char],
) -> ScanResult<(usize, ValueToken)> {
    let mut buf = TokenBuffer::for_source(src);
    let mut kind = ScalarKind::String;
    let mut state = ValueState::Start;
    let mut i = cursor;

    while let Some(c) = src.char_at(i) {
        match state {
            ValueState::Start => {
                if c == '"' || c == '\'' {
                    state = ValueState::Quoted { quote: c };
                } else if terminators.contains(&c) {
                    break;
                } else if !c.is_whitespace() {
                    buf.push(c, i)?;
                    kind = if c.is_ascii_digit() {
                        ScalarKind::Integer
                    } else if c == '.' {
                        ScalarKind::Float
                    } else {
                        ScalarKind::String
                    };
                    state = ValueState::Bare;
                }
            }
            ValueState::Bare => {
                if terminators.contains(&c) || c.is_whitespace() {
                    break;
                }
                buf.push(c, i)?;
                kind = match (kind, c) {
                    (ScalarKind::String, _) => ScalarKind::String,
                    (kind, '0'..='9') => kind,
                    (ScalarKind::Integer, '.') => ScalarKind::Float,
                    _ => ScalarKind::String,
                };
            }
            ValueState::Quoted { quote } => {
                if c == '\\' {
                    let escaped = src
                        .char_at(i + 1)
                        .ok_or(ScanError::TruncatedEscape { position: i })?;
                    i += 1;
                    buf.push(escaped, i)?;
                } else if c == quote {
                    i += 1;
                    break;
                } else {
                    buf.push(c, i)?;
                }
            }
        }
        i += 1;
    }

    Ok((
        i,
        ValueToken {
            text: buf.into_string(),
            kind,
        },
    ))
}

/// Copies a CSS declaration value verbatim up to `;` or `}`.
///
/// Surrounding whitespace is trimmed; the terminator is left unconsumed.
pub fn scan_css_value(cursor: usize, src: &Source<'_>) -> ScanResult<(usize, String)> {
    let mut buf = TokenBuffer::for_source(src);
    let mut i = skip_spaces(cursor, src);
    while let Some(c) = src.char_at(i) {
        if c == ';' || c == '}' {
            break;
        }
        buf.push(c, i)?;
        i += 1;
    }
    buf.trim_end();
    Ok((i, buf.into_string()))
}

/// Scans a quoted string used as a map key.
///
/// Leading whitespace is skipped and an opening `"` or `'` is required. No
/// escape processing is done; the string ends at the matching quote.
pub fn scan_quoted_string(cursor: usize, src: &Source<'_>) -> ScanResult<(usize, String)> {
    let start = skip_spaces(cursor, src);
    let quote = match src.char_at(start) {
        Some(c @ ('"' | '\'')) => c,
        Some(c) => {
            return Err(ScanError::unexpected(
                format!("expected quoted string, found '{}'", c),
                start,
            ));
        }
        None => {
            return Err(ScanError::unexpected(
                "expected quoted string, found end of input",
                start,
            ));
        }
    };

    let mut buf = TokenBuffer::for_source(src);
    let mut i = start + 1;
    while let Some(c) = src.char_at(i) {
        if c == quote {
            return Ok((i + 1, buf.into_string()));
        }
        buf.push(c, i)?;
        i += 1;
    }
    Err(ScanError::unexpected("unterminated quoted string", start))
}

/// Scans an `@`-rule identifier up to its `{`, trimmed of whitespace.
///
/// The `@` is kept. The `{` is left unconsumed. Reaching `;` or the end of
/// the buffer first means the at-rule has no block.
pub fn scan_at_rule_ident(cursor: usize, src: &Source<'_>) -> ScanResult<(usize, String)> {
    let mut buf = TokenBuffer::for_source(src);
    let mut i = cursor;
    while let Some(c) = src.char_at(i) {
        match c {
            '{' => {
                buf.trim_end();
                return Ok((i, buf.into_string()));
            }
            ';' => {
                return Err(ScanError::unexpected("at-rule without a block", i));
            }
            _ => {
                buf.push(c, i)?;
                i += 1;
            }
        }
    }
    Err(ScanError::unexpected("at-rule without a block", i))
}
