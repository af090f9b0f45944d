//! Per-grammar character classification
//!
//! Each grammar (identifier, CSS selector, CSS declaration key) is an
//! [`Alphabet`]: letters are always allowed, digits are allowed after the
//! first code point, and a small set of punctuation is allowed at the head
//! and in the body.

/// Describes which code points may start and continue a token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    /// Punctuation accepted as the first code point
    head: &'static [char],
    /// Punctuation accepted after the first code point
    body: &'static [char],
}

impl Alphabet {
    /// Identifiers: tag names, attribute and key/value keys
    pub const IDENT: Alphabet = Alphabet {
        head: &['_', '-'],
        body: &['_', '-'],
    };

    /// CSS selectors such as `div > p.note`, `#main *` or `h1, h2`
    pub const CSS_SELECTOR: Alphabet = Alphabet {
        head: &[':', '>', '*', '.', '#', '_', '-', '['],
        body: &[
            ' ', ':', '>', '*', '.', '#', '_', '-', ',', '+', '~', '[', ']', '=', '(', ')', '"',
            '\'',
        ],
    };

    /// CSS declaration keys such as `margin-top`
    pub const CSS_KEY: Alphabet = Alphabet {
        head: &['_', '-'],
        body: &['_', '-'],
    };

    /// Returns true if `c` may start a token of this alphabet
    #[inline(always)]
    pub fn is_head(&self, c: char) -> bool {
        c.is_alphabetic() || self.head.contains(&c)
    }

    /// Returns true if `c` may continue a token of this alphabet
    #[inline(always)]
    pub fn is_body(&self, c: char) -> bool {
        c.is_alphanumeric() || self.body.contains(&c)
    }
}
