//! Text buffer view, scanner configuration and cursor movement
//!
//! Scanners never own the text. They read from a [`Source`], an immutable
//! view over a materialized sequence of code points, and thread a plain
//! `usize` cursor in and out of every call.

/// Configuration options shared by every scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig {
    /// Maximum number of code points a single token may hold
    pub token_capacity: usize,
    /// Maximum nesting depth of list/map literals
    pub max_depth: usize,
}

impl ScanConfig {
    /// Creates a configuration with default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the token capacity
    pub fn with_token_capacity(mut self, token_capacity: usize) -> Self {
        self.token_capacity = token_capacity;
        self
    }

    /// Sets the maximum literal nesting depth
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            token_capacity: 1024,
            max_depth: 128,
        }
    }
}

/// Read-only view of a text buffer and its length
#[derive(Debug, Clone, Copy)]
pub struct Source<'a> {
    chars: &'a [char],
    len: usize,
    config: ScanConfig,
}

impl<'a> Source<'a> {
    /// Creates a view over the first `len` code points of `chars`.
    ///
    /// A length larger than the slice is clamped to the slice length.
    pub fn new(chars: &'a [char], len: usize) -> Self {
        Self {
            chars,
            len: len.min(chars.len()),
            config: ScanConfig::default(),
        }
    }

    /// Creates a view over the whole slice
    pub fn from_chars(chars: &'a [char]) -> Self {
        Self::new(chars, chars.len())
    }

    /// Replaces the scanner configuration
    pub fn with_config(mut self, config: ScanConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the code point at `index`, or `None` at or past the length
    #[inline(always)]
    pub fn char_at(&self, index: usize) -> Option<char> {
        if index < self.len {
            Some(self.chars[index])
        } else {
            None
        }
    }

    /// Returns true if `index` holds exactly `expected`
    #[inline(always)]
    pub fn is_at(&self, index: usize, expected: char) -> bool {
        self.char_at(index) == Some(expected)
    }

    /// Returns true if the text at `index` starts with `pattern`
    pub fn starts_with_at(&self, index: usize, pattern: &str) -> bool {
        pattern
            .chars()
            .enumerate()
            .all(|(offset, expected)| self.char_at(index + offset) == Some(expected))
    }

    /// Returns the scanned length of the buffer
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the buffer has no code points to scan
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the active configuration
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }
}

/// Owned, materialized text buffer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceText {
    chars: Vec<char>,
}

impl SourceText {
    /// Materializes `text` into a sequence of code points
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
        }
    }

    /// Returns a view over the whole text with default configuration
    pub fn source(&self) -> Source<'_> {
        Source::from_chars(&self.chars)
    }

    /// Returns a view over the whole text with the given configuration
    pub fn source_with_config(&self, config: ScanConfig) -> Source<'_> {
        Source::from_chars(&self.chars).with_config(config)
    }

    /// Returns the code points
    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }

    /// Returns the number of code points
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns true if the text is empty
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl From<&str> for SourceText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for SourceText {
    fn from(text: String) -> Self {
        Self::new(&text)
    }
}

/// Advances past a run of Unicode whitespace.
///
/// Returns `cursor` unchanged when it is not on whitespace or is already at
/// or past the end of the buffer.
pub fn skip_spaces(cursor: usize, src: &Source<'_>) -> usize {
    let mut i = cursor;
    while let Some(c) = src.char_at(i) {
        if !c.is_whitespace() {
            break;
        }
        i += 1;
    }
    i
}

/// Advances past the next line ending (`\r\n` or `\n`), or to the end.
pub fn skip_at_newline(cursor: usize, src: &Source<'_>) -> usize {
    let mut i = cursor;
    while let Some(c) = src.char_at(i) {
        if c == '\r' && src.is_at(i + 1, '\n') {
            return i + 2;
        }
        if c == '\n' {
            return i + 1;
        }
        i += 1;
    }
    i
}

/// Returns the length of a `\r\n` or `\n` line ending at `index`, if any
pub(crate) fn line_ending_at(src: &Source<'_>, index: usize) -> Option<usize> {
    match src.char_at(index) {
        Some('\r') if src.is_at(index + 1, '\n') => Some(2),
        Some('\n') => Some(1),
        _ => None,
    }
}

/// Skips a `/* ... */` comment starting at `cursor`.
///
/// Returns `None` when no comment starts there. An unterminated comment runs
/// to the end of the buffer.
pub(crate) fn skip_block_comment(cursor: usize, src: &Source<'_>) -> Option<usize> {
    if !src.starts_with_at(cursor, "/*") {
        return None;
    }
    let mut i = cursor + 2;
    while i < src.len() {
        if src.starts_with_at(i, "*/") {
            return Some(i + 2);
        }
        i += 1;
    }
    Some(src.len())
}
