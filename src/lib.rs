//! # Parse Utils
//!
//! A family of small, position-in/position-out scanners over a buffer of
//! Unicode code points.
//!
//! ## Overview
//!
//! Every scanner takes a cursor (an index into the buffer) and a [`Source`]
//! view, and returns the new cursor together with what it recognized. Callers
//! chain scanners by feeding the returned cursor into the next call, which
//! makes it easy to build ad-hoc readers for small text formats.
//!
//! ## Key Features
//!
//! - **Identifiers and values**: identifiers, quoted or bare values with
//!   lexical typing (String, Integer, Float)
//! - **Literals**: nested `[...]` lists and `{"key": value}` maps
//! - **Key/value pairs**: `key=value` lines and tag attributes
//! - **Stylesheets**: CSS rules, `@media`-style blocks and whole sheets
//! - **Markup**: `<tag attr=...>` begin/end/self-closing tags and
//!   `[section]` headers
//! - **CSV**: one record per line with a configurable separator
//! - **Bounded tokens**: a token that outgrows [`ScanConfig::token_capacity`]
//!   is an error, never silently truncated
//!
//! ## Basic Usage
//!
//! ```rust
//! use parse_utils::{SourceText, Value, parse_list, parse_line_key_value};
//!
//! let text = SourceText::from("name = demo\nsizes = [1, 2.5, \"big\"]");
//! let src = text.source();
//!
//! let (cursor, pair) = parse_line_key_value(0, &src)?;
//! assert_eq!(pair.key, "name");
//! assert_eq!(pair.value, "demo");
//!
//! let (_, sizes) = parse_list(cursor, &src)?;
//! assert_eq!(sizes[0], Value::Integer(1));
//! assert_eq!(sizes[1], Value::Float(2.5));
//! assert_eq!(sizes[2], Value::from("big"));
//! # Ok::<(), parse_utils::ScanError>(())
//! ```
//!
//! ## Stylesheets
//!
//! ```rust
//! use parse_utils::{SourceText, parse_css_blocks};
//!
//! let text = SourceText::from("a { color: red; }\n@media print { a { color: black; } }");
//! let (_, sheet) = parse_css_blocks(0, &text.source())?;
//!
//! assert_eq!(sheet["a"].as_rule().unwrap()["color"], "red");
//! assert!(sheet["@media print"].as_media().is_some());
//! # Ok::<(), parse_utils::ScanError>(())
//! ```
//!
//! ## Error Handling
//!
//! Scanners return [`ScanResult`]. Errors carry the cursor offset they were
//! detected at:
//!
//! ```rust
//! use parse_utils::{ScanConfig, ScanError, SourceText, scan_ident};
//!
//! let text = SourceText::from("averyverylongidentifier");
//! let src = text.source_with_config(ScanConfig::new().with_token_capacity(8));
//!
//! match scan_ident(0, &src) {
//!     Err(ScanError::BufferOverflow { capacity, position }) => {
//!         assert_eq!((capacity, position), (8, 8));
//!     }
//!     other => panic!("unexpected result: {:?}", other),
//! }
//! ```

pub mod attribute;
pub mod classify;
pub mod css;
pub mod csv;
pub mod cursor;
pub mod error;
pub mod section;
pub mod structure;
pub mod tag;
pub mod token;
pub mod value;

#[cfg(test)]
mod error_tests;

// Re-export main types for convenience
pub use attribute::{AttributeMap, KeyValue, parse_key_value, parse_line_key_value};
pub use classify::Alphabet;
pub use css::{
    CssBlock, CssEntry, CssRules, CssSheet, Declarations, MediaBlock, parse_css_block,
    parse_css_blocks, parse_css_media_query_block,
};
pub use csv::{DEFAULT_SEPARATOR, parse_csv_line, parse_csv_records};
pub use cursor::{ScanConfig, Source, SourceText, skip_at_newline, skip_spaces};
pub use error::{ScanError, ScanResult};
pub use section::{parse_bracket_section, parse_section};
pub use structure::{parse_list, parse_map, parse_value};
pub use tag::{Tag, TagKind, parse_tag};
pub use token::{
    TokenBuffer, ValueToken, scan_at_rule_ident, scan_css_ident, scan_css_key, scan_css_value,
    scan_ident, scan_quoted_string, scan_value,
};
pub use value::{ScalarKind, Value, ValueList, ValueMap, build_scalar};
