//! List and map literal parser
//!
//! A value is dispatched on its first non-space code point: `[` starts a
//! list, `{` starts a map, anything else is scanned as a typed scalar.
//! Lists and maps recurse through [`parse_value`].

use crate::cursor::{Source, skip_spaces};
use crate::error::{ScanError, ScanResult};
use crate::token::{LIST_TERMINATORS, MAP_TERMINATORS, scan_quoted_string, scan_value};
use crate::value::{Value, ValueList, ValueMap, build_scalar};

/// Parses one value: a nested list, a nested map, or a typed scalar.
///
/// `terminators` ends a bare scalar. At the end of the buffer the value is an
/// empty String.
pub fn parse_value(
    cursor: usize,
    src: &Source<'_>,
    terminators: &[char],
) -> ScanResult<(usize, Value)> {
    parse_value_at_depth(cursor, src, terminators, 0)
}

/// Parses a `[ ... ]` list literal starting at or after `cursor`
pub fn parse_list(cursor: usize, src: &Source<'_>) -> ScanResult<(usize, ValueList)> {
    parse_list_at_depth(cursor, src, 0)
}

/// Parses a `{ "key": value, ... }` map literal starting at or after `cursor`.
///
/// Keys must be quoted. Duplicate keys keep the last value.
pub fn parse_map(cursor: usize, src: &Source<'_>) -> ScanResult<(usize, ValueMap)> {
    parse_map_at_depth(cursor, src, 0)
}

fn parse_value_at_depth(
    cursor: usize,
    src: &Source<'_>,
    terminators: &[char],
    depth: usize,
) -> ScanResult<(usize, Value)> {
    let i = skip_spaces(cursor, src);
    match src.char_at(i) {
        Some('[') => {
            let (i, list) = parse_list_at_depth(i, src, depth + 1)?;
            Ok((i, Value::List(Box::new(list))))
        }
        Some('{') => {
            let (i, map) = parse_map_at_depth(i, src, depth + 1)?;
            Ok((i, Value::Map(map)))
        }
        Some(_) => {
            let (i, token) = scan_value(i, src, terminators)?;
            Ok((i, build_scalar(&token.text, token.kind)?))
        }
        None => Ok((i, Value::empty())),
    }
}

fn check_depth(src: &Source<'_>, depth: usize, position: usize) -> ScanResult<()> {
    let limit = src.config().max_depth;
    if depth > limit {
        return Err(ScanError::NestingTooDeep { limit, position });
    }
    Ok(())
}

/// Finds `open` at or after `cursor` and returns the offset just past it
fn skip_past_open(cursor: usize, src: &Source<'_>, open: char) -> ScanResult<usize> {
    let mut i = cursor;
    while let Some(c) = src.char_at(i) {
        if c == open {
            return Ok(i + 1);
        }
        i += 1;
    }
    Err(ScanError::unexpected(format!("expected '{}'", open), cursor))
}

fn parse_list_at_depth(
    cursor: usize,
    src: &Source<'_>,
    depth: usize,
) -> ScanResult<(usize, ValueList)> {
    check_depth(src, depth, cursor)?;
    let start = cursor;
    let mut i = skip_past_open(cursor, src, '[')?;
    let mut list = ValueList::new();

    loop {
        i = skip_spaces(i, src);
        match src.char_at(i) {
            None => return Err(ScanError::unexpected("unterminated list", start)),
            Some(']') => return Ok((i + 1, list)),
            Some(_) => {}
        }

        let (next, element) = parse_value_at_depth(i, src, LIST_TERMINATORS, depth)?;
        list.push(element);
        i = skip_spaces(next, src);

        // A missing comma between elements is tolerated
        if src.is_at(i, ',') {
            i += 1;
        }
    }
}

fn parse_map_at_depth(
    cursor: usize,
    src: &Source<'_>,
    depth: usize,
) -> ScanResult<(usize, ValueMap)> {
    check_depth(src, depth, cursor)?;
    let start = cursor;
    let mut i = skip_past_open(cursor, src, '{')?;
    let mut map = ValueMap::new();

    loop {
        i = skip_spaces(i, src);
        match src.char_at(i) {
            None => return Err(ScanError::unexpected("unterminated map", start)),
            Some('}') => return Ok((i + 1, map)),
            Some(_) => {}
        }

        let (next, key) = scan_quoted_string(i, src)?;
        i = skip_spaces(next, src);
        if !src.is_at(i, ':') {
            return Err(ScanError::unexpected(
                format!("expected ':' after key \"{}\"", key),
                i,
            ));
        }

        let (next, value) = parse_value_at_depth(i + 1, src, MAP_TERMINATORS, depth)?;
        map.insert(key, value);
        i = skip_spaces(next, src);

        match src.char_at(i) {
            Some(',') => i += 1,
            Some('}') => return Ok((i + 1, map)),
            Some(c) => {
                return Err(ScanError::unexpected(
                    format!("expected ',' or '}}' in map, found '{}'", c),
                    i,
                ));
            }
            None => return Err(ScanError::unexpected("unterminated map", start)),
        }
    }
}
