//! Delimiter-separated record scanner
//!
//! Each field is scanned as a typed scalar (quoted fields are always
//! strings). A record ends at `\r\n` or `\n`.

use crate::cursor::{Source, line_ending_at};
use crate::error::ScanResult;
use crate::token::scan_value;
use crate::value::{Value, build_scalar};

/// Default field separator
pub const DEFAULT_SEPARATOR: char = ',';

/// Parses one record, returning the cursor just past its line ending.
///
/// A separator directly followed by the line ending yields a trailing
/// empty field. Text after a field and before the next separator is
/// skipped.
pub fn parse_csv_line(
    cursor: usize,
    src: &Source<'_>,
    separator: char,
) -> ScanResult<(usize, Vec<Value>)> {
    let terminators = [separator, '\n', '\r'];
    let mut fields = Vec::new();
    let mut after_separator = false;
    let mut i = cursor;

    while i < src.len() {
        if let Some(width) = line_ending_at(src, i) {
            i += width;
            break;
        }

        let (next, token) = scan_value(i, src, &terminators)?;
        fields.push(build_scalar(&token.text, token.kind)?);
        i = next;
        after_separator = false;

        while let Some(c) = src.char_at(i) {
            if c == separator {
                i += 1;
                after_separator = true;
                break;
            }
            if c == '\n' || (c == '\r' && line_ending_at(src, i).is_some()) {
                break;
            }
            i += 1;
        }
    }

    if after_separator {
        fields.push(Value::empty());
    }
    Ok((i, fields))
}

/// Parses records until the end of the buffer
pub fn parse_csv_records(
    cursor: usize,
    src: &Source<'_>,
    separator: char,
) -> ScanResult<(usize, Vec<Vec<Value>>)> {
    let mut records = Vec::new();
    let mut i = cursor;
    while i < src.len() {
        let (next, fields) = parse_csv_line(i, src, separator)?;
        records.push(fields);
        i = next;
    }
    Ok((i, records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::SourceText;
    use crate::error::ScanError;

    fn line(input: &str, separator: char) -> (usize, Vec<Value>) {
        let text = SourceText::from(input);
        parse_csv_line(0, &text.source(), separator).unwrap()
    }

    #[test]
    fn test_parse_csv_line() {
        let (i, fields) = line("1,2.5,hello\nnext", DEFAULT_SEPARATOR);
        assert_eq!(i, 12);
        assert_eq!(
            fields,
            vec![Value::Integer(1), Value::Float(2.5), Value::from("hello")]
        );
    }

    #[test]
    fn test_crlf_line_ending() {
        let (i, fields) = line("a,b\r\nc", DEFAULT_SEPARATOR);
        assert_eq!(i, 5);
        assert_eq!(fields, vec![Value::from("a"), Value::from("b")]);
    }

    #[test]
    fn test_quoted_fields() {
        let (_, fields) = line("\"a,b\",'42',\"say \\\"hi\\\"\"\n", DEFAULT_SEPARATOR);
        assert_eq!(
            fields,
            vec![
                Value::from("a,b"),
                Value::from("42"),
                Value::from("say \"hi\"")
            ]
        );
    }

    #[test]
    fn test_empty_fields() {
        let (_, fields) = line(",x,,\n", DEFAULT_SEPARATOR);
        assert_eq!(
            fields,
            vec![
                Value::empty(),
                Value::from("x"),
                Value::empty(),
                Value::empty()
            ]
        );
    }

    #[test]
    fn test_custom_separator() {
        let (_, fields) = line("1;a,b;3.0\n", ';');
        assert_eq!(
            fields,
            vec![Value::Integer(1), Value::from("a,b"), Value::Float(3.0)]
        );

        let (_, fields) = line("x\t7\n", '\t');
        assert_eq!(fields, vec![Value::from("x"), Value::Integer(7)]);
    }

    #[test]
    fn test_text_after_field_is_skipped() {
        let (_, fields) = line("12 junk,b\n", DEFAULT_SEPARATOR);
        assert_eq!(fields, vec![Value::Integer(12), Value::from("b")]);
    }

    #[test]
    fn test_last_line_without_newline() {
        let (i, fields) = line("1,2", DEFAULT_SEPARATOR);
        assert_eq!(i, 3);
        assert_eq!(fields, vec![Value::Integer(1), Value::Integer(2)]);
    }

    #[test]
    fn test_blank_line() {
        let (i, fields) = line("\nabc", DEFAULT_SEPARATOR);
        assert_eq!(i, 1);
        assert!(fields.is_empty());
    }

    #[test]
    fn test_invalid_float_field() {
        let text = SourceText::from("1,.,3\n");
        let err = parse_csv_line(0, &text.source(), DEFAULT_SEPARATOR).unwrap_err();
        assert!(matches!(err, ScanError::InvalidNumericLiteral { .. }));
    }

    #[test]
    fn test_parse_csv_records() {
        let text = SourceText::from("id,name\r\n1,alpha\r\n2,beta\r\n");
        let (i, records) = parse_csv_records(0, &text.source(), DEFAULT_SEPARATOR).unwrap();
        assert_eq!(i, text.len());
        assert_eq!(records.len(), 3);
        assert_eq!(records[2], vec![Value::Integer(2), Value::from("beta")]);
    }
}
