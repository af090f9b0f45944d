//! Bracketed section header scanner (`[name]`)

use crate::cursor::Source;
use crate::error::ScanResult;
use crate::token::TokenBuffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SectionState {
    SeekBegin,
    BeforeName,
    Name,
    AfterName,
}

/// Parses a section header delimited by `begin_mark` and `end_mark`.
///
/// Text before `begin_mark` is skipped and whitespace before the name is
/// ignored. The name ends at whitespace or `end_mark`; anything between the
/// name and `end_mark` is discarded. The cursor is returned just past
/// `end_mark`, or at the end of the buffer when `end_mark` is missing.
pub fn parse_section(
    cursor: usize,
    src: &Source<'_>,
    begin_mark: char,
    end_mark: char,
) -> ScanResult<(usize, String)> {
    let mut name = TokenBuffer::for_source(src);
    let mut state = SectionState::SeekBegin;
    let mut i = cursor;

    while let Some(c) = src.char_at(i) {
        i += 1;
        state = match state {
            SectionState::SeekBegin if c == begin_mark => SectionState::BeforeName,
            SectionState::SeekBegin => SectionState::SeekBegin,
            _ if c == end_mark => break,
            SectionState::BeforeName | SectionState::Name if !c.is_whitespace() => {
                name.push(c, i - 1)?;
                SectionState::Name
            }
            SectionState::BeforeName => SectionState::BeforeName,
            SectionState::Name | SectionState::AfterName => SectionState::AfterName,
        };
    }

    Ok((i, name.into_string()))
}

/// Parses a `[name]` section header
pub fn parse_bracket_section(cursor: usize, src: &Source<'_>) -> ScanResult<(usize, String)> {
    parse_section(cursor, src, '[', ']')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{ScanConfig, SourceText};
    use crate::error::ScanError;

    fn section(input: &str) -> (usize, String) {
        let text = SourceText::from(input);
        parse_bracket_section(0, &text.source()).unwrap()
    }

    #[test]
    fn test_parse_section() {
        assert_eq!(section("[general]\nkey=1"), (9, "general".to_string()));
        assert_eq!(section("  [ spaced ]"), (12, "spaced".to_string()));
    }

    #[test]
    fn test_extra_tokens_are_discarded() {
        assert_eq!(
            section("[server \"alpha\" extra]x"),
            (22, "server".to_string())
        );
    }

    #[test]
    fn test_empty_section() {
        assert_eq!(section("[]"), (2, String::new()));
        assert_eq!(section("[   ]"), (5, String::new()));
    }

    #[test]
    fn test_missing_end_mark_runs_to_end() {
        assert_eq!(section("[open"), (5, "open".to_string()));
        assert_eq!(section("no header"), (9, String::new()));
    }

    #[test]
    fn test_custom_marks() {
        let text = SourceText::from("<<main>>");
        let (i, name) = parse_section(0, &text.source(), '<', '>').unwrap();
        // The second '<' is the first code point of the name
        assert_eq!(name, "<main");
        assert_eq!(i, 7);
    }

    #[test]
    fn test_name_overflow() {
        let text = SourceText::from("[abcdefgh]");
        let src = text.source_with_config(ScanConfig::new().with_token_capacity(3));
        let err = parse_bracket_section(0, &src).unwrap_err();
        assert_eq!(
            err,
            ScanError::BufferOverflow {
                capacity: 3,
                position: 4
            }
        );
    }
}
