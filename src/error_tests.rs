//! Tests for error reporting across the scanners
//!
//! Covers offset accuracy, message wording, recoverability and the fix
//! suggestions attached to each error kind.

#[cfg(test)]
mod tests {
    use crate::cursor::{ScanConfig, SourceText};
    use crate::error::ScanError;
    use crate::value::ScalarKind;
    use crate::{
        parse_css_block, parse_csv_line, parse_list, parse_map, parse_tag, scan_ident, scan_value,
    };

    #[test]
    fn test_error_messages() {
        let err = ScanError::BufferOverflow {
            capacity: 16,
            position: 40,
        };
        assert_eq!(
            err.to_string(),
            "Token exceeds capacity of 16 code points at offset 40"
        );

        let err = ScanError::TruncatedEscape { position: 3 };
        assert_eq!(err.to_string(), "Truncated escape sequence at offset 3");

        let err = ScanError::InvalidNumericLiteral {
            literal: ".".to_string(),
            kind: ScalarKind::Float,
            message: "invalid float literal".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid float literal '.': invalid float literal"
        );

        let err = ScanError::unexpected("unterminated list", 7);
        assert_eq!(
            err.to_string(),
            "Unexpected structure at offset 7: unterminated list"
        );

        let err = ScanError::NestingTooDeep {
            limit: 2,
            position: 5,
        };
        assert_eq!(
            err.to_string(),
            "Maximum nesting depth of 2 exceeded at offset 5"
        );
    }

    #[test]
    fn test_overflow_position_points_at_rejected_code_point() {
        let text = SourceText::from("  ident_that_is_long");
        let src = text.source_with_config(ScanConfig::new().with_token_capacity(5));
        let err = scan_ident(2, &src).unwrap_err();
        assert_eq!(err.position(), Some(7));
    }

    #[test]
    fn test_truncated_escape_position_is_backslash() {
        let text = SourceText::from("x = 'ab\\");
        let err = scan_value(4, &text.source(), &[]).unwrap_err();
        assert_eq!(err, ScanError::TruncatedEscape { position: 7 });
    }

    #[test]
    fn test_structure_errors_report_offsets() {
        let text = SourceText::from("  [1, 2");
        let err = parse_list(0, &text.source()).unwrap_err();
        assert_eq!(err.position(), Some(0));

        let text = SourceText::from("{\"a\" 1}");
        let err = parse_map(0, &text.source()).unwrap_err();
        assert_eq!(err.position(), Some(5));

        let text = SourceText::from("p { color red; }");
        let err = parse_css_block(0, &text.source()).unwrap_err();
        assert!(matches!(err, ScanError::UnexpectedStructure { position: 10, .. }));
    }

    #[test]
    fn test_nesting_limit() {
        let text = SourceText::from("[[[1]]]");
        // The outermost list sits at depth 0
        let src = text.source_with_config(ScanConfig::new().with_max_depth(1));
        let err = parse_list(0, &src).unwrap_err();
        assert!(matches!(err, ScanError::NestingTooDeep { limit: 1, .. }));

        let src = text.source_with_config(ScanConfig::new().with_max_depth(2));
        assert!(parse_list(0, &src).is_ok());
    }

    #[test]
    fn test_numeric_errors_have_no_position() {
        let text = SourceText::from("1,.\n");
        let err = parse_csv_line(0, &text.source(), ',').unwrap_err();
        assert_eq!(err.position(), None);
        match err {
            ScanError::InvalidNumericLiteral { literal, kind, .. } => {
                assert_eq!(literal, ".");
                assert_eq!(kind, ScalarKind::Float);
            }
            other => panic!("Expected InvalidNumericLiteral, got {:?}", other),
        }
    }

    #[test]
    fn test_recoverability() {
        assert!(ScanError::unexpected("x", 0).is_recoverable());
        assert!(
            !ScanError::BufferOverflow {
                capacity: 1,
                position: 1
            }
            .is_recoverable()
        );
        assert!(!ScanError::TruncatedEscape { position: 0 }.is_recoverable());
        assert!(
            !ScanError::NestingTooDeep {
                limit: 1,
                position: 0
            }
            .is_recoverable()
        );
    }

    #[test]
    fn test_suggest_fix() {
        let err = ScanError::BufferOverflow {
            capacity: 8,
            position: 8,
        };
        let suggestions = err.suggest_fix();
        assert!(suggestions.iter().any(|s| s.contains("token_capacity")));
        assert!(suggestions.iter().any(|s| s.contains('8')));

        let err = ScanError::InvalidNumericLiteral {
            literal: "1.".to_string(),
            kind: ScalarKind::Float,
            message: String::new(),
        };
        assert_eq!(err.suggest_fix(), vec!["Quote '1.' to keep it as a string"]);

        assert!(ScanError::unexpected("x", 0).suggest_fix().is_empty());
    }

    #[test]
    fn test_unterminated_tag_reports_tag_start() {
        let text = SourceText::from("abc <div id=1");
        let err = parse_tag(0, &text.source()).unwrap_err();
        assert_eq!(err.position(), Some(4));
    }
}
