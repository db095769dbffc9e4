use super::*;
use tsz_common::ScriptTarget;

fn has_flag(flags: u32, flag: TokenFlags) -> bool {
    (flags & flag as u32) != 0
}

fn kinds(source: &str) -> Vec<SyntaxKind> {
    let mut scanner = ScannerState::new(source.to_string(), true);
    let mut out = Vec::new();
    loop {
        let kind = scanner.scan();
        if kind == SyntaxKind::EndOfFileToken {
            return out;
        }
        out.push(kind);
    }
}

#[test]
fn test_scan_empty() {
    let mut scanner = ScannerState::new(String::new(), true);
    assert_eq!(scanner.scan(), SyntaxKind::EndOfFileToken);
}

#[test]
fn test_scan_whitespace() {
    let mut scanner = ScannerState::new("   ".to_string(), false);
    assert_eq!(scanner.scan(), SyntaxKind::WhitespaceTrivia);
    assert_eq!(scanner.scan(), SyntaxKind::EndOfFileToken);
}

#[test]
fn test_scan_whitespace_skip() {
    let mut scanner = ScannerState::new("   foo".to_string(), true);
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.get_token_value(), "foo");
    assert_eq!(scanner.get_token_pos(), 3);
    assert_eq!(scanner.get_token_full_start(), 0);
}

#[test]
fn test_scan_newline() {
    let mut scanner = ScannerState::new("\n".to_string(), false);
    assert_eq!(scanner.scan(), SyntaxKind::NewLineTrivia);
    assert!(scanner.has_preceding_line_break());
}

#[test]
fn test_scan_punctuation() {
    assert_eq!(
        kinds("{}()[];,"),
        vec![
            SyntaxKind::OpenBraceToken,
            SyntaxKind::CloseBraceToken,
            SyntaxKind::OpenParenToken,
            SyntaxKind::CloseParenToken,
            SyntaxKind::OpenBracketToken,
            SyntaxKind::CloseBracketToken,
            SyntaxKind::SemicolonToken,
            SyntaxKind::CommaToken,
        ]
    );
}

#[test]
fn test_scan_compound_operators() {
    assert_eq!(
        kinds("=== !== == != => && || ?? ??= **= ... ?."),
        vec![
            SyntaxKind::EqualsEqualsEqualsToken,
            SyntaxKind::ExclamationEqualsEqualsToken,
            SyntaxKind::EqualsEqualsToken,
            SyntaxKind::ExclamationEqualsToken,
            SyntaxKind::EqualsGreaterThanToken,
            SyntaxKind::AmpersandAmpersandToken,
            SyntaxKind::BarBarToken,
            SyntaxKind::QuestionQuestionToken,
            SyntaxKind::QuestionQuestionEqualsToken,
            SyntaxKind::AsteriskAsteriskEqualsToken,
            SyntaxKind::DotDotDotToken,
            SyntaxKind::QuestionDotToken,
        ]
    );
}

#[test]
fn test_question_dot_before_digit_is_conditional() {
    assert_eq!(
        kinds("a?.5:b"),
        vec![
            SyntaxKind::Identifier,
            SyntaxKind::QuestionToken,
            SyntaxKind::NumericLiteral,
            SyntaxKind::ColonToken,
            SyntaxKind::Identifier,
        ]
    );
}

#[test]
fn test_greater_than_is_always_single() {
    assert_eq!(
        kinds("a >>= b"),
        vec![
            SyntaxKind::Identifier,
            SyntaxKind::GreaterThanToken,
            SyntaxKind::GreaterThanToken,
            SyntaxKind::EqualsToken,
            SyntaxKind::Identifier,
        ]
    );
}

#[test]
fn test_re_scan_greater_token() {
    let mut scanner = ScannerState::new("a >>>= b".to_string(), true);
    scanner.scan();
    assert_eq!(scanner.scan(), SyntaxKind::GreaterThanToken);
    assert_eq!(
        scanner.re_scan_greater_token(),
        SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken
    );
    assert_eq!(scanner.get_token_end(), 6);
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
}

#[test]
fn test_scan_keywords() {
    assert_eq!(
        kinds("const of type foo"),
        vec![
            SyntaxKind::ConstKeyword,
            SyntaxKind::OfKeyword,
            SyntaxKind::TypeKeyword,
            SyntaxKind::Identifier,
        ]
    );
}

#[test]
fn test_scan_string() {
    let mut scanner = ScannerState::new(r#""a\tbA\x42""#.to_string(), true);
    assert_eq!(scanner.scan(), SyntaxKind::StringLiteral);
    assert_eq!(scanner.get_token_value(), "a\tbAB");
    assert!(!scanner.is_unterminated());
}

#[test]
fn test_scan_unterminated_string_stops_at_newline() {
    let mut scanner = ScannerState::new("'abc\nx".to_string(), true);
    assert_eq!(scanner.scan(), SyntaxKind::StringLiteral);
    assert!(scanner.is_unterminated());
    assert_eq!(scanner.get_token_end(), 4);
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
}

#[test]
fn test_scan_decimal_number() {
    let mut scanner = ScannerState::new("3.14".to_string(), true);
    assert_eq!(scanner.scan(), SyntaxKind::NumericLiteral);
    assert_eq!(scanner.get_token_value(), "3.14");
}

#[test]
fn test_scan_hex_number() {
    let mut scanner = ScannerState::new("0xFF".to_string(), true);
    assert_eq!(scanner.scan(), SyntaxKind::NumericLiteral);
    assert_eq!(scanner.get_token_value(), "0xFF");
    assert!(has_flag(scanner.get_token_flags(), TokenFlags::HexSpecifier));
}

#[test]
fn test_scan_exponent() {
    let mut scanner = ScannerState::new("1e-3".to_string(), true);
    assert_eq!(scanner.scan(), SyntaxKind::NumericLiteral);
    assert_eq!(scanner.get_token_value(), "1e-3");
    assert!(has_flag(scanner.get_token_flags(), TokenFlags::Scientific));
}

#[test]
fn test_scan_bigint() {
    let mut scanner = ScannerState::new("123n".to_string(), true);
    assert_eq!(scanner.scan(), SyntaxKind::BigIntLiteral);
    assert_eq!(scanner.get_token_value(), "123n");
}

#[test]
fn test_scan_numeric_separators_valid() {
    let cases = ["1_000", "0xFF_FF", "0b1010_0101", "0o12_34", "1_2.3_4", "1_000n"];

    for source in cases {
        let mut scanner = ScannerState::new(source.to_string(), true);
        let token = scanner.scan();
        assert!(matches!(
            token,
            SyntaxKind::NumericLiteral | SyntaxKind::BigIntLiteral
        ));
        assert_eq!(scanner.get_token_end() as usize, source.len(), "{source}");
        let flags = scanner.get_token_flags();
        assert!(has_flag(flags, TokenFlags::ContainsSeparator), "{source}");
        assert!(!has_flag(flags, TokenFlags::ContainsInvalidSeparator), "{source}");
    }
}

#[test]
fn test_scan_numeric_separator_trailing_is_invalid() {
    let mut scanner = ScannerState::new("1_".to_string(), true);
    assert_eq!(scanner.scan(), SyntaxKind::NumericLiteral);
    assert!(has_flag(
        scanner.get_token_flags(),
        TokenFlags::ContainsInvalidSeparator
    ));
}

#[test]
fn test_scan_comments_as_trivia() {
    let mut scanner = ScannerState::new("a // line\n/* block */b".to_string(), false);
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.scan(), SyntaxKind::WhitespaceTrivia);
    assert_eq!(scanner.scan(), SyntaxKind::SingleLineCommentTrivia);
    assert_eq!(scanner.get_token_text_ref(), "// line");
    assert_eq!(scanner.scan(), SyntaxKind::NewLineTrivia);
    assert_eq!(scanner.scan(), SyntaxKind::MultiLineCommentTrivia);
    assert_eq!(scanner.get_token_text_ref(), "/* block */");
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
}

#[test]
fn test_unterminated_block_comment_runs_to_end() {
    let mut scanner = ScannerState::new("x /* open".to_string(), false);
    scanner.scan();
    scanner.scan();
    assert_eq!(scanner.scan(), SyntaxKind::MultiLineCommentTrivia);
    assert!(scanner.is_unterminated());
    assert_eq!(scanner.get_token_end(), 9);
}

#[test]
fn test_shebang_is_trivia() {
    let mut scanner = ScannerState::new("#!/usr/bin/env node\nx".to_string(), false);
    assert_eq!(scanner.scan(), SyntaxKind::ShebangTrivia);
    assert_eq!(scanner.get_token_end(), 19);
    assert_eq!(scanner.scan(), SyntaxKind::NewLineTrivia);
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
}

#[test]
fn test_scan_template_head_and_rescan_tail() {
    let mut scanner = ScannerState::new("`a${b}c`".to_string(), true);
    assert_eq!(scanner.scan(), SyntaxKind::TemplateHead);
    assert_eq!(scanner.get_token_value(), "a");
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.scan(), SyntaxKind::CloseBraceToken);
    assert_eq!(scanner.re_scan_template_token(), SyntaxKind::TemplateTail);
    assert_eq!(scanner.get_token_value(), "c");
    assert_eq!(scanner.get_token_pos(), 5);
    assert_eq!(scanner.get_token_end(), 8);
    assert_eq!(scanner.scan(), SyntaxKind::EndOfFileToken);
}

#[test]
fn test_rescan_template_middle() {
    let mut scanner = ScannerState::new("`${a}-${b}`".to_string(), true);
    assert_eq!(scanner.scan(), SyntaxKind::TemplateHead);
    scanner.scan();
    scanner.scan();
    assert_eq!(scanner.re_scan_template_token(), SyntaxKind::TemplateMiddle);
    assert_eq!(scanner.get_token_text_ref(), "}-${");
}

#[test]
fn test_template_cooked_normalizes_crlf() {
    let mut scanner = ScannerState::new("`a\r\nb`".to_string(), true);
    assert_eq!(scanner.scan(), SyntaxKind::NoSubstitutionTemplateLiteral);
    assert_eq!(scanner.get_token_value(), "a\nb");
}

#[test]
fn test_re_scan_slash_token() {
    let mut scanner = ScannerState::new("/[/]+\\//gi.x".to_string(), true);
    assert_eq!(scanner.scan(), SyntaxKind::SlashToken);
    assert_eq!(scanner.re_scan_slash_token(), SyntaxKind::RegularExpressionLiteral);
    assert_eq!(scanner.get_token_value(), "/[/]+\\//gi");
    assert_eq!(scanner.scan(), SyntaxKind::DotToken);
}

#[test]
fn test_re_scan_slash_equals_token() {
    let mut scanner = ScannerState::new("/=a/".to_string(), true);
    assert_eq!(scanner.scan(), SyntaxKind::SlashEqualsToken);
    assert_eq!(scanner.re_scan_slash_token(), SyntaxKind::RegularExpressionLiteral);
    assert_eq!(scanner.get_token_end(), 4);
}

#[test]
fn test_unterminated_regex_stops_at_line_end() {
    let mut scanner = ScannerState::new("/abc\nd".to_string(), true);
    scanner.scan();
    scanner.re_scan_slash_token();
    assert!(scanner.is_unterminated());
    assert_eq!(scanner.get_token_end(), 4);
}

#[test]
fn test_private_identifier() {
    let mut scanner = ScannerState::new("#secret #".to_string(), true);
    assert_eq!(scanner.scan(), SyntaxKind::PrivateIdentifier);
    assert_eq!(scanner.get_token_value(), "#secret");
    assert_eq!(scanner.scan(), SyntaxKind::HashToken);
}

#[test]
fn test_get_token_value_ref_matches_allocated() {
    let mut scanner = ScannerState::new("identifier".to_string(), true);
    scanner.scan();
    let allocated = scanner.get_token_value();
    let zero_copy = scanner.get_token_value_ref();

    assert_eq!(allocated, zero_copy);
    assert_eq!(zero_copy, "identifier");
}

#[test]
fn test_unicode_escape_mid_identifier() {
    // C2 should scan as "C2"
    let mut scanner = ScannerState::new("C\\u0032".to_string(), true);
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.get_token_value_ref(), "C2");
    assert!(has_flag(
        scanner.get_token_flags(),
        TokenFlags::UnicodeEscape
    ));
}

#[test]
fn test_unicode_escape_mid_identifier_extended() {
    let mut scanner = ScannerState::new("x\\u{61}".to_string(), true);
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.get_token_value_ref(), "xa");
    assert!(has_flag(
        scanner.get_token_flags(),
        TokenFlags::ExtendedUnicodeEscape
    ));
}

#[test]
fn test_unicode_escape_not_identifier_part() {
    // + is '+', which stops the identifier.
    let mut scanner = ScannerState::new("foo\\u002B".to_string(), true);
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.get_token_value_ref(), "foo");
    assert_eq!(scanner.get_token_end(), 3);
}

#[test]
fn test_es3_rejects_unicode_identifiers() {
    let mut scanner =
        ScannerState::new("é".to_string(), true).with_language_version(ScriptTarget::ES3);
    assert_eq!(scanner.scan(), SyntaxKind::Unknown);

    let mut scanner = ScannerState::new("é".to_string(), true);
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
}

#[test]
fn test_set_text_pos_restarts() {
    let mut scanner = ScannerState::new("a b".to_string(), true);
    scanner.scan();
    scanner.scan();
    scanner.set_text_pos(0);
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.get_token_value(), "a");
}
