//! Character classification.

use tsz_common::ScriptTarget;

pub fn is_line_break(ch: char) -> bool {
    matches!(ch, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Whitespace that does not end a line.
pub fn is_white_space_single_line(ch: char) -> bool {
    matches!(
        ch,
        ' ' | '\t'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{00A0}'
            | '\u{0085}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

pub fn is_white_space_like(ch: char) -> bool {
    is_white_space_single_line(ch) || is_line_break(ch)
}

pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

pub fn is_octal_digit(ch: char) -> bool {
    matches!(ch, '0'..='7')
}

pub fn is_identifier_start(ch: char, target: ScriptTarget) -> bool {
    if ch.is_ascii() {
        return ch.is_ascii_alphabetic() || ch == '$' || ch == '_';
    }
    target.supports_unicode_identifiers() && ch.is_alphabetic()
}

pub fn is_identifier_part(ch: char, target: ScriptTarget) -> bool {
    if ch.is_ascii() {
        return ch.is_ascii_alphanumeric() || ch == '$' || ch == '_';
    }
    target.supports_unicode_identifiers()
        && (ch.is_alphanumeric() || matches!(ch, '\u{200C}' | '\u{200D}'))
}

/// Whether `text` is a complete identifier name.
pub fn is_identifier_text(text: &str, target: ScriptTarget) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if is_identifier_start(first, target) => {
            chars.all(|ch| is_identifier_part(ch, target))
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn es3_identifiers_are_ascii_only() {
        assert!(is_identifier_start('é', ScriptTarget::ES5));
        assert!(!is_identifier_start('é', ScriptTarget::ES3));
        assert!(is_identifier_text("$_a1", ScriptTarget::ES3));
        assert!(!is_identifier_text("1a", ScriptTarget::ESNext));
    }

    #[test]
    fn line_breaks_include_separators() {
        assert!(is_line_break('\u{2028}'));
        assert!(!is_white_space_single_line('\n'));
        assert!(is_white_space_single_line('\u{FEFF}'));
    }
}
