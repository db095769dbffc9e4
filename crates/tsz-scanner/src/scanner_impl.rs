//! Scanner implementation.
//!
//! A forward-only lexer over UTF-8 source text. Positions are byte offsets.
//! The scanner has no parser feedback of its own: callers that know the
//! syntactic context call `re_scan_template_token`, `re_scan_slash_token` or
//! `re_scan_greater_token` to reinterpret the current token.

use std::sync::Arc;

use crate::char_codes::{
    is_digit, is_identifier_part, is_identifier_start, is_line_break, is_octal_digit,
    is_white_space_single_line,
};
use crate::syntax_kind::SyntaxKind;
use crate::text_tables::text_to_keyword;
use tsz_common::ScriptTarget;

/// Bit flags describing the current token.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenFlags {
    None = 0,
    PrecedingLineBreak = 1 << 0,
    Unterminated = 1 << 1,
    ExtendedUnicodeEscape = 1 << 2,
    Scientific = 1 << 3,
    Octal = 1 << 4,
    HexSpecifier = 1 << 5,
    BinarySpecifier = 1 << 6,
    OctalSpecifier = 1 << 7,
    ContainsSeparator = 1 << 8,
    UnicodeEscape = 1 << 9,
    ContainsInvalidSeparator = 1 << 10,
}

#[derive(Clone, Debug)]
pub struct ScannerState {
    text: Arc<str>,
    /// Current position (end of the current token)
    pos: usize,
    end: usize,
    /// Start of the current token including leading trivia
    full_start: usize,
    /// Start of the current token
    token_start: usize,
    token: SyntaxKind,
    token_value: String,
    token_flags: u32,
    skip_trivia: bool,
    language_version: ScriptTarget,
}

impl ScannerState {
    pub fn new(text: impl Into<Arc<str>>, skip_trivia: bool) -> Self {
        let text: Arc<str> = text.into();
        let end = text.len();
        ScannerState {
            text,
            pos: 0,
            end,
            full_start: 0,
            token_start: 0,
            token: SyntaxKind::Unknown,
            token_value: String::new(),
            token_flags: 0,
            skip_trivia,
            language_version: ScriptTarget::ESNext,
        }
    }

    pub fn with_language_version(mut self, version: ScriptTarget) -> Self {
        self.language_version = version;
        self
    }

    pub fn set_language_version(&mut self, version: ScriptTarget) {
        self.language_version = version;
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn get_text(&self) -> &str {
        &self.text
    }

    pub fn get_token(&self) -> SyntaxKind {
        self.token
    }

    /// Start of the current token, excluding leading trivia.
    pub fn get_token_pos(&self) -> u32 {
        self.token_start as u32
    }

    /// Start of the current token, including leading trivia.
    pub fn get_token_full_start(&self) -> u32 {
        self.full_start as u32
    }

    /// End of the current token (the scanner position).
    pub fn get_token_end(&self) -> u32 {
        self.pos as u32
    }

    pub fn get_text_pos(&self) -> u32 {
        self.pos as u32
    }

    pub fn get_token_value(&self) -> String {
        self.token_value.clone()
    }

    pub fn get_token_value_ref(&self) -> &str {
        &self.token_value
    }

    /// Raw source text of the current token.
    pub fn get_token_text_ref(&self) -> &str {
        self.text.get(self.token_start..self.pos).unwrap_or("")
    }

    pub fn get_token_flags(&self) -> u32 {
        self.token_flags
    }

    pub fn has_preceding_line_break(&self) -> bool {
        self.has_flag(TokenFlags::PrecedingLineBreak)
    }

    pub fn is_unterminated(&self) -> bool {
        self.has_flag(TokenFlags::Unterminated)
    }

    /// Move the scanner to `pos`, discarding the current token.
    pub fn set_text_pos(&mut self, pos: u32) {
        let pos = (pos as usize).min(self.end);
        self.pos = pos;
        self.full_start = pos;
        self.token_start = pos;
        self.token = SyntaxKind::Unknown;
        self.token_value.clear();
        self.token_flags = 0;
    }

    fn has_flag(&self, flag: TokenFlags) -> bool {
        self.token_flags & flag as u32 != 0
    }

    fn add_flag(&mut self, flag: TokenFlags) {
        self.token_flags |= flag as u32;
    }

    fn char_at(&self, pos: usize) -> Option<char> {
        self.text.get(pos..)?.chars().next()
    }

    fn byte_at(&self, pos: usize) -> u8 {
        self.text.as_bytes().get(pos).copied().unwrap_or(0)
    }

    fn finish(&mut self, kind: SyntaxKind, len: usize) -> SyntaxKind {
        self.pos += len;
        self.token = kind;
        kind
    }

    // =========================================================================
    // Main scan loop
    // =========================================================================

    pub fn scan(&mut self) -> SyntaxKind {
        self.full_start = self.pos;
        self.token_flags = 0;
        self.token_value.clear();

        loop {
            self.token_start = self.pos;
            let Some(ch) = self.char_at(self.pos) else {
                self.token = SyntaxKind::EndOfFileToken;
                return self.token;
            };

            if ch == '#' && self.pos == 0 && self.byte_at(1) == b'!' {
                self.pos = self.line_end(self.pos);
                if self.skip_trivia {
                    continue;
                }
                self.token = SyntaxKind::ShebangTrivia;
                return self.token;
            }

            match ch {
                '\n' | '\r' => {
                    self.add_flag(TokenFlags::PrecedingLineBreak);
                    let len = if ch == '\r' && self.byte_at(self.pos + 1) == b'\n' { 2 } else { 1 };
                    self.pos += len;
                    if self.skip_trivia {
                        continue;
                    }
                    self.token = SyntaxKind::NewLineTrivia;
                    return self.token;
                }
                '\u{2028}' | '\u{2029}' => {
                    self.add_flag(TokenFlags::PrecedingLineBreak);
                    self.pos += ch.len_utf8();
                    if self.skip_trivia {
                        continue;
                    }
                    self.token = SyntaxKind::NewLineTrivia;
                    return self.token;
                }
                c if is_white_space_single_line(c) => {
                    self.pos += c.len_utf8();
                    while let Some(next) = self.char_at(self.pos) {
                        if !is_white_space_single_line(next) {
                            break;
                        }
                        self.pos += next.len_utf8();
                    }
                    if self.skip_trivia {
                        continue;
                    }
                    self.token = SyntaxKind::WhitespaceTrivia;
                    return self.token;
                }
                '/' => {
                    let next = self.byte_at(self.pos + 1);
                    if next == b'/' {
                        self.pos = self.line_end(self.pos + 2);
                        if self.skip_trivia {
                            continue;
                        }
                        self.token = SyntaxKind::SingleLineCommentTrivia;
                        return self.token;
                    }
                    if next == b'*' {
                        self.scan_multi_line_comment();
                        if self.skip_trivia {
                            continue;
                        }
                        self.token = SyntaxKind::MultiLineCommentTrivia;
                        return self.token;
                    }
                    if next == b'=' {
                        return self.finish(SyntaxKind::SlashEqualsToken, 2);
                    }
                    return self.finish(SyntaxKind::SlashToken, 1);
                }
                _ => return self.scan_significant(ch),
            }
        }
    }

    fn scan_significant(&mut self, ch: char) -> SyntaxKind {
        let b1 = self.byte_at(self.pos + 1);
        let b2 = self.byte_at(self.pos + 2);
        match ch {
            '!' => {
                if b1 == b'=' {
                    if b2 == b'=' {
                        return self.finish(SyntaxKind::ExclamationEqualsEqualsToken, 3);
                    }
                    return self.finish(SyntaxKind::ExclamationEqualsToken, 2);
                }
                self.finish(SyntaxKind::ExclamationToken, 1)
            }
            '"' | '\'' => self.scan_string(ch),
            '`' => self.scan_template(true),
            '%' => {
                if b1 == b'=' {
                    return self.finish(SyntaxKind::PercentEqualsToken, 2);
                }
                self.finish(SyntaxKind::PercentToken, 1)
            }
            '&' => match (b1, b2) {
                (b'&', b'=') => self.finish(SyntaxKind::AmpersandAmpersandEqualsToken, 3),
                (b'&', _) => self.finish(SyntaxKind::AmpersandAmpersandToken, 2),
                (b'=', _) => self.finish(SyntaxKind::AmpersandEqualsToken, 2),
                _ => self.finish(SyntaxKind::AmpersandToken, 1),
            },
            '(' => self.finish(SyntaxKind::OpenParenToken, 1),
            ')' => self.finish(SyntaxKind::CloseParenToken, 1),
            '[' => self.finish(SyntaxKind::OpenBracketToken, 1),
            ']' => self.finish(SyntaxKind::CloseBracketToken, 1),
            '{' => self.finish(SyntaxKind::OpenBraceToken, 1),
            '}' => self.finish(SyntaxKind::CloseBraceToken, 1),
            ',' => self.finish(SyntaxKind::CommaToken, 1),
            ';' => self.finish(SyntaxKind::SemicolonToken, 1),
            ':' => self.finish(SyntaxKind::ColonToken, 1),
            '~' => self.finish(SyntaxKind::TildeToken, 1),
            '@' => self.finish(SyntaxKind::AtToken, 1),
            '*' => match (b1, b2) {
                (b'=', _) => self.finish(SyntaxKind::AsteriskEqualsToken, 2),
                (b'*', b'=') => self.finish(SyntaxKind::AsteriskAsteriskEqualsToken, 3),
                (b'*', _) => self.finish(SyntaxKind::AsteriskAsteriskToken, 2),
                _ => self.finish(SyntaxKind::AsteriskToken, 1),
            },
            '+' => match b1 {
                b'+' => self.finish(SyntaxKind::PlusPlusToken, 2),
                b'=' => self.finish(SyntaxKind::PlusEqualsToken, 2),
                _ => self.finish(SyntaxKind::PlusToken, 1),
            },
            '-' => match b1 {
                b'-' => self.finish(SyntaxKind::MinusMinusToken, 2),
                b'=' => self.finish(SyntaxKind::MinusEqualsToken, 2),
                _ => self.finish(SyntaxKind::MinusToken, 1),
            },
            '.' => {
                if b1.is_ascii_digit() {
                    return self.scan_number();
                }
                if b1 == b'.' && b2 == b'.' {
                    return self.finish(SyntaxKind::DotDotDotToken, 3);
                }
                self.finish(SyntaxKind::DotToken, 1)
            }
            '0'..='9' => self.scan_number(),
            '<' => match (b1, b2) {
                (b'<', b'=') => self.finish(SyntaxKind::LessThanLessThanEqualsToken, 3),
                (b'<', _) => self.finish(SyntaxKind::LessThanLessThanToken, 2),
                (b'=', _) => self.finish(SyntaxKind::LessThanEqualsToken, 2),
                _ => self.finish(SyntaxKind::LessThanToken, 1),
            },
            '=' => match (b1, b2) {
                (b'=', b'=') => self.finish(SyntaxKind::EqualsEqualsEqualsToken, 3),
                (b'=', _) => self.finish(SyntaxKind::EqualsEqualsToken, 2),
                (b'>', _) => self.finish(SyntaxKind::EqualsGreaterThanToken, 2),
                _ => self.finish(SyntaxKind::EqualsToken, 1),
            },
            // Always a lone `>`; compound forms come from `re_scan_greater_token`.
            '>' => self.finish(SyntaxKind::GreaterThanToken, 1),
            '?' => {
                if b1 == b'.' && !b2.is_ascii_digit() {
                    return self.finish(SyntaxKind::QuestionDotToken, 2);
                }
                if b1 == b'?' {
                    if b2 == b'=' {
                        return self.finish(SyntaxKind::QuestionQuestionEqualsToken, 3);
                    }
                    return self.finish(SyntaxKind::QuestionQuestionToken, 2);
                }
                self.finish(SyntaxKind::QuestionToken, 1)
            }
            '^' => {
                if b1 == b'=' {
                    return self.finish(SyntaxKind::CaretEqualsToken, 2);
                }
                self.finish(SyntaxKind::CaretToken, 1)
            }
            '|' => match (b1, b2) {
                (b'|', b'=') => self.finish(SyntaxKind::BarBarEqualsToken, 3),
                (b'|', _) => self.finish(SyntaxKind::BarBarToken, 2),
                (b'=', _) => self.finish(SyntaxKind::BarEqualsToken, 2),
                _ => self.finish(SyntaxKind::BarToken, 1),
            },
            '#' => {
                let after = self.char_at(self.pos + 1);
                if after.is_some_and(|c| is_identifier_start(c, self.language_version) || c == '\\') {
                    self.pos += 1;
                    self.scan_identifier_rest();
                    self.token_value.insert(0, '#');
                    self.token = SyntaxKind::PrivateIdentifier;
                    return self.token;
                }
                self.finish(SyntaxKind::HashToken, 1)
            }
            '\\' => {
                if b1 == b'u' && self.peek_unicode_escape(self.pos).is_some() {
                    return self.scan_identifier();
                }
                self.finish(SyntaxKind::Unknown, 1)
            }
            c if is_identifier_start(c, self.language_version) => self.scan_identifier(),
            c => self.finish(SyntaxKind::Unknown, c.len_utf8()),
        }
    }

    fn line_end(&self, from: usize) -> usize {
        let bytes = self.text.as_bytes();
        let rest = bytes.get(from..).unwrap_or(&[]);
        let mut end = from + memchr::memchr2(b'\n', b'\r', rest).unwrap_or(rest.len());
        // U+2028 / U+2029 also terminate a line.
        if let Some(slice) = self.text.get(from..end) {
            if let Some(idx) = slice.find(['\u{2028}', '\u{2029}']) {
                end = from + idx;
            }
        }
        end
    }

    fn scan_multi_line_comment(&mut self) {
        let bytes = self.text.as_bytes();
        let body_start = self.pos + 2;
        let rest = bytes.get(body_start..).unwrap_or(&[]);
        let close = memchr::memmem::find(rest, b"*/");
        let body_end = body_start + close.unwrap_or(rest.len());
        if let Some(body) = self.text.get(body_start..body_end) {
            if body.contains(is_line_break) {
                self.add_flag(TokenFlags::PrecedingLineBreak);
            }
        }
        match close {
            Some(_) => self.pos = body_end + 2,
            None => {
                self.pos = self.end;
                self.add_flag(TokenFlags::Unterminated);
            }
        }
    }

    // =========================================================================
    // Identifiers
    // =========================================================================

    fn scan_identifier(&mut self) -> SyntaxKind {
        self.scan_identifier_rest();
        self.token = if self.has_flag(TokenFlags::UnicodeEscape) {
            SyntaxKind::Identifier
        } else {
            text_to_keyword(&self.token_value).unwrap_or(SyntaxKind::Identifier)
        };
        self.token
    }

    fn scan_identifier_rest(&mut self) {
        let target = self.language_version;
        let mut first = true;
        while self.pos < self.end {
            if self.byte_at(self.pos) == b'\\' {
                match self.peek_unicode_escape(self.pos) {
                    Some((decoded, len))
                        if (first && is_identifier_start(decoded, target))
                            || (!first && is_identifier_part(decoded, target)) =>
                    {
                        self.token_value.push(decoded);
                        self.add_flag(TokenFlags::UnicodeEscape);
                        if self.byte_at(self.pos + 2) == b'{' {
                            self.add_flag(TokenFlags::ExtendedUnicodeEscape);
                        }
                        self.pos += len;
                        first = false;
                        continue;
                    }
                    _ => break,
                }
            }
            let Some(ch) = self.char_at(self.pos) else { break };
            let ok = if first {
                is_identifier_start(ch, target)
            } else {
                is_identifier_part(ch, target)
            };
            if !ok {
                break;
            }
            self.token_value.push(ch);
            self.pos += ch.len_utf8();
            first = false;
        }
    }

    /// Decode `\uXXXX` or `\u{X...}` at `pos`; returns the char and the
    /// escape's byte length.
    fn peek_unicode_escape(&self, pos: usize) -> Option<(char, usize)> {
        let text = self.text.get(pos..)?;
        let rest = text.strip_prefix("\\u")?;
        if let Some(braced) = rest.strip_prefix('{') {
            let close = braced.find('}')?;
            let digits = &braced[..close];
            if digits.is_empty() {
                return None;
            }
            let value = u32::from_str_radix(digits, 16).ok()?;
            return Some((char::from_u32(value)?, 2 + 1 + close + 1));
        }
        let digits = rest.get(..4)?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let value = u32::from_str_radix(digits, 16).ok()?;
        Some((char::from_u32(value)?, 6))
    }

    // =========================================================================
    // Numbers
    // =========================================================================

    fn scan_number(&mut self) -> SyntaxKind {
        let start = self.pos;
        let b0 = self.byte_at(start);
        let b1 = self.byte_at(start + 1).to_ascii_lowercase();

        if b0 == b'0' && matches!(b1, b'x' | b'b' | b'o') {
            let (flag, valid): (TokenFlags, fn(u8) -> bool) = match b1 {
                b'x' => (TokenFlags::HexSpecifier, is_hex_byte),
                b'b' => (TokenFlags::BinarySpecifier, is_binary_byte),
                _ => (TokenFlags::OctalSpecifier, is_octal_byte),
            };
            self.add_flag(flag);
            self.pos += 2;
            self.scan_digits(valid);
        } else if b0 == b'0' && is_octal_digit(char::from(self.byte_at(start + 1))) {
            // Legacy octal literal (`017`)
            self.add_flag(TokenFlags::Octal);
            self.pos += 1;
            self.scan_digits(is_decimal_byte);
        } else {
            self.scan_digits(is_decimal_byte);
            if self.byte_at(self.pos) == b'.' {
                self.pos += 1;
                self.scan_digits(is_decimal_byte);
            }
            if matches!(self.byte_at(self.pos), b'e' | b'E') {
                let sign = self.byte_at(self.pos + 1);
                let digit_at = if matches!(sign, b'+' | b'-') { self.pos + 2 } else { self.pos + 1 };
                if is_digit(char::from(self.byte_at(digit_at))) {
                    self.add_flag(TokenFlags::Scientific);
                    self.pos = digit_at;
                    self.scan_digits(is_decimal_byte);
                }
            }
        }

        let kind = if self.byte_at(self.pos) == b'n' {
            self.pos += 1;
            SyntaxKind::BigIntLiteral
        } else {
            SyntaxKind::NumericLiteral
        };
        self.token_value = self.text[start..self.pos].to_string();
        self.token = kind;
        kind
    }

    fn scan_digits(&mut self, valid: fn(u8) -> bool) {
        let mut prev_separator = false;
        let mut any = false;
        loop {
            let b = self.byte_at(self.pos);
            if b == b'_' {
                if !any || prev_separator {
                    self.add_flag(TokenFlags::ContainsInvalidSeparator);
                } else {
                    self.add_flag(TokenFlags::ContainsSeparator);
                }
                prev_separator = true;
                self.pos += 1;
                continue;
            }
            if !valid(b) {
                break;
            }
            prev_separator = false;
            any = true;
            self.pos += 1;
        }
        if prev_separator {
            self.add_flag(TokenFlags::ContainsInvalidSeparator);
        }
    }

    // =========================================================================
    // Strings and templates
    // =========================================================================

    fn scan_string(&mut self, quote: char) -> SyntaxKind {
        self.pos += 1;
        let mut value = String::new();
        loop {
            let Some(ch) = self.char_at(self.pos) else {
                self.add_flag(TokenFlags::Unterminated);
                break;
            };
            if ch == quote {
                self.pos += 1;
                break;
            }
            if ch == '\\' {
                self.scan_escape(&mut value);
                continue;
            }
            if ch == '\n' || ch == '\r' {
                self.add_flag(TokenFlags::Unterminated);
                break;
            }
            value.push(ch);
            self.pos += ch.len_utf8();
        }
        self.token_value = value;
        self.token = SyntaxKind::StringLiteral;
        self.token
    }

    /// Scan a template chunk. `from_backtick` selects the opening delimiter
    /// (`` ` `` versus `}`), which decides between the head/no-substitution
    /// kinds and the middle/tail kinds.
    fn scan_template(&mut self, from_backtick: bool) -> SyntaxKind {
        self.pos += 1;
        let mut cooked = String::new();
        let kind = loop {
            let Some(ch) = self.char_at(self.pos) else {
                self.add_flag(TokenFlags::Unterminated);
                break if from_backtick {
                    SyntaxKind::NoSubstitutionTemplateLiteral
                } else {
                    SyntaxKind::TemplateTail
                };
            };
            match ch {
                '`' => {
                    self.pos += 1;
                    break if from_backtick {
                        SyntaxKind::NoSubstitutionTemplateLiteral
                    } else {
                        SyntaxKind::TemplateTail
                    };
                }
                '$' if self.byte_at(self.pos + 1) == b'{' => {
                    self.pos += 2;
                    break if from_backtick {
                        SyntaxKind::TemplateHead
                    } else {
                        SyntaxKind::TemplateMiddle
                    };
                }
                '\\' => self.scan_escape(&mut cooked),
                '\r' => {
                    // CRLF and CR are normalized to LF in the cooked value.
                    self.pos += if self.byte_at(self.pos + 1) == b'\n' { 2 } else { 1 };
                    cooked.push('\n');
                }
                _ => {
                    cooked.push(ch);
                    self.pos += ch.len_utf8();
                }
            }
        };
        self.token_value = cooked;
        self.token = kind;
        kind
    }

    fn scan_escape(&mut self, out: &mut String) {
        // Skip the backslash.
        self.pos += 1;
        let Some(ch) = self.char_at(self.pos) else {
            return;
        };
        self.pos += ch.len_utf8();
        match ch {
            '0' if !is_digit(char::from(self.byte_at(self.pos))) => out.push('\0'),
            'b' => out.push('\u{0008}'),
            't' => out.push('\t'),
            'n' => out.push('\n'),
            'v' => out.push('\u{000B}'),
            'f' => out.push('\u{000C}'),
            'r' => out.push('\r'),
            'x' => {
                let digits = self.text.get(self.pos..self.pos + 2).unwrap_or("");
                match u32::from_str_radix(digits, 16).ok().and_then(char::from_u32) {
                    Some(decoded) if digits.len() == 2 => {
                        out.push(decoded);
                        self.pos += 2;
                    }
                    _ => out.push('x'),
                }
            }
            'u' => match self.peek_unicode_escape(self.pos - 2) {
                Some((decoded, len)) => {
                    out.push(decoded);
                    self.pos = self.pos - 2 + len;
                }
                None => out.push('u'),
            },
            // Line continuation
            '\r' => {
                if self.byte_at(self.pos) == b'\n' {
                    self.pos += 1;
                }
            }
            '\n' | '\u{2028}' | '\u{2029}' => {}
            other => out.push(other),
        }
    }

    // =========================================================================
    // Context-sensitive re-scans
    // =========================================================================

    /// Re-scan a `}` as the start of a template middle or tail.
    pub fn re_scan_template_token(&mut self) -> SyntaxKind {
        self.pos = self.token_start;
        self.token_value.clear();
        self.scan_template(false)
    }

    /// Re-scan a `/` or `/=` as the start of a regular expression literal.
    pub fn re_scan_slash_token(&mut self) -> SyntaxKind {
        if !matches!(self.token, SyntaxKind::SlashToken | SyntaxKind::SlashEqualsToken) {
            return self.token;
        }
        let mut p = self.token_start + 1;
        let mut in_escape = false;
        let mut in_class = false;
        loop {
            let Some(ch) = self.char_at(p) else {
                self.add_flag(TokenFlags::Unterminated);
                break;
            };
            if is_line_break(ch) {
                self.add_flag(TokenFlags::Unterminated);
                break;
            }
            p += ch.len_utf8();
            if in_escape {
                in_escape = false;
            } else if ch == '/' && !in_class {
                break;
            } else if ch == '[' {
                in_class = true;
            } else if ch == '\\' {
                in_escape = true;
            } else if ch == ']' {
                in_class = false;
            }
        }
        if !self.is_unterminated() {
            while let Some(ch) = self.char_at(p) {
                if !is_identifier_part(ch, self.language_version) {
                    break;
                }
                p += ch.len_utf8();
            }
        }
        self.pos = p;
        self.token_value = self.text[self.token_start..p].to_string();
        self.token = SyntaxKind::RegularExpressionLiteral;
        self.token
    }

    /// Re-scan a `>` as the longest of `>>`, `>>>`, `>=`, `>>=`, `>>>=`.
    pub fn re_scan_greater_token(&mut self) -> SyntaxKind {
        if self.token != SyntaxKind::GreaterThanToken {
            return self.token;
        }
        let kind = match (
            self.byte_at(self.pos),
            self.byte_at(self.pos + 1),
            self.byte_at(self.pos + 2),
        ) {
            (b'>', b'>', b'=') => Some((SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken, 3)),
            (b'>', b'>', _) => Some((SyntaxKind::GreaterThanGreaterThanGreaterThanToken, 2)),
            (b'>', b'=', _) => Some((SyntaxKind::GreaterThanGreaterThanEqualsToken, 2)),
            (b'>', _, _) => Some((SyntaxKind::GreaterThanGreaterThanToken, 1)),
            (b'=', _, _) => Some((SyntaxKind::GreaterThanEqualsToken, 1)),
            _ => None,
        };
        if let Some((kind, extra)) = kind {
            self.pos += extra;
            self.token = kind;
        }
        self.token
    }
}

fn is_decimal_byte(b: u8) -> bool {
    b.is_ascii_digit()
}

fn is_hex_byte(b: u8) -> bool {
    b.is_ascii_hexdigit()
}

fn is_binary_byte(b: u8) -> bool {
    matches!(b, b'0' | b'1')
}

fn is_octal_byte(b: u8) -> bool {
    matches!(b, b'0'..=b'7')
}
