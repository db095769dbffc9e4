//! ESTree token records.

use crate::location::LocationResolver;
use crate::node_utils::split_regex;
use crate::token_walker::{RawToken, TriviaScan};
use serde::Serialize;
use tsz_common::SourceLocation;
use tsz_scanner::SyntaxKind;
use tsz_syntax::{NodeArena, NodeIndex};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum TokenType {
    Boolean,
    Null,
    Keyword,
    Identifier,
    Punctuator,
    Numeric,
    String,
    RegularExpression,
    Template,
    JSXIdentifier,
    JSXText,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegexInfo {
    pub pattern: String,
    pub flags: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EsToken {
    #[serde(rename = "type")]
    pub token_type: TokenType,
    pub value: String,
    pub range: [u32; 2],
    pub loc: SourceLocation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regex: Option<RegexInfo>,
}

/// Convert the walker's significant tokens into ESTree token records.
pub fn convert_tokens(
    scan: &TriviaScan,
    arena: &NodeArena,
    root: NodeIndex,
    resolver: &LocationResolver<'_>,
) -> Vec<EsToken> {
    scan.tokens
        .iter()
        .map(|&token| convert_token(token, arena, root, resolver))
        .collect()
}

fn convert_token(token: RawToken, arena: &NodeArena, root: NodeIndex, resolver: &LocationResolver<'_>) -> EsToken {
    let value = resolver.slice(token.start, token.end).to_string();
    let token_type = token_type(token, arena, root);
    let regex = (token_type == TokenType::RegularExpression).then(|| {
        let (pattern, flags) = split_regex(&value);
        RegexInfo { pattern, flags }
    });
    EsToken {
        token_type,
        value,
        range: [token.start, token.end],
        loc: resolver.location(token.start, token.end),
        regex,
    }
}

fn token_type(token: RawToken, arena: &NodeArena, root: NodeIndex) -> TokenType {
    match token.kind {
        SyntaxKind::TrueKeyword | SyntaxKind::FalseKeyword => TokenType::Boolean,
        SyntaxKind::NullKeyword => TokenType::Null,
        SyntaxKind::NumericLiteral | SyntaxKind::BigIntLiteral => TokenType::Numeric,
        SyntaxKind::RegularExpressionLiteral => TokenType::RegularExpression,
        SyntaxKind::JsxText | SyntaxKind::JsxTextAllWhiteSpaces => TokenType::JSXText,
        kind if kind.is_template_token() => TokenType::Template,
        SyntaxKind::StringLiteral => {
            if parent_kind(token, arena, root) == Some(SyntaxKind::JsxAttribute) {
                TokenType::JSXText
            } else {
                TokenType::String
            }
        }
        SyntaxKind::Identifier | SyntaxKind::PrivateIdentifier => {
            if is_jsx_name(token, arena, root) {
                TokenType::JSXIdentifier
            } else {
                TokenType::Identifier
            }
        }
        kind if kind.is_reserved_word() => TokenType::Keyword,
        kind if kind.is_contextual_keyword() => TokenType::Identifier,
        _ => TokenType::Punctuator,
    }
}

/// Parent of the innermost node that exactly covers `token`.
fn parent_kind(token: RawToken, arena: &NodeArena, root: NodeIndex) -> Option<SyntaxKind> {
    let node = arena.node_containing(root, token.start, token.end)?;
    arena.kind(arena.parent(node))
}

/// Identifiers naming a JSX tag or attribute, including every segment of a
/// dotted tag name.
fn is_jsx_name(token: RawToken, arena: &NodeArena, root: NodeIndex) -> bool {
    let Some(mut current) = arena.node_containing(root, token.start, token.end) else {
        return false;
    };
    loop {
        let parent = arena.parent(current);
        match arena.kind(parent) {
            Some(
                SyntaxKind::JsxOpeningElement
                | SyntaxKind::JsxSelfClosingElement
                | SyntaxKind::JsxClosingElement
                | SyntaxKind::JsxAttribute,
            ) => return true,
            Some(SyntaxKind::PropertyAccessExpression) => current = parent,
            _ => return false,
        }
    }
}
