//! Assemble concrete trees over a source string.
//!
//! Front-ends that already know every span use [`NodeArena`] directly; the
//! builder is for fixtures and small tools. It keeps a cursor into the
//! source: leaves are located by searching forward from the cursor, and a
//! composite node built with [`TreeBuilder::node`] ends at the cursor, so
//! leaves must be added in source order and a composite right after its last
//! token has been consumed.

use crate::base::{NodeIndex, NodeList};
use crate::node::*;
use std::sync::Arc;
use tsz_common::{Diagnostic, ScriptTarget};
use tsz_scanner::{SyntaxKind, token_to_string};

pub struct TreeBuilder {
    arena: NodeArena,
    text: Arc<str>,
    cursor: u32,
    file_name: String,
    language_version: ScriptTarget,
    diagnostics: Vec<Diagnostic>,
}

impl TreeBuilder {
    pub fn new(text: &str) -> TreeBuilder {
        TreeBuilder {
            arena: NodeArena::new(),
            text: Arc::from(text),
            cursor: 0,
            file_name: "input.ts".to_string(),
            language_version: ScriptTarget::ESNext,
            diagnostics: Vec::new(),
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn with_language_version(mut self, target: ScriptTarget) -> Self {
        self.language_version = target;
        self
    }

    /// Record a parse diagnostic on the resulting source file.
    pub fn with_diagnostic(mut self, diagnostic: Diagnostic) -> Self {
        self.diagnostics.push(diagnostic);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn arena(&self) -> &NodeArena {
        &self.arena
    }

    pub fn cursor(&self) -> u32 {
        self.cursor
    }

    pub fn pos_of(&self, index: NodeIndex) -> u32 {
        self.arena.get(index).map_or(self.cursor, |node| node.pos)
    }

    pub fn end_of(&self, index: NodeIndex) -> u32 {
        self.arena.get(index).map_or(self.cursor, |node| node.end)
    }

    /// Consume the next occurrence of `needle` and return its start.
    ///
    /// Word-like needles only match at identifier boundaries.
    ///
    /// # Panics
    /// If `needle` does not occur after the cursor.
    pub fn tok(&mut self, needle: &str) -> u32 {
        let (start, end) = self.locate(needle);
        self.cursor = end;
        start
    }

    /// Consume `;` if it is the next non-whitespace character.
    pub fn semicolon(&mut self) {
        let rest = &self.text[self.cursor as usize..];
        let trimmed = rest.trim_start();
        if trimmed.starts_with(';') {
            self.cursor += (rest.len() - trimmed.len()) as u32 + 1;
        }
    }

    fn locate(&self, needle: &str) -> (u32, u32) {
        let word = needle.chars().all(|ch| ch.is_alphanumeric() || ch == '_' || ch == '$');
        let mut from = self.cursor as usize;
        while let Some(found) = self.text[from..].find(needle) {
            let start = from + found;
            let end = start + needle.len();
            if !word || self.is_word_boundary(start, end) {
                return (start as u32, end as u32);
            }
            from = start + needle.len().max(1);
        }
        panic!("`{needle}` not found after offset {} in {:?}", self.cursor, &*self.text);
    }

    fn is_word_boundary(&self, start: usize, end: usize) -> bool {
        let is_part = |ch: char| ch.is_alphanumeric() || ch == '_' || ch == '$';
        let before = self.text[..start].chars().next_back().is_none_or(|ch| !is_part(ch));
        let after = self.text[end..].chars().next().is_none_or(|ch| !is_part(ch));
        before && after
    }

    // -------------------------------------------------------------------------
    // Leaves
    // -------------------------------------------------------------------------

    /// A data-less node spelled by `kind` (keyword, modifier, `this`, ...).
    ///
    /// # Panics
    /// If `kind` has no fixed spelling.
    pub fn token(&mut self, kind: SyntaxKind) -> NodeIndex {
        let text = token_to_string(kind)
            .unwrap_or_else(|| panic!("{kind:?} has no fixed spelling"));
        let pos = self.tok(text);
        self.arena.add_token(kind, pos, self.cursor)
    }

    pub fn ident(&mut self, name: &str) -> NodeIndex {
        let pos = self.tok(name);
        self.arena.add_identifier(
            SyntaxKind::Identifier,
            pos,
            self.cursor,
            IdentifierData {
                escaped_text: name.to_string(),
            },
        )
    }

    /// `#name`
    pub fn private_ident(&mut self, name: &str) -> NodeIndex {
        let pos = self.tok(name);
        self.arena.add_identifier(
            SyntaxKind::PrivateIdentifier,
            pos,
            self.cursor,
            IdentifierData {
                escaped_text: name.to_string(),
            },
        )
    }

    /// A literal token whose cooked text equals its spelling.
    pub fn literal(&mut self, kind: SyntaxKind, raw: &str) -> NodeIndex {
        self.literal_with_text(kind, raw, raw.to_string())
    }

    pub fn num(&mut self, raw: &str) -> NodeIndex {
        self.literal(SyntaxKind::NumericLiteral, raw)
    }

    /// `raw` includes the trailing `n`.
    pub fn bigint(&mut self, raw: &str) -> NodeIndex {
        self.literal(SyntaxKind::BigIntLiteral, raw)
    }

    pub fn regex(&mut self, raw: &str) -> NodeIndex {
        self.literal(SyntaxKind::RegularExpressionLiteral, raw)
    }

    /// `raw` includes the quotes.
    pub fn string(&mut self, raw: &str) -> NodeIndex {
        let inner = raw.get(1..raw.len().saturating_sub(1)).unwrap_or_default();
        self.literal_with_text(SyntaxKind::StringLiteral, raw, unescape(inner))
    }

    /// Template pieces include their delimiters: `` `a${ ``, `` }b${ ``, `` }c` ``.
    pub fn template_part(&mut self, kind: SyntaxKind, raw: &str) -> NodeIndex {
        let (open, close) = match kind {
            SyntaxKind::TemplateHead | SyntaxKind::TemplateMiddle => (1, 2),
            _ => (1, 1),
        };
        let inner = raw.get(open..raw.len().saturating_sub(close)).unwrap_or_default();
        self.literal_with_text(kind, raw, unescape(&inner.replace("\r\n", "\n")))
    }

    pub fn jsx_text(&mut self, raw: &str) -> NodeIndex {
        self.literal(SyntaxKind::JsxText, raw)
    }

    fn literal_with_text(&mut self, kind: SyntaxKind, raw: &str, text: String) -> NodeIndex {
        let pos = self.tok(raw);
        self.arena.add_literal(
            kind,
            pos,
            self.cursor,
            LiteralData {
                text,
                is_unterminated: false,
            },
        )
    }

    // -------------------------------------------------------------------------
    // Composites
    // -------------------------------------------------------------------------

    /// A node spanning `pos..cursor`.
    pub fn node<T: PoolData>(&mut self, kind: SyntaxKind, pos: u32, data: T) -> NodeIndex {
        self.arena.add_node(kind, pos, self.cursor, data)
    }

    /// A node with an explicit span.
    pub fn node_at<T: PoolData>(&mut self, kind: SyntaxKind, pos: u32, end: u32, data: T) -> NodeIndex {
        self.arena.add_node(kind, pos, end, data)
    }

    /// A data-less node spanning `pos..cursor` (`EmptyStatement`, `OmittedExpression`, ...).
    pub fn bare(&mut self, kind: SyntaxKind, pos: u32) -> NodeIndex {
        self.arena.add_token(kind, pos, self.cursor)
    }

    pub fn set_flags(&mut self, index: NodeIndex, flags: u16) {
        self.arena.set_flags(index, flags);
    }

    /// A list spanning its first to last element.
    pub fn list(&self, nodes: Vec<NodeIndex>) -> NodeList {
        let pos = nodes.first().map_or(self.cursor, |&n| self.pos_of(n));
        let end = nodes.last().map_or(self.cursor, |&n| self.end_of(n));
        NodeList::new(nodes, pos, end)
    }

    pub fn binary(&mut self, left: NodeIndex, operator_token: SyntaxKind, right: NodeIndex) -> NodeIndex {
        let pos = self.pos_of(left);
        let end = self.end_of(right);
        self.arena.add_binary_expr(
            SyntaxKind::BinaryExpression,
            pos,
            end,
            BinaryExprData {
                left,
                operator_token,
                right,
            },
        )
    }

    /// `expression;` (the semicolon is optional).
    pub fn expression_statement(&mut self, expression: NodeIndex) -> NodeIndex {
        let pos = self.pos_of(expression);
        self.semicolon();
        self.node(
            SyntaxKind::ExpressionStatement,
            pos,
            ExprStatementData { expression },
        )
    }

    pub fn call(&mut self, callee: NodeIndex, arguments: Vec<NodeIndex>) -> NodeIndex {
        let pos = self.pos_of(callee);
        self.tok(")");
        let arguments = self.list(arguments);
        self.node(
            SyntaxKind::CallExpression,
            pos,
            CallExprData {
                expression: callee,
                question_dot_token: false,
                type_arguments: None,
                arguments: Some(arguments),
            },
        )
    }

    pub fn property_access(&mut self, object: NodeIndex, name: NodeIndex) -> NodeIndex {
        let pos = self.pos_of(object);
        let end = self.end_of(name);
        self.arena.add_access_expr(
            SyntaxKind::PropertyAccessExpression,
            pos,
            end,
            AccessExprData {
                expression: object,
                question_dot_token: false,
                name_or_argument: name,
            },
        )
    }

    pub fn block(&mut self, pos: u32, statements: Vec<NodeIndex>) -> NodeIndex {
        self.tok("}");
        let statements = self.list(statements);
        self.node(
            SyntaxKind::Block,
            pos,
            BlockData {
                statements,
                multi_line: false,
            },
        )
    }

    /// `var`/`let`/`const` statement over already-built declarations.
    pub fn variable_statement(
        &mut self,
        pos: u32,
        flags: u16,
        declarations: Vec<NodeIndex>,
    ) -> NodeIndex {
        let declarations = self.list(declarations);
        let list = self.node(
            SyntaxKind::VariableDeclarationList,
            pos,
            VariableListData { declarations },
        );
        self.arena.set_flags(list, flags);
        self.semicolon();
        self.node(
            SyntaxKind::VariableStatement,
            pos,
            VariableStatementData {
                modifiers: None,
                declaration_list: list,
            },
        )
    }

    pub fn variable_declaration(
        &mut self,
        name: NodeIndex,
        type_annotation: NodeIndex,
        initializer: NodeIndex,
    ) -> NodeIndex {
        let pos = self.pos_of(name);
        self.node(
            SyntaxKind::VariableDeclaration,
            pos,
            VariableDeclarationData {
                name,
                exclamation_token: false,
                type_annotation,
                initializer,
            },
        )
    }

    /// Close the tree: add the end-of-file token and the `SourceFile` root.
    pub fn finish(mut self, statements: Vec<NodeIndex>) -> (NodeArena, NodeIndex) {
        let len = self.text.len() as u32;
        let eof = self.arena.add_token(SyntaxKind::EndOfFileToken, len, len);
        let external_module_indicator = statements
            .iter()
            .any(|&statement| is_external_module_indicator(&self.arena, statement));
        let statements = NodeList::new(statements, 0, len);
        let root = self.arena.add_source_file(
            SyntaxKind::SourceFile,
            0,
            len,
            SourceFileData {
                statements,
                end_of_file_token: eof,
                file_name: self.file_name,
                text: self.text,
                language_version: self.language_version,
                external_module_indicator,
                parse_diagnostics: self.diagnostics,
            },
        );
        (self.arena, root)
    }
}

fn is_external_module_indicator(arena: &NodeArena, statement: NodeIndex) -> bool {
    let Some(node) = arena.get(statement) else {
        return false;
    };
    match node.kind {
        SyntaxKind::ImportDeclaration
        | SyntaxKind::ExportDeclaration
        | SyntaxKind::ExportAssignment => true,
        SyntaxKind::ImportEqualsDeclaration => arena
            .get_import_equals(node)
            .and_then(|data| arena.kind(data.module_reference))
            == Some(SyntaxKind::ExternalModuleReference),
        _ => arena.has_modifier(arena.modifiers_of(statement), SyntaxKind::ExportKeyword),
    }
}

/// Cook the common escapes of a string or template body.
fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}
