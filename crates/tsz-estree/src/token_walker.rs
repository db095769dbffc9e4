//! Tree-aware token and comment recovery.
//!
//! Comments are not in the concrete tree, so the source is re-scanned from
//! the start. The scanner alone cannot tell a template continuation from a
//! `}`, a regular expression from a division, or `>>` from two closing type
//! brackets; whenever the scanned token is ambiguous the walker looks up the
//! innermost concrete node covering it and re-scans under the grammar that
//! node implies.

use smallvec::SmallVec;
use tracing::trace;
use tsz_common::{CommentKind, ScriptTarget};
use tsz_scanner::{ScannerState, SyntaxKind};
use tsz_syntax::{Node, NodeArena, NodeIndex};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawToken {
    pub kind: SyntaxKind,
    pub start: u32,
    pub end: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawComment {
    pub kind: CommentKind,
    pub start: u32,
    pub end: u32,
}

/// Significant tokens and comments of one source file, in source order.
#[derive(Clone, Debug, Default)]
pub struct TriviaScan {
    pub tokens: Vec<RawToken>,
    pub comments: Vec<RawComment>,
}

enum WalkState {
    Scanning,
    /// The last token may mean something else depending on the tree.
    Lookup(RawToken),
}

/// Walk the whole source text of `root`.
pub fn walk_source(arena: &NodeArena, root: NodeIndex, text: &str, target: ScriptTarget) -> TriviaScan {
    Walker::new(arena, root, text, target).run()
}

struct Walker<'a> {
    arena: &'a NodeArena,
    root: NodeIndex,
    scanner: ScannerState,
    /// Sorted, non-overlapping JSX text spans.
    jsx_text: Vec<(u32, u32)>,
    out: TriviaScan,
}

impl<'a> Walker<'a> {
    fn new(arena: &'a NodeArena, root: NodeIndex, text: &str, target: ScriptTarget) -> Self {
        let mut jsx_text: Vec<(u32, u32)> = arena
            .nodes
            .iter()
            .filter(|node| node.kind == SyntaxKind::JsxText && node.end > node.pos)
            .map(|node| (node.pos, node.end))
            .collect();
        jsx_text.sort_unstable();
        Walker {
            arena,
            root,
            scanner: ScannerState::new(text, false).with_language_version(target),
            jsx_text,
            out: TriviaScan::default(),
        }
    }

    fn run(mut self) -> TriviaScan {
        let mut state = WalkState::Scanning;
        loop {
            match state {
                WalkState::Scanning => {
                    let pos = self.scanner.get_text_pos();
                    if let Some(end) = self.jsx_text_end(pos) {
                        self.push(SyntaxKind::JsxText, pos, end);
                        self.scanner.set_text_pos(end);
                        continue;
                    }
                    let kind = self.scanner.scan();
                    let token = RawToken {
                        kind,
                        start: self.scanner.get_token_pos(),
                        end: self.scanner.get_token_end(),
                    };
                    state = match kind {
                        SyntaxKind::EndOfFileToken => break,
                        SyntaxKind::SingleLineCommentTrivia => {
                            self.comment(CommentKind::Line, token);
                            WalkState::Scanning
                        }
                        SyntaxKind::MultiLineCommentTrivia => {
                            self.comment(CommentKind::Block, token);
                            WalkState::Scanning
                        }
                        k if k.is_trivia() => WalkState::Scanning,
                        SyntaxKind::CloseBraceToken
                        | SyntaxKind::SlashToken
                        | SyntaxKind::SlashEqualsToken
                        | SyntaxKind::GreaterThanToken
                        | SyntaxKind::LessThanToken => WalkState::Lookup(token),
                        k if (k == SyntaxKind::Identifier || k.is_keyword())
                            && self.byte_at(token.end) == Some(b'-') =>
                        {
                            WalkState::Lookup(token)
                        }
                        _ => {
                            self.out.tokens.push(token);
                            WalkState::Scanning
                        }
                    };
                }
                WalkState::Lookup(token) => {
                    self.resolve(token);
                    state = WalkState::Scanning;
                }
            }
        }
        self.out
    }

    fn jsx_text_end(&self, pos: u32) -> Option<u32> {
        let idx = self.jsx_text.partition_point(|&(start, _)| start <= pos);
        let &(start, end) = self.jsx_text.get(idx.checked_sub(1)?)?;
        (start <= pos && pos < end).then_some(end)
    }

    fn byte_at(&self, pos: u32) -> Option<u8> {
        self.scanner.get_text().as_bytes().get(pos as usize).copied()
    }

    fn push(&mut self, kind: SyntaxKind, start: u32, end: u32) {
        self.out.tokens.push(RawToken { kind, start, end });
    }

    fn comment(&mut self, kind: CommentKind, token: RawToken) {
        self.out.comments.push(RawComment {
            kind,
            start: token.start,
            end: token.end,
        });
    }

    fn container(&self, start: u32, end: u32) -> Option<&'a Node> {
        let index = self.arena.node_containing(self.root, start, end)?;
        self.arena.get(index)
    }

    fn resolve(&mut self, token: RawToken) {
        let Some(node) = self.container(token.start, token.end) else {
            self.out.tokens.push(token);
            return;
        };
        let starts_node = node.pos == token.start;
        let resolved = match token.kind {
            SyntaxKind::CloseBraceToken
                if starts_node
                    && matches!(node.kind, SyntaxKind::TemplateMiddle | SyntaxKind::TemplateTail) =>
            {
                let kind = self.scanner.re_scan_template_token();
                Some((kind, self.scanner.get_token_end()))
            }
            SyntaxKind::SlashToken | SyntaxKind::SlashEqualsToken
                if starts_node && node.kind == SyntaxKind::RegularExpressionLiteral =>
            {
                let kind = self.scanner.re_scan_slash_token();
                Some((kind, self.scanner.get_token_end()))
            }
            SyntaxKind::GreaterThanToken if self.is_compound_greater(node, token.start) => {
                let kind = self.scanner.re_scan_greater_token();
                Some((kind, self.scanner.get_token_end()))
            }
            SyntaxKind::LessThanToken
                if starts_node
                    && matches!(
                        node.kind,
                        SyntaxKind::JsxClosingElement | SyntaxKind::JsxClosingFragment
                    )
                    && self.byte_at(token.end) == Some(b'/') =>
            {
                self.scanner.set_text_pos(token.end + 1);
                Some((SyntaxKind::LessThanSlashToken, token.end + 1))
            }
            // Hyphenated JSX names (`data-id`) are one identifier node.
            _ if starts_node && node.kind == SyntaxKind::Identifier && node.end > token.end => {
                self.scanner.set_text_pos(node.end);
                Some((SyntaxKind::Identifier, node.end))
            }
            _ => None,
        };
        match resolved {
            Some((kind, end)) => {
                trace!(from = ?token.kind, to = ?kind, start = token.start, end, "re-scanned token");
                self.push(kind, token.start, end);
            }
            None => self.out.tokens.push(token),
        }
    }

    /// A `>` that the enclosing binary expression spells as part of a longer
    /// operator (`>=`, `>>`, `>>>`, `>>=`, `>>>=`).
    fn is_compound_greater(&self, node: &Node, at: u32) -> bool {
        let Some(binary) = self.arena.get_binary_expr(node) else {
            return false;
        };
        if !matches!(
            binary.operator_token,
            SyntaxKind::GreaterThanEqualsToken
                | SyntaxKind::GreaterThanGreaterThanToken
                | SyntaxKind::GreaterThanGreaterThanGreaterThanToken
                | SyntaxKind::GreaterThanGreaterThanEqualsToken
                | SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken
        ) {
            return false;
        }
        let (Some(left), Some(right)) = (self.arena.get(binary.left), self.arena.get(binary.right)) else {
            return false;
        };
        left.end <= at && at < right.pos
    }
}

/// Position queries over the significant tokens of a file.
#[derive(Clone, Debug, Default)]
pub struct TokenIndex {
    tokens: Vec<RawToken>,
}

impl TokenIndex {
    pub fn new(tokens: &[RawToken]) -> Self {
        TokenIndex {
            tokens: tokens.to_vec(),
        }
    }

    pub fn tokens(&self) -> &[RawToken] {
        &self.tokens
    }

    /// First token starting at or after `pos`.
    pub fn at_or_after(&self, pos: u32) -> Option<RawToken> {
        let idx = self.tokens.partition_point(|token| token.start < pos);
        self.tokens.get(idx).copied()
    }

    /// Last token ending at or before `pos`.
    pub fn before(&self, pos: u32) -> Option<RawToken> {
        let idx = self.tokens.partition_point(|token| token.end <= pos);
        self.tokens.get(idx.checked_sub(1)?).copied()
    }

    /// First token of `kind` starting at or after `pos`.
    pub fn find_after(&self, pos: u32, kind: SyntaxKind) -> Option<RawToken> {
        let idx = self.tokens.partition_point(|token| token.start < pos);
        self.tokens[idx..].iter().find(|token| token.kind == kind).copied()
    }

    /// Tokens fully inside `[start, end)`.
    pub fn within(&self, start: u32, end: u32) -> SmallVec<[RawToken; 8]> {
        let from = self.tokens.partition_point(|token| token.start < start);
        self.tokens[from..]
            .iter()
            .take_while(|token| token.end <= end)
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(kinds: &[(SyntaxKind, u32, u32)]) -> TokenIndex {
        let tokens: Vec<RawToken> = kinds
            .iter()
            .map(|&(kind, start, end)| RawToken { kind, start, end })
            .collect();
        TokenIndex::new(&tokens)
    }

    #[test]
    fn token_index_queries() {
        // a : b ;
        let idx = index(&[
            (SyntaxKind::Identifier, 0, 1),
            (SyntaxKind::ColonToken, 2, 3),
            (SyntaxKind::Identifier, 4, 5),
            (SyntaxKind::SemicolonToken, 5, 6),
        ]);
        assert_eq!(idx.at_or_after(1).map(|t| t.kind), Some(SyntaxKind::ColonToken));
        assert_eq!(idx.before(4).map(|t| t.kind), Some(SyntaxKind::ColonToken));
        assert_eq!(idx.before(0), None);
        assert_eq!(idx.find_after(0, SyntaxKind::SemicolonToken).map(|t| t.start), Some(5));
        assert_eq!(idx.within(2, 5).len(), 2);
        assert_eq!(idx.at_or_after(6), None);
    }

    #[test]
    fn plain_source_without_tree_context() {
        let arena = NodeArena::new();
        let scan = walk_source(&arena, NodeIndex::NONE, "a /* b */ + c // d\n", ScriptTarget::ESNext);
        let kinds: Vec<_> = scan.tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            [SyntaxKind::Identifier, SyntaxKind::PlusToken, SyntaxKind::Identifier]
        );
        assert_eq!(scan.comments.len(), 2);
        assert_eq!(scan.comments[0].kind, CommentKind::Block);
        assert_eq!((scan.comments[1].start, scan.comments[1].end), (14, 18));
    }

    #[test]
    fn shebang_is_not_a_comment() {
        let arena = NodeArena::new();
        let scan = walk_source(&arena, NodeIndex::NONE, "#!/usr/bin/env node\nx", ScriptTarget::ESNext);
        assert!(scan.comments.is_empty());
        assert_eq!(scan.tokens.len(), 1);
    }
}
