//! Comment records.
//!
//! Comments are not part of the concrete tree, so the trivia scanner recovers
//! them from the source text and hands them back as a flat, ordered list.

use crate::position::SourceLocation;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommentKind {
    /// `/* ... */`
    Block,
    /// `// ...`
    Line,
}

/// A comment as exposed on the normalized tree root.
///
/// Serializes as `{ "type": "Line" | "Block", "value", "range", "loc" }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "type")]
    pub kind: CommentKind,
    /// Comment text without its delimiters.
    pub value: String,
    pub range: [u32; 2],
    pub loc: SourceLocation,
}

impl Comment {
    /// Build a comment from its full source span (delimiters included).
    pub fn from_span(kind: CommentKind, source: &str, start: u32, end: u32, loc: SourceLocation) -> Self {
        Comment {
            kind,
            value: comment_value(kind, source, start, end).to_string(),
            range: [start, end],
            loc,
        }
    }
}

/// Strip comment delimiters from the text of a comment span.
///
/// An unterminated block comment keeps everything after `/*`.
pub fn comment_value(kind: CommentKind, source: &str, start: u32, end: u32) -> &str {
    let text = source.get(start as usize..end as usize).unwrap_or("");
    match kind {
        CommentKind::Line => text.strip_prefix("//").unwrap_or(text),
        CommentKind::Block => {
            let body = text.strip_prefix("/*").unwrap_or(text);
            body.strip_suffix("*/").unwrap_or(body)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::LineMap;

    #[test]
    fn strips_line_comment_prefix() {
        let source = "x; // trailing";
        assert_eq!(comment_value(CommentKind::Line, source, 3, 14), " trailing");
    }

    #[test]
    fn strips_block_delimiters() {
        let source = "/** doc */";
        assert_eq!(comment_value(CommentKind::Block, source, 0, 10), "* doc ");
    }

    #[test]
    fn unterminated_block_keeps_tail() {
        let source = "/* open";
        assert_eq!(comment_value(CommentKind::Block, source, 0, 7), " open");
    }

    #[test]
    fn serializes_with_estree_keys() {
        let source = "// hi";
        let map = LineMap::build(source);
        let comment = Comment::from_span(CommentKind::Line, source, 0, 5, map.location(0, 5, source));
        let json = serde_json::to_value(&comment).unwrap();
        assert_eq!(json["type"], "Line");
        assert_eq!(json["value"], " hi");
        assert_eq!(json["range"], serde_json::json!([0, 5]));
        assert_eq!(json["loc"]["start"]["line"], 1);
        assert_eq!(json["loc"]["end"]["column"], 5);
    }
}
