//! Comment records for the normalized tree root.

use crate::location::LocationResolver;
use crate::token_walker::TriviaScan;
use tsz_common::Comment;

/// Turn the walker's comment spans into ESTree comment records.
pub fn convert_comments(scan: &TriviaScan, resolver: &LocationResolver<'_>) -> Vec<Comment> {
    scan.comments
        .iter()
        .map(|raw| {
            Comment::from_span(
                raw.kind,
                resolver.text(),
                raw.start,
                raw.end,
                resolver.location(raw.start, raw.end),
            )
        })
        .collect()
}
