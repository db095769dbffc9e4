//! Offset to line/column conversion.
//!
//! The concrete tree stores byte offsets, while ESTree consumers expect
//! `loc` objects with 1-based lines and 0-based columns counted in UTF-16
//! code units (the unit the front-end compiler reports diagnostics in).

use serde::{Deserialize, Serialize};

/// A position in a source file (0-indexed line and column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// 0-indexed line number
    pub line: u32,
    /// 0-indexed column (UTF-16 code units)
    pub character: u32,
}

impl Position {
    pub fn new(line: u32, character: u32) -> Self {
        Position { line, character }
    }
}

/// ESTree position: 1-based line, 0-based UTF-16 column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineAndColumn {
    pub line: u32,
    pub column: u32,
}

impl LineAndColumn {
    pub fn new(line: u32, column: u32) -> Self {
        LineAndColumn { line, column }
    }
}

impl From<Position> for LineAndColumn {
    fn from(pos: Position) -> Self {
        LineAndColumn {
            line: pos.line + 1,
            column: pos.character,
        }
    }
}

/// ESTree `loc` object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    pub start: LineAndColumn,
    pub end: LineAndColumn,
}

impl SourceLocation {
    pub fn new(start: LineAndColumn, end: LineAndColumn) -> Self {
        SourceLocation { start, end }
    }
}

/// Line map for efficient offset <-> position conversion.
/// Stores the starting offset of each line.
#[derive(Debug, Clone)]
pub struct LineMap {
    /// Starting offset of each line (line_starts[0] is always 0)
    line_starts: Vec<u32>,
}

impl LineMap {
    /// Build a line map from source text.
    ///
    /// Recognizes `\n`, `\r\n`, a lone `\r`, and the Unicode line and
    /// paragraph separators.
    pub fn build(source: &str) -> Self {
        let bytes = source.as_bytes();
        let mut line_starts = vec![0u32];

        // 0xE2 is the lead byte of U+2028 / U+2029.
        for i in memchr::memchr3_iter(b'\n', b'\r', 0xE2, bytes) {
            match bytes[i] {
                b'\n' => line_starts.push((i + 1) as u32),
                b'\r' => {
                    // \r followed by \n - the \n will create the line start
                    if bytes.get(i + 1) != Some(&b'\n') {
                        line_starts.push((i + 1) as u32);
                    }
                }
                _ => {
                    if bytes.get(i + 1) == Some(&0x80)
                        && matches!(bytes.get(i + 2), Some(&0xA8) | Some(&0xA9))
                    {
                        line_starts.push((i + 3) as u32);
                    }
                }
            }
        }

        LineMap { line_starts }
    }

    /// Convert a byte offset to a Position (line, character).
    /// Character is counted in UTF-16 code units.
    pub fn offset_to_position(&self, offset: u32, source: &str) -> Position {
        // Binary search for the line containing this offset
        let line = match self.line_starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert_point) => insert_point.saturating_sub(1),
        };

        let line_start = self.line_starts.get(line).copied().unwrap_or(0);
        let clamped_end = (offset as usize).min(source.len());
        let start = (line_start as usize).min(clamped_end);
        let character = match source.get(start..clamped_end) {
            Some(slice) if slice.is_ascii() => slice.len() as u32,
            Some(slice) => slice.chars().map(|ch| ch.len_utf16() as u32).sum(),
            None => 0,
        };

        Position {
            line: line as u32,
            character,
        }
    }

    /// Convert a byte offset to an ESTree line/column pair.
    pub fn line_and_column(&self, offset: u32, source: &str) -> LineAndColumn {
        self.offset_to_position(offset, source).into()
    }

    /// Compute the ESTree `loc` for a `[start, end)` byte range.
    pub fn location(&self, start: u32, end: u32, source: &str) -> SourceLocation {
        SourceLocation {
            start: self.line_and_column(start, source),
            end: self.line_and_column(end, source),
        }
    }
}
