//! Common types shared by the tsz ESTree crates.
//!
//! This crate provides the foundational leaf types used across the workspace:
//! - Language version tags (`ScriptTarget`)
//! - Line maps and ESTree line/column locations (`LineMap`, `SourceLocation`)
//! - Comment records produced by the trivia scanner (`Comment`, `CommentKind`)
//! - Upstream compiler diagnostics (`Diagnostic`)

// Common types - shared constants to break circular dependencies
pub mod common;
pub use common::ScriptTarget;

// Position types for line/column source locations
pub mod position;
pub use position::{LineAndColumn, LineMap, Position, SourceLocation};

// Comment records
pub mod comments;
pub use comments::{Comment, CommentKind};

// Diagnostics reported by the front-end compiler
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory};
