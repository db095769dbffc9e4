//! TypeScript scanner/tokenizer for the tsz ESTree normalizer.
//!
//! The scanner never drives a parse: the concrete tree arrives fully built
//! from an external front-end. It exists to re-lex source text for the
//! artifacts the tree does not keep (comments and the flat token stream),
//! which is why it exposes the `re_scan_*` entry points a tree-guided caller
//! needs to resolve context-sensitive tokens.

pub mod char_codes;
pub mod scanner_impl;
pub mod syntax_kind;
pub mod text_tables;

pub use scanner_impl::{ScannerState, TokenFlags};
pub use syntax_kind::SyntaxKind;
pub use text_tables::{text_to_keyword, token_to_string};

#[cfg(test)]
#[path = "tests/scanner_impl_tests.rs"]
mod scanner_impl_tests;
