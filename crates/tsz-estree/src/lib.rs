//! ESTree conversion for tsz concrete syntax trees.
//!
//! This crate turns a `SourceFile` held in a [`tsz_syntax::NodeArena`] into
//! an ESTree `Program` with the TypeScript extensions:
//! - Tree conversion, one handler per syntactic family (`converter`)
//! - Table-driven fallback for kinds without a handler (`FALLBACK_TABLE`)
//! - Byte range and line/column locations (`location`)
//! - Tree-aware token and comment recovery (`token_walker`, `tokens`, `comments`)
//! - Concrete/normalized correspondence maps (`maps`)

// Entry point
pub mod ast_converter;
pub use ast_converter::{ConvertedProgram, convert_source_file};

// Node vocabulary and normalized node model
pub mod ast_node_type;
pub use ast_node_type::AstNodeType;
pub mod es_node;
pub use es_node::{EsNode, EsNodeId, EsType, Value};

// Tree conversion
pub mod converter;
pub use converter::{Converter, FALLBACK_TABLE, LiteralRole};
pub mod node_utils;

// Locations
pub mod location;
pub use location::{EsNodeBuilder, LocationResolver};

// Trivia
pub mod comments;
pub mod token_walker;
pub mod tokens;
pub use tokens::{EsToken, TokenType};

// Run configuration and results
pub mod error;
pub use error::ConvertError;
pub mod maps;
pub use maps::NodeMaps;
pub mod options;
pub use options::ConvertOptions;
