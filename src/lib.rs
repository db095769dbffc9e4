//! ESTree output for tsz syntax trees.
//!
//! The heavy lifting lives in `tsz-estree`; this crate is the front door:
//! - [`convert_program`] runs one conversion with a fresh set of maps
//! - [`ArenaDocument`] is the on-disk form of a parsed file
//! - [`cli`] drives the `tsestree` binary

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tsz_syntax::{NodeArena, NodeIndex};

pub mod cli;
pub mod tracing_config;

pub use tsz_estree::{
    AstNodeType, ConvertError, ConvertOptions, ConvertedProgram, EsNode, EsNodeId, EsToken, EsType, NodeMaps,
    TokenType, Value,
};

/// Result of [`convert_program`].
#[derive(Debug)]
pub struct ConversionOutput {
    pub program: ConvertedProgram,
    /// Present only when `provide_correspondence_maps` was set.
    pub maps: Option<NodeMaps>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MapsJson {
    ts_node_to_es_node: Vec<(NodeIndex, EsNodeId)>,
    es_node_to_ts_node: Vec<(EsNodeId, NodeIndex)>,
}

impl ConversionOutput {
    /// The program as JSON, wrapped as `{ast, maps}` when maps were requested.
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        let ast = serde_json::to_value(&self.program)?;
        let Some(maps) = &self.maps else {
            return Ok(ast);
        };
        let maps = serde_json::to_value(MapsJson {
            ts_node_to_es_node: maps.ts_to_es_entries(),
            es_node_to_ts_node: maps.es_to_ts_entries(),
        })?;
        Ok(serde_json::json!({ "ast": ast, "maps": maps }))
    }
}

/// Convert the `SourceFile` at `root` with maps owned by this call.
pub fn convert_program(
    arena: &NodeArena,
    root: NodeIndex,
    options: &ConvertOptions,
) -> Result<ConversionOutput, ConvertError> {
    let mut maps = NodeMaps::new();
    let program = tsz_estree::convert_source_file(arena, root, options, &mut maps)?;
    Ok(ConversionOutput {
        program,
        maps: options.provide_correspondence_maps.then_some(maps),
    })
}

/// A serialized arena plus the index of its `SourceFile`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ArenaDocument {
    pub arena: NodeArena,
    pub root: NodeIndex,
}

impl ArenaDocument {
    /// Parse a document and restore the parent links serialization drops.
    pub fn from_json(text: &str) -> Result<ArenaDocument> {
        let mut document: ArenaDocument = serde_json::from_str(text).context("invalid arena document")?;
        document.arena.rebuild_parents();
        Ok(document)
    }

    pub fn load(path: &Path) -> Result<ArenaDocument> {
        let text = std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
        ArenaDocument::from_json(&text).with_context(|| format!("failed to load {}", path.display()))
    }
}

/// Load and convert one arena document.
pub fn convert_file(path: &Path, options: &ConvertOptions) -> Result<ConversionOutput> {
    let document = ArenaDocument::load(path)?;
    let _span = tracing::info_span!("convert_file", path = %path.display()).entered();
    convert_program(&document.arena, document.root, options).with_context(|| format!("failed to convert {}", path.display()))
}
