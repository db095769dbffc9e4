//! Entry point for one conversion run.

use crate::comments::convert_comments;
use crate::converter::Converter;
use crate::error::ConvertError;
use crate::es_node::EsNode;
use crate::location::LocationResolver;
use crate::maps::NodeMaps;
use crate::options::ConvertOptions;
use crate::tokens::{EsToken, convert_tokens};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tracing::{debug, info_span};
use tsz_common::Comment;
use tsz_syntax::{NodeArena, NodeIndex};

/// The `Program` node plus the optional top-level collections.
#[derive(Clone, Debug, PartialEq)]
pub struct ConvertedProgram {
    pub program: EsNode,
    pub tokens: Option<Vec<EsToken>>,
    pub comments: Option<Vec<Comment>>,
}

impl Serialize for ConvertedProgram {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let program = &self.program;
        let extra = usize::from(self.tokens.is_some()) + usize::from(self.comments.is_some());
        let mut map = serializer.serialize_map(Some(program.props.len() + 3 + extra))?;
        map.serialize_entry("type", program.type_name())?;
        for (key, value) in &program.props {
            map.serialize_entry(key, value)?;
        }
        map.serialize_entry("range", &program.range)?;
        map.serialize_entry("loc", &program.loc)?;
        if let Some(tokens) = &self.tokens {
            map.serialize_entry("tokens", tokens)?;
        }
        if let Some(comments) = &self.comments {
            map.serialize_entry("comments", comments)?;
        }
        map.end()
    }
}

/// Convert the `SourceFile` at `root`.
///
/// The first parse diagnostic aborts the run before any conversion. `maps`
/// is reset first and filled only when the options ask for it.
pub fn convert_source_file(
    arena: &NodeArena,
    root: NodeIndex,
    options: &ConvertOptions,
    maps: &mut NodeMaps,
) -> Result<ConvertedProgram, ConvertError> {
    maps.reset();
    let source = arena.source_file(root).ok_or(ConvertError::MissingData {
        kind: arena.kind(root).unwrap_or_default(),
        index: root.0,
    })?;
    let _span = info_span!("convert_source_file", file = %source.file_name).entered();

    if let Some(diagnostic) = source.parse_diagnostics.first() {
        let resolver = LocationResolver::new(&source.text);
        let at = resolver.line_and_column(diagnostic.start);
        return Err(ConvertError::Parse {
            index: diagnostic.start,
            line_number: at.line,
            column: at.column,
            message: diagnostic.message_text.clone(),
        });
    }

    let mut converter = Converter::new(arena, root, &source.text, source.language_version, *options, maps);
    let Some(program) = converter.convert(root)? else {
        return Err(ConvertError::MissingData {
            kind: arena.kind(root).unwrap_or_default(),
            index: root.0,
        });
    };

    let tokens = options
        .emit_tokens
        .then(|| convert_tokens(converter.trivia(), arena, root, converter.resolver()));
    let comments = options
        .emit_comments
        .then(|| convert_comments(converter.trivia(), converter.resolver()));
    debug!(
        nodes = converter.resolver().issued(),
        tokens = tokens.as_ref().map_or(0, Vec::len),
        comments = comments.as_ref().map_or(0, Vec::len),
        "converted"
    );

    Ok(ConvertedProgram {
        program,
        tokens,
        comments,
    })
}
