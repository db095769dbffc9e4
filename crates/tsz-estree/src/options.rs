//! Conversion options.
//!
//! Names follow the camelCase spelling ESTree tooling uses in its own
//! configuration; older spellings are accepted as aliases on input.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConvertOptions {
    /// Fail instead of synthesizing a type name outside the vocabulary.
    #[serde(alias = "emitUnknownTypeError", alias = "errorOnUnknownASTType")]
    pub fail_on_unknown_node_kind: bool,

    /// JSX text runs become `JSXText` instead of `Literal`.
    #[serde(alias = "useTextNodeForLiteralText", alias = "useJSXTextNode")]
    pub use_literal_text_node_for_markup_text: bool,

    /// Populate and return the concrete/normalized correspondence maps.
    #[serde(alias = "enableServiceMaps")]
    pub provide_correspondence_maps: bool,

    #[serde(alias = "tokens")]
    pub emit_tokens: bool,

    #[serde(alias = "comment", alias = "comments")]
    pub emit_comments: bool,
}

impl ConvertOptions {
    pub fn strict() -> Self {
        ConvertOptions {
            fail_on_unknown_node_kind: true,
            ..ConvertOptions::default()
        }
    }

    /// Options with every optional output switched on.
    pub fn full() -> Self {
        ConvertOptions {
            provide_correspondence_maps: true,
            emit_tokens: true,
            emit_comments: true,
            ..ConvertOptions::default()
        }
    }
}
