//! Conversion errors.

use thiserror::Error;
use tsz_scanner::SyntaxKind;

/// Why a conversion run failed. Runs never return partial trees.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConvertError {
    /// The front-end compiler reported a diagnostic; conversion never started.
    #[error("{message} ({line_number}:{column})")]
    Parse {
        index: u32,
        line_number: u32,
        column: u32,
        message: String,
    },

    /// Strict mode met a synthesized type name outside the recognized vocabulary.
    #[error("Unknown AST_NODE_TYPE: \"{0}\"")]
    UnknownNodeType(String),

    /// The concrete tree is well formed but not expressible in ESTree.
    #[error("{message} ({line_number}:{column})")]
    Structure {
        index: u32,
        line_number: u32,
        column: u32,
        message: String,
    },

    /// A node's data pool does not match its kind.
    #[error("node {index} of kind {kind:?} is missing its data")]
    MissingData { kind: SyntaxKind, index: u32 },
}

impl ConvertError {
    /// Byte offset the error points at, when it has one.
    pub fn index(&self) -> Option<u32> {
        match self {
            ConvertError::Parse { index, .. } | ConvertError::Structure { index, .. } => Some(*index),
            ConvertError::UnknownNodeType(_) | ConvertError::MissingData { .. } => None,
        }
    }
}
