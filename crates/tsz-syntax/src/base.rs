//! Node handles and ordered child lists.

use serde::{Deserialize, Serialize};

/// Index of a node in its [`NodeArena`](crate::NodeArena).
///
/// `NodeIndex::NONE` marks an absent optional child.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    pub const NONE: NodeIndex = NodeIndex(u32::MAX);

    #[inline]
    pub fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    #[inline]
    pub fn is_some(self) -> bool {
        self.0 != u32::MAX
    }

    /// `None` for [`NodeIndex::NONE`].
    #[inline]
    pub fn to_option(self) -> Option<NodeIndex> {
        if self.is_none() { None } else { Some(self) }
    }
}

impl Default for NodeIndex {
    fn default() -> Self {
        NodeIndex::NONE
    }
}

/// An ordered list of child nodes together with the span it covers.
///
/// `pos`/`end` bracket the list contents (for a parameter list, the text
/// between the parentheses).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeList {
    pub nodes: Vec<NodeIndex>,
    pub pos: u32,
    pub end: u32,
    #[serde(default)]
    pub has_trailing_comma: bool,
}

impl NodeList {
    pub fn new(nodes: Vec<NodeIndex>, pos: u32, end: u32) -> Self {
        NodeList {
            nodes,
            pos,
            end,
            has_trailing_comma: false,
        }
    }

    pub fn empty(pos: u32) -> Self {
        NodeList::new(Vec::new(), pos, pos)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn first(&self) -> Option<NodeIndex> {
        self.nodes.first().copied()
    }

    pub fn last(&self) -> Option<NodeIndex> {
        self.nodes.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.nodes.iter().copied()
    }
}
