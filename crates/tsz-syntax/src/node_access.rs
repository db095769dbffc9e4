//! Read-only navigation over a built arena.

use crate::base::{NodeIndex, NodeList};
use crate::flags::ModifierFlags;
use crate::node::{Node, NodeArena, SourceFileData};
use smallvec::SmallVec;
use tsz_scanner::SyntaxKind;

impl NodeArena {
    #[inline]
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            return None;
        }
        self.nodes.get(index.0 as usize)
    }

    #[inline]
    pub fn kind(&self, index: NodeIndex) -> Option<SyntaxKind> {
        self.get(index).map(|node| node.kind)
    }

    #[inline]
    pub fn parent(&self, index: NodeIndex) -> NodeIndex {
        self.extended_info
            .get(index.0 as usize)
            .map_or(NodeIndex::NONE, |info| info.parent)
    }

    /// Children of `index` in source order.
    pub fn children(&self, index: NodeIndex) -> SmallVec<[NodeIndex; 8]> {
        let mut out = SmallVec::new();
        if let Some(node) = self.get(index) {
            self.visit_children(node, &mut |child| out.push(child));
        }
        out
    }

    /// Nearest strict ancestor satisfying `pred`.
    pub fn find_ancestor(
        &self,
        index: NodeIndex,
        mut pred: impl FnMut(NodeIndex, &Node) -> bool,
    ) -> Option<NodeIndex> {
        let mut current = self.parent(index);
        while let Some(node) = self.get(current) {
            if pred(current, node) {
                return Some(current);
            }
            current = self.parent(current);
        }
        None
    }

    /// Deepest node below `root` whose span contains `[start, end)`.
    pub fn node_containing(&self, root: NodeIndex, start: u32, end: u32) -> Option<NodeIndex> {
        let node = self.get(root)?;
        if start < node.pos || end > node.end {
            return None;
        }
        let mut current = root;
        'descend: loop {
            for child in self.children(current) {
                let Some(child_node) = self.get(child) else {
                    continue;
                };
                if child_node.pos <= start && end <= child_node.end && child_node.end > child_node.pos {
                    current = child;
                    continue 'descend;
                }
            }
            return Some(current);
        }
    }

    /// Source file data of the root node.
    pub fn source_file(&self, root: NodeIndex) -> Option<&SourceFileData> {
        let node = self.get(root)?;
        self.get_source_file(node)
    }

    /// Modifier and decorator lists of a declaration, whichever exist.
    pub fn modifiers_of(&self, index: NodeIndex) -> Option<&NodeList> {
        let node = self.get(index)?;
        if let Some(data) = self.get_function(node) {
            return data.modifiers.as_ref();
        }
        if let Some(data) = self.get_class(node) {
            return data.modifiers.as_ref();
        }
        if let Some(data) = self.get_property_decl(node) {
            return data.modifiers.as_ref();
        }
        if let Some(data) = self.get_parameter(node) {
            return data.modifiers.as_ref();
        }
        if let Some(data) = self.get_variable_statement(node) {
            return data.modifiers.as_ref();
        }
        if let Some(data) = self.get_enum(node) {
            return data.modifiers.as_ref();
        }
        if let Some(data) = self.get_module(node) {
            return data.modifiers.as_ref();
        }
        if let Some(data) = self.get_type_alias(node) {
            return data.modifiers.as_ref();
        }
        if let Some(data) = self.get_import_equals(node) {
            return data.modifiers.as_ref();
        }
        if let Some(data) = self.get_import_decl(node) {
            return data.modifiers.as_ref();
        }
        if let Some(data) = self.get_export_decl(node) {
            return data.modifiers.as_ref();
        }
        if let Some(data) = self.get_export_assignment(node) {
            return data.modifiers.as_ref();
        }
        if let Some(data) = self.get_property_signature(node) {
            return data.modifiers.as_ref();
        }
        if let Some(data) = self.get_index_signature(node) {
            return data.modifiers.as_ref();
        }
        if let Some(data) = self.get_signature(node) {
            return data.modifiers.as_ref();
        }
        if let Some(data) = self.get_type_parameter(node) {
            return data.modifiers.as_ref();
        }
        None
    }

    pub fn modifier_flags(&self, modifiers: Option<&NodeList>) -> ModifierFlags {
        let mut flags = ModifierFlags::empty();
        if let Some(list) = modifiers {
            for modifier in list.iter() {
                if let Some(node) = self.get(modifier) {
                    flags |= ModifierFlags::from_keyword(node.kind);
                }
            }
        }
        flags
    }

    pub fn has_modifier(&self, modifiers: Option<&NodeList>, kind: SyntaxKind) -> bool {
        modifiers.is_some_and(|list| list.iter().any(|m| self.kind(m) == Some(kind)))
    }

    /// Identifier text, `None` for non-identifiers.
    pub fn identifier_text(&self, index: NodeIndex) -> Option<&str> {
        let node = self.get(index)?;
        self.get_identifier(node).map(|data| data.escaped_text.as_str())
    }
}
