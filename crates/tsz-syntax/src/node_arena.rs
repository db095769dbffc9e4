//! Arena construction and parent linking.

use crate::base::NodeIndex;
use crate::node::{ExtendedNodeInfo, Node, NodeArena, PoolData};
use smallvec::SmallVec;
use tsz_scanner::SyntaxKind;

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    pub fn with_capacity(capacity: usize) -> NodeArena {
        NodeArena {
            nodes: Vec::with_capacity(capacity),
            extended_info: Vec::with_capacity(capacity),
            ..NodeArena::default()
        }
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.extended_info.clear();
        self.clear_pools();
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add a data-less node (keyword, modifier, `this`, end-of-file, ...).
    pub fn add_token(&mut self, kind: SyntaxKind, pos: u32, end: u32) -> NodeIndex {
        self.push_header(Node::token(kind, pos, end))
    }

    /// Add a node whose data lives in `T`'s pool and parent its children.
    pub fn add_node<T: PoolData>(&mut self, kind: SyntaxKind, pos: u32, end: u32, data: T) -> NodeIndex {
        let mut children: SmallVec<[NodeIndex; 8]> = SmallVec::new();
        data.for_each_child(kind, &mut |child| children.push(child));

        let pool = T::pool_mut(self);
        let data_index = pool.len() as u32;
        pool.push(data);

        let index = self.push_header(Node {
            kind,
            flags: 0,
            pos,
            end,
            pool: T::POOL,
            data_index,
        });
        for child in children {
            self.set_parent(child, index);
        }
        index
    }

    pub fn set_flags(&mut self, index: NodeIndex, flags: u16) {
        if let Some(node) = self.nodes.get_mut(index.0 as usize) {
            node.flags |= flags;
        }
    }

    /// Typed data of `node`, if it lives in `T`'s pool.
    #[inline]
    pub fn node_data<T: PoolData>(&self, node: &Node) -> Option<&T> {
        if node.pool != T::POOL {
            return None;
        }
        T::pool(self).get(node.data_index as usize)
    }

    /// Recompute every parent link from the child lists. Needed after
    /// deserialization, where the side table is skipped.
    pub fn rebuild_parents(&mut self) {
        self.extended_info = vec![ExtendedNodeInfo::default(); self.nodes.len()];
        for i in 0..self.nodes.len() {
            let parent = NodeIndex(i as u32);
            let node = self.nodes[i];
            let mut children: SmallVec<[NodeIndex; 8]> = SmallVec::new();
            self.visit_children(&node, &mut |child| children.push(child));
            for child in children {
                self.set_parent(child, parent);
            }
        }
    }

    fn push_header(&mut self, node: Node) -> NodeIndex {
        let index = NodeIndex(self.nodes.len() as u32);
        self.nodes.push(node);
        self.extended_info.push(ExtendedNodeInfo::default());
        index
    }

    fn set_parent(&mut self, child: NodeIndex, parent: NodeIndex) {
        if let Some(info) = self.extended_info.get_mut(child.0 as usize) {
            info.parent = parent;
        }
    }
}
