//! Concrete/normalized node correspondence.

use crate::es_node::EsNodeId;
use rustc_hash::FxHashMap;
use tsz_syntax::NodeIndex;

/// Two association tables filled during one conversion run.
///
/// Only nodes that produced a normalized node of their own are recorded;
/// pass-through and elided kinds have no entry. The first registration of a
/// concrete node wins, so both tables always have the same size.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodeMaps {
    ts_to_es: FxHashMap<NodeIndex, EsNodeId>,
    es_to_ts: FxHashMap<EsNodeId, NodeIndex>,
}

impl NodeMaps {
    pub fn new() -> Self {
        NodeMaps::default()
    }

    pub fn reset(&mut self) {
        self.ts_to_es.clear();
        self.es_to_ts.clear();
    }

    pub fn register(&mut self, ts: NodeIndex, es: EsNodeId) {
        if self.ts_to_es.contains_key(&ts) || self.es_to_ts.contains_key(&es) {
            return;
        }
        self.ts_to_es.insert(ts, es);
        self.es_to_ts.insert(es, ts);
    }

    pub fn es_node_for(&self, ts: NodeIndex) -> Option<EsNodeId> {
        self.ts_to_es.get(&ts).copied()
    }

    pub fn ts_node_for(&self, es: EsNodeId) -> Option<NodeIndex> {
        self.es_to_ts.get(&es).copied()
    }

    pub fn len(&self) -> usize {
        self.ts_to_es.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ts_to_es.is_empty()
    }

    /// Concrete-to-normalized pairs sorted by concrete index.
    pub fn ts_to_es_entries(&self) -> Vec<(NodeIndex, EsNodeId)> {
        let mut entries: Vec<_> = self.ts_to_es.iter().map(|(&ts, &es)| (ts, es)).collect();
        entries.sort_unstable();
        entries
    }

    /// Normalized-to-concrete pairs sorted by normalized id.
    pub fn es_to_ts_entries(&self) -> Vec<(EsNodeId, NodeIndex)> {
        let mut entries: Vec<_> = self.es_to_ts.iter().map(|(&es, &ts)| (es, ts)).collect();
        entries.sort_unstable();
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_registration_wins() {
        let mut maps = NodeMaps::new();
        maps.register(NodeIndex(3), EsNodeId(0));
        maps.register(NodeIndex(3), EsNodeId(1));
        assert_eq!(maps.len(), 1);
        assert_eq!(maps.es_node_for(NodeIndex(3)), Some(EsNodeId(0)));
        assert_eq!(maps.ts_node_for(EsNodeId(1)), None);
    }

    #[test]
    fn reset_clears_both_directions() {
        let mut maps = NodeMaps::new();
        maps.register(NodeIndex(1), EsNodeId(7));
        maps.reset();
        assert!(maps.is_empty());
        assert_eq!(maps.ts_node_for(EsNodeId(7)), None);
    }
}
