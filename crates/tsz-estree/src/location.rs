//! Offset to location resolution and deferred node finalization.
//!
//! Every normalized node is assembled through an [`EsNodeBuilder`]; its
//! `range` may still move while children are attached (type annotations
//! extend their owner, export wrappers narrow their declaration) and `loc`
//! is computed exactly once, in [`EsNodeBuilder::finish`].

use crate::es_node::{EsNode, EsNodeId, EsType, Value};
use indexmap::IndexMap;
use std::cell::Cell;
use tsz_common::{LineAndColumn, LineMap, SourceLocation};

/// Line/column lookups over one source text plus the run's node id counter.
pub struct LocationResolver<'a> {
    text: &'a str,
    line_map: LineMap,
    next_id: Cell<u32>,
}

impl<'a> LocationResolver<'a> {
    pub fn new(text: &'a str) -> Self {
        LocationResolver {
            text,
            line_map: LineMap::build(text),
            next_id: Cell::new(0),
        }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Source slice for `[start, end)`, empty when out of bounds.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        self.text.get(start as usize..end as usize).unwrap_or("")
    }

    pub fn line_and_column(&self, offset: u32) -> LineAndColumn {
        self.line_map.line_and_column(offset, self.text)
    }

    pub fn location(&self, start: u32, end: u32) -> SourceLocation {
        self.line_map.location(start, end, self.text)
    }

    /// Start a node covering `[start, end)`.
    pub fn builder(&self, ty: impl Into<EsType>, start: u32, end: u32) -> EsNodeBuilder {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        EsNodeBuilder {
            id: EsNodeId(id),
            ty: ty.into(),
            range: [start, end.max(start)],
            props: IndexMap::new(),
        }
    }

    /// Number of node ids handed out so far.
    pub fn issued(&self) -> u32 {
        self.next_id.get()
    }
}

/// A normalized node whose range is not final yet.
#[derive(Clone, Debug)]
pub struct EsNodeBuilder {
    id: EsNodeId,
    ty: EsType,
    range: [u32; 2],
    props: IndexMap<&'static str, Value>,
}

impl EsNodeBuilder {
    pub fn id(&self) -> EsNodeId {
        self.id
    }

    pub fn ty(&self) -> &EsType {
        &self.ty
    }

    pub fn range(&self) -> [u32; 2] {
        self.range
    }

    pub fn retype(mut self, ty: impl Into<EsType>) -> Self {
        self.ty = ty.into();
        self
    }

    pub fn prop(mut self, key: &'static str, value: impl Into<Value>) -> Self {
        self.props.insert(key, value.into());
        self
    }

    /// Add `key` only when `value` is present.
    pub fn prop_opt<V: Into<Value>>(mut self, key: &'static str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.props.insert(key, value.into());
        }
        self
    }

    pub fn set(&mut self, key: &'static str, value: impl Into<Value>) {
        self.props.insert(key, value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.props.get(key)
    }

    pub fn start_at(mut self, start: u32) -> Self {
        self.range[0] = start;
        self.range[1] = self.range[1].max(start);
        self
    }

    pub fn end_at(mut self, end: u32) -> Self {
        self.range[1] = end.max(self.range[0]);
        self
    }

    /// Grow the end to `end` if it lies further right.
    pub fn extend_to(mut self, end: u32) -> Self {
        self.range[1] = self.range[1].max(end);
        self
    }

    pub fn finish(self, resolver: &LocationResolver<'_>) -> EsNode {
        EsNode {
            id: self.id,
            ty: self.ty,
            loc: resolver.location(self.range[0], self.range[1]),
            range: self.range,
            props: self.props,
        }
    }
}

impl EsNode {
    /// Reopen a finished node for a range fix-up. The identity is kept so
    /// correspondence entries recorded for it stay valid.
    pub fn into_builder(self) -> EsNodeBuilder {
        EsNodeBuilder {
            id: self.id,
            ty: self.ty,
            range: self.range,
            props: self.props,
        }
    }
}
