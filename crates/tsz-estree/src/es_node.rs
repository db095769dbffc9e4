//! The normalized (ESTree) node model.
//!
//! Nodes are records with a `type`, kind-specific fields kept in
//! construction order, a byte `range` and a line/column `loc`. Fields are
//! dynamically typed ([`Value`]) because the fallback transform emits shapes
//! that are only known from its table at runtime.

use crate::ast_node_type::AstNodeType;
use indexmap::IndexMap;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use tsz_common::SourceLocation;

/// Per-run identity of a normalized node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EsNodeId(pub u32);

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum EsType {
    Known(AstNodeType),
    /// A `TS{KindName}` produced by the fallback transform for a kind outside
    /// the vocabulary.
    Synthesized(String),
}

impl EsType {
    pub fn as_str(&self) -> &str {
        match self {
            EsType::Known(ty) => ty.as_str(),
            EsType::Synthesized(name) => name,
        }
    }

    pub fn known(&self) -> Option<AstNodeType> {
        match self {
            EsType::Known(ty) => Some(*ty),
            EsType::Synthesized(_) => None,
        }
    }
}

impl From<AstNodeType> for EsType {
    fn from(ty: AstNodeType) -> Self {
        EsType::Known(ty)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EsNode {
    pub id: EsNodeId,
    pub ty: EsType,
    pub range: [u32; 2],
    pub loc: SourceLocation,
    pub props: IndexMap<&'static str, Value>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Node(Box<EsNode>),
    Array(Vec<Value>),
    Object(IndexMap<&'static str, Value>),
}

impl EsNode {
    pub fn type_name(&self) -> &str {
        self.ty.as_str()
    }

    pub fn is(&self, ty: AstNodeType) -> bool {
        self.ty == EsType::Known(ty)
    }

    pub fn start(&self) -> u32 {
        self.range[0]
    }

    pub fn end(&self) -> u32 {
        self.range[1]
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.props.get(key)
    }

    /// The child node stored under `key`, if that field holds a node.
    pub fn node(&self, key: &str) -> Option<&EsNode> {
        self.get(key).and_then(Value::as_node)
    }

    pub fn node_mut(&mut self, key: &str) -> Option<&mut EsNode> {
        match self.props.get_mut(key) {
            Some(Value::Node(node)) => Some(node),
            _ => None,
        }
    }

    /// Child nodes stored under `key` as an array, holes skipped.
    pub fn nodes(&self, key: &str) -> Vec<&EsNode> {
        self.get(key)
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_node).collect())
            .unwrap_or_default()
    }

    /// Visit this node and every node nested below it, parents first.
    pub fn walk<'n>(&'n self, f: &mut dyn FnMut(&'n EsNode)) {
        f(self);
        for value in self.props.values() {
            value.walk(f);
        }
    }
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_node(&self) -> Option<&EsNode> {
        match self {
            Value::Node(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    fn walk<'n>(&'n self, f: &mut dyn FnMut(&'n EsNode)) {
        match self {
            Value::Node(node) => node.walk(f),
            Value::Array(items) => items.iter().for_each(|item| item.walk(f)),
            Value::Object(fields) => fields.values().for_each(|item| item.walk(f)),
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {}
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<EsNode> for Value {
    fn from(node: EsNode) -> Self {
        Value::Node(Box::new(node))
    }
}

impl From<Option<EsNode>> for Value {
    fn from(node: Option<EsNode>) -> Self {
        node.map_or(Value::Null, Value::from)
    }
}

impl From<Vec<EsNode>> for Value {
    fn from(nodes: Vec<EsNode>) -> Self {
        Value::Array(nodes.into_iter().map(Value::from).collect())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

/// Largest integer an IEEE double represents exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

fn serialize_number<S: Serializer>(n: f64, serializer: S) -> Result<S::Ok, S::Error> {
    if !n.is_finite() {
        serializer.serialize_unit()
    } else if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER && !(n == 0.0 && n.is_sign_negative()) {
        serializer.serialize_i64(n as i64)
    } else {
        serializer.serialize_f64(n)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => serialize_number(*n, serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::Node(node) => node.serialize(serializer),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(fields) => {
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (key, value) in fields {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

impl Serialize for EsNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.props.len() + 3))?;
        map.serialize_entry("type", self.type_name())?;
        for (key, value) in &self.props {
            map.serialize_entry(key, value)?;
        }
        map.serialize_entry("range", &self.range)?;
        map.serialize_entry("loc", &self.loc)?;
        map.end()
    }
}
