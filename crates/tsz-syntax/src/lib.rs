//! Concrete syntax tree for the tsz ESTree normalizer.
//!
//! This is the input contract: an external front-end compiler (or a test
//! fixture) fills a [`NodeArena`] with thin node headers and typed data
//! pools, links parents, and hands over the root `SourceFile` node. The
//! converter only reads from it.

pub mod base;
pub use base::{NodeIndex, NodeList};

pub mod flags;
pub use flags::{ModifierFlags, node_flags};

pub mod node;
pub use node::*;

mod children;
pub use children::NodeChildren;

pub mod node_access;
pub mod node_arena;

pub mod builder;
pub use builder::TreeBuilder;
