//! Change descriptors emitted by the collaborative-document engine.
//!
//! The CRDT engine is an external collaborator: it merges concurrent edits,
//! computes diffs, and invokes observer callbacks with one descriptor per
//! mutation batch. This module defines the descriptor shape those callbacks
//! carry across the boundary — it contains no convergence logic of its own.
//!
//! Trust boundary: descriptor content is taken as-is from the engine.
//! Deleted-value content that is not a string identifier is dropped during
//! flattening rather than rejected.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// How a single key changed within one mutation batch.
///
/// Closed set: the engine reports exactly these three kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeAction {
    Add,
    Update,
    Delete,
}

/// Ordered key -> action map, as aggregated per translator invocation.
///
/// Building one from a pair sequence keeps the first occurrence's position
/// and the last occurrence's action for duplicate keys.
pub type ChangeMap = IndexMap<String, ChangeAction>;

/// One step in the path from the observed root down to the mutated node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// Map entry key.
    Key(String),

    /// Position within a sequence.
    Index(u32),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => f.write_str(key),
            PathSegment::Index(idx) => write!(f, "{idx}"),
        }
    }
}

/// A value removed from the document, with the opaque content the engine
/// captured for it at deletion time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeletedEntry {
    pub content: Vec<Value>,
}

impl DeletedEntry {
    pub fn new(content: Vec<Value>) -> Self {
        Self { content }
    }

    /// Flatten the captured content into child identifiers, in content order.
    ///
    /// The engine stores child ids as strings; non-string values and empty
    /// strings are dropped here.
    pub fn child_ids(&self) -> impl Iterator<Item = String> + '_ {
        self.content
            .iter()
            .filter_map(Value::as_str)
            .filter(|id| !id.is_empty())
            .map(str::to_owned)
    }
}

/// One mutation batch against the observed document node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChangeDescriptor {
    /// Changed key -> action, in the order the engine reported them.
    #[serde(default)]
    pub keys: IndexMap<String, ChangeAction>,

    /// Values removed by this batch, in deletion order.
    #[serde(default)]
    pub deleted: Vec<DeletedEntry>,

    /// Path from the observed root to the mutated node. `None` and an empty
    /// path both mean the mutation happened at the root itself.
    #[serde(default)]
    pub path: Option<Vec<PathSegment>>,
}

impl ChangeDescriptor {
    /// Descriptor for a mutation at the observed root.
    pub fn at_root(keys: IndexMap<String, ChangeAction>) -> Self {
        Self {
            keys,
            ..Self::default()
        }
    }

    /// Descriptor for a mutation below the observed root.
    pub fn nested(path: Vec<PathSegment>) -> Self {
        Self {
            path: Some(path),
            ..Self::default()
        }
    }

    /// The immediate child the mutation propagated through, or `None` for a
    /// root-level mutation. A missing path is coerced to root-level; an index
    /// segment is rendered in decimal when used as a key.
    pub fn nested_child_key(&self) -> Option<String> {
        self.path
            .as_deref()
            .unwrap_or_default()
            .first()
            .map(ToString::to_string)
    }
}
