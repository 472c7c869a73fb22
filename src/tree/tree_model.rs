use std::sync::atomic::{AtomicU32, Ordering};

use indexmap::IndexMap;
use la_arena::Idx;
use serde::{Deserialize, Serialize};

// ============================================================================
// Node handles
// ============================================================================

/// Index of a node inside an [`Engine`](crate::tree::engine::Engine) arena.
pub type NodeId = Idx<NodeData>;

/// Identity of the engine that issued a node handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EngineId(u32);

impl EngineId {
    /// A fresh id, distinct from every other engine in the process.
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU32 = AtomicU32::new(0);
        EngineId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Handle to an identifier node.
///
/// Handles are cheap to copy and compare; two handles are equal exactly when
/// they address the same node of the same engine. `Inert` is the shared
/// production node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TestId {
    Node(EngineId, NodeId),
    Inert,
}

impl TestId {
    pub fn node_id(self) -> Option<NodeId> {
        match self {
            TestId::Node(_, id) => Some(id),
            TestId::Inert => None,
        }
    }

    /// The engine this handle belongs to; `None` for the inert node.
    pub fn engine(self) -> Option<EngineId> {
        match self {
            TestId::Node(engine, _) => Some(engine),
            TestId::Inert => None,
        }
    }

    pub fn is_inert(self) -> bool {
        matches!(self, TestId::Inert)
    }
}

// ============================================================================
// Node storage
// ============================================================================

/// A single identifier node as stored in the arena.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeData {
    /// Children keyed by the member name they are attached under
    pub members: IndexMap<String, NodeId>,

    /// Back-reference to the owning node; `None` for roots and detached nodes
    pub parent: Option<NodeId>,

    /// Name under which this node hangs off `parent`
    pub name: String,

    /// Present only on nodes created as explicit roots
    pub root: Option<RootOptions>,
}

impl NodeData {
    pub fn root(options: RootOptions) -> Self {
        Self {
            root: Some(options),
            ..Self::default()
        }
    }

    pub fn placeholder(parent: NodeId, name: &str) -> Self {
        Self {
            parent: Some(parent),
            name: name.to_string(),
            ..Self::default()
        }
    }
}

// ============================================================================
// Root options
// ============================================================================

/// Options carried by an explicitly created root.
///
/// Deserializes from either a bare prefix string or a mapping:
///
/// ```yaml
/// root: app
/// # or
/// root:
///   prefix: app
///   eraseToEmptyString: true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RootOptionsRepr")]
pub struct RootOptions {
    pub prefix: String,

    #[serde(rename = "eraseToEmptyString")]
    pub erase_to_empty_string: bool,
}

impl RootOptions {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            erase_to_empty_string: false,
        }
    }

    pub fn erased(mut self, erase: bool) -> Self {
        self.erase_to_empty_string = erase;
        self
    }
}

impl From<&str> for RootOptions {
    fn from(prefix: &str) -> Self {
        RootOptions::new(prefix)
    }
}

impl From<String> for RootOptions {
    fn from(prefix: String) -> Self {
        RootOptions::new(prefix)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RootOptionsRepr {
    Prefix(String),
    Options {
        prefix: String,
        #[serde(default, rename = "eraseToEmptyString", alias = "erase_to_empty_string")]
        erase_to_empty_string: bool,
    },
}

impl From<RootOptionsRepr> for RootOptions {
    fn from(repr: RootOptionsRepr) -> Self {
        match repr {
            RootOptionsRepr::Prefix(prefix) => RootOptions::new(prefix),
            RootOptionsRepr::Options {
                prefix,
                erase_to_empty_string,
            } => RootOptions::new(prefix).erased(erase_to_empty_string),
        }
    }
}

// ============================================================================
// Assignment payloads
// ============================================================================

/// A value written into a member.
///
/// Only `Node` values take part in linking; `Data` is accepted and dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Node(TestId),
    Data(serde_json::Value),
}

impl From<TestId> for Value {
    fn from(id: TestId) -> Self {
        Value::Node(id)
    }
}

impl From<serde_json::Value> for Value {
    fn from(data: serde_json::Value) -> Self {
        Value::Data(data)
    }
}

/// Shape of a member definition request.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Descriptor {
    pub configurable: bool,
    pub writable: bool,
    pub value: Option<Value>,

    /// The request supplies a getter and/or setter instead of a value
    pub accessor: bool,
}

impl Descriptor {
    /// A configurable, writable data descriptor carrying `value`.
    pub fn value(value: impl Into<Value>) -> Self {
        Self {
            configurable: true,
            writable: true,
            value: Some(value.into()),
            accessor: false,
        }
    }

    /// A getter/setter descriptor.
    pub fn accessor() -> Self {
        Self {
            configurable: true,
            writable: false,
            value: None,
            accessor: true,
        }
    }

    pub fn configurable(mut self, configurable: bool) -> Self {
        self.configurable = configurable;
        self
    }

    pub fn writable(mut self, writable: bool) -> Self {
        self.writable = writable;
        self
    }
}
