use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::tree::tree_model::NodeId;

/// Engine operation recorded in the trace file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceOp {
    /// A root or free node was allocated
    Create,
    /// A placeholder child was synthesized by a member read
    Synthesize,
    /// A label-less `create()` claimed the last read placeholder
    Claim,
    /// A node was linked under a member name
    Link,
    /// A node left its previous parent
    Detach,
    /// A write or definition was dropped without changing the tree
    Reject,
}

#[derive(Debug, Serialize)]
pub struct TraceEvent {
    pub timestamp_ms: u128,
    pub step: u64,

    pub op: TraceOp,

    pub node: Option<u32>,
    pub parent: Option<u32>,
    pub name: Option<String>,

    pub detail: Option<String>,
}

impl TraceEvent {
    pub fn now(step: u64, op: TraceOp) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or_default(),
            step,
            op,
            node: None,
            parent: None,
            name: None,
            detail: None,
        }
    }

    pub fn with_node(mut self, node: NodeId) -> Self {
        self.node = Some(raw_index(node));
        self
    }

    pub fn with_parent(mut self, parent: NodeId) -> Self {
        self.parent = Some(raw_index(parent));
        self
    }

    pub fn with_name(mut self, name: impl ToString) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_detail(mut self, detail: impl ToString) -> Self {
        self.detail = Some(detail.to_string());
        self
    }
}

/// Arena slot number of a node, as written to the trace.
pub fn raw_index(node: NodeId) -> u32 {
    u32::from(node.into_raw())
}
