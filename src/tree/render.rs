use std::fmt;

use la_arena::Arena;
use serde::{Serialize, Serializer};

use crate::tree::TestIdTree;
use crate::tree::engine::Engine;
use crate::tree::tree_model::{NodeData, NodeId, TestId};

// ============================================================================
// Path rendering
// ============================================================================

/// Build the dotted path of `id` from the parent chain.
///
/// Walks parent links up to the first node without a parent. The result is
/// empty unless that node carries a non-empty root prefix and no node on the
/// walk asks to be erased. The walk is bounded by the arena size, so a node
/// placed into its own descendant chain renders empty instead of looping.
pub fn render_path(nodes: &Arena<NodeData>, id: NodeId) -> String {
    let mut names: Vec<&str> = Vec::new();
    let mut node = &nodes[id];
    let mut erased = false;

    loop {
        if let Some(options) = &node.root {
            erased |= options.erase_to_empty_string;
        }

        let Some(parent) = node.parent else { break };

        if names.len() > nodes.len() {
            tracing::warn!(?id, "parent chain does not terminate, rendering empty");
            return String::new();
        }

        names.push(&node.name);
        node = &nodes[parent];
    }

    let Some(options) = &node.root else {
        return String::new();
    };

    if erased || options.prefix.is_empty() {
        return String::new();
    }

    let mut path = options.prefix.clone();
    for name in names.iter().rev() {
        path.push('.');
        path.push_str(name);
    }
    path
}

// ============================================================================
// Render surfaces
// ============================================================================

/// Borrowed view of a node that renders through `Display` and `Serialize`.
///
/// `to_string()`, `format!("{}")` and `serde_json::to_string` all produce the
/// same path as [`Engine::render`].
pub struct Rendered<'a> {
    engine: &'a Engine,
    id: TestId,
}

impl<'a> Rendered<'a> {
    pub fn new(engine: &'a Engine, id: TestId) -> Self {
        Self { engine, id }
    }
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.engine.render(self.id))
    }
}

impl fmt::Debug for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rendered({:?})", self.engine.render(self.id))
    }
}

impl Serialize for Rendered<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.engine.render(self.id))
    }
}
