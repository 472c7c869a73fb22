use la_arena::Arena;

use crate::trace::logger::TraceLogger;
use crate::trace::trace::{TraceEvent, TraceOp};
use crate::tree::error::TestIdError;
use crate::tree::names;
use crate::tree::observe::Observed;
use crate::tree::production::production;
use crate::tree::render::{Rendered, render_path};
use crate::tree::tree_model::{Descriptor, EngineId, NodeData, NodeId, RootOptions, TestId, Value};
use crate::tree::{TestIdTree, validate_descriptor};

// ============================================================================
// Engine — arena-backed linking tree
// ============================================================================

/// Identifier tree that records placement as nodes are read and written.
///
/// Nodes live in an arena and reference each other by index, so parent
/// back-links and child maps never own one another. Each engine keeps its
/// own placement state; unrelated engines never interfere.
///
/// Handles issued by another engine, and [`TestId::Inert`], get production
/// semantics.
#[derive(Debug)]
pub struct Engine {
    id: EngineId,
    nodes: Arena<NodeData>,
    observed: Observed,
    tracer: Option<TraceLogger>,
    step: u64,
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            id: EngineId::next(),
            nodes: Arena::default(),
            observed: Observed::new(),
            tracer: None,
            step: 0,
        }
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> EngineId {
        self.id
    }

    /// Record every mutation to `tracer` as JSONL.
    pub fn with_tracer(mut self, tracer: TraceLogger) -> Self {
        self.tracer = Some(tracer);
        self
    }

    /// Number of nodes ever allocated.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Placement state, for inspection.
    pub fn observed(&self) -> &Observed {
        &self.observed
    }

    /// Stored data of a node owned by this engine.
    pub fn data(&self, node: TestId) -> Option<&NodeData> {
        self.local(node).map(|id| &self.nodes[id])
    }

    /// The node `node` currently hangs off.
    pub fn parent_of(&self, node: TestId) -> Option<TestId> {
        self.data(node)?.parent.map(|parent| self.handle(parent))
    }

    /// View of `node` that renders via `Display` and `Serialize`.
    pub fn display(&self, node: TestId) -> Rendered<'_> {
        Rendered::new(self, node)
    }

    fn local(&self, node: TestId) -> Option<NodeId> {
        match node {
            TestId::Node(owner, id) if owner == self.id => Some(id),
            _ => None,
        }
    }

    fn handle(&self, id: NodeId) -> TestId {
        TestId::Node(self.id, id)
    }

    fn record(&mut self, op: TraceOp, event: impl FnOnce(TraceEvent) -> TraceEvent) {
        self.step += 1;
        if let Some(tracer) = &self.tracer {
            tracer.log(&event(TraceEvent::now(self.step, op)));
        }
    }

    fn synthesize(&mut self, parent: NodeId, name: &str) -> NodeId {
        let child = self.nodes.alloc(NodeData::placeholder(parent, name));
        self.nodes[parent].members.insert(name.to_string(), child);

        tracing::trace!(?parent, ?child, name, "synthesized placeholder");
        self.record(TraceOp::Synthesize, |e| {
            e.with_node(child).with_parent(parent).with_name(name)
        });
        child
    }

    /// Unhook `child` from its parent. The vacated member gets a fresh
    /// placeholder so the old parent keeps answering for that name.
    fn detach(&mut self, child: NodeId) {
        let Some(parent) = self.nodes[child].parent.take() else {
            return;
        };
        let name = std::mem::take(&mut self.nodes[child].name);

        tracing::debug!(?parent, ?child, name = %name, "detaching node");
        self.record(TraceOp::Detach, |e| {
            e.with_node(child).with_parent(parent).with_name(&name)
        });

        if self.nodes[parent].members.get(&name) == Some(&child) {
            self.synthesize(parent, &name);
        }
    }

    fn link(&mut self, parent: NodeId, name: &str, child: NodeId) {
        let current = &self.nodes[child];
        if current.parent == Some(parent) && current.name == name {
            return;
        }

        self.detach(child);

        let displaced = self.nodes[parent].members.insert(name.to_string(), child);
        if let Some(displaced) = displaced.filter(|&d| d != child) {
            let data = &mut self.nodes[displaced];
            data.parent = None;
            data.name.clear();
        }

        let data = &mut self.nodes[child];
        data.parent = Some(parent);
        data.name = name.to_string();

        tracing::debug!(?parent, ?child, name, "linked node");
        self.record(TraceOp::Link, |e| {
            e.with_node(child).with_parent(parent).with_name(name)
        });
    }

    fn reject(&mut self, node: NodeId, name: &str, reason: &str) {
        tracing::trace!(?node, name, reason, "write rejected");
        self.record(TraceOp::Reject, |e| {
            e.with_node(node).with_name(name).with_detail(reason)
        });
    }
}

impl TestIdTree for Engine {
    fn create(&mut self, options: Option<RootOptions>) -> TestId {
        if let Some(options) = options {
            let prefix = options.prefix.clone();
            let id = self.nodes.alloc(NodeData::root(options));

            tracing::debug!(?id, prefix = %prefix, "created root");
            self.record(TraceOp::Create, |e| e.with_node(id).with_detail(&prefix));
            return self.handle(id);
        }

        if let Some(pending) = self.observed.take() {
            tracing::debug!(?pending, "claimed last read node");
            self.record(TraceOp::Claim, |e| e.with_node(pending));
            return self.handle(pending);
        }

        let id = self.nodes.alloc(NodeData::default());
        self.record(TraceOp::Create, |e| e.with_node(id));
        self.handle(id)
    }

    fn get(&mut self, node: TestId, name: &str) -> Option<TestId> {
        let Some(id) = self.local(node) else {
            return production().get(node, name);
        };
        if names::is_reserved(name) {
            return None;
        }

        let existing = self.nodes[id].members.get(name).copied();
        let child = match existing {
            Some(child) => child,
            None => self.synthesize(id, name),
        };
        self.observed.observe(id, child);
        Some(self.handle(child))
    }

    fn set(&mut self, node: TestId, name: &str, value: Value) -> bool {
        let Some(id) = self.local(node) else {
            return production().set(node, name, value);
        };
        if names::is_reserved(name) {
            self.reject(id, name, "reserved name");
            return true;
        }

        let child = match &value {
            Value::Node(child) => self.local(*child),
            Value::Data(_) => None,
        };
        match child {
            Some(child) => self.link(id, name, child),
            None => self.reject(id, name, "not an identifier node"),
        }
        true
    }

    fn define(
        &mut self,
        node: TestId,
        name: &str,
        descriptor: Descriptor,
    ) -> Result<(), TestIdError> {
        if self.local(node).is_none() {
            return production().define(node, name, descriptor);
        }
        validate_descriptor(name, &descriptor)?;

        if let Some(value) = descriptor.value {
            self.set(node, name, value);
        }
        Ok(())
    }

    fn delete(&mut self, _node: TestId, _name: &str) -> bool {
        true
    }

    fn prevent_extensions(&mut self, _node: TestId) -> Result<(), TestIdError> {
        Err(TestIdError::NotExtensible)
    }

    fn has(&self, node: TestId, name: &str) -> bool {
        match self.local(node) {
            Some(id) => self.nodes[id].members.contains_key(name),
            None => production().has(node, name),
        }
    }

    fn peek(&self, node: TestId, name: &str) -> Option<TestId> {
        let id = self.local(node)?;
        let child = self.nodes[id].members.get(name).copied()?;
        Some(self.handle(child))
    }

    fn member_names(&self, node: TestId) -> Vec<String> {
        match self.local(node) {
            Some(id) => self.nodes[id].members.keys().cloned().collect(),
            None => Vec::new(),
        }
    }

    fn render(&self, node: TestId) -> String {
        match self.local(node) {
            Some(id) => render_path(&self.nodes, id),
            None => production().render(node),
        }
    }

    fn is_test_id(&self, value: &Value) -> bool {
        matches!(value, Value::Node(node) if self.local(*node).is_some())
    }
}
