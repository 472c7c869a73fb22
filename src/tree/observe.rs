use crate::tree::tree_model::NodeId;

/// Two-slot record of the most recently read nodes.
///
/// Reads are grouped into chains: a read on the current node continues the
/// chain, any other read starts a new one. `current` is the end of the
/// running chain and `previous` the end of the chain before it. A label-less
/// `create()` claims `current` and falls back to `previous`, so
///
/// ```text
/// app.main.secondHeader; app.main.header;
/// create() -> header
/// create() -> secondHeader
/// ```
#[derive(Debug, Default)]
pub struct Observed {
    current: Option<NodeId>,
    previous: Option<NodeId>,
}

impl Observed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that reading member of `parent` resolved to `child`.
    pub fn observe(&mut self, parent: NodeId, child: NodeId) {
        if self.current == Some(child) {
            return;
        }
        if self.current != Some(parent) {
            self.previous = self.current;
        }
        self.current = Some(child);
    }

    /// Take the current node; the previous chain becomes current.
    pub fn take(&mut self) -> Option<NodeId> {
        let claimed = self.current.take()?;
        self.current = self.previous.take().filter(|&id| id != claimed);
        Some(claimed)
    }

    pub fn current(&self) -> Option<NodeId> {
        self.current
    }

    pub fn previous(&self) -> Option<NodeId> {
        self.previous
    }
}
