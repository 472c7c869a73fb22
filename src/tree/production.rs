use crate::tree::{TestIdTree, validate_descriptor};
use crate::tree::error::TestIdError;
use crate::tree::names;
use crate::tree::tree_model::{Descriptor, RootOptions, TestId, Value};

// ============================================================================
// Production tree — one inert node, no allocation, no linking
// ============================================================================

/// Identifier tree for optimized builds.
///
/// Every node is the same inert node: reading any member returns it, writes
/// are accepted and dropped, and everything renders to the empty string.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Production;

static PRODUCTION: Production = Production;

/// The shared production tree.
pub fn production() -> &'static Production {
    &PRODUCTION
}

/// The production node. Every call returns the same handle.
pub fn create_production_node() -> TestId {
    TestId::Inert
}

impl Production {
    /// Root options are accepted and ignored.
    pub fn create(&self, _options: Option<RootOptions>) -> TestId {
        TestId::Inert
    }

    pub fn get(&self, _node: TestId, name: &str) -> Option<TestId> {
        if names::is_reserved(name) {
            return None;
        }
        Some(TestId::Inert)
    }

    pub fn set(&self, _node: TestId, name: &str, value: Value) -> bool {
        if let Value::Node(TestId::Node(_, id)) = value {
            tracing::trace!(?id, name, "dropping linked node written into production tree");
        }
        true
    }

    pub fn define(&self, node: TestId, name: &str, descriptor: Descriptor) -> Result<(), TestIdError> {
        validate_descriptor(name, &descriptor)?;

        if let Some(value) = descriptor.value {
            self.set(node, name, value);
        }
        Ok(())
    }

    pub fn delete(&self, _node: TestId, _name: &str) -> bool {
        true
    }

    pub fn prevent_extensions(&self, _node: TestId) -> Result<(), TestIdError> {
        Err(TestIdError::NotExtensible)
    }

    /// Every non-reserved member exists: reading it yields the inert node.
    pub fn has(&self, _node: TestId, name: &str) -> bool {
        !names::is_reserved(name)
    }

    pub fn peek(&self, _node: TestId, _name: &str) -> Option<TestId> {
        None
    }

    pub fn render(&self, _node: TestId) -> String {
        String::new()
    }

    pub fn is_test_id(&self, value: &Value) -> bool {
        matches!(value, Value::Node(TestId::Inert))
    }
}

impl TestIdTree for Production {
    fn create(&mut self, options: Option<RootOptions>) -> TestId {
        Production::create(self, options)
    }

    fn get(&mut self, node: TestId, name: &str) -> Option<TestId> {
        Production::get(self, node, name)
    }

    fn set(&mut self, node: TestId, name: &str, value: Value) -> bool {
        Production::set(self, node, name, value)
    }

    fn define(
        &mut self,
        node: TestId,
        name: &str,
        descriptor: Descriptor,
    ) -> Result<(), TestIdError> {
        Production::define(self, node, name, descriptor)
    }

    fn delete(&mut self, node: TestId, name: &str) -> bool {
        Production::delete(self, node, name)
    }

    fn prevent_extensions(&mut self, node: TestId) -> Result<(), TestIdError> {
        Production::prevent_extensions(self, node)
    }

    fn has(&self, node: TestId, name: &str) -> bool {
        Production::has(self, node, name)
    }

    fn peek(&self, node: TestId, name: &str) -> Option<TestId> {
        Production::peek(self, node, name)
    }

    fn member_names(&self, _node: TestId) -> Vec<String> {
        Vec::new()
    }

    fn render(&self, node: TestId) -> String {
        Production::render(self, node)
    }

    fn is_test_id(&self, value: &Value) -> bool {
        Production::is_test_id(self, value)
    }
}
