//! Lazily materialized identifier trees.
//!
//! A tree is grown by reading and writing named members of identifier nodes.
//! Reading an unset member synthesizes a placeholder child; writing a node
//! into a member links it there, detaching it from wherever it hung before.
//! A node renders to the dotted path from its root prefix down to itself.
//!
//! [`Engine`](engine::Engine) is the linking implementation;
//! [`Production`](production::Production) satisfies the same contract with a
//! single inert node that always renders empty.

pub mod engine;
pub mod error;
pub mod names;
pub mod observe;
pub mod production;
pub mod render;
pub mod tree_model;

use crate::tree::error::TestIdError;
use crate::tree::tree_model::{Descriptor, RootOptions, TestId, Value};

// ============================================================================
// TestIdTree trait — member access contract shared by both variants
// ============================================================================

/// Member access and rendering on identifier nodes.
///
/// Calling code written against this trait works unchanged whether it is
/// handed an [`Engine`](engine::Engine) or the [`Production`](production::Production) tree.
pub trait TestIdTree {
    /// Create a node. With options a fresh root is always allocated; without,
    /// the most recently read node may be claimed instead.
    fn create(&mut self, options: Option<RootOptions>) -> TestId;

    /// Read a member, synthesizing a placeholder when it is unset.
    /// Reserved names resolve to `None`.
    fn get(&mut self, node: TestId, name: &str) -> Option<TestId>;

    /// Write a member. Always reports success.
    fn set(&mut self, node: TestId, name: &str, value: Value) -> bool;

    /// Define a member from a descriptor.
    fn define(&mut self, node: TestId, name: &str, descriptor: Descriptor)
    -> Result<(), TestIdError>;

    /// Delete a member. Always reports success and removes nothing.
    fn delete(&mut self, node: TestId, name: &str) -> bool;

    /// Nodes stay extensible; this always fails.
    fn prevent_extensions(&mut self, node: TestId) -> Result<(), TestIdError>;

    /// Whether `name` is an own member of `node`.
    fn has(&self, node: TestId, name: &str) -> bool;

    /// Own member lookup without synthesizing or observing.
    fn peek(&self, node: TestId, name: &str) -> Option<TestId>;

    /// Own member names of `node`.
    fn member_names(&self, node: TestId) -> Vec<String>;

    /// Dotted path of `node`, or the empty string.
    fn render(&self, node: TestId) -> String;

    /// Whether `value` is an identifier node of this tree.
    fn is_test_id(&self, value: &Value) -> bool;

    /// Create a root carrying `options`.
    fn create_node(&mut self, options: impl Into<RootOptions>) -> TestId
    where
        Self: Sized,
    {
        self.create(Some(options.into()))
    }

    /// Read a chain of members, e.g. `["main", "header", "text"]`.
    fn get_path(&mut self, node: TestId, path: &[&str]) -> Option<TestId> {
        path.iter()
            .try_fold(node, |current, name| self.get(current, name))
    }

    /// Primitive value of a node; identical to [`render`](Self::render).
    fn value_of(&self, node: TestId) -> String {
        self.render(node)
    }
}

/// Descriptor requirements shared by every definition request.
pub(crate) fn validate_descriptor(name: &str, descriptor: &Descriptor) -> Result<(), TestIdError> {
    if descriptor.accessor {
        return Err(TestIdError::AccessorDescriptor {
            name: name.to_string(),
        });
    }
    if !descriptor.configurable {
        return Err(TestIdError::NotConfigurable {
            name: name.to_string(),
        });
    }
    if !descriptor.writable {
        return Err(TestIdError::NotWritable {
            name: name.to_string(),
        });
    }
    Ok(())
}
