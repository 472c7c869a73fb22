//! Hierarchical, dot-separated test identifiers for component trees.
//!
//! ```
//! use testid_tree::{Engine, TestIdTree, Value};
//!
//! let mut engine = Engine::new();
//! let app = engine.create_node("app");
//! let header = engine.create(None);
//! engine.set(app, "header", Value::Node(header));
//!
//! let text = engine.get(header, "text").unwrap();
//! assert_eq!(engine.render(text), "app.header.text");
//! ```

pub mod cli;
pub mod locator;
pub mod report;
pub mod schema;
pub mod trace;
pub mod tree;

pub use locator::locator::{AttributeNames, Attributes, to_attributes, to_attributes_with};
pub use tree::TestIdTree;
pub use tree::engine::Engine;
pub use tree::error::TestIdError;
pub use tree::production::{Production, create_production_node, production};
pub use tree::tree_model::{Descriptor, RootOptions, TestId, Value};
