use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::tree::TestIdTree;
use crate::tree::tree_model::TestId;

// ============================================================================
// Attribute naming
// ============================================================================

/// Attribute names emitted for a rendered identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeNames {
    /// Attribute carrying the identifier path
    #[serde(default = "default_identifier")]
    pub identifier: String,

    /// Prefix prepended to every extra attribute key
    #[serde(default = "default_extra_prefix")]
    pub extra_prefix: String,
}

impl Default for AttributeNames {
    fn default() -> Self {
        Self {
            identifier: default_identifier(),
            extra_prefix: default_extra_prefix(),
        }
    }
}

impl AttributeNames {
    /// The `data-testid` / `data-test-*` naming used by DOM test tooling.
    pub fn data_test() -> Self {
        Self {
            identifier: "data-testid".to_string(),
            extra_prefix: "data-test-".to_string(),
        }
    }
}

fn default_identifier() -> String { "identifier".to_string() }
fn default_extra_prefix() -> String { "extra-".to_string() }

/// Ordered attribute map, identifier first.
pub type Attributes = IndexMap<String, String>;

// ============================================================================
// Attribute rendering
// ============================================================================

/// Render `node` into element attributes.
///
/// Returns `None` when the identifier renders empty, so nothing is emitted.
pub fn to_attributes<T: TestIdTree + ?Sized>(
    tree: &T,
    node: TestId,
    extra: &[(&str, &str)],
) -> Option<Attributes> {
    to_attributes_with(tree, node, extra, &AttributeNames::default())
}

/// [`to_attributes`] with custom attribute names.
pub fn to_attributes_with<T: TestIdTree + ?Sized>(
    tree: &T,
    node: TestId,
    extra: &[(&str, &str)],
    names: &AttributeNames,
) -> Option<Attributes> {
    let path = tree.render(node);
    if path.is_empty() {
        return None;
    }

    let mut attributes = Attributes::with_capacity(extra.len() + 1);
    attributes.insert(names.identifier.clone(), path);
    for (key, value) in extra {
        attributes.insert(format!("{}{}", names.extra_prefix, key), value.to_string());
    }
    Some(attributes)
}

/// Parse a `key=value` pair as given on the command line.
pub fn parse_extra(pair: &str) -> Option<(String, String)> {
    let (key, value) = pair.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key.to_string(), value.to_string()))
}
