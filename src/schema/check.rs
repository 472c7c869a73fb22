use std::fmt;

use crate::schema::shape_model::{Shape, ShapeFile};
use crate::tree::TestIdTree;
use crate::tree::tree_model::TestId;

/// A member present in the tree but absent from its declared shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeViolation {
    pub path: Vec<String>,
}

impl fmt::Display for ShapeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "undeclared member '{}'", self.path.join("."))
    }
}

/// Compare the members actually present below `node` with `shape`.
///
/// Only own members are inspected, so checking never grows the tree.
/// Members whose fragment cannot be resolved are checked against an empty
/// shape.
pub fn check<T: TestIdTree + ?Sized>(
    tree: &T,
    node: TestId,
    file: &ShapeFile,
    shape: &Shape,
) -> Vec<ShapeViolation> {
    let mut violations = Vec::new();
    let mut path = Vec::new();
    check_node(tree, node, file, shape, &mut path, &mut violations);
    violations
}

fn check_node<T: TestIdTree + ?Sized>(
    tree: &T,
    node: TestId,
    file: &ShapeFile,
    shape: &Shape,
    path: &mut Vec<String>,
    violations: &mut Vec<ShapeViolation>,
) {
    for name in tree.member_names(node) {
        path.push(name.clone());

        match shape.members.get(&name) {
            None => violations.push(ShapeViolation { path: path.clone() }),
            Some(member) => {
                if let Some(child) = tree.peek(node, &name) {
                    let unresolved = Shape::default();
                    let below = file.resolve(member, path).unwrap_or(&unresolved);
                    check_node(tree, child, file, below, path, violations);
                }
            }
        }

        path.pop();
    }
}
