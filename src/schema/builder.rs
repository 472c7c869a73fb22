use serde::Serialize;

use crate::schema::error::SchemaError;
use crate::schema::shape_model::{MemberShape, Shape, ShapeFile};
use crate::tree::TestIdTree;
use crate::tree::tree_model::{TestId, Value};

/// One identifier produced while building a tree from a shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identified {
    /// Member names from the root down to this node
    pub path: Vec<String>,

    #[serde(skip)]
    pub id: TestId,

    /// Rendered identifier at build time
    pub identifier: String,
}

/// Result of building a shape file into a tree.
#[derive(Debug, Clone)]
pub struct Built {
    pub root: TestId,

    /// Root first, then every member in declaration order
    pub identifiers: Vec<Identified>,
}

impl Built {
    /// Find the identifier at a dotted member path (`""` is the root).
    pub fn find(&self, dotted: &str) -> Option<&Identified> {
        self.identifiers.iter().find(|i| i.path.join(".") == dotted)
    }
}

// ============================================================================
// Building
// ============================================================================

/// Create the root described by `file` and grow every declared member.
///
/// Fragment members are attached the declare-after-use way: the member is
/// read first, then a label-less `create()` claims that placeholder and the
/// claimed node is assigned back before the fragment is grown below it.
pub fn build<T: TestIdTree + ?Sized>(tree: &mut T, file: &ShapeFile) -> Result<Built, SchemaError> {
    file.validate()?;

    let root = tree.create(Some(file.root.clone()));
    let mut identifiers = vec![Identified {
        path: Vec::new(),
        id: root,
        identifier: tree.render(root),
    }];

    let mut path = Vec::new();
    build_shape(tree, file, root, &file.shape, &mut path, &mut identifiers)?;

    tracing::debug!(
        prefix = %file.root.prefix,
        count = identifiers.len(),
        "built tree from shape"
    );
    Ok(Built { root, identifiers })
}

fn build_shape<T: TestIdTree + ?Sized>(
    tree: &mut T,
    file: &ShapeFile,
    node: TestId,
    shape: &Shape,
    path: &mut Vec<String>,
    out: &mut Vec<Identified>,
) -> Result<(), SchemaError> {
    for (name, member) in &shape.members {
        path.push(name.clone());

        let placeholder = tree.get(node, name).ok_or_else(|| SchemaError::ReservedName {
            path: path.join("."),
        })?;

        let child = match member {
            Some(MemberShape::Fragment(_)) => {
                let instance = tree.create(None);
                tree.set(node, name, Value::Node(instance));
                instance
            }
            _ => placeholder,
        };

        out.push(Identified {
            path: path.clone(),
            id: child,
            identifier: tree.render(child),
        });

        let below = file.resolve(member, path)?;
        build_shape(tree, file, child, below, path, out)?;

        path.pop();
    }
    Ok(())
}
