use std::collections::HashSet;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::schema::error::SchemaError;
use crate::tree::names;
use crate::tree::tree_model::RootOptions;

// ============================================================================
// Shape data model
// ============================================================================

/// Members of one node, in declaration order.
///
/// ```yaml
/// main: article      # fragment reference
/// footer: ~          # leaf
/// aside:             # inline shape
///   title: ~
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Shape {
    pub members: IndexMap<String, Option<MemberShape>>,
}

/// What hangs below a non-leaf member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MemberShape {
    /// Name of a fragment declared under `fragments`
    Fragment(String),
    Inline(Shape),
}

impl Shape {
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether `name` is declared on this shape.
    pub fn declares(&self, name: &str) -> bool {
        self.members.contains_key(name)
    }
}

/// A complete shape file: root options, root shape and reusable fragments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeFile {
    pub root: RootOptions,

    #[serde(default)]
    pub shape: Shape,

    #[serde(default)]
    pub fragments: IndexMap<String, Shape>,
}

// ============================================================================
// Loading
// ============================================================================

impl ShapeFile {
    pub fn from_yaml(content: &str) -> Result<Self, SchemaError> {
        let file: ShapeFile = serde_yaml::from_str(content)?;
        file.validate()?;
        Ok(file)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| SchemaError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Resolve what lives below a member: leaves have an empty shape.
    pub fn resolve<'a>(
        &'a self,
        member: &'a Option<MemberShape>,
        path: &[String],
    ) -> Result<&'a Shape, SchemaError> {
        static EMPTY: std::sync::OnceLock<Shape> = std::sync::OnceLock::new();

        match member {
            None => Ok(EMPTY.get_or_init(Shape::default)),
            Some(MemberShape::Inline(shape)) => Ok(shape),
            Some(MemberShape::Fragment(fragment)) => {
                self.fragments
                    .get(fragment)
                    .ok_or_else(|| SchemaError::UnknownFragment {
                        fragment: fragment.clone(),
                        path: path.join("."),
                    })
            }
        }
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Check that every fragment reference resolves, no fragment contains
    /// itself and no member uses a reserved name.
    ///
    /// Each fragment is walked once, however many members refer to it.
    pub fn validate(&self) -> Result<(), SchemaError> {
        let mut walk = Validation::default();
        self.validate_shape(&self.shape, &mut walk)?;

        for (name, fragment) in &self.fragments {
            if walk.done.contains(name.as_str()) {
                continue;
            }
            walk.stack.push(name.as_str());
            self.validate_shape(fragment, &mut walk)?;
            walk.stack.pop();
            walk.done.insert(name.as_str());
        }
        Ok(())
    }

    fn validate_shape<'a>(
        &'a self,
        shape: &'a Shape,
        walk: &mut Validation<'a>,
    ) -> Result<(), SchemaError> {
        for (name, member) in &shape.members {
            walk.path.push(name.clone());

            if names::is_reserved(name) {
                return Err(SchemaError::ReservedName {
                    path: walk.path.join("."),
                });
            }

            let below = self.resolve(member, &walk.path)?;
            match member {
                Some(MemberShape::Fragment(fragment)) => {
                    let fragment = fragment.as_str();
                    if walk.stack.contains(&fragment) {
                        return Err(SchemaError::FragmentCycle {
                            fragment: fragment.to_string(),
                            path: walk.path.join("."),
                        });
                    }
                    if !walk.done.contains(fragment) {
                        walk.stack.push(fragment);
                        self.validate_shape(below, walk)?;
                        walk.stack.pop();
                        walk.done.insert(fragment);
                    }
                }
                _ => self.validate_shape(below, walk)?,
            }

            walk.path.pop();
        }
        Ok(())
    }
}

/// State of one validation pass.
#[derive(Default)]
struct Validation<'a> {
    /// Member names from the root down to the member being checked
    path: Vec<String>,

    /// Fragments currently being expanded
    stack: Vec<&'a str>,

    /// Fragments already known to be valid
    done: HashSet<&'a str>,
}

