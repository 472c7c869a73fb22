mod common;

use common::utils::{APP_SHAPE, write_fixture};
use testid_tree::schema::builder::build;
use testid_tree::schema::check::check;
use testid_tree::schema::error::SchemaError;
use testid_tree::schema::shape_model::{MemberShape, ShapeFile};
use testid_tree::{Engine, Production, TestId, TestIdTree, Value};

fn identifiers(file: &ShapeFile) -> Vec<String> {
    let mut engine = Engine::new();
    build(&mut engine, file)
        .unwrap()
        .identifiers
        .into_iter()
        .map(|i| i.identifier)
        .collect()
}

// =========================================================================
// Parsing
// =========================================================================

#[test]
fn parse_shape_file_members_and_fragments() {
    let file = ShapeFile::from_yaml(APP_SHAPE).unwrap();

    assert_eq!(file.root.prefix, "app");
    assert!(!file.root.erase_to_empty_string);
    assert_eq!(
        file.shape.members["main"],
        Some(MemberShape::Fragment("article".into()))
    );
    assert_eq!(file.shape.members["footer"], None);
    assert_eq!(file.fragments.len(), 2);
    assert!(file.fragments["header"].declares("text"));
}

#[test]
fn parse_root_options_mapping_and_inline_shapes() {
    let file = ShapeFile::from_yaml(
        r#"
root:
  prefix: app
  eraseToEmptyString: true
shape:
  aside:
    title: ~
"#,
    )
    .unwrap();

    assert_eq!(file.root.prefix, "app");
    assert!(file.root.erase_to_empty_string);
    assert!(matches!(file.shape.members["aside"], Some(MemberShape::Inline(_))));
}

#[test]
fn load_reads_from_disk() {
    let path = write_fixture("schema-load.yaml", APP_SHAPE);
    let file = ShapeFile::load(&path).unwrap();
    assert_eq!(file.root.prefix, "app");
}

#[test]
fn load_reports_missing_file() {
    let err = ShapeFile::load("/nonexistent/shape.yaml").unwrap_err();
    assert!(matches!(err, SchemaError::Io { .. }));
}

// =========================================================================
// Validation
// =========================================================================

#[test]
fn unknown_fragment_is_rejected() {
    let err = ShapeFile::from_yaml("root: app\nshape:\n  main: missing\n").unwrap_err();
    match err {
        SchemaError::UnknownFragment { fragment, path } => {
            assert_eq!(fragment, "missing");
            assert_eq!(path, "main");
        }
        other => panic!("Expected UnknownFragment, got {:?}", other),
    }
}

#[test]
fn self_containing_fragment_is_rejected() {
    let yaml = r#"
root: app
shape:
  list: item
fragments:
  item:
    child: node
  node:
    next: item
"#;
    let err = ShapeFile::from_yaml(yaml).unwrap_err();
    assert!(matches!(err, SchemaError::FragmentCycle { .. }), "{:?}", err);
}

#[test]
fn reserved_member_names_are_rejected() {
    let err = ShapeFile::from_yaml("root: app\nshape:\n  main:\n    toString: ~\n").unwrap_err();
    match err {
        SchemaError::ReservedName { path } => assert_eq!(path, "main.toString"),
        other => panic!("Expected ReservedName, got {:?}", other),
    }
}

#[test]
fn shared_fragments_are_validated_once() {
    let mut yaml = String::from("root: app\nshape:\n  top: level0\nfragments:\n");
    for level in 0..40 {
        yaml.push_str(&format!(
            "  level{level}:\n    left: level{next}\n    right: level{next}\n",
            next = level + 1
        ));
    }
    yaml.push_str("  level40:\n    leaf: ~\n");

    // 2^40 paths reach the last fragment; validation must not walk each one.
    let file = ShapeFile::from_yaml(&yaml).unwrap();
    assert_eq!(file.fragments.len(), 41);
}

#[test]
fn cycle_below_a_shared_fragment_is_still_found() {
    let yaml = r#"
root: app
shape:
  first: shared
  second: shared
fragments:
  shared:
    inner: loop
  loop:
    back: shared
"#;
    let err = ShapeFile::from_yaml(yaml).unwrap_err();
    assert!(matches!(err, SchemaError::FragmentCycle { .. }), "{:?}", err);
}

#[test]
fn malformed_yaml_is_a_yaml_error() {
    let err = ShapeFile::from_yaml("root: [unterminated").unwrap_err();
    assert!(matches!(err, SchemaError::Yaml(_)));
}

// =========================================================================
// Building
// =========================================================================

#[test]
fn build_renders_every_member_in_declaration_order() {
    let file = ShapeFile::from_yaml(APP_SHAPE).unwrap();

    assert_eq!(
        identifiers(&file),
        vec![
            "app",
            "app.main",
            "app.main.header",
            "app.main.header.text",
            "app.main.secondHeader",
            "app.main.secondHeader.text",
            "app.footer",
        ]
    );
}

#[test]
fn fragment_instances_are_claimed_placeholders() {
    let file = ShapeFile::from_yaml(APP_SHAPE).unwrap();
    let mut engine = Engine::new();
    let built = build(&mut engine, &file).unwrap();

    let header = built.find("main.header").unwrap().id;
    let second = built.find("main.secondHeader").unwrap().id;
    assert_ne!(header, second, "Each use of a fragment is its own node");

    let main = engine.peek(built.root, "main").unwrap();
    assert_eq!(engine.peek(main, "header"), Some(header));
    assert_eq!(engine.parent_of(header), Some(main));
}

#[test]
fn built_tree_keeps_growing_lazily() {
    let file = ShapeFile::from_yaml(APP_SHAPE).unwrap();
    let mut engine = Engine::new();
    let built = build(&mut engine, &file).unwrap();

    let extra = engine.get_path(built.root, &["main", "header", "icon"]).unwrap();
    assert_eq!(engine.render(extra), "app.main.header.icon");
}

#[test]
fn erased_shape_builds_structure_without_identifiers() {
    let mut file = ShapeFile::from_yaml(APP_SHAPE).unwrap();
    file.root.erase_to_empty_string = true;

    let rendered = identifiers(&file);
    assert_eq!(rendered.len(), 7);
    assert!(rendered.iter().all(String::is_empty));
}

#[test]
fn production_build_is_all_inert() {
    let file = ShapeFile::from_yaml(APP_SHAPE).unwrap();
    let built = build(&mut Production, &file).unwrap();

    assert_eq!(built.root, TestId::Inert);
    assert_eq!(built.identifiers.len(), 7);
    assert!(built.identifiers.iter().all(|i| i.id == TestId::Inert && i.identifier.is_empty()));
}

// =========================================================================
// Shape checking
// =========================================================================

#[test]
fn built_tree_matches_its_shape() {
    let file = ShapeFile::from_yaml(APP_SHAPE).unwrap();
    let mut engine = Engine::new();
    let built = build(&mut engine, &file).unwrap();

    assert!(check(&engine, built.root, &file, &file.shape).is_empty());
}

#[test]
fn undeclared_members_are_reported() {
    let file = ShapeFile::from_yaml(APP_SHAPE).unwrap();
    let mut engine = Engine::new();
    let built = build(&mut engine, &file).unwrap();

    engine.get_path(built.root, &["main", "header", "icon"]);
    let stray = engine.create_node("stray");
    engine.set(built.root, "sidebar", Value::Node(stray));

    let violations = check(&engine, built.root, &file, &file.shape);
    let paths: Vec<String> = violations.iter().map(|v| v.path.join(".")).collect();

    assert_eq!(paths, vec!["main.header.icon", "sidebar"]);
    assert_eq!(violations[1].to_string(), "undeclared member 'sidebar'");
}
