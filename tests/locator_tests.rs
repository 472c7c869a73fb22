use testid_tree::locator::locator::parse_extra;
use testid_tree::{AttributeNames, Engine, TestIdTree, to_attributes, to_attributes_with};

// =========================================================================
// to_attributes
// =========================================================================

#[test]
fn root_and_leaf_attributes() {
    let mut engine = Engine::new();
    let root = engine.create_node("root");
    let leaf = engine.get(root, "leaf").unwrap();

    let attributes = to_attributes(&engine, root, &[]).unwrap();
    assert_eq!(attributes.len(), 1);
    assert_eq!(attributes["identifier"], "root");

    let attributes = to_attributes(&engine, leaf, &[]).unwrap();
    assert_eq!(attributes["identifier"], "root.leaf");
}

#[test]
fn extra_attributes_are_prefixed_and_follow_the_identifier() {
    let mut engine = Engine::new();
    let root = engine.create_node("root");

    let attributes = to_attributes(&engine, root, &[("property", "foo"), ("index", "2")]).unwrap();

    assert_eq!(
        serde_json::to_string(&attributes).unwrap(),
        r#"{"identifier":"root","extra-property":"foo","extra-index":"2"}"#
    );
}

#[test]
fn data_test_attribute_names() {
    let mut engine = Engine::new();
    let root = engine.create_node("root");
    let names = AttributeNames::data_test();

    let attributes = to_attributes_with(&engine, root, &[("property", "foo")], &names).unwrap();

    assert_eq!(attributes["data-testid"], "root");
    assert_eq!(attributes["data-test-property"], "foo");
}

#[test]
fn empty_identifier_emits_nothing() {
    let mut engine = Engine::new();
    let label = engine.create(None);

    assert_eq!(to_attributes(&engine, label, &[("property", "foo")]), None);
}

#[test]
fn components_label_their_own_children() {
    let mut engine = Engine::new();
    let app = engine.create_node("app");

    // The page reads `app.header` before the header component declares its id.
    engine.get(app, "header");
    let header = engine.create(None);
    engine.set(app, "header", header.into());

    let foo = engine.get(header, "foo").unwrap();
    let bar = engine.get(header, "bar").unwrap();

    assert_eq!(to_attributes(&engine, header, &[]).unwrap()["identifier"], "app.header");
    assert_eq!(to_attributes(&engine, foo, &[]).unwrap()["identifier"], "app.header.foo");
    assert_eq!(to_attributes(&engine, bar, &[]).unwrap()["identifier"], "app.header.bar");
}

// =========================================================================
// Attribute names and parsing
// =========================================================================

#[test]
fn attribute_names_deserialize_with_defaults() {
    let names: AttributeNames = serde_yaml::from_str("identifier: data-testid\n").unwrap();
    assert_eq!(names.identifier, "data-testid");
    assert_eq!(names.extra_prefix, "extra-", "Missing field falls back to default");
}

#[test]
fn parse_extra_pairs() {
    assert_eq!(parse_extra("property=foo"), Some(("property".into(), "foo".into())));
    assert_eq!(parse_extra("key=a=b"), Some(("key".into(), "a=b".into())), "Splits on first '='");
    assert_eq!(parse_extra("empty="), Some(("empty".into(), "".into())));
    assert_eq!(parse_extra("=value"), None, "Key is required");
    assert_eq!(parse_extra("novalue"), None);
}
