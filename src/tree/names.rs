/// Names provided by the base object protocol. They resolve to built-ins and
/// never become child identifiers.
pub const PROTOTYPE_NAMES: &[&str] = &[
    "constructor",
    "hasOwnProperty",
    "isPrototypeOf",
    "propertyIsEnumerable",
    "toLocaleString",
    "toString",
    "valueOf",
    "__proto__",
    "__defineGetter__",
    "__defineSetter__",
    "__lookupGetter__",
    "__lookupSetter__",
];

/// Serialization hook name.
pub const SERIALIZATION_HOOK: &str = "toJSON";

/// Whether `name` may never be read or written as a child identifier.
pub fn is_reserved(name: &str) -> bool {
    name == SERIALIZATION_HOOK || PROTOTYPE_NAMES.contains(&name)
}
