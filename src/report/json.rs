use serde::Serialize;

use crate::locator::locator::Attributes;
use crate::schema::builder::Identified;

#[derive(Debug, Serialize)]
struct IdentifierEntry<'a> {
    path: String,
    identifier: &'a str,
}

/// Serialize identifiers as a JSON array of `{path, identifier}` objects.
pub fn identifiers_to_json(identifiers: &[Identified]) -> Result<String, serde_json::Error> {
    let entries: Vec<IdentifierEntry<'_>> = identifiers
        .iter()
        .map(|i| IdentifierEntry {
            path: i.path.join("."),
            identifier: &i.identifier,
        })
        .collect();
    serde_json::to_string_pretty(&entries)
}

/// Serialize one attribute map; `None` yields an empty string.
pub fn attributes_to_json(attributes: Option<&Attributes>) -> Result<String, serde_json::Error> {
    match attributes {
        Some(attributes) => serde_json::to_string_pretty(attributes),
        None => Ok(String::new()),
    }
}
