use crate::schema::builder::Identified;
use crate::schema::check::ShapeViolation;

// ============================================================================
// Console reporter — identifier listings for the terminal
// ============================================================================

/// Format built identifiers, one per line, indented by depth.
///
/// Produces output like:
/// ```text
/// app
///   app.main
///     app.main.header
///   app.footer
///
/// 4 identifiers
/// ```
///
/// Members that render empty are listed by member path in brackets.
pub fn format_identifiers(identifiers: &[Identified]) -> String {
    let mut out = String::new();

    for identified in identifiers {
        let indent = "  ".repeat(identified.path.len());
        if identified.identifier.is_empty() {
            out.push_str(&format!("{}[{}]\n", indent, display_path(&identified.path)));
        } else {
            out.push_str(&format!("{}{}\n", indent, identified.identifier));
        }
    }

    let empty = identifiers.iter().filter(|i| i.identifier.is_empty()).count();
    out.push_str(&format!("\n{} identifiers", identifiers.len()));
    if empty > 0 {
        out.push_str(&format!(" ({} empty)", empty));
    }
    out.push('\n');
    out
}

/// Format shape violations, or a confirmation line when there are none.
pub fn format_violations(violations: &[ShapeViolation]) -> String {
    if violations.is_empty() {
        return "\u{2713} tree matches its shape\n".to_string();
    }

    let mut out = String::new();
    for violation in violations {
        out.push_str(&format!("\u{2717} {}\n", violation));
    }
    out.push_str(&format!("\n{} violations\n", violations.len()));
    out
}

fn display_path(path: &[String]) -> String {
    if path.is_empty() {
        "<root>".to_string()
    } else {
        path.join(".")
    }
}
