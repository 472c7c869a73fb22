use crate::cli::config::RenderSettings;
use crate::locator::locator::{AttributeNames, Attributes, parse_extra, to_attributes_with};
use crate::report::console::{format_identifiers, format_violations};
use crate::report::json::{attributes_to_json, identifiers_to_json};
use crate::schema::builder::build;
use crate::schema::check::{ShapeViolation, check};
use crate::schema::shape_model::ShapeFile;
use crate::trace::logger::TraceLogger;
use crate::tree::TestIdTree;
use crate::tree::engine::Engine;
use crate::tree::production::Production;

// ============================================================================
// render subcommand
// ============================================================================

pub fn cmd_render(
    shape: &str,
    settings: &RenderSettings,
    verbose: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = ShapeFile::load(shape)?;
    if verbose > 0 {
        eprintln!("Rendering shape '{}' (root '{}')", shape, file.root.prefix);
    }

    print!("{}", render_output(&file, settings)?);
    Ok(())
}

/// Build `file` and format its identifiers in the requested format.
pub fn render_output(
    file: &ShapeFile,
    settings: &RenderSettings,
) -> Result<String, Box<dyn std::error::Error>> {
    let mut file = file.clone();
    file.root.erase_to_empty_string |= settings.erase;

    let mut tree = open_tree(settings.production, settings.trace.as_deref());
    let built = build(tree.as_mut(), &file)?;

    let output = match settings.format.as_str() {
        "json" => {
            let mut json = identifiers_to_json(&built.identifiers)?;
            json.push('\n');
            json
        }
        _ => format_identifiers(&built.identifiers),
    };
    Ok(output)
}

// ============================================================================
// attributes subcommand
// ============================================================================

pub fn cmd_attributes(
    shape: &str,
    member: &str,
    extra: &[String],
    production: bool,
    names: &AttributeNames,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = ShapeFile::load(shape)?;
    let attributes = member_attributes(&file, member, extra, production, names)?;

    let json = attributes_to_json(attributes.as_ref())?;
    if !json.is_empty() {
        println!("{}", json);
    }
    Ok(())
}

/// Attributes of the member at dotted path `member`.
///
/// Members need not be declared in the shape; unknown members are
/// synthesized on read like any other.
pub fn member_attributes(
    file: &ShapeFile,
    member: &str,
    extra: &[String],
    production: bool,
    names: &AttributeNames,
) -> Result<Option<Attributes>, Box<dyn std::error::Error>> {
    let extra = extra
        .iter()
        .map(|pair| {
            parse_extra(pair)
                .ok_or_else(|| format!("invalid extra attribute '{}', expected KEY=VALUE", pair))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let extra: Vec<(&str, &str)> = extra.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();

    let mut tree = open_tree(production, None);
    let built = build(tree.as_mut(), file)?;

    let segments: Vec<&str> = member.split('.').filter(|s| !s.is_empty()).collect();
    let node = tree
        .get_path(built.root, &segments)
        .ok_or_else(|| format!("member '{}' uses a reserved name", member))?;

    Ok(to_attributes_with(tree.as_ref(), node, &extra, names))
}

// ============================================================================
// check subcommand
// ============================================================================

/// Returns whether the shape is valid and the built tree matches it.
pub fn cmd_check(shape: &str, verbose: u8) -> Result<bool, Box<dyn std::error::Error>> {
    let file = ShapeFile::load(shape)?;
    let violations = check_shape(&file)?;

    if verbose > 0 {
        eprintln!("Checked shape '{}'", shape);
    }
    print!("{}", format_violations(&violations));
    Ok(violations.is_empty())
}

/// Build `file` into a fresh engine and compare the result with its shape.
pub fn check_shape(file: &ShapeFile) -> Result<Vec<ShapeViolation>, Box<dyn std::error::Error>> {
    let mut engine = Engine::new();
    let built = build(&mut engine, file)?;
    Ok(check(&engine, built.root, file, &file.shape))
}

// ============================================================================
// Helpers
// ============================================================================

/// The linking engine, or the inert production tree.
fn open_tree(production: bool, trace: Option<&str>) -> Box<dyn TestIdTree> {
    if production {
        return Box::new(Production);
    }

    let engine = Engine::new();
    match trace {
        Some(path) => Box::new(engine.with_tracer(TraceLogger::new(path))),
        None => Box::new(engine),
    }
}
