use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::locator::locator::AttributeNames;

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "testid",
    version,
    about = "Hierarchical test identifiers for component trees"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: testid.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a tree from a shape file and print every identifier
    Render {
        /// Path to the shape YAML file
        #[arg(long)]
        shape: String,

        /// Use the inert production tree
        #[arg(long)]
        production: bool,

        /// Keep the tree but render every identifier empty
        #[arg(long)]
        erase: bool,

        /// Output format: console, json
        #[arg(long)]
        format: Option<String>,

        /// Append engine operations as JSONL to this file
        #[arg(long)]
        trace: Option<String>,
    },

    /// Print the element attributes of one member
    Attributes {
        /// Path to the shape YAML file
        #[arg(long)]
        shape: String,

        /// Dotted member path below the root (empty for the root itself)
        #[arg(long, default_value = "")]
        member: String,

        /// Extra attribute as key=value (repeatable)
        #[arg(long = "extra", value_name = "KEY=VALUE")]
        extra: Vec<String>,

        /// Use the inert production tree
        #[arg(long)]
        production: bool,
    },

    /// Validate a shape file and the tree built from it
    Check {
        /// Path to the shape YAML file
        #[arg(long)]
        shape: String,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `testid.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub attributes: AttributeNames,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub trace: TraceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default)]
    pub production: bool,

    #[serde(default)]
    pub erase: bool,

    #[serde(default = "default_console")]
    pub format: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            production: false,
            erase: false,
            format: "console".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TraceConfig {
    pub path: Option<String>,
}

fn default_console() -> String { "console".to_string() }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("testid.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!(path = config_path, error = %e, "ignoring malformed config file");
            AppConfig::default()
        }),
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Resolved render settings (CLI > config > defaults)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSettings {
    pub production: bool,
    pub erase: bool,
    pub format: String,
    pub trace: Option<String>,
}

/// Merge render flags with the config file. Flags can only switch options on.
pub fn resolve_render_settings(
    config: &AppConfig,
    production: bool,
    erase: bool,
    format: Option<&str>,
    trace: Option<&str>,
) -> RenderSettings {
    RenderSettings {
        production: production || config.render.production,
        erase: erase || config.render.erase,
        format: format.unwrap_or(&config.render.format).to_string(),
        trace: trace.map(str::to_string).or_else(|| config.trace.path.clone()),
    }
}
