use clap::Parser;
use testid_tree::cli::commands::{cmd_attributes, cmd_check, cmd_render};
use testid_tree::cli::config::{Cli, Commands, load_config, resolve_render_settings};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(cli.config.as_deref());

    match cli.command {
        Commands::Render {
            shape,
            production,
            erase,
            format,
            trace,
        } => {
            let settings = resolve_render_settings(
                &config,
                production,
                erase,
                format.as_deref(),
                trace.as_deref(),
            );
            cmd_render(&shape, &settings, cli.verbose)?;
        }
        Commands::Attributes {
            shape,
            member,
            extra,
            production,
        } => {
            cmd_attributes(
                &shape,
                &member,
                &extra,
                production || config.render.production,
                &config.attributes,
            )?;
        }
        Commands::Check { shape } => {
            if !cmd_check(&shape, cli.verbose)? {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
