use std::{fs, path::PathBuf};

use clap::{Args, Parser, Subcommand};
use dioxus::logger::tracing::{debug, info};

use companion_nav::{
    components::render_nav_html,
    nav::{build_nav, deduce_active_id, ConfigError, NavConfig, StaticEnvironment},
};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Could not write output file! {0}")]
    CouldNotWriteOutput(String),
}

/// Pre-renders the companion nav bar for static pages.
#[derive(Debug, Parser)]
#[command(name = "companion-nav", version, about)]
pub struct Cli {
    /// Log at debug level.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the nav bar markup for a page.
    Render(RenderArgs),
    /// Validate a nav config file.
    Check {
        config: PathBuf,
    },
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Path of the page the markup is for.
    #[arg(long, default_value = "/")]
    pub path: String,

    /// Explicit page id, as in `<html data-page="...">`.
    #[arg(long)]
    pub page: Option<String>,

    /// JSON nav config to use instead of the built-in entries.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write markup here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

fn load_config(path: Option<&PathBuf>) -> Result<NavConfig, ConfigError> {
    match path {
        Some(path) => {
            debug!("Loading nav config from {}", path.display());
            NavConfig::read_from_file(path)
        }
        None => Ok(NavConfig::global().clone()),
    }
}

pub fn render(args: &RenderArgs) -> Result<String, CliError> {
    let config = load_config(args.config.as_ref())?;
    let env = StaticEnvironment::new(args.path.clone(), args.page.clone());
    let active_id = deduce_active_id(&config, &env);
    Ok(render_nav_html(build_nav(&config, active_id.as_deref())))
}

pub fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Render(args) => {
            let html = render(&args)?;
            match args.output {
                Some(output) => {
                    fs::write(&output, html)
                        .map_err(|err| CliError::CouldNotWriteOutput(err.to_string()))?;
                    info!("Wrote nav markup to {}", output.display());
                }
                None => println!("{html}"),
            }
        }
        Command::Check { config } => {
            let config = NavConfig::read_from_file(&config)?;
            println!("ok: {} entries", config.entries().len());
        }
    }
    Ok(())
}
