#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::doc_markdown)]

mod commands;
mod logging;

use clap::Parser;
use miette::{IntoDiagnostic, Result, WrapErr};
use std::path::PathBuf;
use tspaths_core::Config;
use tspaths_util::Platform;

#[derive(Parser, Debug)]
#[command(name = "tspaths")]
#[command(author, version, about = "Resolve import specifiers through tsconfig paths and baseUrl", long_about = None)]
struct Cli {
    /// Increase logging verbosity (-v for DEBUG, -vv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit JSON formatted output (stable, machine-readable)
    #[arg(long, global = true)]
    json: bool,

    /// Override the working directory
    #[arg(long, global = true, value_name = "PATH")]
    cwd: Option<PathBuf>,

    /// Path convention: posix or windows (defaults to the host)
    #[arg(long, global = true, value_name = "PLATFORM", env = "TSPATHS_PLATFORM")]
    platform: Option<Platform>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Print version information
    Version,

    /// Resolve one or more specifiers
    Resolve {
        /// Specifiers to resolve (e.g., "@/components/Button")
        #[arg(required = true)]
        specifiers: Vec<String>,

        /// tsconfig/jsconfig file, or a directory containing one
        #[arg(long, short = 'p', value_name = "PATH")]
        project: Option<PathBuf>,

        /// Print resolved paths relative to the working directory
        #[arg(long)]
        relative: bool,
    },

    /// Show the compiled baseUrl and paths entries
    Mappings {
        /// tsconfig/jsconfig file, or a directory containing one
        #[arg(long, short = 'p', value_name = "PATH")]
        project: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Determine working directory. Resolved paths are anchored to it, so it
    // must be absolute.
    let cwd = match cli.cwd {
        Some(dir) => dunce::canonicalize(&dir)
            .into_diagnostic()
            .wrap_err_with(|| format!("Invalid --cwd {}", dir.display()))?,
        None => std::env::current_dir().into_diagnostic()?,
    };

    let config = Config::new(cwd.clone())
        .with_verbosity(cli.verbose)
        .with_json_logs(cli.json)
        .with_platform(cli.platform.unwrap_or_else(Platform::host));

    logging::init(config.verbosity, config.json_logs);

    match cli.command {
        Some(Commands::Version) | None => commands::version::run(cli.json),
        Some(Commands::Resolve {
            specifiers,
            project,
            relative,
        }) => {
            let span = tracing::info_span!("resolve", cmd = "resolve", cwd = %cwd.display());
            let _guard = span.enter();
            commands::resolve::run(&config, project.as_deref(), &specifiers, relative, cli.json)
        }
        Some(Commands::Mappings { project }) => {
            let span = tracing::info_span!("mappings", cmd = "mappings", cwd = %cwd.display());
            let _guard = span.enter();
            commands::mappings::run(&config, project.as_deref(), cli.json)
        }
    }
}
