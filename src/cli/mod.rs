//! CLI module for Typechart

mod args;

pub use args::{Args, Command, SourceArgs};

use crate::catalog::open_catalog;
use crate::config::Config;
use crate::error::Result;
use crate::logging::init_logging;
use crate::model::Scope;
use crate::output::{write_markdown, DiagramGenerator};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;

/// Run the CLI application
pub fn run() -> ExitCode {
    let args = Args::parse_args();

    match execute(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn execute(args: Args) -> Result<()> {
    match args.command {
        Command::Generate {
            source,
            output,
            stdout,
        } => {
            let cfg = prepare(&source, output)?;
            let scope = Scope::new(&source.namespace, &source.sub_scope);

            let provider = open_catalog(&source.source, &cfg.catalog)?;
            let diagram =
                DiagramGenerator::from_config(&cfg.diagram).generate(provider.as_ref(), &scope)?;

            if stdout {
                let mut out = std::io::stdout().lock();
                writeln!(out, "{}", diagram)?;
            } else {
                let path = write_markdown(&cfg.output.directory, &scope, &diagram)?;
                println!("Diagram written to: {}", path.display());
            }

            Ok(())
        }

        Command::List { source } => {
            let cfg = prepare(&source, None)?;
            let scope = Scope::new(&source.namespace, &source.sub_scope);

            let provider = open_catalog(&source.source, &cfg.catalog)?;
            let types = provider.list_types(&scope)?;

            let mut out = std::io::stdout().lock();
            for ty in &types {
                writeln!(out, "{} {}", ty.kind.as_str(), ty.name)?;
            }

            Ok(())
        }

        Command::Version => {
            println!("typechart {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Load config, merge CLI flags and start logging
fn prepare(source: &SourceArgs, output: Option<PathBuf>) -> Result<Config> {
    let mut cfg = match &source.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(Path::new("typechart.toml"))?,
    };

    cfg.merge_cli(
        output,
        source.format.clone(),
        source.log_level.clone(),
        source.log_format.clone(),
    )?;

    init_logging(cfg.logging.level.as_deref(), Some(&cfg.logging.format))?;
    debug!(?cfg, "Configuration resolved");

    Ok(cfg)
}
