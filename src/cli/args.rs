//! CLI argument parsing

use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// Generate Mermaid class diagrams from type catalogs
#[derive(Parser, Debug)]
#[command(name = "typechart")]
#[command(about = "Generate Mermaid class diagrams from type catalogs")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Where the catalog comes from and which part of it to draw
#[derive(ClapArgs, Debug, Clone)]
pub struct SourceArgs {
    /// JSON catalog file or directory of Java sources
    pub source: PathBuf,

    /// Root namespace (package) to draw from
    #[arg(short, long)]
    pub namespace: String,

    /// Sub-namespace under the root namespace
    #[arg(short, long, default_value = "Database.Entities")]
    pub sub_scope: String,

    /// Catalog format (auto, json, java)
    #[arg(long)]
    pub format: Option<String>,

    /// Config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (compact, pretty, json)
    #[arg(long)]
    pub log_format: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the class diagram for a namespace scope
    Generate {
        #[command(flatten)]
        source: SourceArgs,

        /// Output directory for the Markdown file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the diagram instead of writing a file
        #[arg(long)]
        stdout: bool,
    },

    /// List the types a catalog provides for a namespace scope
    List {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Show version information
    Version,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_defaults() {
        let args = Args::try_parse_from([
            "typechart",
            "generate",
            "./src",
            "--namespace",
            "com.zoo",
        ])
        .unwrap();
        match args.command {
            Command::Generate {
                source,
                output,
                stdout,
            } => {
                assert_eq!(source.source, PathBuf::from("./src"));
                assert_eq!(source.namespace, "com.zoo");
                assert_eq!(source.sub_scope, "Database.Entities");
                assert_eq!(source.format, None);
                assert_eq!(output, None);
                assert!(!stdout);
            }
            _ => panic!("Expected Generate command"),
        }
    }

    #[test]
    fn test_generate_with_options() {
        let args = Args::try_parse_from([
            "typechart",
            "generate",
            "catalog.json",
            "-n",
            "Shop",
            "-s",
            "Models",
            "--format",
            "json",
            "--config",
            "custom.toml",
            "--output",
            "/tmp/docs",
            "--log-level",
            "debug",
            "--log-format",
            "json",
            "--stdout",
        ])
        .unwrap();

        match args.command {
            Command::Generate {
                source,
                output,
                stdout,
            } => {
                assert_eq!(source.namespace, "Shop");
                assert_eq!(source.sub_scope, "Models");
                assert_eq!(source.format, Some("json".to_string()));
                assert_eq!(source.config, Some(PathBuf::from("custom.toml")));
                assert_eq!(source.log_level, Some("debug".to_string()));
                assert_eq!(source.log_format, Some("json".to_string()));
                assert_eq!(output, Some(PathBuf::from("/tmp/docs")));
                assert!(stdout);
            }
            _ => panic!("Expected Generate command"),
        }
    }

    #[test]
    fn test_generate_requires_namespace() {
        assert!(Args::try_parse_from(["typechart", "generate", "./src"]).is_err());
    }

    #[test]
    fn test_list_command() {
        let args = Args::try_parse_from([
            "typechart",
            "list",
            "./src",
            "-n",
            "com.zoo",
            "-s",
            "model",
        ])
        .unwrap();
        match args.command {
            Command::List { source } => {
                assert_eq!(source.namespace, "com.zoo");
                assert_eq!(source.sub_scope, "model");
            }
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_version_command() {
        let args = Args::try_parse_from(["typechart", "version"]).unwrap();
        assert!(matches!(args.command, Command::Version));
    }
}
