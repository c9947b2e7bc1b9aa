use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub diagram: DiagramConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

/// Catalog source settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub format: CatalogFormat,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

/// Diagram settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramConfig {
    pub collection_types: Vec<String>,
    pub root_types: Vec<String>,
    pub direction: String,
    pub entities_marker: String,
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub directory: PathBuf,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Unset defers to `TYPECHART_LOG_LEVEL` / `RUST_LOG`
    pub level: Option<String>,
    pub format: String,
}

/// Where a catalog comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CatalogFormat {
    /// JSON for `.json` files, Java sources for directories
    #[default]
    Auto,
    Json,
    Java,
}

impl CatalogFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Some(CatalogFormat::Auto),
            "json" => Some(CatalogFormat::Json),
            "java" => Some(CatalogFormat::Java),
            _ => None,
        }
    }
}

const DIRECTIONS: [&str; 5] = ["TB", "TD", "BT", "LR", "RL"];

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            format: CatalogFormat::default(),
            include: vec!["**/*.java".to_string()],
            exclude: vec![
                "target/**".to_string(),
                "build/**".to_string(),
                "out/**".to_string(),
                ".git/**".to_string(),
                "src/test/**".to_string(),
                "**/src/test/**".to_string(),
            ],
        }
    }
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            collection_types: [
                "ICollection",
                "IList",
                "IEnumerable",
                "ISet",
                "List",
                "HashSet",
                "Collection",
                "Set",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            root_types: ["Object", "object", "System.Object", "java.lang.Object"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            direction: "RL".to_string(),
            entities_marker: "Entities".to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: None,
            format: "compact".to_string(),
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from file, defaults if the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Merge CLI arguments into config (CLI takes precedence)
    pub fn merge_cli(
        &mut self,
        output: Option<PathBuf>,
        format: Option<String>,
        log_level: Option<String>,
        log_format: Option<String>,
    ) -> Result<()> {
        if let Some(out) = output {
            self.output.directory = out;
        }

        if let Some(fmt) = format {
            self.catalog.format = CatalogFormat::parse(&fmt).ok_or_else(|| {
                Error::config_validation(format!("unknown catalog format: {}", fmt))
            })?;
        }

        if log_level.is_some() {
            self.logging.level = log_level;
        }

        if let Some(fmt) = log_format {
            self.logging.format = fmt;
        }

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.diagram.collection_types.is_empty() {
            return Err(Error::config_validation("at least one collection type required"));
        }

        if self.diagram.root_types.is_empty() {
            return Err(Error::config_validation("at least one root type required"));
        }

        if !DIRECTIONS.contains(&self.diagram.direction.as_str()) {
            return Err(Error::config_validation(format!(
                "direction must be one of {}",
                DIRECTIONS.join(", ")
            )));
        }

        if self.diagram.entities_marker.is_empty() {
            return Err(Error::config_validation("entities_marker cannot be empty"));
        }

        if self.catalog.include.is_empty() {
            return Err(Error::config_validation("at least one include pattern required"));
        }

        Ok(())
    }
}
