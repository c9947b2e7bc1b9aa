// JSON catalog files
//
// A catalog document is `{ "types": [ ... ] }` with one serialized
// `TypeDescriptor` per entry, in the order they should be rendered.

use crate::catalog::{select_scope, CatalogProvider};
use crate::error::{Error, Result};
use crate::model::{Scope, TypeDescriptor};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Catalog loaded from a JSON document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JsonCatalog {
    #[serde(default)]
    pub types: Vec<TypeDescriptor>,
}

impl JsonCatalog {
    /// Load a catalog document from disk
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::Io(std::io::Error::new(e.kind(), format!("{}: {}", path.display(), e)))
        })?;
        let catalog = Self::from_json(&contents).map_err(|e| Error::parse(path, e.to_string()))?;
        info!(path = %path.display(), types = catalog.types.len(), "Loaded JSON catalog");
        Ok(catalog)
    }

    /// Parse a catalog document
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl CatalogProvider for JsonCatalog {
    fn list_types(&self, scope: &Scope) -> Result<Vec<TypeDescriptor>> {
        select_scope(&self.types, scope)
    }
}
