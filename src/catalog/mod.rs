// Type catalog providers
//
// Providers turn some external description of a code base into descriptors
// once, then hand out the subset that belongs to a requested scope.

pub mod java;
pub mod json;

pub use java::{JavaParser, JavaSourceCatalog};
pub use json::JsonCatalog;

use crate::config::{CatalogConfig, CatalogFormat};
use crate::error::{Error, Result};
use crate::model::{Scope, TypeDescriptor};
use std::path::Path;
use tracing::debug;

/// Source of type descriptors for a namespace scope
pub trait CatalogProvider {
    /// Types under `scope`, in a stable order.
    ///
    /// Fails with `NamespaceNotFound` when nothing at all is known under the
    /// root namespace. An existing namespace with an empty sub-scope yields an
    /// empty list.
    fn list_types(&self, scope: &Scope) -> Result<Vec<TypeDescriptor>>;
}

/// Filter a provider's full type list down to a scope
pub fn select_scope(types: &[TypeDescriptor], scope: &Scope) -> Result<Vec<TypeDescriptor>> {
    if !types.iter().any(|t| scope.in_root(&t.namespace)) {
        return Err(Error::NamespaceNotFound(scope.namespace.clone()));
    }

    let selected: Vec<TypeDescriptor> = types
        .iter()
        .filter(|t| scope.contains(&t.namespace))
        .cloned()
        .collect();

    debug!(
        scope = %scope.qualified(),
        known = types.len(),
        selected = selected.len(),
        "Selected scoped types"
    );
    Ok(selected)
}

/// Open the provider matching `format` for `path`
pub fn open_catalog(path: &Path, config: &CatalogConfig) -> Result<Box<dyn CatalogProvider>> {
    if !path.exists() {
        return Err(Error::PathNotFound(path.to_path_buf()));
    }

    let format = match config.format {
        CatalogFormat::Auto => detect_format(path),
        explicit => explicit,
    };

    match format {
        CatalogFormat::Json => Ok(Box::new(JsonCatalog::load(path)?)),
        _ => Ok(Box::new(JavaSourceCatalog::load(path, config)?)),
    }
}

fn detect_format(path: &Path) -> CatalogFormat {
    if path.is_file() && path.extension().is_some_and(|e| e == "json") {
        CatalogFormat::Json
    } else {
        CatalogFormat::Java
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn types() -> Vec<TypeDescriptor> {
        vec![
            TypeDescriptor::class("Order").with_namespace("Shop.Database.Entities"),
            TypeDescriptor::class("OrderService").with_namespace("Shop.Services"),
            TypeDescriptor::class("Line").with_namespace("Shop.Database.Entities.Orders"),
        ]
    }

    #[test]
    fn test_select_scope() {
        let selected = select_scope(&types(), &Scope::new("Shop", "Database.Entities")).unwrap();
        let names: Vec<&str> = selected.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Order", "Line"]);
    }

    #[test]
    fn test_select_scope_empty_sub_scope() {
        let selected = select_scope(&types(), &Scope::new("Shop", "Web")).unwrap();
        assert!(selected.is_empty());
    }

    #[test]
    fn test_select_scope_unknown_namespace() {
        let result = select_scope(&types(), &Scope::new("Bank", "Database.Entities"));
        assert!(matches!(result, Err(Error::NamespaceNotFound(ns)) if ns == "Bank"));
    }

    #[test]
    fn test_open_catalog_missing_path() {
        let result = open_catalog(
            Path::new("/nonexistent/catalog.json"),
            &CatalogConfig::default(),
        );
        assert!(matches!(result, Err(Error::PathNotFound(_))));
    }

    #[test]
    fn test_detect_format() {
        let dir = TempDir::new().unwrap();
        let json = dir.path().join("catalog.json");
        std::fs::write(&json, "{}").unwrap();
        assert_eq!(detect_format(&json), CatalogFormat::Json);
        assert_eq!(detect_format(dir.path()), CatalogFormat::Java);
    }
}
