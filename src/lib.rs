//! Typechart - Generate Mermaid class diagrams from type catalogs
//!
//! A catalog provider supplies type descriptors for a namespace scope; the
//! diagram generator renders them as a `classDiagram` with member lists,
//! method signatures and inheritance, interface, has-one and has-many edges.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod output;

// Re-export main types
pub use catalog::{open_catalog, CatalogProvider, JavaSourceCatalog, JsonCatalog};
pub use config::Config;
pub use error::{Error, Result};
pub use model::{Catalog, Scope, TypeDescriptor, TypeKind, TypeReference};
pub use output::{friendly_name, DiagramGenerator};

/// Render the diagram for `scope` from `provider` with default diagram settings
pub fn generate(provider: &dyn CatalogProvider, scope: &Scope) -> Result<String> {
    DiagramGenerator::new().generate(provider, scope)
}
