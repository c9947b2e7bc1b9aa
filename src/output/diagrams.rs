// Diagram generation for Typechart
//
// Assembles Mermaid class diagrams from a type catalog.

use crate::catalog::CatalogProvider;
use crate::config::DiagramConfig;
use crate::error::Result;
use crate::model::{Catalog, Scope, TypeDescriptor};
use crate::output::classes::render_class;
use crate::output::enums::render_enum;
use crate::output::relationships::derive_relationships;
use tracing::{debug, info};

/// Diagram generator for creating Mermaid class diagrams
#[derive(Debug, Clone)]
pub struct DiagramGenerator {
    /// Generic wrappers treated as has-many collections
    collection_types: Vec<String>,
    /// Names of the universal root type
    root_types: Vec<String>,
    /// Layout direction (TB, TD, BT, LR, RL)
    direction: String,
    /// Sub-scope substring that switches the direction hint on
    entities_marker: String,
}

impl DiagramGenerator {
    /// Create a new diagram generator
    pub fn new() -> Self {
        Self::from_config(&DiagramConfig::default())
    }

    pub fn from_config(config: &DiagramConfig) -> Self {
        Self {
            collection_types: config.collection_types.clone(),
            root_types: config.root_types.clone(),
            direction: config.direction.clone(),
            entities_marker: config.entities_marker.clone(),
        }
    }

    /// Set the generic wrappers counted as collections
    pub fn with_collection_types(mut self, types: Vec<String>) -> Self {
        self.collection_types = types;
        self
    }

    /// Set layout direction
    pub fn with_direction(mut self, dir: &str) -> Self {
        self.direction = dir.to_string();
        self
    }

    /// Load the scoped catalog from a provider and render it
    pub fn generate(&self, provider: &dyn CatalogProvider, scope: &Scope) -> Result<String> {
        let types = provider.list_types(scope)?;
        let catalog = Catalog::new(types)?;
        info!(scope = %scope.qualified(), types = catalog.len(), "Rendering class diagram");
        Ok(self.assemble(&catalog, scope))
    }

    /// Render the whole document for an already loaded catalog
    pub fn assemble(&self, catalog: &Catalog, scope: &Scope) -> String {
        let mut lines = vec![
            "```mermaid".to_string(),
            "---".to_string(),
            format!("title : {} UML Diagrams", scope.qualified()),
            "---".to_string(),
            "classDiagram".to_string(),
        ];
        if scope.is_entities(&self.entities_marker) {
            lines.push(format!("direction {}", self.direction));
        }

        for ty in catalog.types() {
            lines.extend(self.render_type(ty, catalog));
        }

        lines.extend(
            derive_relationships(catalog, &self.collection_types)
                .iter()
                .map(|edge| edge.to_string()),
        );

        lines.push("```".to_string());
        lines.join("\n")
    }

    /// Render one type's block and the edges that sit directly after it
    pub fn render_type(&self, ty: &TypeDescriptor, catalog: &Catalog) -> Vec<String> {
        debug!(name = %ty.name, kind = ty.kind.as_str(), "Rendering type");
        if ty.is_enum() {
            render_enum(ty)
        } else {
            render_class(ty, catalog, &self.root_types)
        }
    }
}

impl Default for DiagramGenerator {
    fn default() -> Self {
        Self::new()
    }
}
