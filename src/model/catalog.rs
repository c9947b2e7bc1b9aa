// Catalog of type descriptors
//
// An ordered, read-only set of descriptors with a by-name index. Catalog order
// is the provider's order and drives every iteration during rendering.

use crate::error::{Error, Result};
use crate::model::{TypeDescriptor, TypeReference};
use std::collections::HashMap;

/// The types under consideration for one diagram
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    types: Vec<TypeDescriptor>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate type names
    pub fn new(types: Vec<TypeDescriptor>) -> Result<Self> {
        let mut index = HashMap::with_capacity(types.len());
        for (i, ty) in types.iter().enumerate() {
            if index.insert(ty.name.clone(), i).is_some() {
                return Err(Error::DuplicateType(ty.name.clone()));
            }
        }
        Ok(Self { types, index })
    }

    /// All types in catalog order
    pub fn types(&self) -> &[TypeDescriptor] {
        &self.types
    }

    pub fn get(&self, name: &str) -> Option<&TypeDescriptor> {
        self.index.get(name).map(|&i| &self.types[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Resolve a reference to an in-catalog descriptor.
    ///
    /// Only non-generic references resolve; a generic instantiation is never
    /// the same type as a catalog entry.
    pub fn resolve(&self, reference: &TypeReference) -> Option<&TypeDescriptor> {
        if reference.is_generic() {
            return None;
        }
        self.get(&reference.name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_preserves_order() {
        let catalog = Catalog::new(vec![
            TypeDescriptor::class("Zebra"),
            TypeDescriptor::class("Aardvark"),
        ])
        .unwrap();
        let names: Vec<&str> = catalog.types().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Zebra", "Aardvark"]);
    }

    #[test]
    fn test_catalog_rejects_duplicates() {
        let result = Catalog::new(vec![
            TypeDescriptor::class("Pet"),
            TypeDescriptor::enumeration("Pet"),
        ]);
        assert!(matches!(result, Err(Error::DuplicateType(name)) if name == "Pet"));
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = Catalog::new(vec![TypeDescriptor::class("Person")]).unwrap();
        assert!(catalog.contains("Person"));
        assert!(!catalog.contains("string"));
        assert_eq!(catalog.get("Person").map(|t| t.name.as_str()), Some("Person"));
        assert_eq!(catalog.len(), 1);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_resolve_ignores_generic_instantiations() {
        let catalog = Catalog::new(vec![TypeDescriptor::class("Box")]).unwrap();
        assert!(catalog.resolve(&TypeReference::new("Box")).is_some());
        let boxed = TypeReference::generic("Box", vec![TypeReference::new("int")]);
        assert!(catalog.resolve(&boxed).is_none());
    }
}
