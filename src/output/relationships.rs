// Relationship edges between catalog types

use crate::model::{Catalog, TypeReference};
use std::fmt;
use tracing::debug;

/// Kind of diagram edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationshipKind {
    /// Base type to derived type
    Inherits,
    /// Interface to implementing type
    Implements,
    /// Owner to member type (has-one)
    Has,
    /// Owner to collection element type (has-many)
    HasMany,
}

/// A single edge line. `left` and `right` are in the order Mermaid reads them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    pub left: String,
    pub right: String,
    pub kind: RelationshipKind,
}

impl Relationship {
    pub fn inherits(base: &str, derived: &str) -> Self {
        Self::new(base, derived, RelationshipKind::Inherits)
    }

    pub fn implements(interface: &str, implementor: &str) -> Self {
        Self::new(interface, implementor, RelationshipKind::Implements)
    }

    pub fn has(owner: &str, target: &str) -> Self {
        Self::new(owner, target, RelationshipKind::Has)
    }

    pub fn has_many(owner: &str, element: &str) -> Self {
        Self::new(owner, element, RelationshipKind::HasMany)
    }

    fn new(left: &str, right: &str, kind: RelationshipKind) -> Self {
        Self {
            left: left.to_string(),
            right: right.to_string(),
            kind,
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            RelationshipKind::Inherits => write!(f, "{} <|.. {} : inherits", self.left, self.right),
            RelationshipKind::Implements => {
                write!(f, "{} <|-- {} : implements", self.left, self.right)
            }
            RelationshipKind::Has => write!(f, "{} --> {} : has", self.left, self.right),
            RelationshipKind::HasMany => {
                write!(f, "{} --> \"*\" {} : has many", self.left, self.right)
            }
        }
    }
}

/// Derive composition and aggregation edges from class members.
///
/// Types are visited in catalog order and members in declaration order. Every
/// qualifying member yields its own edge, so two members pointing at the same
/// type give two edges.
pub fn derive_relationships(catalog: &Catalog, collection_types: &[String]) -> Vec<Relationship> {
    let mut edges = Vec::new();

    for ty in catalog.types().iter().filter(|t| t.is_class()) {
        for member in &ty.members {
            if let Some(target) = catalog.resolve(&member.type_ref) {
                edges.push(Relationship::has(&ty.name, &target.name));
            } else if let Some(element) = collection_element(&member.type_ref, collection_types)
                .and_then(|e| catalog.resolve(e))
            {
                edges.push(Relationship::has_many(&ty.name, &element.name));
            }
        }
    }

    debug!(edges = edges.len(), "Derived member relationships");
    edges
}

/// Element type of a single-argument collection reference
fn collection_element<'r>(
    reference: &'r TypeReference,
    collection_types: &[String],
) -> Option<&'r TypeReference> {
    if reference.generic_arguments.len() != 1 {
        return None;
    }
    let base = reference.base_name();
    if collection_types.iter().any(|c| c == base) {
        reference.generic_arguments.first()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MemberDescriptor, TypeDescriptor};

    fn collections() -> Vec<String> {
        vec!["ICollection".to_string(), "List".to_string()]
    }

    fn member(name: &str, type_text: &str) -> MemberDescriptor {
        MemberDescriptor::public(name, type_text.parse().unwrap())
    }

    #[test]
    fn test_relationship_display() {
        assert_eq!(
            Relationship::inherits("Animal", "Dog").to_string(),
            "Animal <|.. Dog : inherits"
        );
        assert_eq!(
            Relationship::implements("IPet", "Dog").to_string(),
            "IPet <|-- Dog : implements"
        );
        assert_eq!(Relationship::has("Person", "PetType").to_string(), "Person --> PetType : has");
        assert_eq!(
            Relationship::has_many("Person", "Pet").to_string(),
            "Person --> \"*\" Pet : has many"
        );
    }

    #[test]
    fn test_has_one_edge() {
        let catalog = Catalog::new(vec![
            TypeDescriptor::class("Person")
                .with_member(member("Name", "string"))
                .with_member(member("Pet", "PetType")),
            TypeDescriptor::enumeration("PetType"),
        ])
        .unwrap();
        let edges = derive_relationships(&catalog, &collections());
        assert_eq!(edges, vec![Relationship::has("Person", "PetType")]);
    }

    #[test]
    fn test_has_many_edge() {
        let catalog = Catalog::new(vec![
            TypeDescriptor::class("Customer").with_member(member("Orders", "ICollection<Order>")),
            TypeDescriptor::class("Order"),
        ])
        .unwrap();
        let edges = derive_relationships(&catalog, &collections());
        assert_eq!(edges, vec![Relationship::has_many("Customer", "Order")]);
    }

    #[test]
    fn test_collection_of_external_type_has_no_edge() {
        let catalog = Catalog::new(vec![
            TypeDescriptor::class("Player").with_member(member("Scores", "List<int>")),
        ])
        .unwrap();
        assert!(derive_relationships(&catalog, &collections()).is_empty());
    }

    #[test]
    fn test_unknown_wrapper_has_no_edge() {
        let catalog = Catalog::new(vec![
            TypeDescriptor::class("Customer").with_member(member("Orders", "Lookup<Order>")),
            TypeDescriptor::class("Order"),
        ])
        .unwrap();
        assert!(derive_relationships(&catalog, &collections()).is_empty());
    }

    #[test]
    fn test_two_argument_generic_has_no_edge() {
        let catalog = Catalog::new(vec![
            TypeDescriptor::class("Index").with_member(member("Entries", "List<Order, Order>")),
            TypeDescriptor::class("Order"),
        ])
        .unwrap();
        assert!(derive_relationships(&catalog, &collections()).is_empty());
    }

    #[test]
    fn test_duplicate_edges_are_kept() {
        let catalog = Catalog::new(vec![
            TypeDescriptor::class("Shipment")
                .with_member(member("Origin", "Address"))
                .with_member(member("Destination", "Address")),
            TypeDescriptor::class("Address"),
        ])
        .unwrap();
        let edges = derive_relationships(&catalog, &collections());
        assert_eq!(edges.len(), 2);
        assert!(edges.iter().all(|e| *e == Relationship::has("Shipment", "Address")));
    }

    #[test]
    fn test_only_class_members_are_walked() {
        let catalog = Catalog::new(vec![
            TypeDescriptor::interface("IOwner").with_member(member("Pet", "Pet")),
            TypeDescriptor::class("Pet"),
        ])
        .unwrap();
        assert!(derive_relationships(&catalog, &collections()).is_empty());
    }

    #[test]
    fn test_edge_order_follows_catalog_then_members() {
        let catalog = Catalog::new(vec![
            TypeDescriptor::class("B").with_member(member("a", "A")),
            TypeDescriptor::class("A")
                .with_member(member("c", "C"))
                .with_member(member("bs", "List<B>")),
            TypeDescriptor::class("C"),
        ])
        .unwrap();
        let lines: Vec<String> = derive_relationships(&catalog, &collections())
            .iter()
            .map(|e| e.to_string())
            .collect();
        assert_eq!(
            lines,
            vec!["B --> A : has", "A --> C : has", "A --> \"*\" B : has many"]
        );
    }
}
