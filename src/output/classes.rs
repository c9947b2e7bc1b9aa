// Class blocks with their inheritance and interface edges

use crate::model::{Catalog, MethodDescriptor, TypeDescriptor, TypeReference};
use crate::output::names::friendly_name;
use crate::output::relationships::Relationship;
use std::collections::HashSet;

/// Render a class block followed by its inheritance edge and interface edges
pub fn render_class(ty: &TypeDescriptor, catalog: &Catalog, root_types: &[String]) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!("class {} {{", ty.name));

    for member in &ty.members {
        lines.push(format!(
            "  {}{} {}",
            visibility(member.is_public),
            friendly_name(&member.type_ref),
            member.name
        ));
    }

    for method in inherited_methods(ty, catalog, root_types) {
        lines.push(method_line(method));
    }

    lines.push("}".to_string());

    if let Some(base) = in_catalog_base(ty, catalog, root_types) {
        lines.push(Relationship::inherits(&base.name, &ty.name).to_string());
    }

    // Interfaces are drawn whether or not they have a block of their own
    for interface in &ty.implemented_interfaces {
        lines.push(Relationship::implements(&interface.name, &ty.name).to_string());
    }

    lines
}

/// Methods of the type, then of each ancestor in turn.
///
/// The walk follows base types through the catalog and stops at a root type,
/// a base outside the catalog, or a cycle. A signature seen earlier in the
/// walk hides later ones.
pub fn inherited_methods<'c>(
    ty: &'c TypeDescriptor,
    catalog: &'c Catalog,
    root_types: &[String],
) -> Vec<&'c MethodDescriptor> {
    let mut methods = Vec::new();
    let mut signatures = HashSet::new();
    let mut visited = HashSet::new();
    let mut current = Some(ty);

    while let Some(t) = current {
        if !visited.insert(t.name.as_str()) {
            break;
        }

        for method in t.methods.iter().filter(|m| !m.is_special) {
            if signatures.insert(method.signature_key()) {
                methods.push(method);
            }
        }

        current = in_catalog_base(t, catalog, root_types);
    }

    methods
}

fn in_catalog_base<'c>(
    ty: &TypeDescriptor,
    catalog: &'c Catalog,
    root_types: &[String],
) -> Option<&'c TypeDescriptor> {
    ty.base_type
        .as_ref()
        .filter(|base| !is_root(base, root_types))
        .and_then(|base| catalog.get(&base.name))
}

fn is_root(reference: &TypeReference, root_types: &[String]) -> bool {
    root_types.iter().any(|r| *r == reference.name)
}

fn method_line(method: &MethodDescriptor) -> String {
    let params: Vec<String> = method
        .parameters
        .iter()
        .map(|p| format!("{} {}", friendly_name(&p.type_ref), p.name))
        .collect();
    format!(
        "  {}{}({}) {}",
        visibility(method.is_public),
        method.name,
        params.join(", "),
        friendly_name(&method.return_type)
    )
}

fn visibility(is_public: bool) -> char {
    if is_public {
        '+'
    } else {
        '-'
    }
}
