// Friendly type names for diagram labels

use crate::model::TypeReference;

/// Render a type reference as a short label.
///
/// Non-generic references keep their name verbatim. Generic instantiations drop
/// the arity suffix and list their arguments between tildes, recursively:
/// `Dictionary~string, List~int~~`.
pub fn friendly_name(reference: &TypeReference) -> String {
    if !reference.is_generic() {
        return reference.name.clone();
    }

    let arguments: Vec<String> = reference.generic_arguments.iter().map(friendly_name).collect();
    format!("{}~{}~", reference.base_name(), arguments.join(", "))
}
