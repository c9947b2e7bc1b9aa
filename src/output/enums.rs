// Enumeration blocks

use crate::model::TypeDescriptor;

/// Render an enum as a `<<enumeration>>` class block.
///
/// Values keep catalog order; a value with a non-empty description renders as
/// `name : 'description'`.
pub fn render_enum(ty: &TypeDescriptor) -> Vec<String> {
    let mut lines = Vec::with_capacity(ty.enum_values.len() + 3);
    lines.push(format!("class {} {{", ty.name));
    lines.push("<<enumeration>>".to_string());

    for value in &ty.enum_values {
        match value.label() {
            Some(description) => lines.push(format!("  {} : '{}'", value.name, description)),
            None => lines.push(format!("  {}", value.name)),
        }
    }

    lines.push("}".to_string());
    lines
}
