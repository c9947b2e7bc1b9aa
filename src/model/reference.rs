// Type references
//
// A lightweight pointer to a type by name, optionally parameterised by
// generic arguments which are themselves type references.

use crate::error::{Error, Result};
use chumsky::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A reference to a type, possibly a generic instantiation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TypeReferenceRepr")]
pub struct TypeReference {
    /// Type name as the provider reports it (may carry an arity suffix such as `List`1`)
    pub name: String,
    /// Generic arguments in declaration order, empty if non-generic
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub generic_arguments: Vec<TypeReference>,
}

impl TypeReference {
    /// Create a non-generic reference
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            generic_arguments: Vec::new(),
        }
    }

    /// Create a generic instantiation
    pub fn generic(name: impl Into<String>, arguments: Vec<TypeReference>) -> Self {
        Self {
            name: name.into(),
            generic_arguments: arguments,
        }
    }

    /// Check if this reference carries generic arguments
    pub fn is_generic(&self) -> bool {
        !self.generic_arguments.is_empty()
    }

    /// Name with any arity suffix (`` `N ``) removed
    pub fn base_name(&self) -> &str {
        self.name.split('`').next().unwrap_or(&self.name)
    }
}

impl fmt::Display for TypeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if self.is_generic() {
            let args: Vec<String> = self.generic_arguments.iter().map(|a| a.to_string()).collect();
            write!(f, "<{}>", args.join(", "))?;
        }
        Ok(())
    }
}

/// Deepest generic nesting accepted in the textual form
pub const MAX_GENERIC_DEPTH: usize = 64;

impl FromStr for TypeReference {
    type Err = Error;

    /// Parse the textual form `Name<Arg1, Arg2<Inner>>`
    fn from_str(s: &str) -> Result<Self> {
        if nesting_depth(s) > MAX_GENERIC_DEPTH {
            return Err(Error::type_reference(format!(
                "generic nesting too deep (more than {} levels) in '{}'",
                MAX_GENERIC_DEPTH,
                abbreviate(s)
            )));
        }

        reference_parser().parse(s).into_result().map_err(|errors| {
            let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            Error::type_reference(format!("{} in '{}'", messages.join("; "), abbreviate(s)))
        })
    }
}

fn reference_parser<'src>(
) -> impl Parser<'src, &'src str, TypeReference, extra::Err<Rich<'src, char>>> {
    let ws = one_of(" \t\n\r").repeated().ignored();

    let reference = recursive(|reference| {
        let name = none_of("<,>")
            .repeated()
            .at_least(1)
            .to_slice()
            .map(|s: &str| s.trim().to_string())
            .filter(|name: &String| !name.is_empty());

        let arguments = reference
            .separated_by(just(','))
            .at_least(1)
            .collect::<Vec<TypeReference>>()
            .delimited_by(just('<'), just('>'));

        ws.clone()
            .ignore_then(name)
            .then(arguments.or_not())
            .then_ignore(ws.clone())
            .map(|(name, arguments)| TypeReference::generic(name, arguments.unwrap_or_default()))
    });

    reference.then_ignore(end())
}

/// Deepest run of unclosed `<`
fn nesting_depth(text: &str) -> usize {
    let mut depth = 0usize;
    let mut deepest = 0usize;
    for c in text.chars() {
        match c {
            '<' => {
                depth += 1;
                deepest = deepest.max(depth);
            }
            '>' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    deepest
}

fn abbreviate(text: &str) -> String {
    const LIMIT: usize = 80;
    match text.char_indices().nth(LIMIT) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Accepted serialized shapes: a bare string or the structured form
#[derive(Deserialize)]
#[serde(untagged)]
enum TypeReferenceRepr {
    Text(String),
    Structured {
        name: String,
        #[serde(default)]
        generic_arguments: Vec<TypeReference>,
    },
}

impl TryFrom<TypeReferenceRepr> for TypeReference {
    type Error = Error;

    fn try_from(repr: TypeReferenceRepr) -> Result<Self> {
        match repr {
            TypeReferenceRepr::Text(text) => text.parse(),
            TypeReferenceRepr::Structured {
                name,
                generic_arguments,
            } => Ok(TypeReference::generic(name, generic_arguments)),
        }
    }
}
