// Java source catalog using tree-sitter
//
// Maps top-level class, interface and enum declarations of every Java file
// under a directory into type descriptors. The package declaration becomes
// the descriptor namespace.

use crate::catalog::{select_scope, CatalogProvider};
use crate::config::CatalogConfig;
use crate::error::{Error, Result};
use crate::model::{
    EnumValue, MemberDescriptor, MethodDescriptor, ParameterDescriptor, Scope, TypeDescriptor,
    TypeReference,
};
use glob::Pattern;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tree_sitter::{Node, Parser};
use walkdir::WalkDir;

/// Catalog built from a tree of Java sources
#[derive(Debug, Clone)]
pub struct JavaSourceCatalog {
    types: Vec<TypeDescriptor>,
    files: usize,
}

impl JavaSourceCatalog {
    /// Discover and parse all matching files under `root`
    pub fn load(root: &Path, config: &CatalogConfig) -> Result<Self> {
        let files = discover_files(root, config)?;
        let mut parser = JavaParser::new()?;

        let mut types = Vec::new();
        for path in &files {
            types.extend(parser.parse_file(path)?);
        }

        info!(
            root = %root.display(),
            files = files.len(),
            types = types.len(),
            "Loaded Java source catalog"
        );
        Ok(Self {
            types,
            files: files.len(),
        })
    }

    /// Number of source files parsed
    pub fn file_count(&self) -> usize {
        self.files
    }

    /// Every type found, in file then declaration order
    pub fn types(&self) -> &[TypeDescriptor] {
        &self.types
    }
}

impl CatalogProvider for JavaSourceCatalog {
    fn list_types(&self, scope: &Scope) -> Result<Vec<TypeDescriptor>> {
        select_scope(&self.types, scope)
    }
}

/// Find Java files under `root`, sorted for a stable catalog order
fn discover_files(root: &Path, config: &CatalogConfig) -> Result<Vec<PathBuf>> {
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }

    let include = compile_patterns(&config.include)?;
    let exclude = compile_patterns(&config.exclude)?;
    let mut files = Vec::new();

    for entry in WalkDir::new(root).follow_links(true) {
        let entry = entry?;
        let path = entry.path();

        if !entry.file_type().is_file() {
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(path);
        if !include.iter().any(|p| p.matches_path(relative)) {
            continue;
        }
        if exclude.iter().any(|p| p.matches_path(relative)) {
            debug!(path = %relative.display(), "Excluded");
            continue;
        }

        files.push(path.to_path_buf());
    }

    files.sort();
    Ok(files)
}

fn compile_patterns(patterns: &[String]) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|p| Pattern::new(p).map_err(Error::from))
        .collect()
}

/// Parser for Java source files
pub struct JavaParser {
    parser: Parser,
}

impl JavaParser {
    /// Create a new Java parser
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        let language = tree_sitter_java::language();
        parser
            .set_language(&language)
            .map_err(|e| Error::Parser(format!("Failed to set Java language: {}", e)))?;

        Ok(Self { parser })
    }

    /// Parse a Java file
    pub fn parse_file(&mut self, path: &Path) -> Result<Vec<TypeDescriptor>> {
        let source = std::fs::read_to_string(path).map_err(|e| {
            Error::Io(std::io::Error::new(e.kind(), format!("{}: {}", path.display(), e)))
        })?;

        let types = self
            .parse_source(&source)
            .map_err(|e| Error::parse(path, e.to_string()))?;
        debug!(path = %path.display(), types = types.len(), "Parsed Java file");
        Ok(types)
    }

    /// Parse Java source code into descriptors
    pub fn parse_source(&mut self, source: &str) -> Result<Vec<TypeDescriptor>> {
        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| Error::parser("Failed to parse Java source"))?;

        let root = tree.root_node();
        if root.has_error() {
            warn!("Java source contains syntax errors, descriptors may be incomplete");
        }

        let mut namespace = String::new();
        let mut types = Vec::new();

        let mut cursor = root.walk();
        for child in root.named_children(&mut cursor) {
            match child.kind() {
                "package_declaration" => {
                    if let Some(name) = package_name(&child, source) {
                        namespace = name;
                    }
                }
                "class_declaration" => {
                    if let Some(ty) = parse_class(&child, source) {
                        types.push(ty);
                    }
                }
                "interface_declaration" => {
                    if let Some(ty) = parse_interface(&child, source) {
                        types.push(ty);
                    }
                }
                "enum_declaration" => {
                    if let Some(ty) = parse_enum(&child, source) {
                        types.push(ty);
                    }
                }
                _ => {}
            }
        }

        for ty in &mut types {
            ty.namespace = namespace.clone();
        }
        Ok(types)
    }
}

/// Modifier keywords that affect rendering
#[derive(Debug, Default, Clone, Copy)]
struct Modifiers {
    is_public: bool,
    is_private: bool,
    is_static: bool,
}

fn modifiers(node: &Node) -> Modifiers {
    let mut mods = Modifiers::default();
    if let Some(list) = find_child(node, "modifiers") {
        let mut cursor = list.walk();
        for keyword in list.children(&mut cursor) {
            match keyword.kind() {
                "public" => mods.is_public = true,
                "private" => mods.is_private = true,
                "static" => mods.is_static = true,
                _ => {}
            }
        }
    }
    mods
}

fn package_name(node: &Node, source: &str) -> Option<String> {
    let mut cursor = node.walk();
    let name = node
        .named_children(&mut cursor)
        .find(|c| c.kind() == "scoped_identifier" || c.kind() == "identifier")
        .and_then(|c| text(&c, source))
        .map(|s| s.to_string());
    name
}

fn declared_name(node: &Node, source: &str) -> Option<String> {
    node.child_by_field_name("name")
        .and_then(|n| text(&n, source))
        .map(|s| s.to_string())
}

/// Parse class declaration
fn parse_class(node: &Node, source: &str) -> Option<TypeDescriptor> {
    let mut ty = TypeDescriptor::class(declared_name(node, source)?);
    ty.generic_arguments = type_parameters(node, source);

    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match child.kind() {
            "superclass" => {
                ty.base_type = first_named_child(&child).map(|t| type_reference(&t, source));
            }
            "super_interfaces" => ty.implemented_interfaces = type_list(&child, source),
            "class_body" => parse_body(&child, source, &mut ty, false),
            _ => {}
        }
    }

    Some(ty)
}

/// Parse interface declaration; extended interfaces count as implemented
fn parse_interface(node: &Node, source: &str) -> Option<TypeDescriptor> {
    let mut ty = TypeDescriptor::interface(declared_name(node, source)?);
    ty.generic_arguments = type_parameters(node, source);

    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match child.kind() {
            "extends_interfaces" => ty.implemented_interfaces = type_list(&child, source),
            "interface_body" => parse_body(&child, source, &mut ty, true),
            _ => {}
        }
    }

    Some(ty)
}

/// Parse enum declaration
fn parse_enum(node: &Node, source: &str) -> Option<TypeDescriptor> {
    let mut ty = TypeDescriptor::enumeration(declared_name(node, source)?);

    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match child.kind() {
            "super_interfaces" => ty.implemented_interfaces = type_list(&child, source),
            "enum_body" => {
                let mut body_cursor = child.walk();
                for constant in child.named_children(&mut body_cursor) {
                    if constant.kind() == "enum_constant" {
                        if let Some(value) = parse_enum_constant(&constant, source) {
                            ty.enum_values.push(value);
                        }
                    }
                }
            }
            _ => {}
        }
    }

    Some(ty)
}

fn parse_enum_constant(node: &Node, source: &str) -> Option<EnumValue> {
    let name = declared_name(node, source)?;
    Some(EnumValue {
        name,
        description: description_annotation(node, source),
    })
}

/// Text of a `@Description("...")` annotation, if one is present and readable
fn description_annotation(node: &Node, source: &str) -> Option<String> {
    let list = find_child(node, "modifiers")?;
    let mut cursor = list.walk();
    let annotation = list.named_children(&mut cursor).find(|a| {
        a.kind() == "annotation"
            && a.child_by_field_name("name")
                .and_then(|n| text(&n, source))
                .map(simple_name)
                == Some("Description")
    })?;

    let arguments = annotation.child_by_field_name("arguments")?;
    let mut arg_cursor = arguments.walk();
    let value = arguments.named_children(&mut arg_cursor).find_map(|arg| match arg.kind() {
        "string_literal" => Some(arg),
        "element_value_pair" => arg
            .child_by_field_name("value")
            .filter(|v| v.kind() == "string_literal"),
        _ => None,
    })?;

    text(&value, source).map(unquote)
}

fn parse_body(body: &Node, source: &str, ty: &mut TypeDescriptor, in_interface: bool) {
    let mut cursor = body.walk();
    for child in body.named_children(&mut cursor) {
        match child.kind() {
            // interface fields are implicitly static constants
            "field_declaration" if !in_interface => ty.members.extend(parse_field(&child, source)),
            "method_declaration" => {
                if let Some(method) = parse_method(&child, source, in_interface) {
                    ty.methods.push(method);
                }
            }
            _ => {}
        }
    }
}

/// Parse an instance field declaration; one member per declarator
fn parse_field(node: &Node, source: &str) -> Vec<MemberDescriptor> {
    let mods = modifiers(node);
    if mods.is_static {
        return Vec::new();
    }
    let Some(type_node) = node.child_by_field_name("type") else {
        return Vec::new();
    };
    let type_ref = type_reference(&type_node, source);

    let mut cursor = node.walk();
    let members = node
        .children_by_field_name("declarator", &mut cursor)
        .filter_map(|d| declared_name(&d, source))
        .map(|name| MemberDescriptor::new(name, type_ref.clone(), mods.is_public))
        .collect();
    members
}

/// Parse an instance method declaration
fn parse_method(node: &Node, source: &str, in_interface: bool) -> Option<MethodDescriptor> {
    let mods = modifiers(node);
    if mods.is_static {
        return None;
    }

    let name = declared_name(node, source)?;
    let return_type = node
        .child_by_field_name("type")
        .map(|t| type_reference(&t, source))
        .unwrap_or_else(|| TypeReference::new("void"));
    let is_public = mods.is_public || (in_interface && !mods.is_private);

    let mut method = MethodDescriptor::new(name, return_type, is_public);
    if let Some(params) = node.child_by_field_name("parameters") {
        let mut cursor = params.walk();
        for param in params.named_children(&mut cursor) {
            if let Some(parameter) = parse_parameter(&param, source) {
                method.parameters.push(parameter);
            }
        }
    }

    Some(method)
}

fn parse_parameter(node: &Node, source: &str) -> Option<ParameterDescriptor> {
    match node.kind() {
        "formal_parameter" => Some(ParameterDescriptor {
            name: declared_name(node, source)?,
            type_ref: type_reference(&node.child_by_field_name("type")?, source),
        }),
        "spread_parameter" => {
            let mut cursor = node.walk();
            let children: Vec<Node> = node.named_children(&mut cursor).collect();
            let type_node = children
                .iter()
                .find(|c| c.kind() != "modifiers" && c.kind() != "variable_declarator")?;
            let declarator = children.iter().find(|c| c.kind() == "variable_declarator")?;
            Some(ParameterDescriptor {
                name: declared_name(declarator, source)?,
                type_ref: TypeReference::new(format!("{}...", compact_text(type_node, source))),
            })
        }
        _ => None,
    }
}

/// Convert a type node into a reference, keeping generic structure
fn type_reference(node: &Node, source: &str) -> TypeReference {
    match node.kind() {
        "generic_type" => {
            let mut name = String::new();
            let mut arguments = Vec::new();
            let mut cursor = node.walk();
            for child in node.named_children(&mut cursor) {
                if child.kind() == "type_arguments" {
                    let mut arg_cursor = child.walk();
                    arguments = child
                        .named_children(&mut arg_cursor)
                        .map(|a| type_reference(&a, source))
                        .collect();
                } else {
                    name = text(&child, source).map(simple_name).unwrap_or_default().to_string();
                }
            }
            TypeReference::generic(name, arguments)
        }
        "scoped_type_identifier" => {
            TypeReference::new(text(node, source).map(simple_name).unwrap_or_default())
        }
        "annotated_type" => match last_named_child(node) {
            Some(inner) => type_reference(&inner, source),
            None => TypeReference::new(compact_text(node, source)),
        },
        _ => TypeReference::new(compact_text(node, source)),
    }
}

fn type_list(node: &Node, source: &str) -> Vec<TypeReference> {
    let Some(list) = find_child(node, "type_list") else {
        return Vec::new();
    };
    let mut cursor = list.walk();
    let types = list
        .named_children(&mut cursor)
        .map(|t| type_reference(&t, source))
        .collect();
    types
}

fn type_parameters(node: &Node, source: &str) -> Vec<TypeReference> {
    let Some(params) = find_child(node, "type_parameters") else {
        return Vec::new();
    };
    let mut cursor = params.walk();
    let names = params
        .named_children(&mut cursor)
        .filter(|p| p.kind() == "type_parameter")
        .filter_map(|p| {
            let mut inner = p.walk();
            let ident = p
                .named_children(&mut inner)
                .find(|c| c.kind() == "type_identifier" || c.kind() == "identifier");
            ident.and_then(|i| text(&i, source)).map(TypeReference::new)
        })
        .collect();
    names
}

fn find_child<'t>(node: &Node<'t>, kind: &str) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).find(|c| c.kind() == kind);
    found
}

fn first_named_child<'t>(node: &Node<'t>) -> Option<Node<'t>> {
    node.named_child(0)
}

fn last_named_child<'t>(node: &Node<'t>) -> Option<Node<'t>> {
    node.named_child_count()
        .checked_sub(1)
        .and_then(|i| node.named_child(i))
}

fn text<'s>(node: &Node, source: &'s str) -> Option<&'s str> {
    node.utf8_text(source.as_bytes()).ok()
}

/// Node text with internal whitespace collapsed
fn compact_text(node: &Node, source: &str) -> String {
    text(node, source)
        .map(|t| t.split_whitespace().collect::<Vec<_>>().join(" "))
        .unwrap_or_default()
}

/// Last segment of a dotted name
fn simple_name(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name).trim()
}

fn unquote(literal: &str) -> String {
    literal
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(literal)
        .to_string()
}
