// Type descriptors
//
// These types describe one catalog entry each: its kind, members, methods,
// base type and implemented interfaces. They are serializable so a catalog
// can be stored as JSON and loaded without any source analysis.

use crate::model::TypeReference;
use serde::{Deserialize, Serialize};

/// Kind of a catalog type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    Class,
    Enum,
    Interface,
}

impl TypeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Class => "class",
            TypeKind::Enum => "enum",
            TypeKind::Interface => "interface",
        }
    }
}

/// A type in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TypeDescriptor {
    /// Type name, unique within a catalog
    pub name: String,
    /// Namespace the provider found the type in
    #[serde(default)]
    pub namespace: String,
    /// Class, enum or interface
    pub kind: TypeKind,
    /// Direct base type, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_type: Option<TypeReference>,
    /// Implemented interfaces in declaration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub implemented_interfaces: Vec<TypeReference>,
    /// Fields and properties in declaration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<MemberDescriptor>,
    /// Methods in declaration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<MethodDescriptor>,
    /// Enumeration values (enum kind only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<EnumValue>,
    /// Generic parameters of the type itself
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub generic_arguments: Vec<TypeReference>,
}

impl TypeDescriptor {
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            namespace: String::new(),
            kind,
            base_type: None,
            implemented_interfaces: Vec::new(),
            members: Vec::new(),
            methods: Vec::new(),
            enum_values: Vec::new(),
            generic_arguments: Vec::new(),
        }
    }

    pub fn class(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Class)
    }

    pub fn enumeration(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Enum)
    }

    pub fn interface(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Interface)
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn with_base(mut self, base: TypeReference) -> Self {
        self.base_type = Some(base);
        self
    }

    pub fn with_interface(mut self, interface: TypeReference) -> Self {
        self.implemented_interfaces.push(interface);
        self
    }

    pub fn with_member(mut self, member: MemberDescriptor) -> Self {
        self.members.push(member);
        self
    }

    pub fn with_method(mut self, method: MethodDescriptor) -> Self {
        self.methods.push(method);
        self
    }

    pub fn with_value(mut self, value: EnumValue) -> Self {
        self.enum_values.push(value);
        self
    }

    pub fn is_enum(&self) -> bool {
        self.kind == TypeKind::Enum
    }

    pub fn is_class(&self) -> bool {
        self.kind == TypeKind::Class
    }
}

/// A field or property
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MemberDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub type_ref: TypeReference,
    #[serde(default = "default_public")]
    pub is_public: bool,
}

impl MemberDescriptor {
    pub fn new(name: impl Into<String>, type_ref: TypeReference, is_public: bool) -> Self {
        Self {
            name: name.into(),
            type_ref,
            is_public,
        }
    }

    pub fn public(name: impl Into<String>, type_ref: TypeReference) -> Self {
        Self::new(name, type_ref, true)
    }

    pub fn private(name: impl Into<String>, type_ref: TypeReference) -> Self {
        Self::new(name, type_ref, false)
    }
}

/// A method signature
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MethodDescriptor {
    pub name: String,
    #[serde(default = "default_public")]
    pub is_public: bool,
    #[serde(default = "default_return_type")]
    pub return_type: TypeReference,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<ParameterDescriptor>,
    /// Accessor or compiler-synthesized method, never rendered
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_special: bool,
}

impl MethodDescriptor {
    pub fn new(name: impl Into<String>, return_type: TypeReference, is_public: bool) -> Self {
        Self {
            name: name.into(),
            is_public,
            return_type,
            parameters: Vec::new(),
            is_special: false,
        }
    }

    pub fn with_parameter(mut self, name: impl Into<String>, type_ref: TypeReference) -> Self {
        self.parameters.push(ParameterDescriptor {
            name: name.into(),
            type_ref,
        });
        self
    }

    pub fn special(mut self) -> Self {
        self.is_special = true;
        self
    }

    /// Name plus parameter types; two methods with the same key override each other
    pub fn signature_key(&self) -> String {
        let params: Vec<String> = self.parameters.iter().map(|p| p.type_ref.to_string()).collect();
        format!("{}({})", self.name, params.join(", "))
    }
}

/// A method parameter
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParameterDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub type_ref: TypeReference,
}

/// An enumeration value with optional annotation text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnumValue {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl EnumValue {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    pub fn described(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: Some(description.into()),
        }
    }

    /// Description if present and non-empty
    pub fn label(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }
}

fn default_public() -> bool {
    true
}

fn default_return_type() -> TypeReference {
    TypeReference::new("void")
}
