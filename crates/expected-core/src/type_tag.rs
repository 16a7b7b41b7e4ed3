//! Runtime type descriptors used for strategy dispatch

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Broad shape of a type
///
/// The shape decides which comparison strategy is applicable: primitives are
/// compared by value, arrays element by element, and classes member by member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Primitive,
    Array,
    Class,
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeKind::Primitive => write!(f, "primitive"),
            TypeKind::Array => write!(f, "array"),
            TypeKind::Class => write!(f, "class"),
        }
    }
}

/// A named runtime type (e.g. `i64`, `Vec<Item>`, `Address`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeTag {
    name: Cow<'static, str>,
    kind: TypeKind,
}

impl TypeTag {
    pub const NULL: TypeTag = TypeTag::primitive("null");
    pub const BOOL: TypeTag = TypeTag::primitive("bool");
    pub const INT: TypeTag = TypeTag::primitive("i64");
    pub const UINT: TypeTag = TypeTag::primitive("u64");
    pub const FLOAT: TypeTag = TypeTag::primitive("f64");
    pub const STRING: TypeTag = TypeTag::primitive("string");

    /// Tag used for JSON objects
    pub const JSON_OBJECT: TypeTag = TypeTag::class("json object");
    /// Tag used for JSON arrays
    pub const JSON_ARRAY: TypeTag = TypeTag::array("json array");

    /// Create a tag with an owned or borrowed name
    pub fn new(name: impl Into<Cow<'static, str>>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub const fn primitive(name: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            kind: TypeKind::Primitive,
        }
    }

    pub const fn array(name: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            kind: TypeKind::Array,
        }
    }

    pub const fn class(name: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            kind: TypeKind::Class,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// True for class-shaped (non-primitive, non-array) types
    pub fn is_class(&self) -> bool {
        self.kind == TypeKind::Class
    }

    pub fn is_array(&self) -> bool {
        self.kind == TypeKind::Array
    }

    pub fn is_primitive(&self) -> bool {
        self.kind == TypeKind::Primitive
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_predicates() {
        assert!(TypeTag::class("Order").is_class());
        assert!(TypeTag::array("Vec<Line>").is_array());
        assert!(TypeTag::STRING.is_primitive());
        assert!(!TypeTag::JSON_ARRAY.is_class());
    }

    #[test]
    fn test_owned_and_const_tags_compare_equal() {
        let owned = TypeTag::new(String::from("Order"), TypeKind::Class);
        assert_eq!(owned, TypeTag::class("Order"));
        assert_ne!(owned, TypeTag::new("Order", TypeKind::Array));
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_value(TypeTag::class("Address")).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Address", "kind": "class"}));
    }
}
