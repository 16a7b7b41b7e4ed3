//! Dynamic values read out of object members

use crate::inspect::Inspect;
use crate::type_tag::TypeTag;
use std::borrow::Cow;
use std::fmt;

/// A value read from a member
///
/// Values borrow from the object they were read from wherever possible;
/// nested objects are exposed as `&dyn Inspect` so comparison can recurse
/// without cloning the object graph.
#[derive(Clone)]
pub enum Value<'a> {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(Cow<'a, str>),
    /// An array-shaped value with its element values
    Seq(TypeTag, Vec<Value<'a>>),
    /// A class-shaped value compared member by member
    Object(&'a dyn Inspect),
}

impl<'a> Value<'a> {
    /// Wrap a class-shaped value
    pub fn object(object: &'a dyn Inspect) -> Self {
        Value::Object(object)
    }

    /// Build an array-shaped value from its elements
    pub fn seq<I>(type_tag: TypeTag, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value<'a>>,
    {
        Value::Seq(type_tag, items.into_iter().map(Into::into).collect())
    }

    /// Runtime type of this value
    pub fn type_tag(&self) -> TypeTag {
        match self {
            Value::Null => TypeTag::NULL,
            Value::Bool(_) => TypeTag::BOOL,
            Value::Int(_) => TypeTag::INT,
            Value::UInt(_) => TypeTag::UINT,
            Value::Float(_) => TypeTag::FLOAT,
            Value::Str(_) => TypeTag::STRING,
            Value::Seq(tag, _) => tag.clone(),
            Value::Object(object) => object.type_tag(),
        }
    }

    /// Interpret the value as a non-negative element count
    pub fn as_count(&self) -> Option<usize> {
        match self {
            Value::Int(n) => usize::try_from(*n).ok(),
            Value::UInt(n) => usize::try_from(*n).ok(),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_ref()),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&'a dyn Inspect> {
        match self {
            Value::Object(object) => Some(*object),
            _ => None,
        }
    }

    /// Borrow a JSON document as a value
    ///
    /// Objects become class-shaped values whose keys are fields, arrays
    /// become sequences, and numbers keep their integer-ness when they have it.
    pub fn from_json(json: &'a serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(*b),
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Value::UInt(u)
                } else {
                    n.as_f64().map(Value::Float).unwrap_or(Value::Null)
                }
            }
            Json::String(s) => Value::Str(Cow::Borrowed(s)),
            Json::Array(items) => Value::Seq(
                TypeTag::JSON_ARRAY,
                items.iter().map(Value::from_json).collect(),
            ),
            Json::Object(map) => Value::Object(map),
        }
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "Null"),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Int(n) => f.debug_tuple("Int").field(n).finish(),
            Value::UInt(n) => f.debug_tuple("UInt").field(n).finish(),
            Value::Float(n) => f.debug_tuple("Float").field(n).finish(),
            Value::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Value::Seq(tag, items) => f.debug_tuple("Seq").field(tag).field(items).finish(),
            Value::Object(object) => f
                .debug_tuple("Object")
                .field(&object.type_tag().name())
                .finish(),
        }
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::UInt(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::Str(s) => write!(f, "{:?}", s),
            Value::Seq(_, items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Object(object) => write!(f, "{} {{ .. }}", object.type_tag()),
        }
    }
}

macro_rules! impl_from_int {
    ($variant:ident as $target:ty: $($source:ty),*) => {
        $(
            impl From<$source> for Value<'_> {
                fn from(n: $source) -> Self {
                    Value::$variant(<$target>::from(n))
                }
            }
        )*
    };
}

impl_from_int!(Int as i64: i8, i16, i32, i64);
impl_from_int!(UInt as u64: u8, u16, u32, u64);

impl From<usize> for Value<'_> {
    fn from(n: usize) -> Self {
        Value::UInt(n as u64)
    }
}

impl From<bool> for Value<'_> {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f32> for Value<'_> {
    fn from(n: f32) -> Self {
        Value::Float(f64::from(n))
    }
}

impl From<f64> for Value<'_> {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::Str(Cow::Borrowed(s))
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(s: &'a String) -> Self {
        Value::Str(Cow::Borrowed(s.as_str()))
    }
}

impl From<String> for Value<'_> {
    fn from(s: String) -> Self {
        Value::Str(Cow::Owned(s))
    }
}

impl<'a, T> From<Option<T>> for Value<'a>
where
    T: Into<Value<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_type_tags_follow_variant() {
        assert_eq!(Value::from(3i32).type_tag(), TypeTag::INT);
        assert_eq!(Value::from(3u8).type_tag(), TypeTag::UINT);
        assert_eq!(Value::from("x").type_tag(), TypeTag::STRING);
        assert_eq!(Value::from(None::<bool>).type_tag(), TypeTag::NULL);

        let tag = TypeTag::array("Vec<i32>");
        assert_eq!(Value::seq(tag.clone(), [1, 2, 3]).type_tag(), tag);
    }

    #[test]
    fn test_as_count() {
        assert_eq!(Value::Int(3).as_count(), Some(3));
        assert_eq!(Value::UInt(0).as_count(), Some(0));
        assert_eq!(Value::Int(-1).as_count(), None);
        assert_eq!(Value::from("3").as_count(), None);
    }

    #[test]
    fn test_from_json() {
        let doc = json!({"name": "kitchen", "lights": [1, 2], "dimmed": 0.5});
        let value = Value::from_json(&doc);
        assert!(value.type_tag().is_class());

        let lights = json!([1, 2]);
        match Value::from_json(&lights) {
            Value::Seq(tag, items) => {
                assert_eq!(tag, TypeTag::JSON_ARRAY);
                assert_eq!(items.len(), 2);
            }
            other => panic!("expected sequence, got {:?}", other),
        }

        assert!(matches!(Value::from_json(&json!(u64::MAX)), Value::UInt(u64::MAX)));
        assert!(matches!(Value::from_json(&json!(-4)), Value::Int(-4)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::from("Ada").to_string(), "\"Ada\"");
        assert_eq!(Value::seq(TypeTag::array("Vec<i32>"), [1, 2]).to_string(), "[1, 2]");
        assert_eq!(Value::Null.to_string(), "null");
    }
}
