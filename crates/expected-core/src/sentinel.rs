//! The missing-member sentinel

use crate::type_tag::TypeTag;
use crate::value::Value;
use std::fmt;

/// A member value as seen from one side of a comparison
///
/// `Missing` stands in for a member the actual object does not declare. It
/// carries the declared type of the expected member so the mismatch stays
/// typed and strategies never see an absent value.
#[derive(Debug, Clone)]
pub enum MemberValue<'a> {
    Present(Value<'a>),
    Missing(TypeTag),
}

impl<'a> MemberValue<'a> {
    /// Sentinel for a member of `declared_type` absent on the actual object
    pub fn missing(declared_type: &TypeTag) -> Self {
        MemberValue::Missing(declared_type.clone())
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, MemberValue::Missing(_))
    }

    pub fn as_present(&self) -> Option<&Value<'a>> {
        match self {
            MemberValue::Present(value) => Some(value),
            MemberValue::Missing(_) => None,
        }
    }

    /// Runtime type of a present value, declared type of a missing one
    pub fn type_tag(&self) -> TypeTag {
        match self {
            MemberValue::Present(value) => value.type_tag(),
            MemberValue::Missing(tag) => tag.clone(),
        }
    }
}

impl<'a> From<Value<'a>> for MemberValue<'a> {
    fn from(value: Value<'a>) -> Self {
        MemberValue::Present(value)
    }
}

impl fmt::Display for MemberValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberValue::Present(value) => write!(f, "{}", value),
            MemberValue::Missing(_) => write!(f, "(missing)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keeps_declared_type() {
        let tag = TypeTag::class("Address");
        let missing = MemberValue::missing(&tag);
        assert!(missing.is_missing());
        assert_eq!(missing.type_tag(), tag);
        assert!(missing.as_present().is_none());
        assert_eq!(missing.to_string(), "(missing)");
    }

    #[test]
    fn test_present_reports_runtime_type() {
        let present = MemberValue::from(Value::from(7u32));
        assert!(!present.is_missing());
        assert_eq!(present.type_tag(), TypeTag::UINT);
        assert_eq!(present.to_string(), "7");
    }
}
