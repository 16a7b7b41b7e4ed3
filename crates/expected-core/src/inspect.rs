//! The member descriptor provider trait

use crate::member::{MemberDescriptor, MemberKind};
use crate::type_tag::TypeTag;
use crate::value::Value;

/// Exposes an object's members for structural comparison
///
/// Implementations list every declared member exactly once, in a stable
/// order. Fields should be described with [`MemberDescriptor::field`] and
/// accessor-style members with [`MemberDescriptor::property`] or
/// [`MemberDescriptor::indexed_property`].
pub trait Inspect {
    /// Runtime type of this object
    fn type_tag(&self) -> TypeTag;

    /// Descriptors for every declared member, bound to `self`
    fn members(&self) -> Vec<MemberDescriptor<'_>>;

    /// Look up a single member by name and kind
    fn member(&self, name: &str, kind: MemberKind) -> Option<MemberDescriptor<'_>> {
        self.members()
            .into_iter()
            .find(|member| member.kind() == kind && member.name() == name)
    }
}

/// JSON objects are compared key by key, each key acting as a field
impl Inspect for serde_json::Map<String, serde_json::Value> {
    fn type_tag(&self) -> TypeTag {
        TypeTag::JSON_OBJECT
    }

    fn members(&self) -> Vec<MemberDescriptor<'_>> {
        self.iter()
            .map(|(key, value)| MemberDescriptor::field_value(key.as_str(), Value::from_json(value)))
            .collect()
    }
}
