//! Uniform descriptors over fields and properties

use crate::error::{ReadError, ReadResult};
use crate::type_tag::TypeTag;
use crate::value::Value;
use std::borrow::Cow;
use std::fmt;

/// Accessor for members read without arguments
pub type ReadFn<'a> = Box<dyn Fn() -> ReadResult<Value<'a>> + 'a>;

/// Accessor for members read with index arguments
pub type IndexedReadFn<'a> = Box<dyn Fn(&[IndexArg]) -> ReadResult<Value<'a>> + 'a>;

/// Whether a member is field-like or property-like
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    /// Plain stored data, always readable without arguments
    Field,
    /// Accessor-style member, optionally indexed
    Property,
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberKind::Field => write!(f, "field"),
            MemberKind::Property => write!(f, "property"),
        }
    }
}

/// Declared type of one index parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexParam {
    Int,
    Str,
    Other(TypeTag),
}

/// A concrete index argument passed to an indexed read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexArg {
    Int(i64),
    Str(String),
}

impl fmt::Display for IndexArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexArg::Int(i) => write!(f, "{}", i),
            IndexArg::Str(s) => write!(f, "{:?}", s),
        }
    }
}

/// How a member's value is obtained from its instance
pub enum Accessor<'a> {
    Scalar(ReadFn<'a>),
    Indexed {
        params: Vec<IndexParam>,
        read: IndexedReadFn<'a>,
    },
}

/// A named, readable member bound to one instance
///
/// Descriptors are produced by [`Inspect::members`](crate::Inspect::members)
/// and borrow the instance they describe.
pub struct MemberDescriptor<'a> {
    name: Cow<'a, str>,
    kind: MemberKind,
    declared_type: TypeTag,
    accessor: Accessor<'a>,
}

impl<'a> MemberDescriptor<'a> {
    /// Describe a field
    pub fn field<F>(name: impl Into<Cow<'a, str>>, declared_type: TypeTag, read: F) -> Self
    where
        F: Fn() -> ReadResult<Value<'a>> + 'a,
    {
        Self {
            name: name.into(),
            kind: MemberKind::Field,
            declared_type,
            accessor: Accessor::Scalar(Box::new(read)),
        }
    }

    /// Describe a non-indexed property
    pub fn property<F>(name: impl Into<Cow<'a, str>>, declared_type: TypeTag, read: F) -> Self
    where
        F: Fn() -> ReadResult<Value<'a>> + 'a,
    {
        Self {
            name: name.into(),
            kind: MemberKind::Property,
            declared_type,
            accessor: Accessor::Scalar(Box::new(read)),
        }
    }

    /// Describe an indexed property
    ///
    /// `declared_type` is the element type returned by a single indexed read.
    pub fn indexed_property<F>(
        name: impl Into<Cow<'a, str>>,
        declared_type: TypeTag,
        params: Vec<IndexParam>,
        read: F,
    ) -> Self
    where
        F: Fn(&[IndexArg]) -> ReadResult<Value<'a>> + 'a,
    {
        Self {
            name: name.into(),
            kind: MemberKind::Property,
            declared_type,
            accessor: Accessor::Indexed {
                params,
                read: Box::new(read),
            },
        }
    }

    /// Describe a field holding an already-materialized value
    pub fn field_value(name: impl Into<Cow<'a, str>>, value: Value<'a>) -> Self {
        let declared_type = value.type_tag();
        Self::field(name, declared_type, move || Ok(value.clone()))
    }

    /// Describe a property holding an already-materialized value
    pub fn property_value(name: impl Into<Cow<'a, str>>, value: Value<'a>) -> Self {
        let declared_type = value.type_tag();
        Self::property(name, declared_type, move || Ok(value.clone()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> MemberKind {
        self.kind
    }

    pub fn declared_type(&self) -> &TypeTag {
        &self.declared_type
    }

    pub fn accessor(&self) -> &Accessor<'a> {
        &self.accessor
    }

    /// Declared index parameters (empty for scalar members)
    pub fn index_params(&self) -> &[IndexParam] {
        match &self.accessor {
            Accessor::Scalar(_) => &[],
            Accessor::Indexed { params, .. } => params.as_slice(),
        }
    }

    /// Number of index arguments a read requires (0 = scalar)
    pub fn index_arity(&self) -> usize {
        self.index_params().len()
    }

    /// True for the collection-style shape: exactly one integer index
    pub fn has_single_int_index(&self) -> bool {
        matches!(self.index_params(), [IndexParam::Int])
    }

    /// Read a scalar member
    pub fn read(&self) -> ReadResult<Value<'a>> {
        self.read_at(&[])
    }

    /// Read the member with the given index arguments
    pub fn read_at(&self, args: &[IndexArg]) -> ReadResult<Value<'a>> {
        let expected = self.index_arity();
        if args.len() != expected {
            return Err(ReadError::IndexArity {
                member: self.name.to_string(),
                expected,
                actual: args.len(),
            });
        }

        match &self.accessor {
            Accessor::Scalar(read) => read(),
            Accessor::Indexed { read, .. } => read(args),
        }
    }
}

impl fmt::Debug for MemberDescriptor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemberDescriptor")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("declared_type", &self.declared_type)
            .field("index_params", &self.index_params())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_read() {
        let name = String::from("Ada");
        let member = MemberDescriptor::property("Name", TypeTag::STRING, || Ok(Value::from(&name)));

        assert_eq!(member.kind(), MemberKind::Property);
        assert_eq!(member.index_arity(), 0);
        assert_eq!(member.read().unwrap().as_str(), Some("Ada"));
    }

    #[test]
    fn test_indexed_read_checks_arity() {
        let items = vec![10i64, 20, 30];
        let member = MemberDescriptor::indexed_property(
            "Item",
            TypeTag::INT,
            vec![IndexParam::Int],
            |args| match args {
                [IndexArg::Int(i)] => usize::try_from(*i)
                    .ok()
                    .and_then(|i| items.get(i))
                    .map(|n| Value::Int(*n))
                    .ok_or(ReadError::IndexOutOfRange {
                        member: "Item".into(),
                        index: *i,
                        len: items.len(),
                    }),
                _ => Err(ReadError::accessor("Item", "integer index expected")),
            },
        );

        assert!(member.has_single_int_index());
        assert!(matches!(member.read_at(&[IndexArg::Int(1)]), Ok(Value::Int(20))));
        assert_eq!(
            member.read().unwrap_err(),
            ReadError::IndexArity {
                member: "Item".into(),
                expected: 1,
                actual: 0,
            }
        );
        assert!(matches!(
            member.read_at(&[IndexArg::Int(3)]),
            Err(ReadError::IndexOutOfRange { index: 3, len: 3, .. })
        ));
    }

    #[test]
    fn test_string_keyed_indexer_is_not_collection_shaped() {
        let member = MemberDescriptor::indexed_property(
            "Setting",
            TypeTag::STRING,
            vec![IndexParam::Str],
            |_| Ok(Value::Null),
        );
        assert!(!member.has_single_int_index());
        assert_eq!(member.index_arity(), 1);
    }

    #[test]
    fn test_value_backed_field() {
        let member = MemberDescriptor::field_value("count", Value::UInt(4));
        assert_eq!(member.kind(), MemberKind::Field);
        assert_eq!(member.declared_type(), &TypeTag::UINT);
        assert_eq!(member.read().unwrap().as_count(), Some(4));
    }
}
