//! Core types for structural comparison
//!
//! This crate provides the vocabulary shared by every comparison strategy:
//! runtime type tags, the dynamic [`Value`] read out of an object, the
//! [`MemberDescriptor`] view over fields and properties, the [`Inspect`]
//! trait that produces those descriptors, and the [`MemberValue`] sentinel
//! used when the actual object lacks a member the expected object declares.
//!
//! # Example
//!
//! ```
//! use expected_core::{Inspect, MemberDescriptor, TypeTag, Value};
//!
//! struct Customer {
//!     name: String,
//!     age: u32,
//! }
//!
//! impl Inspect for Customer {
//!     fn type_tag(&self) -> TypeTag {
//!         TypeTag::class("Customer")
//!     }
//!
//!     fn members(&self) -> Vec<MemberDescriptor<'_>> {
//!         vec![
//!             MemberDescriptor::property("Name", TypeTag::STRING, move || Ok(Value::from(&self.name))),
//!             MemberDescriptor::field("age", TypeTag::UINT, move || Ok(Value::from(self.age))),
//!         ]
//!     }
//! }
//!
//! let customer = Customer { name: "Ada".into(), age: 36 };
//! assert_eq!(customer.members().len(), 2);
//! ```

mod error;
mod inspect;
mod member;
mod sentinel;
mod type_tag;
mod value;

pub use error::{ReadError, ReadResult};
pub use inspect::Inspect;
pub use member::{Accessor, IndexArg, IndexParam, IndexedReadFn, MemberDescriptor, MemberKind, ReadFn};
pub use sentinel::MemberValue;
pub use type_tag::{TypeKind, TypeTag};
pub use value::Value;
