//! Strategy-dispatched deep equality
//!
//! This crate decides whether an *expected* object matches an *actual* one,
//! member by member, without requiring either type to implement
//! `PartialEq`. Objects describe themselves through
//! [`expected_core::Inspect`]; a [`ComparisonContext`] walks both object
//! graphs, picking a [`ComparisonStrategy`] for every pair of values and
//! recording each mismatch as a path-tagged [`Difference`].
//!
//! # Architecture
//!
//! ```text
//!   compare() ──► ComparisonContext::are_equal(expected, actual, path)
//!                        │
//!                        ▼
//!                 StrategyRegistry::select(type)
//!          ┌─────────────┼──────────────────┐
//!          ▼             ▼                  ▼
//!   EqualsStrategy  SequenceStrategy  ClassComparisonStrategy
//!                        │                  │
//!                        └──── are_equal ◄──┘  (per element / member)
//! ```
//!
//! # Example
//!
//! ```
//! use expected_compare::{Comparator, DiffCategory};
//! use serde_json::json;
//!
//! let expected = json!({"name": "kitchen", "brightness": 180});
//! let actual = json!({"name": "kitchen", "brightness": 90});
//!
//! let result = Comparator::default().compare_json(&expected, &actual).unwrap();
//! assert!(!result.passed);
//! assert_eq!(result.differences[0].path, "brightness");
//! assert_eq!(result.differences[0].category, DiffCategory::Value);
//! ```

mod comparator;
mod context;
mod error;
mod options;
mod registry;
mod report;
pub mod strategies;

pub use comparator::{compare, Comparator};
pub use context::ComparisonContext;
pub use error::{CompareError, CompareResult};
pub use options::{CompareOptions, DEFAULT_COUNT_MEMBER, DEFAULT_MAX_DEPTH};
pub use registry::{ComparisonStrategy, StrategyRegistry};
pub use report::{ComparisonResult, DiffCategory, Difference};
pub use strategies::{ClassComparisonStrategy, EqualsStrategy, SequenceStrategy};

// Re-export the core vocabulary for convenience
pub use expected_core::{
    IndexArg, IndexParam, Inspect, MemberDescriptor, MemberKind, MemberValue, ReadError, TypeKind,
    TypeTag, Value,
};
