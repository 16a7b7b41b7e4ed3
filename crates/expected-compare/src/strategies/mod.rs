//! Built-in comparison strategies

mod class;
mod equals;
mod sequence;

pub use class::ClassComparisonStrategy;
pub use equals::EqualsStrategy;
pub use sequence::SequenceStrategy;
