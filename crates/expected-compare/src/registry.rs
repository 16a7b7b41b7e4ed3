//! Comparison strategies and the ordered registry that selects them

use crate::context::ComparisonContext;
use crate::error::CompareResult;
use crate::strategies::{ClassComparisonStrategy, EqualsStrategy, SequenceStrategy};
use expected_core::{TypeTag, Value};
use tracing::debug;

/// A way of comparing two values of an applicable type
///
/// Strategies hold no per-comparison state: everything a comparison
/// accumulates lives in the [`ComparisonContext`] passed to `compare`.
pub trait ComparisonStrategy: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Whether this strategy handles values of `type_tag`
    fn can_compare(&self, type_tag: &TypeTag) -> bool;

    /// Compare two values, recursing through `context` for nested values
    fn compare(
        &self,
        expected: &Value<'_>,
        actual: &Value<'_>,
        context: &mut ComparisonContext<'_>,
    ) -> CompareResult<bool>;
}

/// Strategies in priority order
///
/// The first strategy whose [`can_compare`](ComparisonStrategy::can_compare)
/// accepts a type handles it. The default registry tries primitives, then
/// arrays, then falls back to member-wise class comparison.
pub struct StrategyRegistry {
    strategies: Vec<Box<dyn ComparisonStrategy>>,
}

impl StrategyRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            strategies: Vec::new(),
        }
    }

    /// Add a strategy with the lowest priority
    pub fn register(&mut self, strategy: impl ComparisonStrategy + 'static) -> &mut Self {
        debug!(strategy = strategy.name(), "Registering comparison strategy");
        self.strategies.push(Box::new(strategy));
        self
    }

    /// Add a strategy ahead of every registered one
    pub fn register_first(&mut self, strategy: impl ComparisonStrategy + 'static) -> &mut Self {
        debug!(strategy = strategy.name(), "Registering comparison strategy first");
        self.strategies.insert(0, Box::new(strategy));
        self
    }

    /// First strategy applicable to `type_tag`
    pub fn select(&self, type_tag: &TypeTag) -> Option<&dyn ComparisonStrategy> {
        self.strategies
            .iter()
            .find(|s| s.can_compare(type_tag))
            .map(|s| s.as_ref())
    }

    /// Registered strategy names, in priority order
    pub fn names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        let mut registry = Self::new();
        registry
            .register(EqualsStrategy)
            .register(SequenceStrategy)
            .register(ClassComparisonStrategy);
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysEqual;

    impl ComparisonStrategy for AlwaysEqual {
        fn name(&self) -> &'static str {
            "always-equal"
        }

        fn can_compare(&self, type_tag: &TypeTag) -> bool {
            type_tag.is_primitive()
        }

        fn compare(
            &self,
            _expected: &Value<'_>,
            _actual: &Value<'_>,
            _context: &mut ComparisonContext<'_>,
        ) -> CompareResult<bool> {
            Ok(true)
        }
    }

    #[test]
    fn test_default_order() {
        let registry = StrategyRegistry::default();
        assert_eq!(registry.names(), vec!["equals", "sequence", "class"]);

        let select = |tag: &TypeTag| registry.select(tag).map(|s| s.name());
        assert_eq!(select(&TypeTag::INT), Some("equals"));
        assert_eq!(select(&TypeTag::array("Vec<u8>")), Some("sequence"));
        assert_eq!(select(&TypeTag::class("Order")), Some("class"));
    }

    #[test]
    fn test_register_first_takes_priority() {
        let mut registry = StrategyRegistry::default();
        registry.register_first(AlwaysEqual);

        assert_eq!(registry.len(), 4);
        assert_eq!(registry.select(&TypeTag::STRING).map(|s| s.name()), Some("always-equal"));
        assert_eq!(
            registry.select(&TypeTag::class("Order")).map(|s| s.name()),
            Some("class")
        );
    }

    #[test]
    fn test_empty_registry() {
        let registry = StrategyRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.select(&TypeTag::INT).is_none());
    }
}
