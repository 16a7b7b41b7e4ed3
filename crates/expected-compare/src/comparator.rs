//! Top-level comparison entry points

use crate::context::ComparisonContext;
use crate::error::CompareResult;
use crate::options::CompareOptions;
use crate::registry::StrategyRegistry;
use crate::report::ComparisonResult;
use expected_core::{Inspect, MemberValue, Value};
use tracing::{debug, instrument};

/// Compare two objects with the default strategies
#[instrument(skip_all, fields(expected = %expected.type_tag(), actual = %actual.type_tag()))]
pub fn compare(
    expected: &dyn Inspect,
    actual: &dyn Inspect,
    options: &CompareOptions,
) -> CompareResult<ComparisonResult> {
    let registry = StrategyRegistry::default();
    let mut context = ComparisonContext::new(&registry, options);
    run(&mut context, &Value::Object(expected), &Value::Object(actual))
}

/// A registry and options bundled for repeated comparisons
///
/// The comparator is immutable while comparing and can be shared between
/// threads; each call builds its own [`ComparisonContext`].
pub struct Comparator {
    registry: StrategyRegistry,
    options: CompareOptions,
}

impl Default for Comparator {
    fn default() -> Self {
        Self::new(CompareOptions::default())
    }
}

impl Comparator {
    /// Create a comparator using the default strategies
    pub fn new(options: CompareOptions) -> Self {
        Self::with_registry(StrategyRegistry::default(), options)
    }

    pub fn with_registry(registry: StrategyRegistry, options: CompareOptions) -> Self {
        Self { registry, options }
    }

    pub fn registry(&self) -> &StrategyRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut StrategyRegistry {
        &mut self.registry
    }

    pub fn options(&self) -> &CompareOptions {
        &self.options
    }

    /// Compare two objects member by member
    #[instrument(skip_all, fields(expected = %expected.type_tag(), actual = %actual.type_tag()))]
    pub fn compare(
        &self,
        expected: &dyn Inspect,
        actual: &dyn Inspect,
    ) -> CompareResult<ComparisonResult> {
        self.compare_values(&Value::Object(expected), &Value::Object(actual))
    }

    /// Compare two arbitrary values
    pub fn compare_values(
        &self,
        expected: &Value<'_>,
        actual: &Value<'_>,
    ) -> CompareResult<ComparisonResult> {
        let mut context = ComparisonContext::new(&self.registry, &self.options);
        run(&mut context, expected, actual)
    }

    /// Compare two JSON documents
    pub fn compare_json(
        &self,
        expected: &serde_json::Value,
        actual: &serde_json::Value,
    ) -> CompareResult<ComparisonResult> {
        self.compare_values(&Value::from_json(expected), &Value::from_json(actual))
    }
}

fn run(
    context: &mut ComparisonContext<'_>,
    expected: &Value<'_>,
    actual: &Value<'_>,
) -> CompareResult<ComparisonResult> {
    let passed = context.are_equal(
        &MemberValue::Present(expected.clone()),
        &MemberValue::Present(actual.clone()),
        "",
    )?;

    let differences = context.differences().to_vec();
    debug!(passed, differences = differences.len(), "Comparison finished");

    Ok(ComparisonResult {
        passed,
        differences,
    })
}
