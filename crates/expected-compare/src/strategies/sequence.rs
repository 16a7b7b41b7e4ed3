//! Element-wise comparison for array-shaped values

use crate::context::ComparisonContext;
use crate::error::CompareResult;
use crate::registry::ComparisonStrategy;
use expected_core::{MemberValue, TypeTag, Value};

/// Compares arrays element by element, by position
#[derive(Debug, Clone, Copy, Default)]
pub struct SequenceStrategy;

impl ComparisonStrategy for SequenceStrategy {
    fn name(&self) -> &'static str {
        "sequence"
    }

    fn can_compare(&self, type_tag: &TypeTag) -> bool {
        type_tag.is_array()
    }

    fn compare(
        &self,
        expected: &Value<'_>,
        actual: &Value<'_>,
        context: &mut ComparisonContext<'_>,
    ) -> CompareResult<bool> {
        let (Value::Seq(_, expected_items), Value::Seq(_, actual_items)) = (expected, actual) else {
            return Ok(false);
        };

        if expected_items.len() != actual_items.len() {
            context.report_count_mismatch("", expected_items.len(), Some(actual_items.len()));
            return Ok(false);
        }

        let mut all_equal = true;
        for (i, (e, a)) in expected_items.iter().zip(actual_items).enumerate() {
            let label = format!("[{}]", i);
            all_equal = context.are_equal(
                &MemberValue::Present(e.clone()),
                &MemberValue::Present(a.clone()),
                &label,
            )? && all_equal;
        }

        Ok(all_equal)
    }
}
