//! Member-wise comparison for class-shaped values

use crate::context::ComparisonContext;
use crate::error::CompareResult;
use crate::registry::ComparisonStrategy;
use expected_core::{
    IndexArg, Inspect, MemberDescriptor, MemberKind, MemberValue, ReadError, TypeKind, TypeTag, Value,
};
use tracing::trace;

/// Compares two objects member by member
///
/// Every property and field the expected object declares is paired with the
/// same-named member of the actual object and compared through the context.
/// Members missing on the actual side are compared against a
/// [`MemberValue::Missing`] sentinel typed after the expected member.
///
/// Integer-indexed properties are compared index by index when the objects
/// expose a count property (see
/// [`CompareOptions::count_member`](crate::CompareOptions::count_member)).
/// Without one, and for any other index shape, the property is skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassComparisonStrategy;

impl ComparisonStrategy for ClassComparisonStrategy {
    fn name(&self) -> &'static str {
        "class"
    }

    fn can_compare(&self, type_tag: &TypeTag) -> bool {
        type_tag.is_class()
    }

    fn compare(
        &self,
        expected: &Value<'_>,
        actual: &Value<'_>,
        context: &mut ComparisonContext<'_>,
    ) -> CompareResult<bool> {
        let (Some(expected), Some(actual)) = (expected.as_object(), actual.as_object()) else {
            return Ok(false);
        };

        let properties_equal = context.compare_properties(expected, actual, |ctx, member, counterpart| {
            compare_property(ctx, member, counterpart, expected, actual)
        })?;

        let fields_equal = context.compare_fields(expected, actual, compare_scalar)?;

        Ok(properties_equal && fields_equal)
    }
}

fn compare_property(
    context: &mut ComparisonContext<'_>,
    member: &MemberDescriptor<'_>,
    counterpart: Option<&MemberDescriptor<'_>>,
    expected: &dyn Inspect,
    actual: &dyn Inspect,
) -> CompareResult<bool> {
    if member.index_arity() == 0 {
        return compare_scalar(context, member, counterpart);
    }

    if !member.has_single_int_index() {
        trace!(
            path = %context.child_path(member.name()),
            params = ?member.index_params(),
            "Skipping indexed property with unsupported index shape"
        );
        return Ok(true);
    }

    compare_indexed(context, member, counterpart, expected, actual)
}

/// Fields and non-indexed properties
fn compare_scalar(
    context: &mut ComparisonContext<'_>,
    member: &MemberDescriptor<'_>,
    counterpart: Option<&MemberDescriptor<'_>>,
) -> CompareResult<bool> {
    let expected_value = member
        .read()
        .map_err(|source| context.read_error(member.name(), source))?;

    // An indexed member cannot stand in for a scalar one
    let actual_value = match counterpart.filter(|c| c.index_arity() == 0) {
        Some(counterpart) => MemberValue::Present(
            counterpart
                .read()
                .map_err(|source| context.read_error(member.name(), source))?,
        ),
        None => MemberValue::missing(member.declared_type()),
    };

    context.are_equal(&MemberValue::Present(expected_value), &actual_value, member.name())
}

fn compare_indexed(
    context: &mut ComparisonContext<'_>,
    member: &MemberDescriptor<'_>,
    counterpart: Option<&MemberDescriptor<'_>>,
    expected: &dyn Inspect,
    actual: &dyn Inspect,
) -> CompareResult<bool> {
    let name = member.name();

    let Some(expected_count) = read_count(context, expected)? else {
        trace!(
            path = %context.child_path(name),
            count_member = %context.options().count_member,
            "Skipping indexed property without a count"
        );
        return Ok(true);
    };

    let Some(counterpart) = counterpart.filter(|c| c.has_single_int_index()) else {
        let items = (0..expected_count)
            .map(|i| {
                let label = format!("{}[{}]", name, i);
                index_arg(name, i)
                    .and_then(|arg| member.read_at(&[arg]))
                    .map_err(|source| context.read_error(&label, source))
            })
            .collect::<CompareResult<Vec<_>>>()?;
        let expected_value = Value::Seq(
            TypeTag::new(format!("[{}]", member.declared_type()), TypeKind::Array),
            items,
        );

        return context.are_equal(
            &MemberValue::Present(expected_value),
            &MemberValue::missing(member.declared_type()),
            name,
        );
    };

    let actual_count = read_count(context, actual)?;
    if actual_count != Some(expected_count) {
        context.report_count_mismatch(name, expected_count, actual_count);
        return Ok(false);
    }

    let mut all_equal = true;
    for i in 0..expected_count {
        let label = format!("{}[{}]", name, i);
        let args = [index_arg(name, i).map_err(|source| context.read_error(&label, source))?];

        let expected_value = member
            .read_at(&args)
            .map_err(|source| context.read_error(&label, source))?;
        let actual_value = counterpart
            .read_at(&args)
            .map_err(|source| context.read_error(&label, source))?;

        all_equal = context.are_equal(
            &MemberValue::Present(expected_value),
            &MemberValue::Present(actual_value),
            &label,
        )? && all_equal;
    }

    Ok(all_equal)
}

/// Read the configured count property, if the object has a usable one
fn read_count(context: &ComparisonContext<'_>, object: &dyn Inspect) -> CompareResult<Option<usize>> {
    let count_member = context.options().count_member.as_str();

    let Some(member) = object
        .member(count_member, MemberKind::Property)
        .filter(|m| m.index_arity() == 0)
    else {
        return Ok(None);
    };

    let value = member
        .read()
        .map_err(|source| context.read_error(count_member, source))?;

    Ok(value.as_count())
}

/// Integer index argument for position `i`
fn index_arg(member: &str, i: usize) -> Result<IndexArg, ReadError> {
    i64::try_from(i)
        .map(IndexArg::Int)
        .map_err(|_| ReadError::accessor(member, format!("index {} exceeds the i64 range", i)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_arg() {
        assert_eq!(index_arg("Item", 3), Ok(IndexArg::Int(3)));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_index_arg_out_of_range() {
        assert_eq!(
            index_arg("Item", usize::MAX),
            Err(ReadError::accessor(
                "Item",
                format!("index {} exceeds the i64 range", usize::MAX)
            ))
        );
    }
}
