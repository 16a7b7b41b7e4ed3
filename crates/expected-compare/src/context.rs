//! The comparison context: recursive dispatch and failure accumulation

use crate::error::{CompareError, CompareResult};
use crate::options::CompareOptions;
use crate::registry::StrategyRegistry;
use crate::report::{DiffCategory, Difference};
use expected_core::{Inspect, MemberDescriptor, MemberKind, MemberValue, ReadError};
use tracing::{debug, trace};

/// State of one top-level comparison
///
/// The context owns the current path and every difference found so far.
/// Strategies call back into [`are_equal`](Self::are_equal) for nested
/// values; the context picks the strategy for each pair from its registry.
/// Use a fresh context per top-level comparison.
pub struct ComparisonContext<'r> {
    registry: &'r StrategyRegistry,
    options: &'r CompareOptions,
    path: Vec<String>,
    differences: Vec<Difference>,
}

impl<'r> ComparisonContext<'r> {
    pub fn new(registry: &'r StrategyRegistry, options: &'r CompareOptions) -> Self {
        Self {
            registry,
            options,
            path: Vec::new(),
            differences: Vec::new(),
        }
    }

    pub fn options(&self) -> &'r CompareOptions {
        self.options
    }

    /// Path of the value currently being compared
    pub fn path(&self) -> String {
        join_path(self.path.iter().map(String::as_str))
    }

    /// Path a child labelled `label` would have
    pub fn child_path(&self, label: &str) -> String {
        join_path(
            self.path
                .iter()
                .map(String::as_str)
                .chain(std::iter::once(label)),
        )
    }

    pub fn depth(&self) -> usize {
        self.path.len()
    }

    pub fn differences(&self) -> &[Difference] {
        &self.differences
    }

    pub fn into_differences(self) -> Vec<Difference> {
        self.differences
    }

    /// Compare two values under `label`, relative to the current path
    ///
    /// Labels are joined with `.`, except labels starting with `[` which are
    /// appended directly (`Lines` + `[2]` = `Lines[2]`). An empty label keeps
    /// the current path. Paths listed in
    /// [`CompareOptions::ignore_members`] compare as equal and record nothing.
    pub fn are_equal(
        &mut self,
        expected: &MemberValue<'_>,
        actual: &MemberValue<'_>,
        label: &str,
    ) -> CompareResult<bool> {
        if !label.is_empty() && !self.options.ignore_members.is_empty() {
            let path = self.child_path(label);
            if self.options.is_ignored(&path) {
                debug!(path = %path, "Ignoring value");
                return Ok(true);
            }
        }

        if self.path.len() >= self.options.max_depth {
            return Err(CompareError::DepthExceeded {
                path: self.child_path(label),
                limit: self.options.max_depth,
            });
        }

        self.path.push(label.to_string());
        let result = self.compare_current(expected, actual);
        self.path.pop();
        result
    }

    fn compare_current(
        &mut self,
        expected: &MemberValue<'_>,
        actual: &MemberValue<'_>,
    ) -> CompareResult<bool> {
        let (expected_value, actual_value) = match (expected, actual) {
            (MemberValue::Present(e), MemberValue::Present(a)) => (e, a),
            (MemberValue::Missing(e), MemberValue::Missing(a)) => {
                if e == a {
                    return Ok(true);
                }
                self.record(DiffCategory::Type, e.to_string(), a.to_string());
                return Ok(false);
            }
            (MemberValue::Present(e), MemberValue::Missing(_)) => {
                self.record(DiffCategory::Missing, e.to_string(), actual.to_string());
                return Ok(false);
            }
            (MemberValue::Missing(_), MemberValue::Present(a)) => {
                self.record(DiffCategory::Extra, "(not present)".to_string(), a.to_string());
                return Ok(false);
            }
        };

        let expected_type = expected_value.type_tag();
        let actual_type = actual_value.type_tag();
        if expected_type.kind() != actual_type.kind() {
            self.record(
                DiffCategory::Type,
                format!("{} ({})", expected_value, expected_type),
                format!("{} ({})", actual_value, actual_type),
            );
            return Ok(false);
        }

        let registry = self.registry;
        let strategy = registry
            .select(&expected_type)
            .ok_or_else(|| CompareError::NoStrategy {
                type_name: expected_type.name().to_string(),
            })?;

        trace!(path = %self.path(), strategy = strategy.name(), "Comparing values");

        let recorded = self.differences.len();
        let equal = strategy.compare(expected_value, actual_value, self)?;

        // Leaf strategies report through their return value only
        if !equal && self.differences.len() == recorded {
            self.record(
                DiffCategory::Value,
                expected_value.to_string(),
                actual_value.to_string(),
            );
        }

        Ok(equal)
    }

    /// Visit every property the expected object declares
    ///
    /// `per_member` receives the expected descriptor and the same-named
    /// property of the actual object, if any. Results are AND-folded without
    /// short-circuiting so every mismatch is recorded.
    pub fn compare_properties<F>(
        &mut self,
        expected: &dyn Inspect,
        actual: &dyn Inspect,
        per_member: F,
    ) -> CompareResult<bool>
    where
        F: FnMut(&mut Self, &MemberDescriptor<'_>, Option<&MemberDescriptor<'_>>) -> CompareResult<bool>,
    {
        self.compare_members(MemberKind::Property, expected, actual, per_member)
    }

    /// Visit every field the expected object declares
    ///
    /// Same contract as [`compare_properties`](Self::compare_properties).
    pub fn compare_fields<F>(
        &mut self,
        expected: &dyn Inspect,
        actual: &dyn Inspect,
        per_member: F,
    ) -> CompareResult<bool>
    where
        F: FnMut(&mut Self, &MemberDescriptor<'_>, Option<&MemberDescriptor<'_>>) -> CompareResult<bool>,
    {
        self.compare_members(MemberKind::Field, expected, actual, per_member)
    }

    fn compare_members<F>(
        &mut self,
        kind: MemberKind,
        expected: &dyn Inspect,
        actual: &dyn Inspect,
        mut per_member: F,
    ) -> CompareResult<bool>
    where
        F: FnMut(&mut Self, &MemberDescriptor<'_>, Option<&MemberDescriptor<'_>>) -> CompareResult<bool>,
    {
        let expected_members = expected.members();
        let actual_members = actual.members();
        let mut all_equal = true;

        for member in expected_members.iter().filter(|m| m.kind() == kind) {
            let path = self.child_path(member.name());
            if self.options.is_ignored(&path) {
                debug!(path = %path, "Ignoring member");
                continue;
            }

            let counterpart = actual_members
                .iter()
                .find(|m| m.kind() == kind && m.name() == member.name());

            all_equal = per_member(self, member, counterpart)? && all_equal;
        }

        Ok(all_equal)
    }

    /// Record a difference for the child `label` of the current path
    pub fn report_difference(
        &mut self,
        label: &str,
        category: DiffCategory,
        expected: String,
        actual: String,
    ) {
        let path = self.child_path(label);
        debug!(path = %path, category = %category, expected = %expected, actual = %actual, "Difference found");
        self.differences.push(Difference {
            category,
            path,
            expected,
            actual,
        });
    }

    /// Record a collection length mismatch for the child `label`
    pub fn report_count_mismatch(&mut self, label: &str, expected: usize, actual: Option<usize>) {
        let actual = actual.map_or_else(|| "(no count)".to_string(), |n| n.to_string());
        self.report_difference(label, DiffCategory::Count, expected.to_string(), actual);
    }

    /// Wrap an accessor failure with the path of the member being read
    pub fn read_error(&self, label: &str, source: ReadError) -> CompareError {
        CompareError::Read {
            path: self.child_path(label),
            source,
        }
    }

    fn record(&mut self, category: DiffCategory, expected: String, actual: String) {
        self.report_difference("", category, expected, actual);
    }
}

fn join_path<'s>(segments: impl Iterator<Item = &'s str>) -> String {
    let mut path = String::new();
    for segment in segments.filter(|s| !s.is_empty()) {
        if !path.is_empty() && !segment.starts_with('[') {
            path.push('.');
        }
        path.push_str(segment);
    }
    path
}
