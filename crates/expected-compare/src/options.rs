//! Comparison options

use std::collections::HashSet;
use std::env;
use tracing::warn;

/// Default recursion limit for nested comparisons
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Default name of the member holding an indexed collection's length
pub const DEFAULT_COUNT_MEMBER: &str = "Count";

/// Options for comparing objects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareOptions {
    /// Paths to leave out of the comparison, members or elements
    /// (e.g. `Audit.CreatedAt`, `Lines[0]`)
    pub ignore_members: HashSet<String>,
    /// Maximum nesting depth before the comparison is aborted
    pub max_depth: usize,
    /// Scalar property consulted before comparing an integer-indexed property
    pub count_member: String,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl CompareOptions {
    pub fn new() -> Self {
        Self {
            ignore_members: HashSet::new(),
            max_depth: DEFAULT_MAX_DEPTH,
            count_member: DEFAULT_COUNT_MEMBER.to_string(),
        }
    }

    /// Load options from environment variables
    ///
    /// - `EXPECTED_MAX_DEPTH`: recursion limit
    /// - `EXPECTED_COUNT_MEMBER`: name of the count property
    /// - `EXPECTED_IGNORE_MEMBERS`: comma separated member paths
    pub fn from_env() -> Self {
        let mut options = Self::new();

        if let Ok(raw) = env::var("EXPECTED_MAX_DEPTH") {
            match raw.trim().parse() {
                Ok(depth) => options.max_depth = depth,
                Err(_) => warn!(value = %raw, "Ignoring invalid EXPECTED_MAX_DEPTH"),
            }
        }

        if let Ok(name) = env::var("EXPECTED_COUNT_MEMBER") {
            if !name.trim().is_empty() {
                options.count_member = name.trim().to_string();
            }
        }

        if let Ok(paths) = env::var("EXPECTED_IGNORE_MEMBERS") {
            options.ignore_members.extend(
                paths
                    .split(',')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(str::to_string),
            );
        }

        options
    }

    pub fn ignore_member(mut self, path: &str) -> Self {
        self.ignore_members.insert(path.to_string());
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_count_member(mut self, name: &str) -> Self {
        self.count_member = name.to_string();
        self
    }

    /// Check whether a member path is excluded from comparison
    pub fn is_ignored(&self, path: &str) -> bool {
        self.ignore_members.contains(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = CompareOptions::default();
        assert_eq!(options.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(options.count_member, "Count");
        assert!(options.ignore_members.is_empty());
    }

    #[test]
    fn test_builder() {
        let options = CompareOptions::new()
            .ignore_member("Audit.CreatedAt")
            .with_max_depth(8)
            .with_count_member("Length");

        assert!(options.is_ignored("Audit.CreatedAt"));
        assert!(!options.is_ignored("Audit"));
        assert_eq!(options.max_depth, 8);
        assert_eq!(options.count_member, "Length");
    }

    #[test]
    fn test_from_env() {
        // Single test touches these variables to avoid races between tests
        env::set_var("EXPECTED_MAX_DEPTH", "12");
        env::set_var("EXPECTED_COUNT_MEMBER", "Size");
        env::set_var("EXPECTED_IGNORE_MEMBERS", "Id, Audit.CreatedAt,,");

        let options = CompareOptions::from_env();
        assert_eq!(options.max_depth, 12);
        assert_eq!(options.count_member, "Size");
        assert!(options.is_ignored("Id"));
        assert!(options.is_ignored("Audit.CreatedAt"));
        assert_eq!(options.ignore_members.len(), 2);

        env::set_var("EXPECTED_MAX_DEPTH", "deep");
        assert_eq!(CompareOptions::from_env().max_depth, DEFAULT_MAX_DEPTH);

        env::remove_var("EXPECTED_MAX_DEPTH");
        env::remove_var("EXPECTED_COUNT_MEMBER");
        env::remove_var("EXPECTED_IGNORE_MEMBERS");
    }
}
