//! Comparison results and the differences they carry

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of comparing an expected object with an actual one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub passed: bool,
    pub differences: Vec<Difference>,
}

/// A specific difference between the two objects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Difference {
    pub category: DiffCategory,
    pub path: String,
    pub expected: String,
    pub actual: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffCategory {
    /// Same shape, different value
    Value,
    /// Values of different kinds (e.g. object vs primitive)
    Type,
    /// Member declared by the expected object is absent on the actual one
    Missing,
    /// Present on the actual side only
    Extra,
    /// Collections of different length
    Count,
}

impl fmt::Display for DiffCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiffCategory::Value => f.pad("VALUE"),
            DiffCategory::Type => f.pad("TYPE"),
            DiffCategory::Missing => f.pad("MISSING"),
            DiffCategory::Extra => f.pad("EXTRA"),
            DiffCategory::Count => f.pad("COUNT"),
        }
    }
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = if self.path.is_empty() { "(root)" } else { self.path.as_str() };
        write!(
            f,
            "[{:>7}] {} : expected={} actual={}",
            self.category, path, self.expected, self.actual
        )
    }
}

impl ComparisonResult {
    /// Paths of every recorded difference, in the order they were found
    pub fn paths(&self) -> Vec<&str> {
        self.differences.iter().map(|d| d.path.as_str()).collect()
    }

    /// Find the difference recorded for `path`
    pub fn difference_at(&self, path: &str) -> Option<&Difference> {
        self.differences.iter().find(|d| d.path == path)
    }

    /// Human-readable summary, one line per difference
    pub fn summary(&self) -> String {
        if self.passed {
            return "objects are equal".to_string();
        }

        let mut out = format!("objects differ ({} differences)", self.differences.len());
        for diff in &self.differences {
            out.push_str("\n   ");
            out.push_str(&diff.to_string());
        }
        out
    }
}
