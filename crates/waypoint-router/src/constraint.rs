//! Constraint resolver seam
//!
//! Constraint *evaluation* belongs to the host: the table builder only
//! verifies that every declared constraint name resolves, and the
//! downstream matcher calls `matches` per concrete path segment.

use uuid::Uuid;

/// Trait for pluggable route constraint resolution
pub trait ConstraintResolver: Send + Sync {
    /// Whether the named constraint is recognized; checked at build time
    fn is_known(&self, constraint: &str) -> bool;

    /// Whether a concrete segment value satisfies the named constraint
    fn matches(&self, constraint: &str, value: &str) -> bool;

    /// Resolver name for logging
    fn name(&self) -> &'static str;
}

/// Stock resolver covering the built-in constraint set.
///
/// Recognizes `bool`, `decimal`, `double`, `float`, `guid`, `int` and
/// `long`. Hosts needing more (a `datetime`, a custom enum) plug in their
/// own resolver.
#[derive(Debug, Clone, Copy, Default)]
pub struct StockConstraintResolver;

impl ConstraintResolver for StockConstraintResolver {
    fn is_known(&self, constraint: &str) -> bool {
        matches!(
            constraint,
            "bool" | "decimal" | "double" | "float" | "guid" | "int" | "long"
        )
    }

    fn matches(&self, constraint: &str, value: &str) -> bool {
        match constraint {
            "bool" => value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("false"),
            "decimal" | "double" => value.parse::<f64>().is_ok(),
            "float" => value.parse::<f32>().is_ok(),
            "guid" => Uuid::parse_str(value).is_ok(),
            "int" => value.parse::<i32>().is_ok(),
            "long" => value.parse::<i64>().is_ok(),
            _ => false,
        }
    }

    fn name(&self) -> &'static str {
        "Stock"
    }
}
