//! Error types for template parsing

use thiserror::Error;

/// Template syntax errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// Segment contains an unmatched `{` or `}`
    #[error("Unbalanced braces in segment '{0}'")]
    UnbalancedBraces(String),

    /// Two `/` with nothing between them
    #[error("Empty segment")]
    EmptySegment,

    /// `{}` or a parameter expression with no name
    #[error("Empty parameter name in segment '{0}'")]
    EmptyParameterName(String),

    /// Parameter name reused within one template (case-insensitive)
    #[error("Duplicate parameter name '{0}'")]
    DuplicateParameterName(String),

    /// Catch-all somewhere other than the entire final segment
    #[error("Catch-all parameter '{0}' must be the entire final segment")]
    MisplacedCatchAll(String),

    /// A colon with no constraint name after it
    #[error("Empty constraint on parameter '{0}'")]
    EmptyConstraint(String),

    /// A segment may carry at most one parameter part
    #[error("Segment '{0}' declares more than one parameter")]
    MultipleParameters(String),
}
