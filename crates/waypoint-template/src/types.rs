//! Route template data model
//!
//! Centralizes the parsed representation shared by the parser and the
//! router crate.

use serde::{Deserialize, Serialize};

/// A parsed route template: an ordered sequence of path segments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteTemplate {
    /// Original raw text, kept for diagnostics
    pub text: String,

    /// Segments in path order
    pub segments: Vec<TemplateSegment>,
}

impl RouteTemplate {
    /// All parameters in path order
    pub fn parameters(&self) -> Vec<&ParameterPart> {
        self.segments
            .iter()
            .filter_map(|segment| segment.parameter())
            .collect()
    }

    /// Declared parameter names in path order
    pub fn parameter_names(&self) -> Vec<&str> {
        self.parameters()
            .into_iter()
            .map(|param| param.name.as_str())
            .collect()
    }
}

impl std::fmt::Display for RouteTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// One `/`-delimited unit of a template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSegment {
    /// Literal and parameter parts in order; at most one part is a parameter
    pub parts: Vec<SegmentPart>,
}

impl TemplateSegment {
    /// The segment's parameter part, if any
    pub fn parameter(&self) -> Option<&ParameterPart> {
        self.parts.iter().find_map(|part| match part {
            SegmentPart::Parameter(param) => Some(param),
            SegmentPart::Literal(_) => None,
        })
    }

    /// True when every part is literal text
    pub fn is_literal(&self) -> bool {
        self.parameter().is_none()
    }

    /// True when the segment is a catch-all parameter
    pub fn is_catch_all(&self) -> bool {
        self.parameter().is_some_and(|param| param.catch_all)
    }
}

/// One piece of a segment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SegmentPart {
    /// Fixed text, compared case-insensitively
    Literal(String),
    /// A named parameter
    Parameter(ParameterPart),
}

/// A parameter declared inside `{` `}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterPart {
    /// Parameter name, unique within the template (case-insensitive)
    pub name: String,

    /// Captures all remaining path segments (`{*name}` or `{**name}`)
    pub catch_all: bool,

    /// Trailing `?`: the segment may be absent from a matching path
    pub optional: bool,

    /// Constraint names, evaluated by an external resolver
    pub constraints: Vec<String>,

    /// Value supplied when the path omits the segment (`{name=value}`)
    pub default: Option<String>,
}
