//! Template parser
//!
//! Splits a raw template into `/`-delimited segments and scans each segment
//! for literal runs and `{...}` parameter expressions. Inside the braces, a
//! trailing `?` marks the parameter optional, `=` introduces a default
//! value, and colons separate the name from its constraint list. A leading
//! `*` or `**` marks a catch-all.

use std::collections::HashSet;

use tracing::trace;

use crate::error::TemplateError;
use crate::types::{ParameterPart, RouteTemplate, SegmentPart, TemplateSegment};

/// Parse a raw route template.
///
/// Leading and trailing slashes are trimmed before segmentation; `""` and
/// `"/"` parse to the empty root template.
pub fn parse(raw: &str) -> Result<RouteTemplate, TemplateError> {
    let trimmed = raw.trim_matches('/');

    let mut segments = Vec::new();
    let mut seen_names: HashSet<String> = HashSet::new();

    if !trimmed.is_empty() {
        for piece in trimmed.split('/') {
            if piece.is_empty() {
                return Err(TemplateError::EmptySegment);
            }
            segments.push(parse_segment(piece, &mut seen_names)?);
        }
    }

    // A catch-all may only appear as the entire final segment
    let last = segments.len().saturating_sub(1);
    for (idx, segment) in segments.iter().enumerate() {
        if let Some(param) = segment.parameter() {
            if param.catch_all && (idx != last || segment.parts.len() != 1) {
                return Err(TemplateError::MisplacedCatchAll(param.name.clone()));
            }
        }
    }

    trace!(template = %raw, segments = segments.len(), "Parsed route template");

    Ok(RouteTemplate {
        text: raw.to_string(),
        segments,
    })
}

/// Parse one segment into literal runs and at most one parameter part
fn parse_segment(
    segment: &str,
    seen_names: &mut HashSet<String>,
) -> Result<TemplateSegment, TemplateError> {
    let mut parts: Vec<SegmentPart> = Vec::new();
    let mut rest = segment;

    while let Some(open) = rest.find(['{', '}']) {
        if rest.as_bytes()[open] == b'}' {
            return Err(TemplateError::UnbalancedBraces(segment.to_string()));
        }
        if open > 0 {
            parts.push(SegmentPart::Literal(rest[..open].to_string()));
        }

        let after = &rest[open + 1..];
        let close = after
            .find(['{', '}'])
            .ok_or_else(|| TemplateError::UnbalancedBraces(segment.to_string()))?;
        if after.as_bytes()[close] == b'{' {
            return Err(TemplateError::UnbalancedBraces(segment.to_string()));
        }

        if parts.iter().any(|p| matches!(p, SegmentPart::Parameter(_))) {
            return Err(TemplateError::MultipleParameters(segment.to_string()));
        }

        let param = parse_parameter(&after[..close], segment, seen_names)?;
        parts.push(SegmentPart::Parameter(param));
        rest = &after[close + 1..];
    }

    if !rest.is_empty() {
        parts.push(SegmentPart::Literal(rest.to_string()));
    }

    Ok(TemplateSegment { parts })
}

/// Parse the text between `{` and `}`
fn parse_parameter(
    body: &str,
    segment: &str,
    seen_names: &mut HashSet<String>,
) -> Result<ParameterPart, TemplateError> {
    let (catch_all, body) = if let Some(rest) = body.strip_prefix("**") {
        (true, rest)
    } else if let Some(rest) = body.strip_prefix('*') {
        (true, rest)
    } else {
        (false, body)
    };

    let (body, optional) = match body.strip_suffix('?') {
        Some(rest) => (rest, true),
        None => (body, false),
    };

    let (head, default) = match body.split_once('=') {
        Some((head, default)) => (head, Some(default.to_string())),
        None => (body, None),
    };

    let mut pieces = head.split(':');
    let name = pieces.next().unwrap_or("");
    if name.is_empty() {
        return Err(TemplateError::EmptyParameterName(segment.to_string()));
    }

    let mut constraints = Vec::new();
    for constraint in pieces {
        if constraint.is_empty() {
            return Err(TemplateError::EmptyConstraint(name.to_string()));
        }
        constraints.push(constraint.to_string());
    }

    if !seen_names.insert(name.to_ascii_lowercase()) {
        return Err(TemplateError::DuplicateParameterName(name.to_string()));
    }

    Ok(ParameterPart {
        name: name.to_string(),
        catch_all,
        optional,
        constraints,
        default,
    })
}
