//! Ambiguity detection over equal-precedence routes
//!
//! Two templates of equal precedence are ambiguous when a concrete path
//! could match both. Precedence equality already forces identical segment
//! counts and segment shapes, so the overlap test only has to compare
//! structure: same part counts, and every pair of literal parts equal under
//! case-insensitive comparison. Parameter parts bind arbitrary text, so any
//! pairing that involves a parameter can always overlap.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use waypoint_template::{RouteTemplate, SegmentPart, TemplateSegment};

use crate::table::{HandlerId, RouteEntry};

/// True when the two templates could match the same concrete path.
///
/// Constraints are ignored here on purpose: `/{x:int}/a` and `/{y}/a` are
/// treated as overlapping, the pair is only buildable because their
/// precedences differ.
pub fn ambiguous(a: &RouteTemplate, b: &RouteTemplate) -> bool {
    if a.segments.len() != b.segments.len() {
        return false;
    }
    a.segments
        .iter()
        .zip(&b.segments)
        .all(|(sa, sb)| segments_overlap(sa, sb))
}

fn segments_overlap(a: &TemplateSegment, b: &TemplateSegment) -> bool {
    if a.parts.len() != b.parts.len() {
        return false;
    }
    a.parts.iter().zip(&b.parts).all(|(pa, pb)| match (pa, pb) {
        (SegmentPart::Literal(x), SegmentPart::Literal(y)) => x.eq_ignore_ascii_case(y),
        _ => true,
    })
}

/// Collect every ambiguous pair among entries sharing a precedence.
///
/// `entries` must already be sorted by precedence so equal scores are
/// adjacent; pairs with different precedence are never ambiguous by
/// construction and are not examined.
pub(crate) fn detect_conflicts(entries: &[RouteEntry]) -> Vec<RouteConflict> {
    let mut conflicts = Vec::new();
    let mut start = 0;

    while start < entries.len() {
        let mut end = start + 1;
        while end < entries.len() && entries[end].precedence == entries[start].precedence {
            end += 1;
        }

        for i in start..end {
            for j in (i + 1)..end {
                if ambiguous(&entries[i].template, &entries[j].template) {
                    warn!(
                        first = %entries[i].template,
                        first_handler = %entries[i].handler,
                        second = %entries[j].template,
                        second_handler = %entries[j].handler,
                        "Ambiguous route pair"
                    );
                    conflicts.push(RouteConflict {
                        first_handler: entries[i].handler.clone(),
                        first_template: entries[i].text().to_string(),
                        second_handler: entries[j].handler.clone(),
                        second_template: entries[j].text().to_string(),
                    });
                }
            }
        }

        start = end;
    }

    conflicts
}

/// One pair of overlapping equal-precedence routes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteConflict {
    /// Handler owning the first template
    pub first_handler: HandlerId,
    /// First template's literal text
    pub first_template: String,
    /// Handler owning the second template
    pub second_handler: HandlerId,
    /// Second template's literal text
    pub second_template: String,
}

impl fmt::Display for RouteConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' (handler '{}') overlaps '{}' (handler '{}')",
            self.first_template, self.first_handler, self.second_template, self.second_handler
        )
    }
}

/// Every ambiguous pair found during one build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictReport {
    /// Conflicting pairs in table order
    pub conflicts: Vec<RouteConflict>,
}

impl fmt::Display for ConflictReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ambiguous routes: ")?;
        for (idx, conflict) in self.conflicts.iter().enumerate() {
            if idx > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", conflict)?;
        }
        Ok(())
    }
}
