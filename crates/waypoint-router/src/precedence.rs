//! Precedence ranking for route templates
//!
//! Assigns every template a vector of per-segment ranks compared
//! lexicographically, earlier segments first. Literal segments beat
//! parameter segments, constrained parameters beat unconstrained ones and
//! catch-alls rank last. A template that runs out of segments while still
//! tied wins: the shorter route is checked first.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use waypoint_template::{RouteTemplate, TemplateSegment};

/// Specificity rank of a single segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SegmentRank {
    /// Only literal parts, most specific
    Literal,
    /// Literal parts around a parameter (prefix/suffix pattern)
    Mixed,
    /// A single parameter; more constraints rank higher
    Parameter { constraints: u32 },
    /// A catch-all parameter, least specific
    CatchAll,
}

impl SegmentRank {
    /// Rank one segment of a parsed template
    pub fn of(segment: &TemplateSegment) -> Self {
        match segment.parameter() {
            None => SegmentRank::Literal,
            Some(param) if param.catch_all => SegmentRank::CatchAll,
            Some(_) if segment.parts.len() > 1 => SegmentRank::Mixed,
            Some(param) => SegmentRank::Parameter {
                constraints: param.constraints.len() as u32,
            },
        }
    }

    /// Coarse class compared before the constraint tiebreak
    fn class(self) -> u8 {
        match self {
            SegmentRank::Literal => 0,
            SegmentRank::Mixed => 1,
            SegmentRank::Parameter { .. } => 2,
            SegmentRank::CatchAll => 3,
        }
    }
}

impl Ord for SegmentRank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.class().cmp(&other.class()).then_with(|| match (self, other) {
            (
                SegmentRank::Parameter { constraints: a },
                SegmentRank::Parameter { constraints: b },
            ) => b.cmp(a),
            _ => Ordering::Equal,
        })
    }
}

impl PartialOrd for SegmentRank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Total specificity order over templates; `Less` sorts first (more specific)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Precedence {
    ranks: Vec<SegmentRank>,
}

impl Precedence {
    /// Compute the precedence of a parsed template
    pub fn of(template: &RouteTemplate) -> Self {
        Self {
            ranks: template.segments.iter().map(SegmentRank::of).collect(),
        }
    }

    /// Per-segment ranks, most significant first
    pub fn ranks(&self) -> &[SegmentRank] {
        &self.ranks
    }
}

impl Ord for Precedence {
    fn cmp(&self, other: &Self) -> Ordering {
        let mut a = self.ranks.iter();
        let mut b = other.ranks.iter();
        loop {
            match (a.next(), b.next()) {
                (Some(x), Some(y)) => match x.cmp(y) {
                    Ordering::Equal => continue,
                    ord => return ord,
                },
                // An exhausted side counts as maximally specific, so a
                // shorter template precedes a longer one it ties with.
                (None, Some(_)) => return Ordering::Less,
                (Some(_), None) => return Ordering::Greater,
                (None, None) => return Ordering::Equal,
            }
        }
    }
}

impl PartialOrd for Precedence {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waypoint_template::parse;

    fn precedence(raw: &str) -> Precedence {
        Precedence::of(&parse(raw).unwrap())
    }

    #[test]
    fn test_literal_beats_parameter() {
        assert!(precedence("/Products/Edit") < precedence("/Products/{id}"));
    }

    #[test]
    fn test_mixed_sits_between_literal_and_parameter() {
        assert!(precedence("/files/report.pdf") < precedence("/files/report-{year}.pdf"));
        assert!(precedence("/files/report-{year}.pdf") < precedence("/files/{name}"));
    }

    #[test]
    fn test_constraint_count_breaks_ties() {
        assert!(precedence("/Product/{id:int}") < precedence("/Product/{id}"));
        assert!(precedence("/Product/{id:int:long}") < precedence("/Product/{id:int}"));
    }

    #[test]
    fn test_catch_all_ranks_last() {
        assert!(precedence("/files/{name}") < precedence("/files/{*path}"));
    }

    #[test]
    fn test_shorter_wins_when_prefix_equal() {
        assert!(precedence("/a/b") < precedence("/a/b/{c}"));
        assert!(precedence("/a/b") < precedence("/a/b/c"));
    }

    #[test]
    fn test_root_template_is_most_specific() {
        assert!(precedence("/") < precedence("/a"));
    }

    #[test]
    fn test_earlier_segments_dominate() {
        // A literal first segment outranks a parameter first segment no
        // matter what follows.
        assert!(precedence("/a/{x}/{y}") < precedence("/{x}/a/b"));
    }

    #[test]
    fn test_equal_shapes_compare_equal() {
        assert_eq!(precedence("/a/{x}"), precedence("/b/{y}"));
        assert_eq!(precedence("/{x:int}"), precedence("/{y:bool}"));
    }

    #[test]
    fn test_shorter_template_sorts_first_across_lengths() {
        // Pins down the "shorter route wins" modeling for prefix-equal
        // routes of every length pair in 1..=4.
        let routes = [
            precedence("/a"),
            precedence("/a/b"),
            precedence("/a/b/c"),
            precedence("/a/b/c/d"),
        ];
        for i in 0..routes.len() {
            for j in (i + 1)..routes.len() {
                assert!(routes[i] < routes[j], "length {} vs {}", i + 1, j + 1);
            }
        }
    }

    #[test]
    fn test_ordering_is_transitive_and_antisymmetric() {
        let corpus = [
            "/",
            "/a",
            "/a/b",
            "/a/{x}",
            "/a/{x:int}",
            "/a/{x:int:long}",
            "/a/b/{c}",
            "/{x}",
            "/{x}/b",
            "/a-{x}",
            "/files/{*rest}",
            "/{x}/{y}/{z}",
        ];
        let scores: Vec<Precedence> = corpus.iter().map(|raw| precedence(raw)).collect();

        for a in &scores {
            for b in &scores {
                assert_eq!(a.cmp(b), b.cmp(a).reverse());
                for c in &scores {
                    if a <= b && b <= c {
                        assert!(a <= c, "transitivity violated");
                    }
                }
            }
        }
    }
}
