//! Route table builder
//!
//! Orchestrates parsing, per-handler unused-parameter computation,
//! precedence ranking and ambiguity checking, then assembles the final
//! immutable table. The builder is pure with respect to its inputs:
//! identical declarations always yield identical, stably-ordered tables.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info};

use waypoint_template::{parse, RouteTemplate};

use crate::ambiguity::{detect_conflicts, ConflictReport};
use crate::constraint::{ConstraintResolver, StockConstraintResolver};
use crate::error::BuildError;
use crate::precedence::Precedence;
use crate::table::{HandlerId, RouteEntry, RouteTable};

/// Collects handler template declarations and assembles the route table
pub struct RouteTableBuilder {
    resolver: Arc<dyn ConstraintResolver>,
    handlers: Vec<(HandlerId, Vec<String>)>,
}

impl RouteTableBuilder {
    /// Create a builder with the stock constraint resolver
    pub fn new() -> Self {
        Self {
            resolver: Arc::new(StockConstraintResolver),
            handlers: Vec::new(),
        }
    }

    /// Use a custom constraint resolver
    pub fn with_resolver(mut self, resolver: Arc<dyn ConstraintResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    /// Declare a handler and its raw templates
    pub fn add_handler<I, S>(mut self, handler: impl Into<HandlerId>, templates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.handlers.push((
            handler.into(),
            templates.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Build the immutable route table.
    ///
    /// Checks every pair of equal-precedence entries for ambiguity and
    /// collects all conflicting pairs before failing, so one build surfaces
    /// every conflict in the declaration set.
    pub fn build(self) -> Result<RouteTable, BuildError> {
        debug!(
            handlers = self.handlers.len(),
            resolver = self.resolver.name(),
            "Building route table"
        );

        let mut entries = Vec::new();

        for (handler, templates) in &self.handlers {
            let mut parsed = Vec::with_capacity(templates.len());
            for raw in templates {
                let template = parse(raw).map_err(|source| BuildError::Template {
                    handler: handler.clone(),
                    template: raw.clone(),
                    source,
                })?;
                self.check_constraints(handler, &template)?;
                parsed.push(template);
            }

            // Union of parameter names across this handler's overloads,
            // case-insensitive, in first-declared order
            let mut union: Vec<String> = Vec::new();
            for template in &parsed {
                for name in template.parameter_names() {
                    if !union.iter().any(|known| known.eq_ignore_ascii_case(name)) {
                        union.push(name.to_string());
                    }
                }
            }

            for template in parsed {
                let own: HashSet<String> = template
                    .parameter_names()
                    .into_iter()
                    .map(|name| name.to_ascii_lowercase())
                    .collect();
                let mut unused_params: Vec<String> = union
                    .iter()
                    .filter(|name| !own.contains(&name.to_ascii_lowercase()))
                    .cloned()
                    .collect();
                unused_params.sort();

                let precedence = Precedence::of(&template);
                entries.push(RouteEntry {
                    handler: handler.clone(),
                    template,
                    unused_params,
                    precedence,
                });
            }
        }

        // Most specific first; template text is a stable tie-break only,
        // never an ambiguity signal
        entries.sort_by(|a, b| {
            a.precedence
                .cmp(&b.precedence)
                .then_with(|| cmp_ignore_ascii_case(a.text(), b.text()))
        });

        let conflicts = detect_conflicts(&entries);
        if !conflicts.is_empty() {
            return Err(BuildError::Ambiguous(ConflictReport { conflicts }));
        }

        info!(entries = entries.len(), "Route table built");
        Ok(RouteTable::new(entries))
    }

    fn check_constraints(
        &self,
        handler: &HandlerId,
        template: &RouteTemplate,
    ) -> Result<(), BuildError> {
        for param in template.parameters() {
            for constraint in &param.constraints {
                if !self.resolver.is_known(constraint) {
                    return Err(BuildError::UnknownConstraint {
                        handler: handler.clone(),
                        template: template.text.clone(),
                        constraint: constraint.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl Default for RouteTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn cmp_ignore_ascii_case(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|byte| byte.to_ascii_lowercase())
        .cmp(b.bytes().map(|byte| byte.to_ascii_lowercase()))
}
