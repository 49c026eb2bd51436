//! Error types for route table construction
//!
//! All failures are deterministic functions of the declared template set;
//! retrying a build never helps, the declarations have to change.

use thiserror::Error;

use waypoint_template::TemplateError;

use crate::ambiguity::ConflictReport;
use crate::table::HandlerId;

/// Route table build errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// A declared template failed to parse
    #[error("Invalid template '{template}' declared by handler '{handler}': {source}")]
    Template {
        /// Handler that declared the template
        handler: HandlerId,
        /// Raw template text
        template: String,
        /// Underlying syntax error
        #[source]
        source: TemplateError,
    },

    /// A template names a constraint the resolver does not recognize
    #[error("Unknown constraint '{constraint}' in template '{template}' declared by handler '{handler}'")]
    UnknownConstraint {
        /// Handler that declared the template
        handler: HandlerId,
        /// Raw template text
        template: String,
        /// Unrecognized constraint name
        constraint: String,
    },

    /// Equal-precedence templates that can match the same path
    #[error("{0}")]
    Ambiguous(ConflictReport),
}
