//! Waypoint Template - Route Template Model and Parser
//!
//! Parses raw path templates declared by application handlers into an
//! ordered sequence of segments, each made of literal and parameter parts.
//!
//! # Template Grammar
//!
//! ```text
//! /orders                      literal segments
//! /orders/{id}                 parameter
//! /orders/{id:int}             parameter with a constraint
//! /orders/{id:int:long}        multiple constraints, colon separated
//! /orders/{page?}              optional parameter
//! /orders/{page=1}             parameter with a default value
//! /files/{*path}               catch-all, must end the template
//! /report-{year}.pdf           literal prefix/suffix around a parameter
//! ```
//!
//! Leading and trailing slashes are trimmed before segmentation, so `""`,
//! `"/"` and `"///"` all parse to the empty root template. Literal text
//! compares case-insensitively everywhere downstream.
//!
//! Parsing is deterministic: the same raw string always yields structurally
//! equal `RouteTemplate` values.

mod error;
mod parser;
mod types;

// Re-exports: Error types
pub use error::TemplateError;

// Re-exports: Parser entry point
pub use parser::parse;

// Re-exports: Data model
pub use types::{ParameterPart, RouteTemplate, SegmentPart, TemplateSegment};
