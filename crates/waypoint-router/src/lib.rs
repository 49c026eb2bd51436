//! Waypoint Router - Route Table Construction
//!
//! Builds an ordered, ambiguity-checked route table from the path templates
//! declared by application handlers, and caches one table per handler set.
//!
//! # Architecture
//!
//! ```text
//! raw templates
//!     │
//!     ▼
//! ┌─────────────────────────┐
//! │    Template parsing     │  waypoint-template
//! └───────────┬─────────────┘
//!             ▼
//! ┌─────────────────────────┐
//! │   Precedence ranking    │  (Which template is more specific?)
//! └───────────┬─────────────┘
//!             ▼
//! ┌─────────────────────────┐
//! │   Ambiguity checking    │  (Could two templates overlap?)
//! └───────────┬─────────────┘
//!             ▼
//!        RouteTable ──► RouteTableCache
//! ```
//!
//! The table feeds a downstream matcher: entries come out most specific
//! first, each carrying its handler, parsed template, unused sibling
//! parameters and precedence. Constraint evaluation stays behind the
//! [`ConstraintResolver`] seam.
//!
//! # Example
//!
//! ```rust
//! use waypoint_router::{RouteKey, RouteTableBuilder, RouteTableCache};
//!
//! let cache = RouteTableCache::new();
//! let key = RouteKey::new("my-app");
//!
//! let table = cache
//!     .get_or_build(&key, || {
//!         RouteTableBuilder::new()
//!             .add_handler("Home", ["/"])
//!             .add_handler("Orders", ["/orders", "/orders/{id:int}"])
//!             .build()
//!     })
//!     .unwrap();
//!
//! assert_eq!(table.len(), 3);
//! ```

mod ambiguity;
mod builder;
mod cache;
mod constraint;
mod error;
mod precedence;
mod table;

// Re-exports: Error types
pub use error::BuildError;

// Re-exports: Ambiguity detection
pub use ambiguity::{ambiguous, ConflictReport, RouteConflict};

// Re-exports: Builder and table
pub use builder::RouteTableBuilder;
pub use table::{HandlerId, RouteEntry, RouteTable};

// Re-exports: Precedence ranking
pub use precedence::{Precedence, SegmentRank};

// Re-exports: Cache
pub use cache::{RouteKey, RouteTableCache, SourceId};

// Re-exports: Constraint resolution seam
pub use constraint::{ConstraintResolver, StockConstraintResolver};

// Re-export template types from waypoint-template
pub use waypoint_template::{
    parse, ParameterPart, RouteTemplate, SegmentPart, TemplateError, TemplateSegment,
};
