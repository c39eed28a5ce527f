//! # Workflows Module
//!
//! High-level entry points that tie the engine and core together into the
//! complete procedures callers actually run.
//!
//! - **Generation** ([`generate`]) - Produce the full list of evaluated design
//!   alternatives for a constraint set
//! - **Comparison** ([`compare`]) - Generate and then narrow to a chosen subset
//!   of archetypes for side-by-side inspection
//!
//! Workflows stay pure: they accept a constraint set, return fresh values, and
//! leave all I/O and normalization policy to the caller.

pub mod compare;
pub mod generate;

pub use compare::compare;
pub use generate::generate_alternatives;
