//! # Scoring Module
//!
//! Pure arithmetic for design evaluation: score accumulation, metric
//! derivation, and lifecycle estimation. Everything here is a total function
//! of its arguments; out-of-range numeric input saturates through the final
//! clamp instead of producing an error.

pub mod evaluate;
pub mod lifecycle;
pub mod term;

pub use evaluate::evaluate;
