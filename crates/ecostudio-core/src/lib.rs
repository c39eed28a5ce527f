//! # EcoStudio Core Library
//!
//! A deterministic engine for evaluating candidate building-design alternatives
//! against user-supplied project constraints and ranking them by sustainability.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models (`ConstraintSet`,
//!   `Metrics`, `Recommendation`), the static design-archetype catalog, and the pure
//!   scoring arithmetic.
//!
//! - **[`engine`]: The Logic Core.** The decision logic layered over the models:
//!   constraint normalization and profiling, recommendation derivation, and
//!   sustainability ranking.
//!
//! - **[`workflows`]: The Public API.** This is the highest-level, user-facing layer.
//!   It ties the `engine` and `core` together to execute complete procedures, such as
//!   generating the full set of evaluated design alternatives for a project. It
//!   provides a simple and powerful entry point for end-users of the library.
//!
//! Every operation in this crate is pure and synchronous: the same constraint set
//! always produces the same output, with no clock, randomness, or external state.

pub mod core;
pub mod engine;
pub mod workflows;
