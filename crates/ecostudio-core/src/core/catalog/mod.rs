//! # Archetype Catalog Module
//!
//! The fixed catalog of design archetypes evaluated by the engine, plus the
//! shared vocabulary of strategy and material tags.
//!
//! The catalog is static configuration: exactly three archetypes exist, they
//! are never created or destroyed at runtime, and their ordering is fixed.
//! They are modeled as a closed enum so that every dispatch over them is
//! checked for exhaustiveness at compile time.

pub mod archetype;
pub mod tags;
