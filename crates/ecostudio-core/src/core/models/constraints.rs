use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Climate context a project is designed for.
///
/// Only `Hot` and `Cold` carry scoring bonuses; the remaining variants are
/// treated as "no special case applies" throughout the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Climate {
    Cold,
    Moderate,
    Hot,
    Temperate,
    Arid,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown climate '{0}' (expected cold, moderate, hot, temperate, or arid)")]
pub struct ParseClimateError(pub String);

impl FromStr for Climate {
    type Err = ParseClimateError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cold" => Ok(Climate::Cold),
            "moderate" => Ok(Climate::Moderate),
            "hot" => Ok(Climate::Hot),
            "temperate" => Ok(Climate::Temperate),
            "arid" => Ok(Climate::Arid),
            other => Err(ParseClimateError(other.to_string())),
        }
    }
}

impl fmt::Display for Climate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Climate::Cold => "cold",
                Climate::Moderate => "moderate",
                Climate::Hot => "hot",
                Climate::Temperate => "temperate",
                Climate::Arid => "arid",
            }
        )
    }
}

/// The sustainability dimension the user cares about most.
///
/// Drives both score bonuses and the weighting of the composite index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Energy,
    Water,
    Materials,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown priority '{0}' (expected energy, water, or materials)")]
pub struct ParsePriorityError(pub String);

impl FromStr for Priority {
    type Err = ParsePriorityError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "energy" => Ok(Priority::Energy),
            "water" => Ok(Priority::Water),
            "materials" => Ok(Priority::Materials),
            other => Err(ParsePriorityError(other.to_string())),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Priority::Energy => "energy",
                Priority::Water => "water",
                Priority::Materials => "materials",
            }
        )
    }
}

/// User-specified project parameters driving scoring.
///
/// Numeric fields are accepted as-is: the scoring arithmetic saturates on
/// out-of-range values instead of rejecting them. Collaborators that want
/// hard bounds run [`crate::engine::normalizer`] first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConstraintSet {
    pub area: f64,   // Floor area in sq ft (expected range 300-2000)
    pub budget: f64, // Relative budget level (expected range 0-100)
    pub climate: Climate,
    pub priority: Priority,
}
