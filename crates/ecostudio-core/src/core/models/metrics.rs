use serde::Serialize;
use std::fmt;

/// Coarse qualitative carbon-footprint classification.
///
/// Derived from the energy and materials scores, first match wins:
/// `Low` when both are strong, `Medium` when either clears its bar, `High` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CarbonTier {
    Low,
    Medium,
    High,
}

impl fmt::Display for CarbonTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                CarbonTier::Low => "Low",
                CarbonTier::Medium => "Medium",
                CarbonTier::High => "High",
            }
        )
    }
}

/// Sustainability metrics for one (archetype, constraint set) pair.
///
/// Created fresh by [`crate::core::scoring::evaluate`] and never mutated
/// afterwards. Efficiency scores and the composite index always lie in
/// `[0, 100]`. Field names serialize in the camelCase form the original
/// report consumers expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub energy_efficiency: u8,
    pub water_efficiency: u8,
    pub materials_efficiency: u8,
    pub carbon_footprint: CarbonTier,
    pub estimated_cost: i64, // Rounded currency units
    pub sustainability_index: u8,
}
