use crate::core::catalog::archetype::ArchetypeId;
use crate::core::models::constraints::ConstraintSet;
use serde::Serialize;

const BASE_EMBODIED_INTENSITY: f64 = 25.0; // kg CO2e per sq ft before adjustment
const BASE_OPERATIONAL_INTENSITY: f64 = 3.5; // kg CO2e per sq ft per year

/// Simplified lifecycle carbon and payback estimates for one design.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LifecycleEstimate {
    pub embodied_carbon: f64,    // kg CO2e per sq ft
    pub operational_carbon: f64, // kg CO2e per year
    pub payback_years: u32,
}

/// Estimate lifecycle figures for an archetype under the given constraints.
///
/// `energy_efficiency` is the already-computed metric for the same pair; the
/// operational estimate scales with whatever energy performance the design
/// achieved rather than re-deriving it.
pub fn estimate(
    archetype: ArchetypeId,
    constraints: &ConstraintSet,
    energy_efficiency: u8,
) -> LifecycleEstimate {
    LifecycleEstimate {
        embodied_carbon: embodied_carbon(archetype, constraints),
        operational_carbon: operational_carbon(constraints.area, energy_efficiency),
        payback_years: payback_years(energy_efficiency, constraints.budget),
    }
}

// Higher budgets buy lower-carbon materials; the carbon-optimized and
// regenerative archetypes reach the same intensity with less of the budget.
fn embodied_carbon(archetype: ArchetypeId, constraints: &ConstraintSet) -> f64 {
    let effective_budget = match archetype {
        ArchetypeId::EcoEfficient => constraints.budget,
        ArchetypeId::CarbonOptimized => constraints.budget * 0.8,
        ArchetypeId::Regenerative => constraints.budget * 0.9,
    };
    let budget_factor = 1.0 - (effective_budget / 100.0 * 0.3);
    let area_factor = if constraints.area > 1000.0 { 1.0 } else { 1.2 };
    round_to(BASE_EMBODIED_INTENSITY * budget_factor * area_factor, 2)
}

fn operational_carbon(area: f64, energy_efficiency: u8) -> f64 {
    let efficiency_factor = f64::from(100 - energy_efficiency.min(100)) / 100.0;
    round_to(area * BASE_OPERATIONAL_INTENSITY * efficiency_factor, 1)
}

fn payback_years(energy_efficiency: u8, budget: f64) -> u32 {
    let base: f64 = match energy_efficiency {
        0..50 => 12.0,
        50..70 => 8.0,
        70..85 => 5.0,
        _ => 3.0,
    };
    let adjusted = if budget < 30.0 { base * 1.5 } else { base };
    adjusted.round() as u32
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
