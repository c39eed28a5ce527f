use crate::core::models::constraints::{Climate, ConstraintSet, Priority};
use crate::core::models::recommendation::Recommendation;

/// Derive strategy and material guidance from a constraint set.
///
/// Pure and total; independent of any design archetype. Each conditional
/// block appends on its own rather than branching exclusively, so additional
/// qualifying conditions compose without reordering existing tags.
pub fn recommend(constraints: &ConstraintSet) -> Recommendation {
    Recommendation {
        climate: climate_strategy(constraints.climate),
        materials: material_tags(constraints),
        strategies: strategy_tags(constraints),
    }
}

fn climate_strategy(climate: Climate) -> &'static str {
    match climate {
        Climate::Hot => "passive-cooling-thermal-mass",
        Climate::Cold => "thermal-insulation-heat-recovery",
        _ => "moderate-passive",
    }
}

fn material_tags(constraints: &ConstraintSet) -> Vec<&'static str> {
    let mut materials = vec!["recycled-materials", "locally-sourced"];
    if constraints.budget >= 80.0 {
        materials.push("premium-sustainable");
    }
    if constraints.priority == Priority::Materials {
        materials.push("zero-waste-capable");
    }
    materials
}

fn strategy_tags(constraints: &ConstraintSet) -> Vec<&'static str> {
    let mut strategies = vec!["daylighting-optimization", "energy-efficient-systems"];
    if constraints.priority == Priority::Energy {
        strategies.extend(["high-efficiency-hvac", "renewable-ready"]);
    }
    if constraints.priority == Priority::Water {
        strategies.extend(["rainwater-harvesting", "greywater-recycling"]);
    }
    if constraints.priority == Priority::Materials {
        strategies.extend(["circular-economy", "lifecycle-optimization"]);
    }
    strategies
}
