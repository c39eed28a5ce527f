use crate::core::catalog::archetype::ArchetypeId;
use crate::core::models::constraints::ConstraintSet;
use crate::core::models::design::DesignAlternative;
use crate::core::models::recommendation::Recommendation;
use crate::core::scoring::{evaluate, lifecycle};
use crate::engine::recommend::recommend;
use tracing::{info, instrument};

/// Generate the three evaluated design alternatives for a constraint set.
///
/// Always returns exactly three designs in catalog order (`design-a`,
/// `design-b`, `design-c`). The list is rebuilt from scratch on every call
/// with no caching, so repeated calls with equal constraints are idempotent.
#[instrument(skip_all, name = "generate_alternatives")]
pub fn generate_alternatives(constraints: &ConstraintSet) -> Vec<DesignAlternative> {
    let recommendation = recommend(constraints);

    let designs: Vec<DesignAlternative> = ArchetypeId::ALL
        .iter()
        .map(|&id| build_design(id, constraints, &recommendation))
        .collect();

    info!("Generated {} design alternatives.", designs.len());
    designs
}

fn build_design(
    id: ArchetypeId,
    constraints: &ConstraintSet,
    recommendation: &Recommendation,
) -> DesignAlternative {
    let mut strategies = id.strategy_prefix().to_vec();
    strategies.extend_from_slice(&recommendation.strategies);

    let metrics = evaluate(id, constraints);
    let lifecycle = lifecycle::estimate(id, constraints, metrics.energy_efficiency);

    DesignAlternative {
        id,
        name: id.display_name(),
        description: id.description(constraints),
        materials: id.materials(),
        key_features: id.key_features(),
        strategies,
        icon: id.icon(),
        metrics,
        lifecycle,
    }
}
