use crate::core::catalog::archetype::ArchetypeId;
use crate::core::models::design::DesignAlternative;
use crate::core::models::metrics::CarbonTier;
use serde::Serialize;

/// Summary row for one design in the sustainability ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedDesign {
    pub position: usize, // 1-based
    pub id: ArchetypeId,
    pub name: &'static str,
    pub sustainability_index: u8,
    pub energy_efficiency: u8,
    pub water_efficiency: u8,
    pub carbon_footprint: CarbonTier,
}

/// Rank evaluated designs by composite sustainability index, best first.
///
/// The sort is stable, so designs with equal indices keep their catalog
/// order. The first entry is the recommended best match.
pub fn rank(designs: &[DesignAlternative]) -> Vec<RankedDesign> {
    let mut ordered: Vec<&DesignAlternative> = designs.iter().collect();
    ordered.sort_by(|a, b| {
        b.metrics
            .sustainability_index
            .cmp(&a.metrics.sustainability_index)
    });

    ordered
        .into_iter()
        .enumerate()
        .map(|(index, design)| RankedDesign {
            position: index + 1,
            id: design.id,
            name: design.name,
            sustainability_index: design.metrics.sustainability_index,
            energy_efficiency: design.metrics.energy_efficiency,
            water_efficiency: design.metrics.water_efficiency,
            carbon_footprint: design.metrics.carbon_footprint,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::constraints::{Climate, ConstraintSet, Priority};
    use crate::workflows::generate::generate_alternatives;

    fn sample(priority: Priority) -> Vec<DesignAlternative> {
        generate_alternatives(&ConstraintSet {
            area: 1000.0,
            budget: 50.0,
            climate: Climate::Moderate,
            priority,
        })
    }

    #[test]
    fn positions_are_one_based_and_contiguous() {
        let ranking = rank(&sample(Priority::Energy));
        let positions: Vec<usize> = ranking.iter().map(|r| r.position).collect();
        assert_eq!(positions, [1, 2, 3]);
    }

    #[test]
    fn ranking_orders_by_descending_index() {
        for priority in [Priority::Energy, Priority::Water, Priority::Materials] {
            let ranking = rank(&sample(priority));
            assert!(
                ranking
                    .windows(2)
                    .all(|w| w[0].sustainability_index >= w[1].sustainability_index)
            );
        }
    }

    #[test]
    fn neutral_budget_energy_priority_favors_the_regenerative_design() {
        // At budget 50 the eco-efficient design misses its budget bonus and the
        // regenerative design's balanced card wins the weighted blend, 71 to 69.
        let ranking = rank(&sample(Priority::Energy));
        assert_eq!(ranking[0].id, ArchetypeId::Regenerative);
        assert_eq!(ranking[0].sustainability_index, 71);
    }

    #[test]
    fn funded_energy_priority_puts_the_eco_efficient_design_first() {
        let designs = generate_alternatives(&ConstraintSet {
            area: 1000.0,
            budget: 75.0,
            climate: Climate::Moderate,
            priority: Priority::Energy,
        });
        let ranking = rank(&designs);
        assert_eq!(ranking[0].id, ArchetypeId::EcoEfficient);
        assert_eq!(ranking[0].sustainability_index, 77);
    }

    #[test]
    fn materials_priority_puts_the_carbon_optimized_design_first() {
        let ranking = rank(&sample(Priority::Materials));
        assert_eq!(ranking[0].id, ArchetypeId::CarbonOptimized);
    }

    #[test]
    fn water_priority_puts_the_regenerative_design_first() {
        let ranking = rank(&sample(Priority::Water));
        assert_eq!(ranking[0].id, ArchetypeId::Regenerative);
    }

    #[test]
    fn ties_preserve_catalog_order() {
        let mut designs = sample(Priority::Energy);
        let shared = designs[0].metrics;
        for design in &mut designs {
            design.metrics = shared;
        }
        let ranking = rank(&designs);
        let ids: Vec<ArchetypeId> = ranking.iter().map(|r| r.id).collect();
        assert_eq!(ids, ArchetypeId::ALL);
    }

    #[test]
    fn ranking_leaves_the_input_order_untouched() {
        let designs = sample(Priority::Water);
        let _ = rank(&designs);
        let ids: Vec<ArchetypeId> = designs.iter().map(|d| d.id).collect();
        assert_eq!(ids, ArchetypeId::ALL);
    }
}
