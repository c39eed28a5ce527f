use super::term::ScoreCard;
use crate::core::catalog::archetype::ArchetypeId;
use crate::core::models::constraints::{Climate, ConstraintSet, Priority};
use crate::core::models::metrics::{CarbonTier, Metrics};

const COST_PER_SQFT: f64 = 150.0;
const COST_NEUTRAL_BUDGET: f64 = 50.0;

/// Score one design archetype against a constraint set.
///
/// Pure and total: any syntactically valid constraint set produces metrics.
/// Out-of-range numerics saturate through the final clamp, and climates or
/// priorities without a special case simply collect no bonus.
pub fn evaluate(archetype: ArchetypeId, constraints: &ConstraintSet) -> Metrics {
    let mut scores = ScoreCard::baseline();

    apply_archetype_bonuses(&mut scores, archetype, constraints);
    apply_priority_nudge(&mut scores, constraints.priority);
    apply_budget_tier(&mut scores, constraints.budget);
    apply_climate_nudge(&mut scores, constraints.climate);
    apply_area_nudge(&mut scores, constraints.area);

    let scores = scores.clamped();

    Metrics {
        energy_efficiency: scores.energy as u8,
        water_efficiency: scores.water as u8,
        materials_efficiency: scores.materials as u8,
        carbon_footprint: carbon_tier(scores),
        estimated_cost: estimated_cost(constraints.area, constraints.budget),
        sustainability_index: sustainability_index(scores, constraints.priority),
    }
}

fn apply_archetype_bonuses(
    scores: &mut ScoreCard,
    archetype: ArchetypeId,
    constraints: &ConstraintSet,
) {
    match archetype {
        // Eco-Efficient: energy focused
        ArchetypeId::EcoEfficient => {
            scores.energy += 20;
            if constraints.budget >= 75.0 {
                scores.energy += 15;
            }
            if constraints.priority == Priority::Energy {
                scores.energy += 10;
            }
            if constraints.climate == Climate::Cold {
                scores.energy += 5;
            }
            scores.water += 5;
        }
        // Carbon-Optimized: materials focused
        ArchetypeId::CarbonOptimized => {
            scores.materials += 25;
            if constraints.priority == Priority::Materials {
                scores.materials += 15;
            }
            if constraints.budget >= 70.0 {
                scores.materials += 10;
            }
            scores.energy += 8;
            scores.water += 8;
        }
        // Regenerative: holistic, water focused
        ArchetypeId::Regenerative => {
            scores.water += 25;
            if constraints.priority == Priority::Water {
                scores.water += 15;
            }
            if constraints.climate == Climate::Hot {
                scores.water += 15;
            }
            scores.energy += 15;
            scores.materials += 15;
        }
    }
}

fn apply_priority_nudge(scores: &mut ScoreCard, priority: Priority) {
    match priority {
        Priority::Energy => scores.energy += 5,
        Priority::Water => scores.water += 5,
        Priority::Materials => scores.materials += 5,
    }
}

fn apply_budget_tier(scores: &mut ScoreCard, budget: f64) {
    if budget >= 80.0 {
        *scores += ScoreCard::splat(8);
    } else if budget < 40.0 {
        *scores += ScoreCard::splat(-5);
    }
}

fn apply_climate_nudge(scores: &mut ScoreCard, climate: Climate) {
    match climate {
        Climate::Hot => scores.water += 10,
        Climate::Cold => scores.energy += 5,
        _ => {}
    }
}

fn apply_area_nudge(scores: &mut ScoreCard, area: f64) {
    if area < 600.0 {
        scores.energy += 8;
    }
    if area > 1800.0 {
        scores.materials += 8;
    }
}

// First match wins: both bars cleared reads Low, one of the looser bars Medium.
fn carbon_tier(scores: ScoreCard) -> CarbonTier {
    if scores.energy > 70 && scores.materials > 60 {
        CarbonTier::Low
    } else if scores.energy > 55 || scores.materials > 65 {
        CarbonTier::Medium
    } else {
        CarbonTier::High
    }
}

// A budget of exactly 50 is the cost-neutral multiplier 1.0.
fn estimated_cost(area: f64, budget: f64) -> i64 {
    (area * COST_PER_SQFT * (budget / COST_NEUTRAL_BUDGET)).round() as i64
}

// Priority-weighted blend; the materials weighting doubles as the catch-all.
fn sustainability_index(scores: ScoreCard, priority: Priority) -> u8 {
    let energy = f64::from(scores.energy);
    let water = f64::from(scores.water);
    let materials = f64::from(scores.materials);

    let index = match priority {
        Priority::Energy => energy * 0.5 + water * 0.3 + materials * 0.2,
        Priority::Water => water * 0.5 + energy * 0.3 + materials * 0.2,
        Priority::Materials => materials * 0.5 + energy * 0.25 + water * 0.25,
    };

    index.round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constraints(area: f64, budget: f64, climate: Climate, priority: Priority) -> ConstraintSet {
        ConstraintSet {
            area,
            budget,
            climate,
            priority,
        }
    }

    fn moderate_energy() -> ConstraintSet {
        constraints(1000.0, 50.0, Climate::Moderate, Priority::Energy)
    }

    #[test]
    fn eco_efficient_scores_energy_bonus_stack() {
        let metrics = evaluate(ArchetypeId::EcoEfficient, &moderate_energy());
        // 50 base + 20 archetype + 10 archetype priority + 5 priority nudge
        assert_eq!(metrics.energy_efficiency, 85);
        assert_eq!(metrics.water_efficiency, 55);
        assert_eq!(metrics.materials_efficiency, 50);
    }

    #[test]
    fn eco_efficient_midrange_reads_medium_carbon() {
        let metrics = evaluate(ArchetypeId::EcoEfficient, &moderate_energy());
        // Energy clears 70 but materials sits at 50, so only the Medium bar matches.
        assert_eq!(metrics.carbon_footprint, CarbonTier::Medium);
    }

    #[test]
    fn neutral_budget_costs_base_rate_per_sqft() {
        let metrics = evaluate(ArchetypeId::EcoEfficient, &moderate_energy());
        assert_eq!(metrics.estimated_cost, 150_000);
    }

    #[test]
    fn cost_scales_linearly_with_budget_level() {
        let c = constraints(1000.0, 90.0, Climate::Moderate, Priority::Materials);
        let metrics = evaluate(ArchetypeId::CarbonOptimized, &c);
        assert_eq!(metrics.estimated_cost, 270_000);
    }

    #[test]
    fn carbon_optimized_saturates_materials_under_generous_budget() {
        let c = constraints(1000.0, 90.0, Climate::Moderate, Priority::Materials);
        let metrics = evaluate(ArchetypeId::CarbonOptimized, &c);
        // 50 + 25 + 15 (priority) + 10 (budget >= 70) + 5 (nudge) + 8 (tier) = 113, clamped.
        assert_eq!(metrics.materials_efficiency, 100);
        assert_eq!(metrics.energy_efficiency, 66);
        assert_eq!(metrics.water_efficiency, 66);
    }

    #[test]
    fn budget_tier_threshold_is_inclusive_at_80() {
        let at = constraints(1000.0, 80.0, Climate::Moderate, Priority::Water);
        let below = constraints(1000.0, 79.9, Climate::Moderate, Priority::Water);
        let metrics_at = evaluate(ArchetypeId::Regenerative, &at);
        let metrics_below = evaluate(ArchetypeId::Regenerative, &below);
        assert_eq!(
            metrics_at.energy_efficiency,
            metrics_below.energy_efficiency + 8
        );
        assert_eq!(
            metrics_at.materials_efficiency,
            metrics_below.materials_efficiency + 8
        );
    }

    #[test]
    fn eco_efficient_budget_threshold_is_inclusive_at_75() {
        let at = constraints(1000.0, 75.0, Climate::Moderate, Priority::Water);
        let below = constraints(1000.0, 74.9, Climate::Moderate, Priority::Water);
        let at_energy = evaluate(ArchetypeId::EcoEfficient, &at).energy_efficiency;
        let below_energy = evaluate(ArchetypeId::EcoEfficient, &below).energy_efficiency;
        assert_eq!(at_energy, below_energy + 15);
    }

    #[test]
    fn carbon_optimized_budget_threshold_is_inclusive_at_70() {
        let at = constraints(1000.0, 70.0, Climate::Moderate, Priority::Water);
        let below = constraints(1000.0, 69.9, Climate::Moderate, Priority::Water);
        let at_materials = evaluate(ArchetypeId::CarbonOptimized, &at).materials_efficiency;
        let below_materials = evaluate(ArchetypeId::CarbonOptimized, &below).materials_efficiency;
        assert_eq!(at_materials, below_materials + 10);
    }

    #[test]
    fn low_budget_deducts_from_every_dimension() {
        let lean = constraints(1000.0, 39.9, Climate::Moderate, Priority::Energy);
        let neutral = moderate_energy();
        let lean_metrics = evaluate(ArchetypeId::Regenerative, &lean);
        let neutral_metrics = evaluate(ArchetypeId::Regenerative, &neutral);
        assert_eq!(
            lean_metrics.energy_efficiency + 5,
            neutral_metrics.energy_efficiency
        );
        assert_eq!(
            lean_metrics.water_efficiency + 5,
            neutral_metrics.water_efficiency
        );
        assert_eq!(
            lean_metrics.materials_efficiency + 5,
            neutral_metrics.materials_efficiency
        );
    }

    #[test]
    fn hot_climate_boosts_water_and_cold_boosts_energy() {
        let hot = constraints(1000.0, 50.0, Climate::Hot, Priority::Materials);
        let cold = constraints(1000.0, 50.0, Climate::Cold, Priority::Materials);
        let mild = constraints(1000.0, 50.0, Climate::Moderate, Priority::Materials);

        let hot_m = evaluate(ArchetypeId::CarbonOptimized, &hot);
        let cold_m = evaluate(ArchetypeId::CarbonOptimized, &cold);
        let mild_m = evaluate(ArchetypeId::CarbonOptimized, &mild);

        assert_eq!(hot_m.water_efficiency, mild_m.water_efficiency + 10);
        assert_eq!(cold_m.energy_efficiency, mild_m.energy_efficiency + 5);
    }

    #[test]
    fn temperate_and_arid_climates_collect_no_nudges() {
        for climate in [Climate::Temperate, Climate::Arid] {
            let c = constraints(1000.0, 50.0, climate, Priority::Energy);
            let reference = moderate_energy();
            for archetype in ArchetypeId::ALL {
                let got = evaluate(archetype, &c);
                let want = evaluate(archetype, &reference);
                assert_eq!(got.energy_efficiency, want.energy_efficiency);
                assert_eq!(got.water_efficiency, want.water_efficiency);
                assert_eq!(got.materials_efficiency, want.materials_efficiency);
            }
        }
    }

    #[test]
    fn compact_floor_plans_boost_energy_and_sprawling_ones_materials() {
        let compact = constraints(599.9, 50.0, Climate::Moderate, Priority::Energy);
        let sprawling = constraints(1800.1, 50.0, Climate::Moderate, Priority::Energy);
        let reference = moderate_energy();

        let compact_m = evaluate(ArchetypeId::EcoEfficient, &compact);
        let sprawling_m = evaluate(ArchetypeId::EcoEfficient, &sprawling);
        let reference_m = evaluate(ArchetypeId::EcoEfficient, &reference);

        assert_eq!(
            compact_m.energy_efficiency,
            reference_m.energy_efficiency + 8
        );
        assert_eq!(
            sprawling_m.materials_efficiency,
            reference_m.materials_efficiency + 8
        );
    }

    #[test]
    fn strong_energy_and_materials_scores_read_low_carbon() {
        // Regenerative under cold climate and generous budget lifts both bars.
        let c = constraints(500.0, 85.0, Climate::Cold, Priority::Energy);
        let metrics = evaluate(ArchetypeId::Regenerative, &c);
        assert!(metrics.energy_efficiency > 70);
        assert!(metrics.materials_efficiency > 60);
        assert_eq!(metrics.carbon_footprint, CarbonTier::Low);
    }

    #[test]
    fn lean_budget_carbon_optimized_still_reads_medium() {
        let c = constraints(1000.0, 20.0, Climate::Moderate, Priority::Water);
        let b = evaluate(ArchetypeId::CarbonOptimized, &c);
        assert_eq!(b.energy_efficiency, 53);
        assert_eq!(b.materials_efficiency, 70);
        assert_eq!(b.carbon_footprint, CarbonTier::Medium);
    }

    #[test]
    fn carbon_tier_boundaries_are_strict() {
        // Both bars cleared.
        assert_eq!(carbon_tier(ScoreCard::new(71, 0, 61)), CarbonTier::Low);
        // Exactly on a bar falls through to the next tier check.
        assert_eq!(carbon_tier(ScoreCard::new(70, 0, 61)), CarbonTier::Medium);
        assert_eq!(carbon_tier(ScoreCard::new(71, 0, 60)), CarbonTier::Medium);
        // Either loose bar alone reads Medium.
        assert_eq!(carbon_tier(ScoreCard::new(56, 0, 0)), CarbonTier::Medium);
        assert_eq!(carbon_tier(ScoreCard::new(0, 0, 66)), CarbonTier::Medium);
        // Neither bar reads High.
        assert_eq!(carbon_tier(ScoreCard::new(55, 0, 65)), CarbonTier::High);
    }

    #[test]
    fn sustainability_index_uses_priority_weights() {
        let metrics = evaluate(ArchetypeId::EcoEfficient, &moderate_energy());
        // 0.5 * 85 + 0.3 * 55 + 0.2 * 50 = 69.0
        assert_eq!(metrics.sustainability_index, 69);

        let materials = constraints(1000.0, 90.0, Climate::Moderate, Priority::Materials);
        let metrics = evaluate(ArchetypeId::CarbonOptimized, &materials);
        // 0.5 * 100 + 0.25 * 66 + 0.25 * 66 = 83.0
        assert_eq!(metrics.sustainability_index, 83);
    }

    #[test]
    fn scores_and_index_stay_in_range_across_extremes() {
        let areas = [-100.0, 0.0, 450.0, 1000.0, 2500.0, 10_000.0];
        let budgets = [-20.0, 0.0, 39.9, 50.0, 80.0, 150.0];
        let climates = [
            Climate::Cold,
            Climate::Moderate,
            Climate::Hot,
            Climate::Temperate,
            Climate::Arid,
        ];
        let priorities = [Priority::Energy, Priority::Water, Priority::Materials];

        for archetype in ArchetypeId::ALL {
            for &area in &areas {
                for &budget in &budgets {
                    for &climate in &climates {
                        for &priority in &priorities {
                            let c = constraints(area, budget, climate, priority);
                            let m = evaluate(archetype, &c);
                            assert!(m.energy_efficiency <= 100);
                            assert!(m.water_efficiency <= 100);
                            assert!(m.materials_efficiency <= 100);
                            assert!(m.sustainability_index <= 100);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn evaluation_is_deterministic() {
        let c = constraints(1234.0, 62.0, Climate::Arid, Priority::Water);
        for archetype in ArchetypeId::ALL {
            assert_eq!(evaluate(archetype, &c), evaluate(archetype, &c));
        }
    }
}
