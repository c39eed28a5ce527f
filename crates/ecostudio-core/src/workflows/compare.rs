use super::generate::generate_alternatives;
use crate::core::catalog::archetype::ArchetypeId;
use crate::core::models::constraints::ConstraintSet;
use crate::core::models::design::DesignAlternative;

/// Generate alternatives and keep only the requested archetypes.
///
/// Output preserves catalog order regardless of the order ids were requested
/// in; duplicate ids collapse to one entry. An empty selection yields an
/// empty list rather than an error.
pub fn compare(constraints: &ConstraintSet, ids: &[ArchetypeId]) -> Vec<DesignAlternative> {
    generate_alternatives(constraints)
        .into_iter()
        .filter(|design| ids.contains(&design.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::constraints::{Climate, Priority};

    fn constraints() -> ConstraintSet {
        ConstraintSet {
            area: 1000.0,
            budget: 50.0,
            climate: Climate::Moderate,
            priority: Priority::Energy,
        }
    }

    #[test]
    fn keeps_only_the_requested_archetypes() {
        let designs = compare(
            &constraints(),
            &[ArchetypeId::EcoEfficient, ArchetypeId::Regenerative],
        );
        let ids: Vec<ArchetypeId> = designs.iter().map(|d| d.id).collect();
        assert_eq!(ids, [ArchetypeId::EcoEfficient, ArchetypeId::Regenerative]);
    }

    #[test]
    fn output_order_follows_the_catalog_not_the_request() {
        let designs = compare(
            &constraints(),
            &[ArchetypeId::Regenerative, ArchetypeId::EcoEfficient],
        );
        let ids: Vec<ArchetypeId> = designs.iter().map(|d| d.id).collect();
        assert_eq!(ids, [ArchetypeId::EcoEfficient, ArchetypeId::Regenerative]);
    }

    #[test]
    fn duplicate_requests_collapse() {
        let designs = compare(
            &constraints(),
            &[ArchetypeId::CarbonOptimized, ArchetypeId::CarbonOptimized],
        );
        assert_eq!(designs.len(), 1);
    }

    #[test]
    fn empty_selection_yields_empty_list() {
        assert!(compare(&constraints(), &[]).is_empty());
    }

    #[test]
    fn compared_designs_match_full_generation() {
        let c = constraints();
        let full = generate_alternatives(&c);
        let subset = compare(&c, &[ArchetypeId::CarbonOptimized]);
        assert_eq!(subset[0], full[1]);
    }
}
