use ecostudio::core::models::constraints::{Climate, ConstraintSet, Priority};

/// A built-in project preset users can start from instead of entering
/// constraints by hand.
///
/// Several presets carry constraints outside the supported evaluation bounds
/// on purpose; evaluation clamps them like any other input, which also makes
/// the presets a live demonstration of the normalizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub summary: &'static str,
    pub constraints: ConstraintSet,
}

pub const TEMPLATES: &[ProjectTemplate] = &[
    ProjectTemplate {
        id: "office-eco",
        name: "Eco Office",
        summary: "High-efficiency office with smart systems",
        constraints: ConstraintSet {
            area: 5000.0,
            budget: 150.0,
            climate: Climate::Temperate,
            priority: Priority::Energy,
        },
    },
    ProjectTemplate {
        id: "green-retail",
        name: "Green Retail",
        summary: "Sustainable shopping space with natural light",
        constraints: ConstraintSet {
            area: 3000.0,
            budget: 100.0,
            climate: Climate::Moderate,
            priority: Priority::Materials,
        },
    },
    ProjectTemplate {
        id: "water-efficient",
        name: "Water-Smart Building",
        summary: "Focus on water conservation & recycling",
        constraints: ConstraintSet {
            area: 2000.0,
            budget: 80.0,
            climate: Climate::Arid,
            priority: Priority::Water,
        },
    },
    ProjectTemplate {
        id: "carbon-neutral",
        name: "Carbon Neutral Home",
        summary: "Residential with net-zero emissions",
        constraints: ConstraintSet {
            area: 1500.0,
            budget: 120.0,
            climate: Climate::Cold,
            priority: Priority::Energy,
        },
    },
    ProjectTemplate {
        id: "industrial-green",
        name: "Green Industrial",
        summary: "Manufacturing with minimal waste",
        constraints: ConstraintSet {
            area: 8000.0,
            budget: 200.0,
            climate: Climate::Moderate,
            priority: Priority::Materials,
        },
    },
    ProjectTemplate {
        id: "mixed-use",
        name: "Mixed-Use Development",
        summary: "Combined residential & commercial space",
        constraints: ConstraintSet {
            area: 10_000.0,
            budget: 300.0,
            climate: Climate::Temperate,
            priority: Priority::Energy,
        },
    },
];

/// Look a template up by id or (case-insensitive) display name.
pub fn find(name: &str) -> Option<&'static ProjectTemplate> {
    TEMPLATES
        .iter()
        .find(|t| t.id.eq_ignore_ascii_case(name) || t.name.eq_ignore_ascii_case(name))
}
