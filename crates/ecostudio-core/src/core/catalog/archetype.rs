use crate::core::models::constraints::{ConstraintSet, Priority};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Identity of one of the three fixed design archetypes.
///
/// The catalog is a closed set: dispatch is an exhaustive match, never a
/// lookup in a runtime registry. Serialized ids keep the `design-*` form the
/// original report consumers expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ArchetypeId {
    #[serde(rename = "design-a")]
    EcoEfficient,
    #[serde(rename = "design-b")]
    CarbonOptimized,
    #[serde(rename = "design-c")]
    Regenerative,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown design archetype '{0}' (expected design-a, design-b, or design-c)")]
pub struct ParseArchetypeError(pub String);

impl FromStr for ArchetypeId {
    type Err = ParseArchetypeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "design-a" => Ok(ArchetypeId::EcoEfficient),
            "design-b" => Ok(ArchetypeId::CarbonOptimized),
            "design-c" => Ok(ArchetypeId::Regenerative),
            other => Err(ParseArchetypeError(other.to_string())),
        }
    }
}

impl fmt::Display for ArchetypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ArchetypeId {
    /// Catalog order; the alternative generator always emits designs in this order.
    pub const ALL: [ArchetypeId; 3] = [
        ArchetypeId::EcoEfficient,
        ArchetypeId::CarbonOptimized,
        ArchetypeId::Regenerative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArchetypeId::EcoEfficient => "design-a",
            ArchetypeId::CarbonOptimized => "design-b",
            ArchetypeId::Regenerative => "design-c",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ArchetypeId::EcoEfficient => "Eco-Efficient Design",
            ArchetypeId::CarbonOptimized => "Carbon-Optimized Design",
            ArchetypeId::Regenerative => "Regenerative Design",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ArchetypeId::EcoEfficient => "\u{1F331}",    // seedling
            ArchetypeId::CarbonOptimized => "\u{267B}\u{FE0F}", // recycling
            ArchetypeId::Regenerative => "\u{1F33F}",    // herb
        }
    }

    /// Construction materials characteristic of the archetype.
    pub fn materials(&self) -> &'static [&'static str] {
        match self {
            ArchetypeId::EcoEfficient => &[
                "Cross-laminated timber",
                "Recycled steel",
                "Cork insulation",
                "Bamboo flooring",
            ],
            ArchetypeId::CarbonOptimized => &[
                "Local stone",
                "FSC-certified wood",
                "Low-carbon concrete",
                "Reclaimed materials",
            ],
            ArchetypeId::Regenerative => &[
                "Living materials",
                "Mycelium composites",
                "Hempcrete",
                "Salvaged materials",
            ],
        }
    }

    pub fn key_features(&self) -> &'static [&'static str] {
        match self {
            ArchetypeId::EcoEfficient => &[
                "Triple-glazed windows for thermal performance",
                "Heat recovery ventilation system",
                "High thermal mass for temperature stability",
                "Native landscaping for water conservation",
            ],
            ArchetypeId::CarbonOptimized => &[
                "Modular construction for flexibility",
                "Material passport tracking",
                "Carbon-neutral production goal",
                "Adaptive thermal mass design",
            ],
            ArchetypeId::Regenerative => &[
                "Integrated habitat zones",
                "Managed aquifer recharge systems",
                "Urban agriculture opportunities",
                "Natural ventilation and daylighting",
            ],
        }
    }

    /// Archetype-specific strategy tags prepended before the shared
    /// constraint-derived recommendation strategies.
    pub fn strategy_prefix(&self) -> &'static [&'static str] {
        match self {
            ArchetypeId::EcoEfficient => &[],
            ArchetypeId::CarbonOptimized => &[
                "embodied-carbon-reduction",
                "material-transparency",
                "modular-design",
            ],
            ArchetypeId::Regenerative => &[
                "regenerative-systems",
                "biodiversity-integration",
                "water-positive-design",
                "community-resilience",
            ],
        }
    }

    /// Descriptive text for the archetype, interpolating the project
    /// constraints into an archetype-specific template.
    pub fn description(&self, constraints: &ConstraintSet) -> String {
        match self {
            ArchetypeId::EcoEfficient => format!(
                "A {} sq ft sustainable design optimized for energy efficiency. \
                 Features passive solar design, high-performance insulation, and \
                 integrated renewable energy infrastructure. Ideal for {} climates \
                 with focus on long-term operational sustainability.",
                constraints.area, constraints.climate
            ),
            ArchetypeId::CarbonOptimized => {
                let emphasis = if constraints.priority == Priority::Materials {
                    "material selection"
                } else {
                    "lifecycle carbon reduction"
                };
                format!(
                    "A climate-responsive design emphasizing {}. Leverages local \
                     materials, modular construction, and adaptive systems to minimize \
                     embodied and operational carbon. Suitable for projects with \
                     environmental impact as primary metric.",
                    emphasis
                )
            }
            ArchetypeId::Regenerative => String::from(
                "A holistic design that goes beyond sustainability to create positive \
                 environmental impact. Integrates water management, biodiversity \
                 support, and community resilience. Combines traditional ecological \
                 wisdom with modern sustainable principles.",
            ),
        }
    }
}
