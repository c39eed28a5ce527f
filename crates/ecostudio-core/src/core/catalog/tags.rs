use phf::{Map, phf_map};

/// Human-readable labels for the strategy and material tags emitted by the
/// recommendation generator and the archetype catalog. Presentation
/// collaborators look labels up here instead of re-deriving them from the
/// kebab-case tag form.
#[rustfmt::skip]
pub static TAG_LABELS: Map<&'static str, &'static str> = phf_map! {
    // --- Climate strategy tags ---
    "passive-cooling-thermal-mass"     => "Passive cooling with thermal mass",
    "thermal-insulation-heat-recovery" => "Thermal insulation with heat recovery",
    "moderate-passive"                 => "Moderate passive design",

    // --- Material tags ---
    "recycled-materials"  => "Recycled materials",
    "locally-sourced"     => "Locally sourced materials",
    "premium-sustainable" => "Premium sustainable materials",
    "zero-waste-capable"  => "Zero-waste capable sourcing",

    // --- Shared strategy tags ---
    "daylighting-optimization" => "Daylighting optimization",
    "energy-efficient-systems" => "Energy-efficient systems",

    // --- Priority-specific strategy tags ---
    "high-efficiency-hvac"   => "High-efficiency HVAC",
    "renewable-ready"        => "Renewable-ready infrastructure",
    "rainwater-harvesting"   => "Rainwater harvesting",
    "greywater-recycling"    => "Greywater recycling",
    "circular-economy"       => "Circular economy sourcing",
    "lifecycle-optimization" => "Lifecycle optimization",

    // --- Archetype strategy tags ---
    "embodied-carbon-reduction" => "Embodied carbon reduction",
    "material-transparency"     => "Material passport transparency",
    "modular-design"            => "Modular design",
    "regenerative-systems"      => "Regenerative systems",
    "biodiversity-integration"  => "Biodiversity integration",
    "water-positive-design"     => "Water-positive design",
    "community-resilience"      => "Community resilience",
};

/// Label for a tag, falling back to the raw tag for anything unregistered.
pub fn label(tag: &str) -> &str {
    TAG_LABELS.get(tag).copied().unwrap_or(tag)
}
