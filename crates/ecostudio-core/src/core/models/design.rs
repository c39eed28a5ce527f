use super::metrics::Metrics;
use crate::core::catalog::archetype::ArchetypeId;
use crate::core::scoring::lifecycle::LifecycleEstimate;
use serde::Serialize;

/// One fully populated design alternative: static archetype metadata, merged
/// strategy tags, computed metrics, and lifecycle estimates.
///
/// Produced by [`crate::workflows::generate::generate_alternatives`]; the list
/// is rebuilt from scratch on every call, so two calls with equal constraints
/// yield deep-equal records.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignAlternative {
    pub id: ArchetypeId,
    pub name: &'static str,
    pub description: String,
    pub materials: &'static [&'static str],
    pub key_features: &'static [&'static str],
    pub strategies: Vec<&'static str>,
    pub icon: &'static str,
    pub metrics: Metrics,
    pub lifecycle: LifecycleEstimate,
}
