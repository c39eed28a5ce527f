use serde::Serialize;

/// Strategy and material guidance derived from a constraint set alone.
///
/// Independent of any specific design archetype; the alternative generator
/// shares one `Recommendation` read-only across all three archetypes. Tag
/// lists preserve the order in which conditions appended them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub climate: &'static str, // Climate strategy tag
    pub materials: Vec<&'static str>,
    pub strategies: Vec<&'static str>,
}
