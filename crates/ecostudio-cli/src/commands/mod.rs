pub mod compare;
pub mod evaluate;
pub mod recommend;
pub mod templates;

use ecostudio::core::models::constraints::ConstraintSet;
use ecostudio::engine::normalizer;
use tracing::warn;

/// Run the normalizer over raw constraints, warning once per finding and
/// clamping only when something was actually out of bounds.
pub(crate) fn normalize_with_warnings(raw: &ConstraintSet) -> ConstraintSet {
    let violations = normalizer::validate(raw);
    if violations.is_empty() {
        return *raw;
    }
    for violation in &violations {
        warn!("Constraint adjusted: {violation}");
    }
    normalizer::clamp(raw)
}
