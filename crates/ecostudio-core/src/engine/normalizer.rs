use crate::core::models::constraints::ConstraintSet;
use crate::core::models::profile::{AreaCategory, BudgetBand, ConstraintProfile};
use thiserror::Error;

pub const AREA_MIN: f64 = 300.0;
pub const AREA_MAX: f64 = 2000.0;
pub const BUDGET_MIN: f64 = 0.0;
pub const BUDGET_MAX: f64 = 100.0;

/// A bounds finding from [`validate`]. Not fatal: the scoring engine is total
/// over any input, so callers decide whether to clamp, warn, or reject.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConstraintViolation {
    #[error("area must be a finite number")]
    AreaNotFinite,
    #[error("area {0} sq ft is outside the supported range 300-2000")]
    AreaOutOfRange(f64),
    #[error("budget must be a finite number")]
    BudgetNotFinite,
    #[error("budget {0} is outside the supported range 0-100")]
    BudgetOutOfRange(f64),
}

/// Check a constraint set against the supported bounds.
///
/// Returns every finding rather than stopping at the first, so a caller can
/// report them all in one pass. Climate and priority need no checking: the
/// closed enums make invalid values unrepresentable.
pub fn validate(constraints: &ConstraintSet) -> Vec<ConstraintViolation> {
    let mut violations = Vec::new();

    if !constraints.area.is_finite() {
        violations.push(ConstraintViolation::AreaNotFinite);
    } else if constraints.area < AREA_MIN || constraints.area > AREA_MAX {
        violations.push(ConstraintViolation::AreaOutOfRange(constraints.area));
    }

    if !constraints.budget.is_finite() {
        violations.push(ConstraintViolation::BudgetNotFinite);
    } else if constraints.budget < BUDGET_MIN || constraints.budget > BUDGET_MAX {
        violations.push(ConstraintViolation::BudgetOutOfRange(constraints.budget));
    }

    violations
}

/// Saturate the numeric constraints into the supported bounds.
///
/// Non-finite values collapse to the lower bound. Climate and priority pass
/// through untouched.
pub fn clamp(constraints: &ConstraintSet) -> ConstraintSet {
    ConstraintSet {
        area: clamp_finite(constraints.area, AREA_MIN, AREA_MAX),
        budget: clamp_finite(constraints.budget, BUDGET_MIN, BUDGET_MAX),
        ..*constraints
    }
}

fn clamp_finite(value: f64, min: f64, max: f64) -> f64 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        min
    }
}

/// Derive the coarse categorization reporting collaborators show alongside
/// the per-design metrics.
pub fn profile(constraints: &ConstraintSet) -> ConstraintProfile {
    ConstraintProfile {
        area_category: categorize_area(constraints.area),
        budget_band: categorize_budget(constraints.budget),
        feasibility: feasibility(constraints),
    }
}

fn categorize_area(area: f64) -> AreaCategory {
    if area < 700.0 {
        AreaCategory::Small
    } else if area < 1300.0 {
        AreaCategory::Medium
    } else {
        AreaCategory::Large
    }
}

fn categorize_budget(budget: f64) -> BudgetBand {
    if budget < 33.0 {
        BudgetBand::Low
    } else if budget < 67.0 {
        BudgetBand::Medium
    } else {
        BudgetBand::High
    }
}

// Deductions for combinations that make a sustainable build harder to
// deliver: very tight budgets, and floor areas at either extreme.
fn feasibility(constraints: &ConstraintSet) -> u8 {
    let mut score: i32 = 100;

    if constraints.budget < 30.0 {
        score -= 20;
    }
    if constraints.area < 500.0 || constraints.area > 1800.0 {
        score -= 10;
    }

    score.clamp(0, 100) as u8
}
