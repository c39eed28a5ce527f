use serde::Serialize;
use std::fmt;

/// Size band a project's floor area falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AreaCategory {
    Small,  // below 700 sq ft
    Medium, // 700 to below 1300 sq ft
    Large,  // 1300 sq ft and above
}

impl fmt::Display for AreaCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                AreaCategory::Small => "small",
                AreaCategory::Medium => "medium",
                AreaCategory::Large => "large",
            }
        )
    }
}

/// Spending band a project's relative budget falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetBand {
    Low,    // below 33
    Medium, // 33 to below 67
    High,   // 67 and above
}

impl fmt::Display for BudgetBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                BudgetBand::Low => "low",
                BudgetBand::Medium => "medium",
                BudgetBand::High => "high",
            }
        )
    }
}

/// Coarse categorization of a constraint set, derived once per evaluation and
/// used by reporting collaborators alongside the per-design metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstraintProfile {
    pub area_category: AreaCategory,
    pub budget_band: BudgetBand,
    pub feasibility: u8, // 0-100, deductions for tight budgets and extreme areas
}
