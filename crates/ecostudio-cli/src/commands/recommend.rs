use crate::cli::RecommendArgs;
use crate::config;
use crate::error::Result;
use crate::report::RecommendationReport;
use ecostudio::engine::recommend::recommend;
use tracing::info;

pub fn run(args: RecommendArgs) -> Result<()> {
    let raw = config::resolve_constraints(&args.constraints)?;
    let constraints = super::normalize_with_warnings(&raw);

    info!(
        "Deriving recommendations for {} climate with {} priority.",
        constraints.climate, constraints.priority
    );
    let report = RecommendationReport {
        constraints,
        recommendation: recommend(&constraints),
    };
    report.write(args.format, None)
}
