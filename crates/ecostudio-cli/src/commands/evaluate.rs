use crate::cli::EvaluateArgs;
use crate::config;
use crate::error::Result;
use crate::report::EvaluationReport;
use ecostudio::engine::{normalizer, ranking};
use ecostudio::workflows::generate_alternatives;
use tracing::info;

pub fn run(args: EvaluateArgs) -> Result<()> {
    let raw = config::resolve_constraints(&args.constraints)?;
    let constraints = super::normalize_with_warnings(&raw);

    info!(
        "Evaluating design alternatives for {} sq ft, budget level {}.",
        constraints.area, constraints.budget
    );
    let designs = generate_alternatives(&constraints);
    let ranking = ranking::rank(&designs);

    let report = EvaluationReport {
        constraints,
        profile: normalizer::profile(&constraints),
        designs,
        ranking,
    };
    report.write(args.format, args.output.as_deref())
}
