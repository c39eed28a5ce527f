use crate::cli::CompareArgs;
use crate::config;
use crate::error::{CliError, Result};
use crate::report::EvaluationReport;
use ecostudio::core::catalog::archetype::ArchetypeId;
use ecostudio::engine::{normalizer, ranking};
use ecostudio::workflows::compare;
use tracing::info;

pub fn run(args: CompareArgs) -> Result<()> {
    let ids = parse_ids(&args.ids)?;

    let raw = config::resolve_constraints(&args.constraints)?;
    let constraints = super::normalize_with_warnings(&raw);

    info!("Comparing {} design archetype(s).", ids.len());
    let designs = compare(&constraints, &ids);
    let ranking = ranking::rank(&designs);

    let report = EvaluationReport {
        constraints,
        profile: normalizer::profile(&constraints),
        designs,
        ranking,
    };
    report.write(args.format, None)
}

fn parse_ids(raw: &[String]) -> Result<Vec<ArchetypeId>> {
    raw.iter()
        .map(|s| {
            s.parse::<ArchetypeId>()
                .map_err(|e| CliError::Argument(e.to_string()))
        })
        .collect()
}
