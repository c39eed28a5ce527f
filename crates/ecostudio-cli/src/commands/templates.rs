use crate::cli::TemplatesArgs;
use crate::error::{CliError, Result};
use crate::report::EvaluationReport;
use crate::templates::{self, TEMPLATES};
use ecostudio::engine::{normalizer, ranking};
use ecostudio::workflows::generate_alternatives;
use tracing::info;

pub fn run(args: TemplatesArgs) -> Result<()> {
    match args.name {
        Some(ref name) => evaluate_template(name, &args),
        None => {
            list_templates();
            Ok(())
        }
    }
}

fn evaluate_template(name: &str, args: &TemplatesArgs) -> Result<()> {
    let template = templates::find(name).ok_or_else(|| {
        let known: Vec<&str> = TEMPLATES.iter().map(|t| t.id).collect();
        CliError::Argument(format!(
            "unknown template '{name}' (available: {})",
            known.join(", ")
        ))
    })?;

    info!("Evaluating template '{}'.", template.id);
    let constraints = super::normalize_with_warnings(&template.constraints);
    let designs = generate_alternatives(&constraints);
    let ranking = ranking::rank(&designs);

    let report = EvaluationReport {
        constraints,
        profile: normalizer::profile(&constraints),
        designs,
        ranking,
    };
    report.write(args.format, None)
}

fn list_templates() {
    println!("Available project templates:\n");
    for template in TEMPLATES {
        println!("  {:<18} {}", template.id, template.name);
        println!("  {:<18} {}", "", template.summary);
        println!(
            "  {:<18} {} sq ft, budget level {}, {} climate, {} priority\n",
            "",
            template.constraints.area,
            template.constraints.budget,
            template.constraints.climate,
            template.constraints.priority
        );
    }
}
