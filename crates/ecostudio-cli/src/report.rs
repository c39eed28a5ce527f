use crate::cli::ReportFormat;
use crate::error::{CliError, Result};
use ecostudio::core::catalog::tags;
use ecostudio::core::models::constraints::ConstraintSet;
use ecostudio::core::models::design::DesignAlternative;
use ecostudio::core::models::profile::ConstraintProfile;
use ecostudio::core::models::recommendation::Recommendation;
use ecostudio::engine::ranking::RankedDesign;
use serde::Serialize;
use std::fmt::Write as _;
use std::path::Path;
use tracing::info;

/// Full evaluation output: the (possibly clamped) constraints that were
/// scored, their profile, every design, and the sustainability ranking.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationReport {
    pub constraints: ConstraintSet,
    pub profile: ConstraintProfile,
    pub designs: Vec<DesignAlternative>,
    pub ranking: Vec<RankedDesign>,
}

impl EvaluationReport {
    pub fn write(&self, format: ReportFormat, output: Option<&Path>) -> Result<()> {
        let rendered = match format {
            ReportFormat::Table => self.to_table(),
            ReportFormat::Json => to_json(self)?,
            ReportFormat::Csv => self.to_csv()?,
        };
        write_out(&rendered, output)
    }

    fn to_table(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", constraints_line(&self.constraints));
        let _ = writeln!(
            out,
            "Profile: {} area, {} budget band, feasibility {}/100",
            self.profile.area_category, self.profile.budget_band, self.profile.feasibility
        );
        let _ = writeln!(out);

        for ranked in &self.ranking {
            let Some(design) = self.designs.iter().find(|d| d.id == ranked.id) else {
                continue;
            };
            let _ = writeln!(
                out,
                "#{} {} {} ({})",
                ranked.position, design.icon, design.name, design.id
            );
            let _ = writeln!(
                out,
                "   Index {:>3}  Energy {:>3}  Water {:>3}  Materials {:>3}  Carbon {:<6}  Cost ${}",
                design.metrics.sustainability_index,
                design.metrics.energy_efficiency,
                design.metrics.water_efficiency,
                design.metrics.materials_efficiency,
                design.metrics.carbon_footprint,
                design.metrics.estimated_cost,
            );
            let _ = writeln!(
                out,
                "   Lifecycle: {} kg CO2e/sq ft embodied, {} kg CO2e/yr operational, {}-year payback",
                design.lifecycle.embodied_carbon,
                design.lifecycle.operational_carbon,
                design.lifecycle.payback_years,
            );
            let _ = writeln!(out, "   Strategies: {}", labeled_tags(&design.strategies));
            let _ = writeln!(out);
        }

        if let Some(best) = self.ranking.first() {
            let _ = writeln!(out, "Best match: {} (index {})", best.name, best.sustainability_index);
        }
        out
    }

    fn to_csv(&self) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record([
                "rank",
                "id",
                "name",
                "energyEfficiency",
                "waterEfficiency",
                "materialsEfficiency",
                "carbonFootprint",
                "estimatedCost",
                "sustainabilityIndex",
            ])
            .map_err(|e| CliError::Other(e.into()))?;

        for ranked in &self.ranking {
            let Some(design) = self.designs.iter().find(|d| d.id == ranked.id) else {
                continue;
            };
            writer
                .write_record([
                    ranked.position.to_string(),
                    design.id.to_string(),
                    design.name.to_string(),
                    design.metrics.energy_efficiency.to_string(),
                    design.metrics.water_efficiency.to_string(),
                    design.metrics.materials_efficiency.to_string(),
                    design.metrics.carbon_footprint.to_string(),
                    design.metrics.estimated_cost.to_string(),
                    design.metrics.sustainability_index.to_string(),
                ])
                .map_err(|e| CliError::Other(e.into()))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| CliError::Other(anyhow::anyhow!("CSV buffer error: {e}")))?;
        String::from_utf8(bytes).map_err(|e| CliError::Other(e.into()))
    }
}

/// Recommendation output for a constraint set, independent of archetypes.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationReport {
    pub constraints: ConstraintSet,
    pub recommendation: Recommendation,
}

impl RecommendationReport {
    pub fn write(&self, format: ReportFormat, output: Option<&Path>) -> Result<()> {
        let rendered = match format {
            ReportFormat::Table => self.to_table(),
            ReportFormat::Json => to_json(self)?,
            ReportFormat::Csv => {
                return Err(CliError::Argument(
                    "CSV output is not available for recommendations".to_string(),
                ));
            }
        };
        write_out(&rendered, output)
    }

    fn to_table(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", constraints_line(&self.constraints));
        let _ = writeln!(
            out,
            "Climate strategy: {}",
            tags::label(self.recommendation.climate)
        );
        let _ = writeln!(
            out,
            "Materials: {}",
            labeled_tags(&self.recommendation.materials)
        );
        let _ = writeln!(
            out,
            "Strategies: {}",
            labeled_tags(&self.recommendation.strategies)
        );
        out
    }
}

fn constraints_line(constraints: &ConstraintSet) -> String {
    format!(
        "Project: {} sq ft, budget level {}, {} climate, {} priority",
        constraints.area, constraints.budget, constraints.climate, constraints.priority
    )
}

fn labeled_tags(tag_list: &[&str]) -> String {
    tag_list
        .iter()
        .map(|t| tags::label(t))
        .collect::<Vec<_>>()
        .join(", ")
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value).map_err(|e| CliError::Other(e.into()))?;
    json.push('\n');
    Ok(json)
}

fn write_out(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)?;
            info!("Report written to {:?}", path);
            println!("Report written to: {}", path.display());
        }
        None => print!("{content}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecostudio::core::models::constraints::{Climate, Priority};
    use ecostudio::engine::{normalizer, ranking::rank, recommend::recommend};
    use ecostudio::workflows::generate_alternatives;

    fn sample_report() -> EvaluationReport {
        let constraints = ConstraintSet {
            area: 1000.0,
            budget: 50.0,
            climate: Climate::Moderate,
            priority: Priority::Energy,
        };
        let designs = generate_alternatives(&constraints);
        let ranking = rank(&designs);
        EvaluationReport {
            constraints,
            profile: normalizer::profile(&constraints),
            designs,
            ranking,
        }
    }

    #[test]
    fn table_lists_designs_in_rank_order_with_best_match() {
        let table = sample_report().to_table();
        assert!(table.contains("#1"));
        assert!(table.contains("#3"));
        assert!(table.contains("Best match: Regenerative Design (index 71)"));
        assert!(table.contains("Daylighting optimization"));
    }

    #[test]
    fn csv_has_a_header_and_one_row_per_design() {
        let csv = sample_report().to_csv().unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("rank,id,name,energyEfficiency"));
        assert!(lines.iter().skip(1).any(|l| l.contains("design-a")));
    }

    #[test]
    fn json_exposes_the_camel_case_report_shape() {
        let report = sample_report();
        let json: serde_json::Value =
            serde_json::from_str(&to_json(&report).unwrap()).unwrap();
        assert_eq!(json["designs"].as_array().unwrap().len(), 3);
        assert_eq!(json["designs"][0]["id"], "design-a");
        assert_eq!(json["designs"][0]["metrics"]["energyEfficiency"], 85);
        assert_eq!(json["ranking"][0]["position"], 1);
        assert_eq!(json["profile"]["feasibility"], 100);
    }

    #[test]
    fn recommendation_table_shows_labeled_tags() {
        let constraints = ConstraintSet {
            area: 1000.0,
            budget: 85.0,
            climate: Climate::Hot,
            priority: Priority::Materials,
        };
        let report = RecommendationReport {
            constraints,
            recommendation: recommend(&constraints),
        };
        let table = report.to_table();
        assert!(table.contains("Passive cooling with thermal mass"));
        assert!(table.contains("Premium sustainable materials"));
        assert!(table.contains("Zero-waste capable sourcing"));
    }

    #[test]
    fn recommendation_report_rejects_csv() {
        let constraints = ConstraintSet {
            area: 1000.0,
            budget: 50.0,
            climate: Climate::Moderate,
            priority: Priority::Energy,
        };
        let report = RecommendationReport {
            constraints,
            recommendation: recommend(&constraints),
        };
        assert!(matches!(
            report.write(ReportFormat::Csv, None),
            Err(CliError::Argument(_))
        ));
    }

    #[test]
    fn reports_can_be_written_to_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        sample_report()
            .write(ReportFormat::Json, Some(&path))
            .unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"designs\""));
    }
}
