use crate::cli::ConstraintArgs;
use crate::error::{CliError, Result};
use ecostudio::core::models::constraints::{Climate, ConstraintSet, Priority};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Project configuration file model.
///
/// ```toml
/// [project]
/// area = 1000
/// budget = 50
/// climate = "moderate"
/// priority = "energy"
/// ```
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub project: ProjectSection,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct ProjectSection {
    pub area: Option<f64>,
    pub budget: Option<f64>,
    pub climate: Option<String>,
    pub priority: Option<String>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: FileConfig =
            toml::from_str(&content).map_err(|e| CliError::FileParsing {
                path: path.to_path_buf(),
                source: e.into(),
            })?;
        debug!("Loaded project configuration from {:?}", path);
        Ok(config)
    }
}

/// Merge the config file (if any) with direct flags into a full constraint set.
///
/// Flags override file values. Every constraint must come from one of the two
/// sources; enum fields are validated while parsing, numeric bounds are the
/// normalizer's concern and handled later.
pub fn resolve_constraints(args: &ConstraintArgs) -> Result<ConstraintSet> {
    let file = match &args.config {
        Some(path) => FileConfig::from_file(path)?.project,
        None => ProjectSection::default(),
    };

    let area = args.area.or(file.area).ok_or_else(|| missing("area"))?;
    let budget = args.budget.or(file.budget).ok_or_else(|| missing("budget"))?;
    let climate = args
        .climate
        .clone()
        .or(file.climate)
        .ok_or_else(|| missing("climate"))?;
    let priority = args
        .priority
        .clone()
        .or(file.priority)
        .ok_or_else(|| missing("priority"))?;

    let climate: Climate = climate
        .parse()
        .map_err(|e: ecostudio::core::models::constraints::ParseClimateError| {
            CliError::Argument(e.to_string())
        })?;
    let priority: Priority = priority
        .parse()
        .map_err(|e: ecostudio::core::models::constraints::ParsePriorityError| {
            CliError::Argument(e.to_string())
        })?;

    Ok(ConstraintSet {
        area,
        budget,
        climate,
        priority,
    })
}

fn missing(field: &str) -> CliError {
    CliError::Config(format!(
        "missing constraint '{field}': pass --{field} or set it under [project] in the config file"
    ))
}
