//! # Validate Subcommand
//!
//! Validates JSON objects against a YAML document schema. Each input file
//! holds either one object or an array of objects.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use brdoc_validator::{messages, validate_object, SchemaConfig, ValidationSchema};
use clap::Args;
use serde::Serialize;
use serde_json::Value;

use crate::{OutputFormat, EXIT_INVALID, EXIT_VALID};

/// Arguments for the `brdoc validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the YAML schema file.
    #[arg(long)]
    pub schema: PathBuf,

    /// JSON files to validate.
    #[arg(required = true)]
    pub objects: Vec<PathBuf>,

    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Validation result for one object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObjectReport {
    /// Source file.
    pub file: String,
    /// Position within the file (0 for a single object).
    pub index: usize,
    /// One message per failing property.
    pub errors: Vec<String>,
}

impl ObjectReport {
    /// True if no property failed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Load and build the schema from `path`.
pub fn load_schema(path: &Path) -> Result<ValidationSchema> {
    let config = SchemaConfig::load(path)?;
    let schema = config
        .into_schema()
        .with_context(|| format!("invalid schema in {}", path.display()))?;
    Ok(schema)
}

/// Validate every object in one JSON file.
pub fn validate_file(path: &Path, schema: &ValidationSchema) -> Result<Vec<ObjectReport>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let value: Value = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse JSON in {}", path.display()))?;
    validate_value(&path.display().to_string(), &value, schema)
}

/// Validate a parsed JSON document: an object or an array of objects.
pub fn validate_value(
    file: &str,
    value: &Value,
    schema: &ValidationSchema,
) -> Result<Vec<ObjectReport>> {
    let objects: Vec<&Value> = match value {
        Value::Array(items) => items.iter().collect(),
        other => vec![other],
    };

    let mut reports = Vec::with_capacity(objects.len());
    for (index, object) in objects.into_iter().enumerate() {
        let Some(map) = object.as_object() else {
            bail!("{file}[{index}]: expected a JSON object");
        };
        reports.push(ObjectReport {
            file: file.to_string(),
            index,
            errors: messages(&validate_object(map, schema)),
        });
    }
    Ok(reports)
}

/// Execute the validate subcommand.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let schema = load_schema(&args.schema)?;
    tracing::info!(
        target_name = schema.target(),
        properties = schema.len(),
        "schema loaded"
    );

    let mut reports = Vec::new();
    for path in &args.objects {
        reports.extend(validate_file(path, &schema)?);
    }

    let stdout = std::io::stdout();
    write_reports(&mut stdout.lock(), &reports, args.format)?;

    if reports.iter().all(ObjectReport::is_valid) {
        Ok(EXIT_VALID)
    } else {
        Ok(EXIT_INVALID)
    }
}

/// Render reports in the requested format.
pub fn write_reports(
    out: &mut impl Write,
    reports: &[ObjectReport],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, reports)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for report in reports {
                if report.is_valid() {
                    writeln!(out, "{}[{}]: VALID", report.file, report.index)?;
                } else {
                    writeln!(out, "{}[{}]: INVALID", report.file, report.index)?;
                    for error in &report.errors {
                        writeln!(out, "  - {error}")?;
                    }
                }
            }
        }
    }
    Ok(())
}
