//! # Check Subcommand
//!
//! Runs the option policy over document numbers given on the command line.

use std::io::Write;

use anyhow::Result;
use brdoc_core::{evaluate, DocumentKind, DocumentOptions};
use clap::Args;
use serde::Serialize;

use crate::{OutputFormat, EXIT_INVALID, EXIT_VALID};

/// Arguments for the `brdoc check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Document kind: cpf or cnpj.
    pub kind: DocumentKind,

    /// Document numbers, formatted or not.
    #[arg(required = true)]
    pub values: Vec<String>,

    /// Accept any value with the right number of digits.
    #[arg(long)]
    pub skip_digit_validation: bool,

    /// Strip formatting before the pre-checks.
    #[arg(long)]
    pub remove_format: bool,

    /// Skip the up-front repeated-digit rejection.
    #[arg(long)]
    pub allow_known_invalid: bool,

    /// Only check the number of digits.
    #[arg(long)]
    pub length_only: bool,

    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl CheckArgs {
    /// Options assembled from the flags.
    pub fn options(&self) -> DocumentOptions {
        DocumentOptions {
            skip_digit_validation: self.skip_digit_validation,
            remove_format: self.remove_format,
            allow_known_invalid: self.allow_known_invalid,
            length_only: self.length_only,
        }
    }
}

/// Result of checking one value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// The value as given.
    pub input: String,
    /// Document kind checked.
    pub kind: DocumentKind,
    /// Overall outcome.
    pub valid: bool,
    /// Rejection reason, when invalid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Check every value and build one report per value.
pub fn check_values(
    kind: DocumentKind,
    values: &[String],
    options: &DocumentOptions,
) -> Vec<CheckReport> {
    values
        .iter()
        .map(|value| {
            let verdict = evaluate(kind, Some(value.as_str()), options);
            CheckReport {
                input: value.clone(),
                kind,
                valid: verdict.is_valid(),
                reason: verdict.rejection().map(|r| r.to_string()),
            }
        })
        .collect()
}

/// Execute the check subcommand.
pub fn run_check(args: &CheckArgs) -> Result<u8> {
    let options = args.options();
    if options.is_lenient() {
        tracing::info!(?options, "checking with lenient options");
    }

    let reports = check_values(args.kind, &args.values, &options);
    let stdout = std::io::stdout();
    write_reports(&mut stdout.lock(), &reports, args.format)?;

    if reports.iter().all(|r| r.valid) {
        Ok(EXIT_VALID)
    } else {
        Ok(EXIT_INVALID)
    }
}

/// Render reports in the requested format.
pub fn write_reports(
    out: &mut impl Write,
    reports: &[CheckReport],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, reports)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for report in reports {
                match &report.reason {
                    None => writeln!(out, "{} {}: VALID", report.kind, report.input)?,
                    Some(reason) => writeln!(
                        out,
                        "{} {}: INVALID ({reason})",
                        report.kind, report.input
                    )?,
                }
            }
        }
    }
    Ok(())
}
