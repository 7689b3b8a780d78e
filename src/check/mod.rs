//! Headless `check` command
//!
//! Runs a schema file through the same validator and preview renderer the
//! browser uses, prints the resulting form outline, and optionally fills and
//! submits it.

pub mod watcher;

use anyhow::{Context, Result};
use formsmith_core::preview::{ControlKind, Preview, SkipReason};
use formsmith_core::{FieldErrors, FormSchema, Submission, ValidationResult};
use std::fmt;
use std::path::Path;
use tracing::warn;

use crate::cli::CheckArgs;
use crate::config::Settings;
use watcher::SchemaWatcher;

/// What happened to the `--fill` values
#[derive(Debug)]
pub enum FillOutcome {
    Submitted(Submission),
    Blocked(FieldErrors),
    /// A value could not even be entered (unknown id, option not offered)
    Rejected(String),
}

#[derive(Debug)]
pub struct CheckReport {
    pub validation: ValidationResult,
    pub preview: Preview,
    /// Why the text does not decode as a form schema, when it parses but is misshapen
    pub shape_problem: Option<String>,
    pub outcome: Option<FillOutcome>,
}

impl CheckReport {
    pub fn passed(&self) -> bool {
        self.validation.is_valid
            && !matches!(
                self.outcome,
                Some(FillOutcome::Blocked(_)) | Some(FillOutcome::Rejected(_))
            )
    }
}

/// Validate, render and (when `fills` is non-empty) submit one version of the text
pub fn check_text(text: &str, fills: &[(String, String)]) -> CheckReport {
    let validation = formsmith_core::validate_schema(text);
    let preview = formsmith_core::render_preview(text);

    let shape_problem = if validation.is_valid {
        FormSchema::parse(text).err().map(|e| e.to_string())
    } else {
        None
    };

    let outcome = match &preview {
        Preview::Form(form) if !fills.is_empty() => {
            let mut values = form.initial_values();
            let entered = fills
                .iter()
                .try_for_each(|(id, value)| values.fill(form, id, value));
            Some(match entered {
                Err(e) => FillOutcome::Rejected(e.to_string()),
                Ok(()) => match form.submit(&values) {
                    Ok(submission) => FillOutcome::Submitted(submission),
                    Err(errors) => FillOutcome::Blocked(errors),
                },
            })
        }
        _ => None,
    };

    CheckReport {
        validation,
        preview,
        shape_problem,
        outcome,
    }
}

pub fn check_file(path: &Path, fills: &[(String, String)]) -> Result<CheckReport> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(check_text(&text, fills))
}

/// Run the command; returns whether the last check passed
pub fn run(args: &CheckArgs, settings: &Settings) -> Result<bool> {
    // watch before the first read so an edit in between is not lost
    let watcher = if args.watch {
        Some(SchemaWatcher::new(&args.file, settings.editor.debounce_ms)?)
    } else {
        None
    };

    let report = check_file(&args.file, &args.fills)?;
    println!("{}", report);
    log_report(&report);

    let Some(mut watcher) = watcher else {
        return Ok(report.passed());
    };

    loop {
        watcher.wait_for_change()?;
        match check_file(&args.file, &args.fills) {
            Ok(report) => {
                println!("\n{}", report);
                log_report(&report);
            }
            Err(e) => warn!("{:#}", e),
        }
    }
}

fn log_report(report: &CheckReport) {
    if let Some(detail) = &report.validation.detail {
        warn!(line = detail.line, column = detail.column, "{}", detail.message);
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.validation.detail {
            None => writeln!(f, "JSON: valid")?,
            Some(detail) => writeln!(
                f,
                "JSON: {} (line {}, column {})",
                self.validation.errors.join(", "),
                detail.line,
                detail.column
            )?,
        }

        let form = match &self.preview {
            Preview::Invalid => return write!(f, "Preview: Invalid JSON"),
            Preview::Form(form) => form,
        };

        if let Some(problem) = &self.shape_problem {
            writeln!(f, "Shape: {}", problem)?;
        }

        writeln!(f, "Title: {}", form.title)?;
        if !form.description.is_empty() {
            writeln!(f, "Description: {}", form.description)?;
        }

        writeln!(f, "Controls ({}):", form.controls.len())?;
        for (n, control) in form.controls.iter().enumerate() {
            let kind = match &control.kind {
                ControlKind::TextInput => "text",
                ControlKind::EmailInput => "email",
                ControlKind::Dropdown(_) => "select",
            };
            write!(f, "  {}. {} [{}] \"{}\"", n + 1, control.id, kind, control.label)?;
            if control.required {
                write!(f, " (required)")?;
            }
            if let Some(placeholder) = &control.placeholder {
                write!(f, " placeholder=\"{}\"", placeholder)?;
            }
            writeln!(f)?;
            if let ControlKind::Dropdown(options) = &control.kind {
                for option in options {
                    writeln!(f, "       - {}: {}", option.value, option.label)?;
                }
            }
        }

        for skipped in &form.skipped {
            let id = skipped.id.as_deref().unwrap_or("?");
            match &skipped.reason {
                SkipReason::UnsupportedType(raw) => writeln!(
                    f,
                    "  (field #{} '{}' not rendered: unsupported type \"{}\")",
                    skipped.index, id, raw
                )?,
                SkipReason::Unreadable(reason) => writeln!(
                    f,
                    "  (field #{} not rendered: {})",
                    skipped.index, reason
                )?,
            }
        }

        match &self.outcome {
            None => Ok(()),
            Some(FillOutcome::Submitted(submission)) => {
                let json = submission.to_json_pretty().map_err(|_| fmt::Error)?;
                write!(f, "Form submitted successfully!\n{}", json)
            }
            Some(FillOutcome::Blocked(errors)) => {
                write!(f, "Submission blocked:")?;
                for (id, message) in errors.iter() {
                    write!(f, "\n  {}: {}", id, message)?;
                }
                Ok(())
            }
            Some(FillOutcome::Rejected(reason)) => write!(f, "Fill rejected: {}", reason),
        }
    }
}
