//! Final rendering of a run and the pass/fail verdict.

use crate::core::console::Console;
use crate::core::error::PushgateError;
use crate::core::finding::Finding;
use crate::core::pipeline::{Phase, PipelineRun};
use colored::Colorize;
use serde::Serialize;

const RULE_WIDTH: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{}': expected 'text' or 'json'", other)),
        }
    }
}

/// Pass/fail outcome of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub passed: bool,
}

impl Verdict {
    pub fn exit_code(&self) -> i32 {
        if self.passed { 0 } else { 1 }
    }
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    passed: bool,
    slow_tier_ran: bool,
    executed: &'a [&'static str],
    phases: &'a [Phase],
    errors: &'a [Finding],
    warnings: &'a [Finding],
}

fn rule() -> String {
    "=".repeat(RULE_WIDTH).bright_blue().to_string()
}

pub fn banner() -> String {
    format!(
        "\n{}\n{}\n{}\n{}\n",
        rule(),
        "  PUSHGATE PRE-PUSH VALIDATOR".bright_blue(),
        "  Known error patterns, checked before every push".bright_blue(),
        rule()
    )
}

/// Grouped error/warning summary for the terminal.
pub fn render_text(run: &PipelineRun) -> String {
    let state = &run.state;
    let mut lines = vec![String::new(), rule()];

    if state.has_errors() {
        lines.push(
            format!("ERRORS ({}):", state.errors().len())
                .bright_red()
                .to_string(),
        );
        for finding in state.errors() {
            lines.push(format!("  {} {}", "✗".bright_red(), finding));
        }
    }

    if !state.warnings().is_empty() {
        lines.push(
            format!("WARNINGS ({}):", state.warnings().len())
                .bright_yellow()
                .to_string(),
        );
        for finding in state.warnings() {
            lines.push(format!("  {} {}", "⚠".bright_yellow(), finding));
        }
    }

    if state.is_clean() {
        lines.push(format!("{}", "✓ All checks passed!".bright_green()));
    }

    lines.push(rule());
    lines.push(String::new());
    lines.join("\n")
}

pub fn render_json(run: &PipelineRun) -> Result<String, PushgateError> {
    let report = JsonReport {
        passed: !run.state.has_errors(),
        slow_tier_ran: run.slow_tier_ran,
        executed: &run.executed,
        phases: &run.phases,
        errors: run.state.errors(),
        warnings: run.state.warnings(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Render the run and derive the verdict. Consumes the run so its state is
/// reported exactly once.
pub fn report(
    run: PipelineRun,
    format: OutputFormat,
    console: &Console,
) -> Result<Verdict, PushgateError> {
    let verdict = Verdict {
        passed: !run.state.has_errors(),
    };

    match format {
        OutputFormat::Text => {
            console.line(&render_text(&run));
            if verdict.passed {
                console.ok("Pre-push validation PASSED. Safe to push!");
            } else {
                console.error("Pre-push validation FAILED. Fix errors before pushing.");
            }
        }
        OutputFormat::Json => {
            println!("{}", render_json(&run)?);
        }
    }

    Ok(verdict)
}
