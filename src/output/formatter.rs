use std::io::IsTerminal;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use serde::Serialize;
use terminal_size::{terminal_size, Width};
use tracing::debug;

use crate::config::ColorMode;
use crate::freshness::{
    formula, DomainError, EvaluationResult, Grade, Measurement, Severity, THRESHOLD_A, THRESHOLD_AA,
};

/// A measurement paired with the outcome of evaluating it
pub struct EvaluatedEgg<'a> {
    pub measurement: &'a Measurement,
    pub outcome: Result<EvaluationResult, DomainError>,
}

impl<'a> EvaluatedEgg<'a> {
    pub fn evaluate(measurement: &'a Measurement) -> Self {
        let outcome = measurement.evaluate();
        match &outcome {
            Ok(result) => debug!(
                weight = measurement.weight,
                raw_index = result.raw_index,
                grade = result.tag(),
                "evaluated measurement"
            ),
            Err(e) => debug!(
                weight = measurement.weight,
                float = measurement.float_score,
                candle = measurement.candle_score,
                error = %e,
                "rejected measurement"
            ),
        }
        Self {
            measurement,
            outcome,
        }
    }
}

/// Decide whether to emit ANSI colors. `Auto` checks whether stdout is a TTY.
pub fn should_use_colors(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => std::io::stdout().is_terminal(),
    }
}

/// Color already-padded text by grade severity
fn paint(text: &str, severity: Severity, use_colors: bool) -> String {
    if use_colors {
        let (r, g, b) = severity.rgb();
        text.truecolor(r, g, b).bold().to_string()
    } else {
        text.to_string()
    }
}

/// Format one evaluation with its inputs (default single-egg output)
pub fn format_result_detail(
    measurement: &Measurement,
    result: &EvaluationResult,
    use_colors: bool,
) -> String {
    let header = match &measurement.name {
        Some(name) => format!("Formula: {}  ({})", formula(), name),
        None => format!("Formula: {}", formula()),
    };
    let index = if use_colors {
        result.index.bold().to_string()
    } else {
        result.index.clone()
    };

    format!(
        "{}\n  Weight (W): {:.2} g\n  Floating score (F): {}\n  Candling score (C): {}\nFreshness Index (FI): {}\n{}\n  {}",
        header,
        measurement.weight,
        measurement.float_score,
        measurement.candle_score,
        index,
        paint(result.tag(), result.severity, use_colors),
        result.label
    )
}

/// Format the domain error for display
pub fn format_error(error: &DomainError, use_colors: bool) -> String {
    if use_colors {
        format!("{} {}", "Invalid Score:".red().bold(), error)
    } else {
        format!("Invalid Score: {}", error)
    }
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a name to fit available width, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format evaluations as a table: index, FI, grade tag, label, name.
/// No headers. Index column is 3 chars ("99."), FI is right-aligned in 7.
pub fn format_scored_table(eggs: &[EvaluatedEgg], use_colors: bool) -> String {
    if eggs.is_empty() {
        return "No measurements found.".to_string();
    }

    let term_width = get_terminal_width();

    let index_width = 3;
    let fi_width = 7;
    let tag_width = 8;
    let label_width = 12;
    let separator = "  ";
    let fixed_width = index_width + 1 + fi_width + tag_width + label_width + separator.len() * 3;

    eggs.iter()
        .enumerate()
        .map(|(idx, egg)| {
            let index_str = format!("{:>2}.", idx + 1);
            let index_str = if use_colors {
                index_str.dimmed().to_string()
            } else {
                index_str
            };

            let name = egg.measurement.name.as_deref().unwrap_or("");
            let name = match term_width {
                Some(width) if width > fixed_width + 10 => truncate_name(name, width - fixed_width),
                Some(_) => truncate_name(name, 20),
                None => name.to_string(),
            };

            let line = match &egg.outcome {
                Ok(result) => {
                    let fi = format!("{:>width$}", result.index, width = fi_width);
                    let tag = format!("{:<width$}", result.tag(), width = tag_width);
                    let label = format!("{:<width$}", result.label, width = label_width);
                    format!(
                        "{} {}{}{}{}{}{}{}",
                        index_str,
                        if use_colors { fi.bold().to_string() } else { fi },
                        separator,
                        paint(&tag, result.severity, use_colors),
                        separator,
                        label,
                        separator,
                        name
                    )
                }
                Err(e) => {
                    let fi = format!("{:>width$}", "invalid", width = fi_width);
                    let message = e.to_string();
                    format!(
                        "{} {}{}{}{}{}",
                        index_str,
                        if use_colors { fi.red().to_string() } else { fi },
                        separator,
                        message,
                        separator,
                        name
                    )
                }
            };
            line.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format evaluations as tab-separated values for scripting
/// Columns: index, tag, label, name (no headers, no colors)
pub fn format_tsv(eggs: &[EvaluatedEgg]) -> String {
    if eggs.is_empty() {
        return String::new();
    }

    eggs.iter()
        .map(|egg| {
            let name = egg.measurement.name.as_deref().unwrap_or("");
            match &egg.outcome {
                Ok(result) => format!("{}\t{}\t{}\t{}", result.index, result.tag(), result.label, name),
                Err(e) => format!("invalid\t\t{}\t{}", e, name),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Serialize)]
struct JsonEgg<'a> {
    #[serde(flatten)]
    measurement: &'a Measurement,
    #[serde(flatten)]
    result: Option<&'a EvaluationResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Format evaluations as a pretty-printed JSON array
pub fn format_json(eggs: &[EvaluatedEgg]) -> Result<String> {
    let rows: Vec<JsonEgg> = eggs
        .iter()
        .map(|egg| JsonEgg {
            measurement: egg.measurement,
            result: egg.outcome.as_ref().ok(),
            error: egg.outcome.as_ref().err().map(|e| e.to_string()),
        })
        .collect();
    serde_json::to_string_pretty(&rows).context("Failed to serialize results")
}

/// Formula plus the grade bands, highest first
pub fn format_thresholds(use_colors: bool) -> String {
    let bands = [
        (Grade::AA, format!("FI >= {}", THRESHOLD_AA)),
        (Grade::A, format!("{} <= FI < {}", THRESHOLD_A, THRESHOLD_AA)),
        (Grade::B, format!("FI < {}", THRESHOLD_A)),
    ];

    let mut lines = vec![format!("Formula: {}", formula())];
    for (grade, range) in bands {
        let tag = format!("{:<8}", grade.tag());
        lines.push(format!(
            "  {}  {:<12}  {}",
            paint(&tag, grade.severity(), use_colors),
            grade.label(),
            range
        ));
    }
    lines.join("\n")
}
