use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use crate::freshness::{formula, Measurement};

const DEFAULT_WEIGHT: &str = "55.0";
const DEFAULT_SCORE: &str = "0";
const MIN_WEIGHT: f64 = 1.0;

/// Print a message and return the trimmed line the user typed.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, message: &str) -> Result<String> {
    write!(out, "{}", message).context("Failed to write prompt")?;
    out.flush().context("Failed to flush stdout")?;
    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read input")?;
    if read == 0 {
        anyhow::bail!("Input closed before all values were entered");
    }
    Ok(line.trim().to_string())
}

/// Prompt with a default value. Returns default if input is empty.
fn prompt_with_default<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    message: &str,
    default: &str,
) -> Result<String> {
    let answer = prompt(input, out, &format!("{} [{}]: ", message, default))?;
    if answer.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(answer)
    }
}

/// Weight in grams, at least 1.0.
pub fn parse_weight(s: &str) -> Result<f64, String> {
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= MIN_WEIGHT => Ok(v),
        Ok(_) => Err(format!("must be at least {}", MIN_WEIGHT)),
        Err(_) => Err("must be a number of grams".to_string()),
    }
}

/// Whole-number test score between 0 and 2.
pub fn parse_score(s: &str) -> Result<f64, String> {
    match s.parse::<i64>() {
        Ok(v) if (0..=2).contains(&v) => Ok(v as f64),
        _ => Err("must be 0, 1, or 2".to_string()),
    }
}

/// Ask for one value until `parse` accepts it.
fn ask<R, W, F>(input: &mut R, out: &mut W, message: &str, default: &str, parse: F) -> Result<f64>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> Result<f64, String>,
{
    loop {
        let answer = prompt_with_default(input, out, message, default)?;
        match parse(&answer) {
            Ok(v) => return Ok(v),
            Err(e) => writeln!(out, "  Invalid: {}. Try again.", e).context("Failed to write prompt")?,
        }
    }
}

/// Interactively collect one measurement.
pub fn prompt_measurement<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Measurement> {
    writeln!(out, "Egg Freshness Index ({})", formula()).context("Failed to write prompt")?;
    writeln!(out).context("Failed to write prompt")?;

    writeln!(out, "Weight (W): total mass of the egg in grams.").context("Failed to write prompt")?;
    let weight = ask(input, out, "Weight (W)", DEFAULT_WEIGHT, parse_weight)?;

    writeln!(out, "Floating score (F): 0 lies flat, 1 stands upright, 2 floats.")
        .context("Failed to write prompt")?;
    let float_score = ask(input, out, "Floating score (F)", DEFAULT_SCORE, parse_score)?;

    writeln!(
        out,
        "Candling score (C): 0 small air cell, 1 medium, 2 large air cell with mobile yolk."
    )
    .context("Failed to write prompt")?;
    let candle_score = ask(input, out, "Candling score (C)", DEFAULT_SCORE, parse_score)?;

    Ok(Measurement::new(weight, float_score, candle_score))
}
