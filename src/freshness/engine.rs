use serde::{Deserialize, Serialize, Serializer};

use super::constants::{CONSTANT_C, CONSTANT_F};
use super::error::{DomainError, TestKind};
use super::grade::{Grade, Severity, TestScore};

/// One egg as measured. Scores are kept as read so that fractional or
/// out-of-range input is rejected by the evaluator, not by the parser.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Measurement {
    /// Optional display name (e.g. "egg-3")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Egg mass in grams
    pub weight: f64,

    /// Float test score (0 lies flat, 1 stands upright, 2 floats)
    #[serde(serialize_with = "whole_or_real")]
    pub float_score: f64,

    /// Candling score (0 small air cell, 1 medium, 2 large with mobile yolk)
    #[serde(serialize_with = "whole_or_real")]
    pub candle_score: f64,
}

/// Echo whole-number scores as integers (`2`, not `2.0`).
fn whole_or_real<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

impl Measurement {
    pub fn new(weight: f64, float_score: f64, candle_score: f64) -> Self {
        Self {
            name: None,
            weight,
            float_score,
            candle_score,
        }
    }

    pub fn named(name: impl Into<String>, weight: f64, float_score: f64, candle_score: f64) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new(weight, float_score, candle_score)
        }
    }

    pub fn evaluate(&self) -> Result<EvaluationResult, DomainError> {
        evaluate(self.weight, self.float_score, self.candle_score)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationResult {
    /// Unrounded index, used for classification
    #[serde(skip)]
    pub raw_index: f64,
    /// Index formatted to two decimals
    pub index: String,
    pub grade: Grade,
    pub label: &'static str,
    pub severity: Severity,
}

impl EvaluationResult {
    /// The index rounded to two decimals as a number.
    pub fn rounded_index(&self) -> f64 {
        (self.raw_index * 100.0).round() / 100.0
    }

    pub fn tag(&self) -> &'static str {
        self.grade.tag()
    }
}

/// Evaluate a measurement given as raw numbers.
///
/// Both scores are validated before anything is computed. The weight is
/// not range-checked here.
pub fn evaluate(weight: f64, float_score: f64, candle_score: f64) -> Result<EvaluationResult, DomainError> {
    let float = TestScore::from_real(float_score, TestKind::Float)?;
    let candle = TestScore::from_real(candle_score, TestKind::Candling)?;
    Ok(evaluate_scores(weight, float, candle))
}

/// Evaluate with already-validated scores. Cannot fail.
pub fn evaluate_scores(weight: f64, float: TestScore, candle: TestScore) -> EvaluationResult {
    let raw_index = freshness_index(weight, float, candle);
    let grade = Grade::from_index(raw_index);

    EvaluationResult {
        raw_index,
        index: format!("{:.2}", raw_index),
        grade,
        label: grade.label(),
        severity: grade.severity(),
    }
}

/// FI = W - 12.03F - 8.42C, unrounded.
pub fn freshness_index(weight: f64, float: TestScore, candle: TestScore) -> f64 {
    weight - (CONSTANT_F * float.as_f64()) - (CONSTANT_C * candle.as_f64())
}
