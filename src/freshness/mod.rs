//! Freshness Index calculation and grading.
//!
//! Pure computation only: nothing in this module performs I/O or depends on
//! how results are displayed.

pub mod constants;
pub mod engine;
pub mod error;
pub mod grade;
pub mod validation;

pub use constants::*;
pub use engine::{evaluate, evaluate_scores, freshness_index, EvaluationResult, Measurement};
pub use error::{DomainError, TestKind};
pub use grade::{Grade, Severity, TestScore};
pub use validation::validate_measurements;
