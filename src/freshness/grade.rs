use serde::Serialize;

use super::constants::{THRESHOLD_A, THRESHOLD_AA};
use super::error::{DomainError, TestKind};

/// Outcome of a float or candling test. 0 is freshest, 2 is oldest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "u8")]
pub enum TestScore {
    Zero,
    One,
    Two,
}

impl TestScore {
    /// Parse an integer score for the given test.
    pub fn from_int(value: i64, test: TestKind) -> Result<Self, DomainError> {
        match value {
            0 => Ok(TestScore::Zero),
            1 => Ok(TestScore::One),
            2 => Ok(TestScore::Two),
            _ => Err(DomainError::InvalidScore {
                test,
                value: value as f64,
            }),
        }
    }

    /// Parse a real-valued score. Fractions, NaN and infinities are rejected,
    /// never rounded.
    pub fn from_real(value: f64, test: TestKind) -> Result<Self, DomainError> {
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(DomainError::InvalidScore { test, value });
        }
        match value as i64 {
            0 => Ok(TestScore::Zero),
            1 => Ok(TestScore::One),
            2 => Ok(TestScore::Two),
            _ => Err(DomainError::InvalidScore { test, value }),
        }
    }

    pub fn value(&self) -> u8 {
        match self {
            TestScore::Zero => 0,
            TestScore::One => 1,
            TestScore::Two => 2,
        }
    }

    pub fn as_f64(&self) -> f64 {
        f64::from(self.value())
    }
}

impl From<TestScore> for u8 {
    fn from(score: TestScore) -> Self {
        score.value()
    }
}

impl TryFrom<i64> for TestScore {
    type Error = DomainError;

    /// Conversion without a test context reports the float test.
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        TestScore::from_int(value, TestKind::Float)
    }
}

impl TryFrom<f64> for TestScore {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        TestScore::from_real(value, TestKind::Float)
    }
}

/// Ordinal freshness grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Grade {
    #[serde(rename = "AA Grade")]
    AA,
    #[serde(rename = "A Grade")]
    A,
    #[serde(rename = "B Grade")]
    B,
}

impl Grade {
    /// Classify an unrounded index. Thresholds are inclusive lower bounds,
    /// checked from the top down.
    pub fn from_index(index: f64) -> Self {
        if index >= THRESHOLD_AA {
            Grade::AA
        } else if index >= THRESHOLD_A {
            Grade::A
        } else {
            Grade::B
        }
    }

    /// Short tag, e.g. "AA Grade".
    pub fn tag(&self) -> &'static str {
        match self {
            Grade::AA => "AA Grade",
            Grade::A => "A Grade",
            Grade::B => "B Grade",
        }
    }

    /// Descriptive label, e.g. "AA (Premium)".
    pub fn label(&self) -> &'static str {
        match self {
            Grade::AA => "AA (Premium)",
            Grade::A => "A (Standard)",
            Grade::B => "B (Reduced)",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Grade::AA => Severity::Low,
            Grade::A => Severity::Medium,
            Grade::B => Severity::High,
        }
    }
}

/// Display emphasis for a grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn color_name(&self) -> &'static str {
        match self {
            Severity::Low => "green",
            Severity::Medium => "blue",
            Severity::High => "orange",
        }
    }

    /// Emerald, blue and amber.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Severity::Low => (0x10, 0xb9, 0x81),
            Severity::Medium => (0x3b, 0x82, 0xf6),
            Severity::High => (0xf5, 0x9e, 0x0b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_from_int_in_range() {
        assert_eq!(TestScore::from_int(0, TestKind::Float).unwrap(), TestScore::Zero);
        assert_eq!(TestScore::from_int(1, TestKind::Float).unwrap(), TestScore::One);
        assert_eq!(TestScore::from_int(2, TestKind::Candling).unwrap(), TestScore::Two);
    }

    #[test]
    fn test_score_from_int_out_of_range() {
        let err = TestScore::from_int(3, TestKind::Candling).unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidScore {
                test: TestKind::Candling,
                value: 3.0
            }
        );
        assert!(TestScore::from_int(-1, TestKind::Float).is_err());
    }

    #[test]
    fn test_score_from_real_rejects_fraction() {
        assert!(TestScore::from_real(1.5, TestKind::Float).is_err());
        assert!(TestScore::from_real(0.999, TestKind::Float).is_err());
    }

    #[test]
    fn test_score_from_real_rejects_non_finite() {
        assert!(TestScore::from_real(f64::NAN, TestKind::Float).is_err());
        assert!(TestScore::from_real(f64::INFINITY, TestKind::Float).is_err());
    }

    #[test]
    fn test_score_from_real_whole_numbers() {
        assert_eq!(TestScore::from_real(2.0, TestKind::Float).unwrap(), TestScore::Two);
        assert_eq!(TestScore::from_real(-0.0, TestKind::Float).unwrap(), TestScore::Zero);
    }

    #[test]
    fn test_try_from_impls() {
        assert_eq!(TestScore::try_from(1_i64).unwrap(), TestScore::One);
        assert_eq!(TestScore::try_from(2.0_f64).unwrap(), TestScore::Two);
        assert!(TestScore::try_from(7_i64).is_err());
    }

    #[test]
    fn test_grade_aa_boundary_inclusive() {
        assert_eq!(Grade::from_index(51.82), Grade::AA);
        assert_eq!(Grade::from_index(51.81999), Grade::A);
    }

    #[test]
    fn test_grade_a_boundary_inclusive() {
        assert_eq!(Grade::from_index(30.019), Grade::A);
        assert_eq!(Grade::from_index(30.0189), Grade::B);
    }

    #[test]
    fn test_grade_negative_index() {
        assert_eq!(Grade::from_index(-0.9), Grade::B);
    }

    #[test]
    fn test_grade_nan_falls_through_to_b() {
        assert_eq!(Grade::from_index(f64::NAN), Grade::B);
    }

    #[test]
    fn test_tag_and_label_differ() {
        for grade in [Grade::AA, Grade::A, Grade::B] {
            assert_ne!(grade.tag(), grade.label());
        }
        assert_eq!(Grade::AA.tag(), "AA Grade");
        assert_eq!(Grade::A.label(), "A (Standard)");
        assert_eq!(Grade::B.label(), "B (Reduced)");
    }

    #[test]
    fn test_severity_colors() {
        assert_eq!(Grade::AA.severity().color_name(), "green");
        assert_eq!(Grade::A.severity().color_name(), "blue");
        assert_eq!(Grade::B.severity().color_name(), "orange");
        assert_eq!(Severity::High.rgb(), (245, 158, 11));
    }

    #[test]
    fn test_grade_serializes_as_tag() {
        assert_eq!(serde_json::to_string(&Grade::AA).unwrap(), "\"AA Grade\"");
        assert_eq!(serde_json::to_string(&Severity::Medium).unwrap(), "\"Medium\"");
        assert_eq!(serde_json::to_string(&TestScore::Two).unwrap(), "2");
    }
}
