use super::engine::Measurement;
use super::error::TestKind;
use super::grade::TestScore;

/// Check a batch of measurements before evaluating any of them.
/// Returns all validation errors at once (not just the first).
pub fn validate_measurements(measurements: &[Measurement]) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    for (i, m) in measurements.iter().enumerate() {
        if !m.weight.is_finite() || m.weight <= 0.0 {
            errors.push(format!("measurements[{}].weight: must be positive", i));
        }

        for (test, value) in [
            (TestKind::Float, m.float_score),
            (TestKind::Candling, m.candle_score),
        ] {
            if let Err(e) = TestScore::from_real(value, test) {
                errors.push(format!(
                    "measurements[{}].{}: invalid '{}' - {}",
                    i,
                    test.field(),
                    value,
                    e
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_batch() {
        let batch = vec![
            Measurement::new(55.0, 0.0, 0.0),
            Measurement::new(48.2, 2.0, 1.0),
        ];
        assert!(validate_measurements(&batch).is_ok());
    }

    #[test]
    fn test_empty_batch() {
        assert!(validate_measurements(&[]).is_ok());
    }

    #[test]
    fn test_invalid_float_score() {
        let batch = vec![Measurement::new(55.0, 3.0, 0.0)];
        let errors = validate_measurements(&batch).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0],
            "measurements[0].float_score: invalid '3' - Floating and Candling Scores must be 0, 1, or 2."
        );
    }

    #[test]
    fn test_invalid_candle_score_position() {
        let batch = vec![
            Measurement::new(55.0, 0.0, 0.0),
            Measurement::new(55.0, 0.0, 1.5),
        ];
        let errors = validate_measurements(&batch).unwrap_err();
        assert!(errors[0].starts_with("measurements[1].candle_score: invalid '1.5'"));
    }

    #[test]
    fn test_non_positive_weight() {
        let batch = vec![Measurement::new(0.0, 0.0, 0.0)];
        let errors = validate_measurements(&batch).unwrap_err();
        assert_eq!(errors[0], "measurements[0].weight: must be positive");

        let batch = vec![Measurement::new(f64::NAN, 0.0, 0.0)];
        assert!(validate_measurements(&batch).is_err());
    }

    #[test]
    fn test_collects_all_errors() {
        let batch = vec![
            Measurement::new(-1.0, 5.0, 0.0),  // Errors 1 and 2
            Measurement::new(55.0, 0.0, -2.0), // Error 3
        ];
        let errors = validate_measurements(&batch).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
