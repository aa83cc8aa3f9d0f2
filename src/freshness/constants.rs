/// Weight penalty per point of floating score.
pub const CONSTANT_F: f64 = 12.03;

/// Weight penalty per point of candling score.
pub const CONSTANT_C: f64 = 8.42;

/// Lowest index (inclusive) graded AA.
pub const THRESHOLD_AA: f64 = 51.82;

/// Lowest index (inclusive) graded A.
pub const THRESHOLD_A: f64 = 30.019;

/// Human-readable form of the index formula.
pub fn formula() -> String {
    format!("FI = W - {}F - {}C", CONSTANT_F, CONSTANT_C)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formula_text() {
        assert_eq!(formula(), "FI = W - 12.03F - 8.42C");
    }

    #[test]
    fn test_thresholds_descend() {
        assert!(THRESHOLD_AA > THRESHOLD_A);
    }
}
