use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::freshness::Measurement;

/// A file of measurements to evaluate together.
///
/// Example YAML:
/// ```yaml
/// measurements:
///   - { name: egg-1, weight: 55.0, float_score: 0, candle_score: 0 }
///   - { name: egg-2, weight: 48.7, float_score: 1, candle_score: 2 }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BatchFile {
    #[serde(default)]
    pub measurements: Vec<Measurement>,
}

/// Parse a batch from YAML text.
pub fn parse_batch(content: &str) -> Result<BatchFile> {
    serde_saphyr::from_str(content).context("Failed to parse measurements: invalid YAML")
}

/// Load a batch of measurements from a YAML file.
pub fn load_batch(path: &Path) -> Result<BatchFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read measurements file at {}", path.display()))?;

    let batch: BatchFile = serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse measurements: invalid YAML in {}", path.display()))?;

    debug!(
        path = %path.display(),
        count = batch.measurements.len(),
        "loaded measurements"
    );
    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_batch() {
        let yaml = r#"
measurements:
  - name: egg-1
    weight: 55.0
    float_score: 0
    candle_score: 0
  - weight: 40
    float_score: 2
    candle_score: 2
"#;
        let batch = parse_batch(yaml).unwrap();
        assert_eq!(batch.measurements.len(), 2);
        assert_eq!(batch.measurements[0].name.as_deref(), Some("egg-1"));
        assert_eq!(batch.measurements[1].weight, 40.0);
        assert!(batch.measurements[1].name.is_none());
    }

    #[test]
    fn test_parse_keeps_out_of_range_scores() {
        // Range checks belong to the evaluator, not the parser
        let yaml = r#"
measurements:
  - { weight: 55.0, float_score: 3, candle_score: 1.5 }
"#;
        let batch = parse_batch(yaml).unwrap();
        assert_eq!(batch.measurements[0].float_score, 3.0);
        assert_eq!(batch.measurements[0].candle_score, 1.5);
    }

    #[test]
    fn test_parse_missing_field() {
        let yaml = r#"
measurements:
  - { weight: 55.0, float_score: 0 }
"#;
        assert!(parse_batch(yaml).is_err());
    }

    #[test]
    fn test_parse_empty_batch() {
        let batch = parse_batch("{}").unwrap();
        assert!(batch.measurements.is_empty());
    }

    #[test]
    fn test_load_batch_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "measurements:").unwrap();
        writeln!(file, "  - {{ name: a, weight: 60.1, float_score: 1, candle_score: 0 }}").unwrap();
        let batch = load_batch(file.path()).unwrap();
        assert_eq!(batch.measurements.len(), 1);
        assert_eq!(batch.measurements[0].float_score, 1.0);
    }

    #[test]
    fn test_load_batch_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_batch(&dir.path().join("absent.yaml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read measurements file"));
    }
}
