use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Output format when `--format` is not given
    #[serde(default)]
    pub format: Option<OutputFormat>,

    /// Color mode when `--color` is not given
    #[serde(default)]
    pub color: Option<ColorMode>,
}

impl Config {
    /// Values written by `chick-it init`.
    pub fn starter() -> Self {
        Self {
            format: Some(OutputFormat::Table),
            color: Some(ColorMode::Auto),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Detail view for one egg, aligned table for a batch
    #[default]
    Table,
    /// Tab-separated values for scripting
    Tsv,
    /// JSON array of results
    Json,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color only when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}
