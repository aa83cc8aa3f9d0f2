//! Settings resolution and exit codes for the `chick-it` binary.

use crate::config::{ColorMode, Config, OutputFormat};
use crate::output::EvaluatedEgg;

pub const EXIT_SUCCESS: i32 = 0;
/// At least one measurement had an invalid score (or failed `--strict`).
pub const EXIT_DOMAIN: i32 = 1;
/// Batch file or interactive input could not be read.
pub const EXIT_INPUT: i32 = 2;
/// Results could not be rendered (JSON serialization failed).
pub const EXIT_OUTPUT: i32 = 3;
pub const EXIT_CONFIG: i32 = 4;

/// Pick the output format and color mode. CLI flags win over the config
/// file, which wins over the built-in defaults.
pub fn resolve_output(
    cli_format: Option<OutputFormat>,
    cli_color: Option<ColorMode>,
    config: &Config,
) -> (OutputFormat, ColorMode) {
    let format = cli_format.or(config.format).unwrap_or_default();
    let color = cli_color.or(config.color).unwrap_or_default();
    (format, color)
}

/// Exit code for a set of evaluated rows: domain error if any row failed.
pub fn exit_code(eggs: &[EvaluatedEgg]) -> i32 {
    if eggs.iter().any(|egg| egg.outcome.is_err()) {
        EXIT_DOMAIN
    } else {
        EXIT_SUCCESS
    }
}
