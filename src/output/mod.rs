pub mod formatter;

pub use formatter::{
    format_error, format_json, format_result_detail, format_scored_table, format_thresholds,
    format_tsv, should_use_colors, EvaluatedEgg,
};
