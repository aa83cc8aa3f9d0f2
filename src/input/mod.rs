pub mod batch;
pub mod prompt;

pub use batch::{load_batch, parse_batch, BatchFile};
pub use prompt::prompt_measurement;
