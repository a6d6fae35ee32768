// The forecast pipeline: fetch, test, forecast — independent of any UI
pub mod pipeline;

pub use pipeline::{PipelineError, RunOutput, run};
