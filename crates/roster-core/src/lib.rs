mod partition;
mod pipeline;

pub use partition::partition_rows;
pub use pipeline::{CleaningRun, DatasetError, PipelineContext};
