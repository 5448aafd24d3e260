pub mod spec;
pub mod run;

pub use spec::{PipelineSpec, BoardSpec, StageSpec};
pub use run::{run_pipeline, FeatureMap, PipelineReport};
