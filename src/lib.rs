pub mod math;
pub mod error;
pub mod board;
pub mod activation;
pub mod ops;
pub mod kernels;
pub mod layers;
pub mod pipeline;
pub mod imaging;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use error::{ConvError, Result};
pub use board::board::{Mark, TicTacToe};
pub use activation::activation::ActivationFunction;
pub use ops::correlate::correlate2d;
pub use ops::pool::{pool2d, PoolMode};
pub use layers::conv::ConvLayer;
pub use layers::pool::PoolLayer;
pub use pipeline::{run_pipeline, FeatureMap, PipelineReport, PipelineSpec};
pub use imaging::grayscale::{image_bytes_to_grayscale, sobel_edges};
