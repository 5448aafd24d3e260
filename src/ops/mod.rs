pub mod correlate;
pub mod pool;

pub use correlate::correlate2d;
pub use pool::{pool2d, PoolMode};
