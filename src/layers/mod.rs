pub mod conv;
pub mod pool;

pub use conv::ConvLayer;
pub use pool::PoolLayer;
