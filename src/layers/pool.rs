use crate::error::Result;
use crate::math::matrix::Matrix;
use crate::ops::pool::{pool2d, PoolMode};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoolLayer {
    pub size: usize,
    pub mode: PoolMode,
}

impl PoolLayer {
    pub fn new(size: usize, mode: PoolMode) -> PoolLayer {
        PoolLayer { size, mode }
    }

    pub fn forward(&self, input: &Matrix) -> Result<Matrix> {
        pool2d(input, self.size, self.mode)
    }
}
