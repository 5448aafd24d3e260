use std::fmt;

use serde::{Serialize, Deserialize};

use crate::error::{ConvError, Result};
use crate::math::matrix::Matrix;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolMode {
    Max,
    Avg,
}

impl Default for PoolMode {
    fn default() -> Self {
        PoolMode::Max
    }
}

/// Renders as `max-pooling` / `avg-pooling`, the labels used for feature map names.
impl fmt::Display for PoolMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolMode::Max => write!(f, "max-pooling"),
            PoolMode::Avg => write!(f, "avg-pooling"),
        }
    }
}

/// Non-overlapping `size × size` pooling with stride `size`.
///
/// Output shape is `(H / size, W / size)` using floor division: trailing rows
/// and columns that cannot fill a whole window are dropped.
pub fn pool2d(input: &Matrix, size: usize, mode: PoolMode) -> Result<Matrix> {
    if !input.is_rectangular() {
        return Err(ConvError::InvalidArgument("input must have rows of equal length".to_string()));
    }
    if size == 0 {
        return Err(ConvError::InvalidArgument("pooling window must be at least 1".to_string()));
    }
    if size > input.rows || size > input.cols {
        return Err(ConvError::InvalidArgument(format!(
            "{}x{} pooling window does not fit a {}x{} input",
            size, size, input.rows, input.cols
        )));
    }

    let mut res = Matrix::zeros(input.rows / size, input.cols / size);
    let window_len = (size * size) as f64;

    for i in 0..res.rows {
        for j in 0..res.cols {
            let window = (0..size).flat_map(|a| {
                let row = &input.data[i * size + a];
                row[j * size..(j + 1) * size].iter().copied()
            });

            res.data[i][j] = match mode {
                PoolMode::Max => window.fold(f64::NEG_INFINITY, f64::max),
                PoolMode::Avg => window.sum::<f64>() / window_len,
            };
        }
    }

    Ok(res)
}
