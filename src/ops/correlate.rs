use crate::error::{ConvError, Result};
use crate::math::matrix::Matrix;

/// Valid 2-D cross-correlation: stride 1, no padding, kernel not flipped.
///
/// Output shape is `(H - kh + 1, W - kw + 1)` and
/// `out[i][j] = Σ input[i + a][j + b] * kernel[a][b]`.
pub fn correlate2d(input: &Matrix, kernel: &Matrix) -> Result<Matrix> {
    if !input.is_rectangular() || !kernel.is_rectangular() {
        return Err(ConvError::InvalidArgument(
            "input and kernel must have rows of equal length".to_string(),
        ));
    }
    if kernel.rows == 0 || kernel.cols == 0 {
        return Err(ConvError::InvalidArgument("kernel must not be empty".to_string()));
    }
    if kernel.rows > input.rows || kernel.cols > input.cols {
        return Err(ConvError::InvalidArgument(format!(
            "{}x{} kernel does not fit a {}x{} input",
            kernel.rows, kernel.cols, input.rows, input.cols
        )));
    }

    let mut res = Matrix::zeros(input.rows - kernel.rows + 1, input.cols - kernel.cols + 1);

    for i in 0..res.rows {
        for j in 0..res.cols {
            let mut sum = 0.0;

            for a in 0..kernel.rows {
                for b in 0..kernel.cols {
                    sum += input.data[i + a][j + b] * kernel.data[a][b];
                }
            }

            res.data[i][j] = sum;
        }
    }

    Ok(res)
}
