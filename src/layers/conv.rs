use crate::{math::matrix::Matrix, activation::activation::ActivationFunction};
use crate::error::Result;
use crate::ops::correlate::correlate2d;

/// A single-kernel convolution layer with a scalar bias.
#[derive(Debug, Clone)]
pub struct ConvLayer {
    pub kernel: Matrix,
    pub bias: f64,
    pub activator: ActivationFunction,
}

impl ConvLayer {
    pub fn new(kernel: Matrix, bias: f64, activation: ActivationFunction) -> ConvLayer {
        ConvLayer {
            kernel,
            bias,
            activator: activation,
        }
    }

    /// `activation(correlate(input, kernel) + bias)`
    pub fn forward(&self, input: &Matrix) -> Result<Matrix> {
        let z = correlate2d(input, &self.kernel)?;
        Ok(z.map(|x| self.activator.function(x + self.bias)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::board::TicTacToe;
    use crate::kernels;

    #[test]
    fn x_kernel_peaks_on_x_center() {
        let mut board = TicTacToe::new(1, 1).unwrap();
        board.place_x(0, 0).unwrap();
        let layer = ConvLayer::new(kernels::x(), 0.0, ActivationFunction::Identity);
        let out = layer.forward(board.grid()).unwrap();
        assert_eq!(out.shape(), (5, 5));
        // Output (i, j) sits on input (i + 1, j + 1); the X center is (3, 3).
        assert_eq!(out.data[2][2], 5.0);
        assert_eq!(out.max(), 5.0);
    }

    #[test]
    fn o_kernel_peaks_on_o_center() {
        let mut board = TicTacToe::new(1, 1).unwrap();
        board.place_o(0, 0).unwrap();
        let layer = ConvLayer::new(kernels::o(), 0.0, ActivationFunction::Identity);
        let out = layer.forward(board.grid()).unwrap();
        assert_eq!(out.data[2][2], 4.0);
        assert_eq!(out.max(), 4.0);
    }

    #[test]
    fn negative_bias_with_relu_suppresses_weak_responses() {
        let mut board = TicTacToe::new(1, 1).unwrap();
        board.place_x(0, 0).unwrap();
        let layer = ConvLayer::new(kernels::x(), -4.0, ActivationFunction::ReLU);
        let out = layer.forward(board.grid()).unwrap();
        assert_eq!(out.count_nonzero(), 1);
        assert_eq!(out.data[2][2], 1.0);
    }
}
