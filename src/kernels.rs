//! Fixed 3×3 kernels used to probe the tic-tac-toe board and photographs.
//!
//! The banks return `(name, kernel)` pairs in a stable order so feature maps
//! derived from them keep a predictable layout.

use crate::math::matrix::Matrix;

fn kernel3(rows: [[f64; 3]; 3]) -> Matrix {
    Matrix::from_data(rows.iter().map(|r| r.to_vec()).collect())
}

/// Lights up on the centre and diagonals of an X mark.
pub fn x() -> Matrix {
    kernel3([
        [1.0, 0.0, 1.0],
        [0.0, 1.0, 0.0],
        [1.0, 0.0, 1.0],
    ])
}

/// Lights up on the four arms of an O mark.
pub fn o() -> Matrix {
    kernel3([
        [0.0, 1.0, 0.0],
        [1.0, 0.0, 1.0],
        [0.0, 1.0, 0.0],
    ])
}

pub fn vertical() -> Matrix {
    kernel3([
        [0.0, 1.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 1.0, 0.0],
    ])
}

pub fn horizontal() -> Matrix {
    kernel3([
        [0.0, 0.0, 0.0],
        [1.0, 1.0, 1.0],
        [0.0, 0.0, 0.0],
    ])
}

/// Anti-diagonal (bottom-left to top-right).
pub fn diagonal_1() -> Matrix {
    kernel3([
        [0.0, 0.0, 1.0],
        [0.0, 1.0, 0.0],
        [1.0, 0.0, 0.0],
    ])
}

/// Main diagonal (top-left to bottom-right).
pub fn diagonal_2() -> Matrix {
    kernel3([
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
    ])
}

/// Responds to left-to-right intensity changes, i.e. vertical edges.
pub fn sobel_vertical() -> Matrix {
    kernel3([
        [-1.0, 0.0, 1.0],
        [-2.0, 0.0, 2.0],
        [-1.0, 0.0, 1.0],
    ])
}

/// Responds to top-to-bottom intensity changes, i.e. horizontal edges.
pub fn sobel_horizontal() -> Matrix {
    kernel3([
        [-1.0, -2.0, -1.0],
        [0.0, 0.0, 0.0],
        [1.0, 2.0, 1.0],
    ])
}

/// Mark detectors: `x`, then `o`.
pub fn x_o_kernels() -> Vec<(&'static str, Matrix)> {
    vec![("x", x()), ("o", o())]
}

/// Line detectors used on the pooled mark maps.
pub fn line_kernels() -> Vec<(&'static str, Matrix)> {
    vec![
        ("vertical", vertical()),
        ("horizontal", horizontal()),
        ("diagonal_1", diagonal_1()),
        ("diagonal_2", diagonal_2()),
    ]
}

/// Sobel pair for edge detection on photographs.
pub fn sobel_kernels() -> Vec<(&'static str, Matrix)> {
    vec![
        ("sobel vertical", sobel_vertical()),
        ("sobel horizontal", sobel_horizontal()),
    ]
}
