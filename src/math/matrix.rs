use rand::prelude::*;
use serde::{Serialize, Deserialize};
use std::fmt;
use std::ops::Add;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix{
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>
}

impl Matrix{
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix{
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows]
        }
    }

    /// Uniform samples in [-1, 1), e.g. an untrained kernel.
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);

        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = rng.gen::<f64>() * 2.0 - 1.0;
            }
        }

        res
    }

    /// Builds a matrix from row vectors. An empty outer vector gives a 0×0 matrix.
    ///
    /// All rows are expected to have the same length as the first one.
    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        let cols = data.first().map_or(0, |row| row.len());
        Matrix {
            rows: data.len(),
            cols,
            data
        }
    }

    /// True when `data` really is `rows` rows of `cols` cells each. The fields
    /// are public, so hand-built matrices can disagree with their own shape.
    pub fn is_rectangular(&self) -> bool {
        self.data.len() == self.rows && self.data.iter().all(|row| row.len() == self.cols)
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.data.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix::from_data(
            self.data
                .iter()
                .map(|row| row.iter().map(|&x| functor(x)).collect())
                .collect()
        )
    }

    pub fn add_scalar(&self, value: f64) -> Matrix {
        self.map(|x| x + value)
    }

    /// Number of cells that are not exactly zero.
    pub fn count_nonzero(&self) -> usize {
        self.data.iter().flatten().filter(|&&x| x != 0.0).count()
    }

    pub fn max(&self) -> f64 {
        self.data.iter().flatten().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix { rows: 0, cols: 0, data: vec![] }
    }
}

/// One row per line, cells formatted with one decimal place.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.data {
            let line: Vec<String> = row.iter().map(|x| format!("{:>5.1}", x)).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

impl Add for Matrix {
    type Output = Matrix;

    fn add(self, rhs: Self) -> Self::Output {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            panic!("Matrices are of incorrect sizes")
        }

        let mut res = Matrix::zeros(self.rows, self.cols);

        for i in 0..self.rows {
            for j in 0..self.cols {
                res.data[i][j] = self.data[i][j] + rhs.data[i][j];
            }
        }

        res
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;

    #[test]
    fn zeros_has_requested_shape() {
        let m = Matrix::zeros(3, 5);
        assert_eq!(m.shape(), (3, 5));
        assert_eq!(m.count_nonzero(), 0);
    }

    #[test]
    fn from_empty_data_is_zero_sized() {
        let m = Matrix::from_data(vec![]);
        assert_eq!(m.shape(), (0, 0));
    }

    #[test]
    fn ragged_rows_are_not_rectangular() {
        assert!(Matrix::zeros(2, 3).is_rectangular());
        assert!(!Matrix::from_data(vec![vec![1.0, 2.0, 3.0], vec![1.0]]).is_rectangular());

        let mut lying = Matrix::zeros(2, 2);
        lying.rows = 3;
        assert!(!lying.is_rectangular());
    }

    #[test]
    fn random_is_bounded_and_seedable() {
        let a = Matrix::random(4, 4, &mut StdRng::seed_from_u64(7));
        let b = Matrix::random(4, 4, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert!(a.data.iter().flatten().all(|&x| (-1.0..1.0).contains(&x)));
    }

    #[test]
    fn add_scalar_and_add() {
        let m = Matrix::from_data(vec![vec![1.0, -2.0], vec![0.5, 0.0]]);
        let shifted = m.add_scalar(1.0);
        assert_eq!(shifted.data, vec![vec![2.0, -1.0], vec![1.5, 1.0]]);
        let sum = m.clone() + shifted;
        assert_eq!(sum.data, vec![vec![3.0, -3.0], vec![2.0, 1.0]]);
        assert_eq!(sum.max(), 3.0);
    }

    #[test]
    fn display_prints_one_line_per_row() {
        let m = Matrix::from_data(vec![vec![1.0, 0.0], vec![0.25, 2.0]]);
        let text = m.to_string();
        assert_eq!(text.lines().count(), 2);
        assert_eq!(text.lines().next(), Some("  1.0   0.0"));
    }
}
