use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{ConvError, Result};
use crate::math::matrix::Matrix;

/// Diagonal neighbours plus the center, as `(row, col)` offsets.
const X_OFFSETS: [(isize, isize); 5] = [(-1, -1), (1, 1), (1, -1), (-1, 1), (0, 0)];
/// Axis-aligned neighbours; the center is left alone.
const O_OFFSETS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    fn offsets(self) -> &'static [(isize, isize)] {
        match self {
            Mark::X => &X_OFFSETS,
            Mark::O => &O_OFFSETS,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// A tic-tac-toe position rasterized into a single-channel image.
///
/// Every logical cell `(x, y)` owns a 4×4 block of pixels; the mark drawn there
/// is centred at pixel `(4y + 3, 4x + 3)`. The grid is
/// `(4 * height + 3) × (4 * width + 3)` and starts out all zeros. Placing marks
/// only ever writes `1.0`, so overlapping marks merge rather than erase.
#[derive(Debug, Clone)]
pub struct TicTacToe {
    width: usize,
    height: usize,
    board: Matrix,
}

impl TicTacToe {
    pub fn new(width: usize, height: usize) -> Result<TicTacToe> {
        if width == 0 || height == 0 {
            return Err(ConvError::InvalidArgument(format!(
                "board dimensions must be positive, got {}x{}",
                width, height
            )));
        }

        let padded = |n: usize| n.checked_mul(4).and_then(|v| v.checked_add(3));
        let (rows, cols) = padded(height).zip(padded(width)).ok_or_else(|| {
            ConvError::InvalidArgument(format!(
                "board dimensions {}x{} overflow the grid size",
                width, height
            ))
        })?;

        Ok(TicTacToe {
            width,
            height,
            board: Matrix::zeros(rows, cols),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn grid(&self) -> &Matrix {
        &self.board
    }

    pub fn into_grid(self) -> Matrix {
        self.board
    }

    pub fn place_x(&mut self, x: usize, y: usize) -> Result<()> {
        self.place(Mark::X, x, y)
    }

    pub fn place_o(&mut self, x: usize, y: usize) -> Result<()> {
        self.place(Mark::O, x, y)
    }

    /// Draws `mark` at logical cell `(x, y)`.
    ///
    /// The whole footprint is bounds-checked before the first write, so an
    /// `OutOfRange` error leaves the board untouched.
    pub fn place(&mut self, mark: Mark, x: usize, y: usize) -> Result<()> {
        let cells = self.footprint(mark, x, y)?;
        for (row, col) in cells {
            self.board.data[row][col] = 1.0;
        }
        Ok(())
    }

    /// Places every X in order, then every O in order. Stops at the first
    /// placement that does not fit; marks drawn before it stay on the board.
    pub fn fill_up(&mut self, x_marks: &[(usize, usize)], o_marks: &[(usize, usize)]) -> Result<()> {
        for &(x, y) in x_marks {
            self.place_x(x, y)?;
        }
        for &(x, y) in o_marks {
            self.place_o(x, y)?;
        }
        Ok(())
    }

    /// Scatters `x_count` X marks and `o_count` O marks over distinct logical
    /// cells chosen uniformly at random.
    pub fn fill_random<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        x_count: usize,
        o_count: usize,
    ) -> Result<()> {
        let total = self.width.saturating_mul(self.height);
        match x_count.checked_add(o_count) {
            Some(marks) if marks <= total => {}
            _ => {
                return Err(ConvError::InvalidArgument(format!(
                    "cannot place {} X and {} O marks on a board with {} cells",
                    x_count, o_count, total
                )))
            }
        }

        let mut cells: Vec<(usize, usize)> = (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .collect();
        cells.shuffle(rng);

        let (x_marks, rest) = cells.split_at(x_count);
        self.fill_up(x_marks, &rest[..o_count])
    }

    /// Grid cells covered by `mark` at `(x, y)`, or `OutOfRange` if any of
    /// them falls outside the board.
    fn footprint(&self, mark: Mark, x: usize, y: usize) -> Result<Vec<(usize, usize)>> {
        let out_of_range = || ConvError::OutOfRange {
            mark,
            x,
            y,
            rows: self.board.rows,
            cols: self.board.cols,
        };

        let center_row = y.checked_mul(4).and_then(|r| r.checked_add(3)).ok_or_else(out_of_range)?;
        let center_col = x.checked_mul(4).and_then(|c| c.checked_add(3)).ok_or_else(out_of_range)?;

        mark.offsets()
            .iter()
            .map(|&(dr, dc)| {
                let row = center_row.checked_add_signed(dr).filter(|&r| r < self.board.rows);
                let col = center_col.checked_add_signed(dc).filter(|&c| c < self.board.cols);
                row.zip(col).ok_or_else(out_of_range)
            })
            .collect()
    }
}

impl fmt::Display for TicTacToe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}
