//! Rasterization properties of the tic-tac-toe board, checked through the
//! public API only.

use ferrite_conv::{ConvError, Mark, Matrix, TicTacToe};

fn footprint(width: usize, height: usize, mark: Mark, x: usize, y: usize) -> Matrix {
    let mut board = TicTacToe::new(width, height).unwrap();
    board.place(mark, x, y).unwrap();
    board.into_grid()
}

/// Cell-wise union of 0/1 grids, clamped at 1.0.
fn union(a: Matrix, b: Matrix) -> Matrix {
    (a + b).map(|v| v.min(1.0))
}

#[test]
fn construct_yields_padded_zero_grid_for_many_sizes() {
    for width in 1..6 {
        for height in 1..6 {
            let board = TicTacToe::new(width, height).unwrap();
            assert_eq!(board.grid().shape(), (4 * height + 3, 4 * width + 3));
            assert_eq!(board.grid().count_nonzero(), 0);
        }
    }
}

#[test]
fn two_by_two_x_example() {
    let grid = footprint(2, 2, Mark::X, 0, 0);
    assert_eq!(grid.shape(), (11, 11));
    for (r, c) in [(2, 2), (4, 4), (4, 2), (2, 4), (3, 3)] {
        assert_eq!(grid.get(r, c), Some(1.0), "({r}, {c})");
    }
    assert_eq!(grid.count_nonzero(), 5);
    assert_eq!(grid.rows * grid.cols - grid.count_nonzero(), 116);
}

#[test]
fn two_by_two_o_example() {
    let grid = footprint(2, 2, Mark::O, 1, 1);
    for (r, c) in [(6, 7), (8, 7), (7, 6), (7, 8)] {
        assert_eq!(grid.get(r, c), Some(1.0), "({r}, {c})");
    }
    assert_eq!(grid.get(7, 7), Some(0.0));
    assert_eq!(grid.count_nonzero(), 4);
}

#[test]
fn fill_up_is_union_of_individual_footprints() {
    let xs = [(0, 0), (2, 1)];
    let os = [(1, 0), (0, 2), (2, 2)];

    let mut filled = TicTacToe::new(3, 3).unwrap();
    filled.fill_up(&xs, &os).unwrap();

    let mut expected = Matrix::zeros(15, 15);
    for &(x, y) in &xs {
        expected = union(expected, footprint(3, 3, Mark::X, x, y));
    }
    for &(x, y) in &os {
        expected = union(expected, footprint(3, 3, Mark::O, x, y));
    }
    assert_eq!(filled.grid(), &expected);

    // Reversed order lands on the same grid.
    let mut reversed = TicTacToe::new(3, 3).unwrap();
    for &(x, y) in os.iter().rev() {
        reversed.place_o(x, y).unwrap();
    }
    for &(x, y) in xs.iter().rev() {
        reversed.place_x(x, y).unwrap();
    }
    assert_eq!(reversed.grid(), filled.grid());
}

#[test]
fn out_of_range_mark_is_rejected_without_side_effects() {
    let mut board = TicTacToe::new(1, 1).unwrap();
    board.place_o(0, 0).unwrap();
    let before = board.grid().clone();

    match board.place_x(1, 0) {
        Err(ConvError::OutOfRange { mark, x, y, rows, cols }) => {
            assert_eq!((mark, x, y, rows, cols), (Mark::X, 1, 0, 7, 7));
        }
        other => panic!("expected OutOfRange, got {other:?}"),
    }
    assert_eq!(board.grid(), &before);
}

#[test]
fn error_messages_name_the_problem() {
    let err = TicTacToe::new(0, 2).unwrap_err();
    assert!(err.to_string().contains("0x2"));

    let mut board = TicTacToe::new(1, 1).unwrap();
    let err = board.place_o(0, 3).unwrap_err();
    assert_eq!(err.to_string(), "O at (0, 3) does not fit the 7x7 grid");
}
