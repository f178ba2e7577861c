//! Validated gift grids and their text format.
//!
//! A [`Grid`] is always a non-empty rectangle; every constructor checks this
//! once so solvers can index without re-validating. Cells are stored flat in
//! row-major order.
//!
//! The text format is one row per line with values separated by whitespace
//! and/or commas. Blank lines and lines starting with `#` are skipped:
//!
//! ```
//! use gift_path::Grid;
//!
//! let grid: Grid = "# board\n1 2 3\n1,4,1\n".parse().unwrap();
//! assert_eq!((grid.rows(), grid.cols()), (2, 3));
//! ```

use std::io::BufRead;
use std::ops::Index;
use std::str::FromStr;

use crate::error::{InvalidInputError, ParseGridError};

/// A (row, col) coordinate, 0-indexed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    /// The top-left cell every path starts from.
    pub const ORIGIN: Cell = Cell { row: 0, col: 0 };

    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// One step to the right. May leave the grid; check with [`Grid::contains`].
    pub const fn right(self) -> Self {
        Self::new(self.row, self.col + 1)
    }

    /// One step down. May leave the grid; check with [`Grid::contains`].
    pub const fn down(self) -> Self {
        Self::new(self.row + 1, self.col)
    }

    /// Index of the anti-diagonal (`row + col`) this cell lies on.
    pub const fn diagonal(self) -> usize {
        self.row + self.col
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// Rectangular, non-empty grid of non-negative gift values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<u32>,
}

impl Grid {
    /// Build a grid from owned rows.
    pub fn new(rows: Vec<Vec<u32>>) -> Result<Self, InvalidInputError> {
        Self::from_rows(&rows)
    }

    /// Build a grid from any slice of row-like values.
    ///
    /// Fails with [`InvalidInputError::Jagged`] at the first row whose length
    /// differs from row 0, and otherwise with [`InvalidInputError::Empty`]
    /// when there are no rows or every row has no cells.
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self, InvalidInputError> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != cols {
                return Err(InvalidInputError::Jagged {
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
            cells.extend_from_slice(values);
        }
        if cells.is_empty() {
            return Err(InvalidInputError::Empty);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// Build a `rows x cols` grid, computing each cell with `value`.
    ///
    /// Fails with [`InvalidInputError::TooLarge`] when `rows * cols` cells
    /// cannot be allocated.
    pub fn from_fn<F>(rows: usize, cols: usize, mut value: F) -> Result<Self, InvalidInputError>
    where
        F: FnMut(Cell) -> u32,
    {
        if rows == 0 || cols == 0 {
            return Err(InvalidInputError::Empty);
        }
        let len = rows
            .checked_mul(cols)
            .filter(|&n| n <= isize::MAX as usize / std::mem::size_of::<u32>())
            .ok_or(InvalidInputError::TooLarge { rows, cols })?;
        let mut cells = Vec::with_capacity(len);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(value(Cell::new(row, col)));
            }
        }
        Ok(Self { rows, cols, cells })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The bottom-right cell every path ends at.
    pub fn destination(&self) -> Cell {
        Cell::new(self.rows - 1, self.cols - 1)
    }

    /// Whether `cell` lies on the board. Correct for single-row and
    /// single-column grids.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    pub fn get(&self, cell: Cell) -> Option<u32> {
        self.contains(cell)
            .then(|| self.cells[cell.row * self.cols + cell.col])
    }

    /// Cells of row `row`.
    ///
    /// # Panics
    /// Panics if `row >= self.rows()`.
    pub fn row(&self, row: usize) -> &[u32] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        self.cells.chunks_exact(self.cols)
    }

    /// Sum of every cell; an upper bound for any path value.
    pub fn total(&self) -> u64 {
        self.cells.iter().map(|&v| u64::from(v)).sum()
    }

    /// Number of cells on every monotone path from origin to destination.
    pub fn path_len(&self) -> usize {
        self.rows + self.cols - 1
    }
}

impl Index<Cell> for Grid {
    type Output = u32;

    fn index(&self, cell: Cell) -> &u32 {
        assert!(
            self.contains(cell),
            "cell ({}, {}) outside {}x{} grid",
            cell.row,
            cell.col,
            self.rows,
            self.cols
        );
        &self.cells[cell.row * self.cols + cell.col]
    }
}

impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();
        for (idx, line) in s.lines().enumerate() {
            if let Some(row) = parse_line(idx + 1, line)? {
                rows.push(row);
            }
        }
        Ok(Grid::new(rows)?)
    }
}

/// Read a grid in the text format from any buffered reader.
pub fn read_grid<R: BufRead>(reader: R) -> Result<Grid, ParseGridError> {
    let mut rows = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(row) = parse_line(idx + 1, &line)? {
            rows.push(row);
        }
    }
    Ok(Grid::new(rows)?)
}

fn parse_line(line_no: usize, line: &str) -> Result<Option<Vec<u32>>, ParseGridError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    line.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<u32>()
                .map_err(|_| ParseGridError::InvalidValue {
                    line: line_no,
                    token: token.to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_shapes() {
        let none: Vec<Vec<u32>> = Vec::new();
        assert_eq!(Grid::new(none), Err(InvalidInputError::Empty));
        assert_eq!(Grid::new(vec![vec![]]), Err(InvalidInputError::Empty));
        assert_eq!(
            Grid::new(vec![vec![], vec![]]),
            Err(InvalidInputError::Empty)
        );
        assert_eq!(Grid::from_fn(0, 3, |_| 1), Err(InvalidInputError::Empty));
    }

    #[test]
    fn empty_first_row_does_not_hide_jagged_rows() {
        assert_eq!(
            Grid::new(vec![vec![], vec![1]]),
            Err(InvalidInputError::Jagged {
                row: 1,
                expected: 0,
                found: 1
            })
        );
    }

    #[test]
    fn from_fn_rejects_unallocatable_shapes() {
        assert_eq!(
            Grid::from_fn(usize::MAX, 2, |_| 0),
            Err(InvalidInputError::TooLarge {
                rows: usize::MAX,
                cols: 2
            })
        );
        assert_eq!(
            Grid::from_fn(usize::MAX / 4, 1, |_| 0),
            Err(InvalidInputError::TooLarge {
                rows: usize::MAX / 4,
                cols: 1
            })
        );
        let grid = Grid::from_fn(2, 3, |cell| (cell.row * 3 + cell.col) as u32).unwrap();
        assert_eq!(grid.row(1), &[3, 4, 5]);
    }

    #[test]
    fn reports_first_jagged_row() {
        let err = Grid::new(vec![vec![1, 2], vec![3, 4], vec![5], vec![6, 7, 8]]).unwrap_err();
        assert_eq!(
            err,
            InvalidInputError::Jagged {
                row: 2,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn contains_handles_single_row_and_column() {
        let row = Grid::new(vec![vec![2, 3, 4]]).unwrap();
        assert!(row.contains(Cell::new(0, 2)));
        assert!(!row.contains(Cell::new(1, 0)));
        assert!(!row.contains(Cell::new(0, 3)));

        let col = Grid::new(vec![vec![1], vec![2]]).unwrap();
        assert!(col.contains(Cell::new(1, 0)));
        assert!(!col.contains(Cell::new(0, 1)));
    }

    #[test]
    fn indexing_is_row_major() {
        let grid = Grid::new(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(grid[Cell::new(1, 0)], 4);
        assert_eq!(grid.get(Cell::new(0, 2)), Some(3));
        assert_eq!(grid.get(Cell::new(2, 0)), None);
        assert_eq!(grid.row(1), &[4, 5, 6]);
        assert_eq!(grid.iter_rows().count(), 2);
        assert_eq!(grid.total(), 21);
        assert_eq!(grid.path_len(), 4);
        assert_eq!(grid.destination(), Cell::new(1, 2));
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds_panics() {
        let grid = Grid::new(vec![vec![1]]).unwrap();
        let _ = grid[Cell::new(0, 1)];
    }

    #[test]
    fn parses_separators_and_comments() {
        let text = "# gifts\n\n 1, 10 3 8\n12 2,9 6\n";
        let grid: Grid = text.parse().unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.row(0), &[1, 10, 3, 8]);
        assert_eq!(grid.row(1), &[12, 2, 9, 6]);
    }

    #[test]
    fn parse_errors_carry_line_numbers() {
        let err = "1 2\n\n3 -4\n".parse::<Grid>().unwrap_err();
        match err {
            ParseGridError::InvalidValue { line, token } => {
                assert_eq!(line, 3);
                assert_eq!(token, "-4");
            }
            other => panic!("unexpected error: {other}"),
        }

        let err = "1 2\n3\n".parse::<Grid>().unwrap_err();
        assert!(matches!(
            err,
            ParseGridError::Invalid(InvalidInputError::Jagged { row: 1, .. })
        ));

        let err = "# nothing here\n".parse::<Grid>().unwrap_err();
        assert!(matches!(
            err,
            ParseGridError::Invalid(InvalidInputError::Empty)
        ));
    }

    #[test]
    fn reads_from_buffered_reader() {
        let input = std::io::Cursor::new("5\n");
        let grid = read_grid(input).unwrap();
        assert_eq!(grid[Cell::ORIGIN], 5);
    }

    #[test]
    fn cell_steps() {
        let c = Cell::from((1, 2));
        assert_eq!(c.right(), Cell::new(1, 3));
        assert_eq!(c.down(), Cell::new(2, 2));
        assert_eq!(c.diagonal(), 3);
    }
}
