use itertools::Itertools;

use crate::error::{MatrixError, MatrixResult};
use crate::matrix::element::Element;
use std::fmt;
use std::ops::{Index, IndexMut};

/// Dense matrix stored row by row.
///
/// A matrix always has at least one row and one column, and `cells` always
/// holds exactly `rows * columns` elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    pub(crate) rows: usize,
    pub(crate) columns: usize,
    pub(crate) cells: Vec<T>,
}

impl<T: Element> Matrix<T> {
    /// Zero-filled matrix of the given shape.
    pub fn new(rows: usize, columns: usize) -> MatrixResult<Matrix<T>> {
        check_dimensions(rows, columns)?;

        Ok(Matrix {
            rows,
            columns,
            cells: (0..(rows * columns)).map(|_| T::zero()).collect(),
        })
    }

    /// Zero-filled square matrix.
    pub fn with_order(order: usize) -> MatrixResult<Matrix<T>> {
        Matrix::new(order, order)
    }

    pub fn identity(order: usize) -> MatrixResult<Matrix<T>>
    where
        T: num_traits::One,
    {
        check_dimensions(order, order)?;

        Ok(Matrix {
            rows: order,
            columns: order,
            cells: (0..order)
                .flat_map(|i| (0..order).map(move |j| if i == j { T::one() } else { T::zero() }))
                .collect(),
        })
    }

    /// Deep copy of a rectangular array, one inner array per row.
    pub fn from_array<const ROWS: usize, const COLUMNS: usize>(
        array: &[[T; COLUMNS]; ROWS],
    ) -> MatrixResult<Matrix<T>> {
        check_dimensions(ROWS, COLUMNS)?;

        Ok(Matrix {
            rows: ROWS,
            columns: COLUMNS,
            cells: array.iter().flatten().cloned().collect(),
        })
    }

    /// Builds a matrix from row vectors, rejecting rows of uneven length.
    pub fn from_rows(lines: Vec<Vec<T>>) -> MatrixResult<Matrix<T>> {
        let rows = lines.len();
        let columns = lines.first().map(|l| l.len()).unwrap_or(0);
        check_dimensions(rows, columns)?;

        if let Some((row, line)) = lines.iter().find_position(|l| l.len() != columns) {
            return Err(MatrixError::RaggedRows {
                row,
                expected: columns,
                found: line.len(),
            });
        }

        Ok(Matrix {
            rows,
            columns,
            cells: lines.into_iter().flatten().collect(),
        })
    }

    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.cells
            .chunks(self.columns)
            .map(|line| line.into())
            .collect()
    }

    #[inline(always)]
    pub fn at(&self, row: usize, column: usize) -> T {
        self[(row, column)].clone()
    }

    pub fn set(&mut self, row: usize, column: usize, value: T) {
        self[(row, column)] = value;
    }

    pub fn is_zero(&self) -> bool {
        self.cells.iter().all(|x| x.is_zero())
    }
}

impl<T> Matrix<T> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of elements.
    pub fn count(&self) -> usize {
        self.rows * self.columns
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.columns
    }

    pub fn is_vector(&self) -> bool {
        self.is_row_vector() || self.is_column_vector()
    }

    pub fn is_row_vector(&self) -> bool {
        self.rows == 1
    }

    pub fn is_column_vector(&self) -> bool {
        self.columns == 1
    }

    /// Row-major view of the storage.
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    pub fn into_cells(self) -> Vec<T> {
        self.cells
    }

    pub fn get(&self, row: usize, column: usize) -> Option<&T> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        self.cells.get(row * self.columns + column)
    }

    pub fn get_mut(&mut self, row: usize, column: usize) -> Option<&mut T> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        self.cells.get_mut(row * self.columns + column)
    }

    pub(crate) fn check_cell(&self, row: usize, column: usize) -> MatrixResult<()> {
        if row >= self.rows || column >= self.columns {
            return Err(MatrixError::OutOfBounds {
                row,
                column,
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(())
    }
}

fn check_dimensions(rows: usize, columns: usize) -> MatrixResult<()> {
    if rows < 1 || columns < 1 {
        return Err(MatrixError::InvalidDimensions { rows, columns });
    }
    Ok(())
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, column): (usize, usize)) -> &T {
        assert!(
            row < self.rows && column < self.columns,
            "Cell ({}, {}) is outside of a {}x{} matrix",
            row,
            column,
            self.rows,
            self.columns
        );
        &self.cells[row * self.columns + column]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut T {
        assert!(
            row < self.rows && column < self.columns,
            "Cell ({}, {}) is outside of a {}x{} matrix",
            row,
            column,
            self.rows,
            self.columns
        );
        &mut self.cells[row * self.columns + column]
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ret = self
            .cells
            .chunks(self.columns)
            .map(|line| line.iter().join(", "))
            .join("\n");
        write!(f, "{}", ret)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
