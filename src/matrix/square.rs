use crate::error::{MatrixError, MatrixResult};
use crate::matrix::element::Element;
use crate::matrix::matrix::Matrix;

impl<T: Element> Matrix<T> {
    /// Common row/column count of a square matrix.
    pub fn order(&self) -> MatrixResult<usize> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(self.rows)
    }

    /// Sum of the main diagonal, accumulated from `T::zero()` in index order.
    pub fn trace(&self) -> MatrixResult<T> {
        let order = self.order()?;
        Ok((0..order).fold(T::zero(), |acc, i| acc + self.at(i, i)))
    }

    /// Determinant of the submatrix without `row` and `column`.
    pub fn minor(&self, row: usize, column: usize) -> MatrixResult<f64> {
        if self.order()? <= 1 {
            return Err(MatrixError::FirstOrderMatrix);
        }
        self.submatrix(row, column)?.determinant()
    }

    /// Cofactor: the minor, negated when `row + column` is odd.
    pub fn algebraic_complement(&self, row: usize, column: usize) -> MatrixResult<f64> {
        self.order()?;
        let sign = if (row + column) % 2 == 0 { 1.0 } else { -1.0 };
        Ok(sign * self.minor(row, column)?)
    }

    /// Matrix of the algebraic complements of every cell.
    ///
    /// Cell `(row, column)` holds `algebraic_complement(row, column)`; this is
    /// the cofactor matrix, transpose it to get the classical adjugate.
    pub fn adjugate(&self) -> MatrixResult<Matrix<T>> {
        let order = self.order()?;

        let cells = self
            .positions()
            .map(|(row, column)| T::from_f64_checked(self.algebraic_complement(row, column)?))
            .collect::<MatrixResult<Vec<T>>>()?;

        Ok(Matrix {
            rows: order,
            columns: order,
            cells,
        })
    }

    /// Laplace expansion along the first row.
    ///
    /// Runs in factorial time, only meant for small matrices.
    pub fn determinant(&self) -> MatrixResult<f64> {
        match self.order()? {
            1 => self.cells[0].to_f64_checked(),
            2 => (self.at(0, 0) * self.at(1, 1) - self.at(0, 1) * self.at(1, 0)).to_f64_checked(),
            order => {
                log::trace!("expanding determinant of order {} along row 0", order);

                let mut determinant = 0.0;
                for column in 0..self.columns {
                    determinant +=
                        self.cells[column].to_f64_checked()? * self.algebraic_complement(0, column)?;
                }
                Ok(determinant)
            }
        }
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
