use crate::error::{MatrixError, MatrixResult};
use crate::matrix::element::Element;
use crate::matrix::matrix::Matrix;
use crate::rings::fraction::Fraction;
use std::ops;

impl<T: Element> Matrix<T> {
    /// Elementwise `self += other`.
    pub fn add(&mut self, other: &Matrix<T>) -> MatrixResult<&mut Self> {
        if self.rows != other.rows || self.columns != other.columns {
            return Err(MatrixError::SizeMismatch {
                left: (self.rows, self.columns),
                right: (other.rows, other.columns),
            });
        }

        for (cell, rhs) in self.cells.iter_mut().zip(other.cells.iter()) {
            let lhs = std::mem::replace(cell, T::zero());
            *cell = lhs + rhs.clone();
        }

        Ok(self)
    }

    /// Multiplies every cell by `factor`, in place.
    pub fn multiply_scalar(&mut self, factor: &T) -> &mut Self {
        for cell in self.iter_mut() {
            let value = std::mem::replace(cell, T::zero());
            *cell = value * factor.clone();
        }
        self
    }

    pub fn scaled(&self, factor: &T) -> Matrix<T> {
        let mut ret = self.clone();
        ret.multiply_scalar(factor);
        ret
    }

    /// Replaces `self` by the product `self * other`, which may change its shape.
    pub fn multiply(&mut self, other: &Matrix<T>) -> MatrixResult<&mut Self> {
        if self.columns != other.rows {
            return Err(MatrixError::ColumnsRowsMismatch {
                columns: self.columns,
                rows: other.rows,
            });
        }

        let this = &*self;
        let product = Matrix {
            rows: this.rows,
            columns: other.columns,
            cells: (0..this.rows)
                .flat_map(|r| {
                    (0..other.columns).map(move |c| {
                        (0..this.columns)
                            .fold(T::zero(), |acc, k| acc + this.at(r, k) * other.at(k, c))
                    })
                })
                .collect(),
        };

        if product.columns != self.columns {
            log::debug!(
                "product reshapes {}x{} matrix into {}x{}",
                self.rows,
                self.columns,
                product.rows,
                product.columns
            );
        }

        *self = product;
        Ok(self)
    }

    /// In-place transposition: new cell `(i, j)` holds old cell `(j, i)`.
    pub fn transpose(&mut self) -> &mut Self {
        let (rows, columns) = (self.rows, self.columns);
        let mut cells: Vec<T> = (0..self.count()).map(|_| T::zero()).collect();

        for (position, element) in std::mem::take(&mut self.cells).into_iter().enumerate() {
            // new cell (position % columns, position / columns) in a columns x rows grid
            cells[(position % columns) * rows + position / columns] = element;
        }

        *self = Matrix {
            rows: columns,
            columns: rows,
            cells,
        };
        self
    }

    /// Transposed copy, `self` is left untouched.
    pub fn transposition(&self) -> Matrix<T> {
        let mut ret = self.clone();
        ret.transpose();
        ret
    }

    /// Copy without `skip_row` and `skip_column`, in the original order.
    pub fn submatrix(&self, skip_row: usize, skip_column: usize) -> MatrixResult<Matrix<T>> {
        if self.rows <= 1 || self.columns <= 1 {
            return Err(MatrixError::TooSmall {
                rows: self.rows,
                columns: self.columns,
            });
        }
        self.check_cell(skip_row, skip_column)?;

        Ok(Matrix {
            rows: self.rows - 1,
            columns: self.columns - 1,
            cells: self
                .positions()
                .zip(self.iter())
                .filter(|((r, c), _)| *r != skip_row && *c != skip_column)
                .map(|(_, value)| value.clone())
                .collect(),
        })
    }
}

impl<T: Element> ops::Add<&Matrix<T>> for &Matrix<T> {
    type Output = MatrixResult<Matrix<T>>;

    fn add(self, rhs: &Matrix<T>) -> MatrixResult<Matrix<T>> {
        let mut ret = self.clone();
        Matrix::add(&mut ret, rhs)?;
        Ok(ret)
    }
}

impl<T: Element> ops::Mul<&Matrix<T>> for &Matrix<T> {
    type Output = MatrixResult<Matrix<T>>;

    fn mul(self, rhs: &Matrix<T>) -> MatrixResult<Matrix<T>> {
        let mut ret = self.clone();
        ret.multiply(rhs)?;
        Ok(ret)
    }
}

// `k * &m` can not be written generically over `T`, so spell out the element types
macro_rules! impl_scalar_mul {
    ($($type:ty),*) => {$(
        impl ops::Mul<$type> for &Matrix<$type> {
            type Output = Matrix<$type>;

            fn mul(self, rhs: $type) -> Matrix<$type> {
                self.scaled(&rhs)
            }
        }

        impl ops::Mul<&Matrix<$type>> for $type {
            type Output = Matrix<$type>;

            fn mul(self, rhs: &Matrix<$type>) -> Matrix<$type> {
                rhs.scaled(&self)
            }
        }
    )*};
}

impl_scalar_mul!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, Fraction
);

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    #[test]
    fn test_add() {
        for (shift, data) in [
            (15, vec![vec![1, 2, 4], vec![2, 4, 8], vec![50, 25, 5], vec![33, 30, 33]]),
            (-7, vec![vec![1, 2], vec![3, 4]]),
        ] {
            let a = Matrix::from_rows(data).unwrap();
            let b = Matrix::from_rows(
                a.to_rows()
                    .into_iter()
                    .map(|row| row.into_iter().map(|x| x + shift).collect())
                    .collect(),
            )
            .unwrap();

            let sum = (&a + &b).unwrap();
            for (row, column) in a.positions() {
                assert_eq!(sum.at(row, column), a.at(row, column) + b.at(row, column));
            }
        }
    }

    #[test]
    fn test_add_in_place_chains() {
        let mut a = Matrix::from_array(&[[1, 2], [3, 4]]).unwrap();
        let b = Matrix::from_array(&[[10, 20], [30, 40]]).unwrap();
        a.add(&b).unwrap().add(&b).unwrap();
        assert_eq!(a.to_rows(), vec![vec![21, 42], vec![63, 84]]);
    }

    #[test]
    fn test_add_size_mismatch() {
        for ((rows_a, columns_a), (rows_b, columns_b)) in [((2, 3), (2, 2)), ((5, 5), (4, 4))] {
            let a = Matrix::<i32>::new(rows_a, columns_a).unwrap();
            let b = Matrix::<i32>::new(rows_b, columns_b).unwrap();
            assert_eq!(
                &a + &b,
                Err(MatrixError::SizeMismatch {
                    left: (rows_a, columns_a),
                    right: (rows_b, columns_b)
                })
            );
        }
    }

    #[test]
    fn test_scalar_multiply() {
        let m = Matrix::<i32>::from_array(&[[1, -2], [3, 0]]).unwrap();
        assert_eq!((&m * 3).to_rows(), vec![vec![3, -6], vec![9, 0]]);
        assert_eq!(3 * &m, &m * 3);
        // operators copy first
        assert_eq!(m.to_rows(), vec![vec![1, -2], vec![3, 0]]);

        let mut m = Matrix::<f64>::from_array(&[[0.5, 1.5]]).unwrap();
        m.multiply_scalar(&2.0).multiply_scalar(&-1.0);
        assert_eq!(m.to_rows(), vec![vec![-1.0, -3.0]]);
    }

    #[test]
    fn test_multiply() {
        let a = Matrix::<i32>::from_array(&[[2, 3, -1], [1, 2, -4], [-1, -12, 14], [2, 3, 2]])
            .unwrap();
        let b = Matrix::from_array(&[[-1, 6], [9, 2], [1, 3]]).unwrap();
        let expected =
            Matrix::from_array(&[[24, 15], [13, -2], [-93, 12], [27, 24]]).unwrap();

        assert_eq!((&a * &b).unwrap(), expected);
        assert_eq!((a.rows(), a.columns()), (4, 3));

        let mut c = a.clone();
        c.multiply(&b).unwrap();
        assert_eq!(c, expected);
        assert_eq!((c.rows(), c.columns()), (4, 2));
    }

    #[test]
    fn test_multiply_mismatch_leaves_receiver() {
        for ((rows_a, columns_a), (rows_b, columns_b)) in
            [((2, 3), (2, 2)), ((1, 3), (2, 2)), ((4, 4), (3, 4))]
        {
            let mut a = Matrix::<i32>::new(rows_a, columns_a).unwrap();
            let b = Matrix::<i32>::new(rows_b, columns_b).unwrap();
            assert!(matches!(
                &a * &b,
                Err(MatrixError::ColumnsRowsMismatch { .. })
            ));
            assert!(a.multiply(&b).is_err());
            assert_eq!((a.rows(), a.columns()), (rows_a, columns_a));
        }
    }

    #[test]
    fn test_transpose() {
        for data in [
            vec![vec![1, 2, 4], vec![2, 4, 8], vec![50, 25, 5], vec![33, 30, 33]],
            vec![vec![1, 2], vec![3, 4]],
            vec![vec![7, 8, 9]],
        ] {
            let original = Matrix::from_rows(data).unwrap();
            let mut m = original.clone();
            m.transpose();

            assert_eq!((m.rows(), m.columns()), (original.columns(), original.rows()));
            for (row, column) in m.positions() {
                assert_eq!(m.at(row, column), original.at(column, row));
            }

            m.transpose();
            assert_eq!(m, original);
        }
    }

    #[test]
    fn test_transposition_is_a_copy() {
        let m = Matrix::from_array(&[[1, 2, 3], [4, 5, 6]]).unwrap();
        let t = m.transposition();
        assert_eq!(t.to_rows(), vec![vec![1, 4], vec![2, 5], vec![3, 6]]);
        assert_eq!((m.rows(), m.columns()), (2, 3));
    }

    #[test]
    fn test_submatrix() {
        let m = Matrix::from_array(&[[1, 2, 4], [2, 4, 8], [50, 25, 5], [33, 30, 33]]).unwrap();
        assert_eq!(
            m.submatrix(0, 1).unwrap().to_rows(),
            vec![vec![2, 8], vec![50, 5], vec![33, 33]]
        );

        let m = Matrix::from_array(&[[1, 2], [3, 4]]).unwrap();
        assert_eq!(m.submatrix(1, 1).unwrap().to_rows(), vec![vec![1]]);

        assert!(matches!(
            m.submatrix(2, 0),
            Err(MatrixError::OutOfBounds { row: 2, .. })
        ));
    }

    #[test]
    fn test_submatrix_too_small() {
        for (rows, columns) in [(1, 1), (1, 3), (5, 1)] {
            let m = Matrix::<i32>::new(rows, columns).unwrap();
            assert_eq!(
                m.submatrix(0, 0),
                Err(MatrixError::TooSmall { rows, columns })
            );
            // indices play no role in this check
            assert_eq!(
                m.submatrix(17, 23),
                Err(MatrixError::TooSmall { rows, columns })
            );
        }
    }

    #[test]
    fn test_big_integers() {
        let bi = |s: &str| BigInt::parse_bytes(s.as_bytes(), 10).unwrap();

        let a = Matrix::<BigInt>::identity(2).unwrap();
        let b = Matrix::from_rows(vec![vec![bi("2"), bi("3")], vec![bi("4"), bi("5")]]).unwrap();
        assert_eq!(
            (&a + &b).unwrap().to_rows(),
            vec![vec![bi("3"), bi("3")], vec![bi("4"), bi("6")]]
        );

        let a = Matrix::from_rows(vec![
            vec![
                bi("100000000000000000000000000000000000000000000000000000000000006"),
                bi("-101"),
            ],
            vec![bi("1"), bi("-1")],
        ])
        .unwrap();
        assert_eq!(
            (&a * &b).unwrap().to_rows(),
            vec![
                vec![
                    bi("199999999999999999999999999999999999999999999999999999999999608"),
                    bi("299999999999999999999999999999999999999999999999999999999999513")
                ],
                vec![bi("-2"), bi("-2")]
            ]
        );
    }
}
