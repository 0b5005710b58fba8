use crate::matrix::matrix::Matrix;

/// Yields the `(row, column)` of every cell in row-major order.
pub struct Positions {
    position: usize,
    count: usize,
    columns: usize,
}

impl Iterator for Positions {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<(usize, usize)> {
        if self.position >= self.count {
            return None;
        }
        let ret = (self.position / self.columns, self.position % self.columns);
        self.position += 1;
        Some(ret)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.position;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Positions {}

impl<T> Matrix<T> {
    /// Row-major iteration: row 0 left to right, then row 1, ...
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.cells.iter()
    }

    /// Same order as [`Matrix::iter`], every cell visited exactly once.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.cells.iter_mut()
    }

    pub fn positions(&self) -> Positions {
        Positions {
            position: 0,
            count: self.count(),
            columns: self.columns,
        }
    }
}

impl<'a, T> IntoIterator for &'a Matrix<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Matrix<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
