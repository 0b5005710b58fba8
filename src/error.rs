use thiserror::Error;

pub type MatrixResult<T> = Result<T, MatrixError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    #[error("A matrix must have at least one element, got {rows}x{columns}")]
    InvalidDimensions { rows: usize, columns: usize },

    #[error("Addition needs matrices of the same size, got {left:?} and {right:?}")]
    SizeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("Multiplication needs as many columns on the left ({columns}) as rows on the right ({rows})")]
    ColumnsRowsMismatch { columns: usize, rows: usize },

    #[error("Operation only defined for square matrices, got {rows}x{columns}")]
    NotSquare { rows: usize, columns: usize },

    #[error("No submatrix of a {rows}x{columns} matrix")]
    TooSmall { rows: usize, columns: usize },

    #[error("Elements of a first order matrix have no minor")]
    FirstOrderMatrix,

    #[error("Row {row} has {found} elements, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Cell ({row}, {column}) is outside of a {rows}x{columns} matrix")]
    OutOfBounds {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },

    #[error("Value {value} can not be converted between the element type and f64")]
    Conversion { value: String },
}
