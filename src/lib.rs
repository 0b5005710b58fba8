pub mod error;

pub mod matrix {
    mod arithmetic;
    pub mod element;
    pub mod iter;
    pub mod matrix;
    mod random;
    mod square;
}
pub mod rings {
    pub mod fraction;
}

pub use error::{MatrixError, MatrixResult};
pub use matrix::element::Element;
pub use matrix::matrix::Matrix;
pub use rings::fraction::Fraction;
