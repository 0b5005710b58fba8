use num_traits::{FromPrimitive, ToPrimitive, Zero};

use crate::error::{MatrixError, MatrixResult};
use std::ops::{Add, Mul, Sub};

pub trait Element:  // Avoid repeating all the traits
    Clone
    + Zero
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + ToPrimitive
    + FromPrimitive
    + std::fmt::Display
    + std::fmt::Debug
{
    /// Lossy conversion used by the determinant and its minors.
    fn to_f64_checked(&self) -> MatrixResult<f64> {
        self.to_f64().ok_or_else(|| MatrixError::Conversion {
            value: self.to_string(),
        })
    }

    /// Conversion back into the element type, truncating toward zero for integers.
    fn from_f64_checked(value: f64) -> MatrixResult<Self> {
        Self::from_f64(value).ok_or_else(|| MatrixError::Conversion {
            value: value.to_string(),
        })
    }
}

impl<T> Element for T where
    T: Clone
        + Zero
        + PartialEq
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + ToPrimitive
        + FromPrimitive
        + std::fmt::Display
        + std::fmt::Debug
{
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
