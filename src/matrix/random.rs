use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::MatrixResult;
use crate::matrix::element::Element;
use crate::matrix::matrix::Matrix;
use std::sync::{Mutex, OnceLock};

// Shared by every matrix of the process. Concurrent fills serialize on the
// mutex and the order in which they get their values is unspecified.
static RANDOM: OnceLock<Mutex<StdRng>> = OnceLock::new();

fn shared_random() -> &'static Mutex<StdRng> {
    RANDOM.get_or_init(|| {
        log::debug!("seeding shared random source from OS entropy");
        Mutex::new(StdRng::from_entropy())
    })
}

impl<T: Element> Matrix<T> {
    /// Overwrites every cell with a value drawn uniformly from `[low, high)`.
    ///
    /// The draw is an `f64` converted to `T`, so integer matrices get values
    /// truncated toward zero. Non-deterministic, see
    /// [`Matrix::fill_with_random_numbers_using`] for a seeded variant.
    pub fn fill_with_random_numbers(&mut self, low: f64, high: f64) -> MatrixResult<&mut Self> {
        let mut rng = shared_random()
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        self.fill_with_random_numbers_using(&mut *rng, low, high)
    }

    pub fn fill_with_random_numbers_using<R: Rng>(
        &mut self,
        rng: &mut R,
        low: f64,
        high: f64,
    ) -> MatrixResult<&mut Self> {
        let cells = (0..self.count())
            .map(|_| T::from_f64_checked(low + rng.gen::<f64>() * (high - low)))
            .collect::<MatrixResult<Vec<T>>>()?;

        self.cells = cells;
        Ok(self)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
