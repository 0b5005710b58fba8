use linear_algebra::{Matrix, MatrixError};

// Solves A x = b with x = (1 / det A) * adj(A)^T * b.
// RUST_LOG=trace shows the determinant expansion.
fn main() -> Result<(), MatrixError> {
    env_logger::init();

    let a = Matrix::<f64>::from_array(&[[2.0, 3.0, -1.0], [1.0, 2.0, -4.0], [-1.0, -12.0, 14.0]])?;
    let b = Matrix::<f64>::from_array(&[[-1.0], [9.0], [1.0]])?;

    let determinant = a.determinant()?;
    log::info!("det(A) = {}", determinant);

    let inverse = (1.0 / determinant) * &a.adjugate()?.transposition();
    let x = (&inverse * &b)?;

    println!("{}", x);
    Ok(())
}
