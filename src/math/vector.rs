use crate::error::EngineError;
use crate::math::numeric;

pub type Vector = Vec<f64>;

fn check_len(operation: &'static str, a: &[f64], b: &[f64]) -> Result<(), EngineError> {
    if a.len() != b.len() {
        return Err(EngineError::DimensionMismatch {
            operation,
            left: vec![a.len()],
            right: vec![b.len()],
        });
    }
    Ok(())
}

/// Element-wise sum.
pub fn add(a: &[f64], b: &[f64]) -> Result<Vector, EngineError> {
    check_len("vector add", a, b)?;
    Ok(a.iter().zip(b.iter()).map(|(x, y)| x + y).collect())
}

/// Element-wise difference.
pub fn sub(a: &[f64], b: &[f64]) -> Result<Vector, EngineError> {
    check_len("vector sub", a, b)?;
    Ok(a.iter().zip(b.iter()).map(|(x, y)| x - y).collect())
}

/// Element-wise (Hadamard) product.
pub fn hadamard(a: &[f64], b: &[f64]) -> Result<Vector, EngineError> {
    check_len("vector hadamard", a, b)?;
    Ok(a.iter().zip(b.iter()).map(|(x, y)| x * y).collect())
}

/// Dot product.
pub fn dot(a: &[f64], b: &[f64]) -> Result<f64, EngineError> {
    check_len("vector dot", a, b)?;
    Ok(a.iter().zip(b.iter()).map(|(x, y)| x * y).sum())
}

/// Scalar multiple.
pub fn scale(v: &[f64], k: f64) -> Vector {
    v.iter().map(|x| x * k).collect()
}

/// `numeric::clamp` applied element-wise.
pub fn clamp_vector(v: &[f64]) -> Vector {
    v.iter().copied().map(numeric::clamp).collect()
}

/// `numeric::sanitize` applied element-wise.
pub fn sanitize_vector(v: &[f64]) -> Vector {
    v.iter().copied().map(numeric::sanitize).collect()
}
