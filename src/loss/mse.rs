use crate::error::EngineError;
use crate::math::Vector;

pub struct MseLoss;

fn check_len(operation: &'static str, predicted: &[f64], expected: &[f64]) -> Result<(), EngineError> {
    if predicted.len() != expected.len() {
        return Err(EngineError::DimensionMismatch {
            operation,
            left: vec![predicted.len()],
            right: vec![expected.len()],
        });
    }
    Ok(())
}

impl MseLoss {
    /// Scalar MSE: mean((predicted - expected)²)
    pub fn loss(predicted: &[f64], expected: &[f64]) -> Result<f64, EngineError> {
        check_len("mse loss", predicted, expected)?;
        let n = predicted.len() as f64;
        Ok(predicted
            .iter()
            .zip(expected.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            / n)
    }

    /// Per-output gradient: (2/N)·(predicted - expected).
    ///
    /// The 2/N factor matches the output-layer delta convention in backprop.
    pub fn derivative(predicted: &[f64], expected: &[f64]) -> Result<Vector, EngineError> {
        check_len("mse derivative", predicted, expected)?;
        let scale = 2.0 / predicted.len() as f64;
        Ok(predicted
            .iter()
            .zip(expected.iter())
            .map(|(a, b)| scale * (a - b))
            .collect())
    }
}
