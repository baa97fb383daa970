use crate::error::EngineError;
use crate::loss::MseLoss;
use crate::network::forward::predict;
use crate::network::weights::NetworkWeights;
use crate::train::config::TrainingConfig;
use crate::train::dataset::TrainingExample;

/// An example counts as correct only when every output dimension lands
/// strictly within this distance of its target.
pub const ACCURACY_TOLERANCE: f64 = 0.2;

/// Aggregate metrics over a full dataset pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvalMetrics {
    /// Mean MSE over all examples.
    pub loss: f64,
    /// Fraction of examples with all outputs within `ACCURACY_TOLERANCE`.
    pub accuracy: f64,
}

/// Runs every example through the network and aggregates loss and accuracy.
pub fn evaluate(
    examples: &[TrainingExample],
    weights: &NetworkWeights,
    config: &TrainingConfig,
) -> Result<EvalMetrics, EngineError> {
    if examples.is_empty() {
        return Err(EngineError::EmptyDataset);
    }

    let mut total_loss = 0.0;
    let mut correct = 0usize;
    for example in examples {
        let predictions = predict(&example.input, weights, config.activation)?;
        total_loss += MseLoss::loss(&predictions, &example.target)?;
        let all_close = predictions
            .iter()
            .zip(example.target.iter())
            .all(|(p, t)| (p - t).abs() < ACCURACY_TOLERANCE);
        if all_close {
            correct += 1;
        }
    }

    Ok(EvalMetrics {
        loss: total_loss / examples.len() as f64,
        accuracy: correct as f64 / examples.len() as f64,
    })
}
