use crate::error::EngineError;
use crate::math::vector::{self, Vector};
use crate::math::Matrix;
use crate::network::forward::forward_pass;
use crate::network::weights::NetworkWeights;
use crate::train::backprop::{backpropagate, Gradients};
use crate::train::config::TrainingConfig;
use crate::train::dataset::TrainingExample;

/// One SGD step: `w' = w - lr·g`, sanitized, as a fresh `NetworkWeights`.
pub fn update_weights(
    weights: &NetworkWeights,
    gradients: &Gradients,
    learning_rate: f64,
) -> Result<NetworkWeights, EngineError> {
    let mut new_weights = Vec::with_capacity(weights.weights.len());
    let mut new_biases = Vec::with_capacity(weights.biases.len());
    for (w, gw) in weights.weights.iter().zip(gradients.weight_gradients.iter()) {
        new_weights.push(w.sub(&gw.scale(learning_rate))?.sanitize());
    }
    for (b, gb) in weights.biases.iter().zip(gradients.bias_gradients.iter()) {
        let stepped = vector::sub(b, &vector::scale(gb, learning_rate))?;
        new_biases.push(vector::sanitize_vector(&stepped));
    }
    Ok(NetworkWeights {
        weights: new_weights,
        biases: new_biases,
    })
}

/// Accumulates per-example gradients over `batch`, averages them, and
/// applies a single update. Returns the updated parameters; the input
/// parameters are left untouched.
pub fn train_batch(
    batch: &[TrainingExample],
    weights: &NetworkWeights,
    config: &TrainingConfig,
) -> Result<NetworkWeights, EngineError> {
    if batch.is_empty() {
        return Err(EngineError::EmptyBatch);
    }

    let mut weight_acc: Vec<Matrix> = weights
        .weights
        .iter()
        .map(|w| Matrix::zeros(w.rows, w.cols))
        .collect();
    let mut bias_acc: Vec<Vector> = weights.biases.iter().map(|b| vec![0.0; b.len()]).collect();

    for example in batch {
        let forward = forward_pass(&example.input, weights, config.activation)?;
        let grads = backpropagate(
            &example.input,
            &example.target,
            &forward,
            weights,
            config.activation,
        )?;
        for (acc, g) in weight_acc.iter_mut().zip(grads.weight_gradients.iter()) {
            *acc = acc.add(g)?;
        }
        for (acc, g) in bias_acc.iter_mut().zip(grads.bias_gradients.iter()) {
            *acc = vector::add(acc, g)?;
        }
    }

    let inv_batch = 1.0 / batch.len() as f64;
    let averaged = Gradients {
        weight_gradients: weight_acc.iter().map(|m| m.scale(inv_batch)).collect(),
        bias_gradients: bias_acc.iter().map(|b| vector::scale(b, inv_batch)).collect(),
    };

    update_weights(weights, &averaged, config.learning_rate)
}
