use crate::activation::ActivationFunction;
use crate::error::EngineError;
use crate::math::vector::{self, Vector};
use crate::network::weights::NetworkWeights;

/// Pre-activation and post-activation values of one layer.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerActivation {
    /// `W·x + b`, clamped into the representable range.
    pub raw: Vector,
    /// Activation function applied to `raw`.
    pub activated: Vector,
}

/// Full trace of a forward pass, one entry per weight layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardPassResult {
    pub activations: Vec<LayerActivation>,
    /// Output of the last layer; identical to the last `activated` vector.
    pub predictions: Vector,
}

/// Runs `input` through the network.
///
/// Hidden layers use `hidden_activation`; the output layer always applies
/// Sigmoid so predictions stay in [0, 1]. Pre-activations are clamped
/// before the activation function sees them, so a single runaway weight
/// cannot poison the rest of the pass.
pub fn forward_pass(
    input: &[f64],
    weights: &NetworkWeights,
    hidden_activation: ActivationFunction,
) -> Result<ForwardPassResult, EngineError> {
    let layer_count = weights.layer_count();
    let mut activations = Vec::with_capacity(layer_count);
    let mut current: Vector = input.to_vec();

    for (i, (w, b)) in weights.weights.iter().zip(weights.biases.iter()).enumerate() {
        let raw = vector::clamp_vector(&vector::add(&w.matvec(&current)?, b)?);
        let activation = if i == layer_count - 1 {
            ActivationFunction::Sigmoid
        } else {
            hidden_activation
        };
        let activated: Vector = raw.iter().map(|&x| activation.function(x)).collect();
        current = activated.clone();
        activations.push(LayerActivation { raw, activated });
    }

    Ok(ForwardPassResult {
        predictions: current,
        activations,
    })
}

/// Forward pass that keeps only the final predictions.
pub fn predict(
    input: &[f64],
    weights: &NetworkWeights,
    hidden_activation: ActivationFunction,
) -> Result<Vector, EngineError> {
    Ok(forward_pass(input, weights, hidden_activation)?.predictions)
}
