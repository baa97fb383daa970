use crate::activation::ActivationFunction;
use crate::error::EngineError;
use crate::loss::MseLoss;
use crate::math::vector::{self, Vector};
use crate::math::Matrix;
use crate::network::forward::ForwardPassResult;
use crate::network::weights::NetworkWeights;

/// Per-layer parameter gradients, shaped exactly like `NetworkWeights`.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradients {
    pub weight_gradients: Vec<Matrix>,
    pub bias_gradients: Vec<Vector>,
}

/// Computes loss gradients for one example given its forward-pass trace.
///
/// Every stored gradient is sanitized, so a non-finite intermediate shows
/// up as a zero contribution rather than poisoning the whole update.
pub fn backpropagate(
    input: &[f64],
    target: &[f64],
    forward: &ForwardPassResult,
    weights: &NetworkWeights,
    hidden_activation: ActivationFunction,
) -> Result<Gradients, EngineError> {
    let layer_count = weights.layer_count();
    let last = &forward.activations[layer_count - 1];

    // δ_out = ∂L/∂a ⊙ σ'(z_out); the output layer is always Sigmoid.
    let loss_grad = MseLoss::derivative(&last.activated, target)?;
    let sigmoid_deriv: Vector = last
        .raw
        .iter()
        .map(|&z| ActivationFunction::Sigmoid.derivative(z))
        .collect();
    let mut delta = vector::hadamard(&loss_grad, &sigmoid_deriv)?;

    // Collected output-to-input, reversed at the end.
    let mut weight_gradients = Vec::with_capacity(layer_count);
    let mut bias_gradients = Vec::with_capacity(layer_count);

    for i in (0..layer_count).rev() {
        let prev_activation: &[f64] = if i == 0 {
            input
        } else {
            &forward.activations[i - 1].activated
        };
        weight_gradients.push(Matrix::outer(&delta, prev_activation).sanitize());
        bias_gradients.push(vector::sanitize_vector(&delta));

        if i > 0 {
            // δ_{i-1} = Wᵢᵀ·δᵢ ⊙ f'(z_{i-1})
            let propagated = weights.weights[i].transpose().matvec(&delta)?;
            let deriv: Vector = forward.activations[i - 1]
                .raw
                .iter()
                .map(|&z| hidden_activation.derivative(z))
                .collect();
            delta = vector::sanitize_vector(&vector::hadamard(&propagated, &deriv)?);
        }
    }

    weight_gradients.reverse();
    bias_gradients.reverse();
    Ok(Gradients {
        weight_gradients,
        bias_gradients,
    })
}
