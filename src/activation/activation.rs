use serde::{Deserialize, Serialize};

/// Negative-side slope of LeakyReLU.
const LEAKY_SLOPE: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivationFunction {
    ReLU,
    LeakyReLU,
    Sigmoid,
    Tanh,
    Identity,
}

impl ActivationFunction {
    /// Element-wise activation.
    ///
    /// Sigmoid and Tanh saturate to their asymptotes outside a safe input
    /// range instead of evaluating `exp` on extreme arguments.
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::ReLU => {
                if x > 0.0 {
                    x
                } else {
                    0.0
                }
            }
            ActivationFunction::LeakyReLU => {
                if x > 0.0 {
                    x
                } else {
                    LEAKY_SLOPE * x
                }
            }
            ActivationFunction::Sigmoid => {
                if x < -45.0 {
                    0.0
                } else if x > 45.0 {
                    1.0
                } else {
                    1.0 / (1.0 + (-x).exp())
                }
            }
            ActivationFunction::Tanh => {
                if x < -20.0 {
                    -1.0
                } else if x > 20.0 {
                    1.0
                } else {
                    x.tanh()
                }
            }
            ActivationFunction::Identity => x,
        }
    }

    /// Element-wise derivative of the activation.
    pub fn derivative(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::ReLU => {
                if x > 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
            ActivationFunction::LeakyReLU => {
                if x > 0.0 {
                    1.0
                } else {
                    LEAKY_SLOPE
                }
            }
            ActivationFunction::Sigmoid => {
                let fx = self.function(x);
                fx * (1.0 - fx)
            }
            ActivationFunction::Tanh => {
                let t = self.function(x);
                1.0 - t * t
            }
            ActivationFunction::Identity => 1.0,
        }
    }
}
