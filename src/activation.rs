use serde::{Deserialize, Serialize};

/// Per-neuron activation function tag.
///
/// `Passthrough` doubles as the "disconnected" sentinel used by
/// [`crate::ffnet::FFNet::neuron_is_connected`] and as the identity function used
/// when [`crate::ffnet::FFNet::insert_hidden_layer`] wires the new layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Activation {
    Sigmoid,
    FastSigmoid,
    Relu,
    Passthrough,
}

/// Input is clamped before exponentiation so a saturated pre-activation never
/// overflows `f32::exp`.
const SIGMOID_CLAMP: f32 = 45.0;

impl Activation {
    pub fn apply(self, x: f32) -> f32 {
        match self {
            Activation::Sigmoid => {
                let clamped = x.clamp(-SIGMOID_CLAMP, SIGMOID_CLAMP);
                1.0 / (1.0 + (-clamped).exp())
            }
            Activation::FastSigmoid => x / (1.0 + x.abs()),
            Activation::Relu => x.max(0.0),
            Activation::Passthrough => x,
        }
    }

    /// Derivative with respect to the pre-activation `x`, expressed in terms of
    /// the already-computed activation `y = apply(x)` where convenient.
    pub fn derivative(self, x: f32, y: f32) -> f32 {
        match self {
            Activation::Sigmoid => y * (1.0 - y),
            Activation::FastSigmoid => {
                let denom = 1.0 + x.abs();
                1.0 / (denom * denom)
            }
            Activation::Relu => {
                if x > 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
            Activation::Passthrough => 1.0,
        }
    }
}
