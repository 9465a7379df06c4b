use rand::Rng;

use crate::activation::Activation;

/// A single neuron: a bias, one weight per input from the previous layer, and
/// the activation applied to its weighted total.
#[derive(Debug, Clone, PartialEq)]
pub struct Neuron {
    pub activation: Activation,
    pub bias: f64,
    pub weights: Vec<f64>,
}

impl Neuron {
    pub fn new(activation: Activation, bias: f64, weights: Vec<f64>) -> Neuron {
        Neuron {
            activation,
            bias,
            weights,
        }
    }

    /// The weighted total: `bias + Σ inputs[i] · weights[i]`.
    ///
    /// Input length equal to the weight count is a build-time invariant of the
    /// owning network, not re-checked here.
    pub fn total(&self, inputs: &[f64]) -> f64 {
        let mut total = self.bias;
        for (input, weight) in inputs.iter().zip(self.weights.iter()) {
            total += input * weight;
        }
        total
    }

    /// Replaces the weights with `input_count` random draws of
    /// `2·U(0,1) - 1 + mean`.
    ///
    /// `mean` is a small negative shift of `-min(1, 8/layer_width)` chosen by
    /// the builder to keep early activations near the linear region.
    pub fn set_initial_weights<R: Rng>(&mut self, rng: &mut R, input_count: usize, mean: f64) {
        self.weights = (0..input_count)
            .map(|_| 2.0 * rng.gen::<f64>() - 1.0 + mean)
            .collect();
    }
}
