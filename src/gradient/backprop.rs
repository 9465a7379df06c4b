//! Backpropagation: the chain rule walked from the output layer back to the
//! inputs, one training example at a time.

use crate::error::{Error, Result};
use crate::gradient::record::{Gradient, NeuronGradient};
use crate::network::Network;
use crate::train::TrainingExample;

/// Computes every ∂Error/∂Bias and ∂Error/∂Weight for one training example.
///
/// The error signal enters as the loss function's output deltas and is carried
/// backward layer by layer: each neuron's delta is its output delta times its
/// activation derivative at the recorded total, and the previous layer's
/// output deltas are the weight-weighted sums `Σ_j δ_j · w_j[k]`. At layer 0
/// the accumulated input deltas are discarded.
pub fn compute(network: &Network, example: &TrainingExample) -> Result<Gradient> {
    if example.outputs.len() != network.output_count() {
        return Err(Error::DimensionMismatch {
            expected: network.output_count(),
            provided: example.outputs.len(),
        });
    }

    let trace = network.training_run(&example.inputs)?;
    let layers = network.layers();

    let actual = &trace.activations[layers.len() - 1];
    let mut output_deltas = network
        .loss_function()
        .output_deltas(actual, &example.outputs);

    // Built back-to-front, reversed once at the end.
    let mut reversed: Vec<Vec<NeuronGradient>> = Vec::with_capacity(layers.len());

    for i in (0..layers.len()).rev() {
        let prev_activations: &[f64] = if i == 0 {
            &example.inputs
        } else {
            &trace.activations[i - 1]
        };

        let mut prev_deltas = vec![0.0; prev_activations.len()];
        let mut layer_gradient = Vec::with_capacity(layers[i].width());

        for (j, neuron) in layers[i].neurons.iter().enumerate() {
            // ∂Total/∂Bias = 1, so the bias partial is the delta itself.
            let delta_total = output_deltas[j] * neuron.activation.derivative(trace.totals[i][j]);

            let weights = prev_activations
                .iter()
                .map(|activation| delta_total * activation)
                .collect();
            for (k, weight) in neuron.weights.iter().enumerate() {
                prev_deltas[k] += delta_total * weight;
            }

            layer_gradient.push(NeuronGradient {
                bias: delta_total,
                weights,
            });
        }

        reversed.push(layer_gradient);
        output_deltas = prev_deltas;
    }

    reversed.reverse();
    Ok(Gradient { layers: reversed })
}

/// Mean gradient over a batch of examples.
///
/// The running sum seeds from an all-zero record, so a batch of identical
/// examples averages to exactly one example's gradient.
///
/// # Panics
/// Panics if the batch is empty.
pub fn mean<'a, I>(network: &Network, examples: I) -> Result<Gradient>
where
    I: IntoIterator<Item = &'a TrainingExample>,
{
    let mut sum = Gradient::zeros_like(network);
    let mut count = 0usize;

    for example in examples {
        sum.accumulate(&compute(network, example)?);
        count += 1;
    }

    assert!(count > 0, "gradient mean over an empty batch");
    sum.scale(1.0 / count as f64);
    Ok(sum)
}
