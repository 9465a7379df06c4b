use crate::error::{Error, Result};
use crate::gradient::Gradient;
use crate::loss::LossFunction;
use crate::network::layer::Layer;

/// A feedforward network: strictly sequential layers of independent neurons.
///
/// The topology is fixed at construction; only weights and biases change, and
/// only through [`Network::apply_gradient`], which the training loops call as
/// one atomic pass over all neurons.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    pub(crate) input_count: usize,
    pub(crate) layers: Vec<Layer>,
    pub(crate) loss_function: LossFunction,
}

/// Everything the gradient engine needs from one forward pass: per layer, the
/// ordered pre-activation totals and the ordered activations.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingTrace {
    pub totals: Vec<Vec<f64>>,
    pub activations: Vec<Vec<f64>>,
}

impl Network {
    /// Length of the input vectors this network accepts.
    pub fn input_count(&self) -> usize {
        self.input_count
    }

    /// The layers in evaluation order. The last layer's outputs are the
    /// network's outputs.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Width of the output layer.
    pub fn output_count(&self) -> usize {
        self.layers[self.layers.len() - 1].width()
    }

    pub fn loss_function(&self) -> LossFunction {
        self.loss_function
    }

    /// Propagates `inputs` through every layer and returns the output layer's
    /// activations.
    ///
    /// Fails with [`Error::DimensionMismatch`] on a wrong-length input vector
    /// and with [`Error::NumericInstability`] if any weighted total comes out
    /// non-finite (the signature of diverged weights).
    pub fn run(&self, inputs: &[f64]) -> Result<Vec<f64>> {
        self.validate_inputs(inputs)?;

        let mut current = inputs.to_vec();
        for (i, layer) in self.layers.iter().enumerate() {
            let mut outputs = Vec::with_capacity(layer.width());
            for (j, neuron) in layer.neurons.iter().enumerate() {
                let total = neuron.total(&current);
                if !total.is_finite() {
                    return Err(Error::NumericInstability { layer: i, neuron: j });
                }
                outputs.push(neuron.activation.apply(total));
            }
            current = outputs;
        }

        Ok(current)
    }

    /// The same traversal as [`Network::run`], additionally recording every
    /// neuron's total and activation for backpropagation.
    ///
    /// Pure with respect to the network; performs no mutation.
    pub fn training_run(&self, inputs: &[f64]) -> Result<TrainingTrace> {
        self.validate_inputs(inputs)?;

        let mut totals = Vec::with_capacity(self.layers.len());
        let mut activations = Vec::with_capacity(self.layers.len());

        let mut current = inputs.to_vec();
        for (i, layer) in self.layers.iter().enumerate() {
            let mut layer_totals = Vec::with_capacity(layer.width());
            let mut layer_activations = Vec::with_capacity(layer.width());
            for (j, neuron) in layer.neurons.iter().enumerate() {
                let total = neuron.total(&current);
                if !total.is_finite() {
                    return Err(Error::NumericInstability { layer: i, neuron: j });
                }
                layer_totals.push(total);
                layer_activations.push(neuron.activation.apply(total));
            }
            current = layer_activations.clone();
            totals.push(layer_totals);
            activations.push(layer_activations);
        }

        Ok(TrainingTrace {
            totals,
            activations,
        })
    }

    /// Applies a (batch-averaged) gradient scaled by `step` to every bias and
    /// weight, as a single pass. The sole mutation point of a built network.
    pub fn apply_gradient(&mut self, gradient: &Gradient, step: f64) {
        for (layer, layer_gradient) in self.layers.iter_mut().zip(gradient.layers.iter()) {
            for (neuron, neuron_gradient) in layer.neurons.iter_mut().zip(layer_gradient.iter()) {
                neuron.bias -= neuron_gradient.bias * step;
                for (weight, partial) in neuron.weights.iter_mut().zip(neuron_gradient.weights.iter())
                {
                    *weight -= partial * step;
                }
            }
        }
    }

    fn validate_inputs(&self, inputs: &[f64]) -> Result<()> {
        if inputs.len() == self.input_count {
            return Ok(());
        }

        Err(Error::DimensionMismatch {
            expected: self.input_count,
            provided: inputs.len(),
        })
    }
}
