use crate::network::Network;

/// Error partials for one neuron: ∂Error/∂Bias plus one ∂Error/∂Weight per
/// incoming weight.
#[derive(Debug, Clone, PartialEq)]
pub struct NeuronGradient {
    pub bias: f64,
    pub weights: Vec<f64>,
}

/// A gradient record mirroring the network's layer/neuron shape.
///
/// Transient: computed per example, summed and averaged per batch, discarded
/// once applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    pub layers: Vec<Vec<NeuronGradient>>,
}

impl Gradient {
    /// An all-zero record with the same shape as `network` — the seed for
    /// batch accumulation.
    pub fn zeros_like(network: &Network) -> Gradient {
        let layers = network
            .layers()
            .iter()
            .map(|layer| {
                layer
                    .neurons
                    .iter()
                    .map(|neuron| NeuronGradient {
                        bias: 0.0,
                        weights: vec![0.0; neuron.weights.len()],
                    })
                    .collect()
            })
            .collect();

        Gradient { layers }
    }

    /// Adds `other` memberwise into this record.
    pub fn accumulate(&mut self, other: &Gradient) {
        for (layer, other_layer) in self.layers.iter_mut().zip(other.layers.iter()) {
            for (neuron, other_neuron) in layer.iter_mut().zip(other_layer.iter()) {
                neuron.bias += other_neuron.bias;
                for (weight, other_weight) in
                    neuron.weights.iter_mut().zip(other_neuron.weights.iter())
                {
                    *weight += other_weight;
                }
            }
        }
    }

    /// Scales every partial by `factor`.
    pub fn scale(&mut self, factor: f64) {
        for layer in &mut self.layers {
            for neuron in layer {
                neuron.bias *= factor;
                for weight in &mut neuron.weights {
                    *weight *= factor;
                }
            }
        }
    }
}
