use rand::rngs::ThreadRng;

use crate::activation::Activation;
use crate::config::{LayerConfig, LayerDetail, LayersConfig, NetworkConfig, NeuronConfig, NeuronsConfig};
use crate::error::{Error, Result};
use crate::loss::LossFunction;
use crate::network::layer::Layer;
use crate::network::network::Network;
use crate::network::neuron::Neuron;

/// Canonical neuron bias when no config level supplies one. Pairs with the
/// `sigmoid` default activation.
pub const DEFAULT_BIAS: f64 = -1.0;

impl Network {
    /// Builds a network from a configuration.
    ///
    /// `type`/`bias` defaults resolve neuron → layer → network → canonical
    /// default, collapsed here into fully-concrete neurons. Neurons declared
    /// by count (no explicit weights) are randomly initialized; explicit
    /// weight rows are validated against the previous layer's width.
    pub fn build(config: &NetworkConfig) -> Result<Network> {
        let loss_function = config.loss_function.unwrap_or_default();
        if loss_function == LossFunction::CategoricalCrossEntropy {
            log::warn!(
                "categoricalCrossEntropy output deltas are an unstable approximation; \
                 squareDifference is the well-tested default"
            );
        }

        let layer_configs: Vec<LayerConfig> = match &config.layers {
            LayersConfig::Count(0) => return Err(Error::EmptyLayers),
            LayersConfig::Count(count) => {
                // A bare count declares that many homogeneous layers, each
                // auto-sized to the same neuron count.
                vec![
                    LayerConfig::Detailed(LayerDetail {
                        neurons: NeuronsConfig::Count(*count),
                        activation: None,
                        bias: None,
                    });
                    *count
                ]
            }
            LayersConfig::List(list) if list.is_empty() => return Err(Error::EmptyLayers),
            LayersConfig::List(list) => list.clone(),
        };

        let mut rng = rand::thread_rng();
        let mut layers = Vec::with_capacity(layer_configs.len());
        let mut prev_width = config.inputs;

        for (index, layer_config) in layer_configs.iter().enumerate() {
            let layer = build_layer(layer_config, config, prev_width, index, &mut rng)?;
            prev_width = layer.width();
            layers.push(layer);
        }

        Ok(Network {
            input_count: config.inputs,
            layers,
            loss_function,
        })
    }

    /// Parses a JSON configuration and builds the network it describes.
    pub fn from_json(json: &str) -> Result<Network> {
        Network::build(&NetworkConfig::from_json(json)?)
    }
}

fn build_layer(
    layer_config: &LayerConfig,
    network: &NetworkConfig,
    prev_width: usize,
    index: usize,
    rng: &mut ThreadRng,
) -> Result<Layer> {
    let (layer_activation, layer_bias, neurons_config) = match layer_config {
        LayerConfig::Detailed(detail) => (detail.activation, detail.bias, detail.neurons.clone()),
        LayerConfig::Neurons(list) => (None, None, NeuronsConfig::List(list.clone())),
        LayerConfig::Single(weights) => (
            None,
            None,
            NeuronsConfig::List(vec![NeuronConfig::Weights(weights.clone())]),
        ),
    };

    let default_activation: Activation = layer_activation.or(network.activation).unwrap_or_default();
    let default_bias = layer_bias.or(network.bias).unwrap_or(DEFAULT_BIAS);

    let neurons = match neurons_config {
        NeuronsConfig::Count(0) => return Err(Error::EmptyLayer { layer: index }),
        NeuronsConfig::Count(count) => {
            let mean = -f64::min(1.0, 8.0 / count as f64);
            (0..count)
                .map(|_| {
                    let mut neuron = Neuron::new(default_activation, default_bias, Vec::new());
                    neuron.set_initial_weights(rng, prev_width, mean);
                    neuron
                })
                .collect()
        }
        NeuronsConfig::List(configs) => {
            if configs.is_empty() {
                return Err(Error::EmptyLayer { layer: index });
            }

            let mut neurons = Vec::with_capacity(configs.len());
            for (j, neuron_config) in configs.iter().enumerate() {
                let neuron = match neuron_config {
                    NeuronConfig::Weights(weights) => {
                        Neuron::new(default_activation, default_bias, weights.clone())
                    }
                    NeuronConfig::Detailed(detail) => Neuron::new(
                        detail.activation.unwrap_or(default_activation),
                        detail.bias.unwrap_or(default_bias),
                        detail.weights.clone(),
                    ),
                };

                if neuron.weights.len() != prev_width {
                    return Err(Error::WeightCountMismatch {
                        layer: index,
                        neuron: j,
                        expected: prev_width,
                        provided: neuron.weights.len(),
                    });
                }
                neurons.push(neuron);
            }
            neurons
        }
    };

    Ok(Layer::new(neurons))
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    #[test]
    fn resolves_defaults_neuron_over_layer_over_network() {
        let network = Network::from_json(
            r#"{
                "inputs": 1,
                "type": "relu",
                "bias": 2,
                "layers": [{
                    "type": "identity",
                    "neurons": [
                        [1],
                        {"weights": [2], "type": "elu", "bias": 0}
                    ]
                }]
            }"#,
        )
        .unwrap();

        let neurons = &network.layers()[0].neurons;
        // Layer default overrides the network default...
        assert_eq!(Activation::Identity, neurons[0].activation);
        assert_approx_eq!(2.0, neurons[0].bias);
        // ...and the neuron level overrides both. A configured bias of zero is
        // respected, not treated as absent.
        assert_eq!(Activation::Elu, neurons[1].activation);
        assert_approx_eq!(0.0, neurons[1].bias);
    }

    #[test]
    fn canonical_defaults_are_sigmoid_and_negative_one() {
        let network = Network::from_json(r#"{"inputs": 2, "layers": [{"neurons": 3}]}"#).unwrap();

        for neuron in &network.layers()[0].neurons {
            assert_eq!(Activation::Sigmoid, neuron.activation);
            assert_approx_eq!(-1.0, neuron.bias);
            assert_eq!(2, neuron.weights.len());
        }
        assert_eq!(LossFunction::SquareDifference, network.loss_function());
    }

    #[test]
    fn layer_count_builds_homogeneous_square_layers() {
        let network = Network::from_json(r#"{"inputs": 4, "layers": 3}"#).unwrap();

        assert_eq!(3, network.layers().len());
        let mut prev_width = 4;
        for layer in network.layers() {
            assert_eq!(3, layer.width());
            assert_eq!(prev_width, layer.input_width());
            prev_width = layer.width();
        }
    }

    #[test]
    fn counted_neurons_use_layer_defaults() {
        let network = Network::from_json(
            r#"{"inputs": 1, "layers": [{"neurons": 2, "type": "relu", "bias": 0.25}]}"#,
        )
        .unwrap();

        for neuron in &network.layers()[0].neurons {
            assert_eq!(Activation::Relu, neuron.activation);
            assert_approx_eq!(0.25, neuron.bias);
        }
    }

    #[test]
    fn threads_widths_between_layers() {
        let network = Network::from_json(
            r#"{"inputs": 2, "layers": [{"neurons": 5}, {"neurons": 3}, {"neurons": 1}]}"#,
        )
        .unwrap();

        let widths: Vec<usize> = network.layers().iter().map(Layer::width).collect();
        assert_eq!(vec![5, 3, 1], widths);
        assert_eq!(2, network.layers()[0].input_width());
        assert_eq!(5, network.layers()[1].input_width());
        assert_eq!(3, network.layers()[2].input_width());
    }

    #[test]
    fn rejects_weight_rows_of_the_wrong_width() {
        let result = Network::from_json(r#"{"inputs": 2, "layers": [[[1, -1], [1, -1, 0]]]}"#);

        match result {
            Err(Error::WeightCountMismatch {
                layer: 0,
                neuron: 1,
                expected: 2,
                provided: 3,
            }) => {}
            other => panic!("expected weight count mismatch, got {other:?}"),
        }
    }

    #[test]
    fn rejects_empty_topologies() {
        assert!(matches!(
            Network::from_json(r#"{"inputs": 2, "layers": []}"#),
            Err(Error::EmptyLayers)
        ));
        assert!(matches!(
            Network::from_json(r#"{"inputs": 2, "layers": [{"neurons": 0}]}"#),
            Err(Error::EmptyLayer { layer: 0 })
        ));
    }
}
