//! Converting a live network back into the configuration grammar.
//!
//! Repeated values collapse upward: a `type`/`bias` shared by every neuron in
//! a layer becomes a layer default, a layer default shared by every layer
//! becomes a network default, and a network default equal to the canonical
//! default is omitted entirely. A layer left with nothing but its neurons is
//! emitted as a bare sequence.

use crate::activation::Activation;
use crate::config::{
    LayerConfig, LayerDetail, LayersConfig, NetworkConfig, NeuronConfig, NeuronDetail,
    NeuronsConfig,
};
use crate::error::Result;
use crate::loss::LossFunction;
use crate::network::builder::DEFAULT_BIAS;
use crate::network::layer::Layer;
use crate::network::network::Network;

struct LayerSnapshot {
    activation: Option<Activation>,
    bias: Option<f64>,
    neurons: Vec<NeuronConfig>,
}

impl Network {
    /// A configuration this network could have been built from.
    ///
    /// Round-trip contract: `Network::build(&n.to_config())` evaluates
    /// bit-for-bit identically to `n`, even though the nesting may differ from
    /// whatever config `n` was originally built from.
    pub fn to_config(&self) -> NetworkConfig {
        let mut snapshots: Vec<LayerSnapshot> = self.layers.iter().map(snapshot_layer).collect();

        let mut network_activation = None;
        if let Some(common) = common_activation(&snapshots) {
            for snapshot in &mut snapshots {
                snapshot.activation = None;
            }
            if common != Activation::default() {
                network_activation = Some(common);
            }
        }

        let mut network_bias = None;
        if let Some(common) = common_bias(&snapshots) {
            for snapshot in &mut snapshots {
                snapshot.bias = None;
            }
            if common != DEFAULT_BIAS {
                network_bias = Some(common);
            }
        }

        let layers = snapshots
            .into_iter()
            .map(|snapshot| {
                if snapshot.activation.is_none() && snapshot.bias.is_none() {
                    LayerConfig::Neurons(snapshot.neurons)
                } else {
                    LayerConfig::Detailed(LayerDetail {
                        neurons: NeuronsConfig::List(snapshot.neurons),
                        activation: snapshot.activation,
                        bias: snapshot.bias,
                    })
                }
            })
            .collect();

        NetworkConfig {
            inputs: self.input_count,
            layers: LayersConfig::List(layers),
            activation: network_activation,
            bias: network_bias,
            loss_function: (self.loss_function != LossFunction::default())
                .then_some(self.loss_function),
        }
    }

    /// The canonical JSON encoding of [`Network::to_config`] — the engine's
    /// only durable/wire format, reconstructible by [`Network::from_json`].
    pub fn to_json(&self) -> Result<String> {
        self.to_config().to_json()
    }
}

fn snapshot_layer(layer: &Layer) -> LayerSnapshot {
    let layer_activation = layer
        .neurons
        .iter()
        .all(|n| n.activation == layer.neurons[0].activation)
        .then(|| layer.neurons[0].activation);
    let layer_bias = layer
        .neurons
        .iter()
        .all(|n| n.bias == layer.neurons[0].bias)
        .then(|| layer.neurons[0].bias);

    let neurons = layer
        .neurons
        .iter()
        .map(|neuron| {
            if layer_activation.is_some() && layer_bias.is_some() {
                NeuronConfig::Weights(neuron.weights.clone())
            } else {
                NeuronConfig::Detailed(NeuronDetail {
                    activation: match layer_activation {
                        Some(_) => None,
                        None => Some(neuron.activation),
                    },
                    bias: match layer_bias {
                        Some(_) => None,
                        None => Some(neuron.bias),
                    },
                    weights: neuron.weights.clone(),
                })
            }
        })
        .collect();

    LayerSnapshot {
        activation: layer_activation,
        bias: layer_bias,
        neurons,
    }
}

fn common_activation(snapshots: &[LayerSnapshot]) -> Option<Activation> {
    let first = snapshots.first()?.activation?;
    snapshots
        .iter()
        .all(|s| s.activation == Some(first))
        .then_some(first)
}

fn common_bias(snapshots: &[LayerSnapshot]) -> Option<f64> {
    let first = snapshots.first()?.bias?;
    snapshots
        .iter()
        .all(|s| s.bias == Some(first))
        .then_some(first)
}
