//! The declarative configuration grammar.
//!
//! The grammar is deliberately flexible: layers and neurons can be written as
//! bare sequences, counted shorthands, or objects with local `type`/`bias`
//! overrides. Each shape is a distinct variant of an `#[serde(untagged)]`
//! enum, resolved once at parse time, so the builder never inspects runtime
//! shapes and illegal configurations fail to parse at all.

use serde::{Deserialize, Serialize};

use crate::activation::Activation;
use crate::error::Result;
use crate::loss::LossFunction;

/// Root of the grammar.
///
/// `type`, `bias` and `lossFunction` are network-wide defaults; absent values
/// fall back to the canonical defaults (`sigmoid`, `-1`, `squareDifference`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetworkConfig {
    pub inputs: usize,
    pub layers: LayersConfig,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub activation: Option<Activation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bias: Option<f64>,
    #[serde(rename = "lossFunction", skip_serializing_if = "Option::is_none")]
    pub loss_function: Option<LossFunction>,
}

impl NetworkConfig {
    /// Parses a configuration from its canonical JSON encoding.
    pub fn from_json(json: &str) -> Result<NetworkConfig> {
        Ok(serde_json::from_str(json)?)
    }

    /// The canonical JSON encoding of this configuration.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Either a count of homogeneous layers to auto-size, or explicit layer
/// configs. `Count(n)` produces `n` layers of `n` randomly-initialized
/// neurons each.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LayersConfig {
    Count(usize),
    List(Vec<LayerConfig>),
}

/// One layer.
///
/// Variant order matters for untagged dispatch: a bare sequence of neuron
/// configs is tried before the single-bare-neuron form, so `[[1, -1], [-1, 1]]`
/// is a two-neuron layer while `[1, -1]` is a one-neuron layer with those
/// weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LayerConfig {
    /// `{ "neurons": ..., "type"?: ..., "bias"?: ... }`
    Detailed(LayerDetail),
    /// A bare sequence of neuron configs (weight rows and/or neuron objects).
    Neurons(Vec<NeuronConfig>),
    /// A single bare neuron config, treated as a one-neuron layer.
    Single(Vec<f64>),
}

/// The object form of a layer config; `type`/`bias` are layer-level defaults
/// for the neurons inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayerDetail {
    pub neurons: NeuronsConfig,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub activation: Option<Activation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bias: Option<f64>,
}

/// Either a neuron count (randomly initialized) or explicit neuron configs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NeuronsConfig {
    Count(usize),
    List(Vec<NeuronConfig>),
}

/// One neuron: a bare weight row, or an object with optional overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NeuronConfig {
    Weights(Vec<f64>),
    Detailed(NeuronDetail),
}

/// The object form of a neuron config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NeuronDetail {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub activation: Option<Activation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bias: Option<f64>,
    pub weights: Vec<f64>,
}
