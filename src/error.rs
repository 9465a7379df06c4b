use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong inside the engine.
///
/// Configuration problems (`Config`, `Json`, `EmptyLayers`, `EmptyLayer`,
/// `WeightCountMismatch`) are fatal to construction and never retried.
/// `DimensionMismatch` and `NumericInstability` are fatal to the single call
/// that raised them; the network itself stays usable (and, for
/// `NumericInstability`, its weights have likely diverged — restart training
/// rather than continuing).
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed configuration that does not fit a more specific variant.
    #[error("invalid network config: {0}")]
    Config(String),

    /// The configuration text could not be parsed as the grammar.
    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A network config declared no layers.
    #[error("network config must declare at least one layer")]
    EmptyLayers,

    /// A layer config resolved to zero neurons.
    #[error("layer {layer} declares no neurons")]
    EmptyLayer { layer: usize },

    /// An explicit weight vector does not match the previous layer's width.
    #[error("layer {layer}, neuron {neuron}: expected {expected} weights, got {provided}")]
    WeightCountMismatch {
        layer: usize,
        neuron: usize,
        expected: usize,
        provided: usize,
    },

    /// An input vector of the wrong length was passed to `run`/`training_run`.
    #[error("expected {expected} inputs, got {provided}")]
    DimensionMismatch { expected: usize, provided: usize },

    /// A neuron produced a non-finite weighted total during a forward pass.
    #[error("non-finite total at layer {layer}, neuron {neuron}")]
    NumericInstability { layer: usize, neuron: usize },

    /// An activation or loss tag was not recognized.
    #[error("unrecognized {kind} tag: '{tag}'")]
    UnrecognizedTag { kind: &'static str, tag: String },
}
