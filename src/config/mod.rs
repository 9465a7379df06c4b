pub mod grammar;

pub use grammar::{
    LayerConfig, LayerDetail, LayersConfig, NetworkConfig, NeuronConfig, NeuronDetail,
    NeuronsConfig,
};
