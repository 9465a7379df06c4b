use serde::{Deserialize, Serialize};

/// One supervised example: an input vector of the network's input width and a
/// target vector of the output layer's width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingExample {
    pub inputs: Vec<f64>,
    pub outputs: Vec<f64>,
}

impl TrainingExample {
    pub fn new(inputs: Vec<f64>, outputs: Vec<f64>) -> TrainingExample {
        TrainingExample { inputs, outputs }
    }
}
