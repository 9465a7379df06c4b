use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::loss::cross_entropy::CategoricalCrossEntropy;
use crate::loss::square_difference::SquareDifference;

/// Selects how output-layer error deltas are computed during backpropagation.
///
/// - `SquareDifference` — the well-tested default.
/// - `CategoricalCrossEntropy` — a documented approximation (see
///   [`CategoricalCrossEntropy::output_deltas`]); building a network with it
///   emits a warning.
///
/// The loss tag affects gradients only. Composite-error reporting always uses
/// the squared-difference per-example loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LossFunction {
    SquareDifference,
    CategoricalCrossEntropy,
}

impl LossFunction {
    /// ∂Error/∂Output for every output neuron of one training example.
    pub fn output_deltas(&self, actual: &[f64], expected: &[f64]) -> Vec<f64> {
        match self {
            LossFunction::SquareDifference => SquareDifference::output_deltas(actual, expected),
            LossFunction::CategoricalCrossEntropy => {
                CategoricalCrossEntropy::output_deltas(actual, expected)
            }
        }
    }

    /// The grammar tag for this loss function.
    pub fn tag(&self) -> &'static str {
        match self {
            LossFunction::SquareDifference => "squareDifference",
            LossFunction::CategoricalCrossEntropy => "categoricalCrossEntropy",
        }
    }
}

impl Default for LossFunction {
    fn default() -> Self {
        LossFunction::SquareDifference
    }
}

impl fmt::Display for LossFunction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for LossFunction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "squareDifference" => Ok(LossFunction::SquareDifference),
            "categoricalCrossEntropy" => Ok(LossFunction::CategoricalCrossEntropy),
            _ => Err(Error::UnrecognizedTag {
                kind: "loss function",
                tag: s.to_string(),
            }),
        }
    }
}
