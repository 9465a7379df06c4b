use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

const ELU_ALPHA: f64 = 1.0;

/// The nonlinearity applied to a neuron's weighted total.
///
/// Tags use the same camelCase spelling as the configuration grammar
/// (`"leakyRelu"`, etc.). An unknown tag is a configuration error at parse
/// time, never a silent default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Activation {
    /// Step function: `1` for total ≥ 0, else `0`. Its derivative is zero
    /// everywhere, so binary neurons cannot learn through the gradient path —
    /// a known limitation, useful only for hand-built networks.
    Binary,
    Sigmoid,
    Identity,
    Relu,
    LeakyRelu,
    Elu,
}

impl Activation {
    /// Applies the nonlinearity to a weighted total.
    pub fn apply(&self, total: f64) -> f64 {
        match self {
            Activation::Binary => {
                if total >= 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
            Activation::Sigmoid => sigmoid(total),
            Activation::Identity => total,
            Activation::Relu => total.max(0.0),
            Activation::LeakyRelu => {
                if total >= 0.0 {
                    total
                } else {
                    0.01 * total
                }
            }
            Activation::Elu => {
                if total >= 0.0 {
                    total
                } else {
                    ELU_ALPHA * (total.exp() - 1.0)
                }
            }
        }
    }

    /// Derivative of the nonlinearity with respect to the total, evaluated at
    /// the forward-pass total (not at the output).
    pub fn derivative(&self, total: f64) -> f64 {
        match self {
            Activation::Binary => 0.0,
            Activation::Sigmoid => {
                let s = sigmoid(total);
                s * (1.0 - s)
            }
            Activation::Identity => 1.0,
            Activation::Relu => {
                if total >= 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
            Activation::LeakyRelu => {
                if total >= 0.0 {
                    1.0
                } else {
                    0.01
                }
            }
            Activation::Elu => {
                if total >= 0.0 {
                    1.0
                } else {
                    ELU_ALPHA * total.exp()
                }
            }
        }
    }

    /// The grammar tag for this activation.
    pub fn tag(&self) -> &'static str {
        match self {
            Activation::Binary => "binary",
            Activation::Sigmoid => "sigmoid",
            Activation::Identity => "identity",
            Activation::Relu => "relu",
            Activation::LeakyRelu => "leakyRelu",
            Activation::Elu => "elu",
        }
    }
}

impl Default for Activation {
    fn default() -> Self {
        Activation::Sigmoid
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Activation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "binary" => Ok(Activation::Binary),
            "sigmoid" => Ok(Activation::Sigmoid),
            "identity" => Ok(Activation::Identity),
            "relu" => Ok(Activation::Relu),
            "leakyRelu" => Ok(Activation::LeakyRelu),
            "elu" => Ok(Activation::Elu),
            _ => Err(Error::UnrecognizedTag {
                kind: "activation",
                tag: s.to_string(),
            }),
        }
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
