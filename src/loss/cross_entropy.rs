pub struct CategoricalCrossEntropy;

impl CategoricalCrossEntropy {
    /// ∂Error/∂Output per output neuron: `1/Σactual - expected/actual`.
    ///
    /// This is an approximation, not a canonical cross-entropy gradient: it
    /// divides by the raw activation sum rather than a normalized softmax, and
    /// it is numerically unstable when any `actual` approaches zero. Networks
    /// built with this loss log a warning; error reporting still uses the
    /// squared-difference composite (`SquareDifference::loss`), so this type
    /// carries no `loss` of its own.
    pub fn output_deltas(actual: &[f64], expected: &[f64]) -> Vec<f64> {
        let total: f64 = actual.iter().sum();

        actual
            .iter()
            .zip(expected.iter())
            .map(|(a, e)| 1.0 / total - e / a)
            .collect()
    }
}
