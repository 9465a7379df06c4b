use std::time::Duration;

/// Outcome of a training run.
#[derive(Debug, Clone)]
pub struct TrainReport {
    /// Composite error before the first update.
    pub pre: f64,
    /// Composite error after the last update.
    pub post: f64,
    /// Update cycles actually run.
    pub cycles: usize,
    /// Wall-clock duration of the run.
    pub elapsed: Duration,
    /// Composite error after each cycle. Populated by convergence-seeking
    /// training, which evaluates the full set every cycle anyway; fixed-cycle
    /// training leaves it empty rather than pay a full evaluation per cycle.
    pub history: Vec<f64>,
}
