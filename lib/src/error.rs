use thiserror::Error;

/// Why a shot has no carry distance to report.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FlightError {
    #[error("ball did not land within {flight_time:.2}s")]
    DidNotLand { flight_time: f64 },
    #[error("integration became non-finite at step {step}")]
    Unstable { step: usize },
}

/// A `[model]` override the integrator can't run with.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("{field} must be finite")]
    NonFinite { field: &'static str },
    #[error("time_step must be positive, got {0}")]
    NonPositiveTimeStep(f64),
    #[error("step budget of {steps} is outside 1..={max}")]
    StepBudget { steps: f64, max: usize },
}
