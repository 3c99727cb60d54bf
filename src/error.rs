use thiserror::Error;

/// Errors surfaced at the population/genome boundary.
///
/// Allocation failure itself is not representable here — in safe Rust it aborts
/// the process via the global allocator rather than returning a `Result` — so
/// this enum only covers the failure modes a caller can actually recover from.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NeatError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),

    #[error("genome index {index} out of range (population size {population_size})")]
    IndexOutOfRange { index: usize, population_size: usize },

    #[error("input length {got} does not match network input count {expected}")]
    InputLengthMismatch { expected: usize, got: usize },

    #[error("fitness must be finite and non-negative, got {0}")]
    NonFiniteFitness(f32),
}

pub type NeatResult<T> = Result<T, NeatError>;
