use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("the number of simulations per decision must be positive")]
    ZeroSimulations,
    #[error("exploration constant must be finite and non-negative (got {0})")]
    Exploration(f32),
}

/// A strategy returned something that would corrupt the search statistics.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ContractViolation {
    #[error("rollout returned {value}, outside of the declared range {min}..={max}")]
    RolloutValue { value: f32, min: f32, max: f32 },
    #[error("expansion produced no children although {legal} legal moves exist")]
    EmptyExpansion { legal: usize },
    #[error("confidence bound evaluated to NaN")]
    NanScore,
}

#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum UctError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("there are no legal moves in the root position")]
    NoLegalActions,
    #[error("strategy contract violated: {0}")]
    Contract(#[from] ContractViolation),
}
