use hunt_core::HuntError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Hunt(#[from] HuntError),

    #[error("action budget of {budget} exhausted before the target was found")]
    BudgetExhausted { budget: u64 },
}

pub type SimResult<T> = Result<T, SimError>;
