use thiserror::Error;

#[derive(Error, Debug)]
pub enum ForecastError {
    #[error("Insufficient history: got {got} observations, need at least {need}")]
    InsufficientHistory { got: usize, need: usize },

    #[error("Forecast computation failed: {0}")]
    Computation(String),
}
