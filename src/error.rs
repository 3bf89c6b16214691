use thiserror::Error;

/// Error type for the farm advisor derivers.
///
/// Only malformed requests are errors. Unknown crop/soil/water keys and
/// out-of-range nutrient readings fall back to defaults instead.
#[derive(Error, Debug)]
pub enum FarmError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, FarmError>;
