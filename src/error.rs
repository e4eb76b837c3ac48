//! Error types for the blocky engine

use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("cannot hand out {requested} distinct goal colours, the palette only has {available}")]
    TooManyGoals { requested: usize, available: usize },

    #[error("no valid move found after {attempts} random draws")]
    RetryLimitExceeded { attempts: usize },

    #[error("difficulty must be at least 1, got {0}")]
    InvalidDifficulty(usize),

    #[error("level {level} is outside 0..={max_depth}")]
    DepthOutOfRange { level: usize, max_depth: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
