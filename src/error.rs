use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("no sessions were simulated")]
    EmptySample,
    #[error("win target must be at least 1, got {0}")]
    InvalidTarget(u32),
}

pub type Result<T> = std::result::Result<T, Error>;
