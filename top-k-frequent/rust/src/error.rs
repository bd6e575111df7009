use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TopKError {
    #[error("k must be at least 1, got {k}")]
    InvalidArgument { k: usize },
}

pub type Result<T> = std::result::Result<T, TopKError>;
