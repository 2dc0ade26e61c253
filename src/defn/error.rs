use thiserror::Error;

#[derive(Error, Debug)]
pub enum DictError {
    #[error("word not found in the dictionary: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Dictionary is closed")]
    Closed,
}

impl DictError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, DictError::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, DictError>;
