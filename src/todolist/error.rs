use crate::model::TodoId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TodoError {
    #[error("{0}")]
    Validation(String),

    #[error("Todo not found: {0}")]
    NotFound(TodoId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl TodoError {
    pub fn is_validation(&self) -> bool {
        matches!(self, TodoError::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, TodoError>;
