use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error(
        "invalid dataset identifier {0:?}: expected 1-64 lowercase letters, digits, or underscores"
    )]
    InvalidDatasetId(String),
    #[error("invalid row id {0:?}: expected 32 hex characters")]
    InvalidRowId(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
