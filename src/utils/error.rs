use thiserror::Error;

#[derive(Error, Debug)]
pub enum NormalizerError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid input: {message}")]
    InvalidInputError { message: String },
}

pub type Result<T> = std::result::Result<T, NormalizerError>;
