use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("malformed record: {0}")]
    Decode(String),
    #[error("unknown record id: {0}")]
    NotFound(String),
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl ServiceError {
    pub fn not_found(id: &str) -> Self { Self::NotFound(id.to_string()) }
}
