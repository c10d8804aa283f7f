use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("unknown state: {0}")]
    UnknownState(String),
}
