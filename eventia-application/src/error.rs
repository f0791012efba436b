use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("backend request failed: {0}")]
    Upstream(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}
