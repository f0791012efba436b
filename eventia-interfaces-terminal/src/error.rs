use thiserror::Error;

use eventia_application::AppError;

#[derive(Debug, Error)]
pub enum TerminalError {
    #[error("usage: {0}")]
    Usage(String),
    #[error("backend unavailable: {0}")]
    Backend(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<AppError> for TerminalError {
    fn from(value: AppError) -> Self {
        match value {
            AppError::Upstream(msg) => TerminalError::Backend(msg),
            AppError::Internal(err) => TerminalError::Internal(format!("{:#}", err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_failures_read_as_backend_unavailable() {
        let err = TerminalError::from(AppError::Upstream("connection refused".to_string()));
        assert_eq!(err.to_string(), "backend unavailable: connection refused");
    }

    #[test]
    fn internal_errors_keep_their_context() {
        let source = anyhow::anyhow!("disk full").context("writing cache");
        let err = TerminalError::from(AppError::Internal(source));
        assert_eq!(err.to_string(), "internal error: writing cache: disk full");
    }
}
