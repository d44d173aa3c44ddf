use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum AutopostServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AutopostServiceError> for AppError {
    fn from(err: AutopostServiceError) -> Self {
        match err {
            AutopostServiceError::Dependency(msg) => AppError::Internal(msg),
            AutopostServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
