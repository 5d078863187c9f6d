use thiserror::Error;
use yanews_core::{repositories::Error as RepoError, usecases::Error as ParameterError};

pub use yanews_core::repositories;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(BError::Repo(err))
    }
}

impl From<ParameterError> for AppError {
    fn from(err: ParameterError) -> AppError {
        AppError::Business(err.into())
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum BError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl AppError {
    /// Whether the requested object does not exist or
    /// must not be revealed to the requesting user.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Business(BError::Repo(RepoError::NotFound))
                | Self::Business(BError::Parameter(ParameterError::Repo(
                    RepoError::NotFound
                )))
        )
    }
}
