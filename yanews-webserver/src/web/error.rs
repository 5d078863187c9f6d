use rocket::{
    self,
    http::Status,
    response::{self, Responder},
};
use thiserror::Error;
use yanews_application::error::{AppError, BError};
pub use yanews_core::{repositories::Error as RepoError, usecases::Error as ParameterError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    App(#[from] AppError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn parameter_error_status(err: &ParameterError) -> Status {
    match err {
        ParameterError::Credentials | ParameterError::Unauthorized => Status::Unauthorized,
        ParameterError::Repo(RepoError::NotFound) => Status::NotFound,
        ParameterError::Repo(_) => Status::InternalServerError,
        _ => Status::BadRequest,
    }
}

// Only the status is forwarded to the catchers,
// the details are not exposed to the client.
impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, _: &rocket::Request) -> response::Result<'o> {
        let status = match &self {
            Error::App(AppError::Business(BError::Parameter(err))) => parameter_error_status(err),
            Error::App(AppError::Business(BError::Repo(RepoError::NotFound))) => Status::NotFound,
            _ => Status::InternalServerError,
        };
        if status == Status::InternalServerError {
            error!("Error: {self}");
        } else {
            debug!("Request failed with status {status}: {self}");
        }
        Err(status)
    }
}

impl From<RepoError> for Error {
    fn from(err: RepoError) -> Self {
        AppError::from(err).into()
    }
}

impl From<ParameterError> for Error {
    fn from(err: ParameterError) -> Self {
        Self::App(err.into())
    }
}
