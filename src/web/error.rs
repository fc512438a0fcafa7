use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use strum_macros::AsRefStr;

use crate::model;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, AsRefStr, thiserror::Error)]
pub enum Error {
    #[error("required query parameter is missing or empty: '{0}'")]
    MissingQueryParam(&'static str),
    #[error("failed to deserialize the query string: {0}")]
    QueryRejected(String),

    #[error("activity store error: {0}")]
    Model(#[from] model::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn status_code_and_client_error(&self) -> (StatusCode, ClientError) {
        use ClientError::*;

        match self {
            Error::Model(model::Error::ActivityNotFound(_)) => {
                (StatusCode::NOT_FOUND, ActivityNotFound)
            }
            Error::Model(model::Error::NotRegistered { .. }) => {
                (StatusCode::NOT_FOUND, NotSignedUp)
            }
            Error::Model(model::Error::AlreadySignedUp { .. }) => {
                (StatusCode::BAD_REQUEST, AlreadySignedUp)
            }
            Error::MissingQueryParam(_) | Error::QueryRejected(_) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                InvalidInput(self.to_string()),
            ),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, ServiceError),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::debug!("{:<12} - into_response(Error: {self:?})", "INTO_RESP");

        // Construct a response
        let mut res = StatusCode::INTERNAL_SERVER_ERROR.into_response();

        // Insert the Error into response so that it can be retrieved later.
        res.extensions_mut().insert(Arc::new(self));

        res
    }
}

/// The error as the client sees it, `Display` is the `detail` of the error body.
#[derive(Debug, AsRefStr, derive_more::Display)]
pub enum ClientError {
    #[display("Activity not found")]
    ActivityNotFound,
    #[display("Student is already signed up")]
    AlreadySignedUp,
    #[display("Student is not signed up for this activity")]
    NotSignedUp,
    #[display("Received invalid input: {_0}")]
    InvalidInput(String),
    #[display("Service Error!")]
    ServiceError,
}
