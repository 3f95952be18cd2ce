//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    alert::Alert, internal_server_error::InternalServerError, not_found::NotFoundError,
    store::ErrorPayload,
};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The requested page does not exist.
    #[error("the requested resource could not be found")]
    NotFound,

    /// The funds API does not know the requested fund.
    #[error("the fund \"{0}\" could not be found")]
    FundNotFound(String),

    /// A call to the funds API failed.
    ///
    /// The payload is the normalized error that was also recorded in the store.
    #[error("the funds API request failed: {0}")]
    ApiRequestFailed(ErrorPayload),

    /// Could not acquire the store lock because another thread panicked while holding it.
    #[error("could not acquire the store lock")]
    StoreLockError,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound | Error::FundNotFound(_) => NotFoundError.into_response(),
            Error::ApiRequestFailed(payload) => {
                tracing::error!("A funds API request failed: {payload}");
                InternalServerError {
                    description: "Could not load your funds",
                    fix: &format!("The funds service answered: {payload}"),
                }
                .into_response()
            }
            Error::StoreLockError => InternalServerError::default().into_response(),
        }
    }
}

impl Error {
    /// Convert the error into an HTTP response with an HTML alert.
    pub fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::ApiRequestFailed(payload) => (
                StatusCode::BAD_REQUEST,
                Alert::ErrorSimple {
                    message: payload.to_string(),
                },
            ),
            Error::FundNotFound(fund_id) => (
                StatusCode::NOT_FOUND,
                Alert::Error {
                    message: "Fund not found".to_owned(),
                    details: format!(
                        "Could not find the fund with the ID {fund_id}. \
                        Try refreshing the page to see the current list of funds."
                    ),
                },
            ),
            error => {
                tracing::error!("An unexpected error occurred: {error}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Alert::Error {
                        message: "Something went wrong".to_owned(),
                        details:
                            "An unexpected error occurred, check the server logs for more details."
                                .to_owned(),
                    },
                )
            }
        };

        (status_code, alert.into_html()).into_response()
    }
}
