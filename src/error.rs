//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{alert::Alert, internal_server_error::InternalServerError, not_found::NotFoundError};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The key-value store holding the ledger could not be read or written.
    ///
    /// The string describes the underlying failure and should only be logged.
    #[error("the ledger storage is unavailable: {0}")]
    StorageUnavailable(String),

    /// The ledger could not be converted to its saved form.
    #[error("could not encode the ledger snapshot: {0}")]
    SnapshotEncodingError(String),

    /// A transaction was submitted without a description.
    #[error("the transaction description cannot be empty")]
    EmptyDescription,

    /// A transaction was submitted with an amount that is not a finite number.
    #[error("the transaction amount must be a finite number")]
    InvalidAmount,

    /// The requested resource was not found.
    #[error("the requested resource could not be found")]
    NotFound,

    /// Could not acquire the ledger lock
    #[error("could not acquire the ledger lock")]
    LedgerLockError,

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        tracing::error!("an unhandled SQL error occurred: {}", value);
        Error::StorageUnavailable(value.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => NotFoundError.into_response(),
            Error::InvalidTimezoneError(timezone) => InternalServerError {
                description: "Invalid Timezone Settings",
                fix: &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            }
            .into_response(),
            Error::StorageUnavailable(_) => InternalServerError {
                description: "Storage Unavailable",
                fix: "Your transactions could not be loaded or saved. Try again later.",
            }
            .into_response(),
            Error::LedgerLockError => InternalServerError::default().into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// Convert the error into an HTTP response with an HTML alert.
    pub fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::InvalidTimezoneError(timezone) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Invalid Timezone Settings".to_owned(),
                    details: format!(
                        "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                    ),
                },
            ),
            Error::EmptyDescription => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Missing description".to_owned(),
                    details: "Enter a description for the transaction.".to_owned(),
                },
            ),
            Error::InvalidAmount => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Invalid amount".to_owned(),
                    details: "Enter the amount as a number, e.g. 12.50 or -40.".to_owned(),
                },
            ),
            Error::StorageUnavailable(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Could not save your changes".to_owned(),
                    details: "The change was applied but could not be saved. \
                    It will be lost when the server restarts unless a later save succeeds."
                        .to_owned(),
                },
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Something went wrong".to_owned(),
                    details:
                        "An unexpected error occurred, check the server logs for more details."
                            .to_owned(),
                },
            ),
        };

        (status_code, alert.into_html()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::test_utils::{get_header, page_text, parse_html_fragment};

    use super::Error;

    #[test]
    fn sql_errors_become_storage_unavailable() {
        let error = Error::from(rusqlite::Error::InvalidQuery);

        assert!(matches!(error, Error::StorageUnavailable(_)));
    }

    #[tokio::test]
    async fn not_found_renders_404_page() {
        let response = Error::NotFound.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn storage_failure_renders_500_page() {
        let response = Error::StorageUnavailable("disk full".to_owned()).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn storage_failure_alert_says_changes_were_not_saved() {
        let response = Error::StorageUnavailable("disk full".to_owned()).into_alert_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let html = parse_html_fragment(response).await;
        assert!(page_text(&html).contains("Could not save your changes"));
    }

    #[tokio::test]
    async fn validation_errors_are_bad_requests() {
        for error in [Error::EmptyDescription, Error::InvalidAmount] {
            let response = error.into_alert_response();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(get_header(&response, "content-type"), "text/html; charset=utf-8");
        }
    }
}
