//! Cash Card is a small REST service for managing cash cards.
//!
//! Every cash card belongs to the user who created it. Users authenticate
//! with HTTP Basic credentials, and every query made on their behalf is scoped
//! to their own cards, so a card owned by someone else looks exactly like a
//! card that does not exist.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header::WWW_AUTHENTICATE},
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde_json::json;
use tokio::signal;

mod app_state;
mod auth;
mod cash_card;
mod endpoints;
mod logging;
mod pagination;
mod password;
mod routing;
pub mod stores;

pub use app_state::AppState;
pub use auth::{CARD_OWNER_ROLE, Principal, UserAccount, UserDirectory, basic_auth_guard};
pub use cash_card::{CashCard, CashCardDraft, CashCardId, CashCardRequest};
pub use endpoints::{CASH_CARD, CASH_CARDS, format_endpoint};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use pagination::{PageRequest, PaginationConfig, SortDirection, SortOrder, SortProperty};
pub use password::{PasswordHash, ValidatedPassword};
pub use routing::build_router;

/// The realm advertised in the `WWW-Authenticate` header of 401 responses.
pub const AUTH_REALM: &str = "cashcards";

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The request did not carry valid HTTP Basic credentials.
    ///
    /// Covers a missing or malformed `Authorization` header, an unknown
    /// username and a wrong password alike.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The user authenticated, but does not hold the role needed to manage
    /// cash cards.
    #[error("the user does not have the required role")]
    Forbidden,

    /// The requested resource was not found.
    ///
    /// Cash cards owned by another user are reported as not found too, so
    /// that clients cannot probe for the existence of other users' cards.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// A `sort` query parameter named a property that cash cards do not have.
    #[error("cannot sort by unknown property \"{0}\"")]
    InvalidSortProperty(String),

    /// A password that is too easy to guess.
    #[error("password is too weak: {0}")]
    TooWeak(String),

    /// An unexpected error occurred with the underlying hashing library.
    ///
    /// The error string should only be logged for debugging on the server.
    #[error("hashing failed: {0}")]
    HashingError(String),

    /// The user directory file could not be read or parsed.
    #[error("could not load the user directory: {0}")]
    InvalidUserDirectory(String),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Every cash card ID has been used, so a new card cannot be given one.
    #[error("no cash card IDs are left to assign")]
    IdsExhausted,

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => StatusCode::NOT_FOUND.into_response(),
            Error::InvalidCredentials => {
                let challenge = HeaderValue::from_str(&format!("Basic realm=\"{AUTH_REALM}\""))
                    .unwrap_or_else(|_| HeaderValue::from_static("Basic"));

                (StatusCode::UNAUTHORIZED, [(WWW_AUTHENTICATE, challenge)]).into_response()
            }
            Error::Forbidden => StatusCode::FORBIDDEN.into_response(),
            Error::InvalidSortProperty(_) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": self.to_string() })),
            )
                .into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal server error" })),
                )
                    .into_response()
            }
        }
    }
}
