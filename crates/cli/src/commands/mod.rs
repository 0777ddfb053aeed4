//! Command implementations, one module per storefront area.

pub mod admin;
pub mod auth;
pub mod shop;

use thiserror::Error;

use fruitstand_client::api::ApiError;
use fruitstand_client::session::SessionError;
use fruitstand_core::{EmailError, PriceError};

/// Errors shared by the command implementations.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Backend request failed; the message is what the backend (or the
    /// transport) had to say.
    #[error("{0}")]
    Api(#[from] ApiError),

    /// Persisted session could not be written.
    #[error("{0}")]
    Session(#[from] SessionError),

    /// Entered email failed the structural check.
    #[error("invalid email: {0}")]
    Email(#[from] EmailError),

    /// Entered price failed to parse.
    #[error("invalid price: {0}")]
    Price(#[from] PriceError),

    /// The admin dashboard was requested without a recorded admin login.
    #[error("restricted area: log in with `fruitstand admin login` first")]
    AdminRequired,
}
