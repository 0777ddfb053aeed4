//! Core types for Fruitstand.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod credential;
pub mod email;
pub mod id;
pub mod price;

pub use credential::AdminCredentials;
pub use email::{Email, EmailError};
pub use id::ProductId;
pub use price::{Price, PriceError};
