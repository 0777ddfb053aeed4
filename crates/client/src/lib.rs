//! Fruitstand client library.
//!
//! Everything the terminal storefront needs to talk to the Fruitstand
//! backend: configuration, the persisted session store, the backend API
//! gateway, and the advisory route gate.
//!
//! The backend owns all real logic - authentication, persistence,
//! validation. This crate holds the only client-side state worth modeling:
//! who is believed to be logged in, whether an admin login was recorded, and
//! how that gates local rendering.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod routes;
pub mod session;
