//! Fruitstand Core - Shared types library.
//!
//! This crate provides common types used across all Fruitstand components:
//! - `client` - Session store, route gate, and backend API gateway
//! - `cli` - The `fruitstand` terminal storefront
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no session
//! state. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for emails, product ids, prices, and
//!   admin credentials

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
