//! # chantier-api
//!
//! The single chokepoint for calls to the Chantier backend.
//!
//! - Every request carries `Authorization: Bearer <token>` when a session
//!   token is in the store, and no credential header otherwise.
//! - Any `401` response clears the token, notifies [`SessionEvent`]
//!   subscribers, and is returned to the caller as [`ApiError::Unauthorized`].
//! - No retries, no backoff. Transport failures reach the caller unchanged.
//!
//! Login and logout live in [`auth`].

pub mod auth;
mod client;
mod error;
mod http;
mod session;

pub use auth::{LoginCredentials, LoginResponse};
pub use client::ApiClient;
pub use error::ApiError;
pub use session::SessionEvent;
