//! Operation wrappers over the peer services.
//!
//! Each wrapper is a thin, named composition: build request, tag,
//! authenticate, execute, classify. One attempt per call, no caching.

pub mod auth;
pub mod configuration;
pub mod transaction;

pub use auth::{AuthClient, LoginCredentials};
pub use configuration::ConfigClient;
pub use transaction::TransactionClient;
