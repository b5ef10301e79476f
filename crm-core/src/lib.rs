//! crm-core: Shared inter-service RPC client and authorization gate
//! for the CRM backend.
pub mod clients;
pub mod config;
pub mod error;
pub mod gate;
pub mod identity;
pub mod observability;
pub mod rpc;
pub mod utils;

pub use axum;
pub use http;
pub use reqwest;
pub use rust_decimal;
pub use serde;
pub use serde_json;
pub use tracing;
pub use validator;
