//! Outbound RPC plumbing: one executor that talks to peer services and one
//! classifier that turns every raw outcome into a typed result.

pub mod classifier;
pub mod executor;

pub use classifier::classify;
pub use executor::{RawOutcome, RequestExecutor};

/// Header attached to every outbound request so the receiving service can
/// attribute the call.
pub const MICROSERVICE_HEADER: &str = "Microservice";

/// Fixed name this service identifies itself with.
pub const MICROSERVICE_NAME: &str = "crm-service";
