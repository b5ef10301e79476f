pub mod accounts;
pub mod auth;
pub mod configs;
pub mod transactions;

use crm_core::identity::Role;

/// Roles allowed to touch lead-facing account and transaction endpoints.
pub const LEAD_ROLES: &[Role] = &[Role::Vip, Role::Regular];

/// Peers allowed to call service-to-service endpoints.
pub const CONFIG_ISSUERS: &[&str] = &["config-service"];
