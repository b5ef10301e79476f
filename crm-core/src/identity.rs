use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse-grained permission class attached to a lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Regular,
    Vip,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "Admin"),
            Role::Regular => write!(f, "Regular"),
            Role::Vip => write!(f, "Vip"),
        }
    }
}

/// The resolved caller principal.
///
/// Produced only by [`crate::clients::AuthClient::check_token`]; never
/// constructed locally from inbound request data. Immutable once resolved,
/// lifetime of one request. `lead_id` and `role` are absent for pure
/// service-to-service callers, `microservice` names the peer that issued
/// the token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(default)]
    pub lead_id: Option<i64>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub microservice: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_decodes_with_missing_fields() {
        let identity: Identity = serde_json::from_str(r#"{"lead_id": 7}"#).unwrap();
        assert_eq!(identity.lead_id, Some(7));
        assert_eq!(identity.role, None);
        assert_eq!(identity.microservice, None);
    }

    #[test]
    fn role_decodes_from_upstream_strings() {
        let identity: Identity =
            serde_json::from_str(r#"{"lead_id": 1, "role": "Vip", "microservice": null}"#).unwrap();
        assert_eq!(identity.role, Some(Role::Vip));
    }
}
