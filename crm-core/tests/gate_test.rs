use crm_core::clients::AuthClient;
use crm_core::clients::auth::CHECK_TOKEN_PATH;
use crm_core::config::AuthServiceSettings;
use crm_core::error::ApiError;
use crm_core::gate::{ANONYMOUS_MESSAGE, AccessScope, Gate, INVALID_TOKEN_MESSAGE};
use crm_core::identity::Role;
use http::{HeaderMap, header};
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{header as header_matcher, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn gate_for(server: &MockServer) -> Gate {
    let auth = Arc::new(AuthClient::new(AuthServiceSettings {
        url: server.uri(),
    }));
    Gate::new(auth)
}

fn headers_with_bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        format!("Bearer {}", token).parse().unwrap(),
    );
    headers
}

#[tokio::test]
async fn anonymous_caller_is_rejected_without_any_network_call() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CHECK_TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let gate = gate_for(&server);
    let result = gate
        .authorize(&HeaderMap::new(), AccessScope::Roles(&[Role::Regular]))
        .await;

    match result {
        Err(ApiError::Forbidden(message)) => assert_eq!(message, ANONYMOUS_MESSAGE),
        other => panic!("expected Forbidden, got {:?}", other),
    }
}

#[tokio::test]
async fn identity_without_role_is_invalid_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CHECK_TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "lead_id": 7,
            "role": null,
            "microservice": null,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let gate = gate_for(&server);
    let result = gate
        .authorize(
            &headers_with_bearer("tok"),
            AccessScope::Roles(&[Role::Regular]),
        )
        .await;

    match result {
        Err(ApiError::Forbidden(message)) => assert_eq!(message, INVALID_TOKEN_MESSAGE),
        other => panic!("expected Forbidden, got {:?}", other),
    }
}

#[tokio::test]
async fn role_outside_allow_list_is_rejected_with_lead_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CHECK_TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "lead_id": 1,
            "role": "Admin",
        })))
        .mount(&server)
        .await;

    let gate = gate_for(&server);
    let result = gate
        .authorize(
            &headers_with_bearer("tok"),
            AccessScope::Roles(&[Role::Regular]),
        )
        .await;

    match result {
        Err(ApiError::Forbidden(message)) => {
            assert_eq!(message, "Lead id = 1 doesn't have access to this endpoint")
        }
        other => panic!("expected Forbidden, got {:?}", other),
    }
}

#[tokio::test]
async fn member_role_passes_and_returns_the_identity() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CHECK_TOKEN_PATH))
        .and(header_matcher("Authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "lead_id": 1,
            "role": "Regular",
        })))
        .mount(&server)
        .await;

    let gate = gate_for(&server);
    let identity = gate
        .authorize(
            &headers_with_bearer("tok"),
            AccessScope::Roles(&[Role::Regular, Role::Vip]),
        )
        .await
        .unwrap();

    assert_eq!(identity.lead_id, Some(1));
    assert_eq!(identity.role, Some(Role::Regular));
}

#[tokio::test]
async fn resolver_unavailability_propagates_unchanged() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CHECK_TOKEN_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("auth down"))
        .mount(&server)
        .await;

    let gate = gate_for(&server);
    let result = gate
        .authorize(
            &headers_with_bearer("tok"),
            AccessScope::Roles(&[Role::Regular]),
        )
        .await;

    match result {
        Err(ApiError::ServiceUnavailable(message)) => assert_eq!(message, "auth down"),
        other => panic!("expected ServiceUnavailable, got {:?}", other),
    }
}

// A 403 from the resolver with an empty body classifies as EmptyPayload,
// and the gate must not re-label it.
#[tokio::test]
async fn resolver_forbidden_with_empty_body_propagates_as_empty_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CHECK_TOKEN_PATH))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let gate = gate_for(&server);
    let result = gate
        .authorize(
            &headers_with_bearer("tok"),
            AccessScope::Roles(&[Role::Regular]),
        )
        .await;

    assert!(matches!(result, Err(ApiError::EmptyPayload(_))));
}

#[tokio::test]
async fn issuer_allow_list_passes_a_listed_microservice() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CHECK_TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "microservice": "config-service",
        })))
        .mount(&server)
        .await;

    let gate = gate_for(&server);
    let identity = gate
        .authorize(
            &headers_with_bearer("svc-tok"),
            AccessScope::Microservices(&["config-service"]),
        )
        .await
        .unwrap();

    assert_eq!(identity.microservice.as_deref(), Some("config-service"));
    assert_eq!(identity.role, None);
}

#[tokio::test]
async fn issuer_outside_allow_list_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CHECK_TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "microservice": "billing-service",
        })))
        .mount(&server)
        .await;

    let gate = gate_for(&server);
    let result = gate
        .authorize(
            &headers_with_bearer("svc-tok"),
            AccessScope::Microservices(&["config-service"]),
        )
        .await;

    match result {
        Err(ApiError::Forbidden(message)) => assert_eq!(
            message,
            "Microservice billing-service doesn't have access to this endpoint"
        ),
        other => panic!("expected Forbidden, got {:?}", other),
    }
}

#[tokio::test]
async fn issuer_scope_rejects_identity_without_an_issuer() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CHECK_TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "lead_id": 3,
            "role": "Regular",
        })))
        .mount(&server)
        .await;

    let gate = gate_for(&server);
    let result = gate
        .authorize(
            &headers_with_bearer("tok"),
            AccessScope::Microservices(&["config-service"]),
        )
        .await;

    match result {
        Err(ApiError::Forbidden(message)) => assert_eq!(message, INVALID_TOKEN_MESSAGE),
        other => panic!("expected Forbidden, got {:?}", other),
    }
}
