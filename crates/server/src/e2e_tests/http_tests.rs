//! HTTP round-trips through the axum router.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;

use lodestone_domain::elements::{Glossary, GlossaryTerm};
use lodestone_shared::requests::{NewGlossaryRequest, NewGlossaryTermRequest};
use lodestone_shared::responses::{ResponseEnvelope, ServiceErrorCode};

use crate::api;

use super::{test_app, SERVER_NAME, USER};

fn router() -> axum::Router {
    api::http::routes().with_state(test_app())
}

fn json_request(method: &str, uri: &str, body: &impl serde::Serialize) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

async fn decode<T: serde::de::DeserializeOwned>(
    response: axum::response::Response,
) -> ResponseEnvelope<T> {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn create_then_delete_round_trips_envelopes() {
    let router = router();

    let response = router
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/servers/{SERVER_NAME}/api/glossaries?user_id={USER}"),
            &NewGlossaryRequest {
                qualified_name: "glossary::main".to_string(),
                ..Default::default()
            },
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let envelope: ResponseEnvelope<Glossary> = decode(response).await;
    let glossary = match envelope {
        ResponseEnvelope::Element { element } => element,
        other => panic!("expected element envelope, got {}", other.category_name()),
    };

    let response = router
        .clone()
        .oneshot(json_request(
            "POST",
            &format!(
                "/servers/{SERVER_NAME}/api/glossaries/{}/terms?user_id={USER}",
                glossary.header.guid
            ),
            &NewGlossaryTermRequest {
                qualified_name: "term::customer".to_string(),
                ..Default::default()
            },
        ))
        .await
        .unwrap();
    let envelope: ResponseEnvelope<GlossaryTerm> = decode(response).await;
    let term = match envelope {
        ResponseEnvelope::Element { element } => element,
        other => panic!("expected element envelope, got {}", other.category_name()),
    };

    // Delete returns a void envelope
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!(
                    "/servers/{SERVER_NAME}/api/terms/{}?user_id={USER}&is_purge=true",
                    term.header.guid
                ))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let envelope: ResponseEnvelope<GlossaryTerm> = decode(response).await;
    assert_eq!(envelope.category_name(), "void");
}

#[tokio::test]
async fn unknown_guid_returns_a_400_error_envelope() {
    let router = router();
    let response = router
        .oneshot(
            Request::builder()
                .uri(format!(
                    "/servers/{SERVER_NAME}/api/terms/3f8e0f91-2a8e-4b5e-9f27-1f6b9d6a0001?user_id={USER}"
                ))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let envelope: ResponseEnvelope<GlossaryTerm> = decode(response).await;
    match envelope {
        ResponseEnvelope::Error { fault } => {
            assert_eq!(fault.code, ServiceErrorCode::InvalidParameter);
            assert_eq!(fault.message_id, "LODESTONE-OMAS-400-002");
            assert_eq!(
                fault.guid.as_deref(),
                Some("3f8e0f91-2a8e-4b5e-9f27-1f6b9d6a0001")
            );
        }
        other => panic!("expected error envelope, got {}", other.category_name()),
    }
}

#[tokio::test]
async fn wrong_server_name_is_an_invalid_parameter() {
    let router = router();
    let response = router
        .oneshot(json_request(
            "POST",
            &format!("/servers/some-other-server/api/glossaries?user_id={USER}"),
            &NewGlossaryRequest {
                qualified_name: "glossary::main".to_string(),
                ..Default::default()
            },
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let envelope: ResponseEnvelope<Glossary> = decode(response).await;
    match envelope {
        ResponseEnvelope::Error { fault } => {
            assert_eq!(fault.parameter_name.as_deref(), Some("server_name"));
        }
        other => panic!("expected error envelope, got {}", other.category_name()),
    }
}

#[tokio::test]
async fn missing_user_id_is_refused() {
    let router = router();
    let response = router
        .oneshot(json_request(
            "POST",
            &format!("/servers/{SERVER_NAME}/api/glossaries"),
            &NewGlossaryRequest {
                qualified_name: "glossary::main".to_string(),
                ..Default::default()
            },
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let envelope: ResponseEnvelope<Glossary> = decode(response).await;
    match envelope {
        ResponseEnvelope::Error { fault } => {
            assert_eq!(fault.message_id, "LODESTONE-OMAS-400-001");
            assert_eq!(fault.parameter_name.as_deref(), Some("user_id"));
        }
        other => panic!("expected error envelope, got {}", other.category_name()),
    }
}
