mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::*;
use serde_json::json;
use shared::{api::GET_PLANS_FUNCTION, model::FEATURES};
use tower::ServiceExt;

#[tokio::test]
async fn test_signed_out_without_plans() {
    let backend = Arc::new(FakeBackend { plans: Some(json!({ "items": [] })), ..Default::default() });

    let response = app(backend.clone()).oneshot(get("/", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert_eq!(html.matches("data-plan-id=").count(), 0);
    assert!(html.contains("id=\"pricing\""));

    // No cookie, so nobody to look up
    assert_eq!(*backend.user_lookups.lock().unwrap(), 0);
}

#[tokio::test]
async fn test_plan_failure_still_renders_static_sections() {
    let backend = Arc::new(FakeBackend::default());

    let response = app(backend).oneshot(get("/", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert_eq!(html.matches("data-plan-id=").count(), 0);
    for feature in FEATURES {
        assert!(html.contains(feature.title));
    }
    assert!(html.contains("Como Funciona"));
    assert!(html.contains("href=\"/dashboard\""));
}

#[tokio::test]
async fn test_signed_out_cards_link_to_sign_in() {
    let backend = Arc::new(FakeBackend {
        plans: Some(plans_payload(&["price_basic", "price_pro"])),
        ..Default::default()
    });

    let html = body_string(app(backend.clone()).oneshot(get("/", None)).await.unwrap()).await;
    assert_eq!(html.matches("data-plan-id=").count(), 2);
    assert_eq!(html.matches("href=\"/sign-in?redirect=pricing\"").count(), 2);

    let invocations = backend.invocations.lock().unwrap();
    assert_eq!(invocations.len(), 1);
    assert_eq!(invocations[0].0, GET_PLANS_FUNCTION);
    assert_eq!(invocations[0].2, None);
}

#[tokio::test]
async fn test_signed_in_cards_start_checkout() {
    let backend = Arc::new(FakeBackend {
        user: Some(user()),
        plans: Some(plans_payload(&["price_basic", "price_pro", "price_studio"])),
        ..Default::default()
    });
    let cookie = session_cookie(VALID_TOKEN);

    let response = app(backend.clone()).oneshot(get("/", Some(&cookie))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert_eq!(html.matches("data-plan-id=").count(), 3);
    assert_eq!(html.matches("action=\"/api/checkout\"").count(), 3);
    assert!(!html.contains("href=\"/sign-up\""));

    assert_eq!(*backend.user_lookups.lock().unwrap(), 1);
    // Plans are public, the session never goes along
    let invocations = backend.invocations.lock().unwrap();
    assert_eq!(invocations[0].0, GET_PLANS_FUNCTION);
    assert_eq!(invocations[0].2, None);
}

#[tokio::test]
async fn test_expired_session_renders_signed_out() {
    let backend = Arc::new(FakeBackend {
        user: Some(user()),
        plans: Some(plans_payload(&["price_basic"])),
        ..Default::default()
    });
    let cookie = session_cookie("expired-token");

    let html = body_string(app(backend).oneshot(get("/", Some(&cookie))).await.unwrap()).await;
    assert!(html.contains("href=\"/sign-up\""));
    assert_eq!(html.matches("href=\"/sign-in?redirect=pricing\"").count(), 1);
}

#[tokio::test]
async fn test_expired_session_still_shows_every_plan() {
    let backend = Arc::new(FakeBackend {
        user: Some(user()),
        plans: Some(plans_payload(&["price_basic", "price_pro", "price_studio"])),
        ..Default::default()
    });
    let cookie = session_cookie("expired-token");

    let response = app(backend.clone()).oneshot(get("/", Some(&cookie))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert_eq!(html.matches("data-plan-id=").count(), 3);
    assert_eq!(html.matches("href=\"/sign-in?redirect=pricing\"").count(), 3);

    assert_eq!(*backend.user_lookups.lock().unwrap(), 1);
    let invocations = backend.invocations.lock().unwrap();
    assert_eq!(invocations.len(), 1);
    assert_eq!(invocations[0].2, None);
}

#[tokio::test]
async fn test_user_lookup_failure_renders_signed_out() {
    let backend = Arc::new(FakeBackend {
        user_fails: true,
        plans: Some(plans_payload(&["price_basic"])),
        ..Default::default()
    });
    let cookie = session_cookie(VALID_TOKEN);

    let response = app(backend).oneshot(get("/", Some(&cookie))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert!(html.contains("href=\"/sign-up\""));
    assert_eq!(html.matches("data-plan-id=").count(), 1);
}

#[tokio::test]
async fn test_malformed_plans_are_skipped() {
    let backend = Arc::new(FakeBackend {
        plans: Some(json!({
            "items": [
                { "id": "price_basic", "amount": 2990, "currency": "brl" },
                { "id": "price_basic", "amount": 100, "currency": "brl" },
                { "name": "no id", "amount": 100, "currency": "brl" },
                { "id": "price_pro", "amount": "lots", "currency": "brl" },
            ]
        })),
        ..Default::default()
    });

    let html = body_string(app(backend).oneshot(get("/", None)).await.unwrap()).await;
    assert_eq!(html.matches("data-plan-id=").count(), 1);
    assert!(html.contains("R$ 29,90"));
}

#[tokio::test]
async fn test_ping() {
    let backend = Arc::new(FakeBackend::default());

    let response = app(backend).oneshot(get("/api/ping", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "null");
}
