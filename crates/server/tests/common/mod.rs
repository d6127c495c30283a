#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{async_trait, body::Body, http::Request, http::StatusCode, Router};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use clap::Parser;
use serde_json::{json, Value};
use server::{
    backend::{Backend, BackendError},
    cli::Cli,
    AccessToken, AppState,
};
use shared::{
    api::{CREATE_CHECKOUT_FUNCTION, GET_PLANS_FUNCTION},
    model::User,
};
use uuid::Uuid;

pub const SUPABASE_URL: &str = "https://project.supabase.co";
pub const COOKIE_NAME: &str = "sb-project-auth-token";
pub const VALID_TOKEN: &str = "valid-token";

/// In-memory stand-in for the hosted platform
#[derive(Debug, Default)]
pub struct FakeBackend {
    pub user: Option<User>,
    pub user_fails: bool,
    /// Payload returned by get-plans, `None` makes the call fail
    pub plans: Option<Value>,
    /// Payload returned by create-checkout, `None` makes the call fail
    pub checkout: Option<Value>,
    pub user_lookups: Mutex<usize>,
    pub invocations: Mutex<Vec<(String, Value, Option<String>)>>,
}

fn unauthorized(url: &str) -> BackendError {
    BackendError::Status {
        url: url.to_string(),
        status: StatusCode::UNAUTHORIZED,
        body: r#"{"msg":"Invalid JWT"}"#.to_string(),
    }
}

fn unavailable(url: &str) -> BackendError {
    BackendError::Status {
        url: url.to_string(),
        status: StatusCode::SERVICE_UNAVAILABLE,
        body: "unavailable".to_string(),
    }
}

#[async_trait]
impl Backend for FakeBackend {
    async fn current_user(&self, token: &AccessToken) -> Result<Option<User>, BackendError> {
        *self.user_lookups.lock().unwrap() += 1;

        if self.user_fails {
            return Err(unavailable("/auth/v1/user"));
        }
        if token.secret() != VALID_TOKEN {
            return Ok(None);
        }
        Ok(self.user.clone())
    }

    async fn invoke(
        &self,
        function: &str,
        body: &Value,
        token: Option<&AccessToken>,
    ) -> Result<Value, BackendError> {
        self.invocations.lock().unwrap().push((
            function.to_string(),
            body.clone(),
            token.map(|t| t.secret().to_string()),
        ));

        // The functions gateway verifies whatever bearer it is given
        if token.is_some_and(|t| t.secret() != VALID_TOKEN) {
            return Err(unauthorized(function));
        }

        match function {
            GET_PLANS_FUNCTION => self.plans.clone().ok_or_else(|| unavailable(function)),
            CREATE_CHECKOUT_FUNCTION => self.checkout.clone().ok_or_else(|| unavailable(function)),
            _ => Err(unavailable(function)),
        }
    }
}

pub fn user() -> User {
    User { id: Uuid::new_v4(), email: Some("writer@example.com".into()), created_at: None }
}

pub fn plans_payload(ids: &[&str]) -> Value {
    json!({
        "items": ids
            .iter()
            .map(|id| json!({ "id": id, "name": format!("Plan {id}"), "amount": 2990, "currency": "brl" }))
            .collect::<Vec<_>>()
    })
}

pub fn app(backend: Arc<FakeBackend>) -> Router {
    let args = Cli::parse_from([
        "server",
        "--supabase-url",
        SUPABASE_URL,
        "--supabase-anon-key",
        "anon-key",
        "--site-url",
        "https://door.example.com/",
    ]);
    let state = AppState::new(args, backend).unwrap();
    server::app(state)
}

pub fn session_cookie(token: &str) -> String {
    let session = json!({ "access_token": token, "refresh_token": "refresh" }).to_string();
    format!("{COOKIE_NAME}=base64-{}", URL_SAFE_NO_PAD.encode(session))
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::get(uri);
    if let Some(cookie) = cookie {
        builder = builder.header("cookie", cookie);
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
