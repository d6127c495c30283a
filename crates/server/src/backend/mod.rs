//! The hosted platform the page depends on: the auth provider that knows who
//! the current user is, and the named functions it hosts (plans, checkout)

use std::fmt::Debug;

use axum::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use shared::model::User;
use thiserror::Error;

use crate::AccessToken;

mod supabase;
pub use supabase::*;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("{url} responded {status}: {body}")]
    Status { url: String, status: StatusCode, body: String },
    #[error("relay error invoking {function}: {body}")]
    Relay { function: String, body: String },
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

#[async_trait]
pub trait Backend: Debug + Send + Sync {
    /// The user the token belongs to. An expired or revoked token is `None`,
    /// not an error
    async fn current_user(&self, token: &AccessToken) -> Result<Option<User>, BackendError>;

    /// Invoke a hosted function with a json body, as the user when a token is
    /// given and anonymously otherwise
    async fn invoke(
        &self,
        function: &str,
        body: &Value,
        token: Option<&AccessToken>,
    ) -> Result<Value, BackendError>;
}
