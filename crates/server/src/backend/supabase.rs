use std::{fmt, time::Duration};

use axum::async_trait;
use reqwest::{header::CONTENT_TYPE, Client, Response, StatusCode};
use serde_json::Value;
use shared::model::User;
use tracing::{debug, instrument};

use super::{Backend, BackendError};
use crate::AccessToken;

/// Set by the functions relay when the function itself could not be reached
const RELAY_ERROR_HEADER: &str = "x-relay-error";

/// Talks to a supabase project over its REST endpoints
#[derive(Clone)]
pub struct SupabaseBackend {
    client: Client,
    url: String,
    anon_key: String,
}

impl SupabaseBackend {
    pub fn new(url: &str, anon_key: &str, timeout: Duration) -> Result<Self, BackendError> {
        // One client for the whole process so connections are pooled
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(url, anon_key, client))
    }

    pub fn with_client(url: &str, anon_key: &str, client: Client) -> Self {
        Self { client, url: url.trim_end_matches('/').to_string(), anon_key: anon_key.to_string() }
    }

    pub fn user_url(&self) -> String {
        format!("{}/auth/v1/user", self.url)
    }

    pub fn function_url(&self, function: &str) -> String {
        format!("{}/functions/v1/{function}", self.url)
    }

    async fn status_error(url: String, response: Response) -> BackendError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        BackendError::Status { url, status, body }
    }
}

impl fmt::Debug for SupabaseBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SupabaseBackend").field("url", &self.url).finish_non_exhaustive()
    }
}

fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<mime::Mime>().ok())
        .is_some_and(|m| m.essence_str() == mime::APPLICATION_JSON.essence_str())
}

#[async_trait]
impl Backend for SupabaseBackend {
    #[instrument(skip_all)]
    async fn current_user(&self, token: &AccessToken) -> Result<Option<User>, BackendError> {
        let url = self.user_url();
        let response = self
            .client
            .get(&url)
            .header("apikey", &self.anon_key)
            .bearer_auth(token.secret())
            .send()
            .await?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                debug!("Session token rejected, treating as signed out");
                Ok(None)
            },
            status if !status.is_success() => Err(Self::status_error(url, response).await),
            _ => {
                let bytes = response.bytes().await?;
                Ok(Some(serde_json::from_slice(&bytes)?))
            },
        }
    }

    #[instrument(skip(self, body, token))]
    async fn invoke(
        &self,
        function: &str,
        body: &Value,
        token: Option<&AccessToken>,
    ) -> Result<Value, BackendError> {
        let url = self.function_url(function);
        let bearer = token.map(AccessToken::secret).unwrap_or(self.anon_key.as_str());

        let response = self
            .client
            .post(&url)
            .header("apikey", &self.anon_key)
            .bearer_auth(bearer)
            .json(body)
            .send()
            .await?;

        let relay_error = response
            .headers()
            .get(RELAY_ERROR_HEADER)
            .is_some_and(|v| v.as_bytes().eq_ignore_ascii_case(b"true"));
        if relay_error {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Relay { function: function.to_string(), body });
        }

        if !response.status().is_success() {
            return Err(Self::status_error(url, response).await);
        }

        let json = is_json(&response);
        let bytes = response.bytes().await?;
        debug!("{function} returned {} bytes (json: {json})", bytes.len());

        if bytes.is_empty() {
            Ok(Value::Null)
        } else if json {
            Ok(serde_json::from_slice(&bytes)?)
        } else {
            Ok(Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        }
    }
}
