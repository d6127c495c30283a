use std::{convert::Infallible, fmt, ops::Deref, sync::Arc};

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::extract::CookieJar;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use percent_encoding::percent_decode_str;
use reqwest::Url;
use serde_json::Value;
use tracing::debug;

use crate::AppState;

/// Large sessions are split over `<name>.0`, `<name>.1`, ... cookies
const MAX_COOKIE_CHUNKS: usize = 32;
const BASE64_PREFIX: &str = "base64-";

/// Bearer token of the signed in user's session
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new<S: Into<String>>(token: S) -> Self {
        Self(token.into())
    }

    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(..)")
    }
}

/// Name of the cookie the auth session is stored under
#[derive(Debug, Clone)]
pub struct SessionCookie(Arc<str>);

impl SessionCookie {
    pub fn new<S: AsRef<str>>(name: S) -> Self {
        Self(name.as_ref().into())
    }

    /// `sb-<project ref>-auth-token`, the ref being the first label of the
    /// project host
    pub fn for_project_url(url: &str) -> Option<Self> {
        let url = Url::parse(url).ok()?;
        let project_ref = url.host_str()?.split('.').next()?;
        Some(Self::new(format!("sb-{project_ref}-auth-token")))
    }
}

impl Deref for SessionCookie {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRef<AppState> for SessionCookie {
    fn from_ref(state: &AppState) -> Self {
        state.session_cookie.clone()
    }
}

/// Read the session cookie (whole or chunked) from the jar
fn session_cookie_value(jar: &CookieJar, name: &str) -> Option<String> {
    if let Some(cookie) = jar.get(name) {
        return Some(cookie.value().to_string());
    }

    let mut value = String::new();
    for chunk in 0..MAX_COOKIE_CHUNKS {
        match jar.get(&format!("{name}.{chunk}")) {
            Some(cookie) => value.push_str(cookie.value()),
            None => break,
        }
    }

    (!value.is_empty()).then_some(value)
}

/// Pull the access token out of a stored session. The session is json,
/// either base64url encoded behind a `base64-` prefix or uri encoded. Older
/// clients stored a `[access_token, refresh_token, ..]` array instead of an
/// object
pub fn decode_session(raw: &str) -> Option<AccessToken> {
    let json = match raw.strip_prefix(BASE64_PREFIX) {
        Some(encoded) => {
            let bytes = URL_SAFE_NO_PAD.decode(encoded.trim_end_matches('=')).ok()?;
            String::from_utf8(bytes).ok()?
        },
        None => percent_decode_str(raw).decode_utf8().ok()?.into_owned(),
    };

    let session: Value = serde_json::from_str(&json).ok()?;
    let token = match &session {
        Value::Object(o) => o.get("access_token"),
        Value::Array(a) => a.first(),
        _ => None,
    }?
    .as_str()?;

    (!token.is_empty()).then(|| AccessToken::new(token))
}

pub fn access_token_from_jar(jar: &CookieJar, cookie_name: &str) -> Option<AccessToken> {
    let raw = session_cookie_value(jar, cookie_name)?;
    let token = decode_session(&raw);
    if token.is_none() {
        debug!("Ignoring undecodable session cookie {cookie_name}");
    }
    token
}

/// The request's session, `None` when signed out
#[derive(Debug, Clone)]
pub struct SessionToken(pub Option<AccessToken>);

#[async_trait]
impl<S> FromRequestParts<S> for SessionToken
where
    S: Send + Sync,
    SessionCookie: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let cookie_name = SessionCookie::from_ref(state);
        let jar = CookieJar::from_headers(&parts.headers);
        Ok(SessionToken(access_token_from_jar(&jar, &cookie_name)))
    }
}
