use std::{convert::Infallible, ops::Deref, sync::Arc};

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};

use crate::{backend::Backend, AppState};

/// Handle on the hosted platform for the duration of a request
#[derive(Debug, Clone)]
pub struct BackendClient(pub Arc<dyn Backend>);

impl Deref for BackendClient {
    type Target = dyn Backend;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl FromRef<AppState> for BackendClient {
    fn from_ref(state: &AppState) -> Self {
        // Arc clone, the underlying client is shared
        BackendClient(state.backend.clone())
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for BackendClient
where
    S: Send + Sync,
    BackendClient: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Ok(BackendClient::from_ref(state))
    }
}
