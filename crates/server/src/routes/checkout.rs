use axum::{
    http::{HeaderValue, StatusCode},
    response::Redirect,
    Form,
};
use serde::{Deserialize, Serialize};
use shared::api::Page;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{AppError, Args, BackendClient, SessionToken};

#[derive(Debug, Deserialize)]
pub struct CheckoutForm {
    pub price_id: String,
}

#[derive(Debug, Serialize)]
struct CheckoutRequest<'a> {
    price_id: &'a str,
    user_id: Uuid,
    return_url: String,
}

#[derive(Debug, Deserialize)]
struct CheckoutSession {
    url: String,
}

/// Start a checkout for the chosen plan and send the user to it. Signed out
/// visitors are sent to sign in first
#[instrument(skip_all)]
pub async fn checkout(
    backend: BackendClient,
    args: Args,
    SessionToken(token): SessionToken,
    Form(form): Form<CheckoutForm>,
) -> Result<Redirect, AppError> {
    let sign_in = Redirect::to(Page::sign_in_to_pricing());

    let Some(token) = token else {
        return Ok(sign_in);
    };
    let Some(user) = backend.current_user(&token).await.map_err(AppError::bad_gateway)? else {
        return Ok(sign_in);
    };

    let price_id = form.price_id.trim();
    if price_id.is_empty() {
        return Err(AppError::new(StatusCode::BAD_REQUEST, "Missing price_id"));
    }

    let request = CheckoutRequest {
        price_id,
        user_id: user.id,
        return_url: format!(
            "{}{}",
            args.site_url.trim_end_matches('/'),
            Page::Dashboard.path()
        ),
    };
    let body = serde_json::to_value(&request)?;

    let response = backend
        .invoke(&args.checkout_function, &body, Some(&token))
        .await
        .map_err(AppError::bad_gateway)?;

    let session: CheckoutSession = serde_json::from_value(response).map_err(|e| {
        AppError::new(StatusCode::BAD_GATEWAY, format!("Checkout session has no url: {e}"))
    })?;

    // Redirect::to panics on a url that can't be a Location header
    if HeaderValue::from_str(&session.url).is_err() {
        return Err(AppError::new(
            StatusCode::BAD_GATEWAY,
            format!("Checkout session url is not a valid location: {:?}", session.url),
        ));
    }

    info!(user_id = %user.id, price_id, "Redirecting to checkout");
    Ok(Redirect::to(&session.url))
}
