use axum::response::Html;
use serde_json::json;
use shared::model::{PlanList, User};
use tracing::{debug, instrument, warn};

use crate::{backend::Backend, AccessToken, Args, BackendClient, SessionToken};

/// Render the landing page
///
/// The user lookup and the plan fetch are independent so they run
/// concurrently. Either failing degrades that part of the page (signed out,
/// no pricing cards) rather than failing the request. Plans are public and
/// fetched with the anon key, so a stale session can't hide the cards
#[instrument(skip_all)]
pub async fn home(
    backend: BackendClient,
    args: Args,
    SessionToken(token): SessionToken,
) -> Html<String> {
    let (user, plans) = tokio::join!(
        current_user(&*backend, token.as_ref()),
        plans(&*backend, &args.plans_function),
    );

    Html(client::render_home_page(user, plans))
}

async fn current_user(backend: &dyn Backend, token: Option<&AccessToken>) -> Option<User> {
    let Some(token) = token else {
        debug!("No session cookie, rendering signed out");
        return None;
    };

    match backend.current_user(token).await {
        Ok(user) => user,
        Err(e) => {
            warn!("Failed to fetch the current user, rendering signed out: {e}");
            None
        },
    }
}

async fn plans(backend: &dyn Backend, function: &str) -> PlanList {
    match backend.invoke(function, &json!({}), None).await {
        Ok(payload) => {
            let plans = PlanList::from_payload(&payload);
            debug!("Fetched {} plans", plans.len());
            plans
        },
        Err(e) => {
            warn!("Failed to fetch plans, rendering without pricing cards: {e}");
            PlanList::default()
        },
    }
}
