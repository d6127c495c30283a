use axum::{
    routing::{get, post},
    Router,
};
use shared::api::{Object, Page, ASSETS_PATH};
use tower_http::{
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

pub mod backend;
pub mod cli;
pub mod routes;

mod errors;
pub use errors::*;

mod session;
pub use session::*;

mod state;
pub use state::*;

/// Every route the site serves
pub fn app(state: AppState) -> Router {
    let assets = ServeDir::new(&state.args.assets_dir);

    Router::new()
        .route(Page::Home.path(), get(routes::home))
        .route(Object::Checkout.path(), post(routes::checkout))
        .route(Object::Ping.path(), get(routes::ping))
        .nest_service(ASSETS_PATH, assets)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
