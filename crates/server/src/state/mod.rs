mod args;
pub use args::*;

mod backend;
pub use backend::*;

use std::sync::Arc;

use anyhow::Context;

use crate::{backend::Backend, cli::Cli, SessionCookie};

/// Shared by every request. Nothing in here is mutated after startup
#[derive(Debug, Clone)]
pub struct AppState {
    pub args: Arc<Cli>,
    pub backend: Arc<dyn Backend>,
    pub session_cookie: SessionCookie,
}

impl AppState {
    pub fn new(args: Cli, backend: Arc<dyn Backend>) -> Result<Self, anyhow::Error> {
        let session_cookie = match &args.auth_cookie_name {
            Some(name) => SessionCookie::new(name),
            None => SessionCookie::for_project_url(&args.supabase_url).with_context(|| {
                format!("Deriving the auth cookie name from {:?}", args.supabase_url)
            })?,
        };

        Ok(Self { args: Arc::new(args), backend, session_cookie })
    }
}
