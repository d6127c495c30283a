use std::path::PathBuf;

use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

pub mod api;
pub mod model;

/// Used when `RUST_LOG` is unset or can't be parsed: the page's own crates at
/// debug, request spans at info and everything else at warn
pub const DEFAULT_LOG_FILTER: &str = "warn,server=debug,client=debug,shared=debug,tower_http=info";

pub fn configure_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_line_number(true)
            .with_file(true)
            .with_span_events(FmtSpan::CLOSE)
            .finish(),
    )
    .expect("Failed to set default tracing subscriber");
}

/// Load `.env` from the working directory or its parents. Running without
/// one is normal in deployments, where the environment is set directly
pub fn load_dotenv() -> Result<Option<PathBuf>, dotenv::Error> {
    match dotenv::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(dotenv::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}
