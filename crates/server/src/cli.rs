use std::path::PathBuf;

use clap::Parser;
use shared::api::{CREATE_CHECKOUT_FUNCTION, GET_PLANS_FUNCTION};

#[derive(Debug, Clone, Parser)]
#[clap(name = "door server")]
pub struct Cli {
    #[clap(long, env, default_value = "assets")]
    pub assets_dir: PathBuf,
    #[clap(long, env, default_value = "8080")]
    pub port: u16,
    #[clap(long, env, default_value = "127.0.0.1")]
    pub bind_addr: String,
    /// Public origin of this site, used to build the checkout return url
    #[arg(long, env, default_value = "http://localhost:8080")]
    pub site_url: String,
    /// Base url of the auth provider / hosted functions, e.g. https://<ref>.supabase.co
    #[arg(long, env)]
    pub supabase_url: String,
    #[arg(long, env)]
    pub supabase_anon_key: String,
    #[arg(long, env, default_value = GET_PLANS_FUNCTION)]
    pub plans_function: String,
    #[arg(long, env, default_value = CREATE_CHECKOUT_FUNCTION)]
    pub checkout_function: String,
    #[arg(long, env, default_value = "10")]
    pub backend_timeout_secs: u64,
    /// Name of the cookie holding the auth session. Defaults to
    /// `sb-<project ref>-auth-token` where the ref is the first label of the
    /// supabase host
    #[arg(long, env)]
    pub auth_cookie_name: Option<String>,
}
