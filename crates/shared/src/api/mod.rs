use const_format::concatcp;

pub const API_BASE_PATH: &str = "/api/";
pub const ASSETS_PATH: &str = "/assets";
pub const STYLESHEET_PATH: &str = concatcp!(ASSETS_PATH, "/app.css");

/// Element id of the pricing section, used as the in-page navigation target
pub const PRICING_ANCHOR: &str = "pricing";

/// Hosted function returning `{ "items": [PlanItem] }`
pub const GET_PLANS_FUNCTION: &str = "supabase-functions-get-plans";
/// Hosted function returning `{ "url": "<checkout session url>" }`
pub const CREATE_CHECKOUT_FUNCTION: &str = "supabase-functions-create-checkout";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Page {
    Home,
    Dashboard,
    SignIn,
    SignUp,
}

impl Page {
    pub const fn path(&self) -> &'static str {
        use Page::*;
        match self {
            Home => "/",
            Dashboard => "/dashboard",
            SignIn => "/sign-in",
            SignUp => "/sign-up",
        }
    }

    /// Sign in, then come back to the pricing section
    pub const fn sign_in_to_pricing() -> &'static str {
        concatcp!("/sign-in?redirect=", PRICING_ANCHOR)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Object {
    Ping,
    Checkout,
}

impl Object {
    pub const fn path(&self) -> &'static str {
        use Object::*;
        match self {
            Ping => concatcp!(API_BASE_PATH, "ping"),
            Checkout => concatcp!(API_BASE_PATH, "checkout"),
        }
    }
}
