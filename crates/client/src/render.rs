use leptos::view;
use shared::{
    api::STYLESHEET_PATH,
    model::{PlanList, User},
};
use tracing::debug;

use crate::HomePage;

pub const PAGE_TITLE: &str = "DOOR - Roteiros com Inteligência Artificial";

/// Render the full landing page document
///
/// Pure: the same user and plans always produce the same bytes
pub fn render_home_page(user: Option<User>, plans: PlanList) -> String {
    debug!("render_home_page(user: {}, plans: {})", user.is_some(), plans.len());

    let body = leptos::ssr::render_to_string(move || view! { <HomePage user=user plans=plans/> });

    format!(
        concat!(
            "<!DOCTYPE html>",
            "<html lang=\"pt-BR\">",
            "<head>",
            "<meta charset=\"utf-8\"/>",
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"/>",
            "<meta name=\"description\" content=\"Crie roteiros profissionais conversando com uma IA especializada em narrativas.\"/>",
            "<title>{title}</title>",
            "<link rel=\"stylesheet\" href=\"{stylesheet}\"/>",
            "</head>",
            "<body>{body}</body>",
            "</html>"
        ),
        title = PAGE_TITLE,
        stylesheet = STYLESHEET_PATH,
        body = body,
    )
}
