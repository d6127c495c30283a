use leptos::{component, view, Children, IntoView};

/// Centered, padded column every section body lives in
#[component]
pub fn Container(
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!("container mx-auto px-4 {class}")>
            {children()}
        </div>
    }
}
