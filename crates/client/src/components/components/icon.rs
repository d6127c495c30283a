use leptos::{component, view, CollectView, IntoView};
use shared::model::Icon;

#[component]
pub fn IconView(icon: Icon, #[prop(optional)] class: &'static str) -> impl IntoView {
    let paths = icon.paths().iter().copied().map(|d| view! { <path d=d /> }).collect_view();

    view! {
        <svg
            class=class
            data-icon=icon.name()
            xmlns="http://www.w3.org/2000/svg"
            width="24"
            height="24"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            {paths}
        </svg>
    }
}
