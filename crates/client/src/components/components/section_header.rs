use leptos::{component, view, IntoView};

#[component]
pub fn SectionHeader(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="text-center mb-16">
            <h2 class="text-3xl font-bold mb-4">{title}</h2>
            <p class="text-gray-600 max-w-2xl mx-auto">{subtitle}</p>
        </div>
    }
}
