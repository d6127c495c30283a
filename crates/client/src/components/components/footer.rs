use leptos::{component, view, IntoView};
use shared::api::{Page, PRICING_ANCHOR};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-50 border-t border-gray-200">
            <div class="container mx-auto px-4 py-12 flex flex-col md:flex-row justify-between items-center gap-4">
                <ul class="flex gap-6 text-sm text-gray-600">
                    <li><a href="#features">"Recursos"</a></li>
                    <li><a href=format!("#{PRICING_ANCHOR}")>"Planos"</a></li>
                    <li><a href=Page::Dashboard.path()>"Dashboard"</a></li>
                </ul>
                <small class="text-gray-500">
                    {format!("© DOOR. Todos os direitos reservados. Versão {}", env!("CARGO_PKG_VERSION"))}
                </small>
            </div>
        </footer>
    }
}
