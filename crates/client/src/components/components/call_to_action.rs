use leptos::{component, view, IntoView};
use shared::{api::Page, model::Icon};

use super::{Container, IconView};

#[component]
pub fn CallToAction() -> impl IntoView {
    view! {
        <section id="cta" class="py-20 bg-gray-50">
            <Container class="text-center">
                <h2 class="text-3xl font-bold mb-4">"Pronto para Criar Roteiros Incríveis?"</h2>
                <p class="text-gray-600 mb-8 max-w-2xl mx-auto">
                    "Junte-se a centenas de roteiristas que já transformaram suas ideias em histórias cativantes."
                </p>
                <a
                    href=Page::Dashboard.path()
                    class="inline-flex items-center px-6 py-3 text-white bg-blue-600 rounded-lg hover:bg-blue-700 transition-colors"
                >
                    "Começar Agora"
                    <IconView icon=Icon::ArrowUpRight class="ml-2 w-4 h-4"/>
                </a>
            </Container>
        </section>
    }
}
