use leptos::{component, view, CollectView, IntoView};
use shared::{
    api::{Page, PRICING_ANCHOR},
    model::Icon,
};

use super::IconView;

const HIGHLIGHTS: [&str; 3] = [
    "Sem cartão de crédito para começar",
    "Roteiros em português",
    "Cancele quando quiser",
];

#[component]
pub fn Hero() -> impl IntoView {
    let highlights = HIGHLIGHTS
        .iter()
        .copied()
        .map(|text| {
            view! {
                <li class="flex items-center gap-2">
                    <IconView icon=Icon::CheckCircle class="w-5 h-5 text-green-500"/>
                    <span>{text}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <section class="relative overflow-hidden bg-white pt-24 pb-32">
            <div class="container mx-auto px-4 text-center max-w-4xl">
                <h1 class="text-5xl sm:text-6xl font-bold text-gray-900 mb-8 tracking-tight">
                    "Crie roteiros incríveis com "
                    <span class="text-blue-600">"Inteligência Artificial"</span>
                </h1>
                <p class="text-xl text-gray-600 mb-12 max-w-2xl mx-auto leading-relaxed">
                    "Transforme suas ideias em roteiros profissionais conversando com uma IA "
                    "especializada em narrativas."
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center items-center">
                    <a
                        href=Page::Dashboard.path()
                        class="inline-flex items-center px-8 py-4 text-white bg-blue-600 rounded-lg hover:bg-blue-700 text-lg font-medium"
                    >
                        "Comece a Criar"
                        <IconView icon=Icon::ArrowUpRight class="ml-2 w-5 h-5"/>
                    </a>
                    <a
                        href=format!("#{PRICING_ANCHOR}")
                        class="inline-flex items-center px-8 py-4 text-gray-700 bg-gray-100 rounded-lg hover:bg-gray-200 text-lg font-medium"
                    >
                        "Ver Planos"
                    </a>
                </div>
                <ul class="mt-16 flex flex-col sm:flex-row items-center justify-center gap-8 text-sm text-gray-600">
                    {highlights}
                </ul>
            </div>
        </section>
    }
}
