use leptos::{component, view, CollectView, IntoView};
use shared::model::{FeatureDescriptor, FEATURES};

use super::{Container, IconView, SectionHeader};

#[component]
pub fn FeatureGrid() -> impl IntoView {
    let cards = FEATURES
        .iter()
        .map(|feature| view! { <FeatureCard feature=*feature/> })
        .collect_view();

    view! {
        <section id="features" class="py-24 bg-white">
            <Container>
                <SectionHeader
                    title="Por que escolher DOOR"
                    subtitle="Revolucionamos a criação de roteiros com nossa IA especializada, oferecendo uma experiência intuitiva e resultados excepcionais."
                />
                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                    {cards}
                </div>
            </Container>
        </section>
    }
}

#[component]
fn FeatureCard(feature: FeatureDescriptor) -> impl IntoView {
    view! {
        <div class="feature-card p-6 bg-white rounded-xl shadow-sm hover:shadow-md transition-shadow">
            <div class="text-blue-600 mb-4">
                <IconView icon=feature.icon class="w-6 h-6"/>
            </div>
            <h3 class="text-xl font-semibold mb-2">{feature.title}</h3>
            <p class="text-gray-600">{feature.description}</p>
        </div>
    }
}
