use leptos::{component, view, CollectView, IntoView};
use shared::model::{StepDescriptor, STEPS};

use super::{Container, SectionHeader};

/// The "how it works" walkthrough
#[component]
pub fn Steps() -> impl IntoView {
    let steps = STEPS.iter().map(|step| view! { <StepCard step=*step/> }).collect_view();

    view! {
        <section id="how-it-works" class="py-20 bg-gray-50">
            <Container>
                <SectionHeader
                    title="Como Funciona"
                    subtitle="Três passos simples para criar roteiros incríveis com nossa IA"
                />
                <div class="grid md:grid-cols-3 gap-8 max-w-5xl mx-auto">
                    {steps}
                </div>
            </Container>
        </section>
    }
}

#[component]
fn StepCard(step: StepDescriptor) -> impl IntoView {
    view! {
        <div class="step-card bg-white p-8 rounded-xl shadow-sm text-center">
            <div class="w-12 h-12 bg-blue-100 text-blue-600 rounded-full flex items-center justify-center mx-auto mb-4 text-xl font-bold">
                {step.ordinal}
            </div>
            <h3 class="text-xl font-semibold mb-3">{step.title}</h3>
            <p class="text-gray-600">{step.description}</p>
        </div>
    }
}
