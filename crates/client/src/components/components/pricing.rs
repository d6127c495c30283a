use leptos::{component, view, CollectView, IntoView};
use shared::{
    api::PRICING_ANCHOR,
    model::{PlanList, User},
};

use super::{Container, PricingCard, SectionHeader};

/// One card per plan, in the order the plans were fetched. No plans leaves
/// the grid empty
#[component]
pub fn PricingSection(user: Option<User>, plans: PlanList) -> impl IntoView {
    let cards = plans
        .into_iter()
        .map(move |item| view! { <PricingCard item=item user=user.clone()/> })
        .collect_view();

    view! {
        <section id=PRICING_ANCHOR class="py-24 bg-white">
            <Container>
                <SectionHeader
                    title="Planos de Assinatura"
                    subtitle="Escolha o plano ideal para suas necessidades de criação de roteiros."
                />
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8 max-w-5xl mx-auto">
                    {cards}
                </div>
            </Container>
        </section>
    }
}
