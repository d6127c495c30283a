use leptos::{component, view, IntoView};
use shared::model::{PlanList, User};

use crate::components::{CallToAction, FeatureGrid, Footer, Hero, Navbar, PricingSection, Steps};

/// The landing page. Section order is fixed, only the navbar and the pricing
/// cards depend on the user and the plans
#[component]
pub fn HomePage(user: Option<User>, plans: PlanList) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gradient-to-b from-white to-gray-50">
            <Navbar user=user.clone()/>
            <Hero/>
            <FeatureGrid/>
            <Steps/>
            <PricingSection user=user plans=plans/>
            <CallToAction/>
            <Footer/>
        </div>
    }
}
