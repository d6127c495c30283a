use leptos::{component, view, CollectView, IntoView};
use shared::{
    api::{Object, Page},
    model::{Icon, PlanItem, User},
};

use super::IconView;

#[component]
pub fn PricingCard(item: PlanItem, user: Option<User>) -> impl IntoView {
    // Signed out visitors are sent to sign in first, then back to the plans
    let action = match user {
        Some(_) => view! {
            <form method="post" action=Object::Checkout.path()>
                <input type="hidden" name="price_id" value=item.id.clone()/>
                <button
                    type="submit"
                    class="w-full py-3 px-4 text-white bg-blue-600 rounded-lg hover:bg-blue-700 font-medium"
                >
                    "Assinar"
                </button>
            </form>
        }
        .into_view(),
        None => view! {
            <a
                href=Page::sign_in_to_pricing()
                class="block w-full py-3 px-4 text-center text-white bg-blue-600 rounded-lg hover:bg-blue-700 font-medium"
            >
                "Entrar para assinar"
            </a>
        }
        .into_view(),
    };

    let class = if item.popular {
        "pricing-card relative p-8 bg-white rounded-xl border-2 border-blue-600 shadow-lg"
    } else {
        "pricing-card relative p-8 bg-white rounded-xl border border-gray-200 shadow-sm"
    };

    let badge = item.popular.then(|| {
        view! {
            <span class="absolute -top-3 left-1/2 -translate-x-1/2 px-3 py-1 text-xs font-medium text-white bg-blue-600 rounded-full">
                "Mais popular"
            </span>
        }
    });

    let features = item
        .features
        .iter()
        .cloned()
        .map(|feature| {
            view! {
                <li class="flex items-center gap-2">
                    <IconView icon=Icon::CheckCircle class="w-5 h-5 text-green-500"/>
                    <span>{feature}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class=class data-plan-id=item.id.clone()>
            {badge}
            <h3 class="text-xl font-semibold mb-2">{item.display_name().to_string()}</h3>
            <div class="mb-6">
                <span class="text-4xl font-bold">{item.display_price()}</span>
                <span class="text-gray-600">"/" {item.display_interval().to_string()}</span>
            </div>
            <ul class="space-y-3 mb-8 text-gray-600">
                {features}
            </ul>
            {action}
        </div>
    }
}
