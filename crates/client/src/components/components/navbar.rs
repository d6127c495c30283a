use leptos::{component, view, IntoView};
use shared::{
    api::{Page, PRICING_ANCHOR},
    model::User,
};

#[component]
pub fn Navbar(user: Option<User>) -> impl IntoView {
    let links = match user {
        Some(_) => view! {
            <a
                href=Page::Dashboard.path()
                class="px-4 py-2 text-sm font-medium text-white bg-blue-600 rounded-md hover:bg-blue-700"
            >
                "Dashboard"
            </a>
        }
        .into_view(),
        None => view! {
            <a
                href=Page::SignIn.path()
                class="px-4 py-2 text-sm font-medium text-gray-700 hover:text-gray-900"
            >
                "Entrar"
            </a>
            <a
                href=Page::SignUp.path()
                class="px-4 py-2 text-sm font-medium text-white bg-blue-600 rounded-md hover:bg-blue-700"
            >
                "Cadastrar"
            </a>
        }
        .into_view(),
    };

    view! {
        <nav class="w-full border-b border-gray-200 bg-white py-2">
            <div class="container mx-auto px-4 flex justify-between items-center">
                <a href=Page::Home.path() class="text-xl font-bold">
                    "DOOR"
                </a>
                <div class="flex gap-4 items-center">
                    <a
                        href=format!("#{PRICING_ANCHOR}")
                        class="text-sm font-medium text-gray-700 hover:text-gray-900"
                    >
                        "Planos"
                    </a>
                    {links}
                </div>
            </div>
        </nav>
    }
}
