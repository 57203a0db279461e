use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use super::icons::Sprout;

#[component]
pub fn Navbar() -> impl IntoView {
    let location = use_location();
    let pathname = move || location.pathname.get();

    let link_class = move |href: &'static str| {
        move || {
            if pathname() == href {
                "text-sm font-medium transition-colors text-white"
            } else {
                "text-sm font-medium transition-colors text-gray-400 hover:text-white"
            }
        }
    };

    view! {
        <header class="fixed top-0 left-0 right-0 z-50 bg-gray-950/80 backdrop-blur-md border-b border-gray-800">
            <div class="max-w-7xl mx-auto px-6 h-16 flex items-center justify-between">
                <A href="/pdd_home" attr:class="flex items-center space-x-2 group">
                    <Sprout class="w-8 h-8 text-green-500 group-hover:scale-110 transition-transform" />
                    <span class="font-bold text-white text-lg tracking-tight">
                        "RiceGenie"
                    </span>
                </A>

                <nav class="hidden md:flex items-center space-x-8">
                    <A href="/pdd_home" attr:class=link_class("/pdd_home")>
                        "Home"
                    </A>
                    <A href="/detect" attr:class=link_class("/detect")>
                        "Detect"
                    </A>
                    <A href="/disease" attr:class=link_class("/disease")>
                        "Diseases"
                    </A>
                </nav>
            </div>
        </header>
    }
}
