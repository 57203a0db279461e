pub mod api;
pub mod components;
pub mod config;
pub mod data;
pub mod error;
pub mod handoff;
pub mod model;
pub mod pages;
pub mod workflow;

use api::ApiClient;
use components::footer::Footer;
use components::navbar::Navbar;
use config::Config;
use handoff::HandoffStore;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;
use pages::detect::Detect;
use pages::diseases::Diseases;
use pages::home::Home;
use pages::treatment::Treatment;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = Config::load();
    log::debug!("backend base URL: {}", config.api_base);
    provide_context(ApiClient::new(&config));
    provide_context(HandoffStore::new());

    view! {
        <Router>
            <ScrollToTop />
            <Title text="RiceGenie | Paddy Disease Detection" />
            <div class="flex flex-col min-h-screen bg-gray-950 text-gray-200 selection:bg-green-500/30 font-sans">
                <Navbar />
                <main class="flex-1">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=|| view! { <Redirect path="/pdd_home" /> } />
                        <Route path=path!("/pdd_home") view=Home />
                        <Route path=path!("/detect") view=Detect />
                        <Route path=path!("/treatment") view=Treatment />
                        <Route path=path!("/disease") view=Diseases />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="pt-40 pb-24 text-center">
            <h1 class="text-5xl font-black text-white mb-4">"404"</h1>
            <p class="text-gray-400">"Page not found."</p>
        </div>
    }
}

#[component]
fn ScrollToTop() -> impl IntoView {
    let location = use_location();

    Effect::new(move || {
        let _ = location.pathname.get();
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    ()
}
