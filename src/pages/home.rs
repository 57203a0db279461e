use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::components::icons::{ChevronRight, Sprout};

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <Title text="RiceGenie | Paddy Disease Detection" />
        <div class="relative min-h-screen overflow-hidden">
            <div class="absolute top-0 left-1/2 -translate-x-1/2 w-[800px] h-[500px] bg-green-600/10 blur-[120px] rounded-full pointer-events-none"></div>

            <div class="relative z-10 flex flex-col justify-center pt-32 pb-24 px-6 md:px-20 text-white">
                <h2 class="text-lg tracking-widest uppercase mb-8 text-green-400">
                    "Welcome to RiceGenie"
                </h2>

                <h1 class="text-5xl md:text-7xl font-black max-w-4xl mb-2 uppercase tracking-tight flex items-center gap-4">
                    "Paddy Disease" <Sprout class="w-16 h-16 md:w-24 md:h-24 text-green-500" />
                </h1>
                <h1 class="text-5xl md:text-7xl font-black max-w-3xl mb-10 uppercase tracking-tight">
                    "Detection System"
                </h1>

                <p class="text-gray-400 max-w-2xl mb-14 leading-relaxed">
                    "Photograph a paddy leaf in the field, upload it, and get a disease "
                    "diagnosis with a confidence score in seconds. Each diagnosis comes "
                    "with brand-level treatment suggestions and a downloadable report you "
                    "can hand to your local agronomist."
                </p>

                <div class="flex flex-wrap gap-6">
                    <A
                        href="/detect"
                        attr:class="px-8 py-3 bg-green-600 text-white font-bold tracking-widest hover:bg-green-500 transition-colors flex items-center w-fit"
                    >
                        "Proceed"
                        <ChevronRight class="w-4 h-4 ml-1" />
                    </A>
                    <A
                        href="/disease"
                        attr:class="px-8 py-3 bg-gray-800 text-white font-bold tracking-widest border border-gray-700 hover:bg-gray-700 transition-colors w-fit"
                    >
                        "Pre-Harvesting Diseases"
                    </A>
                </div>
            </div>
        </div>
    }
}
