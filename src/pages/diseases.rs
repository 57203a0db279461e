//! Static disease encyclopedia.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::icons::AlertCircle;
use crate::data::disease_entries;

#[component]
pub fn Diseases() -> impl IntoView {
    let entries = disease_entries();

    view! {
        <Title text="Pre-Harvesting Diseases | RiceGenie" />
        <div class="min-h-screen pt-28 pb-24 px-6">
            <div class="max-w-5xl mx-auto space-y-8">
                <h2 class="text-2xl font-bold text-center text-white">"Pre-Harvesting Diseases"</h2>
                {entries.into_iter().map(|entry| {
                    view! {
                        <div class="bg-gray-900 rounded-lg shadow-lg overflow-hidden hover:shadow-xl transition-shadow">
                            <div class="grid md:grid-cols-12 gap-6">
                                <div class="relative overflow-hidden md:col-span-5">
                                    <img
                                        src=entry.image
                                        alt=entry.title
                                        class="w-full h-full min-h-[220px] object-cover"
                                    />
                                </div>

                                <div class="p-6 flex flex-col md:col-span-7">
                                    <div class="flex items-center gap-2 mb-4">
                                        {(entry.icon)()}
                                        <h3 class="text-2xl font-bold text-white">{entry.title}</h3>
                                    </div>

                                    <p class="text-gray-400 leading-relaxed">{entry.description}</p>

                                    <div class="mt-4 flex items-start gap-2">
                                        <AlertCircle class="w-5 h-5 text-yellow-500 mt-1 shrink-0" />
                                        <p class="text-sm text-gray-500">
                                            "Early detection and proper management practices are crucial for controlling this disease."
                                        </p>
                                    </div>
                                </div>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
