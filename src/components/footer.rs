use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-gray-900 bg-gray-950 py-10 mt-auto">
            <div class="max-w-7xl mx-auto px-6 flex flex-col md:flex-row justify-between items-center text-gray-500 text-sm">
                <p>"\u{00A9} 2026 RiceGenie. Field diagnoses are advisory only."</p>
                <p class="mt-4 md:mt-0">
                    "Consult an agricultural expert before applying treatments."
                </p>
            </div>
        </footer>
    }
}
