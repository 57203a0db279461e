//! Treatment suggestions view, driven by the detection handoff.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;

use crate::api::{ApiClient, ReportRequest};
use crate::components::icons::{AlertCircle, Download, Leaf};
use crate::error::{Error, Result};
use crate::handoff::HandoffStore;
use crate::model::symptom_list;

const REPORT_FILENAME: &str = "prediction_report.pdf";

#[derive(Debug, Clone, PartialEq)]
enum DownloadState {
    Idle,
    Working,
    Saved,
    Failed(String),
}

#[component]
pub fn Treatment() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let handoff = expect_context::<HandoffStore>();
    let (download_state, set_download_state) = signal(DownloadState::Idle);

    let download_guide = move |_: MouseEvent| {
        if download_state.get_untracked() == DownloadState::Working {
            return;
        }
        let Some(payload) = handoff.current_untracked() else {
            return;
        };
        set_download_state.set(DownloadState::Working);
        let api = api.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let request = ReportRequest::from_prediction(&payload.prediction);
            let outcome = match api.download_report(&request, payload.image.as_ref()).await {
                Ok(bytes) => save_report(&bytes),
                Err(err) => Err(err),
            };
            match outcome {
                Ok(()) => set_download_state.set(DownloadState::Saved),
                Err(err) => {
                    log::error!("report download failed: {err}");
                    set_download_state.set(DownloadState::Failed(err.user_message().to_string()));
                }
            }
        });
    };

    let content = move || {
        let download_guide = download_guide.clone();
        match handoff.current() {
            None => view! {
                <div class="bg-gray-900 shadow-md rounded-lg p-10 text-center">
                    <AlertCircle class="w-10 h-10 mx-auto mb-4 text-yellow-500" />
                    <h3 class="text-lg font-bold text-white mb-2">"No detection result available"</h3>
                    <p class="text-gray-400 mb-6">
                        "Treatment suggestions are based on a diagnosed disease. "
                        "Upload a paddy image on the detection page first."
                    </p>
                    <A
                        href="/detect"
                        attr:class="inline-block bg-green-600 text-white px-6 py-2 rounded-md hover:bg-green-500 transition-colors"
                    >
                        "Go to Detection"
                    </A>
                </div>
            }
            .into_any(),

            Some(payload) => {
                let prediction = payload.prediction;
                let treatment = prediction.treatment.clone();
                let disease_name = treatment
                    .as_ref()
                    .map(|t| t.name.clone())
                    .unwrap_or_else(|| prediction.disease.clone());
                let confidence = prediction.confidence.percent();
                let symptoms = treatment
                    .as_ref()
                    .map(|t| symptom_list(&t.symptoms))
                    .unwrap_or_default();
                let brands = treatment
                    .map(|t| t.brand_treatments)
                    .unwrap_or_default();

                view! {
                    <div class="bg-gray-900 shadow-md rounded-lg p-6">
                        <div class="mb-6">
                            <h3 class="flex items-center gap-2 text-lg font-bold mb-4 text-gray-100">
                                <Leaf class="w-5 h-5 text-green-500" />
                                "Disease Overview"
                            </h3>
                            <p class="text-gray-100">
                                <strong>"Disease Detected: "</strong>
                                {disease_name}
                            </p>
                            <p class="text-gray-100">
                                <strong>"Confidence: "</strong>
                                {confidence} "%"
                            </p>
                            {(!symptoms.is_empty()).then(|| view! {
                                <div class="text-gray-100">
                                    <strong>"Symptoms:"</strong>
                                    <ul class="list-disc ml-8 mt-1">
                                        {symptoms
                                            .into_iter()
                                            .map(|symptom| view! { <li>{symptom}</li> })
                                            .collect_view()}
                                    </ul>
                                </div>
                            })}
                        </div>

                        <h3 class="text-lg font-bold mb-4 text-gray-100">"Treatment Recommendations"</h3>
                        {if brands.is_empty() {
                            view! {
                                <p class="text-gray-400">
                                    "No treatment information is available for this diagnosis."
                                </p>
                            }
                            .into_any()
                        } else {
                            view! {
                                <table class="w-full border-collapse border border-gray-700">
                                    <thead>
                                        <tr class="bg-gray-800 text-gray-100">
                                            <th class="text-left p-3 border border-gray-700">"Brand Name"</th>
                                            <th class="text-left p-3 border border-gray-700">"How to Use"</th>
                                            <th class="text-left p-3 border border-gray-700">"Recommendations"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {brands
                                            .into_iter()
                                            .map(|brand| view! {
                                                <tr class="border-t text-gray-100">
                                                    <td class="p-3 border border-gray-700">{brand.brand_name}</td>
                                                    <td class="p-3 border border-gray-700">{brand.how_to_use}</td>
                                                    <td class="p-3 border border-gray-700">{brand.recommendations}</td>
                                                </tr>
                                            })
                                            .collect_view()}
                                    </tbody>
                                </table>
                            }
                            .into_any()
                        }}

                        <div class="mt-6 flex items-center justify-end gap-4">
                            {move || match download_state.get() {
                                DownloadState::Idle => ().into_any(),
                                DownloadState::Working => view! {
                                    <p class="text-gray-400 text-sm">"Preparing report\u{2026}"</p>
                                }
                                .into_any(),
                                DownloadState::Saved => view! {
                                    <p class="text-green-500 text-sm">
                                        {format!("Report saved as {REPORT_FILENAME}")}
                                    </p>
                                }
                                .into_any(),
                                DownloadState::Failed(message) => view! {
                                    <p class="flex items-center gap-2 text-red-400 text-sm">
                                        <AlertCircle class="w-4 h-4 shrink-0" />
                                        {message}
                                    </p>
                                }
                                .into_any(),
                            }}
                            <button
                                type="button"
                                class="bg-green-600 text-white px-4 py-2 rounded-md hover:bg-green-500 transition-colors flex items-center"
                                on:click=download_guide
                            >
                                <Download class="w-4 h-4 mr-2" />
                                "Download Guide"
                            </button>
                        </div>
                    </div>
                }
                .into_any()
            }
        }
    };

    view! {
        <Title text="Treatment Suggestions | RiceGenie" />
        <div class="min-h-screen pt-28 pb-24 px-6">
            <div class="max-w-4xl mx-auto">
                <h2 class="text-2xl font-bold mb-6 text-center text-white">"Treatment Suggestions"</h2>
                {content}
            </div>
        </div>
    }
}

/// Hand the report bytes to the browser as a named file download.
fn save_report(bytes: &[u8]) -> Result<()> {
    let chunk: wasm_bindgen::JsValue = js_sys::Uint8Array::from(bytes).into();
    let parts = js_sys::Array::new();
    parts.push(&chunk);

    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/pdf");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(Error::interop)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(Error::interop)?;

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| Error::Interop("document unavailable".into()))?;
    let anchor = document
        .create_element("a")
        .map_err(Error::interop)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(Error::interop)?;
    anchor.set_href(&url);
    anchor.set_download(REPORT_FILENAME);
    anchor.click();
    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}
