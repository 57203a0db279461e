//! Detection workflow view: upload, predict, result.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, File, FileList, HtmlInputElement, MouseEvent, Url};

use crate::api::ApiClient;
use crate::components::icons::{AlertCircle, UploadCloud};
use crate::handoff::{DetectionHandoff, HandoffStore};
use crate::workflow::{DetectWorkflow, ImageSource, Phase};

/// A selected upload plus its preview object URL. The URL is released as soon
/// as the selection is superseded or the view unmounts (the drop happens when
/// the owning signal is disposed).
struct SelectedImage {
    file: File,
    preview_url: String,
}

impl SelectedImage {
    fn from_file(file: File) -> Option<Self> {
        match Url::create_object_url_with_blob(&file) {
            Ok(preview_url) => Some(Self { file, preview_url }),
            Err(err) => {
                log::error!("failed to create preview URL: {err:?}");
                None
            }
        }
    }

    fn file(&self) -> &File {
        &self.file
    }

    fn preview_url(&self) -> &str {
        &self.preview_url
    }
}

impl ImageSource for SelectedImage {
    fn mime_type(&self) -> String {
        self.file.type_()
    }
}

impl Drop for SelectedImage {
    fn drop(&mut self) {
        let _ = Url::revoke_object_url(&self.preview_url);
    }
}

#[component]
pub fn Detect() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let handoff = expect_context::<HandoffStore>();
    let navigate = use_navigate();

    let workflow: RwSignal<DetectWorkflow<SelectedImage>, LocalStorage> =
        RwSignal::new_local(DetectWorkflow::new());
    let (drag_active, set_drag_active) = signal(false);
    let input_ref: NodeRef<leptos::html::Input> = NodeRef::new();

    let handle_files = move |list: Option<FileList>| {
        let mut candidates = Vec::new();
        if let Some(list) = list {
            for index in 0..list.length() {
                if let Some(image) = list.get(index).and_then(SelectedImage::from_file) {
                    candidates.push(image);
                }
            }
        }
        workflow.update(|machine| {
            if let Err(reason) = machine.select(candidates) {
                log::debug!("selection rejected: {reason:?}");
            }
        });
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_active.set(false);
        handle_files(ev.data_transfer().and_then(|transfer| transfer.files()));
    };
    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_active.set(true);
    };
    let on_drag_leave = move |_: DragEvent| set_drag_active.set(false);

    let on_input_change = move |ev: Event| {
        let input: Option<HtmlInputElement> =
            ev.target().and_then(|target| target.dyn_into().ok());
        if let Some(input) = input {
            handle_files(input.files());
            // Allow re-selecting the same file later.
            input.set_value("");
        }
    };

    let open_picker = move |_: MouseEvent| {
        if let Some(input) = input_ref.get_untracked() {
            input.click();
        }
    };

    let run_predict = move |_: MouseEvent| {
        let Some(seq) = workflow
            .try_update(|machine| machine.begin_predict())
            .flatten()
        else {
            return;
        };
        let Some(file) = workflow.with_untracked(|machine| {
            machine.image().map(|image| image.file().clone())
        }) else {
            return;
        };
        let api = api.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = api.predict(&file).await.map_err(|err| {
                log::error!("prediction request failed: {err}");
                err.user_message().to_string()
            });
            // No-op if the view unmounted while the request was in flight.
            workflow.try_update(|machine| machine.apply(seq, outcome));
        });
    };

    let view_treatment = move |_: MouseEvent| {
        let payload = workflow.with_untracked(|machine| {
            machine.result().cloned().map(|prediction| DetectionHandoff {
                prediction,
                image: machine.image().map(|image| image.file().clone()),
            })
        });
        if let Some(payload) = payload {
            handoff.publish(payload);
            navigate("/treatment", Default::default());
        }
    };

    let upload_another = move |_: MouseEvent| workflow.update(DetectWorkflow::reset);

    let dropzone_class = move || {
        if drag_active.get() {
            "border-2 border-dashed border-green-500 bg-green-500/5 rounded-lg p-10 text-center cursor-pointer transition-colors"
        } else {
            "border-2 border-dashed border-gray-700 rounded-lg p-10 text-center cursor-pointer transition-colors hover:border-gray-500"
        }
    };

    let body = move || {
        let run_predict = run_predict.clone();
        let view_treatment = view_treatment.clone();
        let phase = workflow.with(|machine| machine.phase());
        let preview_url =
            workflow.with(|machine| machine.image().map(|image| image.preview_url().to_string()));
        let preview = preview_url.map(|url| {
            view! {
                <div class="mb-4 flex justify-center">
                    <img src=url alt="Selected paddy leaf" class="w-64 h-64 object-cover rounded-md shadow-lg" />
                </div>
            }
        });

        match phase {
            Phase::Empty => view! {
                <div class=dropzone_class on:click=open_picker>
                    <input
                        type="file"
                        accept="image/*"
                        class="hidden"
                        node_ref=input_ref
                        on:change=on_input_change
                        // The programmatic click must not bubble back into
                        // open_picker.
                        on:click=move |ev: MouseEvent| ev.stop_propagation()
                    />
                    <UploadCloud class="w-10 h-10 mx-auto mb-3 text-gray-500" />
                    <p class="text-gray-400">
                        {move || {
                            if drag_active.get() {
                                "Drop the image here"
                            } else {
                                "Drag and drop your paddy field image here or click to upload"
                            }
                        }}
                    </p>
                    <button type="button" class="bg-green-600 text-white px-4 py-2 rounded-md mt-4">
                        "Upload Image"
                    </button>
                </div>
            }
            .into_any(),

            Phase::ImageSelected => {
                let error = workflow.with(|machine| machine.error().map(str::to_string));
                view! {
                    {preview}
                    {error.map(|message| view! {
                        <p class="flex items-center gap-2 text-red-400 text-sm mb-2">
                            <AlertCircle class="w-4 h-4 shrink-0" />
                            {message}
                        </p>
                    })}
                    <div class="flex justify-end">
                        <button
                            type="button"
                            class="bg-green-600 text-white px-4 py-2 rounded-md mt-4 hover:bg-green-500 transition-colors"
                            on:click=run_predict
                        >
                            "Predict Disease"
                        </button>
                    </div>
                }
                .into_any()
            }

            Phase::Predicting => view! {
                {preview}
                <div class="flex justify-end">
                    <button
                        type="button"
                        class="bg-green-600/60 text-white px-4 py-2 rounded-md mt-4 cursor-wait"
                        disabled=true
                    >
                        "Predicting\u{2026}"
                    </button>
                </div>
            }
            .into_any(),

            Phase::ResultShown => {
                let headline =
                    workflow.with(|machine| machine.result().map(|prediction| prediction.headline()));
                view! {
                    {preview}
                    <p class="text-green-500 font-bold mb-2">
                        "Detected: " {headline}
                    </p>
                    <div class="flex justify-center space-x-4 mt-4">
                        <button
                            type="button"
                            class="bg-green-600 text-white px-4 py-2 rounded-md hover:bg-green-500 transition-colors"
                            on:click=view_treatment
                        >
                            "View Treatment"
                        </button>
                        <button
                            type="button"
                            class="bg-gray-700 text-white px-4 py-2 rounded-md hover:bg-gray-600 transition-colors"
                            on:click=upload_another
                        >
                            "Upload Another Image"
                        </button>
                    </div>
                }
                .into_any()
            }
        }
    };

    view! {
        <Title text="Disease Detection | RiceGenie" />
        <div class="relative min-h-screen pt-28 pb-24 px-6">
            <div class="max-w-3xl mx-auto">
                <h2 class="text-2xl font-bold mb-6 text-white text-center">"Disease Detection"</h2>
                <div
                    class="bg-gray-900 shadow-md rounded-lg p-6"
                    on:drop=on_drop
                    on:dragover=on_drag_over
                    on:dragleave=on_drag_leave
                >
                    <h3 class="text-lg font-bold mb-4 text-white text-center">"Upload Paddy Image"</h3>
                    {body}
                </div>
            </div>
        </div>
    }
}
