use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use super::session::{UploadSession, UploadStatus};
use crate::api_client::upload::{self as upload_api, TransferError};
use crate::Route;

/// Upload page: pick a CSV, request a presigned destination, PUT the bytes
/// straight to storage, and report the terminal outcome in the status panel.
#[function_component(UploadView)]
pub fn upload_view() -> Html {
    let file = use_state(|| None::<web_sys::File>);
    let session = use_state(UploadSession::default);
    let busy = use_state(|| false);

    let on_file_change = {
        let file = file.clone();
        let session = session.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let selected = input.files().and_then(|list| list.get(0));
            let name = selected.as_ref().map(|f| f.name());
            log::debug!("File selection changed: {:?}", name);

            session.set(UploadSession::selected(name.as_deref()));
            file.set(selected);
        })
    };

    let on_upload = {
        let file = file.clone();
        let session = session.clone();
        let busy = busy.clone();
        Callback::from(move |_: MouseEvent| {
            if *busy {
                return;
            }

            let Some(selected) = (*file).clone() else {
                log::warn!("Upload requested with no file selected");
                session.set(UploadSession::missing_file());
                return;
            };

            busy.set(true);
            session.set(UploadSession::uploading());
            log::info!("Starting upload of '{}'", selected.name());

            let session = session.clone();
            let busy = busy.clone();
            spawn_local(async move {
                let next = match upload_api::request_destination().await {
                    Err(err) => {
                        log::warn!("Upload aborted, no destination: {}", err);
                        UploadSession::destination_failed()
                    }
                    Ok(destination) => {
                        match upload_api::put_csv(&destination.upload_url, &selected).await {
                            Ok(()) => UploadSession::completed(&destination.file_key),
                            Err(TransferError::Status(code)) => UploadSession::transfer_failed(code),
                            Err(TransferError::Request(err)) => UploadSession::failed(err),
                        }
                    }
                };

                // busy is released on every exit path of the sequence
                session.set(next);
                busy.set(false);
            });
        })
    };

    html! {
        <main class="min-h-screen bg-base-200 flex items-center justify-center px-4">
            <div class="max-w-3xl w-full py-10">
                <header class="mb-10 text-center">
                    <h1 class="text-4xl font-bold mb-3">{"Upload Sales Data for Weekly Insights"}</h1>
                    <p class="text-sm text-base-content/60">
                        {"Import your raw "}
                        <span class="font-mono">{".csv"}</span>
                        {" order export to trigger the automated ETL workflow. The data is validated, transformed, and prepared for the analytics dashboard."}
                    </p>
                </header>

                <section class="card bg-base-100 shadow">
                    <div class="card-body flex flex-col sm:flex-row gap-6">
                        <div class="flex-1">
                            <h2 class="card-title mb-2">{"Import Your Orders Dataset"}</h2>
                            <p class="text-sm text-base-content/60 mb-4">
                                {"The file goes straight to object storage through a presigned URL; the ETL workflow then cleans it and loads it into the analytics layer."}
                            </p>

                            <div class="space-y-3">
                                <label class="form-control">
                                    <span class="label-text text-xs font-medium mb-1">
                                        {"Weekly order export (.csv)"}
                                    </span>
                                    <input
                                        type="file"
                                        accept=".csv,text/csv"
                                        class="file-input file-input-bordered w-full"
                                        onchange={on_file_change}
                                    />
                                </label>

                                <button
                                    class="btn btn-primary"
                                    disabled={file.is_none() || *busy}
                                    onclick={on_upload}
                                >
                                    if *busy {
                                        <>
                                            <span class="loading loading-spinner loading-sm"></span>
                                            {"Processing…"}
                                        </>
                                    } else {
                                        {"Start ETL Processing"}
                                    }
                                </button>
                            </div>
                        </div>

                        <StatusPanel status={session.status} message={session.message.clone()} />
                    </div>
                </section>

                <div class="mt-8 text-center">
                    <Link<Route> to={Route::Dashboard} classes={classes!("btn", "btn-secondary", "btn-outline")}>
                        {"View Analytics Dashboard →"}
                    </Link<Route>>
                </div>

                <footer class="mt-6 text-center text-xs text-base-content/50">
                    {"Presigned uploads · asynchronous ETL · warehouse-backed analytics"}
                </footer>
            </div>
        </main>
    }
}

#[derive(Properties, PartialEq)]
struct StatusPanelProps {
    pub status: UploadStatus,
    pub message: String,
}

#[function_component(StatusPanel)]
fn status_panel(props: &StatusPanelProps) -> Html {
    html! {
        <div class="w-full sm:w-64 rounded-box bg-base-200 border border-base-300 p-4 text-sm space-y-2">
            <p class="text-xs font-semibold text-base-content/60">{"ETL Pipeline Status"}</p>

            <p class={classes!("font-medium", props.status.text_class())}>
                {props.status.headline()}
            </p>

            if !props.message.is_empty() {
                <p class="text-xs whitespace-pre-wrap break-words">{&props.message}</p>
            }

            <div class="divider my-1"></div>

            <p class="text-[11px] leading-relaxed text-base-content/50">
                {"Once processing completes, the dataset becomes queryable and shows up in the analytics dashboard."}
            </p>
        </div>
    }
}
