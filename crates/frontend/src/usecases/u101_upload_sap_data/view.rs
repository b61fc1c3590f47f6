use contracts::domain::a008_upload::aggregate::{UploadJobState, UploadJobStatus};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use super::api;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::number_format::format_number_int;

const POLL_INTERVAL_MS: u32 = 2000;
const JOB_KEY: &str = "u101_upload_job_id";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn save_job_id(id: &str) {
    if let Some(s) = storage() {
        let _ = s.set_item(JOB_KEY, id);
    }
}

fn load_job_id() -> Option<String> {
    storage().and_then(|s| s.get_item(JOB_KEY).ok().flatten())
}

fn clear_job_id() {
    if let Some(s) = storage() {
        let _ = s.remove_item(JOB_KEY);
    }
}

/// CSV upload with async job polling. The running job id is persisted to
/// localStorage so a page reload resumes the progress display.
#[component]
#[allow(non_snake_case)]
pub fn UploadWidget() -> impl IntoView {
    let (job_id, set_job_id) = signal::<Option<String>>(load_job_id());
    let (job, set_job) = signal::<Option<UploadJobStatus>>(None);
    let (recent, set_recent) = signal::<Vec<UploadJobStatus>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (uploading, set_uploading) = signal(false);

    let fetch_recent = move || {
        spawn_local(async move {
            if let Ok(list) = api::fetch_jobs(20).await {
                set_recent.set(list.jobs);
            }
        });
    };
    fetch_recent();

    // Poll the active job until it finishes. A 404 means the job is gone
    // on the server side; drop the stale id.
    Effect::new(move |_| {
        let Some(id) = job_id.get() else {
            return;
        };
        spawn_local(async move {
            loop {
                match api::fetch_job(&id).await {
                    Ok(status) => {
                        let finished = status.status.is_finished();
                        set_job.set(Some(status));
                        if finished {
                            clear_job_id();
                            set_job_id.set(None);
                            fetch_recent();
                            break;
                        }
                    }
                    Err(e) => {
                        if e.contains("404") || e.to_lowercase().contains("not found") {
                            clear_job_id();
                            set_job_id.set(None);
                            set_job.set(None);
                        } else {
                            set_error.set(Some(format!("Failed to poll job: {}", e)));
                        }
                        break;
                    }
                }
                TimeoutFuture::new(POLL_INTERVAL_MS).await;
            }
        });
    });

    let handle_file = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = match ev.target().and_then(|t| t.dyn_into().ok()) {
            Some(i) => i,
            None => return,
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        if !file.name().ends_with(".csv") {
            set_error.set(Some("File must be a .csv".to_string()));
            return;
        }

        set_uploading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::upload_csv(&file).await {
                Ok(accepted) => {
                    save_job_id(&accepted.job_id);
                    set_job.set(None);
                    set_job_id.set(Some(accepted.job_id));
                }
                Err(e) => set_error.set(Some(format!("Upload failed: {}", e))),
            }
            set_uploading.set(false);
            input.set_value("");
        });
    };

    let progress_view = move || {
        let Some(status) = job.get() else {
            return view! { <></> }.into_any();
        };
        let percent = status.progress.percentage.clamp(0.0, 100.0);
        let phase = status
            .current_phase
            .map(|p| p.label())
            .unwrap_or("Queued");
        view! {
            <div style="border: 1px solid #ddd; border-radius: 4px; padding: 12px; margin-bottom: 16px; max-width: 560px;">
                <div style="display: flex; justify-content: space-between; margin-bottom: 6px;">
                    <span style="font-weight: 600;">
                        {status.file_name.clone().unwrap_or_else(|| "Upload".to_string())}
                    </span>
                    <span>{status.status.label()}</span>
                </div>
                <div style="font-size: 13px; color: #666; margin-bottom: 6px;">{phase}</div>
                <div style="background: #eee; border-radius: 4px; height: 10px; overflow: hidden;">
                    <div style=format!("background: #1565c0; height: 100%; width: {}%;", percent)></div>
                </div>
                <div style="font-size: 12px; color: #888; margin-top: 4px;">
                    {format!(
                        "{} / {} rows ({:.0}%)",
                        format_number_int(status.progress.processed as f64),
                        format_number_int(status.progress.total as f64),
                        percent
                    )}
                </div>
                {status.error.clone().map(|e| view! { <div class="error">{e}</div> })}
                {status.result.as_ref().map(|r| view! {
                    <div style="margin-top: 6px; font-size: 13px;">
                        {format!(
                            "Inserted {}, updated {}, insights {}, reviews scheduled {}",
                            r.inserted, r.updated, r.insights, r.reviews
                        )}
                    </div>
                })}
            </div>
        }
        .into_any()
    };

    view! {
        <div class="content">
            <div class="header">
                <h2>{"SAP data upload"}</h2>
                <div class="header-actions">
                    <button class="btn btn-secondary" on:click=move |_| fetch_recent()>
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                </div>
            </div>

            <p style="color: #666; max-width: 640px;">
                {"Upload the SAP slow-mover extract (.csv). Processing runs on the server: \
                  validation, materials, consumption history, insights and review scheduling. \
                  Progress appears below and survives a page reload."}
            </p>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="form-group" style="max-width: 400px;">
                <label>{"CSV file"}</label>
                <input
                    type="file"
                    accept=".csv"
                    class="form-control"
                    disabled=move || uploading.get() || job_id.get().is_some()
                    on:change=handle_file
                />
                {move || if uploading.get() {
                    view! { <div style="color: #888;">{"Uploading..."}</div> }.into_any()
                } else {
                    view! { <></> }.into_any()
                }}
            </div>

            {progress_view}

            <h3>{"Recent uploads"}</h3>
            <div class="table-container">
                <table>
                    <thead>
                        <tr>
                            <th>{"File"}</th>
                            <th>{"Status"}</th>
                            <th>{"Created"}</th>
                            <th>{"Completed"}</th>
                            <th>{"Result"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || recent.get().into_iter().map(|j| {
                            let is_failed = j.status == UploadJobState::Failed;
                            view! {
                                <tr>
                                    <td>{j.file_name.clone().unwrap_or_else(|| "-".to_string())}</td>
                                    <td style=if is_failed { "color: #c62828;" } else { "" }>
                                        {j.status.label()}
                                    </td>
                                    <td>{j.created_at.as_deref().map(format_datetime).unwrap_or_else(|| "-".to_string())}</td>
                                    <td>{j.completed_at.as_deref().map(format_datetime).unwrap_or_else(|| "-".to_string())}</td>
                                    <td>
                                        {match (&j.result, &j.error) {
                                            (Some(r), _) => format!("{} inserted / {} updated", r.inserted, r.updated),
                                            (None, Some(e)) => e.clone(),
                                            (None, None) => "-".to_string(),
                                        }}
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
