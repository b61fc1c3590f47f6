use contracts::domain::a008_upload::aggregate::{UploadAccepted, UploadJobList, UploadJobStatus};
use wasm_bindgen::JsCast;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

use crate::shared::api_utils::{api_url, http_get};
use crate::system::auth::storage;

/// Start a CSV upload job. Multipart, so this goes through the browser
/// fetch API directly; everything else in this module uses the shared
/// JSON helpers.
pub async fn upload_csv(file: &File) -> Result<UploadAccepted, String> {
    let form = FormData::new().map_err(|e| format!("Failed to create form: {:?}", e))?;
    form.append_with_blob_and_filename("csv_file", file, &file.name())
        .map_err(|e| format!("Failed to append file: {:?}", e))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form);

    let request =
        Request::new_with_str_and_init(&api_url("/api/materials/upload-sap-data"), &opts)
            .map_err(|e| format!("Failed to create request: {:?}", e))?;
    if let Some(token) = storage::get_access_token() {
        request
            .headers()
            .set("Authorization", &format!("Bearer {}", token))
            .map_err(|e| format!("Failed to set header: {:?}", e))?;
    }

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("Fetch failed: {:?}", e))?;
    let resp: Response = resp_value.dyn_into().map_err(|_| "Not a Response")?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    let text = wasm_bindgen_futures::JsFuture::from(
        resp.text().map_err(|e| format!("{:?}", e))?,
    )
    .await
    .map_err(|e| format!("{:?}", e))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;
    serde_json::from_str(&text).map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn fetch_job(job_id: &str) -> Result<UploadJobStatus, String> {
    http_get(&format!("/api/materials/upload-jobs/{}", job_id)).await
}

pub async fn fetch_jobs(limit: u64) -> Result<UploadJobList, String> {
    http_get(&format!("/api/materials/upload-jobs?limit={}", limit)).await
}
