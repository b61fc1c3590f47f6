//! API utilities for frontend-backend communication
//!
//! JSON helpers over gloo-net that attach the bearer token and map non-2xx
//! responses to `Err(String)`. A 401 triggers one refresh-and-retry before
//! the error is surfaced.

use contracts::domain::common::ApiErrorBody;
use contracts::system::auth::{RefreshRequest, RefreshResponse};
use gloo_net::http::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::system::auth::storage;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 8000 for the backend server.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:8000", protocol, hostname)
}

/// Build a full API URL from a path (should start with "/api/")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn authorized(method: Method, path: &str) -> RequestBuilder {
    let builder = RequestBuilder::new(&api_url(path))
        .method(method)
        .header("Accept", "application/json");
    match storage::get_access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// Exchange the stored refresh token for a new access token. Returns false
/// when there is no refresh token or the server rejects it; tokens are
/// cleared in that case so the login gate takes over.
async fn try_refresh() -> bool {
    let Some(refresh_token) = storage::get_refresh_token() else {
        return false;
    };

    let request = RefreshRequest { refresh_token };
    let response = gloo_net::http::Request::post(&api_url("/api/system/auth/refresh"))
        .json(&request)
        .ok()
        .map(|r| r.send());

    let Some(send) = response else {
        return false;
    };

    match send.await {
        Ok(resp) if resp.ok() => match resp.json::<RefreshResponse>().await {
            Ok(body) => {
                storage::save_access_token(&body.access_token);
                true
            }
            Err(_) => false,
        },
        _ => {
            storage::clear_tokens();
            false
        }
    }
}

async fn send_json(
    method: Method,
    path: &str,
    body: Option<String>,
) -> Result<gloo_net::http::Response, String> {
    for attempt in 0..2 {
        let builder = authorized(method.clone(), path);
        let request = match &body {
            Some(json) => builder
                .header("Content-Type", "application/json")
                .body(json.clone())
                .map_err(|e| format!("Failed to build request: {}", e))?,
            None => builder
                .build()
                .map_err(|e| format!("Failed to build request: {}", e))?,
        };

        let response = request
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        if response.status() == 401 && attempt == 0 {
            if try_refresh().await {
                continue;
            }
            return Err("HTTP 401".to_string());
        }

        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiErrorBody::message_from(status, &body));
        }
        return Ok(response);
    }
    unreachable!("send_json retries at most once")
}

pub async fn http_get<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = send_json(Method::GET, path, None).await?;
    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;
    serde_json::from_str(&text).map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn http_post<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, String> {
    let json =
        serde_json::to_string(body).map_err(|e| format!("Failed to serialize request: {}", e))?;
    let response = send_json(Method::POST, path, Some(json)).await?;
    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;
    serde_json::from_str(&text).map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn http_put<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, String> {
    let json =
        serde_json::to_string(body).map_err(|e| format!("Failed to serialize request: {}", e))?;
    let response = send_json(Method::PUT, path, Some(json)).await?;
    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;
    serde_json::from_str(&text).map_err(|e| format!("Failed to parse response: {}", e))
}

/// PUT without a request body (acknowledge, mark-read and similar).
pub async fn http_put_empty<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = send_json(Method::PUT, path, Some("{}".to_string())).await?;
    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;
    serde_json::from_str(&text).map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn http_delete(path: &str) -> Result<(), String> {
    send_json(Method::DELETE, path, None).await?;
    Ok(())
}
