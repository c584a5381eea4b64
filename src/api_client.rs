pub mod analytics;
pub mod upload;

use gloo_net::http::Request;
use serde::Deserialize;

use crate::settings;

/// Common GET request handler.
///
/// This backend serves bare JSON bodies (arrays and objects) with no
/// response envelope, so the decoded payload is returned as-is.
pub async fn get<T>(endpoint: &str) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
{
    let url = settings::get_settings().api_url(endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url).send().await.map_err(|e| {
        let error_msg = format!("Request failed: {}", e);
        log::error!("GET {} - {}", endpoint, error_msg);
        error_msg
    })?;

    if !response.ok() {
        let error_msg = format!("HTTP error: {}", response.status());
        log::error!("GET {} - {}", endpoint, error_msg);
        return Err(error_msg);
    }

    log::trace!("GET {} - Response received, parsing JSON", endpoint);
    let data: T = response.json().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("GET {} - {}", endpoint, error_msg);
        error_msg
    })?;

    log::info!("GET {} - Success", endpoint);
    Ok(data)
}
