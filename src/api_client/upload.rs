use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use web_sys::File;

use crate::api_client;

/// Presigned write destination issued by the backend.
///
/// Consumed exactly once, immediately after it is issued; never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadDestination {
    pub upload_url: String,
    pub file_key: String,
}

/// Failure modes of the direct transfer.
#[derive(Debug, Clone, PartialEq)]
pub enum TransferError {
    /// Storage rejected the write with this status code.
    Status(u16),
    /// The request itself failed before a status came back.
    Request(String),
}

/// Ask the backend for a presigned destination for one CSV upload.
pub async fn request_destination() -> Result<UploadDestination, String> {
    log::trace!("Requesting upload destination");
    let result = api_client::get::<UploadDestination>("/upload-url").await;

    if let Err(ref e) = result {
        log::error!("Failed to obtain upload destination: {}", e);
    } else {
        log::info!("Successfully obtained upload destination");
    }

    result
}

/// PUT the selected file's raw bytes straight to the presigned URL.
///
/// The URL is absolute (it points at object storage, not at the API), so
/// this bypasses the shared `get` helper. The content type is fixed: the
/// downstream workflow only accepts CSV.
pub async fn put_csv(upload_url: &str, file: &File) -> Result<(), TransferError> {
    log::debug!("PUT upload of '{}' to presigned URL", file.name());

    let response = Request::put(upload_url)
        .header("Content-Type", "text/csv")
        .body(file.clone())
        .map_err(|e| {
            let error_msg = format!("Failed to build upload request: {}", e);
            log::error!("PUT upload - {}", error_msg);
            TransferError::Request(error_msg)
        })?
        .send()
        .await
        .map_err(|e| {
            let error_msg = format!("Request failed: {}", e);
            log::error!("PUT upload - {}", error_msg);
            TransferError::Request(error_msg)
        })?;

    if !response.ok() {
        log::error!("PUT upload - storage answered {}", response.status());
        return Err(TransferError::Status(response.status()));
    }

    log::info!("PUT upload - Success");
    Ok(())
}
