/// States of one upload attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadStatus {
    #[default]
    Idle,
    Uploading,
    Success,
    Error,
}

impl UploadStatus {
    /// Status line color for the panel.
    pub fn text_class(&self) -> &'static str {
        match self {
            UploadStatus::Idle => "text-base-content/60",
            UploadStatus::Uploading => "text-warning",
            UploadStatus::Success => "text-success",
            UploadStatus::Error => "text-error",
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            UploadStatus::Idle => "Awaiting file upload…",
            UploadStatus::Uploading => "Uploading file & starting the pipeline…",
            UploadStatus::Success => "File uploaded. Processing is running.",
            UploadStatus::Error => "Upload failed.",
        }
    }
}

/// In-memory state of the upload page.
///
/// Created in `Idle` on page load, replaced wholesale by the named
/// transitions below, discarded on navigation. "Success" covers the file
/// transfer only; the downstream workflow reports nothing back here.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UploadSession {
    pub status: UploadStatus,
    pub message: String,
}

impl UploadSession {
    /// A new selection resets any previous outcome; clearing the picker
    /// clears the message too.
    pub fn selected(name: Option<&str>) -> Self {
        Self {
            status: UploadStatus::Idle,
            message: match name {
                Some(name) => format!("Selected file: {}", name),
                None => String::new(),
            },
        }
    }

    /// Upload requested with nothing selected. Reached before any network
    /// call is made.
    pub fn missing_file() -> Self {
        Self {
            status: UploadStatus::Error,
            message: "Please choose a CSV file before uploading.".to_string(),
        }
    }

    pub fn uploading() -> Self {
        Self {
            status: UploadStatus::Uploading,
            message: "Requesting upload URL from backend…".to_string(),
        }
    }

    /// The destination request failed; the cause goes to the log, the
    /// panel gets a generic message.
    pub fn destination_failed() -> Self {
        Self {
            status: UploadStatus::Error,
            message: "Failed to fetch upload URL.".to_string(),
        }
    }

    /// The direct transfer came back non-success.
    pub fn transfer_failed(status: u16) -> Self {
        Self {
            status: UploadStatus::Error,
            message: format!("Upload failed with status {}.", status),
        }
    }

    /// Transfer finished; the ETL workflow takes over from here.
    pub fn completed(file_key: &str) -> Self {
        Self {
            status: UploadStatus::Success,
            message: format!("Upload successful! Processing started for: {}", file_key),
        }
    }

    /// Catch-all for anything else that went wrong in the sequence.
    pub fn failed(message: String) -> Self {
        Self {
            status: UploadStatus::Error,
            message: if message.is_empty() {
                "Upload failed. Please try again.".to_string()
            } else {
                message
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_with_no_message() {
        let session = UploadSession::default();

        assert_eq!(session.status, UploadStatus::Idle);
        assert!(session.message.is_empty());
    }

    #[test]
    fn selecting_a_file_names_it() {
        let session = UploadSession::selected(Some("orders.csv"));

        assert_eq!(session.status, UploadStatus::Idle);
        assert!(session.message.contains("orders.csv"));
    }

    #[test]
    fn deselecting_returns_to_idle_and_clears_message() {
        let session = UploadSession::selected(None);

        assert_eq!(session.status, UploadStatus::Idle);
        assert!(session.message.is_empty());
    }

    #[test]
    fn missing_file_is_an_error_before_any_network_call() {
        let session = UploadSession::missing_file();

        assert_eq!(session.status, UploadStatus::Error);
        assert!(session.message.contains("choose a CSV file"));
    }

    #[test]
    fn destination_failure_is_generic() {
        let session = UploadSession::destination_failed();

        assert_eq!(session.status, UploadStatus::Error);
        assert_eq!(session.message, "Failed to fetch upload URL.");
    }

    #[test]
    fn transfer_failure_carries_the_status_code() {
        let session = UploadSession::transfer_failed(403);

        assert_eq!(session.status, UploadStatus::Error);
        assert!(session.message.contains("403"));
    }

    #[test]
    fn completion_names_the_file_key() {
        let session = UploadSession::completed("uploads/orders-2024.csv");

        assert_eq!(session.status, UploadStatus::Success);
        assert!(session.message.contains("uploads/orders-2024.csv"));
    }

    #[test]
    fn catch_all_falls_back_when_the_message_is_empty() {
        let with_message = UploadSession::failed("boom".to_string());
        let without = UploadSession::failed(String::new());

        assert_eq!(with_message.message, "boom");
        assert_eq!(without.message, "Upload failed. Please try again.");
        assert_eq!(without.status, UploadStatus::Error);
    }
}
