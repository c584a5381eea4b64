use log::Level;
use wasm_bindgen::JsValue;
use web_sys::window;

/// Backend base URL baked in at build time; falls back to the local
/// development server.
const DEFAULT_API_BASE: &str = match option_env!("API_BASE_URL") {
    Some(url) => url,
    None => "http://127.0.0.1:5000",
};

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Backend API base URL (e.g., "http://127.0.0.1:5000")
    pub api_base: String,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            log_level: Level::Info,
            debug_mode: false,
        }
    }
}

impl AppSettings {
    /// Create settings from the window location and localStorage overrides
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        if let Some(window) = window() {
            if let Ok(hostname) = window.location().hostname() {
                settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

                // In development, use more verbose logging
                if settings.debug_mode {
                    settings.log_level = Level::Debug;
                }
            }

            // Custom settings from localStorage win over the baked-in default
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(api_base)) = storage.get_item("salesdash_api_base") {
                    settings.api_base = api_base;
                }

                if let Ok(Some(log_level)) = storage.get_item("salesdash_log_level") {
                    settings.log_level = match log_level.to_lowercase().as_str() {
                        "error" => Level::Error,
                        "warn" => Level::Warn,
                        "info" => Level::Info,
                        "debug" => Level::Debug,
                        "trace" => Level::Trace,
                        _ => settings.log_level,
                    };
                }
            }
        }

        settings
    }

    /// Save overridable settings to localStorage
    pub fn save_to_storage(&self) -> Result<(), JsValue> {
        if let Some(window) = window() {
            if let Some(storage) = window.local_storage()? {
                storage.set_item("salesdash_api_base", &self.api_base)?;
                storage.set_item(
                    "salesdash_log_level",
                    &format!("{:?}", self.log_level).to_lowercase(),
                )?;
            }
        }
        Ok(())
    }

    /// Get the full API URL for an endpoint
    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base, endpoint)
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Update the global settings
pub fn update_settings<F>(f: F)
where
    F: FnOnce(&mut AppSettings),
{
    SETTINGS.with(|s| {
        let mut settings = s.borrow_mut();
        f(&mut settings);
    });
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_joins_base_and_endpoint() {
        let settings = AppSettings {
            api_base: "http://api.example.com".to_string(),
            ..AppSettings::default()
        };

        assert_eq!(
            settings.api_url("/analytics/daily-revenue"),
            "http://api.example.com/analytics/daily-revenue"
        );
    }

    #[test]
    fn default_points_at_local_backend() {
        let settings = AppSettings::default();

        assert!(settings.api_base.starts_with("http"));
        assert!(!settings.debug_mode);
        assert_eq!(settings.log_level, Level::Info);
    }
}
