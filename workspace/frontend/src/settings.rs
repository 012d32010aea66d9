use common::{RandomDataSource, DEFAULT_BASE_URL, DEFAULT_INITIAL_BATCH_SIZE};
use log::Level;
use web_sys::window;

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Base url of the random-data API (e.g. "https://random-data-api.com/api")
    pub api_base: String,

    /// Records requested per collection when the dashboard mounts
    pub initial_batch_size: u32,

    /// Records requested by the "Add" buttons
    pub add_batch_size: u32,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,

    /// Toast notification duration in milliseconds
    pub toast_duration_ms: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_BASE_URL.to_string(),
            initial_batch_size: DEFAULT_INITIAL_BATCH_SIZE,
            add_batch_size: 1,
            log_level: Level::Info,
            debug_mode: false,
            toast_duration_ms: 5000,
        }
    }
}

impl AppSettings {
    /// Create settings from window location and localStorage overrides.
    ///
    /// Overrides are only read; the dashboard never writes to storage.
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

            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(api_base)) = storage.get_item("bankdash_api_base") {
                    settings.api_base = api_base;
                }

                if let Ok(Some(log_level)) = storage.get_item("bankdash_log_level") {
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

    /// Random-data source rooted at `api_base`
    pub fn source(&self) -> RandomDataSource {
        RandomDataSource::new(self.api_base.clone())
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

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}
