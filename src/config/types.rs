use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub endpoint: EndpointConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Absolute origin of the prediction service. `None` means the page's own origin.
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_predict_path")]
    pub predict_path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_bar_animation_delay_ms")]
    pub bar_animation_delay_ms: u32,
    #[serde(default = "default_transport_error_message")]
    pub transport_error_message: String,
    #[serde(default = "default_application_error_fallback")]
    pub application_error_fallback: String,
    #[serde(default = "default_smooth_scroll")]
    pub smooth_scroll: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl EndpointConfig {
    /// Full URL of the predict endpoint, joined onto `origin` when no base URL is configured.
    pub fn predict_url(&self, origin: Option<&str>) -> String {
        let base = self.base_url.as_deref().or(origin).unwrap_or("");
        let base = base.trim_end_matches('/');
        if self.predict_path.starts_with('/') {
            format!("{}{}", base, self.predict_path)
        } else {
            format!("{}/{}", base, self.predict_path)
        }
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            predict_path: default_predict_path(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            bar_animation_delay_ms: default_bar_animation_delay_ms(),
            transport_error_message: default_transport_error_message(),
            application_error_fallback: default_application_error_fallback(),
            smooth_scroll: default_smooth_scroll(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_predict_path() -> String {
    "/predict".to_string()
}

fn default_bar_animation_delay_ms() -> u32 {
    100
}

fn default_transport_error_message() -> String {
    "Failed to connect to the server. Please try again.".to_string()
}

fn default_application_error_fallback() -> String {
    "An error occurred during prediction".to_string()
}

fn default_smooth_scroll() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}
