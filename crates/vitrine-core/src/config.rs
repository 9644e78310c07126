use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub contact: ContactConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            ui: UiConfig::default(),
            carousel: CarouselConfig::default(),
            contact: ContactConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Showcase content file path
    #[serde(default = "default_content_path")]
    pub content_path: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            content_path: default_content_path(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Theme name (e.g., "showroom-dark", "showroom-light")
    #[serde(default = "default_theme_name")]
    pub theme: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            theme: default_theme_name(),
        }
    }
}

/// Carousel behavior settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Autoplay advance interval in milliseconds
    #[serde(default = "default_autoplay_interval")]
    pub autoplay_interval_ms: u64,
    /// Spacing between cards when the layout cannot provide a measured gap
    #[serde(default = "default_fallback_gap")]
    pub fallback_gap: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: default_autoplay_interval(),
            fallback_gap: default_fallback_gap(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Base URL of the inquiry relay server
    #[serde(default = "default_relay_url")]
    pub relay_url: String,
    /// WhatsApp number for order links (country code + number, no '+')
    #[serde(default)]
    pub whatsapp_phone: Option<String>,
    /// Business contact email shown in the contact overlay
    #[serde(default)]
    pub business_email: Option<String>,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            relay_url: default_relay_url(),
            whatsapp_phone: None,
            business_email: None,
        }
    }
}

fn default_content_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("vitrine")
        .join("showcase.toml")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_tick_rate() -> u64 {
    100
}

fn default_theme_name() -> String {
    "showroom-dark".to_string()
}

fn default_autoplay_interval() -> u64 {
    4500
}

fn default_fallback_gap() -> f64 {
    20.0
}

fn default_relay_url() -> String {
    "http://localhost:5000".to_string()
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/vitrine/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("vitrine")
            .join("config.toml")
    }

    /// Get the showcase content file path (with tilde expansion)
    pub fn content_path(&self) -> PathBuf {
        expand_tilde(&self.general.content_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_carousel_config() {
        let config = CarouselConfig::default();
        assert_eq!(config.autoplay_interval_ms, 4500);
        assert!((config.fallback_gap - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_partial_config() {
        let toml_str = r#"
            [carousel]
            autoplay_interval_ms = 3000

            [contact]
            whatsapp_phone = "15551234567"
        "#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.carousel.autoplay_interval_ms, 3000);
        // Unspecified fields fall back to defaults
        assert!((config.carousel.fallback_gap - 20.0).abs() < f64::EPSILON);
        assert_eq!(config.contact.whatsapp_phone.as_deref(), Some("15551234567"));
        assert_eq!(config.contact.relay_url, "http://localhost:5000");
        assert_eq!(config.ui.tick_rate_ms, 100);
    }

    #[test]
    fn test_empty_config_is_default() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.ui.theme, "showroom-dark");
        assert_eq!(config.general.log_level, "info");
    }
}
