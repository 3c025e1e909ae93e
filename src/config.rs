//! Configuration handling for the kiosk

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default EmailJS REST endpoint
pub const DEFAULT_EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Credentials and templates for the email delivery service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EmailJsConfig {
    pub public_key: String,
    pub service_id: String,
    pub admission_template_id: String,
    pub contact_template_id: String,
    pub endpoint: String,
}

impl Default for EmailJsConfig {
    fn default() -> Self {
        Self {
            public_key: "V9rIk-StUc1fTIxC8".to_string(),
            service_id: "service_l98zmwo".to_string(),
            admission_template_id: "template_rzmy8ki".to_string(),
            contact_template_id: "template_l7ss6ml".to_string(),
            endpoint: DEFAULT_EMAILJS_ENDPOINT.to_string(),
        }
    }
}

/// Fallback channels named in failure notifications
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ContactChannels {
    pub email: String,
    pub phone: String,
}

impl Default for ContactChannels {
    fn default() -> Self {
        Self {
            email: "amicuslaw.edu@gmail.com".to_string(),
            phone: "+977-9867825654".to_string(),
        }
    }
}

/// Kiosk configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct KioskConfig {
    pub emailjs: EmailJsConfig,
    pub contact: ContactChannels,
}

impl KioskConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("edu", "amicus", "prospectus-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory for the log file
    pub fn log_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_local_dir().to_path_buf())
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: KioskConfig = serde_json::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded kiosk config");
        Ok(config)
    }

    /// Write the configuration, creating parent directories
    #[cfg(test)]
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
