use anyhow::{Context, Result};
use log::{debug, error, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_export_delimiter() -> String {
    ",".to_string()
}

fn default_tag_delimiter() -> String {
    ";".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AuthSettings {
    pub login_on_startup: bool,
    pub api_base_url: String,
    pub api_key: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    pub version: String,
    pub update_check_on_startup: bool,
    pub auth: AuthSettings,
    pub default_export_location: String,
    #[serde(default = "default_export_delimiter")]
    pub export_delimiter: String,
    #[serde(default = "default_tag_delimiter")]
    pub tag_delimiter: String,
    #[serde(default)]
    pub advanced_mode: bool,
    #[serde(default)]
    pub offline: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            version: env!("CARGO_PKG_VERSION").to_string(),
            update_check_on_startup: false,
            auth: AuthSettings::default(),
            default_export_location: String::new(),
            export_delimiter: default_export_delimiter(),
            tag_delimiter: default_tag_delimiter(),
            advanced_mode: false,
            offline: false,
        }
    }
}

impl Settings {
    pub fn load(settings_file: &str) -> Result<Self> {
        let path = Path::new(settings_file);
        if !path.exists() {
            return Err(anyhow::anyhow!(
                "settings.json not found at '{}'. Exiting...",
                settings_file
            ));
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", settings_file))?;

        let settings: Settings = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse settings file: {}", settings_file))?;

        info!("Settings loaded from '{}'.", settings_file);
        Ok(settings)
    }

    /// Load settings, falling back to defaults (offline, no auth) when the
    /// file is absent. A file that exists but does not parse is still an error.
    pub fn load_or_default(settings_file: &str) -> Result<Self> {
        if Path::new(settings_file).exists() {
            Self::load(settings_file)
        } else {
            info!(
                "No settings file at '{}'. Using defaults (offline mode).",
                settings_file
            );
            let mut settings = Settings::default();
            settings.offline = true;
            Ok(settings)
        }
    }

    /// The byte handed to the CSV writer; multi-character delimiters fall
    /// back to a comma.
    pub fn export_delimiter_byte(&self) -> u8 {
        let mut bytes = self.export_delimiter.bytes();
        match (bytes.next(), bytes.next()) {
            (Some(b), None) => b,
            _ => b',',
        }
    }

    pub fn check_for_updates(&self) -> Result<()> {
        let check_url = "https://api.github.com/repos/utm-builder/utm-builder/releases";
        debug!("Checking for updates at {}", check_url);

        let client = reqwest::blocking::Client::new();
        let resp = client
            .get(check_url)
            .header("User-Agent", "Mozilla/5.0")
            .timeout(std::time::Duration::from_secs(5))
            .send();

        match resp {
            Ok(response) => {
                if response.status().is_success() {
                    let releases: Vec<serde_json::Value> = response.json()?;
                    if !releases.is_empty() {
                        let latest_tag = releases[0]["tag_name"]
                            .as_str()
                            .unwrap_or("0.0.0")
                            .to_string();

                        if self.is_newer_version(&latest_tag) {
                            info!(
                                "A new version ({}) is available. You have {}. \
                                Download it from https://github.com/utm-builder/utm-builder.",
                                latest_tag, self.version
                            );
                        } else {
                            debug!("Current version {} is up-to-date.", self.version);
                        }
                    } else {
                        warn!("Could not fetch release info from GitHub. Please check manually.");
                    }
                }
            }
            Err(e) => {
                error!("Could not check for updates: {}", e);
            }
        }
        Ok(())
    }

    fn is_newer_version(&self, latest: &str) -> bool {
        let current_parts: Vec<u32> = self
            .version
            .split('.')
            .filter_map(|s| s.parse().ok())
            .collect();
        let latest_parts: Vec<u32> = latest.split('.').filter_map(|s| s.parse().ok()).collect();

        for i in 0..3 {
            let current = current_parts.get(i).unwrap_or(&0);
            let latest = latest_parts.get(i).unwrap_or(&0);
            if latest > current {
                return true;
            } else if latest < current {
                return false;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_settings_load_valid() {
        let json_content = r#"{
            "version": "1.0.0",
            "update_check_on_startup": false,
            "auth": {
                "login_on_startup": false,
                "api_base_url": "https://project.supabase.co",
                "api_key": "test_key",
                "email": "test@example.com",
                "password": "test_pass"
            },
            "default_export_location": "/tmp",
            "export_delimiter": ";",
            "tag_delimiter": "|",
            "advanced_mode": true,
            "offline": false
        }"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(json_content.as_bytes()).unwrap();
        let temp_path = temp_file.path().to_str().unwrap();

        let settings = Settings::load(temp_path).unwrap();
        assert_eq!(settings.version, "1.0.0");
        assert_eq!(settings.auth.api_base_url, "https://project.supabase.co");
        assert_eq!(settings.export_delimiter_byte(), b';');
        assert_eq!(settings.tag_delimiter, "|");
        assert!(settings.advanced_mode);
    }

    #[test]
    fn test_settings_load_applies_delimiter_defaults() {
        let json_content = r#"{
            "version": "1.0.0",
            "update_check_on_startup": false,
            "auth": {
                "login_on_startup": false,
                "api_base_url": "",
                "api_key": "",
                "email": "",
                "password": ""
            },
            "default_export_location": ""
        }"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(json_content.as_bytes()).unwrap();

        let settings = Settings::load(temp_file.path().to_str().unwrap()).unwrap();
        assert_eq!(settings.export_delimiter, ",");
        assert_eq!(settings.tag_delimiter, ";");
        assert!(!settings.advanced_mode);
        assert!(!settings.offline);
    }

    #[test]
    fn test_settings_load_missing_file() {
        let result = Settings::load("nonexistent_file.json");
        assert!(result.is_err());
    }

    #[test]
    fn test_settings_load_or_default_missing_file() {
        let settings = Settings::load_or_default("nonexistent_file.json").unwrap();
        assert!(settings.offline);
        assert!(!settings.auth.login_on_startup);
    }

    #[test]
    fn test_export_delimiter_byte_fallback() {
        let mut settings = Settings::default();
        settings.export_delimiter = "||".to_string();
        assert_eq!(settings.export_delimiter_byte(), b',');
        settings.export_delimiter = String::new();
        assert_eq!(settings.export_delimiter_byte(), b',');
    }

    #[test]
    fn test_is_newer_version() {
        let settings = Settings {
            version: "1.0.0".to_string(),
            ..Default::default()
        };

        assert!(settings.is_newer_version("1.0.1"));
        assert!(settings.is_newer_version("1.1.0"));
        assert!(settings.is_newer_version("2.0.0"));

        assert!(!settings.is_newer_version("1.0.0"));
        assert!(!settings.is_newer_version("0.9.9"));
    }
}
