use crate::app_config::ApplicationConfig;
use anyhow::{bail, Context, Result};
use log::{debug, info};
use reqwest::Url;
use serde::Deserialize;
use std::fs;
use std::time::Instant;

#[derive(Debug, Deserialize, Clone)]
pub struct MasterConfig {
    #[serde(rename = "application")]
    pub app_settings: ApplicationConfig,
}

pub fn load_config(path: &str) -> Result<MasterConfig> {
    debug!("📄 Attempting to load config from: {}", path);
    let start_time = Instant::now();

    let config_str = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file '{}'", path))?;

    let config: MasterConfig = serde_yaml::from_str(&config_str)
        .with_context(|| format!("Failed to parse YAML configuration from '{}'", path))?;

    validate_master_config(&config).context("Master configuration validation failed")?;

    info!(
        "✅ Successfully loaded and validated configuration from '{}' in {:?}",
        path,
        start_time.elapsed()
    );
    Ok(config)
}

fn validate_master_config(config: &MasterConfig) -> Result<()> {
    debug!("🕵️ Validating master configuration...");

    if config.app_settings.api_base_url.is_empty() {
        bail!("❌ Application api_base_url cannot be empty.");
    }
    match Url::parse(&config.app_settings.api_base_url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => bail!(
            "❌ api_base_url '{}' must use http or https, got '{}'.",
            config.app_settings.api_base_url,
            url.scheme()
        ),
        Err(e) => bail!(
            "❌ Invalid api_base_url '{}': {}.",
            config.app_settings.api_base_url,
            e
        ),
    }

    if config.app_settings.output_directory_base.is_empty() {
        bail!("❌ Application output_directory_base cannot be empty.");
    }
    if config.app_settings.filename_timestamp_format.is_empty() {
        bail!("❌ Application filename_timestamp_format cannot be empty.");
    }

    debug!("👍 Master configuration validated successfully.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_url(url: &str) -> MasterConfig {
        MasterConfig {
            app_settings: ApplicationConfig {
                api_base_url: url.to_string(),
                ..ApplicationConfig::default()
            },
        }
    }

    #[test]
    fn default_application_config_validates() {
        let config = MasterConfig {
            app_settings: ApplicationConfig::default(),
        };
        assert!(validate_master_config(&config).is_ok());
    }

    #[test]
    fn rejects_empty_base_url() {
        assert!(validate_master_config(&config_with_url("")).is_err());
    }

    #[test]
    fn rejects_non_http_base_url() {
        assert!(validate_master_config(&config_with_url("ftp://grabber.local")).is_err());
        assert!(validate_master_config(&config_with_url("not a url")).is_err());
    }

    #[test]
    fn accepts_https_base_url() {
        let config = config_with_url("https://h-grabber-api.research.dmdevelopment.ru");
        assert!(validate_master_config(&config).is_ok());
    }
}
