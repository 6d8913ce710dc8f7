use crate::app_config::ApplicationConfig;
use crate::client_config::{BasicAuth, MediamtxConfig};
use anyhow::{bail, Context, Result};
use log::{debug, info, warn};
use reqwest::Url;
use serde::Deserialize;
use std::env;
use std::fs;
use std::time::Instant;

pub const DEFAULT_CONFIG_PATH: &str = "config/mtxctl.yaml";
pub const API_PASSWORD_ENV: &str = "MEDIAMTX_PASSWORD";
pub const PLAYBACK_PASSWORD_ENV: &str = "MEDIAMTX_PLAYBACK_PASSWORD";

#[derive(Debug, Deserialize, Clone)]
pub struct MasterConfig {
    #[serde(rename = "application", default)]
    pub app_settings: ApplicationConfig,
    pub client: MediamtxConfig,
}

pub fn load_config(path: &str) -> Result<MasterConfig> {
    debug!("📄 Attempting to load config from: {}", path);
    let start_time = Instant::now();

    let config_str = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file '{}'. 📖", path))?;
    debug!("Read config file in {:?}", start_time.elapsed());

    let mut config = parse_config(&config_str)
        .with_context(|| format!("Failed to parse YAML configuration from '{}'. 💔", path))?;

    fill_missing_passwords(&mut config.client, |name| env::var(name).ok());

    validate_master_config(&config).with_context(|| "Master configuration validation failed 👎")?;

    info!("✅ Successfully loaded and validated configuration from '{}' in {:?}", path, start_time.elapsed());
    Ok(config)
}

pub fn parse_config(config_str: &str) -> Result<MasterConfig> {
    let parse_start_time = Instant::now();
    let config: MasterConfig = serde_yaml::from_str(config_str)?;
    debug!("Parsed YAML in {:?}", parse_start_time.elapsed());
    Ok(config)
}

/// Passwords left out of the file are taken from the environment.
pub fn fill_missing_passwords<F>(client: &mut MediamtxConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    fill_password(client.auth.as_mut(), API_PASSWORD_ENV, &lookup);
    fill_password(client.playback_auth.as_mut(), PLAYBACK_PASSWORD_ENV, &lookup);
}

fn fill_password<F>(auth: Option<&mut BasicAuth>, env_var_name: &str, lookup: &F)
where
    F: Fn(&str) -> Option<String>,
{
    let Some(auth) = auth else { return };
    if !auth.password.is_empty() {
        return;
    }
    match lookup(env_var_name) {
        Some(password) => auth.password = password,
        None => warn!(
            "Password for user '{}' not set in config nor in environment variable '{}'",
            auth.username, env_var_name
        ),
    }
}

pub fn validate_master_config(config: &MasterConfig) -> Result<()> {
    debug!("🕵️ Validating master configuration...");
    let validation_start_time = Instant::now();

    if config.app_settings.output_directory.is_empty() {
        bail!("❌ Application output_directory cannot be empty.");
    }
    if config.app_settings.items_per_page == 0 {
        bail!("❌ Application items_per_page must be greater than zero.");
    }

    validate_base_url("client.base_url", &config.client.base_url)?;
    if let Some(url) = &config.client.playback_server_base_url {
        validate_base_url("client.playback_server_base_url", url)?;
    }

    for (label, auth) in [("auth", &config.client.auth), ("playback_auth", &config.client.playback_auth)] {
        if let Some(auth) = auth {
            if auth.username.is_empty() {
                bail!("❌ client.{}.username cannot be empty.", label);
            }
        }
    }

    for name in config.client.headers.keys() {
        if name.trim().is_empty() {
            bail!("❌ client.headers contains an empty header name.");
        }
    }

    if let Some(options) = &config.client.persistent_config {
        options
            .validate()
            .context("❌ client.persistent_config is inconsistent")?;
    }

    info!("👍 Master configuration validated successfully in {:?}.", validation_start_time.elapsed());
    Ok(())
}

fn validate_base_url(label: &str, url: &str) -> Result<()> {
    if url.is_empty() {
        bail!("❌ {} cannot be empty.", label);
    }
    let parsed = Url::parse(url).with_context(|| format!("❌ Invalid URL '{}' for {}.", url, label))?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        bail!("❌ {} must be an http(s) URL, got '{}'.", label, url);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"
application:
  log_level: debug
  output_directory: ./snapshots
client:
  base_url: http://127.0.0.1:9997
  auth:
    username: admin
  playback_server_base_url: http://127.0.0.1:9996
  playback_auth:
    username: viewer
    password: inline
"#;

    #[test]
    fn test_parse_and_validate_sample() {
        let config = parse_config(SAMPLE).unwrap();
        assert_eq!(config.app_settings.log_level.as_deref(), Some("debug"));
        assert_eq!(config.app_settings.items_per_page, 10);
        validate_master_config(&config).unwrap();
    }

    #[test]
    fn test_shipped_config_is_valid() {
        let config = parse_config(include_str!("../config/mtxctl.yaml")).unwrap();
        validate_master_config(&config).unwrap();
        assert!(config.client.persistent_config.is_none());
    }

    #[test]
    fn test_application_section_is_optional() {
        let config = parse_config("client:\n  base_url: http://localhost:9997\n").unwrap();
        assert_eq!(config.app_settings.output_directory, "./output");
        validate_master_config(&config).unwrap();
    }

    #[test]
    fn test_fill_missing_passwords_only_when_empty() {
        let mut config = parse_config(SAMPLE).unwrap();
        fill_missing_passwords(&mut config.client, |name| match name {
            API_PASSWORD_ENV => Some("from-env".to_string()),
            PLAYBACK_PASSWORD_ENV => Some("ignored".to_string()),
            _ => None,
        });
        assert_eq!(config.client.auth.unwrap().password, "from-env");
        assert_eq!(config.client.playback_auth.unwrap().password, "inline");
    }

    #[test]
    fn test_validate_rejects_non_http_url() {
        let config = parse_config("client:\n  base_url: rtsp://localhost:8554\n").unwrap();
        let err = validate_master_config(&config).unwrap_err();
        assert!(format!("{:#}", err).contains("http(s)"));
    }

    #[test]
    fn test_validate_rejects_zero_page_size() {
        let config = parse_config(
            "application:\n  items_per_page: 0\nclient:\n  base_url: http://localhost:9997\n",
        )
        .unwrap();
        assert!(validate_master_config(&config).is_err());
    }

    #[test]
    fn test_validate_rejects_incoherent_persistence() {
        let yaml = r#"
client:
  base_url: http://localhost:9997
  persistent_config:
    save_paths_config: true
"#;
        let config = parse_config(yaml).unwrap();
        let err = validate_master_config(&config).unwrap_err();
        assert!(format!("{:#}", err).contains("paths_output_file_path"));
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let config = load_config(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.client.base_url, "http://127.0.0.1:9997");

        let err = load_config("/definitely/not/here.yaml").unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to read configuration file"));
    }
}
