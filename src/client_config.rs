use crate::yaml_export::SaveConfigAsYmlOptions;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicAuth {
    pub username: String,
    #[serde(default)]
    pub password: String, // may be filled from the environment by the config loader
}

impl BasicAuth {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Connection settings for a MediaMTX control API (and optionally its playback server).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MediamtxConfig {
    pub base_url: String,
    pub timeout_ms: Option<u64>,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    pub auth: Option<BasicAuth>,
    pub playback_server_base_url: Option<String>,
    pub playback_auth: Option<BasicAuth>,
    /// When set, every configuration mutation is followed by a YAML snapshot.
    pub persistent_config: Option<SaveConfigAsYmlOptions>,
}

impl MediamtxConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_auth(mut self, auth: BasicAuth) -> Self {
        self.auth = Some(auth);
        self
    }

    pub fn with_playback_server(mut self, base_url: impl Into<String>, auth: Option<BasicAuth>) -> Self {
        self.playback_server_base_url = Some(base_url.into());
        self.playback_auth = auth;
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = Some(timeout.as_millis() as u64);
        self
    }

    pub fn with_persistent_config(mut self, options: SaveConfigAsYmlOptions) -> Self {
        self.persistent_config = Some(options);
        self
    }

    /// A missing or zero `timeout_ms` means the default.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms.filter(|&ms| ms > 0).unwrap_or(DEFAULT_TIMEOUT_MS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_defaults_to_five_seconds() {
        let config = MediamtxConfig::new("http://localhost:9997");
        assert_eq!(config.timeout(), Duration::from_millis(5000));

        let config = config.with_timeout(Duration::from_secs(2));
        assert_eq!(config.timeout_ms, Some(2000));
    }

    #[test]
    fn test_zero_timeout_falls_back_to_default() {
        let mut config = MediamtxConfig::new("http://localhost:9997");
        config.timeout_ms = Some(0);
        assert_eq!(config.timeout(), Duration::from_millis(DEFAULT_TIMEOUT_MS));

        let config: MediamtxConfig = serde_yaml::from_str("base_url: http://mtx:9997\ntimeout_ms: 0\n").unwrap();
        assert_eq!(config.timeout(), Duration::from_millis(5000));
    }

    #[test]
    fn test_deserialize_minimal_yaml() {
        let yaml = "base_url: http://127.0.0.1:9997\n";
        let config: MediamtxConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:9997");
        assert!(config.headers.is_empty());
        assert!(config.auth.is_none());
        assert!(config.playback_server_base_url.is_none());
        assert!(config.persistent_config.is_none());
    }

    #[test]
    fn test_deserialize_full_yaml() {
        let yaml = r#"
base_url: http://mtx:9997
timeout_ms: 1500
headers:
  X-Request-Source: mtxctl
auth:
  username: admin
  password: secret
playback_server_base_url: http://mtx:9996
playback_auth:
  username: viewer
persistent_config:
  save_global_config: true
  save_paths_config: true
  save_as_unique_file: true
  output_file_path: /etc/mediamtx/mediamtx.yml
"#;
        let config: MediamtxConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.timeout(), Duration::from_millis(1500));
        assert_eq!(config.headers.get("X-Request-Source").map(String::as_str), Some("mtxctl"));
        assert_eq!(config.auth, Some(BasicAuth::new("admin", "secret")));
        assert_eq!(config.playback_auth.as_ref().map(|a| a.password.as_str()), Some(""));
        let persist = config.persistent_config.unwrap();
        assert!(persist.save_as_unique_file);
        assert!(!persist.ignore_rpi_camera);
    }
}
