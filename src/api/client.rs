//! MediaMTX HTTP Client
//!
//! One method per control API endpoint. Each call builds its URL, query and
//! body, sends it, and decodes the JSON answer.

use crate::api::types::{GlobalConfig, Page, Pagination, PathConfig, PlaybackItem, RecordingItem, StreamItem};
use crate::client_config::{BasicAuth, MediamtxConfig};
use crate::errors::{check_response, MtxError};
use chrono::{DateTime, SecondsFormat, Utc};
use log::debug;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Instant;

/// One base URL, its credentials and the reqwest client that talks to it.
#[derive(Debug, Clone)]
struct Endpoint {
    base_url: String,
    auth: Option<BasicAuth>,
    http: Client,
}

impl Endpoint {
    fn new(base_url: &str, auth: Option<BasicAuth>, config: &MediamtxConfig) -> Result<Self, MtxError> {
        let parsed = Url::parse(base_url)
            .map_err(|e| MtxError::Config(format!("invalid base URL '{}': {}", base_url, e)))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(MtxError::Config(format!(
                "base URL '{}' must use http or https",
                base_url
            )));
        }

        let mut headers = HeaderMap::new();
        for (name, value) in &config.headers {
            headers.insert(HeaderName::from_bytes(name.as_bytes())?, HeaderValue::from_str(value)?);
        }

        let http = Client::builder()
            .timeout(config.timeout())
            .default_headers(headers)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            auth,
            http,
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("➡️ {} {}", method, url);
        let builder = self.http.request(method, url);
        match &self.auth {
            Some(auth) => builder.basic_auth(&auth.username, Some(&auth.password)),
            None => builder,
        }
    }
}

/// Client for the MediaMTX control API and, optionally, its playback server.
#[derive(Debug, Clone)]
pub struct MediamtxClient {
    config: MediamtxConfig,
    api: Endpoint,
    playback: Option<Endpoint>,
}

impl MediamtxClient {
    pub fn new(config: MediamtxConfig) -> Result<Self, MtxError> {
        let api = Endpoint::new(&config.base_url, config.auth.clone(), &config)?;
        let playback = match &config.playback_server_base_url {
            Some(url) => Some(Endpoint::new(url, config.playback_auth.clone(), &config)?),
            None => None,
        };
        Ok(Self { config, api, playback })
    }

    #[must_use]
    pub fn config(&self) -> &MediamtxConfig {
        &self.config
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.api.base_url
    }

    #[must_use]
    pub fn has_playback_server(&self) -> bool {
        self.playback.is_some()
    }

    async fn send(&self, builder: RequestBuilder) -> Result<reqwest::Response, MtxError> {
        let start = Instant::now();
        let response = builder.send().await?;
        debug!("⬅️ {} {} in {:?}", response.status(), response.url(), start.elapsed());
        check_response(response)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, MtxError> {
        let response = self.send(builder).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn execute(&self, builder: RequestBuilder) -> Result<(), MtxError> {
        self.send(builder).await?;
        Ok(())
    }

    /// Snapshot to YAML after a mutation, when a persistent config is set.
    async fn persist_if_configured(&self) -> Result<(), MtxError> {
        if let Some(options) = &self.config.persistent_config {
            self.save_config_as_yml(Some(options)).await?;
        }
        Ok(())
    }

    // --- live paths ---

    pub async fn list_streams(&self, pagination: Pagination) -> Result<Page<StreamItem>, MtxError> {
        self.fetch_json(self.api.request(Method::GET, "/v3/paths/list").query(&pagination))
            .await
    }

    /// `None` when the server does not know the path.
    pub async fn get_stream_by_name(&self, name: &str) -> Result<Option<StreamItem>, MtxError> {
        let builder = self.api.request(Method::GET, &format!("/v3/paths/get/{}", name));
        match self.fetch_json::<StreamItem>(builder).await {
            Ok(item) => Ok(Some(item)),
            Err(e) if e.status() == Some(StatusCode::NOT_FOUND) => {
                debug!("Stream '{}' not found", name);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    // --- recordings ---

    pub async fn recording_list(&self, pagination: Pagination) -> Result<Page<RecordingItem>, MtxError> {
        self.fetch_json(self.api.request(Method::GET, "/v3/recordings/list").query(&pagination))
            .await
    }

    pub async fn recording_list_for_path(&self, path: &str) -> Result<RecordingItem, MtxError> {
        self.fetch_json(self.api.request(Method::GET, &format!("/v3/recordings/get/{}", path)))
            .await
    }

    /// `start` must be the segment start exactly as the server listed it.
    pub async fn delete_recording(&self, path: &str, start: &str) -> Result<(), MtxError> {
        self.execute(
            self.api
                .request(Method::DELETE, "/v3/recordings/deletesegment")
                .query(&[("path", path), ("start", start)]),
        )
        .await
    }

    // --- global configuration ---

    pub async fn get_global_config(&self) -> Result<GlobalConfig, MtxError> {
        self.fetch_json(self.api.request(Method::GET, "/v3/config/global/get"))
            .await
    }

    pub async fn patch_global_config(&self, patch: &GlobalConfig) -> Result<(), MtxError> {
        self.execute(self.api.request(Method::PATCH, "/v3/config/global/patch").json(patch))
            .await?;
        self.persist_if_configured().await
    }

    // --- path defaults ---

    pub async fn get_default_path_configuration(&self) -> Result<PathConfig, MtxError> {
        self.fetch_json(self.api.request(Method::GET, "/v3/config/pathdefaults/get"))
            .await
    }

    pub async fn patch_default_path_configuration(&self, patch: &PathConfig) -> Result<(), MtxError> {
        self.execute(
            self.api
                .request(Method::PATCH, "/v3/config/pathdefaults/patch")
                .json(patch),
        )
        .await?;
        self.persist_if_configured().await
    }

    // --- path configurations ---

    pub async fn get_all_paths_configurations(&self, pagination: Pagination) -> Result<Page<PathConfig>, MtxError> {
        self.fetch_json(self.api.request(Method::GET, "/v3/config/paths/list").query(&pagination))
            .await
    }

    pub async fn get_path_configuration(&self, name: &str) -> Result<PathConfig, MtxError> {
        self.fetch_json(self.api.request(Method::GET, &format!("/v3/config/paths/get/{}", name)))
            .await
    }

    pub async fn create_new_streaming_path(&self, name: &str, body: &PathConfig) -> Result<(), MtxError> {
        self.mutate_path(Method::POST, &format!("/v3/config/paths/add/{}", name), Some(body))
            .await
    }

    pub async fn update_streaming_path_config(&self, name: &str, body: &PathConfig) -> Result<(), MtxError> {
        self.mutate_path(Method::PATCH, &format!("/v3/config/paths/patch/{}", name), Some(body))
            .await
    }

    pub async fn delete_streaming_path(&self, name: &str) -> Result<(), MtxError> {
        self.mutate_path(Method::DELETE, &format!("/v3/config/paths/delete/{}", name), None::<&PathConfig>)
            .await
    }

    async fn mutate_path<B: Serialize + ?Sized>(&self, method: Method, path: &str, body: Option<&B>) -> Result<(), MtxError> {
        let mut builder = self.api.request(method, path);
        if let Some(body) = body {
            builder = builder.json(body);
        }
        self.execute(builder).await?;
        self.persist_if_configured().await
    }

    // --- playback server ---

    /// Recorded spans of `path` between `start` and `end`, from the playback server.
    pub async fn get_recording_segmentation_from_playback_server_by_path(
        &self,
        path: &str,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<Vec<PlaybackItem>, MtxError> {
        let playback = self.playback.as_ref().ok_or(MtxError::PlaybackNotConfigured)?;

        let mut query: Vec<(&str, String)> = vec![("path", path.to_string())];
        if let Some(start) = start {
            query.push(("start", iso_timestamp(start)));
        }
        if let Some(end) = end {
            query.push(("end", iso_timestamp(end)));
        }

        self.fetch_json(playback.request(Method::GET, "/list").query(&query))
            .await
    }
}

/// RFC 3339 in UTC with millisecond precision, e.g. `2025-02-08T19:39:11.768Z`.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
