//! Typed client for the MediaMTX v3 control API.
//!
//! Covers live paths, recordings, global/path-default/per-path configuration
//! and the playback server's segment listing, and can snapshot the running
//! configuration to YAML files.

pub mod api;
pub mod app_config;
pub mod client_config;
pub mod common;
pub mod config_loader;
pub mod errors;
pub mod yaml_export;

pub use api::types::{
    GlobalConfig, Page, Pagination, PathConfig, PlaybackItem, RecordingItem, RecordingSegment, StreamItem,
};
pub use api::MediamtxClient;
pub use client_config::{BasicAuth, MediamtxConfig};
pub use errors::MtxError;
pub use yaml_export::SaveConfigAsYmlOptions;
