//! MediaMTX v3 API Types
//!
//! JSON shapes exchanged with the control API and the playback server.
//! Config documents keep every key they do not model in `extra`, so a
//! value read from the server can be written back (or exported) intact.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

pub const DEFAULT_ITEMS_PER_PAGE: u64 = 10;

/// `page` / `itemsPerPage` query parameters of the list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u64,
    pub items_per_page: u64,
}

impl Pagination {
    pub fn new(page: u64, items_per_page: u64) -> Self {
        Self { page, items_per_page }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 0,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

/// Paginated list wrapper returned by every `/list` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default)]
    pub page_count: u64,
    #[serde(default)]
    pub item_count: u64,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamSource {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamReader {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub id: String,
}

/// A live path as reported by `/v3/paths/*`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamItem {
    pub name: String,
    #[serde(default)]
    pub conf_name: String,
    #[serde(default)]
    pub source: Option<StreamSource>,
    #[serde(default)]
    pub ready: bool,
    #[serde(default)]
    pub ready_time: Option<String>,
    #[serde(default)]
    pub tracks: Vec<String>,
    #[serde(default)]
    pub bytes_received: u64,
    #[serde(default)]
    pub bytes_sent: u64,
    #[serde(default)]
    pub readers: Vec<StreamReader>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordingSegment {
    pub start: String, // e.g. 2025-02-08T19:39:11.768623Z, kept verbatim for deletesegment
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordingItem {
    pub name: String,
    #[serde(default)]
    pub segments: Vec<RecordingSegment>,
}

/// A recorded span as listed by the playback server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackItem {
    pub start: String,
    pub duration: f64, // seconds
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthPermission {
    pub action: String,
    #[serde(default)]
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthInternalUser {
    pub user: String,
    #[serde(default)]
    pub pass: String,
    #[serde(default)]
    pub ips: Vec<String>,
    #[serde(default)]
    pub permissions: Vec<AuthPermission>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebrtcIceServer {
    pub url: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub client_only: bool,
}

/// Server-wide settings (`/v3/config/global/*`).
///
/// Every field is optional so the same type doubles as a PATCH body: only
/// the fields that are set get serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalConfig {
    // General
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_destinations: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_timeout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_timeout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_queue_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub udp_max_payload_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_on_connect: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_on_connect_restart: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_on_disconnect: Option<String>,

    // Authentication
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_internal_users: Option<Vec<AuthInternalUser>>,
    #[serde(rename = "authHTTPAddress", skip_serializing_if = "Option::is_none")]
    pub auth_http_address: Option<String>,
    #[serde(rename = "authHTTPExclude", skip_serializing_if = "Option::is_none")]
    pub auth_http_exclude: Option<Vec<AuthPermission>>,
    #[serde(rename = "authJWTJWKS", skip_serializing_if = "Option::is_none")]
    pub auth_jwt_jwks: Option<String>,
    #[serde(rename = "authJWTClaimKey", skip_serializing_if = "Option::is_none")]
    pub auth_jwt_claim_key: Option<String>,

    // Control API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_encryption: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_server_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_server_cert: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_allow_origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_trusted_proxies: Option<Vec<String>>,

    // Metrics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics_encryption: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics_server_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics_server_cert: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics_allow_origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics_trusted_proxies: Option<Vec<String>>,

    // pprof
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pprof: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pprof_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pprof_encryption: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pprof_server_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pprof_server_cert: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pprof_allow_origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pprof_trusted_proxies: Option<Vec<String>>,

    // Playback server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playback: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playback_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playback_encryption: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playback_server_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playback_server_cert: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playback_allow_origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playback_trusted_proxies: Option<Vec<String>>,

    // RTSP
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rtsp: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rtsp_transports: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rtsp_encryption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rtsp_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rtsps_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rtp_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rtcp_address: Option<String>,
    #[serde(rename = "multicastIPRange", skip_serializing_if = "Option::is_none")]
    pub multicast_ip_range: Option<String>,
    #[serde(rename = "multicastRTPPort", skip_serializing_if = "Option::is_none")]
    pub multicast_rtp_port: Option<u16>,
    #[serde(rename = "multicastRTCPPort", skip_serializing_if = "Option::is_none")]
    pub multicast_rtcp_port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rtsp_server_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rtsp_server_cert: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rtsp_auth_methods: Option<Vec<String>>,

    // RTMP
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rtmp: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rtmp_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rtmp_encryption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rtmps_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rtmp_server_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rtmp_server_cert: Option<String>,

    // HLS
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hls: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hls_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hls_encryption: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hls_server_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hls_server_cert: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hls_allow_origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hls_trusted_proxies: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hls_always_remux: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hls_variant: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hls_segment_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hls_segment_duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hls_part_duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hls_segment_max_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hls_directory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hls_muxer_close_after: Option<String>,

    // WebRTC
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webrtc: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webrtc_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webrtc_encryption: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webrtc_server_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webrtc_server_cert: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webrtc_allow_origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webrtc_trusted_proxies: Option<Vec<String>>,
    #[serde(rename = "webrtcLocalUDPAddress", skip_serializing_if = "Option::is_none")]
    pub webrtc_local_udp_address: Option<String>,
    #[serde(rename = "webrtcLocalTCPAddress", skip_serializing_if = "Option::is_none")]
    pub webrtc_local_tcp_address: Option<String>,
    #[serde(rename = "webrtcIPsFromInterfaces", skip_serializing_if = "Option::is_none")]
    pub webrtc_ips_from_interfaces: Option<bool>,
    #[serde(rename = "webrtcIPsFromInterfacesList", skip_serializing_if = "Option::is_none")]
    pub webrtc_ips_from_interfaces_list: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webrtc_additional_hosts: Option<Vec<String>>,
    #[serde(rename = "webrtcICEServers2", skip_serializing_if = "Option::is_none")]
    pub webrtc_ice_servers2: Option<Vec<WebrtcIceServer>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webrtc_handshake_timeout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webrtc_track_gather_timeout: Option<String>,
    #[serde(rename = "webrtcSTUNGatherTimeout", skip_serializing_if = "Option::is_none")]
    pub webrtc_stun_gather_timeout: Option<String>,

    // SRT
    #[serde(skip_serializing_if = "Option::is_none")]
    pub srt: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub srt_address: Option<String>,

    /// Keys returned by the server that are not modelled above.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Settings of a single path (`/v3/config/paths/*`) or of the path defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    // Source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_fingerprint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_on_demand: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_on_demand_start_timeout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_on_demand_close_after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_readers: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub srt_read_passphrase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,

    // Recording
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_part_duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_segment_duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_delete_after: Option<String>,

    // Publisher / RTSP source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_publisher: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub srt_publish_passphrase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rtsp_transport: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rtsp_any_port: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rtsp_range_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rtsp_range_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_redirect: Option<String>,

    // Raspberry Pi camera
    #[serde(rename = "rpiCameraCamID", skip_serializing_if = "Option::is_none")]
    pub rpi_camera_cam_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpi_camera_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpi_camera_height: Option<u32>,
    #[serde(rename = "rpiCameraHFlip", skip_serializing_if = "Option::is_none")]
    pub rpi_camera_h_flip: Option<bool>,
    #[serde(rename = "rpiCameraVFlip", skip_serializing_if = "Option::is_none")]
    pub rpi_camera_v_flip: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpi_camera_brightness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpi_camera_contrast: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpi_camera_saturation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpi_camera_sharpness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpi_camera_exposure: Option<String>,
    #[serde(rename = "rpiCameraAWB", skip_serializing_if = "Option::is_none")]
    pub rpi_camera_awb: Option<String>,
    #[serde(rename = "rpiCameraAWBGains", skip_serializing_if = "Option::is_none")]
    pub rpi_camera_awb_gains: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpi_camera_denoise: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpi_camera_shutter: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpi_camera_metering: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpi_camera_gain: Option<f64>,
    #[serde(rename = "rpiCameraEV", skip_serializing_if = "Option::is_none")]
    pub rpi_camera_ev: Option<f64>,
    #[serde(rename = "rpiCameraROI", skip_serializing_if = "Option::is_none")]
    pub rpi_camera_roi: Option<String>,
    #[serde(rename = "rpiCameraHDR", skip_serializing_if = "Option::is_none")]
    pub rpi_camera_hdr: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpi_camera_tuning_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpi_camera_mode: Option<String>,
    #[serde(rename = "rpiCameraFPS", skip_serializing_if = "Option::is_none")]
    pub rpi_camera_fps: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpi_camera_af_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpi_camera_af_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpi_camera_af_speed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpi_camera_lens_position: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpi_camera_af_window: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpi_camera_flicker_period: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpi_camera_text_overlay_enable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpi_camera_text_overlay: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpi_camera_codec: Option<String>,
    #[serde(rename = "rpiCameraIDRPeriod", skip_serializing_if = "Option::is_none")]
    pub rpi_camera_idr_period: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpi_camera_bitrate: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpi_camera_profile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpi_camera_level: Option<String>,

    // Hooks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_on_init: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_on_init_restart: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_on_demand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_on_demand_restart: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_on_demand_start_timeout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_on_demand_close_after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_on_un_demand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_on_ready: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_on_ready_restart: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_on_not_ready: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_on_read: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_on_read_restart: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_on_unread: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_on_record_segment_create: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_on_record_segment_complete: Option<String>,

    /// Keys returned by the server that are not modelled above.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl PathConfig {
    pub fn with_source(source: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_default_and_query_keys() {
        let p = Pagination::default();
        assert_eq!(p, Pagination::new(0, 10));
        let json = serde_json::to_value(p).unwrap();
        assert_eq!(json, serde_json::json!({"page": 0, "itemsPerPage": 10}));
    }

    #[test]
    fn test_stream_page_deserialize() {
        let json = r#"{
            "pageCount": 1,
            "itemCount": 1,
            "items": [{
                "name": "cam1",
                "confName": "all_others",
                "source": {"type": "rtspSession", "id": "9f2c"},
                "ready": true,
                "readyTime": "2025-02-08T19:39:11.768623Z",
                "tracks": ["H264", "MPEG-4 Audio"],
                "bytesReceived": 123456,
                "bytesSent": 789,
                "readers": [{"type": "webRTCSession", "id": "a1b2"}]
            }]
        }"#;
        let page: Page<StreamItem> = serde_json::from_str(json).unwrap();
        assert_eq!(page.item_count, 1);
        let item = &page.items[0];
        assert_eq!(item.conf_name, "all_others");
        assert_eq!(item.source.as_ref().unwrap().kind, "rtspSession");
        assert_eq!(item.tracks, vec!["H264", "MPEG-4 Audio"]);
        assert_eq!(item.readers[0].kind, "webRTCSession");
    }

    #[test]
    fn test_stream_not_ready_has_null_source() {
        let json = r#"{"name": "idle", "confName": "idle", "source": null, "ready": false,
            "readyTime": null, "tracks": [], "bytesReceived": 0, "bytesSent": 0, "readers": []}"#;
        let item: StreamItem = serde_json::from_str(json).unwrap();
        assert!(item.source.is_none());
        assert!(item.ready_time.is_none());
        assert!(!item.ready);
    }

    #[test]
    fn test_page_without_items() {
        let page: Page<RecordingItem> = serde_json::from_str(r#"{"pageCount": 0, "itemCount": 0}"#).unwrap();
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_global_config_acronym_keys() {
        let json = r#"{
            "logLevel": "info",
            "authHTTPAddress": "http://auth/",
            "multicastRTPPort": 8002,
            "webrtcICEServers2": [{"url": "stun:stun.l.google.com:19302", "username": "", "password": "", "clientOnly": false}],
            "webrtcSTUNGatherTimeout": "5s",
            "someFutureFlag": true
        }"#;
        let config: GlobalConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.auth_http_address.as_deref(), Some("http://auth/"));
        assert_eq!(config.multicast_rtp_port, Some(8002));
        assert_eq!(config.webrtc_ice_servers2.as_ref().unwrap().len(), 1);
        assert_eq!(config.webrtc_stun_gather_timeout.as_deref(), Some("5s"));
        assert_eq!(config.extra.get("someFutureFlag"), Some(&Value::Bool(true)));

        let back = serde_json::to_value(&config).unwrap();
        assert_eq!(back["authHTTPAddress"], "http://auth/");
        assert_eq!(back["someFutureFlag"], true);
        assert!(back.get("rtsp").is_none());
    }

    #[test]
    fn test_path_config_patch_serializes_only_set_fields() {
        let patch = PathConfig {
            record: Some(true),
            record_delete_after: Some("24h".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({"record": true, "recordDeleteAfter": "24h"}));
    }

    #[test]
    fn test_path_config_rpi_keys() {
        let json = r#"{"name": "picam", "source": "rpiCamera", "rpiCameraCamID": 0,
            "rpiCameraHFlip": true, "rpiCameraAWBGains": [0, 0], "rpiCameraFPS": 30}"#;
        let config: PathConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.rpi_camera_cam_id, Some(0));
        assert_eq!(config.rpi_camera_h_flip, Some(true));
        assert_eq!(config.rpi_camera_awb_gains, Some(vec![0.0, 0.0]));
        assert_eq!(config.rpi_camera_fps, Some(30.0));
        assert!(config.extra.is_empty());
    }

    #[test]
    fn test_playback_items_deserialize() {
        let json = r#"[{"start": "2025-02-08T19:39:11.768623Z", "duration": 60.0,
            "url": "http://localhost:9996/get?path=cam1&start=2025-02-08T19%3A39%3A11.768623Z&duration=60"}]"#;
        let items: Vec<PlaybackItem> = serde_json::from_str(json).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].duration, 60.0);
    }
}
