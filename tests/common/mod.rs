// Shared helpers for the integration tests: a mock MediaMTX server and
// canned response bodies.
#![allow(dead_code)]

use mediamtx_client::{MediamtxClient, MediamtxConfig};
use serde_json::{json, Value};
use wiremock::MockServer;

pub async fn start_mock_mediamtx() -> MockServer {
    MockServer::start().await
}

pub fn client_for(server: &MockServer) -> MediamtxClient {
    MediamtxClient::new(MediamtxConfig::new(server.uri())).expect("client for mock server")
}

pub fn client_with(config: MediamtxConfig) -> MediamtxClient {
    MediamtxClient::new(config).expect("client for mock server")
}

pub fn stream_json(name: &str) -> Value {
    json!({
        "name": name,
        "confName": name,
        "source": {"type": "rtspSession", "id": "3f1e"},
        "ready": true,
        "readyTime": "2025-02-08T19:39:11.768623Z",
        "tracks": ["H264"],
        "bytesReceived": 1024,
        "bytesSent": 2048,
        "readers": []
    })
}

pub fn global_config_json() -> Value {
    json!({
        "logLevel": "info",
        "logDestinations": ["stdout"],
        "api": true,
        "apiAddress": ":9997",
        "rtsp": true,
        "rtspAddress": ":8554",
        "hls": false
    })
}

pub fn paths_page_json() -> Value {
    json!({
        "pageCount": 1,
        "itemCount": 2,
        "items": [
            {
                "name": "picam",
                "source": "rpiCamera",
                "rpiCameraWidth": 1920,
                "rpiCameraHeight": 1080,
                "record": false
            },
            {
                "name": "cam1",
                "source": "rtsp://10.0.0.2:554/stream",
                "record": true,
                "recordDeleteAfter": "24h"
            }
        ]
    })
}
