//! MediaMTX control API client
//!
//! ```no_run
//! use mediamtx_client::{MediamtxClient, MediamtxConfig, Pagination};
//!
//! # async fn example() -> Result<(), mediamtx_client::MtxError> {
//! let client = MediamtxClient::new(MediamtxConfig::new("http://localhost:9997"))?;
//! let streams = client.list_streams(Pagination::default()).await?;
//! for stream in streams.items {
//!     println!("{} ready={}", stream.name, stream.ready);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod persistence;
pub mod types;

pub use client::MediamtxClient;
pub use types::*;
