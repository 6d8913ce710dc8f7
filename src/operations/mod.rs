pub mod config_op;
pub mod export_op;
pub mod op_helper;
pub mod recording_op;
pub mod stream_op;
