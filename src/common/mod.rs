pub mod file_utils;
pub mod timestamp_utils;
