use crate::errors::MtxError;
use log::debug;
use std::path::{Path, PathBuf};

pub fn generate_timestamped_filename(
    base_name: &str, // e.g. "mediamtx"
    timestamp: &str, // e.g. from timestamp_utils::current_numeric_timestamp
    extension: &str, // e.g. "yml"
) -> String {
    format!("{}_{}.{}", base_name, timestamp, extension)
}

pub fn ensure_output_directory(dir_path_str: &str) -> Result<PathBuf, MtxError> {
    let dir_path = PathBuf::from(dir_path_str);
    if !dir_path.exists() {
        debug!("Output directory '{}' does not exist, attempting to create it.", dir_path.display());
        std::fs::create_dir_all(&dir_path).map_err(|e| {
            MtxError::Io(format!(
                "Failed to create output directory '{}': {}",
                dir_path.display(),
                e
            ))
        })?;
    } else if !dir_path.is_dir() {
        return Err(MtxError::Io(format!(
            "Output path '{}' exists but is not a directory.",
            dir_path.display()
        )));
    }
    Ok(dir_path)
}

/// Writes UTF-8 text, replacing the file if it exists.
pub async fn write_text_file(path: &Path, contents: &str) -> Result<(), MtxError> {
    debug!("Writing {} bytes to '{}'", contents.len(), path.display());
    tokio::fs::write(path, contents).await.map_err(|e| {
        MtxError::Io(format!("Failed to write '{}': {}", path.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_timestamped_filename() {
        assert_eq!(
            generate_timestamped_filename("mediamtx", "20250208193911768", "yml"),
            "mediamtx_20250208193911768.yml"
        );
    }

    #[test]
    fn test_ensure_output_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a/b");
        let created = ensure_output_directory(nested.to_str().unwrap()).unwrap();
        assert!(created.is_dir());

        let file = tmp.path().join("plain.txt");
        std::fs::write(&file, "x").unwrap();
        let err = ensure_output_directory(file.to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("not a directory"));
    }

    #[tokio::test]
    async fn test_write_text_file_reports_path() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("missing-dir/out.yml");
        let err = write_text_file(&target, "a: 1\n").await.unwrap_err();
        assert!(err.to_string().contains("out.yml"));

        let target = tmp.path().join("out.yml");
        write_text_file(&target, "a: 1\n").await.unwrap();
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "a: 1\n");
    }
}
