use crate::api::types::PathConfig;
use crate::errors::MtxError;
use log::warn;
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use std::path::PathBuf;

pub const RPI_CAMERA_KEY_PREFIX: &str = "rpiCamera";

/// Separator between the global and the paths document in single-file mode.
pub const UNIQUE_FILE_SEPARATOR: &str = "\n\n\n";

/// What to export and where, for `MediamtxClient::save_config_as_yml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveConfigAsYmlOptions {
    #[serde(default)]
    pub save_global_config: bool,
    #[serde(default)]
    pub save_paths_config: bool,
    #[serde(default)]
    pub ignore_rpi_camera: bool, // drop rpiCamera* keys from every path
    #[serde(default)]
    pub save_as_unique_file: bool,
    pub output_file_path: Option<PathBuf>,
    pub paths_output_file_path: Option<PathBuf>,
    pub global_config_output_file_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportTarget {
    /// Global and paths documents concatenated into one file.
    UniqueFile(PathBuf),
    /// One file per requested document.
    SeparateFiles {
        global: Option<PathBuf>,
        paths: Option<PathBuf>,
    },
}

impl SaveConfigAsYmlOptions {
    /// Both documents into a single file.
    pub fn unique_file(path: impl Into<PathBuf>) -> Self {
        Self {
            save_global_config: true,
            save_paths_config: true,
            save_as_unique_file: true,
            output_file_path: Some(path.into()),
            ..Default::default()
        }
    }

    /// Both documents, each into its own file.
    pub fn separate_files(global: impl Into<PathBuf>, paths: impl Into<PathBuf>) -> Self {
        Self {
            save_global_config: true,
            save_paths_config: true,
            global_config_output_file_path: Some(global.into()),
            paths_output_file_path: Some(paths.into()),
            ..Default::default()
        }
    }

    pub fn ignoring_rpi_camera(mut self) -> Self {
        self.ignore_rpi_camera = true;
        self
    }

    /// Checks the flag/path combination and resolves where each document goes.
    pub fn validate(&self) -> Result<ExportTarget, MtxError> {
        if !self.save_paths_config && !self.save_global_config {
            return Err(MtxError::InvalidOptions(
                "at least one of save_paths_config or save_global_config must be true".to_string(),
            ));
        }

        if self.save_as_unique_file {
            let path = self.output_file_path.clone().ok_or_else(|| {
                MtxError::InvalidOptions("output_file_path is required when save_as_unique_file is set".to_string())
            })?;
            return Ok(ExportTarget::UniqueFile(path));
        }

        if self.save_paths_config && self.paths_output_file_path.is_none() {
            return Err(MtxError::InvalidOptions("paths_output_file_path is required".to_string()));
        }
        if self.save_global_config && self.global_config_output_file_path.is_none() {
            return Err(MtxError::InvalidOptions(
                "global_config_output_file_path is required".to_string(),
            ));
        }

        if self.save_paths_config
            && self.save_global_config
            && self.paths_output_file_path == self.global_config_output_file_path
        {
            return Err(MtxError::InvalidOptions(
                "paths_output_file_path and global_config_output_file_path must differ; use save_as_unique_file to write both into one file".to_string(),
            ));
        }

        Ok(ExportTarget::SeparateFiles {
            global: self
                .global_config_output_file_path
                .clone()
                .filter(|_| self.save_global_config),
            paths: self.paths_output_file_path.clone().filter(|_| self.save_paths_config),
        })
    }
}

/// Renders any serializable document as YAML; a null document renders as "".
pub fn object_to_yaml<T: Serialize>(data: &T) -> Result<String, MtxError> {
    let value = serde_yaml::to_value(data)?;
    if value.is_null() {
        return Ok(String::new());
    }
    Ok(serde_yaml::to_string(&value)?)
}

/// Removes every `rpiCamera*` key from a single path document.
pub fn strip_rpi_camera_keys(value: Value) -> Value {
    match value {
        Value::Mapping(mapping) => Value::Mapping(
            mapping
                .into_iter()
                .filter(|(key, _)| !key.as_str().is_some_and(|k| k.starts_with(RPI_CAMERA_KEY_PREFIX)))
                .collect(),
        ),
        other => other,
    }
}

/// Builds the `paths:` document, keyed by path name in server order.
pub fn paths_document(configs: &[PathConfig], ignore_rpi_camera: bool) -> Result<Value, MtxError> {
    let mut paths = Mapping::new();
    for config in configs {
        let Some(name) = config.name.clone() else {
            warn!("⚠️ Skipping path configuration without a name during YAML export.");
            continue;
        };
        let mut value = serde_yaml::to_value(config)?;
        if ignore_rpi_camera {
            value = strip_rpi_camera_keys(value);
        }
        paths.insert(Value::String(name), value);
    }

    let mut root = Mapping::new();
    root.insert(Value::String("paths".to_string()), Value::Mapping(paths));
    Ok(Value::Mapping(root))
}

/// Joins the two documents the way a single exported file lays them out.
pub fn unique_file_contents(global_yml: &str, paths_yml: &str) -> String {
    format!("{}{}{}", global_yml, UNIQUE_FILE_SEPARATOR, paths_yml)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_something_to_save() {
        let options = SaveConfigAsYmlOptions {
            save_as_unique_file: true,
            output_file_path: Some(PathBuf::from("/tmp/mediamtx.yml")),
            ..Default::default()
        };
        let err = options.validate().unwrap_err();
        assert!(matches!(err, MtxError::InvalidOptions(_)));
        assert!(err.to_string().contains("at least one of"));
    }

    #[test]
    fn test_validate_unique_file() {
        let options = SaveConfigAsYmlOptions::unique_file("/tmp/mediamtx.yml");
        assert_eq!(
            options.validate().unwrap(),
            ExportTarget::UniqueFile(PathBuf::from("/tmp/mediamtx.yml"))
        );

        let missing = SaveConfigAsYmlOptions {
            output_file_path: None,
            ..options
        };
        assert!(missing.validate().is_err());
    }

    #[test]
    fn test_validate_separate_files_requires_each_path() {
        let options = SaveConfigAsYmlOptions {
            save_paths_config: true,
            ..Default::default()
        };
        assert!(options.validate().unwrap_err().to_string().contains("paths_output_file_path"));

        let options = SaveConfigAsYmlOptions {
            save_global_config: true,
            paths_output_file_path: Some(PathBuf::from("paths.yml")),
            ..Default::default()
        };
        assert!(options
            .validate()
            .unwrap_err()
            .to_string()
            .contains("global_config_output_file_path"));
    }

    #[test]
    fn test_validate_rejects_same_file_for_both_documents() {
        let options = SaveConfigAsYmlOptions::separate_files("mediamtx.yml", "mediamtx.yml");
        let err = options.validate().unwrap_err();
        assert!(matches!(err, MtxError::InvalidOptions(_)));
        assert!(err.to_string().contains("save_as_unique_file"));
    }

    #[test]
    fn test_validate_separate_files_ignores_unrequested_path() {
        let options = SaveConfigAsYmlOptions {
            save_global_config: true,
            global_config_output_file_path: Some(PathBuf::from("global.yml")),
            paths_output_file_path: Some(PathBuf::from("paths.yml")),
            ..Default::default()
        };
        assert_eq!(
            options.validate().unwrap(),
            ExportTarget::SeparateFiles {
                global: Some(PathBuf::from("global.yml")),
                paths: None,
            }
        );
    }

    #[test]
    fn test_object_to_yaml_null_is_empty() {
        assert_eq!(object_to_yaml(&Option::<PathConfig>::None).unwrap(), "");
        let yml = object_to_yaml(&PathConfig::with_source("publisher")).unwrap();
        assert_eq!(yml, "source: publisher\n");
    }

    #[test]
    fn test_paths_document_strips_rpi_camera() {
        let configs = vec![
            PathConfig {
                name: Some("picam".to_string()),
                source: Some("rpiCamera".to_string()),
                rpi_camera_width: Some(1920),
                rpi_camera_h_flip: Some(true),
                ..Default::default()
            },
            PathConfig {
                name: Some("cam1".to_string()),
                extra: [("rpiCameraAfPause".to_string(), serde_json::json!("never"))]
                    .into_iter()
                    .collect(),
                source: Some("rtsp://10.0.0.2/stream".to_string()),
                ..Default::default()
            },
        ];

        let kept = serde_yaml::to_string(&paths_document(&configs, false).unwrap()).unwrap();
        assert!(kept.contains("rpiCameraWidth: 1920"));
        assert!(kept.contains("rpiCameraAfPause: never"));

        let doc = paths_document(&configs, true).unwrap();
        let yml = serde_yaml::to_string(&doc).unwrap();
        assert!(!yml.contains("rpiCamera"));
        // The source value is not a key and survives.
        assert_eq!(doc["paths"]["picam"]["source"], Value::String("rpiCamera".to_string()));
        assert_eq!(doc["paths"]["cam1"]["name"], Value::String("cam1".to_string()));
        // Server order is kept.
        assert!(yml.find("picam:").unwrap() < yml.find("cam1:").unwrap());
    }

    #[test]
    fn test_paths_document_empty_and_nameless() {
        let doc = paths_document(&[PathConfig::with_source("publisher")], false).unwrap();
        assert_eq!(serde_yaml::to_string(&doc).unwrap(), "paths: {}\n");
    }

    #[test]
    fn test_unique_file_contents() {
        assert_eq!(unique_file_contents("a: 1\n", "paths: {}\n"), "a: 1\n\n\n\npaths: {}\n");
    }
}
