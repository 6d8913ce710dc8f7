use crate::api::client::MediamtxClient;
use crate::api::types::Pagination;
use crate::common::file_utils::write_text_file;
use crate::errors::MtxError;
use crate::yaml_export::{object_to_yaml, paths_document, unique_file_contents, ExportTarget, SaveConfigAsYmlOptions};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Page size used when exporting; the whole path list is expected in one page.
pub const EXPORT_ITEMS_PER_PAGE: u64 = 1000;

impl MediamtxClient {
    pub async fn get_global_config_as_yml(&self) -> Result<String, MtxError> {
        let global = self.get_global_config().await?;
        object_to_yaml(&global)
    }

    pub async fn get_paths_config_as_yml(&self, ignore_rpi_camera: bool) -> Result<String, MtxError> {
        let page = self
            .get_all_paths_configurations(Pagination::new(0, EXPORT_ITEMS_PER_PAGE))
            .await?;
        if page.page_count > 1 {
            warn!(
                "⚠️ Server reports {} pages of path configurations; only the first {} paths are exported.",
                page.page_count, EXPORT_ITEMS_PER_PAGE
            );
        }
        let document = paths_document(&page.items, ignore_rpi_camera)?;
        object_to_yaml(&document)
    }

    /// Writes the global and/or paths configuration to YAML files.
    ///
    /// Falls back to the client's `persistent_config` when `options` is `None`.
    /// Options are validated before anything is fetched. Returns the files written.
    pub async fn save_config_as_yml(
        &self,
        options: Option<&SaveConfigAsYmlOptions>,
    ) -> Result<Vec<PathBuf>, MtxError> {
        info!("💾 Saving config as yml");
        let start_time = Instant::now();

        let options = options
            .or(self.config().persistent_config.as_ref())
            .ok_or_else(|| MtxError::InvalidOptions("no options provided".to_string()))?;
        let target = options.validate()?;
        debug!("Resolved export target: {:?}", target);

        let (global_yml, paths_yml) = futures::try_join!(
            async {
                if options.save_global_config {
                    self.get_global_config_as_yml().await
                } else {
                    Ok(String::new())
                }
            },
            async {
                if options.save_paths_config {
                    self.get_paths_config_as_yml(options.ignore_rpi_camera).await
                } else {
                    Ok(String::new())
                }
            },
        )?;
        debug!("Fetched configuration documents in {:?}", start_time.elapsed());

        let written = match target {
            ExportTarget::UniqueFile(path) => {
                write_text_file(&path, &unique_file_contents(&global_yml, &paths_yml)).await?;
                info!("✅ Config saved as yml in {}", path.display());
                vec![path]
            }
            ExportTarget::SeparateFiles { global, paths } => {
                futures::try_join!(
                    write_if_requested(paths.as_deref(), &paths_yml),
                    write_if_requested(global.as_deref(), &global_yml),
                )?;
                if let Some(path) = &paths {
                    info!("✅ Paths config saved as yml in {}", path.display());
                }
                if let Some(path) = &global {
                    info!("✅ Global config saved as yml in {}", path.display());
                }
                paths.into_iter().chain(global).collect()
            }
        };

        debug!("YAML export finished in {:?}", start_time.elapsed());
        Ok(written)
    }
}

async fn write_if_requested(path: Option<&Path>, contents: &str) -> Result<(), MtxError> {
    match path {
        Some(path) => write_text_file(path, contents).await,
        None => Ok(()),
    }
}
