use anyhow::{Context, Result};
use clap::ArgMatches;
use log::{debug, info};
use mediamtx_client::common::file_utils::{ensure_output_directory, generate_timestamped_filename};
use mediamtx_client::common::timestamp_utils::current_numeric_timestamp;
use mediamtx_client::config_loader::MasterConfig;
use mediamtx_client::{MediamtxClient, SaveConfigAsYmlOptions};
use std::path::PathBuf;
use std::time::Instant;

/// Explicit files on the command line win, then `client.persistent_config`,
/// then a single timestamped file in `application.output_directory`.
pub fn options_from_args(master_config: &MasterConfig, args: &ArgMatches) -> Result<SaveConfigAsYmlOptions> {
    let ignore_rpi_camera = args.get_flag("ignore-rpi-camera");
    let global_file = args.get_one::<String>("global-file").map(PathBuf::from);
    let paths_file = args.get_one::<String>("paths-file").map(PathBuf::from);

    let mut options = if let Some(file) = args.get_one::<String>("unique-file") {
        SaveConfigAsYmlOptions::unique_file(file)
    } else if global_file.is_some() || paths_file.is_some() {
        SaveConfigAsYmlOptions {
            save_global_config: global_file.is_some(),
            save_paths_config: paths_file.is_some(),
            global_config_output_file_path: global_file,
            paths_output_file_path: paths_file,
            ..Default::default()
        }
    } else if let Some(persistent) = &master_config.client.persistent_config {
        debug!("Using client.persistent_config for export");
        persistent.clone()
    } else {
        let dir = ensure_output_directory(&master_config.app_settings.output_directory)
            .context("Failed to prepare output directory for export 📂")?;
        let filename = generate_timestamped_filename("mediamtx", &current_numeric_timestamp(), "yml");
        SaveConfigAsYmlOptions::unique_file(dir.join(filename))
    };

    options.ignore_rpi_camera |= ignore_rpi_camera;
    Ok(options)
}

pub async fn handle_export_yaml_cli(
    master_config: &MasterConfig,
    client: &MediamtxClient,
    args: &ArgMatches,
) -> Result<()> {
    let start_time = Instant::now();
    let options = options_from_args(master_config, args)?;
    let written = client
        .save_config_as_yml(Some(&options))
        .await
        .context("Failed to export configuration as YAML")?;
    for path in &written {
        println!("{}", path.display());
    }
    info!("📦 Exported {} file(s) in {:?}", written.len(), start_time.elapsed());
    Ok(())
}
