mod cli;
mod logging_setup;
mod operations;

use anyhow::{bail, Context, Result};
use log::{debug, error, info};
use mediamtx_client::config_loader::{self, DEFAULT_CONFIG_PATH};
use mediamtx_client::MediamtxClient;
use operations::{config_op, export_op, recording_op, stream_op};
use std::time::Instant;

#[tokio::main]
async fn main() -> Result<()> {
    let main_start_time = Instant::now();
    // Parse CLI arguments early for potential use in logging or config path
    let matches = cli::build_cli().get_matches();

    let config_path = matches
        .get_one::<String>("config")
        .map(|s| s.as_str())
        .unwrap_or(DEFAULT_CONFIG_PATH);

    let config_load_start_time = Instant::now();
    let master_config = match config_loader::load_config(config_path) {
        Ok(cfg) => {
            logging_setup::initialize_logging(Some(&cfg), &matches);
            info!("✅ Configuration loaded from: {} in {:?}", config_path, config_load_start_time.elapsed());
            cfg
        }
        Err(e) => {
            logging_setup::initialize_logging(None, &matches);
            error!("❌ Failed to load configuration from '{}': {:#}. Exiting.", config_path, e);
            return Err(e.context(format!("Failed to load configuration from '{}'", config_path)));
        }
    };

    let client = MediamtxClient::new(master_config.client.clone())
        .context("Failed to initialize MediaMTX client")?;
    debug!("🔌 Client ready for {}", client.base_url());

    let Some((operation_name, args)) = matches.subcommand() else {
        info!("🤔 No subcommand provided. Run with --help to see the available commands.");
        return Ok(());
    };

    debug!("🎬 Dispatching to subcommand: {}", operation_name);
    let op_start_time = Instant::now();

    let op_result: Result<()> = match operation_name {
        "list-streams" => stream_op::handle_list_streams_cli(&master_config, &client, args).await,
        "get-stream" => stream_op::handle_get_stream_cli(&client, args).await,
        "list-recordings" => recording_op::handle_list_recordings_cli(&master_config, &client, args).await,
        "get-recordings" => recording_op::handle_get_recordings_cli(&client, args).await,
        "delete-recording" => recording_op::handle_delete_recording_cli(&client, args).await,
        "playback-list" => recording_op::handle_playback_list_cli(&client, args).await,
        "get-global" => config_op::handle_get_global_cli(&client).await,
        "patch-global" => config_op::handle_patch_global_cli(&client, args).await,
        "get-path-defaults" => config_op::handle_get_path_defaults_cli(&client).await,
        "patch-path-defaults" => config_op::handle_patch_path_defaults_cli(&client, args).await,
        "list-path-configs" => config_op::handle_list_path_configs_cli(&master_config, &client, args).await,
        "get-path-config" => config_op::handle_get_path_config_cli(&client, args).await,
        "add-path" => config_op::handle_add_path_cli(&client, args).await,
        "update-path" => config_op::handle_update_path_cli(&client, args).await,
        "delete-path" => config_op::handle_delete_path_cli(&client, args).await,
        "export-yaml" => export_op::handle_export_yaml_cli(&master_config, &client, args).await,
        other => bail!("Subcommand '{}' not implemented.", other),
    };

    if let Err(e) = op_result {
        error!("❌ Operation '{}' failed after {:?}: {:#}", operation_name, op_start_time.elapsed(), e);
        return Err(e);
    }
    info!("✅ Operation '{}' completed successfully in {:?}.", operation_name, op_start_time.elapsed());

    debug!("🏁 mtxctl finished in {:?}.", main_start_time.elapsed());
    Ok(())
}
