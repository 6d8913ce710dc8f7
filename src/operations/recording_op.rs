use crate::operations::op_helper::{pagination_from_args, parse_timestamp_arg, print_json, required_arg};
use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;
use mediamtx_client::config_loader::MasterConfig;
use mediamtx_client::MediamtxClient;

pub async fn handle_list_recordings_cli(
    master_config: &MasterConfig,
    client: &MediamtxClient,
    args: &ArgMatches,
) -> Result<()> {
    let page = client
        .recording_list(pagination_from_args(master_config, args))
        .await
        .context("Failed to list recordings")?;
    info!("🎞️ {} recorded paths listed ({} total)", page.items.len(), page.item_count);
    print_json(&page)
}

pub async fn handle_get_recordings_cli(client: &MediamtxClient, args: &ArgMatches) -> Result<()> {
    let name = required_arg(args, "name")?;
    let recording = client
        .recording_list_for_path(name)
        .await
        .with_context(|| format!("Failed to list recordings of '{}'", name))?;
    info!("🎞️ '{}' has {} segments", recording.name, recording.segments.len());
    print_json(&recording)
}

pub async fn handle_delete_recording_cli(client: &MediamtxClient, args: &ArgMatches) -> Result<()> {
    let name = required_arg(args, "name")?;
    let start = required_arg(args, "start")?;
    client
        .delete_recording(name, start)
        .await
        .with_context(|| format!("Failed to delete segment '{}' of '{}'", start, name))?;
    info!("🗑️ Deleted segment '{}' of '{}'", start, name);
    Ok(())
}

pub async fn handle_playback_list_cli(client: &MediamtxClient, args: &ArgMatches) -> Result<()> {
    let name = required_arg(args, "name")?;
    let start = parse_timestamp_arg(args, "start")?;
    let end = parse_timestamp_arg(args, "end")?;
    let items = client
        .get_recording_segmentation_from_playback_server_by_path(name, start, end)
        .await
        .with_context(|| format!("Failed to list playback segments of '{}'", name))?;
    info!("▶️ {} playable spans for '{}'", items.len(), name);
    print_json(&items)
}
