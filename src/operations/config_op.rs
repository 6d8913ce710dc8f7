use crate::operations::op_helper::{pagination_from_args, print_json, read_document, required_arg};
use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;
use mediamtx_client::config_loader::MasterConfig;
use mediamtx_client::{GlobalConfig, MediamtxClient, PathConfig};

pub async fn handle_get_global_cli(client: &MediamtxClient) -> Result<()> {
    let global = client
        .get_global_config()
        .await
        .context("Failed to fetch global configuration")?;
    print_json(&global)
}

pub async fn handle_patch_global_cli(client: &MediamtxClient, args: &ArgMatches) -> Result<()> {
    let patch: GlobalConfig = read_document(required_arg(args, "file")?)?;
    client
        .patch_global_config(&patch)
        .await
        .context("Failed to patch global configuration")?;
    info!("🛠️ Global configuration patched");
    Ok(())
}

pub async fn handle_get_path_defaults_cli(client: &MediamtxClient) -> Result<()> {
    let defaults = client
        .get_default_path_configuration()
        .await
        .context("Failed to fetch default path configuration")?;
    print_json(&defaults)
}

pub async fn handle_patch_path_defaults_cli(client: &MediamtxClient, args: &ArgMatches) -> Result<()> {
    let patch: PathConfig = read_document(required_arg(args, "file")?)?;
    client
        .patch_default_path_configuration(&patch)
        .await
        .context("Failed to patch default path configuration")?;
    info!("🛠️ Default path configuration patched");
    Ok(())
}

pub async fn handle_list_path_configs_cli(
    master_config: &MasterConfig,
    client: &MediamtxClient,
    args: &ArgMatches,
) -> Result<()> {
    let page = client
        .get_all_paths_configurations(pagination_from_args(master_config, args))
        .await
        .context("Failed to list path configurations")?;
    info!("🗂️ {} path configurations listed ({} total)", page.items.len(), page.item_count);
    print_json(&page)
}

pub async fn handle_get_path_config_cli(client: &MediamtxClient, args: &ArgMatches) -> Result<()> {
    let name = required_arg(args, "name")?;
    let config = client
        .get_path_configuration(name)
        .await
        .with_context(|| format!("Failed to fetch configuration of path '{}'", name))?;
    print_json(&config)
}

pub async fn handle_add_path_cli(client: &MediamtxClient, args: &ArgMatches) -> Result<()> {
    let name = required_arg(args, "name")?;
    let body: PathConfig = read_document(required_arg(args, "file")?)?;
    client
        .create_new_streaming_path(name, &body)
        .await
        .with_context(|| format!("Failed to add path '{}'", name))?;
    info!("➕ Path '{}' added", name);
    Ok(())
}

pub async fn handle_update_path_cli(client: &MediamtxClient, args: &ArgMatches) -> Result<()> {
    let name = required_arg(args, "name")?;
    let body: PathConfig = read_document(required_arg(args, "file")?)?;
    client
        .update_streaming_path_config(name, &body)
        .await
        .with_context(|| format!("Failed to update path '{}'", name))?;
    info!("🛠️ Path '{}' updated", name);
    Ok(())
}

pub async fn handle_delete_path_cli(client: &MediamtxClient, args: &ArgMatches) -> Result<()> {
    let name = required_arg(args, "name")?;
    client
        .delete_streaming_path(name)
        .await
        .with_context(|| format!("Failed to delete path '{}'", name))?;
    info!("➖ Path '{}' deleted", name);
    Ok(())
}
